use ct_codecs::{Base64, Encoder};

use super::dto::CreatePoderRequestDTO;
use crate::model::poder::{Party, PoderData};
use crate::provider::signing::dto::{Document, EnvelopeRequest, Signer, SignerRole};
use crate::service::error::ServiceError;

impl From<CreatePoderRequestDTO> for PoderData {
    fn from(value: CreatePoderRequestDTO) -> Self {
        Self {
            finalidad: value.finalidad,
            vigencia: value.vigencia,
            fecha_inicio: value.fecha_inicio,
            fecha_termino: value.fecha_termino,
            cantidad_plantas: value.cantidad_plantas,
            declaracion: value.declaracion,
            cedente: Party {
                nombre: value.cedente_nombre,
                rut: value.cedente_rut,
                domicilio: value.cedente_domicilio,
                email: value.cedente_email,
            },
            cesionario: Party {
                nombre: value.cesionario_nombre,
                rut: value.cesionario_rut,
                domicilio: value.cesionario_domicilio,
                email: value.cesionario_email,
            },
            direccion_cultivo: value.direccion_cultivo,
            comuna_region: value.comuna_region,
            firma_cedente: value.firma_cedente.filter(|firma| !firma.is_empty()),
            firma_cesionario: value.firma_cesionario.filter(|firma| !firma.is_empty()),
        }
    }
}

pub(super) fn encode_document(document: &[u8]) -> Result<String, ServiceError> {
    Base64::encode_to_string(document).map_err(|e| ServiceError::MappingError(e.to_string()))
}

pub(super) fn envelope_request_from_poder(
    data: &PoderData,
    content_base64: String,
) -> EnvelopeRequest {
    EnvelopeRequest {
        signers: vec![
            signer(&data.cedente, SignerRole::Cedente),
            signer(&data.cesionario, SignerRole::Cesionario),
        ],
        document: Document::pdf(content_base64),
    }
}

fn signer(party: &Party, role: SignerRole) -> Signer {
    Signer {
        name: party.nombre.to_owned(),
        email: party.email.to_owned(),
        rut: party.rut.to_owned(),
        role,
    }
}
