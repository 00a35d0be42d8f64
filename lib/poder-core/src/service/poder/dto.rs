use one_dto_mapper::From;
use shared_types::PoderId;
use time::OffsetDateTime;
use validator::Validate;

use crate::model::poder::{Finalidad, Poder, PoderData, PoderStatus, Vigencia};
use crate::provider::signing::dto::ProviderResponse;

#[derive(Clone, Debug, Validate)]
pub struct CreatePoderRequestDTO {
    pub finalidad: Finalidad,
    pub vigencia: Vigencia,
    pub fecha_inicio: String,
    pub fecha_termino: Option<String>,
    pub cantidad_plantas: Option<i64>,
    pub declaracion: String,

    pub cedente_nombre: String,
    pub cedente_rut: String,
    pub cedente_domicilio: String,
    #[validate(email)]
    pub cedente_email: String,

    pub cesionario_nombre: String,
    pub cesionario_rut: String,
    pub cesionario_domicilio: String,
    #[validate(email)]
    pub cesionario_email: String,

    pub direccion_cultivo: String,
    pub comuna_region: String,

    pub firma_cedente: Option<String>,
    pub firma_cesionario: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreatePoderResponseDTO {
    pub id: PoderId,
    pub status: PoderStatus,
}

#[derive(Clone, Debug, PartialEq, Eq, From)]
#[from(Poder)]
pub struct GetPoderResponseDTO {
    pub id: PoderId,
    pub status: PoderStatus,
    pub provider: Option<String>,
    pub provider_envelope_id: Option<String>,
    pub data: PoderData,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratePdfResponseDTO {
    pub id: PoderId,
    /// Base64 of the placeholder document (rendered HTML)
    pub pdf_base64_html: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SendToSignRequestDTO {
    pub provider: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SendToSignResponseDTO {
    pub id: PoderId,
    pub provider: String,
    pub provider_response: ProviderResponse,
}
