use one_dto_mapper::{From, Into};
use poder_core::model::poder::{Finalidad, PoderStatus, Vigencia};
use poder_core::provider::signing::dto::ProviderResponse;
use poder_core::service::poder::dto::{
    CreatePoderRequestDTO, CreatePoderResponseDTO, GeneratePdfResponseDTO, GetPoderResponseDTO,
    SendToSignRequestDTO, SendToSignResponseDTO,
};
use serde::{Deserialize, Serialize};
use shared_types::PoderId;
use time::OffsetDateTime;
use utoipa::ToSchema;

/// Form submission, field names follow the HTML form
#[derive(Clone, Debug, Deserialize, ToSchema, Into)]
#[into(CreatePoderRequestDTO)]
pub(crate) struct CreatePoderRequestRestDTO {
    pub finalidad: FinalidadRestEnum,
    #[serde(default)]
    pub vigencia: VigenciaRestEnum,
    #[schema(example = "2025-01-01")]
    pub fecha_inicio: String,
    #[schema(example = "2025-12-31")]
    pub fecha_termino: Option<String>,
    pub cantidad_plantas: Option<i64>,
    pub declaracion: String,

    pub cedente_nombre: String,
    #[schema(example = "11.111.111-1")]
    pub cedente_rut: String,
    pub cedente_domicilio: String,
    #[schema(example = "cedente@example.cl")]
    pub cedente_email: String,

    pub cesionario_nombre: String,
    #[schema(example = "22.222.222-2")]
    pub cesionario_rut: String,
    pub cesionario_domicilio: String,
    #[schema(example = "cesionario@example.cl")]
    pub cesionario_email: String,

    pub direccion_cultivo: String,
    pub comuna_region: String,

    /// Signature image as `data:image/png;base64,...`
    pub firma_cedente: Option<String>,
    /// Signature image as `data:image/png;base64,...`
    pub firma_cesionario: Option<String>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize, ToSchema, From, Into)]
#[from(Finalidad)]
#[into(Finalidad)]
#[serde(rename_all = "lowercase")]
pub(crate) enum FinalidadRestEnum {
    Personal,
    Medicinal,
    Cientifico,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize, ToSchema, From, Into)]
#[from(Vigencia)]
#[into(Vigencia)]
#[serde(rename_all = "lowercase")]
pub(crate) enum VigenciaRestEnum {
    #[default]
    Fijo,
    Indefinido,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, ToSchema, From)]
#[from(PoderStatus)]
#[serde(rename_all = "snake_case")]
pub(crate) enum PoderStatusRestEnum {
    Draft,
    SentToSign,
    Signed,
    Rejected,
    Cancelled,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[from(CreatePoderResponseDTO)]
pub(crate) struct CreatePoderResponseRestDTO {
    pub id: PoderId,
    pub status: PoderStatusRestEnum,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[from(GetPoderResponseDTO)]
pub(crate) struct GetPoderResponseRestDTO {
    pub id: PoderId,
    pub status: PoderStatusRestEnum,
    pub provider: Option<String>,
    pub provider_envelope_id: Option<String>,
    pub data: PoderDataRestDTO,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, example = "2025-06-09T14:19:57Z")]
    pub created_date: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, example = "2025-06-09T14:19:57Z")]
    pub last_modified: OffsetDateTime,
}

/// Stored form data, same shape as the submission
#[derive(Clone, Debug, Serialize, ToSchema)]
pub(crate) struct PoderDataRestDTO {
    pub finalidad: FinalidadRestEnum,
    pub vigencia: VigenciaRestEnum,
    pub fecha_inicio: String,
    pub fecha_termino: Option<String>,
    pub cantidad_plantas: Option<i64>,
    pub declaracion: String,
    pub cedente_nombre: String,
    pub cedente_rut: String,
    pub cedente_domicilio: String,
    pub cedente_email: String,
    pub cesionario_nombre: String,
    pub cesionario_rut: String,
    pub cesionario_domicilio: String,
    pub cesionario_email: String,
    pub direccion_cultivo: String,
    pub comuna_region: String,
    pub firma_cedente: Option<String>,
    pub firma_cesionario: Option<String>,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[from(GeneratePdfResponseDTO)]
pub(crate) struct GeneratePdfResponseRestDTO {
    pub id: PoderId,
    /// Base64 of the rendered HTML document, PDF conversion is not available
    pub pdf_base64_html: String,
}

#[derive(Clone, Debug, Deserialize, ToSchema, Into)]
#[into(SendToSignRequestDTO)]
pub(crate) struct SendToSignRequestRestDTO {
    #[schema(example = "ecert")]
    pub provider: String,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[from(SendToSignResponseDTO)]
pub(crate) struct SendToSignResponseRestDTO {
    pub id: PoderId,
    pub provider: String,
    pub provider_response: ProviderResponseRestDTO,
}

/// Answer of the signing provider, not interpreted
#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[from(ProviderResponse)]
pub(crate) struct ProviderResponseRestDTO {
    #[schema(example = 201)]
    pub status: u16,
    #[schema(example = "Created")]
    pub reason: String,
    pub raw: String,
}
