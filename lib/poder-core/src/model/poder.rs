use serde::{Deserialize, Serialize};
use serde_with::with_prefix;
use shared_types::PoderId;
use strum::{AsRefStr, Display, EnumString};
use time::OffsetDateTime;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Poder {
    pub id: PoderId,
    pub data: PoderData,
    pub status: PoderStatus,
    pub provider: Option<String>,
    pub provider_envelope_id: Option<String>,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
}

with_prefix!(cedente_prefix "cedente_");
with_prefix!(cesionario_prefix "cesionario_");

/// Content of the submitted form, persisted as a flat JSON document
/// (`cedente_nombre`, `cesionario_email`, ...)
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PoderData {
    pub finalidad: Finalidad,
    #[serde(default)]
    pub vigencia: Vigencia,
    pub fecha_inicio: String,
    pub fecha_termino: Option<String>,
    pub cantidad_plantas: Option<i64>,
    pub declaracion: String,
    #[serde(flatten, with = "cedente_prefix")]
    pub cedente: Party,
    #[serde(flatten, with = "cesionario_prefix")]
    pub cesionario: Party,
    pub direccion_cultivo: String,
    pub comuna_region: String,
    /// Signature images as data URLs
    pub firma_cedente: Option<String>,
    pub firma_cesionario: Option<String>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Party {
    pub nombre: String,
    pub rut: String,
    pub domicilio: String,
    pub email: String,
}

/// Purpose allowed by art. 8 of Ley 20.000
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize, Display, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Finalidad {
    Personal,
    Medicinal,
    Cientifico,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vigencia {
    #[default]
    Fijo,
    Indefinido,
}

#[derive(
    Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PoderStatus {
    #[default]
    Draft,
    SentToSign,
    Signed,
    Rejected,
    Cancelled,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct UpdatePoderRequest {
    pub id: PoderId,
    pub status: Option<PoderStatus>,
    pub provider: Option<String>,
    pub provider_envelope_id: Option<String>,
    pub data: Option<PoderData>,
}
