use poder_core::model::poder::PoderData;

use super::dto::PoderDataRestDTO;

impl From<PoderData> for PoderDataRestDTO {
    fn from(value: PoderData) -> Self {
        Self {
            finalidad: value.finalidad.into(),
            vigencia: value.vigencia.into(),
            fecha_inicio: value.fecha_inicio,
            fecha_termino: value.fecha_termino,
            cantidad_plantas: value.cantidad_plantas,
            declaracion: value.declaracion,
            cedente_nombre: value.cedente.nombre,
            cedente_rut: value.cedente.rut,
            cedente_domicilio: value.cedente.domicilio,
            cedente_email: value.cedente.email,
            cesionario_nombre: value.cesionario.nombre,
            cesionario_rut: value.cesionario.rut,
            cesionario_domicilio: value.cesionario.domicilio,
            cesionario_email: value.cesionario.email,
            direccion_cultivo: value.direccion_cultivo,
            comuna_region: value.comuna_region,
            firma_cedente: value.firma_cedente,
            firma_cesionario: value.firma_cesionario,
        }
    }
}
