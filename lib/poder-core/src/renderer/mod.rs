//! Renders a submission into the printable "Poder simple" document.

use askama::Template;
use template::{Firma, PoderDocument};
use time::Date;

use crate::model::poder::{Finalidad, PoderData, Vigencia};

mod template;


/// Shown in place of a missing end date
pub const BLANK_DATE: &str = "________";

/// Fills the document template, interpolated values are HTML escaped
pub fn render_html(data: &PoderData, today: Date) -> Result<String, askama::Error> {
    PoderDocument {
        data,
        today: format_date(today),
        validity: validity_text(data),
        finalidad: finalidad_label(data.finalidad),
        firmas: [
            Firma::new("Cedente", &data.cedente, data.firma_cedente.as_deref()),
            Firma::new(
                "Cesionario",
                &data.cesionario,
                data.firma_cesionario.as_deref(),
            ),
        ],
    }
    .render()
}

/// Stand-in for the PDF conversion: the rendered HTML bytes are used as the
/// document content.
pub fn render_placeholder_pdf(html: &str) -> Vec<u8> {
    html.as_bytes().to_vec()
}

/// `dd-mm-yyyy`
pub fn format_date(date: Date) -> String {
    format!(
        "{:02}-{:02}-{:04}",
        date.day(),
        u8::from(date.month()),
        date.year()
    )
}

pub fn validity_text(data: &PoderData) -> String {
    match data.vigencia {
        Vigencia::Indefinido => "indefinida".to_string(),
        Vigencia::Fijo => format!(
            "desde {} hasta {}",
            data.fecha_inicio,
            data.fecha_termino
                .as_deref()
                .filter(|fecha| !fecha.is_empty())
                .unwrap_or(BLANK_DATE)
        ),
    }
}

fn finalidad_label(finalidad: Finalidad) -> &'static str {
    match finalidad {
        Finalidad::Personal => "uso personal",
        Finalidad::Medicinal => "uso medicinal",
        Finalidad::Cientifico => "investigación científica",
    }
}
