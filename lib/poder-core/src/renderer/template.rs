use askama::Template;

use crate::model::poder::{Party, PoderData};

#[derive(Template)]
#[template(path = "poder.html")]
pub(super) struct PoderDocument<'a> {
    pub data: &'a PoderData,
    pub today: String,
    pub validity: String,
    pub finalidad: &'static str,
    pub firmas: [Firma<'a>; 2],
}

pub(super) struct Firma<'a> {
    pub role: &'static str,
    pub party: &'a Party,
    /// Data URL of the drawn signature, a blank line is printed without it
    pub image: Option<&'a str>,
}

impl<'a> Firma<'a> {
    pub fn new(role: &'static str, party: &'a Party, image: Option<&'a str>) -> Self {
        Self {
            role,
            party,
            image: image.filter(|url| !url.is_empty()),
        }
    }
}
