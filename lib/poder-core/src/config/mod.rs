use thiserror::Error;

pub mod core_config;


#[derive(Debug, Error)]
pub enum ConfigParsingError {
    #[error("General parsing error: {0}")]
    GeneralParsingError(String),
}
