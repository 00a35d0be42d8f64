use validator::Validate;

use super::dto::CreatePoderRequestDTO;
use crate::service::error::ValidationError;
use crate::signature::SignatureDataUrl;

pub(super) fn validate_create_request(
    request: &CreatePoderRequestDTO,
) -> Result<(), ValidationError> {
    request.validate()?;

    for (field, value) in [
        ("firma_cedente", &request.firma_cedente),
        ("firma_cesionario", &request.firma_cesionario),
    ] {
        // an untouched signature pad is submitted as an empty value
        let Some(value) = value.as_deref().filter(|value| !value.is_empty()) else {
            continue;
        };

        SignatureDataUrl::parse(value)
            .map_err(|source| ValidationError::InvalidSignatureImage { field, source })?;
    }

    Ok(())
}
