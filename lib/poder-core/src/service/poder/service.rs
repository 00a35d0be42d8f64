use shared_types::PoderId;

use super::dto::{
    CreatePoderRequestDTO, CreatePoderResponseDTO, GeneratePdfResponseDTO, GetPoderResponseDTO,
    SendToSignRequestDTO, SendToSignResponseDTO,
};
use super::mapper::{encode_document, envelope_request_from_poder};
use super::validator::validate_create_request;
use super::{PENDING_ENVELOPE_ID, PoderService};
use crate::model::poder::{Poder, PoderStatus, UpdatePoderRequest};
use crate::renderer::{render_html, render_placeholder_pdf};
use crate::service::error::{EntityNotFoundError, MissingProviderError, ServiceError};

impl PoderService {
    /// Validates and stores a new submission in `draft` state
    ///
    /// # Arguments
    ///
    /// * `request` - form data
    pub async fn create_poder(
        &self,
        request: CreatePoderRequestDTO,
    ) -> Result<CreatePoderResponseDTO, ServiceError> {
        validate_create_request(&request)?;

        let id = self.poder_repository.create_poder(request.into()).await?;
        tracing::info!(%id, "Created poder");

        Ok(CreatePoderResponseDTO {
            id,
            status: PoderStatus::Draft,
        })
    }

    /// Returns details of a submission
    ///
    /// # Arguments
    ///
    /// * `id` - Id of an existing submission
    pub async fn get_poder(&self, id: &PoderId) -> Result<GetPoderResponseDTO, ServiceError> {
        Ok(self.load_poder(id).await?.into())
    }

    /// Renders the document of a submission. PDF conversion is not available,
    /// the returned content is the base64 encoded HTML.
    ///
    /// # Arguments
    ///
    /// * `id` - Id of an existing submission
    pub async fn generate_pdf(&self, id: &PoderId) -> Result<GeneratePdfResponseDTO, ServiceError> {
        let poder = self.load_poder(id).await?;

        Ok(GeneratePdfResponseDTO {
            id: poder.id,
            pdf_base64_html: self.render_document(&poder)?,
        })
    }

    /// Sends the rendered document to an e-signature provider and marks the
    /// submission as `sent_to_sign`. The provider answer is returned as-is,
    /// a non-success status is not treated as an error.
    ///
    /// # Arguments
    ///
    /// * `id` - Id of an existing submission
    /// * `request` - provider name (`ecert` or `idok`)
    pub async fn send_to_sign(
        &self,
        id: &PoderId,
        request: SendToSignRequestDTO,
    ) -> Result<SendToSignResponseDTO, ServiceError> {
        let poder = self.load_poder(id).await?;

        let provider = self
            .signing_provider_registry
            .get_signing_provider(&request.provider)
            .ok_or_else(|| MissingProviderError::SigningProvider(request.provider.to_owned()))?;

        let envelope = envelope_request_from_poder(&poder.data, self.render_document(&poder)?);
        let provider_response = provider.create_envelope(&envelope).await?;

        self.poder_repository
            .update_poder(UpdatePoderRequest {
                id: poder.id,
                status: Some(PoderStatus::SentToSign),
                provider: Some(request.provider.to_owned()),
                provider_envelope_id: Some(PENDING_ENVELOPE_ID.to_string()),
                data: None,
            })
            .await?;

        tracing::info!(
            id = %poder.id,
            provider = %request.provider,
            status = provider_response.status,
            "Poder sent to sign"
        );

        Ok(SendToSignResponseDTO {
            id: poder.id,
            provider: request.provider,
            provider_response,
        })
    }

    async fn load_poder(&self, id: &PoderId) -> Result<Poder, ServiceError> {
        let Some(poder) = self.poder_repository.get_poder(id).await? else {
            return Err(EntityNotFoundError::Poder(*id).into());
        };

        Ok(poder)
    }

    fn render_document(&self, poder: &Poder) -> Result<String, ServiceError> {
        let html = render_html(&poder.data, self.clock.now_utc().date())
            .map_err(|err| ServiceError::MappingError(err.to_string()))?;
        encode_document(&render_placeholder_pdf(&html))
    }
}
