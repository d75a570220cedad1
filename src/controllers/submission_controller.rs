use std::sync::Arc;

use crate::api::webhook::WebhookClient;
use crate::error::{SubmissionError, MSG_SUCCESS};
use crate::models::submission_models::{
    FormField, Scenario, SelectedImage, SubmissionForm, SubmissionStatus, WebhookPayload,
};
use crate::utils::image_utils;

/// Owns the photo form and drives one submission at a time to the webhook.
pub struct SubmissionController {
    webhook: Arc<dyn WebhookClient>,
    form: SubmissionForm,
    status: SubmissionStatus,
}

impl SubmissionController {
    pub fn new(webhook: Arc<dyn WebhookClient>) -> Self {
        Self {
            webhook,
            form: SubmissionForm::default(),
            status: SubmissionStatus::Idle,
        }
    }

    pub fn form(&self) -> &SubmissionForm {
        &self.form
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn select_scenario(&mut self, scenario: Scenario) {
        self.form.scenario = Some(scenario);
    }

    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Email => self.form.email = value,
            FormField::Height => self.form.height = value,
        }
    }

    /// Replaces the current image if the candidate declares an image media type.
    /// Anything else is dropped silently and the previous selection stays.
    pub fn select_image(&mut self, candidate: SelectedImage) -> bool {
        if !image_utils::is_image_media_type(&candidate.media_type) {
            tracing::debug!(
                "Ignoring non-image upload {} ({})",
                candidate.file_name,
                candidate.media_type
            );
            return false;
        }
        self.form.image = Some(candidate);
        true
    }

    pub fn can_submit(&self) -> bool {
        !self.status.is_submitting() && self.form.scenario.is_some() && self.form.image.is_some()
    }

    /// Sends the form to the webhook and records the outcome in `status`.
    /// The form is reset only when the webhook answers 2xx.
    pub async fn submit(&mut self) -> &SubmissionStatus {
        // try_submit has already logged the error and turned it into a status message
        if let Err(e) = self.try_submit().await {
            tracing::debug!("Submission ended with {:?}", e);
        }
        &self.status
    }

    /// Same as `submit` but also hands back the structured error.
    pub async fn try_submit(&mut self) -> Result<(), SubmissionError> {
        self.status = SubmissionStatus::Submitting;

        let result = self.send().await;
        self.status = match &result {
            Ok(()) => {
                self.form = SubmissionForm::default();
                SubmissionStatus::Succeeded(MSG_SUCCESS.to_string())
            }
            Err(e) => {
                if e.is_validation() {
                    tracing::info!("Submission refused: {}", e);
                } else {
                    tracing::error!("Submission failed: {}", e);
                }
                SubmissionStatus::Failed(e.user_message().to_string())
            }
        };
        result
    }

    /// Records a failure that happened before the controller got to submit, e.g. while reading the upload.
    pub fn fail_with(&mut self, e: &SubmissionError) {
        self.status = SubmissionStatus::Failed(e.user_message().to_string());
    }

    async fn send(&self) -> Result<(), SubmissionError> {
        let image = self.form.image.as_ref().ok_or(SubmissionError::MissingImage)?;
        let scenario = self.form.scenario.ok_or(SubmissionError::MissingScenario)?;
        if self.form.email.trim().is_empty() {
            return Err(SubmissionError::MissingField(FormField::Email));
        }
        if self.form.height.trim().is_empty() {
            return Err(SubmissionError::MissingField(FormField::Height));
        }

        tracing::info!(
            "Submitting {} ({} bytes) with scenario {}",
            image.file_name,
            image.data.len(),
            scenario
        );
        let encoded = image_utils::encode_image(image.data.clone()).await?;

        let payload = WebhookPayload {
            name: String::new(),
            email: self.form.email.clone(),
            height: self.form.height.clone(),
            scenario,
            image: encoded,
            file_name: image.file_name.clone(),
            mime_type: image.media_type.clone(),
        };

        let status = self.webhook.post_submission(&payload).await?;
        if !status.is_success() {
            return Err(SubmissionError::Rejected(status));
        }
        tracing::info!("Webhook accepted submission with status {}", status);
        Ok(())
    }
}
