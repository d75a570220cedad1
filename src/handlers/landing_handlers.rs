use std::sync::Arc;

use axum::{
    Json,
    extract::{Multipart, State},
    http::StatusCode,
    response::Html,
};
use serde_json::json;

use crate::AppState;
use crate::controllers::submission_controller::SubmissionController;
use crate::error::SubmissionError;
use crate::models::submission_models::{FormField, Scenario, SelectedImage};
use crate::pages::landing::{self, LandingView};
use crate::utils::image_utils;

pub async fn health_check() -> &'static str {
    "OK"
}

pub async fn landing_page(State(state): State<Arc<AppState>>) -> Html<String> {
    let controller = SubmissionController::new(state.webhook.clone());
    render_page(&state, &controller)
}

/// Form post from the landing page. Always answers with the page, carrying the outcome in the status banner.
pub async fn submit_form(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Html<String> {
    let mut controller = SubmissionController::new(state.webhook.clone());
    match fill_from_multipart(&mut controller, multipart).await {
        Ok(()) => {
            controller.submit().await;
        }
        Err(e) => {
            reject(&mut controller, e);
        }
    }
    render_page(&state, &controller)
}

/// Same form fields as `submit_form`, answered as JSON for scripted clients.
pub async fn submit_api(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    let mut controller = SubmissionController::new(state.webhook.clone());
    let result = match fill_from_multipart(&mut controller, multipart).await {
        Ok(()) => controller.try_submit().await,
        Err(e) => Err(reject(&mut controller, e)),
    };

    let message = controller.status().message().unwrap_or_default().to_string();
    match result {
        Ok(()) => Ok(Json(json!({
            "success": true,
            "message": message,
        }))),
        Err(e) => {
            let status = if e.is_validation() {
                StatusCode::UNPROCESSABLE_ENTITY
            } else if matches!(e, SubmissionError::FormRead(_)) {
                StatusCode::BAD_REQUEST
            } else {
                StatusCode::BAD_GATEWAY
            };
            Err((status, Json(json!({"success": false, "message": message}))))
        }
    }
}

fn render_page(state: &AppState, controller: &SubmissionController) -> Html<String> {
    let view = LandingView {
        form: controller.form(),
        status: controller.status(),
        can_submit: controller.can_submit(),
        pix_key: &state.config.pix_key,
    };
    Html(landing::render(&view).into_string())
}

fn reject(controller: &mut SubmissionController, e: SubmissionError) -> SubmissionError {
    tracing::error!("Failed to process form data: {}", e);
    controller.fail_with(&e);
    e
}

/// Replays the posted fields through the controller, the way the page would edit its form.
async fn fill_from_multipart(
    controller: &mut SubmissionController,
    mut multipart: Multipart,
) -> Result<(), SubmissionError> {
    let mut retained_data: Option<String> = None;
    let mut retained_name = String::new();
    let mut retained_type = String::new();
    let mut uploaded: Option<SelectedImage> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| SubmissionError::FormRead(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "email" | "height" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| SubmissionError::FormRead(e.to_string()))?;
                if let Ok(form_field) = name.parse::<FormField>() {
                    controller.update_field(form_field, value);
                }
            }
            "scenario" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| SubmissionError::FormRead(e.to_string()))?;
                match value.parse::<Scenario>() {
                    Ok(scenario) => controller.select_scenario(scenario),
                    Err(e) => tracing::debug!("Ignoring {}", e),
                }
            }
            "image" => {
                let file_name = field.file_name().unwrap_or("").to_string();
                let media_type = field.content_type().unwrap_or("").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| SubmissionError::FormRead(e.to_string()))?;
                // browsers send an empty part when no file was picked
                if data.is_empty() && file_name.is_empty() {
                    continue;
                }
                uploaded = Some(SelectedImage::new(file_name, media_type, data));
            }
            "retained_image" | "retained_image_name" | "retained_image_type" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| SubmissionError::FormRead(e.to_string()))?;
                match name.as_str() {
                    "retained_image" => retained_data = Some(value),
                    "retained_image_name" => retained_name = value,
                    _ => retained_type = value,
                }
            }
            _ => continue,
        }
    }

    // a fresh upload replaces the kept image; a non-image one leaves it in place
    if let Some(encoded) = retained_data {
        let data = image_utils::restore_image(&encoded)?;
        controller.select_image(SelectedImage::new(retained_name, retained_type, data));
    }
    if let Some(image) = uploaded {
        controller.select_image(image);
    }
    Ok(())
}
