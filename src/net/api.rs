//! REST API helpers for communicating with the prediction backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): inert stubs since these endpoints are only meaningful
//! in the browser.
//!
//! ERROR HANDLING
//! ==============
//! [`PredictError`] carries the localized message shown to the user; its
//! `Display` output goes straight into the error panel.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ErrorBody, PredictRequest, Prediction};

/// Fallback for an HTTP 400 without a usable `detail` field.
const INVALID_TEXT_MESSAGE: &str = "Teks tidak valid";

/// Outcome of a failed prediction attempt, worded for the user.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PredictError {
    /// Backend rejected the text (HTTP 400) and said why.
    #[error("{0}")]
    Rejected(String),
    /// Backend answered with an unexpected status or body.
    #[error("Gagal menganalisis sentimen. Silakan coba lagi.")]
    Failed,
    /// Transport failure; the backend is probably not running.
    #[error("Terjadi kesalahan saat menghubungi server. Pastikan backend sedang berjalan.")]
    Unreachable,
}

/// Map a `POST /predict` response to a prediction or a user-facing error.
fn interpret_predict_response(status: u16, body: &str) -> Result<Prediction, PredictError> {
    if status == 400 {
        let detail = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.detail);
        return Err(PredictError::Rejected(
            detail.unwrap_or_else(|| INVALID_TEXT_MESSAGE.to_owned()),
        ));
    }
    if !(200..300).contains(&status) {
        return Err(PredictError::Failed);
    }
    serde_json::from_str::<Prediction>(body).map_err(|_| PredictError::Failed)
}

/// Submit review text to `POST /predict`.
///
/// # Errors
///
/// Returns a [`PredictError`] whose `Display` output is the message to show
/// in the error panel.
pub async fn predict(text: &str) -> Result<Prediction, PredictError> {
    #[cfg(feature = "hydrate")]
    {
        let request = PredictRequest {
            text: text.to_owned(),
        };
        let resp = gloo_net::http::Request::post("/predict")
            .json(&request)
            .map_err(|_| PredictError::Unreachable)?
            .send()
            .await
            .map_err(|_| PredictError::Unreachable)?;
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        interpret_predict_response(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        Err(PredictError::Unreachable)
    }
}

/// Probe `GET /health`. Best effort; the result only feeds a log line.
pub async fn check_health() -> bool {
    #[cfg(feature = "hydrate")]
    {
        match gloo_net::http::Request::get("/health").send().await {
            Ok(resp) => resp.ok(),
            Err(_) => false,
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}
