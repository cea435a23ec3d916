//! Wire types for the prediction endpoint.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// Request body for `POST /predict`.
#[derive(Clone, Debug, serde::Serialize)]
pub struct PredictRequest {
    pub text: String,
}

/// Successful response body from `POST /predict`.
///
/// The backend may send extra fields (the echoed text, raw probabilities);
/// only the label and its confidence matter here.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct Prediction {
    pub sentiment: String,
    pub confidence: f64,
}

impl Prediction {
    /// Confidence as a percentage with one decimal, e.g. `"87.3"`.
    pub fn confidence_percent(&self) -> String {
        format!("{:.1}", self.confidence * 100.0)
    }
}

/// Error body the backend sends with HTTP 400.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

/// Classification label derived from the backend's sentiment string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Negative,
}

impl Sentiment {
    /// Case-insensitive parse; anything that is not "positive" counts as
    /// negative.
    pub fn parse(label: &str) -> Self {
        if label.eq_ignore_ascii_case("positive") {
            Self::Positive
        } else {
            Self::Negative
        }
    }

    /// Badge label shown to the user.
    pub fn label(self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
        }
    }

    /// Badge icon shown next to the label.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Positive => "😊",
            Self::Negative => "😞",
        }
    }

    /// CSS modifier for the badge and the confidence fill.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
        }
    }
}
