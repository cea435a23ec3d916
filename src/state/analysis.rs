#[cfg(test)]
#[path = "analysis_test.rs"]
mod analysis_test;

use crate::net::types::Prediction;

/// Which panel of the results section is visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnalysisPhase {
    /// Nothing submitted yet; the results section is hidden.
    #[default]
    Idle,
    /// Request in flight; loading panel visible, form controls disabled.
    Loading,
    /// Prediction received; result panel visible.
    Done,
    /// Submission failed; error panel visible.
    Failed,
}

/// State for the analysis flow.
///
/// One request is in flight at a time, and at most one of a prediction or an
/// error is populated. All transitions go through the methods below so the
/// panel exclusivity holds everywhere.
#[derive(Clone, Debug, Default)]
pub struct AnalysisState {
    pub phase: AnalysisPhase,
    pub prediction: Option<Prediction>,
    pub analyzed_text: String,
    pub error: Option<String>,
}

impl AnalysisState {
    /// Enter the loading phase, dropping any previous outcome.
    pub fn start_loading(&mut self) {
        self.phase = AnalysisPhase::Loading;
        self.prediction = None;
        self.error = None;
    }

    /// Record a successful prediction along with the text it was made for.
    pub fn finish(&mut self, prediction: Prediction, analyzed_text: String) {
        self.phase = AnalysisPhase::Done;
        self.prediction = Some(prediction);
        self.analyzed_text = analyzed_text;
        self.error = None;
    }

    /// Record a failure with a user-facing message.
    pub fn fail(&mut self, message: String) {
        self.phase = AnalysisPhase::Failed;
        self.error = Some(message);
        self.prediction = None;
    }

    /// "Analisis lagi": back to an empty, idle form.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Dismiss the error panel and return to idle.
    pub fn dismiss_error(&mut self) {
        self.phase = AnalysisPhase::Idle;
        self.error = None;
    }

    /// Whether a request is currently in flight.
    pub fn is_loading(&self) -> bool {
        self.phase == AnalysisPhase::Loading
    }
}
