//! Results section with mutually exclusive loading, result, and error panels.

use leptos::prelude::*;

use crate::net::types::{Prediction, Sentiment};
use crate::state::analysis::{AnalysisPhase, AnalysisState};

/// Section under the form holding whichever panel the current phase calls
/// for. The element stays in the DOM (hidden while idle) so it can be a
/// scroll target before the loading panel renders.
#[component]
pub fn ResultsSection(text: RwSignal<String>) -> impl IntoView {
    let analysis = expect_context::<RwSignal<AnalysisState>>();
    let hidden = move || analysis.get().phase == AnalysisPhase::Idle;

    view! {
        <section id="results-section" class="results-section" class:results-section--hidden=hidden>
            {move || {
                let state = analysis.get();
                match state.phase {
                    AnalysisPhase::Idle => ().into_any(),
                    AnalysisPhase::Loading => {
                        view! {
                            <div class="results-section__loading">
                                <div class="results-section__spinner"></div>
                                <p>"Menganalisis sentimen..."</p>
                            </div>
                        }
                            .into_any()
                    }
                    AnalysisPhase::Done => {
                        match state.prediction {
                            Some(prediction) => {
                                view! {
                                    <ResultDisplay
                                        prediction=prediction
                                        analyzed_text=state.analyzed_text
                                        text=text
                                    />
                                }
                                    .into_any()
                            }
                            None => ().into_any(),
                        }
                    }
                    AnalysisPhase::Failed => {
                        let message = state.error.unwrap_or_default();
                        view! { <ErrorDisplay message=message/> }.into_any()
                    }
                }
            }}
        </section>
    }
}

/// Sentiment badge, confidence bar, and the echoed review.
#[component]
fn ResultDisplay(
    prediction: Prediction,
    analyzed_text: String,
    text: RwSignal<String>,
) -> impl IntoView {
    let analysis = expect_context::<RwSignal<AnalysisState>>();

    let sentiment = Sentiment::parse(&prediction.sentiment);
    let percent = format!("{}%", prediction.confidence_percent());
    let fill_width = percent.clone();
    let badge_class = format!("sentiment-badge sentiment-badge--{}", sentiment.css_class());
    let fill_class = format!("confidence-fill confidence-fill--{}", sentiment.css_class());

    let on_again = move |_| {
        analysis.update(AnalysisState::reset);
        text.set(String::new());
        crate::util::dom::focus("review-text");
        crate::util::dom::scroll_to_top();
    };

    view! {
        <div class="result-display">
            <div class=badge_class>
                <span class="sentiment-badge__icon">{sentiment.icon()}</span>
                <span class="sentiment-badge__label">{sentiment.label()}</span>
            </div>

            <div class="confidence">
                <div class="confidence__header">
                    <span>"Tingkat keyakinan"</span>
                    <span class="confidence__value">{percent}</span>
                </div>
                <div class="confidence__track">
                    <div class=fill_class style:width=fill_width></div>
                </div>
            </div>

            <div class="analyzed-text">
                <span class="analyzed-text__label">"Teks yang dianalisis:"</span>
                <p class="analyzed-text__content">{analyzed_text}</p>
            </div>

            <button class="btn btn--primary" on:click=on_again>
                "Analisis Lagi"
            </button>
        </div>
    }
}

/// Error message with a dismiss action that returns the form to idle.
#[component]
fn ErrorDisplay(message: String) -> impl IntoView {
    let analysis = expect_context::<RwSignal<AnalysisState>>();

    let on_retry = move |_| {
        analysis.update(AnalysisState::dismiss_error);
        crate::util::dom::focus("review-text");
    };

    view! {
        <div class="error-display">
            <span class="error-display__icon">"⚠️"</span>
            <p class="error-display__message">{message}</p>
            <button class="btn" on:click=on_retry>
                "Coba Lagi"
            </button>
        </div>
    }
}
