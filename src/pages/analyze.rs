//! Analyzer page: review form, example chips, and the results section.

use leptos::prelude::*;

use crate::components::example_chips::ExampleChips;
use crate::components::results_section::ResultsSection;
use crate::components::review_form::ReviewForm;

/// Single page of the app.
///
/// Owns the review text signal shared by the form, the chips, and the
/// results section, and probes the backend once on load.
#[component]
pub fn AnalyzePage() -> impl IntoView {
    let text = RwSignal::new(String::new());

    // Best-effort probe; failure only logs.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async {
        if crate::net::api::check_health().await {
            leptos::logging::log!("backend API is up");
        } else {
            leptos::logging::warn!("backend API did not respond; start it before submitting");
        }
    });

    view! {
        <div class="analyze-page">
            <header class="analyze-page__header">
                <h1>"Analisis Sentimen Ulasan Roblox"</h1>
                <p class="analyze-page__tagline">
                    "Tempel ulasan pemain dan lihat apakah nadanya positif atau negatif."
                </p>
            </header>

            <ReviewForm text=text/>
            <ExampleChips text=text/>
            <ResultsSection text=text/>
        </div>
    }
}
