//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::analyze::AnalyzePage;
use crate::state::analysis::AnalysisState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="id">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared analysis state context and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let analysis = RwSignal::new(AnalysisState::default());
    provide_context(analysis);

    view! {
        <Stylesheet id="leptos" href="/pkg/sentiment-ui.css"/>
        <Title text="Analisis Sentimen Ulasan Roblox"/>

        <Router>
            <Routes fallback=|| "Halaman tidak ditemukan.".into_view()>
                <Route path=StaticSegment("") view=AnalyzePage/>
            </Routes>
        </Router>
    }
}
