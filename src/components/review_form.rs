//! Review input form with live character counter and submit action.

use leptos::prelude::*;

use crate::state::analysis::AnalysisState;
use crate::state::form::{self, CounterTone};

/// Hold the loading panel this long after the response before swapping in
/// the outcome.
#[cfg(feature = "hydrate")]
const RESULT_DELAY_MS: u64 = 500;

/// Textarea, character counter, and the analyze button.
///
/// Validation runs before anything else touches the screen; the loading
/// panel only appears for input that passes, and the controls stay disabled
/// until the backend answers.
#[component]
pub fn ReviewForm(text: RwSignal<String>) -> impl IntoView {
    let analysis = expect_context::<RwSignal<AnalysisState>>();

    let count = move || text.get().chars().count();
    let counter_text = move || form::counter_label(count());
    let counter_color = move || CounterTone::for_len(count()).color();
    let busy = move || analysis.get().is_loading();

    let do_submit = move || {
        // One request at a time.
        if analysis.get().is_loading() {
            return;
        }

        match form::validate_review(&text.get()) {
            Err(e) => analysis.update(|a| a.fail(e.to_string())),
            Ok(review) => {
                analysis.update(AnalysisState::start_loading);
                crate::util::dom::scroll_into_view("results-section");

                #[cfg(feature = "hydrate")]
                leptos::task::spawn_local(async move {
                    let outcome = crate::net::api::predict(&review).await;
                    gloo_timers::future::sleep(std::time::Duration::from_millis(
                        RESULT_DELAY_MS,
                    ))
                    .await;
                    match outcome {
                        Ok(p) => analysis.update(|a| a.finish(p, review)),
                        Err(e) => analysis.update(|a| a.fail(e.to_string())),
                    }
                });

                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = review;
                }
            }
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        do_submit();
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_submit();
        }
    };

    view! {
        <form class="review-form" on:submit=on_submit>
            <label class="review-form__label">
                "Teks ulasan"
                <textarea
                    id="review-text"
                    class="review-form__textarea"
                    placeholder="Tulis ulasan game Roblox di sini..."
                    prop:value=move || text.get()
                    on:input=move |ev| text.set(event_target_value(&ev))
                    on:keydown=on_keydown
                    prop:disabled=busy
                ></textarea>
            </label>
            <div class="review-form__footer">
                <span class="review-form__counter" style:color=counter_color>
                    {counter_text}
                </span>
                <button class="btn btn--primary review-form__submit" type="submit" disabled=busy>
                    "Analisis Sentimen"
                </button>
            </div>
        </form>
    }
}
