//! Clickable example reviews that prefill the form.

use leptos::prelude::*;

/// Predefined sample reviews, one per chip.
const EXAMPLES: &[&str] = &[
    "Game ini seru banget! Grafiknya bagus dan banyak mode yang bisa dimainkan bareng teman.",
    "Kecewa sama update terbaru, sering lag dan banyak iklan yang mengganggu.",
    "Awalnya menyenangkan, tapi lama-lama membosankan karena semua item bagus harus dibeli.",
];

/// Row of example chips. Clicking one fills the textarea, scrolls it into
/// view, and focuses it; the character counter follows the signal.
#[component]
pub fn ExampleChips(text: RwSignal<String>) -> impl IntoView {
    let fill = move |sample: &'static str| {
        text.set(sample.to_owned());
        crate::util::dom::scroll_into_view_centered("review-text");
        crate::util::dom::focus("review-text");
    };

    view! {
        <div class="example-chips">
            <span class="example-chips__label">"Coba salah satu contoh:"</span>
            <div class="example-chips__row">
                {EXAMPLES
                    .iter()
                    .map(|sample| {
                        let sample = *sample;
                        view! {
                            <button
                                class="example-chips__chip"
                                type="button"
                                on:click=move |_| fill(sample)
                            >
                                {sample}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
