//! Leptos UI components for the analyzer page.

pub mod example_chips;
pub mod results_section;
pub mod review_form;
