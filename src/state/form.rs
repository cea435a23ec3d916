#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// Minimum number of characters a review must have after trimming.
pub const MIN_REVIEW_CHARS: usize = 5;

/// Client-side validation failures. `Display` is the user-facing message.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Harap masukkan teks ulasan terlebih dahulu.")]
    Empty,
    #[error("Teks terlalu pendek. Minimal 5 karakter.")]
    TooShort,
}

/// Trim raw textarea content and check it is long enough to analyze.
///
/// # Errors
///
/// Returns [`ValidationError::Empty`] for whitespace-only input and
/// [`ValidationError::TooShort`] for trimmed input under
/// [`MIN_REVIEW_CHARS`] characters.
pub fn validate_review(raw: &str) -> Result<String, ValidationError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(ValidationError::Empty);
    }
    if text.chars().count() < MIN_REVIEW_CHARS {
        return Err(ValidationError::TooShort);
    }
    Ok(text.to_owned())
}

/// Color tone of the character counter label.
///
/// The counter reacts to the raw (untrimmed) length: empty input is muted,
/// anything under the minimum warns, everything else reads as ok.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CounterTone {
    #[default]
    Muted,
    Warning,
    Ok,
}

impl CounterTone {
    /// Tone for a given character count.
    pub fn for_len(len: usize) -> Self {
        if len == 0 {
            Self::Muted
        } else if len < MIN_REVIEW_CHARS {
            Self::Warning
        } else {
            Self::Ok
        }
    }

    /// CSS color the counter label should use.
    pub fn color(self) -> &'static str {
        match self {
            Self::Muted => "var(--text-muted)",
            Self::Warning => "var(--negative-color)",
            Self::Ok => "var(--positive-color)",
        }
    }
}

/// Counter label under the textarea, e.g. `"2 karakter"`.
pub fn counter_label(len: usize) -> String {
    format!("{len} karakter")
}
