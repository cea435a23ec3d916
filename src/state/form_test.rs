use super::*;

// =============================================================
// validate_review
// =============================================================

#[test]
fn validate_rejects_empty_input() {
    assert_eq!(validate_review(""), Err(ValidationError::Empty));
}

#[test]
fn validate_rejects_whitespace_only_input() {
    assert_eq!(validate_review("   \n\t "), Err(ValidationError::Empty));
}

#[test]
fn validate_rejects_short_input() {
    assert_eq!(validate_review("ab"), Err(ValidationError::TooShort));
    assert_eq!(validate_review("abcd"), Err(ValidationError::TooShort));
}

#[test]
fn validate_trims_before_length_check() {
    // Four characters once the padding is gone.
    assert_eq!(validate_review("  abcd  "), Err(ValidationError::TooShort));
}

#[test]
fn validate_accepts_minimum_length() {
    assert_eq!(validate_review("abcde"), Ok("abcde".to_owned()));
}

#[test]
fn validate_returns_trimmed_text() {
    assert_eq!(
        validate_review("  game ini seru  "),
        Ok("game ini seru".to_owned())
    );
}

#[test]
fn validate_counts_unicode_scalars() {
    // Five non-ASCII characters pass.
    assert_eq!(validate_review("sérüûñ"), Ok("sérüûñ".to_owned()));
}

// =============================================================
// Validation messages
// =============================================================

#[test]
fn empty_message_asks_for_input() {
    assert_eq!(
        ValidationError::Empty.to_string(),
        "Harap masukkan teks ulasan terlebih dahulu."
    );
}

#[test]
fn too_short_message_names_the_minimum() {
    assert_eq!(
        ValidationError::TooShort.to_string(),
        "Teks terlalu pendek. Minimal 5 karakter."
    );
}

// =============================================================
// CounterTone
// =============================================================

#[test]
fn counter_tone_muted_when_empty() {
    assert_eq!(CounterTone::for_len(0), CounterTone::Muted);
}

#[test]
fn counter_tone_warns_below_minimum() {
    assert_eq!(CounterTone::for_len(1), CounterTone::Warning);
    assert_eq!(CounterTone::for_len(4), CounterTone::Warning);
}

#[test]
fn counter_tone_ok_at_minimum_and_above() {
    assert_eq!(CounterTone::for_len(5), CounterTone::Ok);
    assert_eq!(CounterTone::for_len(500), CounterTone::Ok);
}

#[test]
fn counter_tone_colors() {
    assert_eq!(CounterTone::Muted.color(), "var(--text-muted)");
    assert_eq!(CounterTone::Warning.color(), "var(--negative-color)");
    assert_eq!(CounterTone::Ok.color(), "var(--positive-color)");
}

// =============================================================
// counter_label
// =============================================================

#[test]
fn counter_label_formats_count() {
    assert_eq!(counter_label(0), "0 karakter");
    assert_eq!(counter_label(2), "2 karakter");
    assert_eq!(counter_label(120), "120 karakter");
}
