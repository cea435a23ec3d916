use super::*;

// =============================================================
// interpret_predict_response — success path
// =============================================================

#[test]
fn ok_response_parses_prediction() {
    let body = r#"{"sentiment":"positive","confidence":0.873}"#;
    let p = interpret_predict_response(200, body).unwrap();
    assert_eq!(p.sentiment, "positive");
    assert!((p.confidence - 0.873).abs() < f64::EPSILON);
}

#[test]
fn ok_response_with_extra_fields_parses() {
    let body = r#"{"text":"seru","sentiment":"negative","confidence":0.61,"positive_probability":0.39}"#;
    let p = interpret_predict_response(200, body).unwrap();
    assert_eq!(p.sentiment, "negative");
}

#[test]
fn ok_response_with_garbage_body_is_generic_failure() {
    assert_eq!(
        interpret_predict_response(200, "not json"),
        Err(PredictError::Failed)
    );
}

// =============================================================
// interpret_predict_response — backend validation (400)
// =============================================================

#[test]
fn bad_request_surfaces_detail() {
    let body = r#"{"detail":"Text terlalu pendek atau kosong"}"#;
    assert_eq!(
        interpret_predict_response(400, body),
        Err(PredictError::Rejected(
            "Text terlalu pendek atau kosong".to_owned()
        ))
    );
}

#[test]
fn bad_request_without_detail_uses_fallback() {
    assert_eq!(
        interpret_predict_response(400, "{}"),
        Err(PredictError::Rejected("Teks tidak valid".to_owned()))
    );
}

#[test]
fn bad_request_with_garbage_body_uses_fallback() {
    assert_eq!(
        interpret_predict_response(400, "<html>"),
        Err(PredictError::Rejected("Teks tidak valid".to_owned()))
    );
}

// =============================================================
// interpret_predict_response — other failures
// =============================================================

#[test]
fn server_error_is_generic_failure() {
    assert_eq!(interpret_predict_response(500, ""), Err(PredictError::Failed));
    assert_eq!(
        interpret_predict_response(502, "bad gateway"),
        Err(PredictError::Failed)
    );
}

#[test]
fn unexpected_redirect_is_generic_failure() {
    assert_eq!(interpret_predict_response(302, ""), Err(PredictError::Failed));
}

// =============================================================
// PredictError messages
// =============================================================

#[test]
fn rejected_message_passes_detail_through() {
    let err = PredictError::Rejected("Text too short".to_owned());
    assert_eq!(err.to_string(), "Text too short");
}

#[test]
fn failed_message_is_localized() {
    assert_eq!(
        PredictError::Failed.to_string(),
        "Gagal menganalisis sentimen. Silakan coba lagi."
    );
}

#[test]
fn unreachable_message_is_localized() {
    assert_eq!(
        PredictError::Unreachable.to_string(),
        "Terjadi kesalahan saat menghubungi server. Pastikan backend sedang berjalan."
    );
}
