use crate::fixtures::create_test_state;
use axum::{Json, extract::State};
use reviewsense_core::Sentiment;
use reviewsense_web::{handlers::predict_sentiment, models::PredictRequest};

#[tokio::test]
async fn predict_positive_for_brilliant_review() {
    let state = create_test_state();

    let request = PredictRequest {
        text: "An absolutely BRILLIANT movie!!!".to_string(),
    };

    let response = predict_sentiment(State(state), Json(request)).await;
    let body = response.0;

    assert_eq!(body.status, "ok");
    assert!(body.error.is_none());

    let data = body.data.expect("prediction data");
    assert_eq!(data.normalized_text, "an absolutely brilliant movie");
    assert_eq!(data.label, 1);
    assert_eq!(data.sentiment, Sentiment::Positive);
}

#[tokio::test]
async fn predict_negative_for_scathing_review() {
    let state = create_test_state();

    let request = PredictRequest {
        text: "Terrible. Just terrible.<br />Boring from start to finish.".to_string(),
    };

    let response = predict_sentiment(State(state), Json(request)).await;
    let body = response.0;

    assert_eq!(body.status, "ok");

    let data = body.data.expect("prediction data");
    assert_eq!(
        data.normalized_text,
        "terrible just terrible boring from start to finish"
    );
    assert_eq!(data.label, 0);
    assert_eq!(data.sentiment, Sentiment::Negative);
}

#[tokio::test]
async fn predict_rejects_empty_input() {
    let state = create_test_state();

    let request = PredictRequest {
        text: "".to_string(),
    };

    let response = predict_sentiment(State(state), Json(request)).await;
    let body = response.0;

    assert_eq!(body.status, "error");
    assert!(body.data.is_none());
    assert_eq!(body.error.unwrap().error_type, "empty_input");
}

#[tokio::test]
async fn predict_rejects_whitespace_only_input() {
    let state = create_test_state();

    let request = PredictRequest {
        text: "   \n\t  ".to_string(),
    };

    let response = predict_sentiment(State(state), Json(request)).await;
    let body = response.0;

    assert_eq!(body.status, "error");
    assert_eq!(body.error.unwrap().error_type, "empty_input");
}

#[tokio::test]
async fn predict_handles_text_that_normalizes_to_empty() {
    let state = create_test_state();

    // Raw text survives the trim check but nothing survives normalization,
    // so the model sees an empty string and falls back to its intercept.
    let request = PredictRequest {
        text: "!!! ??? ***".to_string(),
    };

    let response = predict_sentiment(State(state), Json(request)).await;
    let body = response.0;

    assert_eq!(body.status, "ok");

    let data = body.data.expect("prediction data");
    assert_eq!(data.normalized_text, "");
    assert_eq!(data.sentiment, Sentiment::Negative);
}

#[tokio::test]
async fn predict_response_json_shape() {
    let state = create_test_state();

    let request = PredictRequest {
        text: "A great watch".to_string(),
    };

    let response = predict_sentiment(State(state), Json(request)).await;
    let value = serde_json::to_value(&response.0).unwrap();

    assert_eq!(value["status"], "ok");
    assert_eq!(value["data"]["sentiment"], "positive");
    assert_eq!(value["data"]["label"], 1);
    assert!(value["error"].is_null());
}

#[tokio::test]
async fn predict_reports_confidence_percentage() {
    let state = create_test_state();

    let request = PredictRequest {
        text: "A brilliant, stunning film. The best.".to_string(),
    };

    let response = predict_sentiment(State(state), Json(request)).await;
    let data = response.0.data.expect("prediction data");

    let confidence = data.confidence.expect("confidence");
    assert!((50.0..=100.0).contains(&confidence));
    // Strongly positive input should be far from the decision boundary.
    assert!(confidence > 90.0);
}
