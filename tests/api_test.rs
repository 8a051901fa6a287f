use actix_web::{test, web, App};
use ndarray::Array2;
use serde_json::{json, Value};

use student_outcome_predictor::encoder::EncodingMode;
use student_outcome_predictor::model::{Classifier, LogisticModel};
use student_outcome_predictor::{routes, AppState};

/// Returns a fixed label and checks the table it receives is aligned.
struct FixedLabel {
    names: Vec<String>,
    labels: Vec<i64>,
}

impl Classifier for FixedLabel {
    fn feature_names(&self) -> &[String] {
        &self.names
    }

    fn predict_labels(&self, table: &Array2<f64>) -> Vec<i64> {
        assert_eq!(table.dim(), (1, self.names.len()));
        self.labels.clone()
    }
}

fn fixed(labels: Vec<i64>) -> AppState {
    AppState {
        classifier: Box::new(FixedLabel {
            names: vec!["sum_click".into(), "region_Wales".into(), "gender_M".into()],
            labels,
        }),
        encoding_mode: EncodingMode::Corrected,
    }
}

fn sample() -> AppState {
    let model =
        LogisticModel::load(concat!(env!("CARGO_MANIFEST_DIR"), "/models/student_prediction_model.json"))
            .unwrap();
    AppState {
        classifier: Box::new(model),
        encoding_mode: EncodingMode::Corrected,
    }
}

async fn post_json(state: AppState, uri: &str, body: Value) -> (u16, Value) {
    let app = test::init_service(App::new().app_data(web::Data::new(state)).configure(routes)).await;
    let req = test::TestRequest::post().uri(uri).set_json(body).to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status().as_u16();
    let body = test::read_body(resp).await;
    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}

#[actix_web::test]
async fn test_predict_maps_labels() {
    let (status, body) = post_json(fixed(vec![1]), "/api/predict", json!({})).await;
    assert_eq!(status, 200);
    assert_eq!(body["label"], 1);
    assert_eq!(body["outcome"], "✅ Pass");
    assert_eq!(body["message"], "🧠 Predicted Final Result: ✅ Pass");

    let (_, body) = post_json(fixed(vec![0]), "/api/predict", json!({})).await;
    assert!(body["outcome"].as_str().unwrap().contains("Fail"));

    let (_, body) = post_json(fixed(vec![7]), "/api/predict", json!({})).await;
    assert_eq!(body["outcome"], "7");
}

#[actix_web::test]
async fn test_predict_reads_first_label_only() {
    let (_, body) = post_json(fixed(vec![1, 0, 0]), "/api/predict", json!({})).await;
    assert_eq!(body["label"], 1);
}

#[actix_web::test]
async fn test_empty_prediction_is_server_error() {
    let (status, body) = post_json(fixed(vec![]), "/api/predict", json!({})).await;
    assert_eq!(status, 500);
    assert_eq!(body["error"], "classifier returned no label");
}

#[actix_web::test]
async fn test_predict_with_sample_model() {
    let strong = json!({
        "gender": "Female",
        "age_band": ">55",
        "region": "South East",
        "highest_education": "Post Graduate Qualification",
        "studied_credits": 30,
        "sum_click": 15000,
        "imd_band": 10
    });
    let (status, body) = post_json(sample(), "/api/predict", strong).await;
    assert_eq!(status, 200);
    assert_eq!(body["engagement_level"], "Very High");
    assert_eq!(body["engagement_emoji"], "🚀");
    assert_eq!(body["outcome"], "✅ Pass");

    let weak = json!({
        "disability": "Yes",
        "region": "London",
        "studied_credits": 240,
        "num_of_prev_attempts": 10,
        "sum_click": 0
    });
    let (_, body) = post_json(sample(), "/api/predict", weak).await;
    assert_eq!(body["engagement_level"], "Low");
    assert_eq!(body["outcome"], "❌ Fail");
}

#[actix_web::test]
async fn test_preview_reports_engagement_and_advisory() {
    let (status, body) =
        post_json(fixed(vec![1]), "/api/preview", json!({"region": "Scotland", "sum_click": 100})).await;
    assert_eq!(status, 200);
    assert_eq!(body["engagement_level"], "Low");
    assert_eq!(body["engagement_emoji"], "😴");
    assert!(body["advisory"].as_str().unwrap().contains("England"));

    let (_, body) = post_json(fixed(vec![1]), "/api/preview", json!({"region": "North"})).await;
    assert_eq!(body["engagement_level"], "Moderate");
    assert!(body["advisory"].is_null());
}

#[actix_web::test]
async fn test_out_of_domain_input_rejected() {
    let (status, _) = post_json(fixed(vec![1]), "/api/predict", json!({"imd_band": 0})).await;
    assert_eq!(status, 400);

    let (status, _) = post_json(fixed(vec![1]), "/api/predict", json!({"region": "Wales"})).await;
    assert_eq!(status, 400);
}

#[actix_web::test]
async fn test_model_info_lists_columns() {
    let app = test::init_service(App::new().app_data(web::Data::new(fixed(vec![1]))).configure(routes)).await;
    let req = test::TestRequest::get().uri("/model/info").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["feature_count"], 3);
    assert_eq!(body["feature_names"][1], "region_Wales");
    assert_eq!(body["encoding_mode"], "corrected");
}

#[actix_web::test]
async fn test_homepage_and_health() {
    let app = test::init_service(App::new().app_data(web::Data::new(fixed(vec![1]))).configure(routes)).await;

    let req = test::TestRequest::get().uri("/").to_request();
    let body = test::call_and_read_body(&app, req).await;
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("Predict Student Result"));
    assert!(html.contains(r#"<option value="Post Graduate Qualification">"#));

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
}
