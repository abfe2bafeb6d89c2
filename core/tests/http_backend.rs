use axum::extract::Multipart;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use macrolingo_core::analyzer::{AnalysisSurface, ImageAnalysisFlow, ImageUpload, MacroRow, PieChart};
use macrolingo_core::translator::{TranslationForm, TranslationRequest, TranslatorFlow, TranslatorSurface};
use macrolingo_core::{AnalysisBackend, ClientConfig, HttpBackend, MacroLingoError, TranslationBackend};
use serde_json::{json, Value};

async fn mock_analyze(mut multipart: Multipart) -> Result<Json<Value>, (StatusCode, String)> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;
        let analysis = format!(
            "Here you go:\n```json\n{{\"protein_g\": {}, \"carbs_g\": \"20-25g\", \"fat_g\": 5, \"source\": \"{}\"}}\n```",
            bytes.len(),
            file_name
        );
        return Ok(Json(json!({ "analysis": analysis })));
    }
    Err((StatusCode::UNPROCESSABLE_ENTITY, "missing file field".to_string()))
}

async fn mock_translate(Json(body): Json<Value>) -> Json<Value> {
    let translation = match body.get("instruction") {
        Some(_) => format!("[{}] {}", body["style"].as_str().unwrap_or(""), body["text"].as_str().unwrap_or("")),
        None => "no instruction".to_string(),
    };
    Json(json!({ "translation": translation }))
}

async fn spawn_server(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

async fn spawn_mock_backend() -> HttpBackend {
    let app = Router::new()
        .route("/analyze-image", post(mock_analyze))
        .route("/translate", post(mock_translate));
    let base = spawn_server(app).await;
    HttpBackend::new(ClientConfig::new(&base, &base).unwrap())
}

async fn spawn_failing_backend() -> HttpBackend {
    let app = Router::new()
        .route(
            "/analyze-image",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "vision model offline") }),
        )
        .route("/translate", post(|| async { StatusCode::SERVICE_UNAVAILABLE }));
    let base = spawn_server(app).await;
    HttpBackend::new(ClientConfig::new(&base, &base).unwrap())
}

async fn spawn_garbled_backend() -> HttpBackend {
    let app = Router::new()
        .route("/analyze-image", post(|| async { "not json" }))
        .route("/translate", post(|| async { "not json" }));
    let base = spawn_server(app).await;
    HttpBackend::new(ClientConfig::new(&base, &base).unwrap())
}

async fn spawn_mistyped_backend() -> HttpBackend {
    let app = Router::new()
        .route("/analyze-image", post(|| async { Json(json!({ "analysis": 5 })) }))
        .route("/translate", post(|| async { Json(json!({ "translation": ["hallo"] })) }));
    let base = spawn_server(app).await;
    HttpBackend::new(ClientConfig::new(&base, &base).unwrap())
}

#[derive(Default)]
struct Page {
    status: String,
    trigger_changes: Vec<bool>,
    rows: Vec<MacroRow>,
    raw: Option<String>,
    chart: Option<PieChart>,
    output: Option<String>,
}

impl AnalysisSurface for Page {
    fn set_status(&mut self, message: &str) {
        self.status = message.to_string();
    }
    fn set_trigger_enabled(&mut self, enabled: bool) {
        self.trigger_changes.push(enabled);
    }
    fn show_macros(&mut self, rows: &[MacroRow]) {
        self.rows = rows.to_vec();
    }
    fn show_raw(&mut self, dump: Option<&str>) {
        self.raw = dump.map(str::to_string);
    }
    fn draw_chart(&mut self, pie: &PieChart) {
        self.chart = Some(pie.clone());
    }
}

impl TranslatorSurface for Page {
    fn set_status(&mut self, message: &str) {
        self.status = message.to_string();
    }
    fn set_trigger_enabled(&mut self, enabled: bool) {
        self.trigger_changes.push(enabled);
    }
    fn set_output(&mut self, text: &str) {
        self.output = Some(text.to_string());
    }
}

fn translation_form(text: &str, style: &str) -> TranslationForm {
    TranslationForm {
        input_language: "English".to_string(),
        output_language: "German".to_string(),
        text: text.to_string(),
        style: style.to_string(),
    }
}

#[tokio::test]
async fn upload_sends_file_field_and_decodes_analysis() {
    macrolingo_core::telemetry::init_tracing();
    let backend = spawn_mock_backend().await;

    let upload = ImageUpload::new("meal.jpg", vec![7u8; 32]).with_mime_type("image/jpeg");
    let response = backend.analyze_image(&upload).await.unwrap();

    let analysis = response.analysis.unwrap();
    assert!(analysis.contains("\"protein_g\": 32"), "got {}", analysis);
    assert!(analysis.contains("meal.jpg"));
}

#[tokio::test]
async fn image_flow_renders_breakdown_from_server() {
    let flow = ImageAnalysisFlow::new(spawn_mock_backend().await);
    let mut page = Page::default();

    flow.submit(&mut page, Some(ImageUpload::new("meal.jpg", vec![1u8; 10]))).await;

    assert_eq!(page.status, "Macronutrient breakdown ready.");
    assert_eq!(page.trigger_changes, vec![false, true]);
    assert_eq!(page.rows[1].value, "20-25g");
    assert_eq!(page.chart.unwrap().values(), vec![10.0, 22.5, 5.0]);
    assert!(page.raw.unwrap().contains("\"source\": \"meal.jpg\""));
}

#[tokio::test]
async fn non_success_status_keeps_body() {
    let backend = spawn_failing_backend().await;

    let err = backend
        .analyze_image(&ImageUpload::new("meal.jpg", vec![1, 2, 3]))
        .await
        .unwrap_err();

    match err {
        MacroLingoError::Http { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "vision model offline");
        }
        other => panic!("expected HTTP error, got {:?}", other),
    }
}

#[tokio::test]
async fn image_flow_resets_on_server_error() {
    let flow = ImageAnalysisFlow::new(spawn_failing_backend().await);
    let mut page = Page::default();

    flow.submit(&mut page, Some(ImageUpload::new("meal.jpg", vec![1]))).await;

    assert_eq!(page.status, "Analysis failed. Try a clearer image or check the server.");
    assert_eq!(page.trigger_changes, vec![false, true]);
    assert!(page.rows.is_empty());
    assert!(page.raw.is_none());
}

#[tokio::test]
async fn translate_posts_camel_case_body() {
    let backend = spawn_mock_backend().await;
    let request = TranslationRequest::from_form(&translation_form(" I like coding ", "default"));

    let response = backend.translate(&request).await.unwrap();

    assert_eq!(response.translation.as_deref(), Some("[default] I like coding"));
}

#[tokio::test]
async fn translate_omits_unknown_instruction() {
    let backend = spawn_mock_backend().await;
    let request = TranslationRequest::from_form(&translation_form("hi", "pirate"));

    let response = backend.translate(&request).await.unwrap();

    assert_eq!(response.translation.as_deref(), Some("no instruction"));
}

#[tokio::test]
async fn translator_flow_falls_back_when_backend_fails() {
    let flow = TranslatorFlow::new(spawn_failing_backend().await);
    let mut page = Page::default();

    flow.submit(&mut page, &translation_form("I like coding", "hk-mafia-90s")).await;

    assert_eq!(page.output.as_deref(), Some("我鍾意寫程式，唔好搞我喺度。"));
    assert_eq!(
        page.status,
        "Running without backend; showing a style-aware placeholder translation."
    );
    assert_eq!(page.trigger_changes, vec![false, true]);
}

#[tokio::test]
async fn undecodable_success_body_is_decode_error() {
    for backend in [spawn_garbled_backend().await, spawn_mistyped_backend().await] {
        let err = backend
            .analyze_image(&ImageUpload::new("meal.jpg", vec![1]))
            .await
            .unwrap_err();
        assert!(matches!(err, MacroLingoError::Decode(_)), "got {:?}", err);

        let request = TranslationRequest::from_form(&translation_form("hi", "default"));
        let err = backend.translate(&request).await.unwrap_err();
        assert!(matches!(err, MacroLingoError::Decode(_)), "got {:?}", err);
    }
}

#[tokio::test]
async fn image_flow_fails_on_undecodable_body() {
    let flow = ImageAnalysisFlow::new(spawn_garbled_backend().await);
    let mut page = Page::default();

    flow.submit(&mut page, Some(ImageUpload::new("meal.jpg", vec![1]))).await;

    assert_eq!(page.status, "Analysis failed. Try a clearer image or check the server.");
    assert_eq!(page.trigger_changes, vec![false, true]);
    assert!(page.rows.is_empty());
    assert!(page.raw.is_none());
}

#[tokio::test]
async fn translator_flow_falls_back_on_undecodable_body() {
    let flow = TranslatorFlow::new(spawn_garbled_backend().await);
    let mut page = Page::default();

    flow.submit(&mut page, &translation_form("I like coding", "default")).await;

    assert_eq!(page.output.as_deref(), Some("Ich programmiere gerne."));
    assert_eq!(
        page.status,
        "Running without backend; showing a style-aware placeholder translation."
    );
    assert_eq!(page.trigger_changes, vec![false, true]);
}
