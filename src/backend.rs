use axum::{
    extract::{DefaultBodyLimit, Form, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::IntoResponse,
    routing::post,
    Router,
};
use serde::Deserialize;
use std::{
    cmp::Ordering,
    path::PathBuf,
    sync::atomic::{AtomicU64, Ordering as AtomicOrdering},
    sync::Arc,
    time::{SystemTime, UNIX_EPOCH},
};
use tokio::{net::TcpListener, time::Instant};
use tower_http::services::{ServeDir, ServeFile};

use crate::site::contact::Field;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DIST_DIR: &str = "dist";
const DEFAULT_CONTACT_MAX_BODY_BYTES: usize = 16 * 1024;
const ACKNOWLEDGEMENT: &str = "Thank you! Your message has been received.";
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;
const DEFAULT_LOG_CONTACT_MODE: ContactLogMode = ContactLogMode::Redacted;

const CONTACT_MAX_BODY_BYTES_BOUNDS: (usize, usize) = (1_024, 1024 * 1024);
const REQUEST_ID_HEADER: &str = "x-request-id";

static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum LogLevel {
    Debug,
    Info,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(level: LogLevel) -> u8 {
            match level {
                LogLevel::Debug => 0,
                LogLevel::Info => 1,
            }
        }

        rank(*self).cmp(&rank(*other))
    }
}

impl LogLevel {
    fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
        }
    }
}

/// How much of a contact submission reaches the log.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum ContactLogMode {
    Redacted,
    Full,
}

#[derive(Clone, Debug)]
struct HostConfig {
    port: u16,
    dist_dir: PathBuf,
    contact_max_body_bytes: usize,
    log_level: LogLevel,
    log_contact_mode: ContactLogMode,
}

impl HostConfig {
    fn from_env() -> Self {
        let port = parse_env_non_empty_string("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .filter(|port| *port != 0)
            .unwrap_or(DEFAULT_PORT);
        let dist_dir = parse_env_non_empty_string("SITE_DIST_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR));
        let contact_max_body_bytes = parse_usize_with_bounds(
            parse_env_non_empty_string("CONTACT_MAX_BODY_BYTES").as_deref(),
            DEFAULT_CONTACT_MAX_BODY_BYTES,
            CONTACT_MAX_BODY_BYTES_BOUNDS,
        );
        let log_level = parse_log_level(
            parse_env_non_empty_string("LOG_LEVEL").as_deref(),
            DEFAULT_LOG_LEVEL,
        );
        let log_contact_mode = parse_contact_log_mode(
            parse_env_non_empty_string("LOG_CONTACT_MODE").as_deref(),
            DEFAULT_LOG_CONTACT_MODE,
        );

        Self {
            port,
            dist_dir,
            contact_max_body_bytes,
            log_level,
            log_contact_mode,
        }
    }
}

#[derive(Clone)]
struct AppState {
    config: Arc<HostConfig>,
}

#[derive(Deserialize)]
struct ContactSubmission {
    #[serde(rename = "form-name")]
    form_name: Option<String>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    message: String,
}

impl ContactSubmission {
    fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Names of the fields that arrived empty. Only reported in the log.
    fn blank_fields(&self) -> Vec<&'static str> {
        Field::ALL
            .into_iter()
            .filter(|field| self.field(*field).is_empty())
            .map(Field::name)
            .collect()
    }
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = HostConfig::from_env();
    let bind_address = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&bind_address).await?;

    log_event(
        &config,
        LogLevel::Info,
        "host_listening",
        serde_json::json!({
            "url": format!("http://127.0.0.1:{}", config.port),
            "dist_dir": config.dist_dir.display().to_string(),
        }),
    );

    axum::serve(listener, router(config)).await?;
    Ok(())
}

/// `POST /` acknowledges and logs any form post; every other request
/// (including `GET /`) is a file from the bundle or, failing that, the
/// bundle's `index.html`.
fn router(config: HostConfig) -> Router {
    let static_service =
        ServeDir::new(&config.dist_dir).fallback(ServeFile::new(config.dist_dir.join("index.html")));
    let body_limit = DefaultBodyLimit::max(config.contact_max_body_bytes);

    let state = AppState {
        config: Arc::new(config),
    };

    Router::new()
        .route(
            "/",
            post(submit_contact_form)
                .layer(body_limit)
                .fallback_service(static_service.clone()),
        )
        .fallback_service(static_service)
        .with_state(state)
}

async fn submit_contact_form(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(submission): Form<ContactSubmission>,
) -> axum::response::Response {
    let request_started_at = Instant::now();
    let request_id = resolve_request_id(&headers);
    let config = state.config.as_ref();

    let status = StatusCode::OK;

    log_event(
        config,
        LogLevel::Info,
        "contact_submission",
        serde_json::json!({
            "request_id": request_id.as_str(),
            "status": status.as_u16(),
            "form_name": submission.form_name.as_deref(),
            "blank_fields": submission.blank_fields(),
            "duration_ms": request_started_at.elapsed().as_millis(),
            "submission": submission_for_logging(&submission, config.log_contact_mode),
        }),
    );

    let mut response_headers = HeaderMap::new();
    response_headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    response_with_request_id(status, response_headers, ACKNOWLEDGEMENT, &request_id)
}

fn submission_for_logging(submission: &ContactSubmission, mode: ContactLogMode) -> serde_json::Value {
    match mode {
        ContactLogMode::Redacted => serde_json::json!({
            "name_chars": submission.name.chars().count(),
            "email_domain": email_domain(&submission.email),
            "message_chars": submission.message.chars().count(),
        }),
        ContactLogMode::Full => serde_json::json!({
            "name": submission.name.as_str(),
            "email": submission.email.as_str(),
            "message": submission.message.as_str(),
        }),
    }
}

fn email_domain(email: &str) -> Option<String> {
    let (_, domain) = email.trim().rsplit_once('@')?;
    let domain = domain.trim().to_ascii_lowercase();

    if domain.is_empty() {
        None
    } else {
        Some(domain)
    }
}

fn parse_env_non_empty_string(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_usize_with_bounds(raw: Option<&str>, default: usize, bounds: (usize, usize)) -> usize {
    raw.and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_log_level(raw: Option<&str>, default: LogLevel) -> LogLevel {
    match raw.map(str::to_ascii_lowercase).as_deref() {
        Some("debug") => LogLevel::Debug,
        Some("info") => LogLevel::Info,
        _ => default,
    }
}

fn parse_contact_log_mode(raw: Option<&str>, default: ContactLogMode) -> ContactLogMode {
    match raw.map(str::to_ascii_lowercase).as_deref() {
        Some("full") => ContactLogMode::Full,
        Some("redacted") => ContactLogMode::Redacted,
        _ => default,
    }
}

fn now_unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis())
        .unwrap_or(0)
}

fn now_unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_secs())
        .unwrap_or(0)
}

fn generate_request_id() -> String {
    let counter = REQUEST_ID_COUNTER.fetch_add(1, AtomicOrdering::Relaxed);
    format!("req-{}-{counter}", now_unix_millis())
}

fn resolve_request_id(headers: &HeaderMap) -> String {
    let value = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|raw| raw.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string);

    value.unwrap_or_else(generate_request_id)
}

fn response_with_request_id(
    status: StatusCode,
    mut headers: HeaderMap,
    payload: impl IntoResponse,
    request_id: &str,
) -> axum::response::Response {
    if let Ok(request_id_header) = HeaderValue::from_str(request_id) {
        headers.insert(REQUEST_ID_HEADER, request_id_header);
    }
    (status, headers, payload).into_response()
}

fn log_event(config: &HostConfig, level: LogLevel, event: &str, fields: serde_json::Value) {
    if level < config.log_level {
        return;
    }

    let mut payload = serde_json::Map::new();
    payload.insert(
        "ts".to_string(),
        serde_json::Value::Number(serde_json::Number::from(now_unix_seconds())),
    );
    payload.insert("level".to_string(), serde_json::Value::String(level.as_str().to_string()));
    payload.insert("event".to_string(), serde_json::Value::String(event.to_string()));

    if let serde_json::Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    println!("{}", serde_json::Value::Object(payload));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::contact::{ContactDraft, CONTACT_FORM_NAME, FORM_CONTENT_TYPE};
    use std::{fs, net::SocketAddr};

    const INDEX_HTML: &str = "<!doctype html><title>Wave Draft</title><div id=\"app\"></div>";

    fn test_config(dist_dir: PathBuf) -> HostConfig {
        HostConfig {
            port: DEFAULT_PORT,
            dist_dir,
            contact_max_body_bytes: DEFAULT_CONTACT_MAX_BODY_BYTES,
            log_level: DEFAULT_LOG_LEVEL,
            log_contact_mode: DEFAULT_LOG_CONTACT_MODE,
        }
    }

    fn submission(form_name: Option<&str>, name: &str, email: &str, message: &str) -> ContactSubmission {
        ContactSubmission {
            form_name: form_name.map(ToString::to_string),
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    fn dist_fixture() -> tempfile::TempDir {
        let dist = tempfile::tempdir().expect("temp dir");
        fs::write(dist.path().join("index.html"), INDEX_HTML).expect("write index");
        fs::write(dist.path().join("hero-bg.jpg"), b"jpeg-bytes").expect("write asset");
        dist
    }

    async fn spawn_host(config: HostConfig) -> SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind ephemeral port");
        let address = listener.local_addr().expect("local address");
        tokio::spawn(async move {
            let _ = axum::serve(listener, router(config)).await;
        });
        address
    }

    fn jane() -> ContactDraft {
        ContactDraft {
            name: "Jane".to_string(),
            email: "jane@x.com".to_string(),
            message: "Hi".to_string(),
        }
    }

    #[test]
    fn blank_fields_are_listed_in_field_order() {
        assert!(submission(Some("contact"), "Jane", "jane@x.com", "Hi").blank_fields().is_empty());
        assert_eq!(
            submission(Some("contact"), "", "jane@x.com", "").blank_fields(),
            vec!["name", "message"]
        );
        assert!(submission(None, "Jane", "jane@x.com", "   ").blank_fields().is_empty());
    }

    #[test]
    fn redacted_logging_keeps_only_shape() {
        let logged = submission_for_logging(
            &submission(Some("contact"), "Jane", "Jane@X.com", "Hello there"),
            ContactLogMode::Redacted,
        );

        assert_eq!(logged["name_chars"], 4);
        assert_eq!(logged["email_domain"], "x.com");
        assert_eq!(logged["message_chars"], 11);
        assert!(logged.get("email").is_none());
    }

    #[test]
    fn email_domain_ignores_malformed_addresses() {
        assert_eq!(email_domain("jane@x.com").as_deref(), Some("x.com"));
        assert_eq!(email_domain("jane@"), None);
        assert_eq!(email_domain("jane"), None);
    }

    #[test]
    fn bounded_values_fall_back_to_default() {
        assert_eq!(parse_usize_with_bounds(Some("4096"), 16, (1_024, 8_192)), 4096);
        assert_eq!(parse_usize_with_bounds(Some("12"), 16, (1_024, 8_192)), 16);
        assert_eq!(parse_usize_with_bounds(Some("lots"), 16, (1_024, 8_192)), 16);
        assert_eq!(parse_usize_with_bounds(None, 16, (1_024, 8_192)), 16);
        assert_eq!(parse_log_level(Some("DEBUG"), LogLevel::Info), LogLevel::Debug);
        assert_eq!(parse_log_level(Some("trace"), LogLevel::Info), LogLevel::Info);
        assert_eq!(parse_contact_log_mode(Some("Full"), ContactLogMode::Redacted), ContactLogMode::Full);
    }

    #[test]
    fn request_id_header_is_reused_when_present() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static(" abc-123 "));
        assert_eq!(resolve_request_id(&headers), "abc-123");

        let generated = resolve_request_id(&HeaderMap::new());
        assert!(generated.starts_with("req-"));
    }

    #[tokio::test]
    async fn every_path_serves_the_same_page() {
        let dist = dist_fixture();
        let address = spawn_host(test_config(dist.path().to_path_buf())).await;
        let client = reqwest::Client::new();

        for path in ["/", "/index.html", "/services", "/some/deep/link"] {
            let response = client
                .get(format!("http://{address}{path}"))
                .send()
                .await
                .expect("request should complete");
            assert_eq!(response.status().as_u16(), 200, "path {path}");
            let body = response.text().await.expect("body");
            assert_eq!(body, INDEX_HTML, "path {path}");
        }

        let asset = client
            .get(format!("http://{address}/hero-bg.jpg"))
            .send()
            .await
            .expect("request should complete");
        assert_eq!(asset.status().as_u16(), 200);
        assert_eq!(asset.bytes().await.expect("body").as_ref(), b"jpeg-bytes");
    }

    #[tokio::test]
    async fn contact_form_posts_are_acknowledged() {
        let dist = dist_fixture();
        let address = spawn_host(test_config(dist.path().to_path_buf())).await;
        let client = reqwest::Client::new();

        let response = client
            .post(format!("http://{address}/"))
            .header(reqwest::header::CONTENT_TYPE, FORM_CONTENT_TYPE)
            .header(REQUEST_ID_HEADER, "req-test")
            .body(jane().encode(CONTACT_FORM_NAME))
            .send()
            .await
            .expect("request should complete");

        assert_eq!(response.status().as_u16(), 200);
        assert_eq!(
            response
                .headers()
                .get(REQUEST_ID_HEADER)
                .and_then(|value| value.to_str().ok()),
            Some("req-test")
        );
    }

    #[tokio::test]
    async fn any_form_post_is_acknowledged_but_oversized_bodies_are_refused() {
        let dist = dist_fixture();
        let mut config = test_config(dist.path().to_path_buf());
        config.contact_max_body_bytes = 1_024;
        let address = spawn_host(config).await;
        let client = reqwest::Client::new();

        let mut incomplete = jane();
        incomplete.message.clear();
        for body in [incomplete.encode(CONTACT_FORM_NAME), jane().encode("newsletter")] {
            let response = client
                .post(format!("http://{address}/"))
                .header(reqwest::header::CONTENT_TYPE, FORM_CONTENT_TYPE)
                .body(body)
                .send()
                .await
                .expect("request should complete");
            assert_eq!(response.status().as_u16(), 200);
            assert_eq!(response.text().await.expect("body"), ACKNOWLEDGEMENT);
        }

        let mut huge = jane();
        huge.message = "x".repeat(4_096);
        let oversized = client
            .post(format!("http://{address}/"))
            .header(reqwest::header::CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(huge.encode(CONTACT_FORM_NAME))
            .send()
            .await
            .expect("request should complete");
        assert_eq!(oversized.status().as_u16(), 413);
    }
}
