use crate::config::{initialize_app_state, ServeConfig};
use crate::router::create_router;
use crate::schemas::AppState;
use axum::Router;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

pub const INDEX_HTML: &str = "<!DOCTYPE html><html><body>profit predictor</body></html>";
pub const APP_JS: &str = "console.log('frontend');";

static NEXT_DIR: AtomicUsize = AtomicUsize::new(0);

/// Create a fresh dist directory, optionally holding a fake frontend bundle.
pub fn setup_dist_dir(with_bundle: bool) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "profit-predictor-test-{}-{}",
        std::process::id(),
        NEXT_DIR.fetch_add(1, Ordering::SeqCst)
    ));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("Failed to create test dist dir");

    if with_bundle {
        std::fs::write(dir.join("index.html"), INDEX_HTML).expect("Failed to write index.html");
        std::fs::write(dir.join("app.js"), APP_JS).expect("Failed to write app.js");
    }

    dir
}

/// Create AppState for testing
pub fn setup_test_app_state(dist_dir: PathBuf) -> AppState {
    let config = ServeConfig::new("127.0.0.1:0", dist_dir, "http://localhost:5001", "info")
        .expect("Test configuration should be valid");
    initialize_app_state(&config)
}

/// Initialize tracing for tests with output to STDERR.
///
/// The log level is determined by the RUST_LOG environment variable,
/// defaulting to WARN if not set.
fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
    let log_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|level| level.parse::<Level>().ok())
        .unwrap_or(Level::WARN);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_default(subscriber)
}

/// Create axum app for testing
pub fn setup_test_app(with_bundle: bool) -> Router {
    let _guard = init_test_tracing();

    let state = setup_test_app_state(setup_dist_dir(with_bundle));
    create_router(state)
}
