mod state;

pub mod config;
pub mod export;

use std::path::Path;

use log::{error, info, warn};

use crate::report::classifier::ReportClassifier;
use crate::report::types::SlaThresholds;
use crate::utils::file_utils;

// Re-export from submodules
pub use state::{AppState, AppEvent, INVALID_FILE_MESSAGE, PROCESSING_FAILED_MESSAGE};

/// Initialize env_logger, defaulting to info level when RUST_LOG is unset.
/// Safe to call more than once.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .try_init();
}

/// Application shell driving the classifier: owns the state, checks file
/// intake, and downgrades failures to user-visible messages
#[derive(Debug, Default)]
pub struct AppShell {
    /// Current application state
    state: AppState,

    /// Classifier used for every intake
    classifier: ReportClassifier,
}

impl AppShell {
    /// Create a new shell with default thresholds
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new shell with the given thresholds
    pub fn with_thresholds(thresholds: SlaThresholds) -> Self {
        Self {
            state: AppState {
                thresholds,
                ..AppState::default()
            },
            classifier: ReportClassifier::new(),
        }
    }

    /// Current application state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Apply an edit from the threshold form; takes effect on the next intake
    pub fn set_thresholds(&mut self, thresholds: SlaThresholds) {
        self.state = self
            .state
            .clone()
            .apply(AppEvent::ThresholdsChanged(thresholds));
    }

    /// Take in a report file: reject non-.csv names before reading, then
    /// read, classify with the current thresholds snapshot, and store the
    /// result. Read failures are logged and downgraded to the generic
    /// user-visible message.
    pub async fn process_file(&mut self, path: impl AsRef<Path>) -> &AppState {
        let path = path.as_ref();

        if !file_utils::has_extension(path, "csv") {
            warn!("Rejected non-csv file: {}", path.display());
            self.state = self.state.clone().apply(AppEvent::FileRejected);
            return &self.state;
        }

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();
        self.state = self.state.clone().apply(AppEvent::AnalysisStarted(file_name));

        match tokio::fs::read_to_string(path).await {
            Ok(content) => {
                let result = self.classifier.classify(&content, &self.state.thresholds);
                info!(
                    "Processed {}: {} devices, {} non-compliant",
                    path.display(),
                    result.total_devices,
                    result.non_compliant_devices
                );
                self.state = self.state.clone().apply(AppEvent::AnalysisCompleted(result));
            }
            Err(e) => {
                error!("Failed to read report file {}: {}", path.display(), e);
                self.state = self.state.clone().apply(AppEvent::AnalysisFailed);
            }
        }

        &self.state
    }

    /// Render the current result as the clipboard text report, if one exists
    pub fn export_report(&self) -> Option<String> {
        self.state
            .result
            .as_ref()
            .map(export::render_text_report)
    }
}
