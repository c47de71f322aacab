use crate::report::types::{AnalysisResult, SlaThresholds};

/// Message shown when a selected file does not carry the .csv extension
pub const INVALID_FILE_MESSAGE: &str =
    "Formato de arquivo inválido. Por favor, carregue um arquivo .csv.";

/// Message shown when reading or classifying a report fails
pub const PROCESSING_FAILED_MESSAGE: &str =
    "Ocorreu um erro ao processar o arquivo. Verifique se o formato está correto.";

/// Shell-owned application state: the threshold configuration plus the
/// outcome of the most recent file intake
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    /// Current SLA thresholds, applied to the next classification
    pub thresholds: SlaThresholds,

    /// Result of the last successful classification
    pub result: Option<AnalysisResult>,

    /// User-visible error message, if the last intake failed
    pub error: Option<String>,

    /// Name of the file currently loaded or being processed
    pub file_name: Option<String>,

    /// Whether a classification is in flight
    pub loading: bool,
}

/// State transitions driven by the shell
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The threshold form was edited
    ThresholdsChanged(SlaThresholds),

    /// A selected file was rejected before reading (wrong extension)
    FileRejected,

    /// A report file passed the extension check and is being read
    AnalysisStarted(String),

    /// Classification finished
    AnalysisCompleted(AnalysisResult),

    /// Reading or classifying the report failed
    AnalysisFailed,
}

impl AppState {
    /// Create a fresh state with default thresholds
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event and return the next state. Pure: the only way the
    /// shell mutates its state.
    pub fn apply(self, event: AppEvent) -> Self {
        match event {
            AppEvent::ThresholdsChanged(thresholds) => Self { thresholds, ..self },
            AppEvent::FileRejected => Self {
                error: Some(INVALID_FILE_MESSAGE.to_string()),
                result: None,
                file_name: None,
                loading: false,
                ..self
            },
            AppEvent::AnalysisStarted(file_name) => Self {
                loading: true,
                error: None,
                file_name: Some(file_name),
                ..self
            },
            AppEvent::AnalysisCompleted(result) => Self {
                result: Some(result),
                loading: false,
                ..self
            },
            AppEvent::AnalysisFailed => Self {
                error: Some(PROCESSING_FAILED_MESSAGE.to_string()),
                result: None,
                loading: false,
                ..self
            },
        }
    }
}
