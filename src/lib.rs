pub mod app;
pub mod report;
pub mod utils;

// Re-export main types and functions for easier access
pub use report::types::{
    AnalysisResult, DeviceStatus, FailedDeviceDetail, FailedInterface, InterfaceRole,
    SlaThresholds,
};
pub use report::classifier::{classify, ReportClassifier};

pub use app::{AppShell, AppState, AppEvent};

// Re-export utility functions
pub use utils::file_utils;
