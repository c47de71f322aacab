pub mod classifier;
pub mod types;

// Re-export from submodules
pub use classifier::{classify, ReportClassifier};
pub use types::{
    AnalysisResult, DeviceStatus, FailedDeviceDetail, FailedInterface, InterfaceRole,
    SlaThresholds,
};
