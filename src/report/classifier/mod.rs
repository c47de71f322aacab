mod evaluator;
mod interface_line;
mod segmenter;

use log::info;

use crate::report::types::{AnalysisResult, SlaThresholds};

// Re-export from submodules
pub use evaluator::BlockOutcome;
pub use interface_line::{parse_interface_line, InterfaceReading};
pub use segmenter::{segment_blocks, DeviceBlock, AVAILABILITY_MARKER, SECTION_TITLE_MARKER};

/// Report classifier responsible for segmenting the vendor export and
/// evaluating each device against the SLA thresholds
#[derive(Debug, Default)]
pub struct ReportClassifier;

impl ReportClassifier {
    /// Create a new report classifier
    pub fn new() -> Self {
        Self
    }

    /// Classify a raw report against the given thresholds.
    ///
    /// Pure and infallible: arbitrary text produces a result, with
    /// structural gaps handled as data-unavailable devices or silent
    /// skips rather than errors.
    pub fn classify(&self, text: &str, thresholds: &SlaThresholds) -> AnalysisResult {
        let blocks = segment_blocks(text);

        // Blocks are counted before evaluation, so a block that is later
        // skipped for lacking a Name marker still contributes here. This
        // matches the vendor tool's original accounting.
        let total_devices = blocks.len();

        let mut failed_device_details = Vec::new();
        let mut compliant_devices = 0;

        for block in &blocks {
            match evaluator::evaluate_block(block, thresholds) {
                BlockOutcome::Skipped => {}
                BlockOutcome::Compliant => compliant_devices += 1,
                BlockOutcome::Failed(detail) => failed_device_details.push(detail),
            }
        }

        info!(
            "Classified {} devices: {} compliant, {} non-compliant",
            total_devices,
            compliant_devices,
            failed_device_details.len()
        );

        AnalysisResult {
            total_devices,
            compliant_devices,
            non_compliant_devices: failed_device_details.len(),
            failed_device_details,
        }
    }
}

/// Classify a raw report with a one-off classifier
pub fn classify(text: &str, thresholds: &SlaThresholds) -> AnalysisResult {
    ReportClassifier::new().classify(text, thresholds)
}
