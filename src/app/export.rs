use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Result, Context};
use log::debug;

use crate::report::types::{AnalysisResult, DeviceStatus};
use crate::utils::file_utils;

/// Render the human-readable report used for clipboard export.
///
/// Fixed Portuguese template: a summary block with the three counts, then
/// one section per failed device listing either the unavailable-data line
/// or each failing interface with availability and expected SLA to four
/// decimal places. One-way serialization; the output is never re-parsed.
pub fn render_text_report(result: &AnalysisResult) -> String {
    let mut report = String::new();

    let _ = writeln!(report, "Resumo da Análise:");
    let _ = writeln!(report, "- Total de Unidades Verificadas: {}", result.total_devices);
    let _ = writeln!(report, "- Unidades em Conformidade: {}", result.compliant_devices);
    let _ = writeln!(
        report,
        "- Unidades Fora de Conformidade: {}",
        result.non_compliant_devices
    );
    let _ = writeln!(report);

    if !result.failed_device_details.is_empty() {
        let _ = writeln!(report, "--- DETALHES DAS FALHAS ---");
        let _ = writeln!(report);

        for device in &result.failed_device_details {
            let _ = writeln!(report, "Device: {}", device.device_name);
            if device.status == DeviceStatus::DataUnavailable {
                let _ = writeln!(
                    report,
                    "- Status: Dados de disponibilidade não encontrados no relatório."
                );
            } else {
                for failure in &device.failures {
                    let _ = writeln!(
                        report,
                        "- Interface: {} | Disponibilidade: {:.4}% (SLA esperado: {:.4}%)",
                        failure.interface_name, failure.availability, failure.expected_sla
                    );
                }
            }
            let _ = writeln!(report);
        }
    }

    report
}

/// Serialize an analysis result to pretty-printed JSON
pub fn render_json(result: &AnalysisResult) -> Result<String> {
    serde_json::to_string_pretty(result).context("Failed to serialize analysis result")
}

/// Write the text report to a file
pub fn write_text_report(path: impl AsRef<Path>, result: &AnalysisResult) -> Result<()> {
    let path = path.as_ref();
    debug!("Writing text report to {}", path.display());
    file_utils::write_string_to_file(path, &render_text_report(result))
}
