use log::{debug, trace};

use crate::report::types::{DeviceStatus, FailedDeviceDetail, FailedInterface, SlaThresholds};

use super::interface_line::parse_interface_line;
use super::segmenter::DeviceBlock;

/// Outcome of evaluating one device block against the thresholds
#[derive(Debug, Clone, PartialEq)]
pub enum BlockOutcome {
    /// The block carries no `Name` marker and is excluded from evaluation
    Skipped,

    /// Availability data was present and every measurement met its threshold
    Compliant,

    /// The device is out of SLA or its availability section is absent
    Failed(FailedDeviceDetail),
}

/// Evaluate one device block.
///
/// Each matching availability row is compared independently against its
/// role's threshold with strict less-than, so equality is compliant and
/// duplicate rows for one role can produce multiple failure entries.
pub fn evaluate_block(block: &DeviceBlock, thresholds: &SlaThresholds) -> BlockOutcome {
    let Some(device_name) = block.device_name() else {
        debug!("Skipping block without a Name marker");
        return BlockOutcome::Skipped;
    };
    let device_name = device_name.to_string();

    let Some(window) = block.availability_window() else {
        debug!("No availability section for device {}", device_name);
        return BlockOutcome::Failed(FailedDeviceDetail {
            device_name,
            failures: Vec::new(),
            status: DeviceStatus::DataUnavailable,
        });
    };

    let mut failures = Vec::new();

    for line in window {
        let Some(reading) = parse_interface_line(line) else {
            continue;
        };

        let expected_sla = thresholds.threshold_for(reading.role);
        if reading.availability < expected_sla {
            trace!(
                "Device {} interface {} below threshold: {} < {}",
                device_name, reading.token, reading.availability, expected_sla
            );
            failures.push(FailedInterface {
                interface_name: reading.token,
                availability: reading.availability,
                expected_sla,
            });
        }
    }

    if failures.is_empty() {
        BlockOutcome::Compliant
    } else {
        BlockOutcome::Failed(FailedDeviceDetail {
            device_name,
            failures,
            status: DeviceStatus::OutOfSla,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn block(lines: &[&str]) -> DeviceBlock {
        DeviceBlock {
            lines: lines.iter().map(|line| line.to_string()).collect(),
        }
    }

    #[test]
    fn nameless_block_is_skipped() {
        let block = block(&["###Section Title###", "Serial", "FGT123"]);
        assert_eq!(
            evaluate_block(&block, &SlaThresholds::default()),
            BlockOutcome::Skipped
        );
    }

    #[test]
    fn missing_availability_section_is_data_unavailable() {
        let block = block(&["###Section Title###", "Name", "Device-01"]);
        let outcome = evaluate_block(&block, &SlaThresholds::default());

        let BlockOutcome::Failed(detail) = outcome else {
            panic!("expected a failed outcome, got {:?}", outcome);
        };
        assert_eq!(detail.device_name, "Device-01");
        assert_eq!(detail.status, DeviceStatus::DataUnavailable);
        assert!(detail.failures.is_empty());
    }

    #[test]
    fn measurement_equal_to_threshold_is_compliant() {
        let block = block(&[
            "###Section Title###",
            "Name",
            "Device-01",
            "###SD-WAN Availability###",
            "SD-WAN,Available,99.95,0",
        ]);
        assert_eq!(
            evaluate_block(&block, &SlaThresholds::default()),
            BlockOutcome::Compliant
        );
    }

    #[test]
    fn measurement_below_threshold_fails_with_detail() {
        let block = block(&[
            "###Section Title###",
            "Name",
            "Device-01",
            "###SD-WAN Availability###",
            "SD-WAN,Available,99.80,0",
        ]);
        let outcome = evaluate_block(&block, &SlaThresholds::default());

        let BlockOutcome::Failed(detail) = outcome else {
            panic!("expected a failed outcome, got {:?}", outcome);
        };
        assert_eq!(detail.status, DeviceStatus::OutOfSla);
        assert_eq!(
            detail.failures,
            vec![FailedInterface {
                interface_name: "SD-WAN".to_string(),
                availability: 99.80,
                expected_sla: 99.95,
            }]
        );
    }

    #[test]
    fn duplicate_rows_for_one_role_are_not_deduplicated() {
        let block = block(&[
            "###Section Title###",
            "Name",
            "Device-01",
            "###SD-WAN Availability###",
            "wan1,Available,99.00,0",
            "wan1,Available,98.50,0",
        ]);
        let outcome = evaluate_block(&block, &SlaThresholds::default());

        let BlockOutcome::Failed(detail) = outcome else {
            panic!("expected a failed outcome, got {:?}", outcome);
        };
        assert_eq!(detail.failures.len(), 2);
        assert_eq!(detail.failures[0].availability, 99.00);
        assert_eq!(detail.failures[1].availability, 98.50);
    }

    #[test]
    fn rows_after_next_section_marker_are_ignored() {
        let block = block(&[
            "###Section Title###",
            "Name",
            "Device-01",
            "###SD-WAN Availability###",
            "wan1,Available,100.00,0",
            "###Interface Usage###",
            "wan1,Available,0.00,0",
        ]);
        assert_eq!(
            evaluate_block(&block, &SlaThresholds::default()),
            BlockOutcome::Compliant
        );
    }

    #[test]
    fn alias_rows_use_the_canonical_role_threshold() {
        let thresholds = SlaThresholds {
            sdwan: 0.0,
            wan1: 99.90,
            wan2: 95.00,
        };
        let block = block(&[
            "###Section Title###",
            "Name",
            "Device-01",
            "###SD-WAN Availability###",
            "wan,Available,99.50,0",
            "a,Available,94.00,0",
        ]);
        let outcome = evaluate_block(&block, &thresholds);

        let BlockOutcome::Failed(detail) = outcome else {
            panic!("expected a failed outcome, got {:?}", outcome);
        };
        assert_eq!(detail.failures.len(), 2);
        assert_eq!(detail.failures[0].interface_name, "wan");
        assert_eq!(detail.failures[0].expected_sla, 99.90);
        assert_eq!(detail.failures[1].interface_name, "a");
        assert_eq!(detail.failures[1].expected_sla, 95.00);
    }
}
