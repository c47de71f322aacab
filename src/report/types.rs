use serde::{Serialize, Deserialize};

/// Minimum acceptable availability percentage per monitored interface role
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlaThresholds {
    /// Threshold for the SD-WAN virtual interface (%)
    pub sdwan: f64,

    /// Threshold for the primary WAN link (tokens "wan1" and "wan") (%)
    pub wan1: f64,

    /// Threshold for the secondary WAN link (tokens "wan2" and "a") (%)
    pub wan2: f64,
}

impl Default for SlaThresholds {
    fn default() -> Self {
        Self {
            sdwan: 99.95,
            wan1: 99.90,
            wan2: 99.90,
        }
    }
}

impl SlaThresholds {
    /// Get the configured threshold for an interface role
    pub fn threshold_for(&self, role: InterfaceRole) -> f64 {
        match role {
            InterfaceRole::SdWan => self.sdwan,
            InterfaceRole::Wan1 => self.wan1,
            InterfaceRole::Wan2 => self.wan2,
        }
    }
}

/// Parse a raw threshold form field into a percentage.
/// Empty or unparseable input maps to 0, matching the threshold form behavior.
pub fn parse_threshold_input(raw: &str) -> f64 {
    let raw = raw.trim();
    if raw.is_empty() {
        return 0.0;
    }
    raw.parse::<f64>().unwrap_or(0.0)
}

/// One of the three monitored WAN paths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterfaceRole {
    /// The SD-WAN aggregate interface
    SdWan,

    /// Primary WAN link
    Wan1,

    /// Secondary WAN link
    Wan2,
}

impl InterfaceRole {
    /// Map a raw interface token from the report to its SLA role.
    /// "wan" and "a" are bare fallback aliases the vendor export uses
    /// when it abbreviates interface names.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "SD-WAN" => Some(Self::SdWan),
            "wan1" | "wan" => Some(Self::Wan1),
            "wan2" | "a" => Some(Self::Wan2),
            _ => None,
        }
    }
}

/// One interface role that measured below its threshold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailedInterface {
    /// Raw interface token as it appeared in the report
    #[serde(rename = "interfaceName")]
    pub interface_name: String,

    /// Measured availability (%)
    pub availability: f64,

    /// Threshold the measurement was compared against (%)
    #[serde(rename = "expectedSla")]
    pub expected_sla: f64,
}

/// Classification of a device that did not come out compliant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceStatus {
    /// At least one interface measured below its threshold
    #[serde(rename = "OUT_OF_SLA")]
    OutOfSla,

    /// The availability section was absent from the device block
    #[serde(rename = "DATA_UNAVAILABLE")]
    DataUnavailable,
}

/// Details for one device that is out of SLA or missing availability data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailedDeviceDetail {
    /// Device name taken from the line following the "Name" marker
    #[serde(rename = "deviceName")]
    pub device_name: String,

    /// Interfaces that measured below threshold; empty when data is unavailable
    pub failures: Vec<FailedInterface>,

    /// Why the device landed in the failed list
    pub status: DeviceStatus,
}

/// Aggregate outcome of classifying one report
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Number of device blocks found in the report
    #[serde(rename = "totalDevices")]
    pub total_devices: usize,

    /// Devices whose availability section was present and fully within SLA
    #[serde(rename = "compliantDevices")]
    pub compliant_devices: usize,

    /// Devices that are out of SLA or missing availability data
    #[serde(rename = "nonCompliantDevices")]
    pub non_compliant_devices: usize,

    /// Per-device details for every non-compliant device
    #[serde(rename = "failedDeviceDetails")]
    pub failed_device_details: Vec<FailedDeviceDetail>,
}
