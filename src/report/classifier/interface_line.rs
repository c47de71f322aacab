use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::report::types::InterfaceRole;

// Matches "Interface,Available,Value," with the trailing field left open.
// Alternation order matters: "wan1"/"wan2" must be tried before the bare
// "wan" alias so the longer tokens win.
static INTERFACE_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(SD-WAN|wan1|wan2|a|wan),Available,([\d.]+),").unwrap()
});

/// One availability measurement extracted from a report row
#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceReading {
    /// Raw interface token as it appeared in the report
    pub token: String,

    /// SLA role the token maps to
    pub role: InterfaceRole,

    /// Measured availability (%)
    pub availability: f64,
}

/// Try to extract an availability measurement from one report line.
/// Lines that do not match the vendor row shape, or whose numeric field
/// does not parse, are ignored (`None`).
pub fn parse_interface_line(line: &str) -> Option<InterfaceReading> {
    let captures = INTERFACE_LINE_RE.captures(line)?;

    let token = captures[1].trim().to_string();
    let role = InterfaceRole::from_token(&token)?;
    let availability = captures[2].parse::<f64>().ok()?;

    trace!("Matched interface row: {} -> {:?} at {}", token, role, availability);

    Some(InterfaceReading {
        token,
        role,
        availability,
    })
}
