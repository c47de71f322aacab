use log::debug;

/// Marker that opens a new device section in the vendor export
pub const SECTION_TITLE_MARKER: &str = "###Section Title###";

/// Marker that opens the interface-availability rows inside a device block
pub const AVAILABILITY_MARKER: &str = "###SD-WAN Availability###";

/// Line that precedes the device name inside a block
pub const NAME_MARKER: &str = "Name";

/// The lines of one device section, trimmed and quote-stripped,
/// with blank lines dropped
#[derive(Debug, Clone, Default)]
pub struct DeviceBlock {
    /// Block contents in report order, starting with the section marker line
    pub lines: Vec<String>,
}

impl DeviceBlock {
    /// Device name from the line following the `Name` marker.
    /// Returns `None` when the marker is absent or is the last line.
    pub fn device_name(&self) -> Option<&str> {
        let name_index = self.lines.iter().position(|line| line == NAME_MARKER)?;
        self.lines.get(name_index + 1).map(|line| line.trim())
    }

    /// Bounded scan over the availability rows: the lines strictly after the
    /// availability marker, up to (not including) the next section marker.
    /// Returns `None` when the block carries no availability section.
    pub fn availability_window(&self) -> Option<impl Iterator<Item = &str>> {
        let marker_index = self
            .lines
            .iter()
            .position(|line| line.starts_with(AVAILABILITY_MARKER))?;

        Some(
            self.lines[marker_index + 1..]
                .iter()
                .map(|line| line.as_str())
                .take_while(|line| !line.starts_with("###")),
        )
    }
}

/// Normalize one raw report line: trim surrounding whitespace (this also
/// drops stray carriage returns) and strip all double-quote characters.
fn normalize_line(raw: &str) -> String {
    raw.trim().replace('"', "")
}

/// Segment the raw report text into per-device blocks.
///
/// A line starting with the section-title marker seals the block built so
/// far (if non-empty) and opens a new one; the marker line itself belongs to
/// the block it opens. Blank lines are dropped from block contents. A
/// trailing non-empty block is sealed at end of input.
pub fn segment_blocks(text: &str) -> Vec<DeviceBlock> {
    let mut blocks = Vec::new();
    let mut current = DeviceBlock::default();

    for raw_line in text.split('\n') {
        let line = normalize_line(raw_line);

        if line.starts_with(SECTION_TITLE_MARKER) {
            if !current.lines.is_empty() {
                blocks.push(current);
            }
            current = DeviceBlock::default();
        }

        if !line.is_empty() {
            current.lines.push(line);
        }
    }

    if !current.lines.is_empty() {
        blocks.push(current);
    }

    debug!("Segmented report into {} device blocks", blocks.len());
    blocks
}
