//! Field extraction from exiftool's label-colon-value output.
//!
//! exiftool prints one `<Label>: <value>` line per tag. Extraction is a
//! linear scan that tests whether each line *starts with* a label string,
//! then splits on `:` and parses the second segment. Only three labels are
//! consumed: `Image Width`, `Image Height`, and `Focal Length`; everything
//! else is ignored.
//!
//! Both extractors distinguish "field absent" from "field present with value
//! zero": they return `Option`, and `None` always means the field could not
//! be recovered from the output. Callers skip such files instead of treating
//! them as zero-valued.

use std::fmt;

const WIDTH_LABEL: &str = "Image Width";
const HEIGHT_LABEL: &str = "Image Height";
const FOCAL_LABEL: &str = "Focal Length";

/// Pixel dimensions of an image as reported by the metadata tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels, always non-zero
    pub height: u32,
}

impl Dimensions {
    /// Width divided by height; panoramic images have large ratios.
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Extracts image dimensions from metadata lines.
///
/// Scans for lines beginning with `Image Width` and `Image Height`; a later
/// match overwrites an earlier one. Returns `None` - absence, not zero - when
/// either field is missing or unparsable, or when the reported height is
/// zero (a zero height would otherwise produce an infinite ratio).
pub fn extract_dimensions<S: AsRef<str>>(lines: &[S]) -> Option<Dimensions> {
    let mut width: Option<u32> = None;
    let mut height: Option<u32> = None;

    for line in lines {
        let line = line.as_ref();
        if let Some(value) = labeled_value(line, WIDTH_LABEL) {
            width = value.parse().ok().or(width);
        } else if let Some(value) = labeled_value(line, HEIGHT_LABEL) {
            height = value.parse().ok().or(height);
        }
    }

    match (width, height) {
        (Some(width), Some(height)) if height > 0 => Some(Dimensions {
            width,
            height,
        }),
        _ => None,
    }
}

/// Extracts the focal length in millimeters, truncated to an integer.
///
/// Returns on the first line beginning with `Focal Length`. The value
/// segment is split on whitespace and only the first token is parsed, which
/// drops the trailing `mm` unit suffix (`Focal Length : 50.0 mm` -> 50).
/// Returns `None` when no such line exists or the token is not numeric; a
/// parsed `0.0` yields `Some(0)`.
pub fn extract_focal_length<S: AsRef<str>>(lines: &[S]) -> Option<u32> {
    for line in lines {
        if let Some(value) = labeled_value(line.as_ref(), FOCAL_LABEL) {
            let token = value.split_whitespace().next()?;
            return token.parse::<f64>().ok().map(|mm| mm as u32);
        }
    }
    None
}

/// The trimmed value segment of `line` when it starts with `label`.
fn labeled_value<'a>(line: &'a str, label: &str) -> Option<&'a str> {
    if !line.starts_with(label) {
        return None;
    }
    line.split(':').nth(1).map(str::trim)
}
