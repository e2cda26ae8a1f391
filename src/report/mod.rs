//! Rendering of scan results to console text.

pub mod histogram;

pub use histogram::FocalHistogram;

use std::path::Path;

/// One output line of the panorama report.
///
/// The ratio is printed with one decimal place:
/// `ratio: 3.5  fileName: pics/2020/wide.jpg`
pub fn ratio_line(ratio: f64, path: &Path) -> String {
    format!("ratio: {ratio:.1}  fileName: {}", path.display())
}
