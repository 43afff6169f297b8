//! HWP format detection from file signatures.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// HWP container formats recognized by their leading bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwpFormat {
    /// HWP 5.x, stored as an OLE compound file
    Hwp5,
    /// HWPX, the OWPML ZIP container
    Hwpx,
    /// Legacy HWP 3.x binary
    Hwp3,
}

impl HwpFormat {
    /// Short lowercase name, matching the usual file extension.
    pub fn name(&self) -> &'static str {
        match self {
            HwpFormat::Hwp5 => "hwp",
            HwpFormat::Hwpx => "hwpx",
            HwpFormat::Hwp3 => "hwp3",
        }
    }
}

impl std::fmt::Display for HwpFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HwpFormat::Hwp5 => write!(f, "HWP 5.x"),
            HwpFormat::Hwpx => write!(f, "HWPX"),
            HwpFormat::Hwp3 => write!(f, "HWP 3.x"),
        }
    }
}

/// OLE compound file signature.
const OLE_MAGIC: &[u8] = &[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];
/// ZIP local file header signature.
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";
const HWP3_MAGIC: &[u8] = b"HWP Document File";
const HEADER_LEN: usize = 32;

/// Detect the HWP format of a file from its header.
///
/// # Example
/// ```no_run
/// use unhwp::detect::detect_format_from_path;
///
/// let format = detect_format_from_path("report.hwp").unwrap();
/// println!("{}", format);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<HwpFormat> {
    let file = File::open(path)?;
    let mut header = Vec::with_capacity(HEADER_LEN);
    file.take(HEADER_LEN as u64).read_to_end(&mut header)?;
    detect_format_from_bytes(&header)
}

/// Detect the HWP format from the first bytes of a file.
///
/// # Returns
/// * `Ok(HwpFormat)` if a known signature is present
/// * `Err(Error::UnknownFormat)` otherwise, including for short input
pub fn detect_format_from_bytes(data: &[u8]) -> Result<HwpFormat> {
    if data.starts_with(OLE_MAGIC) {
        Ok(HwpFormat::Hwp5)
    } else if data.starts_with(ZIP_MAGIC) {
        Ok(HwpFormat::Hwpx)
    } else if data.starts_with(HWP3_MAGIC) {
        Ok(HwpFormat::Hwp3)
    } else {
        Err(Error::UnknownFormat)
    }
}

/// Check if a file carries a known HWP signature.
pub fn is_hwp<P: AsRef<Path>>(path: P) -> bool {
    detect_format_from_path(path).is_ok()
}

/// Check if bytes start with a known HWP signature.
pub fn is_hwp_bytes(data: &[u8]) -> bool {
    detect_format_from_bytes(data).is_ok()
}
