//! HWP 5 decoder backed by the external `hwp5txt` program.

use crate::detect::{detect_format_from_path, HwpFormat};
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use super::TextDecoder;

/// Program name looked up on `PATH` when none is configured.
const DEFAULT_PROGRAM: &str = "hwp5txt";

/// Decodes HWP 5 documents by running `hwp5txt <file>` and capturing stdout.
#[derive(Debug, Clone)]
pub struct Hwp5TxtDecoder {
    program: PathBuf,
}

impl Hwp5TxtDecoder {
    /// Create a decoder that runs `hwp5txt` from `PATH`.
    pub fn new() -> Self {
        Self::with_program(DEFAULT_PROGRAM)
    }

    /// Create a decoder that runs the given program (name or path).
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// The configured program.
    pub fn program(&self) -> &Path {
        &self.program
    }

    fn locate(&self) -> Result<PathBuf> {
        which::which(&self.program)
            .map_err(|_| Error::DecoderNotFound(self.program.display().to_string()))
    }
}

impl Default for Hwp5TxtDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl TextDecoder for Hwp5TxtDecoder {
    fn supported_extensions(&self) -> &[&str] {
        &["hwp"]
    }

    fn name(&self) -> &str {
        "hwp"
    }

    fn decode(&self, path: &Path) -> Result<String> {
        let format = detect_format_from_path(path)?;
        if format != HwpFormat::Hwp5 {
            return Err(Error::UnsupportedFormat(format!(
                "{} (hwp5txt reads HWP 5.x only)",
                format
            )));
        }

        let program = self.locate()?;
        log::debug!("Running {} {}", program.display(), path.display());

        let output = Command::new(&program)
            .arg(path)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !output.status.success() {
            return Err(Error::Decode(format!(
                "{} exited with {}: {}",
                self.program.display(),
                output.status,
                stderr.trim()
            )));
        }
        if !stderr.trim().is_empty() {
            log::warn!("{}: {}", self.program.display(), stderr.trim());
        }

        String::from_utf8(output.stdout)
            .map_err(|e| Error::Encoding(format!("decoder output is not UTF-8: {}", e)))
    }
}
