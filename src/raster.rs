//! Hardcopy export through the external `gracebat` engine.
//!
//! The crate itself only writes project text; turning a saved document into
//! an image is delegated to the Grace batch binary, which must be on `PATH`.
//! A failed invocation is reported once and never retried.

use std::path::Path;
use std::process::Command;

use log::info;

use crate::error::{Error, Result};

/// Hardcopy devices understood by `gracebat`, keyed by output extension.
const DEVICES: [(&str, &str); 7] = [
    ("ps", "PostScript"),
    ("eps", "EPS"),
    ("pnm", "PNM"),
    ("png", "PNG"),
    ("svg", "SVG"),
    ("jpg", "JPEG"),
    ("jpeg", "JPEG"),
];

/// Hardcopy device for an output path, from its extension
/// (case-insensitive).
///
/// # Errors
///
/// Returns [`Error::Rasterizer`] when the extension maps to no known device.
pub fn device_for<P: AsRef<Path>>(output: P) -> Result<&'static str> {
    let output = output.as_ref();
    let ext = output
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();
    DEVICES
        .iter()
        .find(|(known, _)| *known == ext)
        .map(|(_, device)| *device)
        .ok_or_else(|| {
            Error::Rasterizer(format!(
                "no hardcopy device for output {}",
                output.display()
            ))
        })
}

/// Render a saved project file to an image via `gracebat`.
///
/// The device is picked from the output extension; pass it explicitly with
/// [`rasterize_with_device`] to override.
///
/// # Errors
///
/// Returns [`Error::Rasterizer`] when the device is unknown, `gracebat` is
/// not on `PATH`, or the invocation exits non-zero.
pub fn rasterize<P: AsRef<Path>, Q: AsRef<Path>>(document: P, output: Q) -> Result<()> {
    let device = device_for(&output)?;
    rasterize_with_device(document, output, device)
}

/// Render a saved project file to an image with an explicit hardcopy device.
///
/// # Errors
///
/// Returns [`Error::Rasterizer`] when `gracebat` is not on `PATH` or the
/// invocation exits non-zero.
pub fn rasterize_with_device<P: AsRef<Path>, Q: AsRef<Path>>(
    document: P,
    output: Q,
    device: &str,
) -> Result<()> {
    let document = document.as_ref();
    let output = output.as_ref();
    info!("rasterizing {} to {} ({device})", document.display(), output.display());
    let status = Command::new("gracebat")
        .arg("-hardcopy")
        .arg("-hdevice")
        .arg(device)
        .arg("-printfile")
        .arg(output)
        .arg(document)
        .status()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Rasterizer("gracebat is not found in PATH".to_string())
            } else {
                Error::Rasterizer(format!("failed to launch gracebat: {e}"))
            }
        })?;
    if !status.success() {
        return Err(Error::Rasterizer(format!(
            "gracebat exited with {status} for {}",
            document.display()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_from_extension() {
        assert_eq!(device_for("out.png").unwrap(), "PNG");
        assert_eq!(device_for("out.PS").unwrap(), "PostScript");
        assert_eq!(device_for("out.jpeg").unwrap(), "JPEG");
    }

    #[test]
    fn test_unknown_extension_rejected() {
        assert!(matches!(device_for("out.pdf"), Err(Error::Rasterizer(_))));
        assert!(matches!(device_for("out"), Err(Error::Rasterizer(_))));
    }
}
