//! Format detection from file extensions.

use std::path::Path;

/// Supported layer formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// OpenEXR, 32-bit float RGB.
    #[default]
    Exr,
    /// Portable pixmap, 8-bit RGB.
    Ppm,
    /// Unknown/unsupported format.
    Unknown,
}

impl Format {
    /// Detects format from file extension (case insensitive).
    pub fn from_extension<P: AsRef<Path>>(path: P) -> Self {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match ext.as_deref() {
            Some("exr") => Format::Exr,
            Some("ppm") | Some("pnm") => Format::Ppm,
            _ => Format::Unknown,
        }
    }

    /// Parses a format name such as `"exr"` or `".ppm"`.
    pub fn from_name(name: &str) -> Self {
        match name.trim_start_matches('.').to_lowercase().as_str() {
            "exr" => Format::Exr,
            "ppm" | "pnm" => Format::Ppm,
            _ => Format::Unknown,
        }
    }

    /// Returns the file extension used when writing this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Exr => "exr",
            Format::Ppm => "ppm",
            Format::Unknown => "",
        }
    }

    /// Returns true if values outside `[0, 1]` survive a write.
    pub fn supports_hdr(&self) -> bool {
        matches!(self, Format::Exr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_detection() {
        assert_eq!(Format::from_extension("0000.exr"), Format::Exr);
        assert_eq!(Format::from_extension("0000.EXR"), Format::Exr);
        assert_eq!(Format::from_extension("out/0001.ppm"), Format::Ppm);
        assert_eq!(Format::from_extension("0001.png"), Format::Unknown);
        assert_eq!(Format::from_extension("noext"), Format::Unknown);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Format::from_name(".PPM"), Format::Ppm);
        assert_eq!(Format::from_name("exr"), Format::Exr);
        assert_eq!(Format::from_name("tif"), Format::Unknown);
    }

    #[test]
    fn test_format_properties() {
        assert_eq!(Format::Exr.extension(), "exr");
        assert!(Format::Exr.supports_hdr());
        assert!(!Format::Ppm.supports_hdr());
    }
}
