// iconforge - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// Each subsystem owns an error enum; all of them convert into
// `IconForgeError` so the driver can propagate with `?`.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all iconforge operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum IconForgeError {
    /// The source logo could not be found or decoded.
    Source(SourceError),

    /// Compositing an icon failed.
    Compose(ComposeError),

    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },

    /// Encoding a rendered icon to disk failed.
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },
}

impl fmt::Display for IconForgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source(e) => write!(f, "{e}"),
            Self::Compose(e) => write!(f, "Compose error: {e}"),
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
            Self::Encode { path, source } => {
                write!(f, "Failed to encode '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for IconForgeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Source(e) => Some(e),
            Self::Compose(e) => Some(e),
            Self::Io { source, .. } => Some(source),
            Self::Encode { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Source errors
// ---------------------------------------------------------------------------

/// The two recognised driver failures. Both stop the run before any
/// output is written.
#[derive(Debug)]
pub enum SourceError {
    /// The source logo path does not exist.
    Missing { path: PathBuf },

    /// The file exists but cannot be opened or decoded as an image.
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { path } => write!(f, "{} not found.", path.display()),
            Self::Decode { path, source } => {
                write!(f, "{} could not be opened as an image: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode { source, .. } => Some(source),
            Self::Missing { .. } => None,
        }
    }
}

impl From<SourceError> for IconForgeError {
    fn from(e: SourceError) -> Self {
        Self::Source(e)
    }
}

// ---------------------------------------------------------------------------
// Compose errors
// ---------------------------------------------------------------------------

/// Errors raised by the icon compositor.
#[derive(Debug)]
pub enum ComposeError {
    /// The scaled logo would have a zero-pixel dimension.
    DegenerateSize {
        size: u32,
        padding_ratio: f64,
        scaled_width: u32,
        scaled_height: u32,
    },

    /// The padding ratio is outside `[0.0, 0.5)` or not finite.
    InvalidPadding { ratio: f64 },

    /// The resampler rejected the source or target buffer.
    Resample {
        width: u32,
        height: u32,
        reason: String,
    },
}

impl fmt::Display for ComposeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateSize {
                size,
                padding_ratio,
                scaled_width,
                scaled_height,
            } => write!(
                f,
                "cannot resize logo to {scaled_width}x{scaled_height} \
                 for a {size}px icon with padding ratio {padding_ratio}"
            ),
            Self::InvalidPadding { ratio } => {
                write!(f, "padding ratio {ratio} leaves no room for the logo")
            }
            Self::Resample {
                width,
                height,
                reason,
            } => write!(f, "resampling logo to {width}x{height} failed: {reason}"),
        }
    }
}

impl std::error::Error for ComposeError {}

impl From<ComposeError> for IconForgeError {
    fn from(e: ComposeError) -> Self {
        Self::Compose(e)
    }
}

// ---------------------------------------------------------------------------
// Colour errors
// ---------------------------------------------------------------------------

/// Errors parsing a brand colour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Not a `#RRGGBB` / `#RGB` hex string.
    InvalidHex { value: String },
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidHex { value } => {
                write!(f, "'{value}' is not a hex colour (expected #RRGGBB or #RGB)")
            }
        }
    }
}

impl std::error::Error for ColorError {}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Problems found while loading configuration.
///
/// Never fatal: the loader returns them as warnings and falls back to the
/// default for whatever they affect.
#[derive(Debug)]
pub enum ConfigError {
    /// A config file named on the command line does not exist.
    NotFound { path: PathBuf },

    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
        default: String,
    },

    /// An alternate variant names a colour missing from the palette.
    UnknownVariant { name: String },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { path } => write!(
                f,
                "Config file '{}' does not exist. Using defaults.",
                path.display()
            ),
            Self::TomlParse { path, source } => write!(
                f,
                "Config parse error '{}': {source}. Using defaults.",
                path.display()
            ),
            Self::ValueOutOfRange {
                field,
                value,
                expected,
                default,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. \
                 Expected: {expected}. Using default ({default})."
            ),
            Self::UnknownVariant { name } => write!(
                f,
                "Alternate variant '{name}' has no colour in [palette]; skipping it"
            ),
            Self::Io { path, source } => write!(
                f,
                "Config I/O error '{}': {source}. Using defaults.",
                path.display()
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for iconforge results.
pub type Result<T> = std::result::Result<T, IconForgeError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_missing_source_message_names_path() {
        let err = IconForgeError::from(SourceError::Missing {
            path: PathBuf::from("Logo_Source.png"),
        });
        assert_eq!(err.to_string(), "Logo_Source.png not found.");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_decode_failure_message_reads_like_missing_file() {
        let decode = image::ImageError::IoError(io::Error::new(
            io::ErrorKind::InvalidData,
            "bad signature",
        ));
        let err = IconForgeError::from(SourceError::Decode {
            path: PathBuf::from("Logo_Source.png"),
            source: decode,
        });
        let msg = err.to_string();
        assert!(msg.starts_with("Logo_Source.png "), "{msg}");
        assert!(!msg.to_lowercase().contains("error"), "{msg}");
        assert_eq!(format!("Error: {err}").matches("Error").count(), 1);
    }

    #[test]
    fn test_io_error_preserves_chain() {
        let err = IconForgeError::Io {
            path: PathBuf::from("out/icon.png"),
            operation: "create directory",
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("create directory"));
        assert!(msg.contains("out/icon.png"));
        assert_eq!(err.source().unwrap().to_string(), "denied");
    }
}
