#[cfg(feature = "stl-io")]
mod stl;

#[cfg(feature = "stl-io")]
pub use stl::load_stl_file;

/// Generic I/O and format-conversion errors.
///
/// Mesh import formats are behind cargo feature-flags.
/// When a feature is disabled the corresponding loader is *not* compiled,
/// but the error type stays available for callers.
#[derive(Debug)]
pub enum IoError {
    StdIo(std::io::Error),
    MalformedInput(String),
}

impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use IoError::*;

        match self {
            StdIo(error) => write!(f, "std::io::Error: {error}"),
            MalformedInput(msg) => write!(f, "Input is malformed: {msg}"),
        }
    }
}

impl std::error::Error for IoError {}

impl From<std::io::Error> for IoError {
    fn from(value: std::io::Error) -> Self {
        Self::StdIo(value)
    }
}
