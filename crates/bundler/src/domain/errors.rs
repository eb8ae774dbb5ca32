//! Bundling errors and their user-facing diagnostics.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Every way a bundling run can abort.
///
/// The `Display` output of each variant is the exact one-line diagnostic
/// printed to stderr by the binary.
#[derive(Debug, Error)]
pub enum BundleError {
    #[error("Usage: {program} <output file> files...")]
    Usage { program: String },

    #[error("Failed to open {} to write.", path.display())]
    OutputOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to open {} to read.", path.display())]
    InputOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read {}.", path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {}.", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl BundleError {
    /// Process exit status reported for this error.
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// Path the failure refers to, when there is one.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            BundleError::Usage { .. } => None,
            BundleError::OutputOpen { path, .. }
            | BundleError::InputOpen { path, .. }
            | BundleError::InputRead { path, .. }
            | BundleError::OutputWrite { path, .. } => Some(path.as_path()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    fn not_found() -> io::Error {
        io::Error::new(io::ErrorKind::NotFound, "missing")
    }

    #[test]
    fn usage_message_names_program() {
        let err = BundleError::Usage {
            program: "./bundler".into(),
        };
        assert_eq!(err.to_string(), "Usage: ./bundler <output file> files...");
        assert!(err.path().is_none());
    }

    #[test]
    fn open_failures_name_the_path() {
        let output = BundleError::OutputOpen {
            path: "out/bundle.h".into(),
            source: not_found(),
        };
        assert_eq!(output.to_string(), "Failed to open out/bundle.h to write.");

        let input = BundleError::InputOpen {
            path: "assets/logo.png".into(),
            source: not_found(),
        };
        assert_eq!(input.to_string(), "Failed to open assets/logo.png to read.");
        assert_eq!(input.path(), Some(std::path::Path::new("assets/logo.png")));
    }

    #[test]
    fn io_source_is_preserved() {
        let err = BundleError::InputRead {
            path: "dir".into(),
            source: not_found(),
        };
        assert_eq!(err.to_string(), "Failed to read dir.");
        assert_eq!(err.source().map(ToString::to_string).as_deref(), Some("missing"));
    }

    #[test]
    fn every_error_exits_with_one() {
        let errors = [
            BundleError::Usage {
                program: "bundler".into(),
            },
            BundleError::OutputWrite {
                path: "out.h".into(),
                source: not_found(),
            },
        ];
        assert!(errors.iter().all(|err| err.exit_code() == 1));
    }
}
