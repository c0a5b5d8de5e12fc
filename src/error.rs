//! Error types for the cm1-sounding crate.
use std::path::PathBuf;
use thiserror::Error;

/// Error type for the crate.
#[derive(Debug, Error)]
pub enum SoundingError {
    /// Malformed or out of range command line input.
    #[error("Invalid argument: {0}")]
    Argument(String),

    /// The input could not be opened as an array container, or the output could not be
    /// created.
    #[error("Unable to access {}: {source}", path.display())]
    FileAccess {
        /// The file that could not be accessed.
        path: PathBuf,
        /// The underlying failure.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    /// A requested index lies outside the declared dimensions of a variable.
    #[error("Index out of range for variable '{variable}': {detail}")]
    IndexOutOfRange {
        /// Variable being read, or `"grid"` for an invalid requested coordinate.
        variable: String,
        /// What was out of range.
        detail: String,
    },

    /// A variable required for the sounding is not in the file.
    #[error("Missing variable: {0}")]
    MissingVariable(String),

    /// Profiles that should describe the same vertical levels have different lengths.
    #[error("Profile '{name}' has {found} levels, expected {expected}")]
    MismatchedProfiles {
        /// Name of the offending profile.
        name: &'static str,
        /// The level count of the reference profile.
        expected: usize,
        /// The level count of the offending profile.
        found: usize,
    },

    /// A physical quantity is undefined for the input at a level.
    #[error("Unable to compute {quantity} at level {level}: {reason}")]
    NumericDomain {
        /// Zero based vertical level.
        level: usize,
        /// Quantity being computed.
        quantity: &'static str,
        /// Why it is undefined.
        reason: String,
    },

    /// Failure while writing the sounding after the output was opened.
    #[error("Error writing sounding: {0}")]
    Write(#[from] std::io::Error),

    /// Forward an error from the netcdf crate that is not a missing variable or bad index.
    #[error("NetCDF error: {0}")]
    NetCdf(#[from] netcdf::Error),
}

/// Shorthand for results.
pub type Result<T> = ::std::result::Result<T, SoundingError>;

impl SoundingError {
    pub(crate) fn file_access<E>(path: impl Into<PathBuf>, err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        SoundingError::FileAccess {
            path: path.into(),
            source: Box::new(err),
        }
    }

    pub(crate) fn index_out_of_range(variable: &str, detail: String) -> Self {
        SoundingError::IndexOutOfRange {
            variable: variable.to_owned(),
            detail,
        }
    }
}
