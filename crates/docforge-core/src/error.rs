//! Error types and handling for docforge-core operations.
//!
//! The helper surface of this crate is deliberately fail-open: functions that
//! encounter malformed input degrade to a best-effort result instead of
//! propagating a failure into the build. The only fallible seam is URL
//! parsing, exposed through [`crate::urls::parse_url`] so callers that *do*
//! want a hard error can get one.

use thiserror::Error;

/// The error type for docforge-core operations.
///
/// All fallible functions in this crate return `Result<T, Error>`. The
/// fail-open helpers consume these errors internally and log them at debug
/// level rather than surfacing them.
#[derive(Error, Debug)]
pub enum Error {
    /// URL is malformed or invalid.
    ///
    /// Produced when a string cannot be parsed as an absolute URL. Server
    /// URLs in API descriptions frequently carry template variables
    /// (`https://{host}:{port}/v2`) that are not valid URLs; callers that
    /// must tolerate them should use the fail-open helpers instead.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Convenience type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
