//! Configuration errors, all fatal before any traversal starts

use thiserror::Error;

/// Malformed or contradictory command-line input.
///
/// Every variant is detected while the filter configuration is being
/// assembled; none of them can occur once the walk is underway.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A `--type` character outside the `b c d p f l s` set.
    #[error("invalid file type '{0}': expected one of b, c, d, p, f, l, s")]
    InvalidTypeChar(char),

    /// A `--user` argument that is neither a uid nor a known account name.
    #[error("'{0}' is not a known user")]
    UnknownUser(String),

    /// `--user` and `--nouser` both requested.
    #[error("--user and --nouser cannot be combined")]
    ConflictingOwnerFilters,

    /// A `--name` or `--path` glob that failed to parse.
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}
