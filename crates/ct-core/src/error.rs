//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// Errors raised while constructing core values.
///
/// Nothing in the per-turn simulation logic returns this; lookups that can
/// miss have defined fallbacks instead.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("route has {got} stops, at least {min} are required")]
    RouteTooShort { got: usize, min: usize },

    #[error("stop name {0:?} appears more than once in the route")]
    DuplicateStop(String),
}

/// Shorthand result type for `ct-core`.
pub type CoreResult<T> = Result<T, CoreError>;
