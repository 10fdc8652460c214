/// Typed errors for wifipick resource lookups
use thiserror::Error;

/// Result type alias for icon and theme resource lookups
pub type ResourceResult<T> = Result<T, ResourceError>;

/// Errors that can occur while resolving glyph resources
#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("no glyph named \"{0}\" in the active icon set")]
    GlyphNotFound(String),

    #[error("active icon set has no friction glyphs")]
    FrictionUnavailable,
}
