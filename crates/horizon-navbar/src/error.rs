//! Error types for the navbar widget.
//!
//! The collapse pass itself never fails; errors only come from structural
//! edits against stale handles and from configuration parsing.

use thiserror::Error;

use crate::widget::ElementId;

/// Errors returned by navbar operations.
#[derive(Debug, Error)]
pub enum NavbarError {
    /// The element handle does not refer to a live element.
    #[error("unknown element {0:?}")]
    UnknownElement(ElementId),
    /// The root render surface cannot be removed.
    #[error("the navbar root cannot be removed")]
    RootRemoval,
    /// The element does not carry the capability the operation needs.
    #[error("element {element:?} has no {capability} capability")]
    MissingCapability {
        /// The element operated on.
        element: ElementId,
        /// The missing capability.
        capability: &'static str,
    },
    /// The configuration could not be parsed.
    #[error("invalid navbar configuration: {0}")]
    Config(#[from] toml::de::Error),
}

/// A specialized Result type for navbar operations.
pub type NavbarResult<T> = std::result::Result<T, NavbarError>;
