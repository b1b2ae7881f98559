//! Errors raised while turning raw zone descriptors into `Radar`s.

use thiserror::Error;

/// Invalid zone descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ZoneError {
    /// A radius below zero has no geometric meaning.
    #[error("invalid zone: negative radius {radius}")]
    NegativeRadius { radius: i32 },
}
