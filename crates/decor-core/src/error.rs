// File: crates/decor-core/src/error.rs
// Summary: Error type for decoration drawing; measurement and formatting failures.

use thiserror::Error;

/// Failures that abort a decoration draw call. A failed draw issues no
/// primitives; the next frame simply redraws from scratch.
#[derive(Debug, Error)]
pub enum DecorError {
    #[error("text measurement failed: {0}")]
    TextMeasure(String),

    #[error("label formatter failed: {0}")]
    LabelFormat(String),
}
