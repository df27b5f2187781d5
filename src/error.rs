//! Error types surfaced by the layout engine.
//!
//! Only structurally invalid input is fatal. Malformed unit strings recover
//! to documented defaults at the point they are consumed and never appear
//! here.

use thiserror::Error;

/// Fatal errors produced by [`compute_layout`](crate::compute_layout) and
/// [`measure_all_intrinsics`](crate::measure_all_intrinsics).
#[derive(Debug, Error)]
pub enum LayoutError {
  /// A flex factor attribute carried a negative value.
  #[error("negative value {value} for `{attribute}` on {element} element")]
  NegativeFlexFactor {
    /// Kind of the offending element (`flex`, `text`, ...).
    element: &'static str,
    /// Name of the offending attribute (`grow` or `shrink`).
    attribute: &'static str,
    /// The rejected value.
    value: f32,
  },

  /// The canvas declared an axis as fixed without providing its dimension.
  #[error("canvas fixes its {axis} but no {axis} was provided")]
  MissingCanvasDimension {
    /// The axis missing a dimension (`width` or `height`).
    axis: &'static str,
  },

  /// Element nesting exceeded the configured recursion limit.
  #[error("maximum layout depth of {max_depth} exceeded")]
  DepthExceeded {
    /// The configured limit that was exceeded.
    max_depth: usize,
  },

  /// The injected text measurer failed.
  ///
  /// Shaper failures are never papered over with the fallback measurer:
  /// substituting metrics mid-pass would break the consistency between
  /// intrinsic measurement and final layout.
  #[error("text shaping failed: {0}")]
  TextShaping(#[from] TextShapeError),
}

/// Error reported by a [`TextMeasurer`](crate::layout::text::TextMeasurer)
/// implementation.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct TextShapeError {
  /// Human-readable failure description from the shaper.
  pub message: String,
}

impl TextShapeError {
  /// Creates a shaping error from any displayable message.
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      message: message.into(),
    }
  }
}
