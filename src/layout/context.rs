//! Immutable per-level layout context.

/// Resolution context handed down the tree during measurement and layout.
///
/// Percentages resolve against the container dimensions, `em` values
/// against the font size. Derived contexts are produced with
/// [`with_size`](Self::with_size) and
/// [`with_font_size`](Self::with_font_size); the record itself is never
/// mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutContext {
  /// Content width of the containing block.
  pub container_width: f32,
  /// Content height of the containing block.
  pub container_height: f32,
  /// Effective font size for `em` resolution.
  pub font_size: f32,
}

impl LayoutContext {
  /// Creates a root context.
  pub const fn new(container_width: f32, container_height: f32, font_size: f32) -> Self {
    Self {
      container_width,
      container_height,
      font_size,
    }
  }

  /// Returns a context with the same font size and new container
  /// dimensions.
  pub fn with_size(&self, container_width: f32, container_height: f32) -> Self {
    Self {
      container_width,
      container_height,
      font_size: self.font_size,
    }
  }

  /// Returns a context with the same dimensions and a new font size.
  pub fn with_font_size(&self, font_size: f32) -> Self {
    Self {
      font_size,
      ..*self
    }
  }
}
