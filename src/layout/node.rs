//! The geometry tree produced by a layout call.

use crate::{
  geometry::Rect,
  layout::{element::Element, style::TextDirection, text::ShapedLine},
};

/// Shaped text attached to a laid-out text element.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLayout {
  /// The visible lines, top to bottom.
  pub lines: Vec<ShapedLine>,
  /// Line height in pixels used to stack the lines.
  pub line_height: f32,
  /// Resolved font size in pixels.
  pub font_size: f32,
}

/// One node of the computed layout tree.
///
/// Rectangles are border boxes in the root canvas's coordinate space. The
/// tree is freshly allocated per layout call and owns its children
/// exclusively; the referenced elements stay borrowed from the input.
#[derive(Debug, Clone)]
pub struct LayoutNode<'t> {
  /// The element this node was computed for; `None` only for the implicit
  /// canvas container at the root.
  pub element: Option<&'t Element>,
  /// Left edge in canvas space.
  pub x: f32,
  /// Top edge in canvas space.
  pub y: f32,
  /// Border-box width.
  pub width: f32,
  /// Border-box height.
  pub height: f32,
  /// Resolved block direction after inheritance.
  pub direction: TextDirection,
  /// Shaped lines and metrics, present on text nodes.
  pub text: Option<TextLayout>,
  /// Child nodes, one per input child, in source order.
  pub children: Vec<LayoutNode<'t>>,
}

impl LayoutNode<'_> {
  /// The node's border box as a rectangle.
  pub fn rect(&self) -> Rect {
    Rect::new(self.x, self.y, self.width, self.height)
  }
}
