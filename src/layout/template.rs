//! The template surface consumed by [`compute_layout`](crate::compute_layout).

use serde::{Deserialize, Serialize};

use crate::layout::{
  element::Element,
  style::{Color, TextDirection},
};

/// Determines which canvas axes are declared and which derive from
/// content.
#[derive(Default, Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CanvasSizing {
  /// Both axes derive from content.
  #[default]
  None,
  /// Width is declared; height derives from content.
  Width,
  /// Height is declared; width derives from content.
  Height,
  /// Both axes are declared; missing either is a fatal error.
  Both,
}

/// The drawing surface description.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Canvas {
  /// Declared width in pixels; consulted per [`CanvasSizing`].
  pub width: Option<f32>,
  /// Declared height in pixels; consulted per [`CanvasSizing`].
  pub height: Option<f32>,
  /// Which axes the declarations fix.
  pub fixed: CanvasSizing,
  /// Background color, carried for the rasterizer.
  pub background: Option<Color>,
  /// Root block direction; defaults to left-to-right.
  pub text_direction: Option<TextDirection>,
}

/// A parsed template: the canvas plus its top-level elements.
///
/// The elements form the canvas's implicit column container.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct Template {
  /// Canvas description.
  #[serde(default)]
  pub canvas: Canvas,
  /// Top-level elements in source order.
  #[serde(default)]
  pub elements: Vec<Element>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn deserializes_canvas_modes() {
    let template: Template = serde_json::from_str(
      r##"{
        "canvas": { "width": 384, "fixed": "width", "background": "#fff" },
        "elements": [ { "type": "text", "content": "receipt" } ]
      }"##,
    )
    .expect("template should deserialize");

    assert_eq!(template.canvas.fixed, CanvasSizing::Width);
    assert_eq!(template.canvas.width, Some(384.0));
    assert_eq!(template.elements.len(), 1);
  }
}
