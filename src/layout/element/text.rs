//! Text element.

use serde::{Deserialize, Serialize};

use crate::layout::style::{LengthUnit, LineHeight, Style, TextAlign, TextOverflowMode};

/// An element rendering a run of text.
///
/// Shaping (segmenting the content into visible lines) is delegated to the
/// injected text measurer; the element only carries the knobs the shaper
/// honors.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct TextElement {
  /// The styling properties for this text element.
  #[serde(flatten)]
  pub style: Style,
  /// The text content to shape.
  #[serde(default)]
  pub content: String,
  /// Font size; `em`/`%` resolve against the inherited base font size.
  /// Invalid or missing values inherit the base.
  #[serde(default)]
  pub size: Option<LengthUnit>,
  /// Line height; a bare number multiplies the resolved font size.
  #[serde(default)]
  pub line_height: Option<LineHeight>,
  /// Whether the shaper may break the content into multiple lines.
  #[serde(default = "default_wrap")]
  pub wrap: bool,
  /// Upper bound on the number of shaped lines.
  #[serde(default)]
  pub max_lines: Option<u32>,
  /// What happens to text that exceeds its budget.
  #[serde(default)]
  pub overflow_mode: TextOverflowMode,
  /// Horizontal alignment of lines within the element.
  #[serde(default)]
  pub text_align: TextAlign,
}

fn default_wrap() -> bool {
  true
}
