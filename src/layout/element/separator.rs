//! Separator (rule) element.

use serde::{Deserialize, Serialize};

use crate::layout::style::Style;

/// Axis a separator extends along.
#[derive(Default, Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SeparatorOrientation {
  /// Extends along the x axis; intrinsic size is `(0, thickness)`.
  #[default]
  Horizontal,
  /// Extends along the y axis; intrinsic size is `(thickness, 0)`.
  Vertical,
}

/// A horizontal or vertical rule.
///
/// The separator has no intrinsic extent along its own axis; containers
/// stretch it via alignment or an explicit dimension.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct SeparatorElement {
  /// The styling properties for this separator.
  #[serde(flatten)]
  pub style: Style,
  /// Axis the rule extends along.
  #[serde(default)]
  pub orientation: SeparatorOrientation,
  /// Stroke thickness in pixels.
  #[serde(default = "default_thickness")]
  pub thickness: f32,
}

impl Default for SeparatorElement {
  fn default() -> Self {
    Self {
      style: Style::default(),
      orientation: SeparatorOrientation::default(),
      thickness: default_thickness(),
    }
  }
}

fn default_thickness() -> f32 {
  1.0
}
