//! Image element.

use serde::{Deserialize, Serialize};

use crate::layout::style::Style;

/// An element displaying an image produced by an external provider.
///
/// Layout never decodes pixels; the provider declares the natural size
/// alongside the source reference. Explicit `width`/`height` attributes
/// fully override the natural size.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct ImageElement {
  /// The styling properties for this image.
  #[serde(flatten)]
  pub style: Style,
  /// Opaque source reference handed back to the rasterizer.
  pub src: String,
  /// Provider-declared natural width in pixels.
  #[serde(default)]
  pub natural_width: Option<f32>,
  /// Provider-declared natural height in pixels.
  #[serde(default)]
  pub natural_height: Option<f32>,
}
