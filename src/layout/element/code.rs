//! QR code and barcode elements.

use serde::{Deserialize, Serialize};

use crate::layout::style::Style;

/// Edge length a QR code falls back to when no `size` is declared.
pub const DEFAULT_QR_SIZE: f32 = 128.0;

/// Modules a code-128 symbol spends per payload character.
const BARCODE_MODULES_PER_CHAR: f32 = 11.0;

/// Overhead characters of a code-128 symbol: start, checksum, stop.
const BARCODE_OVERHEAD_CHARS: f32 = 3.0;

/// An element displaying a QR code.
///
/// QR codes are intrinsically square; the declared `size` is the edge
/// length of the module grid in pixels.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct QrElement {
  /// The styling properties for this QR code.
  #[serde(flatten)]
  pub style: Style,
  /// Payload encoded into the code.
  pub data: String,
  /// Declared edge length in pixels.
  #[serde(default)]
  pub size: Option<f32>,
}

impl QrElement {
  /// Intrinsic edge length: the declared size or the default grid.
  pub fn intrinsic_size(&self) -> f32 {
    self.size.unwrap_or(DEFAULT_QR_SIZE)
  }
}

/// An element displaying a one-dimensional barcode.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct BarcodeElement {
  /// The styling properties for this barcode.
  #[serde(flatten)]
  pub style: Style,
  /// Payload encoded into the bars.
  pub data: String,
  /// Width of a single module bar in pixels.
  #[serde(default = "default_module_width")]
  pub module_width: f32,
  /// Height of the bars in pixels.
  #[serde(default = "default_bar_height")]
  pub bar_height: f32,
}

impl Default for BarcodeElement {
  fn default() -> Self {
    Self {
      style: Style::default(),
      data: String::new(),
      module_width: default_module_width(),
      bar_height: default_bar_height(),
    }
  }
}

fn default_module_width() -> f32 {
  2.0
}

fn default_bar_height() -> f32 {
  48.0
}

impl BarcodeElement {
  /// Intrinsic width estimate following code-128 module counts.
  pub fn intrinsic_width(&self) -> f32 {
    (self.data.chars().count() as f32 + BARCODE_OVERHEAD_CHARS)
      * BARCODE_MODULES_PER_CHAR
      * self.module_width
  }
}
