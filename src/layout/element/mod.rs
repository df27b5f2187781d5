//! The element tree consumed by the layout passes.
//!
//! Elements arrive from an external template parser as a serde-tagged tree
//! and stay immutable for the whole layout call. Every variant embeds the
//! shared [`Style`] attribute bag.

mod code;
mod container;
mod image;
mod separator;
mod text;

pub use code::*;
pub use container::*;
pub use image::*;
use serde::{Deserialize, Serialize};
pub use separator::*;
pub use text::*;

use crate::layout::style::Style;

/// A single element of the template tree.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
  /// A flex container holding other elements.
  Flex(FlexElement),
  /// A run of text, shaped through the injected measurer.
  Text(TextElement),
  /// A raster or vector image with provider-declared natural size.
  Image(ImageElement),
  /// A QR code; intrinsically square.
  Qr(QrElement),
  /// A one-dimensional barcode.
  Barcode(BarcodeElement),
  /// A horizontal or vertical rule.
  Separator(SeparatorElement),
}

impl Element {
  /// Returns the element's shared style attributes.
  pub fn style(&self) -> &Style {
    match self {
      Self::Flex(e) => &e.style,
      Self::Text(e) => &e.style,
      Self::Image(e) => &e.style,
      Self::Qr(e) => &e.style,
      Self::Barcode(e) => &e.style,
      Self::Separator(e) => &e.style,
    }
  }

  /// Returns the element's children; empty for every leaf variant.
  pub fn children(&self) -> &[Element] {
    match self {
      Self::Flex(e) => &e.children,
      _ => &[],
    }
  }

  /// Returns the element kind name used in diagnostics.
  pub fn kind(&self) -> &'static str {
    match self {
      Self::Flex(_) => "flex",
      Self::Text(_) => "text",
      Self::Image(_) => "image",
      Self::Qr(_) => "qr",
      Self::Barcode(_) => "barcode",
      Self::Separator(_) => "separator",
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn deserializes_a_tagged_tree() {
    let element: Element = serde_json::from_str(
      r#"{
        "type": "flex",
        "direction": "column",
        "gap": "8",
        "children": [
          { "type": "text", "content": "hello" },
          { "type": "separator" },
          { "type": "qr", "data": "https://example.com", "size": 96 }
        ]
      }"#,
    )
    .expect("tree should deserialize");

    let Element::Flex(flex) = &element else {
      panic!("expected flex root");
    };

    assert_eq!(flex.children.len(), 3);
    assert_eq!(flex.children[0].kind(), "text");
    assert_eq!(flex.children[2].kind(), "qr");
  }
}
