//! Style system for the kumiko layout engine.
//!
//! This module contains the attribute bag shared by every element and the
//! CSS-like value types it is made of:
//! - Length units and four-side shorthands
//! - Border shorthand with per-side and whole-box overrides
//! - Discrete layout enums (direction, wrap, justify, align, ...)

mod border;
mod color;
mod gap;
mod length;
mod line_height;
mod sides;
mod stylesheet;

use std::borrow::Cow;

pub use border::*;
pub use color::*;
use cssparser::{ParseError, Parser};
pub use gap::*;
pub use length::*;
pub use line_height::*;
use serde::{Deserialize, Serialize};
pub use sides::*;
pub use stylesheet::*;

/// Parser result type alias for CSS property parsers.
pub type ParseResult<'i, T> = Result<T, ParseError<'i, Cow<'i, str>>>;

/// Trait for types that can be deserialized from CSS.
pub trait FromCss<'i> {
  /// Deserializes the type from a CSS string.
  fn from_css(input: &mut Parser<'i, '_>) -> ParseResult<'i, Self>
  where
    Self: Sized;
}

/// Determines whether an element takes part in layout at all.
#[derive(Default, Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Display {
  /// The element is a flex container (or flex item leaf) in normal flow.
  #[default]
  Flex,
  /// The element is skipped entirely: zero size, no gap slot, no children.
  None,
}

/// Defines the positioning method for an element.
#[derive(Default, Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Position {
  /// Normal flow; inset attributes have no effect.
  #[default]
  Static,
  /// Normal flow, then visually offset by the insets. Siblings are laid out
  /// as if the element had not moved.
  Relative,
  /// Removed from flow and placed against the containing block's padding
  /// box. Contributes nothing to sibling placement or intrinsic sizes.
  Absolute,
}

/// Defines the direction of the main axis of a flex container.
#[derive(Default, Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FlexDirection {
  /// Main axis is horizontal, following text direction.
  #[default]
  Row,
  /// Main axis is horizontal, mirrored.
  RowReverse,
  /// Main axis is vertical, top to bottom.
  Column,
  /// Main axis is vertical, bottom to top.
  ColumnReverse,
}

impl FlexDirection {
  /// Returns true for the horizontal main-axis directions.
  pub fn is_row(self) -> bool {
    matches!(self, Self::Row | Self::RowReverse)
  }

  /// Returns true for the reversed directions.
  pub fn is_reverse(self) -> bool {
    matches!(self, Self::RowReverse | Self::ColumnReverse)
  }
}

/// Defines how flex items wrap onto multiple lines.
#[derive(Default, Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FlexWrap {
  /// All items form a single line regardless of fit.
  #[default]
  NoWrap,
  /// Items wrap onto new lines stacking in the cross direction.
  Wrap,
  /// Items wrap, and the finished layout is mirrored along the cross axis.
  WrapReverse,
}

/// Defines how free main-axis space is distributed within a line.
#[derive(Default, Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Justify {
  /// Items are packed toward the start of the line.
  #[default]
  Start,
  /// Items are packed toward the center of the line.
  Center,
  /// Items are packed toward the end of the line.
  End,
  /// First and last items touch the line edges; space goes between items.
  SpaceBetween,
  /// Every item gets equal space on both of its sides.
  SpaceAround,
  /// Equal space slots before, between, and after all items.
  SpaceEvenly,
}

/// Defines how items are aligned along the cross axis of their line.
#[derive(Default, Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Align {
  /// Items sit at the cross-start edge of the line.
  Start,
  /// Items are centered within the line.
  Center,
  /// Items sit at the cross-end edge of the line.
  End,
  /// Items without an explicit cross dimension grow to fill the line.
  #[default]
  Stretch,
  /// Baseline alignment; currently placed like `start`.
  Baseline,
}

/// Per-item override of the container's [`Align`] value.
#[derive(Default, Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AlignSelf {
  /// Use the parent container's `align` value.
  #[default]
  Auto,
  /// See [`Align::Start`].
  Start,
  /// See [`Align::Center`].
  Center,
  /// See [`Align::End`].
  End,
  /// See [`Align::Stretch`].
  Stretch,
  /// See [`Align::Baseline`].
  Baseline,
}

impl AlignSelf {
  /// Resolves the override against the container value.
  pub fn resolve(self, container: Align) -> Align {
    match self {
      Self::Auto => container,
      Self::Start => Align::Start,
      Self::Center => Align::Center,
      Self::End => Align::End,
      Self::Stretch => Align::Stretch,
      Self::Baseline => Align::Baseline,
    }
  }
}

/// Defines how whole lines are packed along the cross axis of a wrapping
/// container.
#[derive(Default, Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AlignContent {
  /// Lines are packed toward the cross-start edge.
  Start,
  /// Lines are centered in the container.
  Center,
  /// Lines are packed toward the cross-end edge.
  End,
  /// Free cross space is split evenly onto every line.
  #[default]
  Stretch,
  /// First and last lines touch the container edges.
  SpaceBetween,
  /// Every line gets equal space on both of its sides.
  SpaceAround,
  /// Equal space slots before, between, and after all lines.
  SpaceEvenly,
}

/// Rendering hint for content exceeding the element box.
///
/// Layout positions are invariant under this attribute; it is carried for
/// the rasterizer only.
#[derive(Default, Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Overflow {
  /// Overflowing content is painted.
  #[default]
  Visible,
  /// Overflowing content is clipped to the element box.
  Hidden,
}

/// Block-level text direction.
///
/// Only axis mirroring is in scope; glyph-level bidi reordering is the
/// shaper's concern.
#[derive(Default, Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TextDirection {
  /// Left to right.
  #[default]
  Ltr,
  /// Right to left; row main axes are mirrored.
  Rtl,
}

/// Horizontal alignment of shaped text lines within the text element.
#[derive(Default, Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
  /// Align to the start edge (direction dependent).
  #[default]
  Start,
  /// Center each line.
  Center,
  /// Align to the end edge (direction dependent).
  End,
  /// Align to the physical left edge.
  Left,
  /// Align to the physical right edge.
  Right,
}

/// Defines how text exceeding its budget is handled by the shaper.
#[derive(Default, Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TextOverflowMode {
  /// Overflowing text is kept as-is.
  #[default]
  Visible,
  /// The last visible line is truncated and terminated with `...`.
  Ellipsis,
}
