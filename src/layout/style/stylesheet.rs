//! The shared attribute bag carried by every element.

use serde::{Deserialize, Serialize};

use crate::{
  geometry::Edges,
  layout::style::{
    Align, AlignContent, AlignSelf, BorderSpec, Display, FlexDirection, FlexWrap, Gap, Justify,
    LengthUnit, Overflow, Position, Sides, TextDirection,
  },
};

/// Main styling structure containing the box-model and flex attributes
/// common to all element kinds.
///
/// Container-only attributes (`direction`, `wrap`, `gap`, `justify`,
/// `align`, `align_content`) live here as well; non-container elements
/// simply never consult them.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Style {
  /// Whether the element takes part in layout.
  pub display: Display,
  /// Width of the element (border box).
  pub width: LengthUnit,
  /// Height of the element (border box).
  pub height: LengthUnit,
  /// Lower bound for the width.
  pub min_width: LengthUnit,
  /// Lower bound for the height.
  pub min_height: LengthUnit,
  /// Upper bound for the width.
  pub max_width: LengthUnit,
  /// Upper bound for the height.
  pub max_height: LengthUnit,
  /// Width/height ratio applied when exactly one axis is determined.
  pub aspect_ratio: Option<f32>,
  /// Internal spacing around the element's content.
  pub padding: Sides<LengthUnit>,
  /// External spacing around the element. Sides may be `auto`.
  pub margin: Sides<LengthUnit>,
  /// Border shorthand and overrides.
  #[serde(flatten)]
  pub border: BorderSpec,
  /// How much the item grows when positive free space is distributed.
  pub grow: f32,
  /// How much the item shrinks when negative free space is distributed.
  pub shrink: f32,
  /// Initial main size of the item before growing or shrinking.
  pub basis: LengthUnit,
  /// Per-item override of the container's `align` value.
  pub align_self: AlignSelf,
  /// Relative paint and layout order among siblings; ties keep source
  /// order.
  pub order: i32,
  /// Positioning method.
  pub position: Position,
  /// Top inset for relative/absolute positioning.
  pub top: Option<LengthUnit>,
  /// Right inset for relative/absolute positioning.
  pub right: Option<LengthUnit>,
  /// Bottom inset for relative/absolute positioning.
  pub bottom: Option<LengthUnit>,
  /// Left inset for relative/absolute positioning.
  pub left: Option<LengthUnit>,
  /// Rendering hint for overflowing content; never affects geometry.
  pub overflow: Overflow,
  /// Block-level direction override; inherited from the parent when unset.
  pub text_direction: Option<TextDirection>,
  /// Container: main-axis direction.
  pub direction: FlexDirection,
  /// Container: wrapping behavior.
  pub wrap: FlexWrap,
  /// Container: spacing between items and between lines.
  pub gap: Gap,
  /// Container: main-axis free-space distribution.
  pub justify: Justify,
  /// Container: default cross-axis alignment of items.
  pub align: Align,
  /// Container: cross-axis packing of wrapped lines.
  pub align_content: AlignContent,
}

impl Default for Style {
  fn default() -> Self {
    Self {
      display: Display::Flex,
      width: LengthUnit::Auto,
      height: LengthUnit::Auto,
      min_width: LengthUnit::Auto,
      min_height: LengthUnit::Auto,
      max_width: LengthUnit::Auto,
      max_height: LengthUnit::Auto,
      aspect_ratio: None,
      padding: Sides([LengthUnit::zero(); 4]),
      margin: Sides([LengthUnit::zero(); 4]),
      border: BorderSpec::default(),
      grow: 0.0,
      shrink: 1.0,
      basis: LengthUnit::Auto,
      align_self: AlignSelf::Auto,
      order: 0,
      position: Position::Static,
      top: None,
      right: None,
      bottom: None,
      left: None,
      overflow: Overflow::Visible,
      text_direction: None,
      direction: FlexDirection::Row,
      wrap: FlexWrap::NoWrap,
      gap: Gap::default(),
      justify: Justify::Start,
      align: Align::Stretch,
      align_content: AlignContent::Stretch,
    }
  }
}

impl Style {
  /// Resolves padding to pixels against the containing block width.
  ///
  /// `auto` is meaningless for padding and computes to zero; negative
  /// values clamp to zero.
  pub fn resolved_padding(&self, basis: f32, font_size: f32) -> Edges<f32> {
    let sides: Edges<LengthUnit> = self.padding.into();

    Edges::new(
      sides.top.resolve_or(basis, font_size, 0.0).max(0.0),
      sides.right.resolve_or(basis, font_size, 0.0).max(0.0),
      sides.bottom.resolve_or(basis, font_size, 0.0).max(0.0),
      sides.left.resolve_or(basis, font_size, 0.0).max(0.0),
    )
  }

  /// Resolves margins against the containing block width.
  ///
  /// `None` sides are `auto` and must stay distinguishable from zero: the
  /// solver distributes leftover space onto them.
  pub fn resolved_margin(&self, basis: f32, font_size: f32) -> Edges<Option<f32>> {
    let sides: Edges<LengthUnit> = self.margin.into();

    Edges::new(
      sides.top.resolve(basis, font_size),
      sides.right.resolve(basis, font_size),
      sides.bottom.resolve(basis, font_size),
      sides.left.resolve(basis, font_size),
    )
  }

  /// Resolves border widths against the containing block width.
  pub fn resolved_border_widths(&self, basis: f32, font_size: f32) -> Edges<f32> {
    self.border.resolve_widths(basis, font_size)
  }

  /// Returns the size attribute along the requested axis.
  pub fn size_on(&self, horizontal: bool) -> LengthUnit {
    if horizontal { self.width } else { self.height }
  }

  /// Returns the min-size attribute along the requested axis.
  pub fn min_size_on(&self, horizontal: bool) -> LengthUnit {
    if horizontal {
      self.min_width
    } else {
      self.min_height
    }
  }

  /// Returns the max-size attribute along the requested axis.
  pub fn max_size_on(&self, horizontal: bool) -> LengthUnit {
    if horizontal {
      self.max_width
    } else {
      self.max_height
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_flex_factors_follow_css() {
    let style = Style::default();
    assert_eq!(style.grow, 0.0);
    assert_eq!(style.shrink, 1.0);
    assert_eq!(style.basis, LengthUnit::Auto);
    assert_eq!(style.align, Align::Stretch);
    assert_eq!(style.justify, Justify::Start);
  }

  #[test]
  fn deserializes_from_attribute_strings() {
    let style: Style = serde_json::from_str(
      r#"{
        "width": "50%",
        "padding": "4 8",
        "margin": "0 auto",
        "border": "1px solid #000",
        "direction": "row_reverse",
        "justify": "space_between",
        "wrap": "wrap_reverse",
        "position": "relative",
        "top": "2px"
      }"#,
    )
    .expect("style should deserialize");

    assert_eq!(style.width, LengthUnit::Percentage(50.0));
    assert_eq!(style.direction, FlexDirection::RowReverse);
    assert_eq!(style.justify, Justify::SpaceBetween);
    assert_eq!(style.wrap, FlexWrap::WrapReverse);
    assert_eq!(style.position, Position::Relative);
    assert_eq!(style.top, Some(LengthUnit::Px(2.0)));

    let margin = style.resolved_margin(100.0, 16.0);
    assert_eq!(margin.top, Some(0.0));
    assert_eq!(margin.right, None);

    let border = style.resolved_border_widths(100.0, 16.0);
    assert_eq!(border.left, 1.0);
  }
}
