//! Border shorthand parsing and per-side resolution.
//!
//! A border value is the CSS-like shorthand `<width> <style> <color>` where
//! the style defaults to `solid` and the color to black. Sides resolve in
//! precedence order: the whole-box shorthand first, then per-side
//! shorthands, then the `border_width`/`border_color` whole-box overrides
//! last.

use cssparser::{Parser, ParserInput, match_ignore_ascii_case};
use serde::{Deserialize, Serialize};

use crate::{
  geometry::Edges,
  layout::style::{Color, FromCss, LengthUnit, ParseResult, Sides},
};

/// Visual line style of a border side.
#[derive(Default, Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BorderLineStyle {
  /// No border; the side computes to zero width.
  None,
  /// A continuous line.
  #[default]
  Solid,
  /// A dashed line.
  Dashed,
  /// A dotted line.
  Dotted,
}

/// A parsed `<width> <style> <color>` border shorthand.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(try_from = "BorderStrokeValue")]
pub struct BorderStroke {
  /// Border width.
  pub width: LengthUnit,
  /// Line style; `none` zeroes the computed width.
  pub style: BorderLineStyle,
  /// Border color.
  pub color: Color,
}

impl Default for BorderStroke {
  fn default() -> Self {
    Self {
      width: LengthUnit::zero(),
      style: BorderLineStyle::Solid,
      color: Color::black(),
    }
  }
}

/// Proxy type for `BorderStroke` deserialization.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum BorderStrokeValue {
  /// Bare width in pixels.
  Width(f32),
  /// CSS shorthand string.
  Css(String),
}

impl TryFrom<BorderStrokeValue> for BorderStroke {
  type Error = String;

  fn try_from(value: BorderStrokeValue) -> Result<Self, Self::Error> {
    match value {
      BorderStrokeValue::Width(width) => Ok(Self {
        width: LengthUnit::Px(width),
        ..Default::default()
      }),
      BorderStrokeValue::Css(css) => {
        let mut input = ParserInput::new(&css);
        let mut parser = Parser::new(&mut input);

        BorderStroke::from_css(&mut parser).map_err(|e| e.to_string())
      }
    }
  }
}

impl<'i> FromCss<'i> for BorderLineStyle {
  fn from_css(input: &mut Parser<'i, '_>) -> ParseResult<'i, Self> {
    let location = input.current_source_location();
    let ident = input.expect_ident()?.clone();

    match_ignore_ascii_case! {&ident,
      "none" => Ok(Self::None),
      "solid" => Ok(Self::Solid),
      "dashed" => Ok(Self::Dashed),
      "dotted" => Ok(Self::Dotted),
      _ => Err(
        location
          .new_basic_unexpected_token_error(cssparser::Token::Ident(ident.clone()))
          .into(),
      ),
    }
  }
}

impl<'i> FromCss<'i> for BorderStroke {
  fn from_css(input: &mut Parser<'i, '_>) -> ParseResult<'i, Self> {
    let width = LengthUnit::from_css(input)?;

    let style = input
      .try_parse(BorderLineStyle::from_css)
      .unwrap_or(BorderLineStyle::Solid);

    let color = input.try_parse(Color::from_css).unwrap_or(Color::black());

    Ok(Self {
      width,
      style,
      color,
    })
  }
}

/// A fully resolved border side, widths in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedBorderSide {
  /// Width in pixels; already zeroed for `none` styles.
  pub width: f32,
  /// Line style for the rasterizer.
  pub style: BorderLineStyle,
  /// Color for the rasterizer.
  pub color: Color,
}

impl Default for ResolvedBorderSide {
  fn default() -> Self {
    Self {
      width: 0.0,
      style: BorderLineStyle::Solid,
      color: Color::black(),
    }
  }
}

/// The border attribute surface of an element: the whole-box shorthand,
/// per-side shorthands, and whole-box width/color overrides.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct BorderSpec {
  /// Shorthand applied to all four sides.
  pub border: Option<BorderStroke>,
  /// Per-side shorthand, defeats `border` on the top side.
  pub border_top: Option<BorderStroke>,
  /// Per-side shorthand, defeats `border` on the right side.
  pub border_right: Option<BorderStroke>,
  /// Per-side shorthand, defeats `border` on the bottom side.
  pub border_bottom: Option<BorderStroke>,
  /// Per-side shorthand, defeats `border` on the left side.
  pub border_left: Option<BorderStroke>,
  /// Whole-box width override, applied to all sides last.
  pub border_width: Option<Sides<LengthUnit>>,
  /// Whole-box color override, applied to all sides last.
  pub border_color: Option<Color>,
}

impl BorderSpec {
  /// Per-side strokes after the shorthand fallback: a per-side shorthand
  /// defeats `border` on its side. Order is top, right, bottom, left.
  fn side_strokes(&self) -> [Option<&BorderStroke>; 4] {
    let base = self.border.as_ref();

    [
      self.border_top.as_ref().or(base),
      self.border_right.as_ref().or(base),
      self.border_bottom.as_ref().or(base),
      self.border_left.as_ref().or(base),
    ]
  }

  /// Per-side width units with the `none` style zeroing and the
  /// `border_width` whole-box override applied.
  ///
  /// Units stay unresolved so the intrinsic pass can treat percentages as
  /// indefinite.
  pub(crate) fn width_units(&self) -> Edges<LengthUnit> {
    let mut sides = self.side_strokes().map(|stroke| match stroke {
      Some(stroke) if stroke.style != BorderLineStyle::None => stroke.width,
      _ => LengthUnit::zero(),
    });

    if let Some(widths) = &self.border_width {
      sides = widths.0;
    }

    let [top, right, bottom, left] = sides;
    Edges::new(top, right, bottom, left)
  }

  /// Resolves the four sides in precedence order.
  ///
  /// Percentage widths resolve against `basis` (the containing block's
  /// content width).
  pub fn resolve(&self, basis: f32, font_size: f32) -> Edges<ResolvedBorderSide> {
    let units = self.width_units();
    let widths = [units.top, units.right, units.bottom, units.left]
      .map(|unit| unit.resolve_or(basis, font_size, 0.0).max(0.0));

    let mut sides = self.side_strokes().map(|stroke| {
      stroke.map_or_else(ResolvedBorderSide::default, |stroke| ResolvedBorderSide {
        width: 0.0,
        style: stroke.style,
        color: stroke.color,
      })
    });

    for (side, width) in sides.iter_mut().zip(widths) {
      side.width = width;
    }

    if let Some(color) = self.border_color {
      for side in &mut sides {
        side.color = color;
      }
    }

    let [top, right, bottom, left] = sides;
    Edges::new(top, right, bottom, left)
  }

  /// Resolves only the side widths, for layout math.
  pub fn resolve_widths(&self, basis: f32, font_size: f32) -> Edges<f32> {
    let sides = self.resolve(basis, font_size);

    Edges::new(
      sides.top.width,
      sides.right.width,
      sides.bottom.width,
      sides.left.width,
    )
  }
}
