//! Line-height values; bare numbers are multipliers of the font size.

use cssparser::{Parser, ParserInput};
use serde::{Deserialize, Serialize};

use crate::layout::style::{FromCss, LengthUnit, ParseResult};

/// Default multiplier applied when no line height is specified.
pub const DEFAULT_LINE_HEIGHT_SCALER: f32 = 1.2;

/// Represents a line height value; a bare number is parsed as em.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Copy)]
#[serde(try_from = "LineHeightValue")]
pub struct LineHeight(pub LengthUnit);

/// Proxy type for `LineHeight` CSS deserialization.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum LineHeightValue {
  /// A number value, interpreted as a multiplier of the font size.
  Number(f32),
  /// A CSS string value.
  Css(String),
  /// A length value.
  Length(LengthUnit),
}

impl TryFrom<LineHeightValue> for LineHeight {
  type Error = String;

  fn try_from(value: LineHeightValue) -> Result<Self, Self::Error> {
    match value {
      LineHeightValue::Number(number) => Ok(LineHeight(LengthUnit::Em(number))),
      LineHeightValue::Css(css) => {
        let mut input = ParserInput::new(&css);
        let mut parser = Parser::new(&mut input);

        LineHeight::from_css(&mut parser).map_err(|e| e.to_string())
      }
      LineHeightValue::Length(length) => Ok(LineHeight(length)),
    }
  }
}

impl<'i> FromCss<'i> for LineHeight {
  fn from_css(input: &mut Parser<'i, '_>) -> ParseResult<'i, Self> {
    let Ok(number) = input.try_parse(Parser::expect_number) else {
      return LengthUnit::from_css(input).map(LineHeight);
    };

    Ok(LineHeight(LengthUnit::Em(number)))
  }
}

impl LineHeight {
  /// Resolves to pixels against the given font size.
  ///
  /// Percentages and ems both scale the font size. Negative results clamp
  /// to zero.
  pub fn resolve(self, font_size: f32) -> f32 {
    self
      .0
      .resolve(font_size, font_size)
      .unwrap_or(font_size * DEFAULT_LINE_HEIGHT_SCALER)
      .max(0.0)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn bare_number_is_a_multiplier() {
    let lh: LineHeight = serde_json::from_str("1.5").expect("number should deserialize");
    assert_eq!(lh, LineHeight(LengthUnit::Em(1.5)));
    assert_eq!(lh.resolve(10.0), 15.0);
  }

  #[test]
  fn css_length_is_absolute() {
    let lh: LineHeight = serde_json::from_str("\"18px\"").expect("string should deserialize");
    assert_eq!(lh.resolve(10.0), 18.0);
  }

  #[test]
  fn negative_values_clamp_to_zero() {
    let lh = LineHeight(LengthUnit::Px(-4.0));
    assert_eq!(lh.resolve(16.0), 0.0);
  }
}
