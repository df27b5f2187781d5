//! Length units and measurement types for the kumiko styling system.
//!
//! Every unit-bearing attribute resolves through [`LengthUnit`]: absolute
//! pixels, percentages of a caller-supplied basis, em values relative to the
//! effective font size, or the `auto` sentinel.

use cssparser::{Parser, ParserInput, Token, match_ignore_ascii_case};
use serde::{Deserialize, Serialize};

use crate::layout::style::{FromCss, ParseResult};

/// Represents a value that can be a specific length, percentage, or
/// automatic.
///
/// `auto` is a real sentinel, not zero: resolution returns `None` for it and
/// callers decide what automatic sizing means (content size for dimensions,
/// distributable margin for margins).
#[derive(Default, Debug, Clone, Deserialize, Serialize, PartialEq, Copy)]
#[serde(try_from = "LengthUnitValue", into = "LengthUnitValue")]
pub enum LengthUnit {
  /// Automatic sizing based on content.
  #[default]
  Auto,
  /// Percentage value relative to a caller-chosen basis (0-100).
  Percentage(f32),
  /// Em value relative to the effective font size.
  Em(f32),
  /// Specific pixel value.
  Px(f32),
}

/// Proxy type for CSS `LengthUnit` serialization/deserialization.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthUnitValue {
  /// Automatic sizing based on content.
  Auto,
  /// Percentage value relative to a caller-chosen basis (0-100).
  Percentage(f32),
  /// Em value relative to the effective font size.
  Em(f32),
  /// Specific pixel value.
  #[serde(untagged)]
  Px(f32),
  /// CSS string representation.
  #[serde(untagged)]
  Css(String),
}

impl TryFrom<LengthUnitValue> for LengthUnit {
  type Error = &'static str;

  fn try_from(value: LengthUnitValue) -> Result<Self, Self::Error> {
    match value {
      LengthUnitValue::Auto => Ok(Self::Auto),
      LengthUnitValue::Percentage(v) => Ok(Self::Percentage(v)),
      LengthUnitValue::Em(v) => Ok(Self::Em(v)),
      LengthUnitValue::Px(v) => Ok(Self::Px(v)),
      LengthUnitValue::Css(s) => {
        let mut input = ParserInput::new(&s);
        let mut parser = Parser::new(&mut input);

        let unit =
          LengthUnit::from_css(&mut parser).map_err(|_| "Failed to parse CSS length unit")?;

        // Reject trailing tokens so that multi-value CSS like "1px 2px"
        // does not get parsed as a single LengthUnit.
        parser
          .expect_exhausted()
          .map_err(|_| "Failed to parse CSS length unit: trailing tokens found")?;

        Ok(unit)
      }
    }
  }
}

impl From<LengthUnit> for LengthUnitValue {
  fn from(value: LengthUnit) -> Self {
    match value {
      LengthUnit::Auto => LengthUnitValue::Auto,
      LengthUnit::Percentage(v) => LengthUnitValue::Percentage(v),
      LengthUnit::Em(v) => LengthUnitValue::Em(v),
      LengthUnit::Px(v) => LengthUnitValue::Px(v),
    }
  }
}

impl From<f32> for LengthUnit {
  fn from(value: f32) -> Self {
    Self::Px(value)
  }
}

impl<'i> FromCss<'i> for LengthUnit {
  fn from_css(input: &mut Parser<'i, '_>) -> ParseResult<'i, Self> {
    let location = input.current_source_location();
    let token = input.next()?;

    match *token {
      Token::Ident(ref unit) => match_ignore_ascii_case! {&unit,
        "auto" => Ok(Self::Auto),
        _ => Err(location.new_basic_unexpected_token_error(token.clone()).into()),
      },
      Token::Dimension {
        value, ref unit, ..
      } => {
        match_ignore_ascii_case! {&unit,
          "px" => Ok(Self::Px(value)),
          "em" => Ok(Self::Em(value)),
          _ => Err(location.new_basic_unexpected_token_error(token.clone()).into()),
        }
      }
      Token::Percentage { unit_value, .. } => Ok(Self::Percentage(unit_value * 100.0)),
      Token::Number { value, .. } => Ok(Self::Px(value)),
      _ => Err(
        location
          .new_basic_unexpected_token_error(token.clone())
          .into(),
      ),
    }
  }
}

impl LengthUnit {
  /// Returns a zero pixel length unit.
  pub const fn zero() -> Self {
    Self::Px(0.0)
  }

  /// Resolves the unit against a percentage basis and font size.
  ///
  /// Returns `None` for `auto`; callers fall back to their documented
  /// default instead of treating the sentinel as zero.
  pub fn resolve(self, basis: f32, font_size: f32) -> Option<f32> {
    match self {
      Self::Auto => None,
      Self::Px(value) => Some(value),
      Self::Percentage(value) => Some(value / 100.0 * basis),
      Self::Em(value) => Some(value * font_size),
    }
  }

  /// Resolves like [`resolve`](Self::resolve) but substitutes a default for
  /// `auto`.
  pub fn resolve_or(self, basis: f32, font_size: f32, default: f32) -> f32 {
    self.resolve(basis, font_size).unwrap_or(default)
  }

  /// Resolves only units that need no containing block: pixels and ems.
  ///
  /// Percentages are indefinite during intrinsic measurement (no containing
  /// block exists yet) and return `None` alongside `auto`.
  pub fn resolve_definite(self, font_size: f32) -> Option<f32> {
    match self {
      Self::Px(value) => Some(value),
      Self::Em(value) => Some(value * font_size),
      Self::Auto | Self::Percentage(_) => None,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn parse(css: &str) -> LengthUnit {
    LengthUnit::try_from(LengthUnitValue::Css(css.to_string())).expect("should parse")
  }

  #[test]
  fn parses_css_forms() {
    assert_eq!(parse("auto"), LengthUnit::Auto);
    assert_eq!(parse("42px"), LengthUnit::Px(42.0));
    assert_eq!(parse("42"), LengthUnit::Px(42.0));
    assert_eq!(parse("1.5em"), LengthUnit::Em(1.5));
    assert_eq!(parse("50%"), LengthUnit::Percentage(50.0));
  }

  #[test]
  fn rejects_trailing_tokens() {
    assert!(LengthUnit::try_from(LengthUnitValue::Css("1px 2px".to_string())).is_err());
  }

  #[test]
  fn rejects_unknown_units() {
    assert!(LengthUnit::try_from(LengthUnitValue::Css("3pt".to_string())).is_err());
  }

  #[test]
  fn resolves_against_basis_and_font_size() {
    assert_eq!(LengthUnit::Px(10.0).resolve(200.0, 16.0), Some(10.0));
    assert_eq!(LengthUnit::Percentage(50.0).resolve(200.0, 16.0), Some(100.0));
    assert_eq!(LengthUnit::Em(2.0).resolve(200.0, 16.0), Some(32.0));
    assert_eq!(LengthUnit::Auto.resolve(200.0, 16.0), None);
  }

  #[test]
  fn definite_resolution_skips_percentages() {
    assert_eq!(LengthUnit::Percentage(50.0).resolve_definite(16.0), None);
    assert_eq!(LengthUnit::Em(1.0).resolve_definite(16.0), Some(16.0));
    assert_eq!(LengthUnit::Auto.resolve_definite(16.0), None);
  }

  #[test]
  fn deserializes_from_json_number_and_string() {
    let px: LengthUnit = serde_json::from_str("12.5").expect("number should deserialize");
    assert_eq!(px, LengthUnit::Px(12.5));

    let percent: LengthUnit = serde_json::from_str("\"25%\"").expect("string should deserialize");
    assert_eq!(percent, LengthUnit::Percentage(25.0));
  }
}
