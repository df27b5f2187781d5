//! Spacing between flex items and between flex lines.

use cssparser::{Parser, ParserInput};
use serde::{Deserialize, Serialize};

use crate::layout::style::{FromCss, LengthUnit};

/// Represents spacing between flex items.
///
/// CSS order: the first value spaces rows (the cross axis of a `row`
/// container), the second spaces columns. A single value applies to both.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(try_from = "GapValue")]
pub struct Gap {
  /// Spacing between rows.
  pub row: LengthUnit,
  /// Spacing between columns.
  pub column: LengthUnit,
}

/// Represents a value for the gap property.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(untagged)]
pub enum GapValue {
  /// Same gap value for both axes.
  SingleValue(LengthUnit),
  /// Separate row and column values.
  Array(LengthUnit, LengthUnit),
  /// CSS string representation.
  Css(String),
}

impl Default for Gap {
  fn default() -> Self {
    Self {
      row: LengthUnit::zero(),
      column: LengthUnit::zero(),
    }
  }
}

impl TryFrom<GapValue> for Gap {
  type Error = String;

  fn try_from(value: GapValue) -> Result<Self, Self::Error> {
    match value {
      GapValue::SingleValue(value) => Ok(Self {
        row: value,
        column: value,
      }),
      GapValue::Array(row, column) => Ok(Self { row, column }),
      GapValue::Css(value) => {
        let mut input = ParserInput::new(&value);
        let mut parser = Parser::new(&mut input);

        let first = LengthUnit::from_css(&mut parser).map_err(|e| e.to_string())?;

        if let Ok(second) = parser.try_parse(LengthUnit::from_css) {
          Ok(Self {
            row: first,
            column: second,
          })
        } else {
          Ok(Self {
            row: first,
            column: first,
          })
        }
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn gap_try_from_variants() {
    let single = GapValue::SingleValue(LengthUnit::Px(12.0));
    let gap_single = Gap::try_from(single).expect("SingleValue should convert");
    assert_eq!(gap_single.row, LengthUnit::Px(12.0));
    assert_eq!(gap_single.column, LengthUnit::Px(12.0));

    let array = GapValue::Array(LengthUnit::Px(5.0), LengthUnit::Px(7.0));
    let gap_array = Gap::try_from(array).expect("Array should convert");
    assert_eq!(gap_array.row, LengthUnit::Px(5.0));
    assert_eq!(gap_array.column, LengthUnit::Px(7.0));
  }

  #[test]
  fn gap_from_css_parsing() {
    let gap_single = Gap::try_from(GapValue::Css("10px".to_string())).expect("10px parses");
    assert_eq!(gap_single.row, LengthUnit::Px(10.0));
    assert_eq!(gap_single.column, LengthUnit::Px(10.0));

    let gap_two = Gap::try_from(GapValue::Css("10px 20px".to_string())).expect("two values parse");
    assert_eq!(gap_two.row, LengthUnit::Px(10.0));
    assert_eq!(gap_two.column, LengthUnit::Px(20.0));
  }

  #[test]
  fn gap_from_css_invalid() {
    let res = Gap::try_from(GapValue::Css("invalid".to_string()));
    assert!(res.is_err());
  }
}
