//! Four-side shorthand values for padding, margin, and inset-like boxes.

use cssparser::{Parser, ParserInput};
use serde::{Deserialize, Deserializer, Serialize, de::Error as DeError};

use crate::{geometry::Edges, layout::style::FromCss};

/// Represents the values for the four sides of a box (top, right, bottom,
/// left).
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Sides<T: Copy>(pub [T; 4]);

/// Represents values that can be applied to all sides of an element.
///
/// This enum allows for flexible specification of values like padding or
/// margin using either a single value for all sides, separate values for
/// vertical/horizontal axes, or individual values for each side.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(untagged)]
pub enum SidesValue<T> {
  /// CSS string representation.
  Css(String),
  /// Individual values for each side (top, right, bottom, left).
  AllSides(T, T, T, T),
  /// Separate values for vertical and horizontal sides (vertical,
  /// horizontal).
  AxisSidesArray(T, T),
  /// Same value for all four sides.
  SingleValue(T),
}

impl<T: Copy + for<'i> FromCss<'i>> TryFrom<SidesValue<T>> for Sides<T> {
  type Error = String;

  fn try_from(value: SidesValue<T>) -> Result<Self, Self::Error> {
    match value {
      SidesValue::Css(string) => {
        let mut input = ParserInput::new(&string);
        let mut parser = Parser::new(&mut input);

        let first = T::from_css(&mut parser).map_err(|e| e.to_string())?;

        let mut values = Vec::with_capacity(4);
        values.push(first);

        // Keep parsing whitespace-separated values, up to four.
        loop {
          match parser.try_parse(T::from_css) {
            Ok(next_value) => values.push(next_value),
            Err(_) => break,
          }

          if values.len() >= 4 {
            break;
          }
        }

        // CSS shorthand laws: 1 = all, 2 = vertical/horizontal,
        // 3 = top/horizontal/bottom, 4 = top/right/bottom/left.
        let sides = match values.len() {
          1 => Sides([values[0]; 4]),
          2 => Sides([values[0], values[1], values[0], values[1]]),
          3 => Sides([values[0], values[1], values[2], values[1]]),
          4 => Sides([values[0], values[1], values[2], values[3]]),
          _ => unreachable!(),
        };

        Ok(sides)
      }
      SidesValue::AllSides(top, right, bottom, left) => Ok(Sides([top, right, bottom, left])),
      SidesValue::AxisSidesArray(vertical, horizontal) => {
        Ok(Sides([vertical, horizontal, vertical, horizontal]))
      }
      SidesValue::SingleValue(value) => Ok(Sides([value; 4])),
    }
  }
}

impl<'de, T> Deserialize<'de> for Sides<T>
where
  T: Copy + Deserialize<'de> + for<'i> FromCss<'i>,
{
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    let proxy = SidesValue::<T>::deserialize(deserializer)?;
    Sides::try_from(proxy).map_err(D::Error::custom)
  }
}

impl<T: Copy> From<Sides<T>> for Edges<T> {
  fn from(value: Sides<T>) -> Self {
    Edges {
      top: value.0[0],
      right: value.0[1],
      bottom: value.0[2],
      left: value.0[3],
    }
  }
}

impl<T: Default + Copy> Default for Sides<T> {
  fn default() -> Self {
    Self([T::default(); 4])
  }
}

impl<T: Copy> From<T> for Sides<T> {
  fn from(value: T) -> Self {
    Self([value; 4])
  }
}

impl<T: Default> Default for SidesValue<T> {
  fn default() -> Self {
    Self::SingleValue(T::default())
  }
}
