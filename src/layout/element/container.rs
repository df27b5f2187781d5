//! Flex container element.

use serde::{Deserialize, Serialize};

use crate::layout::{element::Element, style::Style};

/// A container element that arranges its children with the flex algorithm.
///
/// The container-only attributes (`direction`, `wrap`, `gap`, `justify`,
/// `align`, `align_content`) are read from [`Style`].
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct FlexElement {
  /// The styling properties for this container.
  #[serde(flatten)]
  pub style: Style,
  /// The child elements, in source order.
  #[serde(default)]
  pub children: Vec<Element>,
}
