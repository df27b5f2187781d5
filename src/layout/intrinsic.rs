//! Bottom-up intrinsic measurement.
//!
//! This pass walks the element tree post-order and records, per element,
//! the border-box size range its content wants before any constraint from
//! a containing block exists. The flex solver consults the map for basis
//! and fallback sizes; external consumers get it through
//! [`measure_all_intrinsics`](crate::measure_all_intrinsics).
//!
//! Percentages have no basis at this point and count as indefinite, like
//! `auto`. Margins are not part of the stored size; container aggregation
//! adds them through [`IntrinsicSize::outer`].

use std::collections::HashMap;

use crate::{
  error::LayoutError,
  geometry::Edges,
  layout::{
    element::{Element, FlexElement, TextElement},
    style::{Display, Position, Style},
    text::{ResolvedTextStyle, TextMeasurer},
  },
};

/// The measured size range of one element, border box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IntrinsicSize {
  /// Smallest acceptable width.
  pub min_width: f32,
  /// Preferred (max-content) width.
  pub max_width: f32,
  /// Smallest acceptable height.
  pub min_height: f32,
  /// Preferred (max-content) height.
  pub max_height: f32,
}

impl IntrinsicSize {
  /// An all-zero size.
  pub const ZERO: Self = Self {
    min_width: 0.0,
    max_width: 0.0,
    min_height: 0.0,
    max_height: 0.0,
  };

  /// A size with no flexibility: min equals max on both axes.
  pub fn exact(width: f32, height: f32) -> Self {
    Self {
      min_width: width,
      max_width: width,
      min_height: height,
      max_height: height,
    }
  }

  /// Returns the size grown by the element's margins.
  ///
  /// `auto` margins contribute nothing at measurement time.
  pub fn outer(&self, margin: &Edges<Option<f32>>) -> Self {
    let horizontal = margin.left.unwrap_or(0.0) + margin.right.unwrap_or(0.0);
    let vertical = margin.top.unwrap_or(0.0) + margin.bottom.unwrap_or(0.0);

    Self {
      min_width: self.min_width + horizontal,
      max_width: self.max_width + horizontal,
      min_height: self.min_height + vertical,
      max_height: self.max_height + vertical,
    }
  }
}

/// Map from element identity to its measured size.
///
/// Keys are element addresses, which stay stable for the duration of a
/// layout call because the input tree is borrowed immutably.
#[derive(Debug, Default)]
pub struct IntrinsicMap {
  sizes: HashMap<usize, IntrinsicSize>,
}

fn identity(element: &Element) -> usize {
  std::ptr::from_ref(element) as usize
}

impl IntrinsicMap {
  /// Looks up an element's measured size; unmeasured elements are zero.
  pub fn get(&self, element: &Element) -> IntrinsicSize {
    self
      .sizes
      .get(&identity(element))
      .copied()
      .unwrap_or(IntrinsicSize::ZERO)
  }

  fn insert(&mut self, element: &Element, size: IntrinsicSize) {
    let _previous = self.sizes.insert(identity(element), size);
  }
}

/// The measurement pass itself.
pub(crate) struct IntrinsicMeasurer<'m> {
  pub measurer: &'m dyn TextMeasurer,
  pub base_font_size: f32,
  pub max_depth: usize,
}

impl IntrinsicMeasurer<'_> {
  /// Measures an element tree into a fresh map.
  pub fn measure_tree(&self, root: &Element) -> Result<IntrinsicMap, LayoutError> {
    let mut map = IntrinsicMap::default();
    let _root_size = self.measure(root, &mut map, 1)?;
    Ok(map)
  }

  /// Measures one element (and its subtree) into the map, returning its
  /// border-box size.
  fn measure(
    &self,
    element: &Element,
    map: &mut IntrinsicMap,
    depth: usize,
  ) -> Result<IntrinsicSize, LayoutError> {
    if depth > self.max_depth {
      return Err(LayoutError::DepthExceeded {
        max_depth: self.max_depth,
      });
    }

    let style = element.style();

    if style.display == Display::None {
      map.insert(element, IntrinsicSize::ZERO);
      return Ok(IntrinsicSize::ZERO);
    }

    let font_size = match element {
      Element::Text(text) => ResolvedTextStyle::of(text, self.base_font_size).font_size,
      _ => self.base_font_size,
    };

    let content = match element {
      Element::Flex(flex) => self.measure_container(flex, map, depth)?,
      Element::Text(text) => self.measure_text(text)?,
      Element::Image(image) => IntrinsicSize::exact(
        image.natural_width.unwrap_or(0.0),
        image.natural_height.unwrap_or(0.0),
      ),
      Element::Qr(qr) => IntrinsicSize::exact(qr.intrinsic_size(), qr.intrinsic_size()),
      Element::Barcode(barcode) => IntrinsicSize::exact(barcode.intrinsic_width(), barcode.bar_height),
      Element::Separator(separator) => match separator.orientation {
        crate::layout::element::SeparatorOrientation::Horizontal => {
          IntrinsicSize::exact(0.0, separator.thickness)
        }
        crate::layout::element::SeparatorOrientation::Vertical => {
          IntrinsicSize::exact(separator.thickness, 0.0)
        }
      },
    };

    let size = finish_box(style, content, font_size);
    map.insert(element, size);
    Ok(size)
  }

  fn measure_text(&self, text: &TextElement) -> Result<IntrinsicSize, LayoutError> {
    let resolved = ResolvedTextStyle::of(text, self.base_font_size);

    let unbounded = self.measurer.shape(&resolved.request(text, None))?;

    let (min_width, min_height) = if text.wrap {
      // Width-zero probe: every soft break taken, widest word survives.
      let narrow = self.measurer.shape(&resolved.request(text, Some(0.0)))?;
      (narrow.size.width, unbounded.size.height)
    } else {
      (unbounded.size.width, unbounded.size.height)
    };

    Ok(IntrinsicSize {
      min_width,
      max_width: unbounded.size.width,
      min_height,
      max_height: unbounded.size.height,
    })
  }

  fn measure_container(
    &self,
    flex: &FlexElement,
    map: &mut IntrinsicMap,
    depth: usize,
  ) -> Result<IntrinsicSize, LayoutError> {
    let style = &flex.style;
    let horizontal = style.direction.is_row();

    let main_gap = if horizontal {
      style.gap.column
    } else {
      style.gap.row
    }
    .resolve_definite(self.base_font_size)
    .unwrap_or(0.0);

    let wrapping = style.wrap != crate::layout::style::FlexWrap::NoWrap;

    self.aggregate(&flex.children, horizontal, main_gap, wrapping, map, depth)
  }

  /// Aggregates a child list the way the implicit canvas column does:
  /// no gap, no wrapping, vertical main axis.
  pub(crate) fn measure_column_forest(
    &self,
    children: &[Element],
    map: &mut IntrinsicMap,
  ) -> Result<IntrinsicSize, LayoutError> {
    self.aggregate(children, false, 0.0, false, map, 0)
  }

  /// Sums children along the main axis and maxes them along the cross
  /// axis, skipping hidden and absolute children.
  fn aggregate(
    &self,
    children: &[Element],
    horizontal: bool,
    main_gap: f32,
    wrapping: bool,
    map: &mut IntrinsicMap,
    depth: usize,
  ) -> Result<IntrinsicSize, LayoutError> {
    let mut sum_max_main = 0.0_f32;
    let mut sum_min_main = 0.0_f32;
    let mut max_min_main = 0.0_f32;
    let mut max_max_cross = 0.0_f32;
    let mut max_min_cross = 0.0_f32;
    let mut counted = 0_usize;

    for child in children {
      let child_size = self.measure(child, map, depth + 1)?;
      let child_style = child.style();

      if child_style.display == Display::None || child_style.position == Position::Absolute {
        continue;
      }

      let margin = definite_margin(child_style, self.base_font_size);
      let outer = child_size.outer(&margin);

      let (min_main, max_main, min_cross, max_cross) = if horizontal {
        (outer.min_width, outer.max_width, outer.min_height, outer.max_height)
      } else {
        (outer.min_height, outer.max_height, outer.min_width, outer.max_width)
      };

      sum_max_main += max_main;
      sum_min_main += min_main;
      max_min_main = max_min_main.max(min_main);
      max_max_cross = max_max_cross.max(max_cross);
      max_min_cross = max_min_cross.max(min_cross);
      counted += 1;
    }

    let gaps = main_gap * counted.saturating_sub(1) as f32;

    let min_main = if wrapping {
      max_min_main
    } else {
      sum_min_main + gaps
    };
    let max_main = sum_max_main + gaps;

    Ok(if horizontal {
      IntrinsicSize {
        min_width: min_main,
        max_width: max_main,
        min_height: max_min_cross,
        max_height: max_max_cross,
      }
    } else {
      IntrinsicSize {
        min_width: max_min_cross,
        max_width: max_max_cross,
        min_height: min_main,
        max_height: max_main,
      }
    })
  }
}

fn definite_margin(style: &Style, font_size: f32) -> Edges<Option<f32>> {
  let sides: Edges<crate::layout::style::LengthUnit> = style.margin.into();

  Edges::new(
    sides.top.resolve_definite(font_size),
    sides.right.resolve_definite(font_size),
    sides.bottom.resolve_definite(font_size),
    sides.left.resolve_definite(font_size),
  )
}

/// Applies the shared epilogue: padding and border, explicit dimension
/// overrides, aspect-ratio derivation, and min/max attribute clamps.
fn finish_box(style: &Style, content: IntrinsicSize, font_size: f32) -> IntrinsicSize {
  let padding = definite_edges(&style.padding.into(), font_size);
  let border = definite_edges(&style.border.width_units(), font_size);

  let horizontal_inset = padding.horizontal() + border.horizontal();
  let vertical_inset = padding.vertical() + border.vertical();

  let explicit_width = style.width.resolve_definite(font_size);
  let explicit_height = style.height.resolve_definite(font_size);

  let (mut min_width, mut max_width) = match explicit_width {
    Some(width) => (width, width),
    None => (
      content.min_width + horizontal_inset,
      content.max_width + horizontal_inset,
    ),
  };

  let (mut min_height, mut max_height) = match explicit_height {
    Some(height) => (height, height),
    None => (
      content.min_height + vertical_inset,
      content.max_height + vertical_inset,
    ),
  };

  if let Some(ratio) = style.aspect_ratio.filter(|ratio| *ratio > 0.0) {
    match (explicit_width, explicit_height) {
      (Some(width), None) => {
        min_height = width / ratio;
        max_height = width / ratio;
      }
      (None, Some(height)) => {
        min_width = height * ratio;
        max_width = height * ratio;
      }
      _ => {}
    }
  }

  let clamp = |value: f32, min: Option<f32>, max: Option<f32>| {
    let mut out = value;
    if let Some(max) = max {
      out = out.min(max);
    }
    if let Some(min) = min {
      out = out.max(min);
    }
    out.max(0.0)
  };

  let attr_min_w = style.min_width.resolve_definite(font_size);
  let attr_max_w = style.max_width.resolve_definite(font_size);
  let attr_min_h = style.min_height.resolve_definite(font_size);
  let attr_max_h = style.max_height.resolve_definite(font_size);

  IntrinsicSize {
    min_width: clamp(min_width, attr_min_w, attr_max_w),
    max_width: clamp(max_width, attr_min_w, attr_max_w),
    min_height: clamp(min_height, attr_min_h, attr_max_h),
    max_height: clamp(max_height, attr_min_h, attr_max_h),
  }
}

fn definite_edges(sides: &Edges<crate::layout::style::LengthUnit>, font_size: f32) -> Edges<f32> {
  Edges::new(
    sides.top.resolve_definite(font_size).unwrap_or(0.0).max(0.0),
    sides
      .right
      .resolve_definite(font_size)
      .unwrap_or(0.0)
      .max(0.0),
    sides
      .bottom
      .resolve_definite(font_size)
      .unwrap_or(0.0)
      .max(0.0),
    sides.left.resolve_definite(font_size).unwrap_or(0.0).max(0.0),
  )
}
