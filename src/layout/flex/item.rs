//! Per-child working state for one container's flex resolution.

use crate::{
  error::LayoutError,
  geometry::Edges,
  layout::{
    context::LayoutContext,
    element::Element,
    flex::{ContainerSpec, FlexSolver},
    style::{Align, LengthUnit},
    text::{ResolvedTextStyle, ShapedText},
  },
};

/// An intermediate representation of a flex item during layout
/// calculations.
///
/// `main`/`cross` are border-box sizes along the container's axes; offsets
/// are relative to the container's content box and become absolute at
/// materialization.
#[derive(Debug)]
pub(super) struct FlexItem<'t> {
  pub element: &'t Element,
  /// Position among the container's children in source order.
  pub source_index: usize,
  pub order: i32,
  pub grow: f32,
  pub shrink: f32,
  /// Effective font size for this item's own unit resolution.
  pub font_size: f32,
  /// Margins; `None` is an `auto` side awaiting distribution.
  pub margin: Edges<Option<f32>>,
  pub padding: Edges<f32>,
  pub border: Edges<f32>,
  pub min_main: f32,
  pub max_main: f32,
  pub min_cross: f32,
  pub max_cross: f32,
  /// Hypothetical main size: basis resolution output, clamped.
  pub basis: f32,
  /// Resolved main size, final once frozen.
  pub main: f32,
  /// Resolved cross size.
  pub cross: f32,
  pub frozen: bool,
  /// Whether the main size came from `basis`/`width`/`height` rather than
  /// content.
  pub main_from_attr: bool,
  /// Whether the cross-axis dimension attribute was set.
  pub explicit_cross: bool,
  /// Whether `cross` was already fixed during basis resolution
  /// (column-direction text).
  pub cross_set: bool,
  /// Whether grow/shrink changed the main size away from the hypothetical.
  pub flexed: bool,
  /// Shaped text, filled exactly once for text elements.
  pub shaped: Option<ShapedText>,
  /// Main-axis margins after auto distribution.
  pub main_margin_start: f32,
  pub main_margin_end: f32,
  /// Main-axis offset of the border box within the content box.
  pub main_offset: f32,
  /// Cross-axis offset of the border box within the content box.
  pub cross_offset: f32,
}

impl FlexItem<'_> {
  fn margin_axis(&self, horizontal: bool) -> (Option<f32>, Option<f32>) {
    if horizontal {
      (self.margin.left, self.margin.right)
    } else {
      (self.margin.top, self.margin.bottom)
    }
  }

  /// Main-axis margins in (start, end) order before mirroring.
  pub fn main_margins(&self, horizontal: bool) -> (Option<f32>, Option<f32>) {
    self.margin_axis(horizontal)
  }

  /// Cross-axis margins in (start, end) order.
  pub fn cross_margins(&self, horizontal: bool) -> (Option<f32>, Option<f32>) {
    self.margin_axis(!horizontal)
  }

  /// Sum of the main-axis margins, autos counting as zero.
  pub fn main_margin_sum(&self, horizontal: bool) -> f32 {
    let (start, end) = self.main_margins(horizontal);
    start.unwrap_or(0.0) + end.unwrap_or(0.0)
  }

  /// Sum of the cross-axis margins, autos counting as zero.
  pub fn cross_margin_sum(&self, horizontal: bool) -> f32 {
    let (start, end) = self.cross_margins(horizontal);
    start.unwrap_or(0.0) + end.unwrap_or(0.0)
  }

  /// Border-box main size plus margins.
  pub fn outer_main(&self, horizontal: bool) -> f32 {
    self.main + self.main_margin_sum(horizontal)
  }

  /// Border-box cross size plus margins.
  pub fn outer_cross(&self, horizontal: bool) -> f32 {
    self.cross + self.cross_margin_sum(horizontal)
  }

  /// Clamps a candidate main size into the item's resolved range.
  ///
  /// Min wins over max, matching the CSS sizing rules, so this is not a
  /// plain interval clamp.
  pub fn clamp_main(&self, value: f32) -> f32 {
    let mut out = value;
    if out > self.max_main {
      out = self.max_main;
    }
    if out < self.min_main {
      out = self.min_main;
    }
    out.max(0.0)
  }

  /// Clamps a candidate cross size into the item's resolved range.
  pub fn clamp_cross(&self, value: f32) -> f32 {
    let mut out = value;
    if out > self.max_cross {
      out = self.max_cross;
    }
    if out < self.min_cross {
      out = self.min_cross;
    }
    out.max(0.0)
  }

  /// Horizontal padding plus border, the inset between border box and
  /// content box width.
  pub fn horizontal_inset(&self) -> f32 {
    self.padding.horizontal() + self.border.horizontal()
  }

  /// Vertical padding plus border.
  pub fn vertical_inset(&self) -> f32 {
    self.padding.vertical() + self.border.vertical()
  }
}

impl FlexSolver<'_> {
  /// Builds the working state for one flow child.
  ///
  /// Resolves margins, padding, border, the min/max ranges, and the
  /// hypothetical main size. Column-direction text is shaped here, at its
  /// resolved cross width, so the hypothetical height already accounts for
  /// wrapping.
  pub(super) fn build_item<'t>(
    &self,
    element: &'t Element,
    source_index: usize,
    spec: &ContainerSpec,
    ctx: LayoutContext,
  ) -> Result<FlexItem<'t>, LayoutError> {
    let style = element.style();
    let horizontal = spec.direction.is_row();

    if style.grow < 0.0 {
      return Err(LayoutError::NegativeFlexFactor {
        element: element.kind(),
        attribute: "grow",
        value: style.grow,
      });
    }

    if style.shrink < 0.0 {
      return Err(LayoutError::NegativeFlexFactor {
        element: element.kind(),
        attribute: "shrink",
        value: style.shrink,
      });
    }

    let text_style = match element {
      Element::Text(text) => Some(ResolvedTextStyle::of(text, self.base_font_size)),
      _ => None,
    };

    // The element's own units resolve against its effective font size.
    let ctx = match text_style {
      Some(resolved) => ctx.with_font_size(resolved.font_size),
      None => ctx,
    };
    let font_size = ctx.font_size;

    // Box-model percentages resolve against the containing block width.
    let margin = style.resolved_margin(ctx.container_width, font_size);
    let padding = style.resolved_padding(ctx.container_width, font_size);
    let border = style.resolved_border_widths(ctx.container_width, font_size);

    let (main_basis, cross_basis) = if horizontal {
      (ctx.container_width, ctx.container_height)
    } else {
      (ctx.container_height, ctx.container_width)
    };

    let min_main = style
      .min_size_on(horizontal)
      .resolve_or(main_basis, font_size, 0.0)
      .max(0.0);
    let max_main = style
      .max_size_on(horizontal)
      .resolve(main_basis, font_size)
      .unwrap_or(f32::INFINITY);
    let min_cross = style
      .min_size_on(!horizontal)
      .resolve_or(cross_basis, font_size, 0.0)
      .max(0.0);
    let max_cross = style
      .max_size_on(!horizontal)
      .resolve(cross_basis, font_size)
      .unwrap_or(f32::INFINITY);

    let explicit_main = style.size_on(horizontal).resolve(main_basis, font_size);
    let explicit_cross_value = style.size_on(!horizontal).resolve(cross_basis, font_size);

    let mut item = FlexItem {
      element,
      source_index,
      order: style.order,
      grow: style.grow,
      shrink: style.shrink,
      font_size,
      margin,
      padding,
      border,
      min_main,
      max_main,
      min_cross,
      max_cross,
      basis: 0.0,
      main: 0.0,
      cross: explicit_cross_value.unwrap_or(0.0),
      frozen: false,
      main_from_attr: false,
      explicit_cross: explicit_cross_value.is_some(),
      cross_set: explicit_cross_value.is_some(),
      flexed: false,
      shaped: None,
      main_margin_start: 0.0,
      main_margin_end: 0.0,
      main_offset: 0.0,
      cross_offset: 0.0,
    };

    if item.explicit_cross {
      item.cross = item.clamp_cross(item.cross);
    }

    let basis_attr = match style.basis {
      LengthUnit::Auto => None,
      unit => unit.resolve(main_basis, font_size),
    };

    let hypothetical = match basis_attr.or(explicit_main) {
      Some(value) => {
        item.main_from_attr = true;
        value
      }
      None => match (element, text_style) {
        (Element::Text(text), Some(resolved)) if !horizontal => {
          self.shape_column_text(&mut item, text, &resolved, spec, cross_basis)?
        }
        (Element::Text(_), _) => {
          // Row direction: shaping waits for the final width.
          self.intrinsics.get(element).max_width
        }
        _ => {
          let intrinsic = self.intrinsics.get(element);
          if horizontal {
            intrinsic.max_width
          } else {
            intrinsic.max_height
          }
        }
      },
    };

    item.basis = item.clamp_main(hypothetical);
    item.main = item.basis;

    Ok(item)
  }

  /// Shapes text inside a column container and returns the hypothetical
  /// main (height) size.
  ///
  /// The width budget is the cross size the item will end up with: the
  /// explicit width, else the stretch width, else the intrinsic
  /// max-content width.
  fn shape_column_text(
    &self,
    item: &mut FlexItem<'_>,
    text: &crate::layout::element::TextElement,
    resolved: &ResolvedTextStyle,
    spec: &ContainerSpec,
    container_cross: f32,
  ) -> Result<f32, LayoutError> {
    let horizontal = spec.direction.is_row();
    let align = text.style.align_self.resolve(spec.align);
    let (margin_start, margin_end) = item.cross_margins(horizontal);
    let has_auto_cross_margin = margin_start.is_none() || margin_end.is_none();

    let budget = if item.explicit_cross {
      item.cross
    } else if align == Align::Stretch && !has_auto_cross_margin {
      item.clamp_cross(container_cross - item.cross_margin_sum(horizontal))
    } else {
      item.clamp_cross(self.intrinsics.get(item.element).max_width)
    };

    let content_budget = (budget - item.horizontal_inset()).max(0.0);
    let shaped = self
      .measurer
      .shape(&resolved.request(text, Some(content_budget)))?;

    let height = shaped.size.height + item.vertical_inset();

    if !item.explicit_cross {
      item.cross = if align == Align::Stretch && !has_auto_cross_margin {
        budget
      } else {
        item.clamp_cross(shaped.size.width + item.horizontal_inset())
      };
    }
    item.cross_set = true;
    item.shaped = Some(shaped);

    Ok(height)
  }
}
