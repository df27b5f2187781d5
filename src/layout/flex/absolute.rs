//! Out-of-flow (absolute) child placement.
//!
//! Absolute children resolve against the containing block's inner padding
//! edge (its content box) and never influence flow siblings, intrinsic
//! sizes, or flex math.

use crate::{
  error::LayoutError,
  geometry::Rect,
  layout::{
    context::LayoutContext,
    element::Element,
    flex::{BoxFrame, ContainerSpec, FlexSolver},
    node::LayoutNode,
    style::{Align, Justify, TextDirection},
    text::ResolvedTextStyle,
  },
};

impl FlexSolver<'_> {
  /// Lays out one absolute child against the container's content box.
  pub(super) fn layout_absolute<'t>(
    &self,
    element: &'t Element,
    spec: &ContainerSpec,
    frame: &BoxFrame,
    direction: TextDirection,
    depth: usize,
  ) -> Result<LayoutNode<'t>, LayoutError> {
    let pb = frame.content_box;
    let style = element.style();
    let horizontal = spec.direction.is_row();

    let text_style = match element {
      Element::Text(text) => Some(ResolvedTextStyle::of(text, self.base_font_size)),
      _ => None,
    };
    let font_size = text_style.map_or(self.base_font_size, |resolved| resolved.font_size);

    // Auto margins resolve to zero for absolutes.
    let margin = style.resolved_margin(pb.width, font_size);
    let margin_left = margin.left.unwrap_or(0.0);
    let margin_right = margin.right.unwrap_or(0.0);
    let margin_top = margin.top.unwrap_or(0.0);
    let margin_bottom = margin.bottom.unwrap_or(0.0);

    let padding = style.resolved_padding(pb.width, font_size);
    let border = style.resolved_border_widths(pb.width, font_size);
    let horizontal_inset = padding.horizontal() + border.horizontal();
    let vertical_inset = padding.vertical() + border.vertical();

    let left = style.left.and_then(|unit| unit.resolve(pb.width, font_size));
    let right = style.right.and_then(|unit| unit.resolve(pb.width, font_size));
    let top = style.top.and_then(|unit| unit.resolve(pb.height, font_size));
    let bottom = style
      .bottom
      .and_then(|unit| unit.resolve(pb.height, font_size));

    let min_width = style.min_width.resolve_or(pb.width, font_size, 0.0).max(0.0);
    let max_width = style
      .max_width
      .resolve(pb.width, font_size)
      .unwrap_or(f32::INFINITY);
    let min_height = style
      .min_height
      .resolve_or(pb.height, font_size, 0.0)
      .max(0.0);
    let max_height = style
      .max_height
      .resolve(pb.height, font_size)
      .unwrap_or(f32::INFINITY);

    // Min wins over max, matching the CSS sizing rules.
    let clamp_w = |value: f32| {
      let mut out = value;
      if out > max_width {
        out = max_width;
      }
      if out < min_width {
        out = min_width;
      }
      out.max(0.0)
    };
    let clamp_h = |value: f32| {
      let mut out = value;
      if out > max_height {
        out = max_height;
      }
      if out < min_height {
        out = min_height;
      }
      out.max(0.0)
    };

    let intrinsic = self.intrinsics.get(element);

    // Size resolution: explicit attribute, then opposing insets, then
    // intrinsic fallback.
    let mut width_defined = true;
    let mut width = match style.width.resolve(pb.width, font_size) {
      Some(value) => value,
      None => match (left, right) {
        (Some(l), Some(r)) => pb.width - l - r - margin_left - margin_right,
        _ => {
          width_defined = false;
          intrinsic.max_width
        }
      },
    };

    let mut height_defined = true;
    let mut height = match style.height.resolve(pb.height, font_size) {
      Some(value) => value,
      None => match (top, bottom) {
        (Some(t), Some(b)) => pb.height - t - b - margin_top - margin_bottom,
        _ => {
          height_defined = false;
          intrinsic.max_height
        }
      },
    };

    width = clamp_w(width);
    height = clamp_h(height);

    if let Some(ratio) = style.aspect_ratio.filter(|ratio| *ratio > 0.0) {
      if width_defined && !height_defined {
        height = clamp_h(width / ratio);
        height_defined = true;
      } else if height_defined && !width_defined {
        width = clamp_w(height * ratio);
        width_defined = true;
      }
    }

    // The single shaping call happens at the final width.
    let shaped = match (element, text_style) {
      (Element::Text(text), Some(resolved)) => {
        let budget = (width - horizontal_inset).max(0.0);
        let shaped = self.measurer.shape(&resolved.request(text, Some(budget)))?;

        if !height_defined {
          height = clamp_h(shaped.size.height + vertical_inset);
        }

        Some(shaped)
      }
      _ => None,
    };

    // Without insets the static position follows the container's justify
    // and align outcomes (space distributions collapse to start).
    let static_main = |extent: f32, outer: f32| match spec.justify {
      Justify::Start | Justify::SpaceBetween | Justify::SpaceAround | Justify::SpaceEvenly => 0.0,
      Justify::Center => (extent - outer) / 2.0,
      Justify::End => extent - outer,
    };
    let static_cross = |extent: f32, outer: f32| match spec.align {
      Align::Start | Align::Stretch | Align::Baseline => 0.0,
      Align::Center => (extent - outer) / 2.0,
      Align::End => extent - outer,
    };

    let outer_width = width + margin_left + margin_right;
    let outer_height = height + margin_top + margin_bottom;

    let x = match (left, right) {
      (Some(l), _) => pb.x + l + margin_left,
      (None, Some(r)) => pb.x + pb.width - r - width - margin_right,
      (None, None) => {
        let offset = if horizontal {
          static_main(pb.width, outer_width)
        } else {
          static_cross(pb.width, outer_width)
        };
        pb.x + offset + margin_left
      }
    };

    let y = match (top, bottom) {
      (Some(t), _) => pb.y + t + margin_top,
      (None, Some(b)) => pb.y + pb.height - b - height - margin_bottom,
      (None, None) => {
        let offset = if horizontal {
          static_cross(pb.height, outer_height)
        } else {
          static_main(pb.height, outer_height)
        };
        pb.y + offset + margin_top
      }
    };

    let rect = Rect::new(x, y, width, height);
    let ctx = LayoutContext::new(pb.width, pb.height, self.base_font_size);

    self.node_for(element, rect, ctx, direction, depth, shaped, font_size)
  }
}
