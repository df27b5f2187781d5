//! The flex solver.
//!
//! A recursive top-down pass: given a container's boxes and its children,
//! it resolves hypothetical main sizes, breaks lines, runs the iterative
//! grow/shrink freeze, sizes and aligns the cross axis, places absolutes,
//! and recurses into each child's final rectangle.

mod absolute;
mod item;
mod line;
mod placement;

use log::debug;

use crate::{
  error::LayoutError,
  geometry::Rect,
  layout::{
    context::LayoutContext,
    element::Element,
    intrinsic::IntrinsicMap,
    node::{LayoutNode, TextLayout},
    style::{
      Align, AlignContent, Display, FlexDirection, FlexWrap, Justify, Position, Style,
      TextDirection,
    },
    text::{ResolvedTextStyle, ShapedText, TextMeasurer},
  },
};

use item::FlexItem;
use line::{break_lines, resolve_line};
use placement::{align_content_offsets, justify_offsets};

/// Shared read-only state of one layout pass.
pub(crate) struct FlexSolver<'m> {
  /// Intrinsic sizes measured before the pass.
  pub intrinsics: &'m IntrinsicMap,
  /// The injected (or fallback) text shaper.
  pub measurer: &'m dyn TextMeasurer,
  /// Base font size from the configuration.
  pub base_font_size: f32,
  /// Recursion guard.
  pub max_depth: usize,
}

/// A container's layout-relevant attributes with gaps already resolved.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ContainerSpec {
  pub direction: FlexDirection,
  pub wrap: FlexWrap,
  pub main_gap: f32,
  pub cross_gap: f32,
  pub justify: Justify,
  pub align: Align,
  pub align_content: AlignContent,
}

impl ContainerSpec {
  /// Resolves a container's spec against its own content box.
  ///
  /// Percentage gaps resolve against the container's main-axis size (the
  /// cross gap against the cross axis).
  pub fn of(style: &Style, content_width: f32, content_height: f32, font_size: f32) -> Self {
    let horizontal = style.direction.is_row();

    let (main_size, cross_size) = if horizontal {
      (content_width, content_height)
    } else {
      (content_height, content_width)
    };

    let (main_unit, cross_unit) = if horizontal {
      (style.gap.column, style.gap.row)
    } else {
      (style.gap.row, style.gap.column)
    };

    Self {
      direction: style.direction,
      wrap: style.wrap,
      main_gap: main_unit.resolve_or(main_size, font_size, 0.0).max(0.0),
      cross_gap: cross_unit.resolve_or(cross_size, font_size, 0.0).max(0.0),
      justify: style.justify,
      align: style.align,
      align_content: style.align_content,
    }
  }

  /// The implicit canvas container: a plain column.
  pub fn column_root() -> Self {
    Self {
      direction: FlexDirection::Column,
      wrap: FlexWrap::NoWrap,
      main_gap: 0.0,
      cross_gap: 0.0,
      justify: Justify::Start,
      align: Align::Stretch,
      align_content: AlignContent::Stretch,
    }
  }
}

/// The nested boxes of one container: the border box (full element
/// rectangle) and the content box, which is both the flow placement area
/// and the containing block for absolute children (they place from the
/// inner padding edge).
#[derive(Debug, Clone, Copy)]
pub(crate) struct BoxFrame {
  pub border_box: Rect,
  pub content_box: Rect,
}

impl BoxFrame {
  /// A frame without padding or border, used for the canvas root.
  pub fn bare(rect: Rect) -> Self {
    Self {
      border_box: rect,
      content_box: rect,
    }
  }
}

impl FlexSolver<'_> {
  /// Lays out one container's children and returns their nodes in source
  /// order.
  pub fn layout_children<'t>(
    &self,
    children: &'t [Element],
    spec: &ContainerSpec,
    frame: &BoxFrame,
    direction: TextDirection,
    depth: usize,
  ) -> Result<Vec<LayoutNode<'t>>, LayoutError> {
    let (nodes, _main) = self.solve(children, spec, frame, direction, depth, false)?;
    Ok(nodes)
  }

  /// Lays out the implicit canvas column whose height derives from
  /// content.
  ///
  /// The main axis is content-sized: free space is zero by definition, so
  /// grow distributes nothing and items keep their hypothetical sizes.
  /// Returns the nodes and the resulting content height.
  pub fn layout_root_column<'t>(
    &self,
    children: &'t [Element],
    width: f32,
    direction: TextDirection,
  ) -> Result<(Vec<LayoutNode<'t>>, f32), LayoutError> {
    let spec = ContainerSpec::column_root();
    let frame = BoxFrame::bare(Rect::new(0.0, 0.0, width, 0.0));

    self.solve(children, &spec, &frame, direction, 1, true)
  }

  /// The solver pipeline for one container.
  ///
  /// With `auto_main` the container's main extent is the sum of the
  /// items' hypothetical outer sizes (plus gaps) instead of the frame's.
  fn solve<'t>(
    &self,
    children: &'t [Element],
    spec: &ContainerSpec,
    frame: &BoxFrame,
    direction: TextDirection,
    depth: usize,
    auto_main: bool,
  ) -> Result<(Vec<LayoutNode<'t>>, f32), LayoutError> {
    if depth > self.max_depth {
      return Err(LayoutError::DepthExceeded {
        max_depth: self.max_depth,
      });
    }

    let horizontal = spec.direction.is_row();
    let ctx = LayoutContext::new(
      frame.content_box.width,
      frame.content_box.height,
      self.base_font_size,
    );

    // Partition children; flow items are the only flex participants.
    let mut flow: Vec<FlexItem<'t>> = Vec::new();
    let mut absolute_indices: Vec<usize> = Vec::new();
    let mut hidden_indices: Vec<usize> = Vec::new();

    for (index, child) in children.iter().enumerate() {
      let style = child.style();

      if style.display == Display::None {
        hidden_indices.push(index);
      } else if style.position == Position::Absolute {
        absolute_indices.push(index);
      } else {
        flow.push(self.build_item(child, index, spec, ctx)?);
      }
    }

    // Stable: equal orders keep source order.
    flow.sort_by_key(|item| item.order);

    let content_main = if auto_main {
      flow
        .iter()
        .map(|item| item.outer_main(horizontal))
        .sum::<f32>()
        + spec.main_gap * flow.len().saturating_sub(1) as f32
    } else if horizontal {
      frame.content_box.width
    } else {
      frame.content_box.height
    };

    // A content-sized main axis makes the frame's extent definite now.
    let mut frame = *frame;
    if auto_main {
      if horizontal {
        frame.content_box.width = content_main;
        frame.border_box.width = content_main;
      } else {
        frame.content_box.height = content_main;
        frame.border_box.height = content_main;
      }
    }

    let content = frame.content_box;
    let content_cross = if horizontal {
      content.height
    } else {
      content.width
    };

    let lines = break_lines(&flow, spec.wrap, content_main, spec.main_gap, horizontal);

    for flex_line in &lines {
      resolve_line(&mut flow, flex_line, content_main, spec.main_gap, horizontal);
    }

    for item in &mut flow {
      self.resolve_cross(item, horizontal)?;
    }

    // Line cross sizes and offsets within the content box.
    let mut line_sizes: Vec<f32> = lines
      .iter()
      .map(|flex_line| {
        flex_line
          .items
          .iter()
          .map(|&index| flow[index].outer_cross(horizontal))
          .fold(0.0_f32, f32::max)
      })
      .collect();
    let mut line_offsets = vec![0.0_f32; lines.len()];

    if lines.len() == 1 {
      // A single line spans the container's whole cross axis.
      line_sizes[0] = content_cross;
    } else if !lines.is_empty() {
      let used: f32 =
        line_sizes.iter().sum::<f32>() + spec.cross_gap * (lines.len() - 1) as f32;
      let cross_free = content_cross - used;

      let (lead, between, growth) =
        align_content_offsets(spec.align_content, cross_free, lines.len());

      let mut cursor = lead;
      for (index, size) in line_sizes.iter_mut().enumerate() {
        *size += growth;
        line_offsets[index] = cursor;
        cursor += *size + spec.cross_gap + between;
      }
    }

    // Stretch and the aspect-ratio post-pass need final line sizes.
    for (line_index, flex_line) in lines.iter().enumerate() {
      for &index in &flex_line.items {
        let item = &mut flow[index];
        let align = item.element.style().align_self.resolve(spec.align);
        let (start, end) = item.cross_margins(horizontal);
        let has_auto_margin = start.is_none() || end.is_none();

        if align == Align::Stretch && !item.explicit_cross && !has_auto_margin {
          item.cross =
            item.clamp_cross(line_sizes[line_index] - item.cross_margin_sum(horizontal));
        }

        apply_aspect_ratio(item, horizontal);
      }
    }

    place_lines(
      &mut flow,
      &lines,
      &line_sizes,
      &line_offsets,
      spec,
      content_main,
      horizontal,
    );

    if spec.wrap == FlexWrap::WrapReverse {
      mirror_wrap_reverse(&mut flow, &frame, horizontal);
    }

    let mirror_main = if horizontal {
      spec.direction.is_reverse() ^ (direction == TextDirection::Rtl)
    } else {
      spec.direction.is_reverse()
    };

    if mirror_main {
      for item in &mut flow {
        item.main_offset = content_main - (item.main_offset + item.main);
      }
    }

    debug!(
      "container {:?}: {} flow / {} absolute / {} hidden children on {} lines",
      spec.direction,
      flow.len(),
      absolute_indices.len(),
      hidden_indices.len(),
      lines.len()
    );

    // Materialize rects and recurse; output keeps source order.
    let ctx = ctx.with_size(content.width, content.height);
    let mut nodes: Vec<Option<LayoutNode<'t>>> = children.iter().map(|_| None).collect();

    for item in flow {
      let (x_offset, y_offset) = if horizontal {
        (item.main_offset, item.cross_offset)
      } else {
        (item.cross_offset, item.main_offset)
      };
      let (width, height) = if horizontal {
        (item.main, item.cross)
      } else {
        (item.cross, item.main)
      };

      let mut rect = Rect::new(content.x + x_offset, content.y + y_offset, width, height);
      apply_relative_offsets(&mut rect, item.element.style(), &content, item.font_size);

      let source_index = item.source_index;
      let font_size = item.font_size;
      let node = self.node_for(item.element, rect, ctx, direction, depth, item.shaped, font_size)?;
      nodes[source_index] = Some(node);
    }

    for index in hidden_indices {
      let child = &children[index];
      nodes[index] = Some(LayoutNode {
        element: Some(child),
        x: frame.border_box.x,
        y: frame.border_box.y,
        width: 0.0,
        height: 0.0,
        direction: child.style().text_direction.unwrap_or(direction),
        text: None,
        children: Vec::new(),
      });
    }

    for index in absolute_indices {
      nodes[index] = Some(self.layout_absolute(&children[index], spec, &frame, direction, depth)?);
    }

    let nodes = nodes
      .into_iter()
      .map(|node| node.expect("every child is laid out exactly once"))
      .collect();

    Ok((nodes, content_main))
  }

  /// Resolves an item's cross size once its main size is frozen.
  ///
  /// Text in row containers is shaped here, at its final width; everything
  /// else falls back to explicit attributes or intrinsic sizes. Stretch may
  /// still override the value once line sizes exist.
  fn resolve_cross(&self, item: &mut FlexItem<'_>, horizontal: bool) -> Result<(), LayoutError> {
    if let Element::Text(text) = item.element {
      if horizontal {
        let resolved = ResolvedTextStyle::of(text, self.base_font_size);
        let budget = (item.main - item.horizontal_inset()).max(0.0);
        let shaped = self.measurer.shape(&resolved.request(text, Some(budget)))?;

        if !item.cross_set {
          item.cross = item.clamp_cross(shaped.size.height + item.vertical_inset());
          item.cross_set = true;
        }
        item.shaped = Some(shaped);
      }
      return Ok(());
    }

    if item.cross_set {
      return Ok(());
    }

    let intrinsic = self.intrinsics.get(item.element);
    let value = if horizontal {
      intrinsic.max_height
    } else {
      intrinsic.max_width
    };
    item.cross = item.clamp_cross(value);

    Ok(())
  }

  /// Builds the output node for a placed element, recursing into
  /// containers.
  #[allow(clippy::too_many_arguments)]
  pub(super) fn node_for<'t>(
    &self,
    element: &'t Element,
    rect: Rect,
    parent_ctx: LayoutContext,
    parent_direction: TextDirection,
    depth: usize,
    shaped: Option<ShapedText>,
    font_size: f32,
  ) -> Result<LayoutNode<'t>, LayoutError> {
    let style = element.style();
    let direction = style.text_direction.unwrap_or(parent_direction);

    let children = match element {
      Element::Flex(flex) => {
        // Padding and border percentages resolve against the containing
        // block, not the element's own box.
        let padding = style.resolved_padding(parent_ctx.container_width, parent_ctx.font_size);
        let border =
          style.resolved_border_widths(parent_ctx.container_width, parent_ctx.font_size);

        let content_box = rect.inset(&border).inset(&padding);

        let child_spec = ContainerSpec::of(
          &flex.style,
          content_box.width,
          content_box.height,
          parent_ctx.font_size,
        );
        let child_frame = BoxFrame {
          border_box: rect,
          content_box,
        };

        self.layout_children(&flex.children, &child_spec, &child_frame, direction, depth + 1)?
      }
      _ => Vec::new(),
    };

    let text = match element {
      Element::Text(_) => shaped.map(|shaped| TextLayout {
        line_height: shaped.line_height,
        lines: shaped.lines,
        font_size,
      }),
      _ => None,
    };

    Ok(LayoutNode {
      element: Some(element),
      x: rect.x,
      y: rect.y,
      width: rect.width,
      height: rect.height,
      direction,
      text,
      children,
    })
  }
}

/// Distributes auto margins, applies `justify`, and assigns main and
/// cross offsets per line.
fn place_lines(
  flow: &mut [FlexItem<'_>],
  lines: &[line::FlexLine],
  line_sizes: &[f32],
  line_offsets: &[f32],
  spec: &ContainerSpec,
  content_main: f32,
  horizontal: bool,
) {
  for (line_index, flex_line) in lines.iter().enumerate() {
    let count = flex_line.items.len();
    let gaps = spec.main_gap * count.saturating_sub(1) as f32;
    let used: f32 = flex_line
      .items
      .iter()
      .map(|&index| flow[index].outer_main(horizontal))
      .sum::<f32>()
      + gaps;
    let mut free = content_main - used;

    let auto_count: usize = flex_line
      .items
      .iter()
      .map(|&index| {
        let (start, end) = flow[index].main_margins(horizontal);
        usize::from(start.is_none()) + usize::from(end.is_none())
      })
      .sum();

    let mut justify = spec.justify;

    // Auto margins swallow positive free space and defeat justify.
    let share = if auto_count > 0 && free > 0.0 {
      justify = Justify::Start;
      let value = free / auto_count as f32;
      free = 0.0;
      value
    } else {
      0.0
    };

    for &index in &flex_line.items {
      let (start, end) = flow[index].main_margins(horizontal);
      flow[index].main_margin_start = start.unwrap_or(share);
      flow[index].main_margin_end = end.unwrap_or(share);
    }

    let (lead, between) = justify_offsets(justify, free, count);

    let mut cursor = lead;
    for &index in &flex_line.items {
      let item = &mut flow[index];
      item.main_offset = cursor + item.main_margin_start;
      cursor = item.main_offset + item.main + item.main_margin_end + spec.main_gap + between;
    }

    for &index in &flex_line.items {
      let item = &mut flow[index];
      let align = item.element.style().align_self.resolve(spec.align);
      let (start, end) = item.cross_margins(horizontal);
      let line_size = line_sizes[line_index];
      let free_line = line_size - item.cross - start.unwrap_or(0.0) - end.unwrap_or(0.0);

      let offset = match (start, end) {
        // Cross-axis auto margins override alignment outright.
        (None, None) => free_line.max(0.0) / 2.0,
        (None, Some(_)) => free_line.max(0.0),
        (Some(value), None) => value,
        (Some(value), Some(_)) => match align {
          Align::Start | Align::Baseline | Align::Stretch => value,
          Align::Center => value + free_line / 2.0,
          Align::End => value + free_line,
        },
      };

      item.cross_offset = line_offsets[line_index] + offset;
    }
  }
}

/// Recomputes the cross size from the aspect ratio when the flex step
/// determined the main size and the cross axis is free.
fn apply_aspect_ratio(item: &mut FlexItem<'_>, horizontal: bool) {
  let style = item.element.style();

  let Some(ratio) = style.aspect_ratio.filter(|ratio| *ratio > 0.0) else {
    return;
  };

  if item.explicit_cross {
    return;
  }

  // Column text already shaped at a chosen width; the ratio would
  // invalidate its lines.
  if matches!(item.element, Element::Text(_)) && !horizontal {
    return;
  }

  if item.main_from_attr || item.flexed {
    let derived = if horizontal {
      item.main / ratio
    } else {
      item.main * ratio
    };
    item.cross = item.clamp_cross(derived);
  }
}

/// Applies relative-position offsets; siblings never observe them.
fn apply_relative_offsets(rect: &mut Rect, style: &Style, content: &Rect, font_size: f32) {
  if style.position != Position::Relative {
    return;
  }

  if let Some(left) = style.left.and_then(|unit| unit.resolve(content.width, font_size)) {
    rect.x += left;
  } else if let Some(right) = style
    .right
    .and_then(|unit| unit.resolve(content.width, font_size))
  {
    rect.x -= right;
  }

  if let Some(top) = style.top.and_then(|unit| unit.resolve(content.height, font_size)) {
    rect.y += top;
  } else if let Some(bottom) = style
    .bottom
    .and_then(|unit| unit.resolve(content.height, font_size))
  {
    rect.y -= bottom;
  }
}

/// Mirrors every flow item along the cross axis using the full container
/// cross dimension (border box), per wrap-reverse semantics.
fn mirror_wrap_reverse(flow: &mut [FlexItem<'_>], frame: &BoxFrame, horizontal: bool) {
  let (full, inset_start) = if horizontal {
    (
      frame.border_box.height,
      frame.content_box.y - frame.border_box.y,
    )
  } else {
    (
      frame.border_box.width,
      frame.content_box.x - frame.border_box.x,
    )
  };

  for item in flow {
    let start_in_border_box = inset_start + item.cross_offset;
    let mirrored = full - (start_in_border_box + item.cross);
    item.cross_offset = mirrored - inset_start;
  }
}
