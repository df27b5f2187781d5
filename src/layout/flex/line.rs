//! Line breaking and the iterative main-size resolution.

use log::trace;
use smallvec::SmallVec;

use crate::layout::{flex::item::FlexItem, style::FlexWrap};

const EPSILON: f32 = 0.0001;

/// Represents a single line of items in a flex container.
///
/// Indices point into the container's order-sorted flow item list.
#[derive(Debug)]
pub(super) struct FlexLine {
  pub items: SmallVec<[usize; 8]>,
}

/// Partitions flow items into lines.
///
/// `no_wrap` always produces a single line. Otherwise a new line opens
/// whenever the next item's outer main size (plus the gap before it) would
/// exceed the remaining space; a line is never left empty.
pub(super) fn break_lines(
  items: &[FlexItem<'_>],
  wrap: FlexWrap,
  main_space: f32,
  gap: f32,
  horizontal: bool,
) -> Vec<FlexLine> {
  if wrap == FlexWrap::NoWrap {
    return vec![FlexLine {
      items: (0..items.len()).collect(),
    }];
  }

  let mut lines: Vec<FlexLine> = Vec::new();
  let mut current: SmallVec<[usize; 8]> = SmallVec::new();
  let mut used = 0.0_f32;

  for (index, item) in items.iter().enumerate() {
    let outer = item.outer_main(horizontal);
    let needed = if current.is_empty() { outer } else { used + gap + outer };

    if !current.is_empty() && needed > main_space + EPSILON {
      lines.push(FlexLine {
        items: std::mem::take(&mut current),
      });
      used = 0.0;
      current.push(index);
      used += outer;
    } else {
      current.push(index);
      used = needed;
    }
  }

  if !current.is_empty() {
    lines.push(FlexLine { items: current });
  }

  trace!(
    "broke {} items into {} lines (space {main_space})",
    items.len(),
    lines.len()
  );

  lines
}

/// Resolves the main sizes of one line with the iterative freeze
/// algorithm.
///
/// Free space is distributed by grow factors when positive and by
/// basis-scaled shrink factors when negative. Items whose share lands
/// outside their `[min, max]` range freeze at the clamped size and give
/// their consumed delta back to the pool; the loop repeats until a round
/// completes without clamping, then the remaining items take their share
/// as-is.
pub(super) fn resolve_line(
  items: &mut [FlexItem<'_>],
  line: &FlexLine,
  main_space: f32,
  gap: f32,
  horizontal: bool,
) {
  let gaps = gap * line.items.len().saturating_sub(1) as f32;

  let outer_sum: f32 = line
    .items
    .iter()
    .map(|&index| items[index].basis + items[index].main_margin_sum(horizontal))
    .sum();

  let mut free = main_space - outer_sum - gaps;

  trace!(
    "resolving line of {} items, free space {free}",
    line.items.len()
  );

  loop {
    let unfrozen: SmallVec<[usize; 8]> = line
      .items
      .iter()
      .copied()
      .filter(|&index| !items[index].frozen)
      .collect();

    if unfrozen.is_empty() {
      break;
    }

    let growing = free > EPSILON;
    let shrinking = free < -EPSILON;

    if !growing && !shrinking {
      for &index in &unfrozen {
        items[index].frozen = true;
      }
      break;
    }

    let factor = |item: &FlexItem<'_>| {
      if growing {
        item.grow
      } else {
        // Shrinking scales by the basis so large items give up more.
        item.shrink * item.basis
      }
    };

    let factor_sum: f32 = unfrozen.iter().map(|&index| factor(&items[index])).sum();

    if factor_sum <= 0.0 {
      for &index in &unfrozen {
        items[index].frozen = true;
      }
      break;
    }

    // CSS factor flooring: a grow sum below one distributes only that
    // fraction of the free space.
    let denominator = if growing && factor_sum < 1.0 {
      1.0
    } else {
      factor_sum
    };

    let mut clamped_any = false;

    for &index in &unfrozen {
      let share = free * factor(&items[index]) / denominator;
      let target = items[index].basis + share;
      let clamped = items[index].clamp_main(target);

      if (clamped - target).abs() > EPSILON {
        items[index].main = clamped;
        items[index].frozen = true;
        free -= clamped - items[index].basis;
        clamped_any = true;
      }
    }

    if !clamped_any {
      for &index in &unfrozen {
        let share = free * factor(&items[index]) / denominator;
        items[index].main = items[index].clamp_main(items[index].basis + share);
        items[index].frozen = true;
      }
      break;
    }
  }

  for &index in &line.items {
    let item = &mut items[index];
    if (item.main - item.basis).abs() > EPSILON {
      item.flexed = true;
    }
  }
}
