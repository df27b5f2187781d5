//! Main-axis and cross-axis distribution math.

use crate::layout::style::{AlignContent, Justify};

/// Calculates the leading offset and extra between-item spacing for
/// `justify`.
///
/// When free space is negative, the space-distributing variants fall back
/// to `start`; `center` and `end` keep their formulas and may shift items
/// out of the content box (content overflows toward the start edge).
pub(super) fn justify_offsets(justify: Justify, free: f32, count: usize) -> (f32, f32) {
  if count == 0 {
    return (0.0, 0.0);
  }

  let overflowing = free < 0.0;
  let n = count as f32;

  match justify {
    Justify::Start => (0.0, 0.0),
    Justify::End => (free, 0.0),
    Justify::Center => (free / 2.0, 0.0),
    Justify::SpaceBetween => {
      if overflowing || count < 2 {
        (0.0, 0.0)
      } else {
        (0.0, free / (n - 1.0))
      }
    }
    Justify::SpaceAround => {
      if overflowing {
        (0.0, 0.0)
      } else {
        (free / (2.0 * n), free / n)
      }
    }
    Justify::SpaceEvenly => {
      if overflowing {
        (0.0, 0.0)
      } else {
        (free / (n + 1.0), free / (n + 1.0))
      }
    }
  }
}

/// Calculates line packing for `align_content`.
///
/// Returns `(leading offset, extra spacing between lines, growth added to
/// every line)`. Negative free space falls back to `start`.
pub(super) fn align_content_offsets(
  align_content: AlignContent,
  free: f32,
  count: usize,
) -> (f32, f32, f32) {
  if count == 0 || free < 0.0 {
    return (0.0, 0.0, 0.0);
  }

  let n = count as f32;

  match align_content {
    AlignContent::Start => (0.0, 0.0, 0.0),
    AlignContent::Center => (free / 2.0, 0.0, 0.0),
    AlignContent::End => (free, 0.0, 0.0),
    AlignContent::Stretch => (0.0, 0.0, free / n),
    AlignContent::SpaceBetween => {
      if count < 2 {
        (0.0, 0.0, 0.0)
      } else {
        (0.0, free / (n - 1.0), 0.0)
      }
    }
    AlignContent::SpaceAround => (free / (2.0 * n), free / n, 0.0),
    AlignContent::SpaceEvenly => (free / (n + 1.0), free / (n + 1.0), 0.0),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn justify_space_between_splits_gaps() {
    let (lead, between) = justify_offsets(Justify::SpaceBetween, 90.0, 4);
    assert_eq!(lead, 0.0);
    assert_eq!(between, 30.0);
  }

  #[test]
  fn justify_space_around_halves_edges() {
    let (lead, between) = justify_offsets(Justify::SpaceAround, 80.0, 4);
    assert_eq!(lead, 10.0);
    assert_eq!(between, 20.0);
  }

  #[test]
  fn justify_space_evenly_uniform_slots() {
    let (lead, between) = justify_offsets(Justify::SpaceEvenly, 100.0, 4);
    assert_eq!(lead, 20.0);
    assert_eq!(between, 20.0);
  }

  #[test]
  fn space_variants_fall_back_to_start_on_overflow() {
    assert_eq!(justify_offsets(Justify::SpaceBetween, -40.0, 2), (0.0, 0.0));
    assert_eq!(justify_offsets(Justify::SpaceAround, -40.0, 2), (0.0, 0.0));
    assert_eq!(justify_offsets(Justify::SpaceEvenly, -40.0, 2), (0.0, 0.0));
  }

  #[test]
  fn single_item_space_between_acts_like_start() {
    assert_eq!(justify_offsets(Justify::SpaceBetween, 50.0, 1), (0.0, 0.0));
  }

  #[test]
  fn align_content_stretch_grows_lines() {
    let (lead, between, grow) = align_content_offsets(AlignContent::Stretch, 60.0, 3);
    assert_eq!(lead, 0.0);
    assert_eq!(between, 0.0);
    assert_eq!(grow, 20.0);
  }

  #[test]
  fn align_content_negative_free_is_start() {
    assert_eq!(
      align_content_offsets(AlignContent::Center, -10.0, 2),
      (0.0, 0.0, 0.0)
    );
  }
}
