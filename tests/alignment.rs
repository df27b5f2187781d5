//! Cross-axis alignment, auto margins, wrapping, and line packing.

mod common;

use common::*;
use kumiko::layout::style::{
  Align, AlignContent, AlignSelf, FlexDirection, FlexWrap, Justify, Sides, Style,
};

fn row_300x100(align: Align, children: Vec<kumiko::layout::element::Element>) -> kumiko::layout::Template {
  template_of(
    fixed_canvas(300.0, 100.0),
    vec![container(
      Style {
        direction: FlexDirection::Row,
        width: px(300.0),
        height: px(100.0),
        align,
        ..Default::default()
      },
      children,
    )],
  )
}

#[test]
fn align_self_overrides_container_align() {
  let template = row_300x100(
    Align::Start,
    vec![
      sized(50.0, 40.0),
      block(Style {
        width: px(50.0),
        height: px(40.0),
        align_self: AlignSelf::End,
        ..Default::default()
      },),
      block(Style {
        width: px(50.0),
        height: px(40.0),
        align_self: AlignSelf::Center,
        ..Default::default()
      },),
    ],
  );

  let root = solve(&template);
  let row = &root.children[0];

  assert!(approx(row.children[0].y, 0.0));
  assert!(approx(row.children[1].y, 60.0));
  assert!(approx(row.children[2].y, 30.0));
}

#[test]
fn stretch_fills_the_line_and_respects_max() {
  let template = row_300x100(
    Align::Stretch,
    vec![
      block(Style {
        width: px(50.0),
        ..Default::default()
      }),
      block(Style {
        width: px(50.0),
        max_height: px(60.0),
        ..Default::default()
      }),
    ],
  );

  let root = solve(&template);
  let row = &root.children[0];

  assert!(approx(row.children[0].height, 100.0));
  assert!(approx(row.children[1].height, 60.0));
}

#[test]
fn main_axis_auto_margins_center_and_defeat_justify() {
  let template = template_of(
    fixed_canvas(300.0, 40.0),
    vec![container(
      Style {
        direction: FlexDirection::Row,
        width: px(300.0),
        justify: Justify::End,
        ..Default::default()
      },
      vec![block(Style {
        width: px(100.0),
        height: px(40.0),
        margin: serde_json::from_str("\"0 auto\"").expect("margin should parse"),
        ..Default::default()
      })],
    )],
  );

  let root = solve(&template);
  let row = &root.children[0];

  assert!(approx(row.children[0].x, 100.0));
}

#[test]
fn cross_axis_auto_margin_pushes_to_the_far_edge() {
  let template = row_300x100(
    Align::Start,
    vec![block(Style {
      width: px(50.0),
      height: px(40.0),
      margin: serde_json::from_str("\"auto 0 0 0\"").expect("margin should parse"),
      ..Default::default()
    })],
  );

  let root = solve(&template);
  let row = &root.children[0];

  // The top auto margin swallows all cross free space.
  assert!(approx(row.children[0].y, 60.0));
}

#[test]
fn space_around_and_evenly_distributions() {
  let around = template_of(
    fixed_canvas(300.0, 20.0),
    vec![container(
      Style {
        direction: FlexDirection::Row,
        width: px(300.0),
        justify: Justify::SpaceAround,
        ..Default::default()
      },
      vec![sized(60.0, 20.0), sized(60.0, 20.0)],
    )],
  );

  let root = solve(&around);
  let row = &root.children[0];
  assert!(approx(row.children[0].x, 45.0));
  assert!(approx(row.children[1].x, 195.0));

  let evenly = template_of(
    fixed_canvas(300.0, 20.0),
    vec![container(
      Style {
        direction: FlexDirection::Row,
        width: px(300.0),
        justify: Justify::SpaceEvenly,
        ..Default::default()
      },
      vec![sized(60.0, 20.0), sized(60.0, 20.0)],
    )],
  );

  let root = solve(&evenly);
  let row = &root.children[0];
  assert!(approx(row.children[0].x, 60.0));
  assert!(approx(row.children[1].x, 180.0));
}

#[test]
fn wrap_breaks_lines_and_align_content_centers_them() {
  let template = template_of(
    fixed_canvas(100.0, 90.0),
    vec![container(
      Style {
        direction: FlexDirection::Row,
        width: px(100.0),
        height: px(90.0),
        wrap: FlexWrap::Wrap,
        align_content: AlignContent::Center,
        ..Default::default()
      },
      vec![
        sized(40.0, 20.0),
        sized(40.0, 20.0),
        sized(40.0, 20.0),
        sized(40.0, 20.0),
      ],
    )],
  );

  let root = solve(&template);
  let row = &root.children[0];

  assert_rect(&row.children[0], 0.0, 25.0, 40.0, 20.0);
  assert_rect(&row.children[1], 40.0, 25.0, 40.0, 20.0);
  assert_rect(&row.children[2], 0.0, 45.0, 40.0, 20.0);
  assert_rect(&row.children[3], 40.0, 45.0, 40.0, 20.0);
}

#[test]
fn align_content_stretch_grows_lines() {
  let template = template_of(
    fixed_canvas(100.0, 90.0),
    vec![container(
      Style {
        direction: FlexDirection::Row,
        width: px(100.0),
        height: px(90.0),
        wrap: FlexWrap::Wrap,
        ..Default::default()
      },
      vec![
        sized(40.0, 20.0),
        sized(40.0, 20.0),
        sized(40.0, 20.0),
        sized(40.0, 20.0),
      ],
    )],
  );

  let root = solve(&template);
  let row = &root.children[0];

  // Each of the two lines grows by half the 50px of free cross space.
  assert!(approx(row.children[0].y, 0.0));
  assert!(approx(row.children[2].y, 45.0));
}

#[test]
fn wrap_reverse_mirrors_against_the_full_container() {
  let template = template_of(
    fixed_canvas(100.0, 40.0),
    vec![container(
      Style {
        direction: FlexDirection::Row,
        width: px(100.0),
        height: px(40.0),
        wrap: FlexWrap::WrapReverse,
        ..Default::default()
      },
      vec![sized(60.0, 20.0), sized(60.0, 20.0)],
    )],
  );

  let root = solve(&template);
  let row = &root.children[0];

  // Line order flips: the first line lands at the bottom.
  assert!(approx(row.children[0].y, 20.0));
  assert!(approx(row.children[1].y, 0.0));
}

#[test]
fn cross_gap_spaces_wrapped_lines() {
  let template = template_of(
    fixed_canvas(100.0, 90.0),
    vec![container(
      Style {
        direction: FlexDirection::Row,
        width: px(100.0),
        height: px(90.0),
        wrap: FlexWrap::Wrap,
        align_content: AlignContent::Start,
        gap: serde_json::from_str("\"10px 0px\"").expect("gap should parse"),
        ..Default::default()
      },
      vec![sized(60.0, 20.0), sized(60.0, 20.0)],
    )],
  );

  let root = solve(&template);
  let row = &root.children[0];

  assert!(approx(row.children[0].y, 0.0));
  assert!(approx(row.children[1].y, 30.0));
}

#[test]
fn margins_shift_items_within_the_line() {
  let template = row_300x100(
    Align::Start,
    vec![block(Style {
      width: px(50.0),
      height: px(40.0),
      margin: Sides([px(5.0), px(0.0), px(0.0), px(12.0)]),
      ..Default::default()
    })],
  );

  let root = solve(&template);
  let row = &root.children[0];

  assert!(approx(row.children[0].x, 12.0));
  assert!(approx(row.children[0].y, 5.0));
}
