//! Relative offsets, absolute placement, hidden children, and input
//! validation.

mod common;

use common::*;
use kumiko::{
  LayoutConfig, LayoutConfigBuilder, LayoutError, compute_layout,
  layout::{
    element::{Element, QrElement},
    style::{Display, FlexDirection, Justify, Position, Style},
  },
};

#[test]
fn relative_offsets_move_only_the_item() {
  let template = template_of(
    fixed_canvas(200.0, 50.0),
    vec![container(
      Style {
        direction: FlexDirection::Row,
        width: px(200.0),
        ..Default::default()
      },
      vec![
        block(Style {
          width: px(50.0),
          height: px(50.0),
          position: Position::Relative,
          left: Some(px(10.0)),
          top: Some(px(5.0)),
          ..Default::default()
        }),
        sized(50.0, 50.0),
      ],
    )],
  );

  let root = solve(&template);
  let row = &root.children[0];

  assert_rect(&row.children[0], 10.0, 5.0, 50.0, 50.0);
  // The sibling stays where static flow put it.
  assert_rect(&row.children[1], 50.0, 0.0, 50.0, 50.0);
}

#[test]
fn relative_right_and_bottom_shift_negatively() {
  let template = template_of(
    fixed_canvas(200.0, 50.0),
    vec![container(
      Style {
        direction: FlexDirection::Row,
        width: px(200.0),
        ..Default::default()
      },
      vec![block(Style {
        width: px(50.0),
        height: px(30.0),
        position: Position::Relative,
        right: Some(px(10.0)),
        bottom: Some(px(5.0)),
        ..Default::default()
      })],
    )],
  );

  let root = solve(&template);
  let row = &root.children[0];

  assert!(approx(row.children[0].x, -10.0));
  assert!(approx(row.children[0].y, -5.0));
}

#[test]
fn absolute_static_position_follows_justify_and_align() {
  let template = template_of(
    fixed_canvas(300.0, 100.0),
    vec![container(
      Style {
        direction: FlexDirection::Row,
        width: px(300.0),
        height: px(100.0),
        justify: Justify::End,
        align: kumiko::layout::style::Align::Center,
        ..Default::default()
      },
      vec![
        sized(50.0, 50.0),
        block(Style {
          position: Position::Absolute,
          width: px(40.0),
          height: px(40.0),
          ..Default::default()
        }),
      ],
    )],
  );

  let root = solve(&template);
  let row = &root.children[0];

  // Flow child packs to the end; the absolute child mimics justify/align.
  assert!(approx(row.children[0].x, 250.0));
  assert!(approx(row.children[1].x, 260.0));
  assert!(approx(row.children[1].y, 30.0));
}

#[test]
fn absolute_bottom_right_insets_place_from_far_edges() {
  let template = template_of(
    fixed_canvas(300.0, 200.0),
    vec![container(
      Style {
        width: px(300.0),
        height: px(200.0),
        ..Default::default()
      },
      vec![block(Style {
        position: Position::Absolute,
        width: px(50.0),
        height: px(40.0),
        right: Some(px(10.0)),
        bottom: Some(px(20.0)),
        ..Default::default()
      })],
    )],
  );

  let root = solve(&template);
  let child = &root.children[0].children[0];

  assert_rect(child, 240.0, 140.0, 50.0, 40.0);
}

#[test]
fn absolute_falls_back_to_intrinsic_size() {
  let template = template_of(
    fixed_canvas(300.0, 200.0),
    vec![container(
      Style {
        width: px(300.0),
        height: px(200.0),
        ..Default::default()
      },
      vec![Element::Qr(QrElement {
        style: Style {
          position: Position::Absolute,
          ..Default::default()
        },
        data: "payload".to_string(),
        size: Some(96.0),
      })],
    )],
  );

  let root = solve(&template);
  let child = &root.children[0].children[0];

  assert!(approx(child.width, 96.0));
  assert!(approx(child.height, 96.0));
}

#[test]
fn absolute_children_do_not_move_flow_siblings() {
  let flow_only = template_of(
    fixed_canvas(200.0, 100.0),
    vec![container(
      Style {
        direction: FlexDirection::Row,
        width: px(200.0),
        ..Default::default()
      },
      vec![sized(40.0, 40.0), sized(40.0, 40.0)],
    )],
  );

  let with_absolute = template_of(
    fixed_canvas(200.0, 100.0),
    vec![container(
      Style {
        direction: FlexDirection::Row,
        width: px(200.0),
        ..Default::default()
      },
      vec![
        sized(40.0, 40.0),
        block(Style {
          position: Position::Absolute,
          width: px(500.0),
          height: px(500.0),
          left: Some(px(1.0)),
          ..Default::default()
        }),
        sized(40.0, 40.0),
      ],
    )],
  );

  let base = solve(&flow_only);
  let extended = solve(&with_absolute);

  let base_row = &base.children[0];
  let extended_row = &extended.children[0];

  assert_rect(
    &extended_row.children[0],
    base_row.children[0].x,
    base_row.children[0].y,
    base_row.children[0].width,
    base_row.children[0].height,
  );
  assert_rect(
    &extended_row.children[2],
    base_row.children[1].x,
    base_row.children[1].y,
    base_row.children[1].width,
    base_row.children[1].height,
  );
}

#[test]
fn hidden_children_release_their_gap_slot() {
  let template = template_of(
    fixed_canvas(200.0, 30.0),
    vec![container(
      Style {
        direction: FlexDirection::Row,
        width: px(200.0),
        gap: serde_json::from_str("10").expect("gap should parse"),
        ..Default::default()
      },
      vec![
        sized(30.0, 30.0),
        block(Style {
          display: Display::None,
          width: px(1000.0),
          height: px(1000.0),
          ..Default::default()
        }),
        sized(30.0, 30.0),
      ],
    )],
  );

  let root = solve(&template);
  let row = &root.children[0];

  assert!(approx(row.children[0].x, 0.0));
  assert_rect(&row.children[1], 0.0, 0.0, 0.0, 0.0);
  // A single gap separates the two visible children.
  assert!(approx(row.children[2].x, 40.0));
}

#[test]
fn every_element_appears_once_in_source_order() {
  let template = template_of(
    fixed_canvas(200.0, 100.0),
    vec![container(
      Style {
        direction: FlexDirection::Row,
        width: px(200.0),
        ..Default::default()
      },
      vec![
        sized(10.0, 10.0),
        block(Style {
          display: Display::None,
          ..Default::default()
        }),
        block(Style {
          position: Position::Absolute,
          width: px(5.0),
          height: px(5.0),
          ..Default::default()
        }),
        sized(20.0, 20.0),
      ],
    )],
  );

  let root = solve(&template);
  let row = &root.children[0];
  let children = template.elements[0].children();

  assert_eq!(row.children.len(), 4);
  for (node, element) in row.children.iter().zip(children) {
    let reference = node.element.expect("child nodes carry their element");
    assert!(std::ptr::eq(reference, element));
  }
}

#[test]
fn depth_limit_aborts_layout() {
  let mut element = sized(10.0, 10.0);
  for _ in 0..10 {
    element = container(Style::default(), vec![element]);
  }

  let template = template_of(fixed_canvas(100.0, 100.0), vec![element]);
  let config = LayoutConfigBuilder::default()
    .max_depth(5_usize)
    .build()
    .expect("config should build");

  let result = compute_layout(&template, &config);
  assert!(matches!(result, Err(LayoutError::DepthExceeded { max_depth: 5 })));
}

#[test]
fn negative_grow_is_rejected() {
  let template = template_of(
    fixed_canvas(100.0, 100.0),
    vec![block(Style {
      grow: -1.0,
      ..Default::default()
    })],
  );

  let result = compute_layout(&template, &LayoutConfig::default());
  assert!(matches!(
    result,
    Err(LayoutError::NegativeFlexFactor {
      attribute: "grow",
      ..
    })
  ));
}

#[test]
fn canvas_fixed_both_requires_both_dimensions() {
  let mut canvas = fixed_canvas(100.0, 100.0);
  canvas.height = None;

  let template = template_of(canvas, vec![sized(10.0, 10.0)]);
  let result = compute_layout(&template, &LayoutConfig::default());

  assert!(matches!(
    result,
    Err(LayoutError::MissingCanvasDimension { axis: "height" })
  ));
}
