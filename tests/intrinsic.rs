//! Intrinsic measurement: provider sizes, aggregation, overrides, and
//! content-driven canvas sizing.

mod common;

use common::*;
use kumiko::{
  LayoutConfig, measure_all_intrinsics,
  layout::{
    Template,
    element::{
      BarcodeElement, Element, ImageElement, QrElement, SeparatorElement, SeparatorOrientation,
    },
    style::{Display, FlexDirection, Position, Style},
  },
};

fn measure(element: &Element) -> kumiko::layout::IntrinsicSize {
  measure_all_intrinsics(element, &LayoutConfig::default())
    .expect("measurement should succeed")
    .get(element)
}

#[test]
fn provider_intrinsics_for_leaf_primitives() {
  let qr = Element::Qr(QrElement {
    style: Style::default(),
    data: "payload".to_string(),
    size: Some(96.0),
  });
  let size = measure(&qr);
  assert!(approx(size.max_width, 96.0));
  assert!(approx(size.max_height, 96.0));

  let barcode = Element::Barcode(BarcodeElement {
    data: "1234".to_string(),
    ..Default::default()
  });
  let size = measure(&barcode);
  // (4 chars + overhead) * 11 modules * 2px.
  assert!(approx(size.max_width, 154.0));
  assert!(approx(size.max_height, 48.0));

  let rule = Element::Separator(SeparatorElement::default());
  let size = measure(&rule);
  assert!(approx(size.max_width, 0.0));
  assert!(approx(size.max_height, 1.0));

  let vertical = Element::Separator(SeparatorElement {
    orientation: SeparatorOrientation::Vertical,
    thickness: 2.0,
    ..Default::default()
  });
  let size = measure(&vertical);
  assert!(approx(size.max_width, 2.0));
  assert!(approx(size.max_height, 0.0));
}

#[test]
fn explicit_dimensions_override_provider_sizes() {
  let image = Element::Image(ImageElement {
    style: Style {
      width: px(30.0),
      ..Default::default()
    },
    src: "logo.png".to_string(),
    natural_width: Some(100.0),
    natural_height: Some(50.0),
  });

  let size = measure(&image);
  assert!(approx(size.max_width, 30.0));
  assert!(approx(size.max_height, 50.0));
}

#[test]
fn aspect_ratio_derives_the_free_axis() {
  let element = block(Style {
    width: px(100.0),
    aspect_ratio: Some(2.0),
    ..Default::default()
  });

  let size = measure(&element);
  assert!(approx(size.max_height, 50.0));
}

#[test]
fn column_container_sums_main_and_maxes_cross() {
  let element = container(
    Style {
      direction: FlexDirection::Column,
      gap: serde_json::from_str("10").expect("gap should parse"),
      ..Default::default()
    },
    vec![sized(30.0, 40.0), sized(50.0, 20.0)],
  );

  let size = measure(&element);
  assert!(approx(size.max_height, 70.0));
  assert!(approx(size.max_width, 50.0));
}

#[test]
fn padding_and_child_margins_grow_the_container() {
  let element = container(
    Style {
      direction: FlexDirection::Column,
      padding: px(5.0).into(),
      ..Default::default()
    },
    vec![block(Style {
      width: px(30.0),
      height: px(40.0),
      margin: px(3.0).into(),
      ..Default::default()
    })],
  );

  let size = measure(&element);
  assert!(approx(size.max_width, 46.0));
  assert!(approx(size.max_height, 56.0));
}

#[test]
fn hidden_and_absolute_children_contribute_nothing() {
  let plain = container(
    Style {
      direction: FlexDirection::Column,
      ..Default::default()
    },
    vec![sized(30.0, 40.0)],
  );

  let with_extras = container(
    Style {
      direction: FlexDirection::Column,
      ..Default::default()
    },
    vec![
      sized(30.0, 40.0),
      block(Style {
        display: Display::None,
        width: px(500.0),
        height: px(500.0),
        ..Default::default()
      }),
      block(Style {
        position: Position::Absolute,
        width: px(500.0),
        height: px(500.0),
        ..Default::default()
      }),
    ],
  );

  let plain_size = measure(&plain);
  let extended_size = measure(&with_extras);

  assert!(approx(plain_size.max_width, extended_size.max_width));
  assert!(approx(plain_size.max_height, extended_size.max_height));
}

#[test]
fn absolute_children_are_still_measured_for_their_own_use() {
  let absolute = block(Style {
    position: Position::Absolute,
    width: px(120.0),
    height: px(80.0),
    ..Default::default()
  });

  let element = container(Style::default(), vec![absolute]);
  let map =
    measure_all_intrinsics(&element, &LayoutConfig::default()).expect("measurement should succeed");

  let Element::Flex(flex) = &element else {
    panic!("expected flex element");
  };
  let child_size = map.get(&flex.children[0]);

  assert!(approx(child_size.max_width, 120.0));
  assert!(approx(child_size.max_height, 80.0));
}

#[test]
fn content_sized_canvas_takes_the_column_extent() {
  let template = Template {
    canvas: Default::default(),
    elements: vec![sized(100.0, 40.0), sized(80.0, 30.0)],
  };

  let root = solve(&template);
  assert!(approx(root.width, 100.0));
  assert!(approx(root.height, 70.0));
}

#[test]
fn min_max_attributes_clamp_intrinsics() {
  let element = block(Style {
    width: px(100.0),
    height: px(100.0),
    max_width: px(60.0),
    min_height: px(120.0),
    ..Default::default()
  });

  let size = measure(&element);
  assert!(approx(size.max_width, 60.0));
  assert!(approx(size.max_height, 120.0));
}
