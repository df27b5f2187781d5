#![allow(dead_code)]

use kumiko::{
  LayoutConfig, compute_layout,
  layout::{
    Canvas, CanvasSizing, LayoutNode, Template,
    element::{Element, FlexElement},
    style::{LengthUnit, Style},
  },
};

pub fn px(value: f32) -> LengthUnit {
  LengthUnit::Px(value)
}

pub fn fixed_canvas(width: f32, height: f32) -> Canvas {
  Canvas {
    width: Some(width),
    height: Some(height),
    fixed: CanvasSizing::Both,
    ..Default::default()
  }
}

pub fn template_of(canvas: Canvas, elements: Vec<Element>) -> Template {
  Template { canvas, elements }
}

pub fn solve(template: &Template) -> LayoutNode<'_> {
  compute_layout(template, &LayoutConfig::default()).expect("layout should succeed")
}

pub fn container(style: Style, children: Vec<Element>) -> Element {
  Element::Flex(FlexElement { style, children })
}

pub fn block(style: Style) -> Element {
  container(style, Vec::new())
}

pub fn sized(width: f32, height: f32) -> Element {
  block(Style {
    width: px(width),
    height: px(height),
    ..Default::default()
  })
}

pub fn approx(a: f32, b: f32) -> bool {
  (a - b).abs() < 0.01
}

#[track_caller]
pub fn assert_rect(node: &LayoutNode<'_>, x: f32, y: f32, width: f32, height: f32) {
  let actual = node.rect();
  assert!(
    approx(actual.x, x) && approx(actual.y, y) && approx(actual.width, width) && approx(actual.height, height),
    "expected rect ({x}, {y}, {width}, {height}), got {actual:?}"
  );
}
