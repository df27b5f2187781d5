#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]

//! Kumiko is a declarative flexbox layout engine: it takes a tree of
//! box-model elements described by CSS-like attributes and computes, for
//! every node, a final rectangle in a single unscaled coordinate space.
//!
//! The crate produces geometry only. Template parsing happens upstream,
//! rasterization downstream; text shaping and content generators (QR,
//! barcode, images) are injected capabilities.
//!
//! # Walkthrough
//!
//! Build (or deserialize) a [`Template`](crate::layout::Template), then
//! call [`compute_layout`] with a [`LayoutConfig`]. Each element of the
//! input tree reappears exactly once in the returned
//! [`LayoutNode`](crate::layout::LayoutNode) tree, at the same position
//! among its siblings.
//!
//! # Example
//!
//! ```rust
//! use kumiko::{LayoutConfig, compute_layout, layout::Template};
//!
//! let template: Template = serde_json::from_str(
//!   r#"{
//!     "canvas": { "width": 384, "fixed": "width" },
//!     "elements": [
//!       { "type": "text", "content": "Hello, world!" },
//!       { "type": "separator", "margin": "4 0" },
//!       { "type": "qr", "data": "https://example.com", "size": 96 }
//!     ]
//!   }"#,
//! )
//! .unwrap();
//!
//! let layout = compute_layout(&template, &LayoutConfig::default()).unwrap();
//!
//! assert_eq!(layout.width, 384.0);
//! assert_eq!(layout.children.len(), 3);
//! ```

/// Error types surfaced by the engine.
pub mod error;
/// Geometry primitives.
pub mod geometry;
/// Layout system: elements, styles, measurement, solving.
pub mod layout;

use std::sync::Arc;

use derive_builder::Builder;

pub use crate::error::{LayoutError, TextShapeError};
use crate::{
  geometry::Rect,
  layout::{
    IntrinsicMap, LayoutNode, Template,
    element::Element,
    flex::{BoxFrame, ContainerSpec, FlexSolver},
    intrinsic::IntrinsicMeasurer,
    template::CanvasSizing,
    text::{ApproximateTextMeasurer, TextMeasurer},
  },
};

/// Measurer used when no [`TextMeasurer`] is configured.
static FALLBACK_MEASURER: ApproximateTextMeasurer = ApproximateTextMeasurer {
  char_width_ratio: 0.6,
};

/// Configuration of one layout invocation.
///
/// Construct via [`LayoutConfig::default`] or the generated
/// [`LayoutConfigBuilder`].
#[derive(Clone, Builder)]
#[builder(setter(into))]
pub struct LayoutConfig {
  /// Base font size inherited by text elements, in pixels.
  #[builder(default = "16.0")]
  pub base_font_size: f32,
  /// Maximum element nesting depth before layout aborts.
  #[builder(default = "100")]
  pub max_depth: usize,
  /// Injected text shaper; the deterministic approximate measurer is used
  /// when absent. The same instance serves intrinsic measurement and
  /// layout.
  #[builder(default)]
  pub text_measurer: Option<Arc<dyn TextMeasurer>>,
}

impl Default for LayoutConfig {
  fn default() -> Self {
    Self {
      base_font_size: 16.0,
      max_depth: 100,
      text_measurer: None,
    }
  }
}

impl LayoutConfig {
  fn measurer(&self) -> &dyn TextMeasurer {
    self
      .text_measurer
      .as_deref()
      .unwrap_or(&FALLBACK_MEASURER)
  }
}

/// Computes the layout tree for a template.
///
/// The canvas forms an implicit column container around the template's
/// elements. Output rectangles are border boxes with top-left coordinates
/// in the canvas's space. The call is reentrant and deterministic: the
/// same template and measurer produce bit-identical output.
pub fn compute_layout<'t>(
  template: &'t Template,
  config: &LayoutConfig,
) -> Result<LayoutNode<'t>, LayoutError> {
  let measurer = config.measurer();

  let intrinsic_pass = IntrinsicMeasurer {
    measurer,
    base_font_size: config.base_font_size,
    max_depth: config.max_depth,
  };

  let mut intrinsics = IntrinsicMap::default();
  let content = intrinsic_pass.measure_column_forest(&template.elements, &mut intrinsics)?;

  let canvas = &template.canvas;
  let declared = |axis: &'static str, value: Option<f32>| {
    value.ok_or(LayoutError::MissingCanvasDimension { axis })
  };

  // Width first: a content-derived height must be computed at the final
  // width so wrapped text contributes its wrapped extent.
  let (width, declared_height) = match canvas.fixed {
    CanvasSizing::Both => (
      declared("width", canvas.width)?,
      Some(declared("height", canvas.height)?),
    ),
    CanvasSizing::Width => (declared("width", canvas.width)?, None),
    CanvasSizing::Height => (content.max_width, Some(declared("height", canvas.height)?)),
    CanvasSizing::None => (content.max_width, None),
  };

  let direction = canvas.text_direction.unwrap_or_default();

  let solver = FlexSolver {
    intrinsics: &intrinsics,
    measurer,
    base_font_size: config.base_font_size,
    max_depth: config.max_depth,
  };

  let (children, height) = match declared_height {
    Some(height) => {
      let frame = BoxFrame::bare(Rect::new(0.0, 0.0, width, height));
      let spec = ContainerSpec::column_root();
      let children = solver.layout_children(&template.elements, &spec, &frame, direction, 1)?;
      (children, height)
    }
    None => solver.layout_root_column(&template.elements, width, direction)?,
  };

  Ok(LayoutNode {
    element: None,
    x: 0.0,
    y: 0.0,
    width,
    height,
    direction,
    text: None,
    children,
  })
}

/// Measures every element of a tree without computing positions.
///
/// Intended for consumers that need content sizes for external sizing
/// decisions. Uses the same measurer as [`compute_layout`], so the two
/// passes agree on text metrics.
pub fn measure_all_intrinsics(
  element: &Element,
  config: &LayoutConfig,
) -> Result<IntrinsicMap, LayoutError> {
  let intrinsic_pass = IntrinsicMeasurer {
    measurer: config.measurer(),
    base_font_size: config.base_font_size,
    max_depth: config.max_depth,
  };

  intrinsic_pass.measure_tree(element)
}
