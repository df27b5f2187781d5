//! Layout system for the kumiko engine.
//!
//! This module contains the element tree, the style system, the intrinsic
//! measurement pass, the flex solver, and the text-shaper bridge:
//! - [`element`]: the tagged element tree consumed from the parser
//! - [`style`]: CSS-like attribute values and the shared attribute bag
//! - [`intrinsic`]: bottom-up content measurement
//! - [`text`]: the injected shaping capability and its fallback
//! - [`node`]: the produced geometry tree

/// Per-level resolution context.
pub mod context;
/// Element tree definitions.
pub mod element;
pub(crate) mod flex;
/// Bottom-up intrinsic measurement.
pub mod intrinsic;
/// Output geometry tree.
pub mod node;
/// Style values and the shared attribute bag.
pub mod style;
/// Template and canvas surface.
pub mod template;
/// Text shaping bridge.
pub mod text;

pub use context::*;
pub use intrinsic::{IntrinsicMap, IntrinsicSize};
pub use node::*;
pub use template::*;
