//! Common types and utilities shared across the rt-frontend crates.
//!
//! The central type is [`LabeledArray`], a dense N-dimensional array whose
//! axes are addressed by name rather than by position. Data sets loaded from
//! disk are collections of such arrays ([`Dataset`]).

pub mod angles;
pub mod array;
pub mod dataset;
pub mod error;

pub use angles::{angles_to_direction, direction_to_angles};
pub use array::{Axis, LabeledArray};
pub use dataset::{AttrValue, Dataset};
pub use error::{CommonError, CommonResult};
