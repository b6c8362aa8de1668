//! Signed distance field generation.
//!
//! Implements a separable approximate Euclidean distance transform with
//! simultaneous downscaling: two axis-aligned prepasses build 1-D partial
//! distance buffers, and a merge pass combines them with a local
//! neighborhood search into the final encoded field.

mod encode;
mod generate;
mod grid;
mod passes;

pub use generate::{generate_distance_field, MAX_SPREAD};
pub use grid::{decode, DistanceField};
