// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Relate-Lite Core
//!
//! Vocabulary and planar primitives for DE-9IM topological relationships.
//!
//! ## Overview
//!
//! - **Vocabulary**: [`Location`], [`Dimension`], [`IntersectionMatrix`],
//!   [`MatrixPattern`] and [`BoundaryNodeRule`]
//! - **Envelopes**: null-aware bounding boxes and exact coordinate keys
//! - **Algorithms**: robust angular ordering around a node, point-in-area
//!   location and segment intersection, built on [geo](https://docs.rs/geo)
//!
//! ## Quick Start
//!
//! ```rust
//! use relate_lite_core::{Dimension, IntersectionMatrix, Location};
//!
//! let mut im = IntersectionMatrix::new();
//! im.set_at_least(Location::Interior, Location::Interior, Dimension::Area);
//! im.set_at_least(Location::Exterior, Location::Exterior, Dimension::Area);
//! assert_eq!(im.to_string(), "2FFFFFFF2");
//! assert!(im.matches_str("T*F**F***").unwrap());
//! ```

pub mod algorithm;
pub mod boundary_rule;
pub mod coord;
pub mod error;
pub mod location;
pub mod matrix;

pub use boundary_rule::BoundaryNodeRule;
pub use coord::{compare_coords, CoordKey, Envelope};
pub use error::{Error, Result};
pub use location::{Dimension, Location, Position};
pub use matrix::{patterns, IntersectionMatrix, MatrixPattern, PatternSymbol};
