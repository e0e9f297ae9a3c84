// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Relate-Lite Topology
//!
//! DE-9IM relationship evaluation for planar `geo` geometries.
//!
//! The engine locates the points, line ends and area vertices of each
//! operand in the other, nodes the edges of both operands, and builds the
//! full topology around every node where they meet. The topology found is
//! streamed into a predicate, which stops the evaluation as soon as its
//! value is known.
//!
//! ## Features
//!
//! - All geometry types, including mixed-dimension and overlapping
//!   `GeometryCollection`s and empty elements
//! - Named predicates, DE-9IM pattern matching and full matrix computation
//! - Configurable boundary node rule for linear geometries
//! - Prepared mode: the locator and segment index of a fixed operand are
//!   built once and shared across threads
//!
//! ## Quick Start
//!
//! ```rust
//! use geo::{line_string, polygon, Geometry};
//! use relate_lite_topology::{prepare, relate, RelatePredicate};
//!
//! let square: Geometry<f64> =
//!     polygon![(x: 0., y: 0.), (x: 10., y: 0.), (x: 10., y: 10.), (x: 0., y: 10.)].into();
//! let line: Geometry<f64> = line_string![(x: 2., y: 2.), (x: 8., y: 8.)].into();
//!
//! assert_eq!(relate(&square, &line).to_string(), "102FF1FF2");
//!
//! let prepared = prepare(&square);
//! assert!(prepared.evaluate(&line, &RelatePredicate::Contains));
//! assert!(!prepared.evaluate(&line, &RelatePredicate::Touches));
//! ```

pub mod adjacent_edge_locator;
pub mod dimension_location;
pub mod edge_intersector;
pub mod geometry;
pub mod linear_boundary;
pub mod node_section;
pub mod node_sections;
pub mod operand;
pub mod point_locator;
pub mod polygon_node_converter;
pub mod predicate;
pub mod relate_edge;
pub mod relate_node;
pub mod relate_ng;
pub mod segment_string;
pub mod topology_computer;

pub use adjacent_edge_locator::AdjacentEdgeLocator;
pub use dimension_location::DimensionLocation;
pub use geometry::RelateGeometry;
pub use linear_boundary::LinearBoundary;
pub use node_section::NodeSection;
pub use node_sections::NodeSections;
pub use operand::Operand;
pub use point_locator::RelatePointLocator;
pub use predicate::{
    BasicPredicate, IMPatternMatcher, IMPredicate, RelateMatrixPredicate, RelatePredicate,
    TopologyPredicate, TopologyPredicateTracer,
};
pub use relate_edge::{EdgeLabel, RelateEdge};
pub use relate_node::RelateNode;
pub use relate_ng::{
    prepare, prepare_with_rule, relate, relate_pattern, relate_predicate, relate_with_rule,
    PreparedRelate, RelateNg,
};
pub use segment_string::RelateSegmentString;
pub use topology_computer::TopologyComputer;

pub use relate_lite_core::{
    patterns, BoundaryNodeRule, Dimension, Error, IntersectionMatrix, Location, MatrixPattern,
    Result,
};
