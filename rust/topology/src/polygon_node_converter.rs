// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Rewrites the rings of one polygon meeting at a node as shell wedges.
//!
//! At a node where a polygon's shell and holes touch (valid self-touching
//! rings), the raw sections overlap: a hole section sits inside the wedge
//! of a shell section. Walking the sections in angular order and pairing
//! each incoming vertex with the next outgoing vertex produces disjoint
//! wedges, each bounding interior on its right, which the node topology
//! can consume directly.

use geo::Coord;

use crate::node_section::NodeSection;

/// Converts the sections of a single polygon at a node into shell sections.
pub fn convert(mut sections: Vec<NodeSection>) -> Vec<NodeSection> {
    sections.sort_by(NodeSection::compare_angular);
    let sections = extract_unique(sections);
    if sections.len() <= 1 {
        return sections;
    }
    let Some(shell_index) = sections.iter().position(NodeSection::is_shell) else {
        return convert_holes(&sections);
    };
    let mut converted = Vec::with_capacity(sections.len());
    let mut next_shell = shell_index;
    loop {
        next_shell = convert_shell_and_holes(&sections, next_shell, &mut converted);
        if next_shell == shell_index {
            break;
        }
    }
    converted
}

/// Emits the wedges from the shell at `shell_index` up to the next shell,
/// splitting at every hole in between. Returns the index of the next shell.
fn convert_shell_and_holes(
    sections: &[NodeSection],
    shell_index: usize,
    converted: &mut Vec<NodeSection>,
) -> usize {
    let shell = &sections[shell_index];
    let mut in_vertex = shell.v0();
    let mut i = next(sections, shell_index);
    while !sections[i].is_shell() {
        let hole = &sections[i];
        push_wedge(converted, shell, in_vertex, hole.v1());
        in_vertex = hole.v0();
        i = next(sections, i);
    }
    push_wedge(converted, shell, in_vertex, shell.v1());
    i
}

/// Holes only: each wedge runs from a hole's incoming vertex to the
/// outgoing vertex of the next hole.
fn convert_holes(sections: &[NodeSection]) -> Vec<NodeSection> {
    let template = &sections[0];
    let mut converted = Vec::with_capacity(sections.len());
    for i in 0..sections.len() {
        let following = &sections[next(sections, i)];
        push_wedge(&mut converted, template, sections[i].v0(), following.v1());
    }
    converted
}

fn push_wedge(
    converted: &mut Vec<NodeSection>,
    template: &NodeSection,
    v0: Option<Coord<f64>>,
    v1: Option<Coord<f64>>,
) {
    if let (Some(v0), Some(v1)) = (v0, v1) {
        converted.push(template.with_shell_vertices(v0, v1));
    }
}

/// Drops sections identical to their predecessor in sorted order.
fn extract_unique(sections: Vec<NodeSection>) -> Vec<NodeSection> {
    let mut unique: Vec<NodeSection> = Vec::with_capacity(sections.len());
    for ns in sections {
        let duplicate = unique
            .last()
            .is_some_and(|last| last.compare_to(&ns).is_eq());
        if !duplicate {
            unique.push(ns);
        }
    }
    unique
}

#[inline]
fn next(sections: &[NodeSection], i: usize) -> usize {
    if i + 1 >= sections.len() {
        0
    } else {
        i + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operand::Operand;
    use geo::coord;
    use relate_lite_core::Dimension;

    const NODE: (f64, f64) = (5.0, 5.0);

    fn section(ring_id: usize, v0: (f64, f64), v1: (f64, f64)) -> NodeSection {
        NodeSection::new(
            Operand::A,
            Dimension::Area,
            1,
            ring_id,
            Some(0),
            true,
            Some(coord! { x: v0.0, y: v0.1 }),
            coord! { x: NODE.0, y: NODE.1 },
            Some(coord! { x: v1.0, y: v1.1 }),
        )
    }

    fn shell(v0: (f64, f64), v1: (f64, f64)) -> NodeSection {
        section(0, v0, v1)
    }

    fn hole(v0: (f64, f64), v1: (f64, f64)) -> NodeSection {
        section(1, v0, v1)
    }

    fn check_conversion(input: Vec<NodeSection>, mut expected: Vec<NodeSection>) {
        let mut actual = convert(input);
        actual.sort_by(NodeSection::compare_to);
        expected.sort_by(NodeSection::compare_to);
        assert_eq!(actual.len(), expected.len(), "{actual:?}");
        for (a, e) in actual.iter().zip(&expected) {
            assert!(a.compare_to(e).is_eq(), "{a:?} != {e:?}");
        }
    }

    #[test]
    fn shells_are_unchanged() {
        check_conversion(
            vec![
                shell((1.0, 1.0), (9.0, 9.0)),
                shell((8.0, 9.0), (6.0, 9.0)),
                shell((4.0, 9.0), (2.0, 9.0)),
            ],
            vec![
                shell((1.0, 1.0), (9.0, 9.0)),
                shell((8.0, 9.0), (6.0, 9.0)),
                shell((4.0, 9.0), (2.0, 9.0)),
            ],
        );
    }

    #[test]
    fn shell_and_hole() {
        check_conversion(
            vec![shell((1.0, 1.0), (9.0, 9.0)), hole((6.0, 0.0), (4.0, 0.0))],
            vec![shell((1.0, 1.0), (4.0, 0.0)), shell((6.0, 0.0), (9.0, 9.0))],
        );
    }

    #[test]
    fn shells_and_holes() {
        check_conversion(
            vec![
                shell((1.0, 1.0), (9.0, 9.0)),
                hole((6.0, 0.0), (4.0, 0.0)),
                shell((8.0, 8.0), (1.0, 8.0)),
                hole((4.0, 8.0), (6.0, 8.0)),
            ],
            vec![
                shell((1.0, 1.0), (4.0, 0.0)),
                shell((6.0, 0.0), (9.0, 9.0)),
                shell((4.0, 8.0), (1.0, 8.0)),
                shell((8.0, 8.0), (6.0, 8.0)),
            ],
        );
    }

    #[test]
    fn shell_and_two_holes() {
        check_conversion(
            vec![
                shell((1.0, 1.0), (9.0, 9.0)),
                hole((7.0, 0.0), (6.0, 0.0)),
                hole((4.0, 0.0), (3.0, 0.0)),
            ],
            vec![
                shell((1.0, 1.0), (3.0, 0.0)),
                shell((4.0, 0.0), (6.0, 0.0)),
                shell((7.0, 0.0), (9.0, 9.0)),
            ],
        );
    }

    #[test]
    fn holes_only() {
        check_conversion(
            vec![
                hole((7.0, 0.0), (6.0, 0.0)),
                hole((4.0, 0.0), (3.0, 0.0)),
                hole((3.0, 6.0), (4.0, 6.0)),
            ],
            vec![
                shell((4.0, 0.0), (6.0, 0.0)),
                shell((7.0, 0.0), (4.0, 6.0)),
                shell((3.0, 6.0), (3.0, 0.0)),
            ],
        );
    }

    #[test]
    fn duplicate_sections_collapse() {
        let out = convert(vec![
            shell((1.0, 1.0), (9.0, 9.0)),
            shell((1.0, 1.0), (9.0, 9.0)),
        ]);
        assert_eq!(out.len(), 1);
    }
}
