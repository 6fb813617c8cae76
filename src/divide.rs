//! Recursive divide-and-conquer construction: sorted point runs are split
//! until they fit a two- or three-point base case, then stitched back
//! together by the merge pass.

use crate::mesh::{HalfEdgeId, Mesh, VertexId};
use crate::merge::link;
use crate::predicates::{classify, Orientation};
use crate::traits::Scalar;

/// Outer-boundary hints of a (sub-)triangulation: an outgoing half-edge of
/// its lexicographically smallest point and one of its largest.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Hull {
    pub leftmost: HalfEdgeId,
    pub rightmost: HalfEdgeId,
}

/// Builds the triangulation of `order` (point indices sorted
/// lexicographically by `(x, y)`) into `mesh`.
pub(crate) fn build<T: Scalar>(mesh: &mut Mesh<T>, order: &[VertexId]) -> Hull {
    debug_assert!(order.len() >= 2);

    let hull = match order.len() {
        2 => init_segment(mesh, order[0], order[1]),
        3 => init_triangle(mesh, order[0], order[1], order[2]),
        n => {
            // ceiling split keeps both halves at two points or more
            let mid = n / 2 + (n & 1);
            let left = build(mesh, &order[..mid]);
            let right = build(mesh, &order[mid..]);
            link(mesh, left, right)
        }
    };

    debug_assert_eq!(mesh.origin(hull.leftmost), order[0]);
    debug_assert_eq!(mesh.origin(hull.rightmost), order[order.len() - 1]);

    hull
}

/// Two points: a lone edge, each half its own singleton ring.
fn init_segment<T: Scalar>(mesh: &mut Mesh<T>, p0: VertexId, p1: VertexId) -> Hull {
    let (d0, d1) = mesh.alloc_edge(p0, p1);

    mesh[p0].he = d0.into();
    mesh[p1].he = d1.into();

    Hull {
        leftmost: d0,
        rightmost: d1,
    }
}

/// Three points: a triangle of three edges, two outgoing half-edges per
/// vertex.
///
/// The boundary is traversed `p0 -> p2 -> p1` when `p1` lies left of
/// `p0 -> p2`, and `p0 -> p1 -> p2` otherwise. A collinear triple falls
/// into the second arm and yields a degenerate triangle whose `(p0, p2)`
/// edge overlaps the chain; the merge pass absorbs it.
fn init_triangle<T: Scalar>(mesh: &mut Mesh<T>, p0: VertexId, p1: VertexId, p2: VertexId) -> Hull {
    let on_left = classify(mesh.pos(p0), mesh.pos(p2), mesh.pos(p1)) == Orientation::Left;

    if on_left {
        let (e02, e20) = mesh.alloc_edge(p0, p2);
        let (e21, e12) = mesh.alloc_edge(p2, p1);
        let (e10, e01) = mesh.alloc_edge(p1, p0);

        mesh.attach_after(e02, e01);
        mesh.attach_after(e21, e20);
        mesh.attach_after(e10, e12);

        mesh[p0].he = e02.into();
        mesh[p1].he = e10.into();
        mesh[p2].he = e21.into();

        Hull {
            leftmost: e02,
            rightmost: e21,
        }
    } else {
        let (e01, e10) = mesh.alloc_edge(p0, p1);
        let (e12, e21) = mesh.alloc_edge(p1, p2);
        let (e20, e02) = mesh.alloc_edge(p2, p0);

        mesh.attach_after(e01, e02);
        mesh.attach_after(e12, e10);
        mesh.attach_after(e20, e21);

        mesh[p0].he = e01.into();
        mesh[p1].he = e12.into();
        mesh[p2].he = e20.into();

        Hull {
            leftmost: e01,
            rightmost: e20,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::point::Point;

    fn mesh_of(points: &[(f64, f64)]) -> Mesh<f64> {
        let points: Vec<_> = points.iter().map(|&(x, y)| Point::new(x, y)).collect();
        Mesh::from_points(&points)
    }

    fn ids(n: usize) -> Vec<VertexId> {
        (0..n).map(VertexId::new).collect()
    }

    #[test]
    fn test_segment_base_case() {
        let mut mesh = mesh_of(&[(0.0, 0.0), (1.0, 0.0)]);
        let order = ids(2);

        let hull = build(&mut mesh, &order);

        assert_eq!(mesh.origin(hull.leftmost), order[0]);
        assert_eq!(mesh.origin(hull.rightmost), order[1]);
        assert_eq!(mesh.alpha(hull.leftmost), hull.rightmost);
        assert_eq!(mesh.sigma(hull.leftmost), hull.leftmost);
        mesh.check_topology();
    }

    #[test]
    fn test_triangle_base_case_left() {
        // (1, 1) lies left of (0, 0) -> (2, 0)
        let mut mesh = mesh_of(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)]);
        let order = ids(3);

        let hull = build(&mut mesh, &order);

        assert_eq!(mesh.num_halfedges(), 6);
        assert_eq!(mesh.origin(hull.leftmost), order[0]);
        assert_eq!(mesh.origin(hull.rightmost), order[2]);
        // every ring has exactly two members
        for &v in &order {
            let h = mesh.vertex_edge(v);
            assert_ne!(mesh.sigma(h), h);
            assert_eq!(mesh.sigma(mesh.sigma(h)), h);
        }
        mesh.check_topology();
    }

    #[test]
    fn test_triangle_base_case_right() {
        // (1, -1) lies right of (0, 0) -> (2, 0)
        let mut mesh = mesh_of(&[(0.0, 0.0), (1.0, -1.0), (2.0, 0.0)]);
        let order = ids(3);

        let hull = build(&mut mesh, &order);

        assert_eq!(mesh.num_halfedges(), 6);
        assert_eq!(mesh.origin(hull.leftmost), order[0]);
        assert_eq!(mesh.origin(hull.rightmost), order[2]);
        mesh.check_topology();
    }

    #[test]
    fn test_triangle_base_case_collinear() {
        let mut mesh = mesh_of(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
        let order = ids(3);

        let hull = build(&mut mesh, &order);

        // degenerate triangle: still three edges, hints at the extremes
        assert_eq!(mesh.num_halfedges(), 6);
        assert_eq!(mesh.origin(hull.leftmost), order[0]);
        assert_eq!(mesh.origin(hull.rightmost), order[2]);
        mesh.check_topology();
    }
}
