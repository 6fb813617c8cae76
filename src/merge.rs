//! Seam merge of two adjacent sub-triangulations.
//!
//! The merge finds the lower common tangent of the two outer boundaries,
//! splices it in as the first base edge, then climbs: each round searches
//! both sides of the current base edge for a candidate vertex, deletes fan
//! edges whose circumcircle would swallow a better candidate, picks the
//! winning side with one more in-circle test, and splices the next cross
//! edge. When neither side offers a candidate above the base edge the two
//! hulls are sewn shut.
//!
//! Exact-zero predicate results drive the degenerate paths: collinear
//! candidates stop a side's search, and cocircular candidates dissolve
//! their diagonal so that a cocircular point group comes out as one convex
//! polygonal face instead of an arbitrary triangle fan.

use crate::divide::Hull;
use crate::mesh::{HalfEdgeId, Mesh, VertexId};
use crate::predicates::{classify, in_circle, CirclePosition, Orientation};
use crate::traits::Scalar;

/// Classifies `p` against the directed segment carried by `h`.
fn classify_edge<T: Scalar>(mesh: &Mesh<T>, h: HalfEdgeId, p: VertexId) -> Orientation {
    let s = mesh.pos(mesh.origin(h));
    let e = mesh.pos(mesh.origin(mesh.alpha(h)));
    classify(s, e, mesh.pos(p))
}

fn in_circle_of<T: Scalar>(
    mesh: &Mesh<T>,
    a: VertexId,
    b: VertexId,
    c: VertexId,
    p: VertexId,
) -> CirclePosition {
    in_circle(mesh.pos(a), mesh.pos(b), mesh.pos(c), mesh.pos(p))
}

/// Merges `left` and `right` into one triangulation and returns its hints.
pub(crate) fn link<T: Scalar>(mesh: &mut Mesh<T>, left: Hull, right: Hull) -> Hull {
    let ml = mesh.origin(left.leftmost);
    let mr = mesh.origin(right.rightmost);

    let mut b = lower_tangent(mesh, left, right);

    let mut u = mesh.origin(mesh.alpha(mesh.sigma(b)));
    let mut v = mesh.origin(mesh.alpha(mesh.amgis(mesh.alpha(b))));

    while classify_edge(mesh, b, u) == Orientation::Left
        || classify_edge(mesh, b, v) == Orientation::Left
    {
        b = valid_link(mesh, b);
        u = mesh.origin(mesh.alpha(mesh.sigma(b)));
        v = mesh.origin(mesh.alpha(mesh.amgis(mesh.alpha(b))));
    }

    // The extreme points survive every merge, but the edges the hints named
    // may have been deleted; restart from the vertices' representative
    // edges and rotate clockwise until back on the outer boundary.
    let mut rightmost = mesh.vertex_edge(mr);
    while classify_edge(mesh, rightmost, mesh.origin(mesh.alpha(mesh.amgis(rightmost))))
        == Orientation::Right
    {
        rightmost = mesh.amgis(rightmost);
    }

    let mut leftmost = mesh.vertex_edge(ml);
    while classify_edge(mesh, leftmost, mesh.origin(mesh.alpha(mesh.amgis(leftmost))))
        == Orientation::Right
    {
        leftmost = mesh.amgis(leftmost);
    }

    Hull {
        leftmost,
        rightmost,
    }
}

/// Walks the two facing outer boundaries downward until the segment from
/// the left tip to the right tip has no vertex strictly to its right, then
/// splices that segment in as the base edge. Returns its left half.
fn lower_tangent<T: Scalar>(mesh: &mut Mesh<T>, left: Hull, right: Hull) -> HalfEdgeId {
    let mut ld = left.rightmost;
    let mut rd = right.leftmost;

    loop {
        let pl = mesh.origin(mesh.alpha(mesh.amgis(ld)));
        let sl = classify(
            mesh.pos(mesh.origin(ld)),
            mesh.pos(mesh.origin(rd)),
            mesh.pos(pl),
        );
        if sl == Orientation::Right {
            ld = mesh.alpha(mesh.amgis(ld));
        }

        let pr = mesh.origin(mesh.alpha(rd));
        let sr = classify(
            mesh.pos(mesh.origin(ld)),
            mesh.pos(mesh.origin(rd)),
            mesh.pos(pr),
        );
        if sr == Orientation::Right {
            rd = mesh.sigma(mesh.alpha(rd));
        }

        if sl != Orientation::Right && sr != Orientation::Right {
            break;
        }
    }

    let (new_ld, new_rd) = mesh.alloc_edge(mesh.origin(ld), mesh.origin(rd));
    mesh.attach_before(ld, new_ld);
    mesh.attach_before(rd, new_rd);

    new_ld
}

/// Finds the left-side candidate for the next rising edge above base edge
/// `b`, deleting left-fan edges that fail the empty-circle test on the way.
///
/// Returns a half-edge whose origin is the candidate, or `b` itself when
/// the side has no candidate (the first fan vertex is not strictly left of
/// the base edge).
fn valid_left<T: Scalar>(mesh: &mut Mesh<T>, base: HalfEdgeId) -> HalfEdgeId {
    let g = mesh.origin(base);
    let d = mesh.origin(mesh.alpha(base));

    let mut b = mesh.sigma(base);
    let mut du = mesh.alpha(b);
    let mut u = mesh.origin(du);
    let mut v = mesh.origin(mesh.alpha(mesh.sigma(b)));

    if classify(mesh.pos(g), mesh.pos(d), mesh.pos(u)) != Orientation::Left {
        return base;
    }

    while v != d && in_circle_of(mesh, g, d, u, v) == CirclePosition::Inside {
        let c = mesh.sigma(b);
        du = mesh.alpha(c);
        mesh.remove_edge(b);
        b = c;
        u = mesh.origin(du);
        v = mesh.origin(mesh.alpha(mesh.sigma(b)));
    }

    if v != d && in_circle_of(mesh, g, d, u, v) == CirclePosition::OnCircle {
        // cocircular: dissolve the diagonal and answer with the stable
        // neighbor so the group closes into one convex face
        let keep = mesh.amgis(du);
        mesh.remove_edge(b);
        return keep;
    }

    du
}

/// Mirror image of [`valid_left`] on the right side of the base edge,
/// walking clockwise fans. Returns `alpha(b)` when there is no candidate.
fn valid_right<T: Scalar>(mesh: &mut Mesh<T>, base: HalfEdgeId) -> HalfEdgeId {
    let rbase = mesh.alpha(base);
    let d = mesh.origin(rbase);
    let g = mesh.origin(mesh.alpha(rbase));

    let mut b = mesh.amgis(rbase);
    let mut du = mesh.alpha(b);
    let mut u = mesh.origin(du);
    let mut v = mesh.origin(mesh.alpha(mesh.amgis(b)));

    if classify(mesh.pos(g), mesh.pos(d), mesh.pos(u)) != Orientation::Left {
        return rbase;
    }

    while v != g && in_circle_of(mesh, g, d, u, v) == CirclePosition::Inside {
        let c = mesh.amgis(b);
        du = mesh.alpha(c);
        mesh.remove_edge(b);
        b = c;
        u = mesh.origin(du);
        v = mesh.origin(mesh.alpha(mesh.amgis(b)));
    }

    if v != g && in_circle_of(mesh, g, d, u, v) == CirclePosition::OnCircle {
        let keep = mesh.sigma(du);
        mesh.remove_edge(b);
        return keep;
    }

    du
}

/// Validates both sides of the base edge `b`, decides which candidate wins,
/// and splices in the next base edge. Called only while at least one side
/// still has a vertex strictly left of `b`.
fn valid_link<T: Scalar>(mesh: &mut Mesh<T>, b: HalfEdgeId) -> HalfEdgeId {
    let g = mesh.origin(b);
    let mut gd = valid_left(mesh, b);
    let g_p = mesh.origin(gd);

    let d = mesh.origin(mesh.alpha(b));
    let mut dd = valid_right(mesh, b);
    let d_p = mesh.origin(dd);

    if g != g_p && d != d_p {
        match in_circle_of(mesh, g, d, g_p, d_p) {
            // right candidate invalidates the left one
            CirclePosition::Inside => gd = b,
            // left candidate wins
            CirclePosition::Outside => dd = mesh.alpha(b),
            // cocircular: connect the two candidates directly
            CirclePosition::OnCircle => {}
        }
    }

    let (new_gd, new_dd) = mesh.alloc_edge(mesh.origin(gd), mesh.origin(dd));
    mesh.attach_after(gd, new_gd);
    mesh.attach_before(dd, new_dd);

    new_gd
}

#[cfg(test)]
mod test {
    use crate::divide::build;
    use crate::mesh::{Mesh, VertexId};
    use crate::point::Point;

    fn triangulated(points: &[(f64, f64)]) -> (Mesh<f64>, Vec<VertexId>) {
        let pts: Vec<_> = points.iter().map(|&(x, y)| Point::new(x, y)).collect();
        let mut order: Vec<_> = (0..pts.len()).map(VertexId::new).collect();
        order.sort_unstable_by(|&a, &b| {
            let pa = pts[a.index()];
            let pb = pts[b.index()];
            pa.x.partial_cmp(&pb.x)
                .unwrap()
                .then(pa.y.partial_cmp(&pb.y).unwrap())
        });
        let mut mesh = Mesh::from_points(&pts);
        build(&mut mesh, &order);
        (mesh, order)
    }

    #[test]
    fn test_merge_two_segments() {
        let (mesh, _) = triangulated(&[(0.0, 0.0), (0.0, 1.0), (1.0, 0.0), (1.0, 1.0)]);
        mesh.check_topology();
        // square of cocircular points: four sides plus the base edge were
        // created, the seam kept the top edge instead of a diagonal
        assert_eq!(mesh.num_halfedges(), 8);
    }

    #[test]
    fn test_merge_diamond_with_center() {
        let (mesh, _) = triangulated(&[
            (0.0, 0.0),
            (1.0, 0.0),
            (0.0, 1.0),
            (-1.0, 0.0),
            (0.0, -1.0),
        ]);
        mesh.check_topology();
        // four hull edges plus four spokes to the center
        assert_eq!(mesh.num_halfedges(), 16);
    }

    #[test]
    fn test_merge_collinear_runs() {
        let (mesh, order) = triangulated(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]);
        mesh.check_topology();
        // a path: three edges, no cross edges
        assert_eq!(mesh.num_halfedges(), 6);
        // endpoint rings are singletons, inner rings have two members
        let h0 = mesh.vertex_edge(order[0]);
        assert_eq!(mesh.sigma(h0), h0);
        let h1 = mesh.vertex_edge(order[1]);
        assert_ne!(mesh.sigma(h1), h1);
    }

    #[test]
    fn test_degenerate_triangle_healed_by_merge() {
        // the left half is a collinear triple whose base case carries an
        // edge overlapping the chain; the seam revalidation deletes it and
        // the merged result is a clean five-triangle triangulation
        let (mesh, _) = triangulated(&[
            (0.0, 0.0),
            (1.0, 0.0),
            (2.0, 0.0),
            (3.0, -1.0),
            (3.0, 1.0),
        ]);
        mesh.check_topology();
        // nine edges: three hull sides, the two chain edges and four spokes
        assert_eq!(mesh.num_halfedges(), 18);
    }
}
