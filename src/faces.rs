//! Face extraction: labels every rotational cycle of the finished topology
//! and emits the flat face stream.
//!
//! The external face is traced first, starting from the twin of the
//! rightmost hint edge (the unbounded region lies on its left). Every
//! remaining cycle is found by scanning each vertex ring in sorted point
//! order, so the stream is fully determined by the input.

use crate::mesh::{FaceId, HalfEdgeId, Mesh, VertexId};
use crate::traits::Scalar;

/// Walks the topology and returns the face stream (`num_verts` followed by
/// that many vertex indices, per face) together with the face count.
pub(crate) fn extract<T: Scalar>(
    mesh: &mut Mesh<T>,
    order: &[VertexId],
    rightmost: HalfEdgeId,
) -> (Vec<usize>, usize) {
    let mut stream = Vec::new();
    let mut num_faces = 0;

    let external = mesh.alpha(rightmost);
    trace_face(mesh, external, &mut stream, &mut num_faces);

    for &v in order {
        let start = mesh.vertex_edge(v);
        let mut curr = start;
        loop {
            trace_face(mesh, curr, &mut stream, &mut num_faces);
            curr = mesh.sigma(curr);
            if curr == start {
                break;
            }
        }
    }

    (stream, num_faces)
}

/// Labels the cycle through `d` as a fresh face and appends it to the
/// stream, unless the half-edge is already claimed. The next half-edge
/// around the face to the left of `h` is `amgis(alpha(h))`.
fn trace_face<T: Scalar>(
    mesh: &mut Mesh<T>,
    d: HalfEdgeId,
    stream: &mut Vec<usize>,
    num_faces: &mut usize,
) {
    if mesh.has_face(d) {
        return;
    }

    let face = FaceId::new(*num_faces);
    let count_at = stream.len();
    stream.push(0);

    let mut curr = d;
    loop {
        mesh.set_face(curr, face);
        stream.push(mesh.origin(curr).index());
        curr = mesh.amgis(mesh.alpha(curr));
        if curr == d {
            break;
        }
    }

    stream[count_at] = stream.len() - count_at - 1;
    *num_faces += 1;
}
