//! Half-edge arena backing the triangulation build.
//!
//! Every undirected edge is a pair of half-edges linked through `alpha`.
//! Around each vertex the outgoing half-edges form a doubly linked cycle
//! (`sigma` counter-clockwise, `amgis` clockwise) sorted by the angular
//! direction of the edge leaving the vertex. There are no next-around-face
//! links; the next half-edge of the face to the left of `h` is
//! `amgis(alpha(h))`.
//!
//! Handles are indices into growable arenas. Half-edge slots freed while
//! merging go on a free list and are reused by later allocations, so the
//! arena stays compact without any pointer bookkeeping.

use std::ops::{Index, IndexMut};

use crate::point::Point;
use crate::traits::Scalar;

/// Index of a vertex; equal to the point's position in the caller's input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct VertexId(u32);

/// Index of a half-edge slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct HalfEdgeId(u32);

/// Index of an extracted face, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FaceId(u32);

impl VertexId {
    pub fn new(index: usize) -> Self {
        VertexId(index as u32)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl HalfEdgeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl FaceId {
    pub fn new(index: usize) -> Self {
        FaceId(index as u32)
    }
}

const NONE: u32 = u32::MAX;

/// A half-edge reference with `u32::MAX` as the vacant niche.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct OptHalfEdge(u32);

impl OptHalfEdge {
    pub const NONE: OptHalfEdge = OptHalfEdge(NONE);

    pub fn get(self) -> Option<HalfEdgeId> {
        if self.0 == NONE {
            None
        } else {
            Some(HalfEdgeId(self.0))
        }
    }
}

impl From<HalfEdgeId> for OptHalfEdge {
    fn from(h: HalfEdgeId) -> Self {
        OptHalfEdge(h.0)
    }
}

/// A face reference with `u32::MAX` as the vacant niche.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct OptFace(u32);

impl OptFace {
    pub const NONE: OptFace = OptFace(NONE);

    pub fn is_some(self) -> bool {
        self.0 != NONE
    }
}

impl From<FaceId> for OptFace {
    fn from(f: FaceId) -> Self {
        OptFace(f.0)
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Vertex<T: Scalar> {
    pub pos: Point<T>,
    pub he: OptHalfEdge,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct HalfEdge {
    pub vertex: VertexId,
    pub alpha: HalfEdgeId,
    pub sigma: HalfEdgeId,
    pub amgis: HalfEdgeId,
    pub face: OptFace,
}

#[derive(Debug, Clone)]
pub(crate) struct Mesh<T: Scalar> {
    vertices: Vec<Vertex<T>>,
    halfedges: Vec<HalfEdge>,
    free: Vec<HalfEdgeId>,
}

impl<T: Scalar> Index<VertexId> for Mesh<T> {
    type Output = Vertex<T>;

    fn index(&self, v: VertexId) -> &Vertex<T> {
        &self.vertices[v.index()]
    }
}

impl<T: Scalar> IndexMut<VertexId> for Mesh<T> {
    fn index_mut(&mut self, v: VertexId) -> &mut Vertex<T> {
        &mut self.vertices[v.index()]
    }
}

impl<T: Scalar> Index<HalfEdgeId> for Mesh<T> {
    type Output = HalfEdge;

    fn index(&self, h: HalfEdgeId) -> &HalfEdge {
        &self.halfedges[h.index()]
    }
}

impl<T: Scalar> IndexMut<HalfEdgeId> for Mesh<T> {
    fn index_mut(&mut self, h: HalfEdgeId) -> &mut HalfEdge {
        &mut self.halfedges[h.index()]
    }
}

impl<T: Scalar> Mesh<T> {
    pub fn from_points(points: &[Point<T>]) -> Self {
        Mesh {
            vertices: points
                .iter()
                .map(|&pos| Vertex {
                    pos,
                    he: OptHalfEdge::NONE,
                })
                .collect(),
            halfedges: Vec::with_capacity(points.len().saturating_mul(6)),
            free: Vec::new(),
        }
    }

    pub fn pos(&self, v: VertexId) -> Point<T> {
        self[v].pos
    }

    pub fn origin(&self, h: HalfEdgeId) -> VertexId {
        self[h].vertex
    }

    pub fn alpha(&self, h: HalfEdgeId) -> HalfEdgeId {
        self[h].alpha
    }

    pub fn sigma(&self, h: HalfEdgeId) -> HalfEdgeId {
        self[h].sigma
    }

    pub fn amgis(&self, h: HalfEdgeId) -> HalfEdgeId {
        self[h].amgis
    }

    /// The representative outgoing half-edge of `v`.
    ///
    /// Must not be called before the base cases have linked `v` into the
    /// topology.
    pub fn vertex_edge(&self, v: VertexId) -> HalfEdgeId {
        match self[v].he.get() {
            Some(h) => h,
            None => unreachable!("vertex has no incident half-edge"),
        }
    }

    /// Allocates the half-edge pair of the undirected edge `a` - `b`.
    ///
    /// Each half starts out as the sole element of its origin ring; the
    /// caller splices it into place with [`attach_after`]/[`attach_before`].
    ///
    /// [`attach_after`]: Mesh::attach_after
    /// [`attach_before`]: Mesh::attach_before
    pub fn alloc_edge(&mut self, a: VertexId, b: VertexId) -> (HalfEdgeId, HalfEdgeId) {
        let ha = self.alloc_half(a);
        let hb = self.alloc_half(b);
        self[ha].alpha = hb;
        self[hb].alpha = ha;
        (ha, hb)
    }

    fn alloc_half(&mut self, v: VertexId) -> HalfEdgeId {
        match self.free.pop() {
            Some(h) => {
                self[h] = HalfEdge {
                    vertex: v,
                    alpha: h,
                    sigma: h,
                    amgis: h,
                    face: OptFace::NONE,
                };
                h
            }
            None => {
                let h = HalfEdgeId(self.halfedges.len() as u32);
                self.halfedges.push(HalfEdge {
                    vertex: v,
                    alpha: h,
                    sigma: h,
                    amgis: h,
                    face: OptFace::NONE,
                });
                h
            }
        }
    }

    /// Splices `h` into its origin ring immediately counter-clockwise of
    /// `anchor`. `h` must originate at the same vertex as `anchor` and still
    /// be in its freshly allocated singleton ring.
    pub fn attach_after(&mut self, anchor: HalfEdgeId, h: HalfEdgeId) {
        debug_assert_eq!(self.origin(anchor), self.origin(h));

        let next = self[anchor].sigma;
        self[h].sigma = next;
        self[h].amgis = anchor;
        self[next].amgis = h;
        self[anchor].sigma = h;
    }

    /// Splices `h` into its origin ring immediately clockwise of `anchor`.
    pub fn attach_before(&mut self, anchor: HalfEdgeId, h: HalfEdgeId) {
        debug_assert_eq!(self.origin(anchor), self.origin(h));

        let prev = self[anchor].amgis;
        self[h].amgis = prev;
        self[h].sigma = anchor;
        self[prev].sigma = h;
        self[anchor].amgis = h;
    }

    /// Unlinks and frees both halves of the undirected edge through `h`.
    pub fn remove_edge(&mut self, h: HalfEdgeId) {
        let twin = self[h].alpha;
        self.remove_half(h);
        self.remove_half(twin);
    }

    /// Unlinks one half-edge: patches its origin ring and redirects the
    /// vertex's representative edge if it pointed at the removed one.
    fn remove_half(&mut self, h: HalfEdgeId) {
        let HalfEdge {
            vertex,
            sigma,
            amgis,
            ..
        } = self[h];

        self[sigma].amgis = amgis;
        self[amgis].sigma = sigma;

        if self[vertex].he == OptHalfEdge::from(h) {
            self[vertex].he = sigma.into();
        }

        self.free.push(h);
    }

    pub fn set_face(&mut self, h: HalfEdgeId, f: FaceId) {
        self[h].face = f.into();
    }

    pub fn has_face(&self, h: HalfEdgeId) -> bool {
        self[h].face.is_some()
    }

    /// Number of live half-edges.
    pub fn num_halfedges(&self) -> usize {
        self.halfedges.len() - self.free.len()
    }
}

#[cfg(any(test, debug_assertions))]
impl<T: Scalar> Mesh<T> {
    /// Walks every vertex ring and checks the linkage invariants:
    /// `alpha` is an involution, `amgis` inverts `sigma`, twins connect
    /// distinct vertices, and the rings jointly cover every live half-edge
    /// exactly once.
    pub fn check_topology(&self) {
        let mut seen = vec![false; self.halfedges.len()];

        for (i, v) in self.vertices.iter().enumerate() {
            let start = match v.he.get() {
                Some(h) => h,
                None => continue,
            };

            let mut curr = start;
            loop {
                assert!(!seen[curr.index()], "half-edge visited twice");
                seen[curr.index()] = true;

                assert_eq!(self.origin(curr).index(), i);
                assert_eq!(self.alpha(self.alpha(curr)), curr);
                assert_ne!(self.origin(self.alpha(curr)).index(), i);
                assert_eq!(self.amgis(self.sigma(curr)), curr);
                assert_eq!(self.sigma(self.amgis(curr)), curr);

                curr = self.sigma(curr);
                if curr == start {
                    break;
                }
            }
        }

        let visited = seen.iter().filter(|&&s| s).count();
        assert_eq!(visited, self.num_halfedges());
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn mesh_of(points: &[(f64, f64)]) -> Mesh<f64> {
        let points: Vec<_> = points.iter().map(|&(x, y)| Point::new(x, y)).collect();
        Mesh::from_points(&points)
    }

    #[test]
    fn test_alloc_edge() {
        let mut mesh = mesh_of(&[(0.0, 0.0), (1.0, 0.0)]);
        let a = VertexId::new(0);
        let b = VertexId::new(1);

        let (ha, hb) = mesh.alloc_edge(a, b);
        mesh[a].he = ha.into();
        mesh[b].he = hb.into();

        assert_eq!(mesh.alpha(ha), hb);
        assert_eq!(mesh.alpha(hb), ha);
        assert_eq!(mesh.sigma(ha), ha);
        assert_eq!(mesh.amgis(ha), ha);
        mesh.check_topology();
    }

    #[test]
    fn test_attach_and_remove() {
        let mut mesh = mesh_of(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
        let o = VertexId::new(0);
        let p = VertexId::new(1);
        let q = VertexId::new(2);

        let (op, po) = mesh.alloc_edge(o, p);
        let (oq, qo) = mesh.alloc_edge(o, q);
        mesh.attach_after(op, oq);
        mesh[o].he = op.into();
        mesh[p].he = po.into();
        mesh[q].he = qo.into();

        assert_eq!(mesh.sigma(op), oq);
        assert_eq!(mesh.sigma(oq), op);
        assert_eq!(mesh.amgis(op), oq);
        mesh.check_topology();

        mesh.remove_edge(oq);
        assert_eq!(mesh.sigma(op), op);
        assert_eq!(mesh.amgis(op), op);
        assert_eq!(mesh.num_halfedges(), 2);
    }

    #[test]
    fn test_remove_redirects_vertex_edge() {
        let mut mesh = mesh_of(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
        let o = VertexId::new(0);
        let p = VertexId::new(1);
        let q = VertexId::new(2);

        let (op, po) = mesh.alloc_edge(o, p);
        let (oq, qo) = mesh.alloc_edge(o, q);
        let (pq, qp) = mesh.alloc_edge(p, q);
        mesh.attach_after(op, oq);
        mesh.attach_after(po, pq);
        mesh.attach_after(qo, qp);
        mesh[o].he = oq.into();
        mesh[p].he = po.into();
        mesh[q].he = qo.into();
        mesh.check_topology();

        mesh.remove_edge(oq);
        assert_eq!(mesh.vertex_edge(o), op);
        assert_eq!(mesh.vertex_edge(q), qp);
        assert_eq!(mesh.num_halfedges(), 4);
        mesh.check_topology();
    }

    #[test]
    fn test_slot_reuse() {
        let mut mesh = mesh_of(&[(0.0, 0.0), (1.0, 0.0)]);
        let a = VertexId::new(0);
        let b = VertexId::new(1);

        let (ha, _) = mesh.alloc_edge(a, b);
        mesh[a].he = ha.into();
        mesh.remove_edge(ha);

        let (hc, hd) = mesh.alloc_edge(a, b);
        assert!(hc.index() < 2 && hd.index() < 2);
        assert_eq!(mesh.num_halfedges(), 2);
    }
}
