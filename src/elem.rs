use super::iter::FaceVertexIter;
use super::Triangulation;
use crate::traits::Scalar;
use crate::Point;

/// One face within a [Triangulation]
#[derive(Clone, Copy)]
pub struct Face<'a, T: Scalar> {
    pub(crate) triangulation: &'a Triangulation<T>,
    pub(crate) offset: usize,
    pub(crate) index: usize,
}

impl<'a, T: Scalar> Face<'a, T> {
    /// The position of this face in the face stream. The external face is
    /// always face 0.
    pub fn id(&self) -> usize {
        self.index
    }

    /// Whether this is the unbounded external face. Its vertex cycle is the
    /// convex hull of the input points.
    pub fn is_external(&self) -> bool {
        self.index == 0
    }

    /// The number of vertices on this face.
    pub fn len(&self) -> usize {
        self.triangulation.faces[self.offset]
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// An iterator over the face's vertex indices, counter-clockwise.
    pub fn vertices(&self) -> FaceVertexIter<'a> {
        FaceVertexIter {
            faces: &self.triangulation.faces,
            index: self.offset + 1,
            end: self.offset + 1 + self.len(),
        }
    }

    /// The vertex indices of this face as a slice of the face stream.
    pub fn vertex_slice(&self) -> &'a [usize] {
        &self.triangulation.faces[self.offset + 1..self.offset + 1 + self.len()]
    }

    /// The point at vertex position `i` of this face.
    pub fn point(&self, i: usize) -> Point<T> {
        self.triangulation.points[self.vertex_slice()[i]]
    }
}
