use std::fmt;

use crate::divide;
use crate::elem::Face;
use crate::faces;
use crate::iter::FaceIter;
use crate::mesh::{Mesh, VertexId};
use crate::traits::Scalar;
use crate::Point;

/// The reasons a triangulation cannot be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Fewer than two input points were supplied.
    TooFewPoints,
    /// Two input points have exactly equal coordinates. The fields are
    /// their indices in the input slice, in input order.
    DuplicatePoint { first: usize, second: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::TooFewPoints => write!(f, "at least two input points are required"),
            Error::DuplicatePoint { first, second } => write!(
                f,
                "input points {} and {} have equal coordinates",
                first, second
            ),
        }
    }
}

impl std::error::Error for Error {}

/// Result of the Delaunay triangulation.
///
/// Faces are stored as one flat index stream: for each face, its vertex
/// count followed by that many zero-based indices into [`points`], in
/// counter-clockwise order around the face. The first face is always the
/// external face: the convex hull, traversed with the unbounded region on
/// its left (clockwise as conventionally drawn).
///
/// In general position every interior face is a triangle. A group of four
/// or more cocircular points yields a single convex polygonal face instead;
/// [`triangles`] densifies those on demand.
///
/// [`points`]: Triangulation::points
/// [`triangles`]: Triangulation::triangles
pub struct Triangulation<T: Scalar = f64> {
    /// A copy of the input points, in input order.
    pub points: Vec<Point<T>>,

    /// The face stream, external face first.
    pub faces: Vec<usize>,

    /// Number of faces in the stream, the external face included.
    pub num_faces: usize,
}

impl<T: Scalar> Triangulation<T> {
    /// Triangulates a set of 2D points.
    ///
    /// Points are sorted lexicographically by `(x, y)` internally; the
    /// output indices always refer to the input order. Coordinates must be
    /// finite and pairwise distinct.
    pub fn new(points: &[Point<T>]) -> Result<Triangulation<T>, Error> {
        if points.len() < 2 {
            return Err(Error::TooFewPoints);
        }

        let mut order: Vec<VertexId> = (0..points.len()).map(VertexId::new).collect();
        order.sort_unstable_by(|&a, &b| {
            let pa = points[a.index()];
            let pb = points[b.index()];
            pa.x.partial_cmp(&pb.x)
                .unwrap()
                .then(pa.y.partial_cmp(&pb.y).unwrap())
        });

        for pair in order.windows(2) {
            if points[pair[0].index()] == points[pair[1].index()] {
                let (mut first, mut second) = (pair[0].index(), pair[1].index());
                if first > second {
                    std::mem::swap(&mut first, &mut second);
                }
                return Err(Error::DuplicatePoint { first, second });
            }
        }

        let mut mesh = Mesh::from_points(points);
        let hull = divide::build(&mut mesh, &order);

        #[cfg(debug_assertions)]
        mesh.check_topology();

        let (faces, num_faces) = faces::extract(&mut mesh, &order, hull.rightmost);

        Ok(Triangulation {
            points: points.to_vec(),
            faces,
            num_faces,
        })
    }

    /// The number of input points.
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// The number of undirected edges, derived from the stream: every edge
    /// borders exactly two faces.
    pub fn num_edges(&self) -> usize {
        (self.faces.len() - self.num_faces) / 2
    }

    /// An iterator over all faces, the external face first.
    pub fn faces(&self) -> FaceIter<'_, T> {
        FaceIter {
            triangulation: self,
            offset: 0,
            index: 0,
        }
    }

    /// The external face. Its vertex cycle is the convex hull of the input.
    pub fn external_face(&self) -> Face<'_, T> {
        Face {
            triangulation: self,
            offset: 0,
            index: 0,
        }
    }

    /// Densifies the interior faces into a flat triangle-index array, three
    /// indices per triangle.
    ///
    /// The external face is skipped; faces with more than three vertices
    /// (cocircular point groups) are fan-triangulated from their first
    /// vertex, preserving counter-clockwise orientation. Collinear inputs
    /// have no interior faces and yield an empty vector.
    pub fn triangles(&self) -> Vec<usize> {
        let mut triangles = Vec::new();

        for face in self.faces().skip(1) {
            let verts = face.vertex_slice();
            for i in 1..verts.len() - 1 {
                triangles.push(verts[0]);
                triangles.push(verts[i]);
                triangles.push(verts[i + 1]);
            }
        }

        triangles
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_too_few_points() {
        assert_eq!(
            Triangulation::<f64>::new(&[]).err(),
            Some(Error::TooFewPoints)
        );
        assert_eq!(
            Triangulation::new(&[Point::new(1.0, 2.0)]).err(),
            Some(Error::TooFewPoints)
        );
    }

    #[test]
    fn test_duplicate_points() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 0.0),
        ];
        assert_eq!(
            Triangulation::new(&points).err(),
            Some(Error::DuplicatePoint {
                first: 0,
                second: 2
            })
        );
    }

    #[test]
    fn test_two_points() {
        let points = [Point::new(0.0, 0.0), Point::new(1.0, 0.0)];
        let result = Triangulation::new(&points).unwrap();

        assert_eq!(result.num_points(), 2);
        assert_eq!(result.num_faces, 1);
        assert_eq!(result.faces, vec![2, 0, 1]);
        assert!(result.triangles().is_empty());
    }

    #[test]
    fn test_square_flattening() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ];
        let result = Triangulation::new(&points).unwrap();

        // cocircular corners: one interior quadrilateral face
        assert_eq!(result.num_faces, 2);
        assert_eq!(result.num_edges(), 4);

        // fanned into two triangles sharing a diagonal
        let triangles = result.triangles();
        assert_eq!(triangles.len(), 6);
        assert_eq!(triangles[0], triangles[3]);
        assert_eq!(triangles[2], triangles[4]);
    }

    #[test]
    fn test_num_edges_euler() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.1),
            Point::new(1.0, 2.0),
            Point::new(0.9, 0.8),
        ];
        let result = Triangulation::new(&points).unwrap();

        let v = result.num_points() as isize;
        let e = result.num_edges() as isize;
        let f = result.num_faces as isize;
        assert_eq!(v - e + f, 2);
    }
}
