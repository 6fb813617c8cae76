#![allow(clippy::many_single_char_names)]

/*!
A divide-and-conquer 2D [Delaunay Triangulation](https://en.wikipedia.org/wiki/Delaunay_triangulation)
library for Rust, built on a half-edge mesh.

The triangulation is returned as a flat stream of polygonal faces: every
face is its vertex count followed by that many indices into the input, in
counter-clockwise order. The first face is always the unbounded external
face, whose vertex cycle is the convex hull. In general position every
interior face is a triangle; four or more cocircular points come out as one
convex polygon, which [`Triangulation::triangles`] fans into triangles on
demand.

# Example

```rust
use delaunay2d::{Point, Triangulation};

let points = vec![
    Point { x: 0., y: 0. },
    Point { x: 1., y: 0. },
    Point { x: 1., y: 1. },
    Point { x: 0., y: 1. },
];

let result = Triangulation::new(&points).expect("triangulation failed");
assert_eq!(result.num_faces, 2); // the external face and one interior face
println!("{:?}", result.triangles()); // [0, 1, 2, 0, 2, 3]
```
*/

mod divide;
pub mod elem;
mod faces;
pub mod iter;
mod merge;
mod mesh;
pub mod point;
pub mod predicates;
pub mod traits;
pub mod triangulation;

#[cfg(feature = "mint")]
mod mint;
#[cfg(feature = "serde")]
mod serde;

pub use elem::Face;
pub use point::Point;
pub use predicates::{classify, in_circle, CirclePosition, Orientation};
pub use triangulation::{Error, Triangulation};
