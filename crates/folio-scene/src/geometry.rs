#![forbid(unsafe_code)]

//! The Platonic solids the background draws from, as wireframes.
//!
//! Every solid has unit circumradius. Edges are derived, not listed: for a
//! regular polyhedron the edges are exactly the vertex pairs at the minimum
//! pairwise distance.

use crate::math::Vec3;

/// Geometry palette for background objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    Tetrahedron,
    Octahedron,
    Icosahedron,
    Dodecahedron,
}

impl GeometryKind {
    pub const ALL: [Self; 4] = [
        Self::Tetrahedron,
        Self::Octahedron,
        Self::Icosahedron,
        Self::Dodecahedron,
    ];

    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Tetrahedron => 0,
            Self::Octahedron => 1,
            Self::Icosahedron => 2,
            Self::Dodecahedron => 3,
        }
    }

    /// Vertices on the unit sphere.
    #[must_use]
    pub fn vertices(self) -> Vec<Vec3> {
        let phi = (1.0 + 5.0_f32.sqrt()) / 2.0;
        let inv = 1.0 / phi;
        let raw: Vec<Vec3> = match self {
            Self::Tetrahedron => vec![
                Vec3::new(1.0, 1.0, 1.0),
                Vec3::new(-1.0, -1.0, 1.0),
                Vec3::new(-1.0, 1.0, -1.0),
                Vec3::new(1.0, -1.0, -1.0),
            ],
            Self::Octahedron => vec![
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(-1.0, 0.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
                Vec3::new(0.0, -1.0, 0.0),
                Vec3::new(0.0, 0.0, 1.0),
                Vec3::new(0.0, 0.0, -1.0),
            ],
            Self::Icosahedron => {
                let mut v = Vec::with_capacity(12);
                for a in [-1.0, 1.0] {
                    for b in [-phi, phi] {
                        v.push(Vec3::new(a, b, 0.0));
                        v.push(Vec3::new(0.0, a, b));
                        v.push(Vec3::new(b, 0.0, a));
                    }
                }
                v
            }
            Self::Dodecahedron => {
                let mut v = Vec::with_capacity(20);
                for x in [-1.0, 1.0] {
                    for y in [-1.0, 1.0] {
                        for z in [-1.0, 1.0] {
                            v.push(Vec3::new(x, y, z));
                        }
                    }
                }
                for a in [-inv, inv] {
                    for b in [-phi, phi] {
                        v.push(Vec3::new(0.0, a, b));
                        v.push(Vec3::new(a, b, 0.0));
                        v.push(Vec3::new(b, 0.0, a));
                    }
                }
                v
            }
        };
        raw.into_iter().map(Vec3::normalized).collect()
    }

    /// Build the wireframe (vertices plus edge index pairs).
    #[must_use]
    pub fn wireframe(self) -> Wireframe {
        let vertices = self.vertices();
        let mut min = f32::MAX;
        for (i, a) in vertices.iter().enumerate() {
            for b in &vertices[i + 1..] {
                min = min.min((*a - *b).length());
            }
        }
        let tolerance = min * 1e-3;
        let mut edges = Vec::new();
        for (i, a) in vertices.iter().enumerate() {
            for (j, b) in vertices.iter().enumerate().skip(i + 1) {
                if ((*a - *b).length() - min).abs() <= tolerance {
                    edges.push((i, j));
                }
            }
        }
        Wireframe {
            kind: self,
            vertices,
            edges,
        }
    }
}

/// Vertex and edge lists of one solid.
#[derive(Debug, Clone, PartialEq)]
pub struct Wireframe {
    pub kind: GeometryKind,
    pub vertices: Vec<Vec3>,
    pub edges: Vec<(usize, usize)>,
}

/// The four wireframes, indexed by [`GeometryKind::index`].
#[must_use]
pub fn palette() -> [Wireframe; 4] {
    GeometryKind::ALL.map(GeometryKind::wireframe)
}
