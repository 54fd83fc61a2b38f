//! Fixed-capacity simplex used by the GJK overlap query
//!
//! A simplex holds up to four points of the Minkowski difference `A - B`,
//! each paired with the support point of `A` that produced it. The newest
//! vertex is always the reference vertex for reduction.
//!
//! Reduction is split per vertex count into pure functions that map the
//! current simplex to a [`Reduction`]: the simplex to keep, the next search
//! direction, and whether the origin is enclosed.

use crate::foundation::math::{perpendicular, triple_product, Vec3};

use super::DEGENERATE_EPSILON;

/// Maximum number of vertices a simplex can hold (a tetrahedron)
pub const MAX_SIMPLEX_SIZE: usize = 4;

/// Simplex errors
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimplexError {
    /// Append attempted on a simplex that already holds four vertices
    #[error("simplex is full (4 vertices)")]
    Full,
}

/// One simplex vertex
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimplexVertex {
    /// Point of the Minkowski difference, `support_a - support_b`
    pub point: Vec3,
    /// Support point of shape A that produced `point`
    pub support_a: Vec3,
}

impl SimplexVertex {
    const EMPTY: Self = Self {
        point: Vec3::new(0.0, 0.0, 0.0),
        support_a: Vec3::new(0.0, 0.0, 0.0),
    };

    /// Build a vertex from the two support points of one query direction
    pub fn from_supports(support_a: Vec3, support_b: Vec3) -> Self {
        Self {
            point: support_a - support_b,
            support_a,
        }
    }
}

/// Outcome of one reduction step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reduction {
    /// Simplex after reduction
    pub simplex: Simplex,
    /// Next search direction
    pub direction: Vec3,
    /// Whether the simplex encloses the origin
    pub encloses_origin: bool,
}

impl Reduction {
    fn proceed(simplex: Simplex, direction: Vec3) -> Self {
        Self { simplex, direction, encloses_origin: false }
    }
}

/// Point, segment, triangle or tetrahedron in Minkowski-difference space
#[derive(Debug, Clone, Copy)]
pub struct Simplex {
    vertices: [SimplexVertex; MAX_SIMPLEX_SIZE],
    len: usize,
}

impl PartialEq for Simplex {
    fn eq(&self, other: &Self) -> bool {
        self.vertices() == other.vertices()
    }
}

impl Default for Simplex {
    fn default() -> Self {
        Self::new()
    }
}

impl Simplex {
    /// Creates an empty simplex
    pub const fn new() -> Self {
        Self {
            vertices: [SimplexVertex::EMPTY; MAX_SIMPLEX_SIZE],
            len: 0,
        }
    }

    /// Builds a simplex from existing vertices, oldest first
    pub fn from_vertices(vertices: &[SimplexVertex]) -> Result<Self, SimplexError> {
        if vertices.len() > MAX_SIMPLEX_SIZE {
            return Err(SimplexError::Full);
        }
        Ok(Self::from_slice(vertices))
    }

    fn from_slice(vertices: &[SimplexVertex]) -> Self {
        let mut simplex = Self::new();
        simplex.vertices[..vertices.len()].copy_from_slice(vertices);
        simplex.len = vertices.len();
        simplex
    }

    /// Resets the vertex count to zero
    pub fn init(&mut self) {
        self.len = 0;
    }

    /// Number of vertices
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the simplex has no vertices
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the simplex is at capacity
    pub fn is_full(&self) -> bool {
        self.len == MAX_SIMPLEX_SIZE
    }

    /// Vertices, oldest first
    pub fn vertices(&self) -> &[SimplexVertex] {
        &self.vertices[..self.len]
    }

    /// Minkowski-difference points, oldest first
    pub fn points(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.vertices().iter().map(|v| v.point)
    }

    /// Most recently added vertex
    pub fn last(&self) -> Option<&SimplexVertex> {
        self.vertices().last()
    }

    /// Appends `support_a - support_b`, paired with `support_a`
    ///
    /// Returns the new Minkowski point. A full simplex is left untouched.
    pub fn add_point(&mut self, support_a: Vec3, support_b: Vec3) -> Result<Vec3, SimplexError> {
        if self.is_full() {
            return Err(SimplexError::Full);
        }

        let vertex = SimplexVertex::from_supports(support_a, support_b);
        self.vertices[self.len] = vertex;
        self.len += 1;

        Ok(vertex.point)
    }

    /// Reduces the simplex in place and updates `direction`
    ///
    /// Returns `true` only when the tetrahedron encloses the origin.
    pub fn check(&mut self, direction: &mut Vec3) -> bool {
        self.check_with_epsilon(direction, DEGENERATE_EPSILON)
    }

    /// [`Simplex::check`] with an explicit degeneracy threshold
    pub fn check_with_epsilon(&mut self, direction: &mut Vec3, epsilon: f32) -> bool {
        let reduction = self.reduce(direction, epsilon);
        *self = reduction.simplex;
        *direction = reduction.direction;
        reduction.encloses_origin
    }

    /// Computes the reduction of this simplex without modifying it
    ///
    /// Simplices with fewer than two vertices are returned as-is with
    /// `direction` unchanged.
    pub fn reduce(&self, direction: &Vec3, epsilon: f32) -> Reduction {
        match self.len {
            2 => self.reduce_segment(epsilon),
            3 => self.reduce_triangle(epsilon),
            4 => self.reduce_tetrahedron(direction, epsilon),
            _ => Reduction::proceed(*self, *direction),
        }
    }

    fn reduce_segment(&self, epsilon: f32) -> Reduction {
        let other = self.vertices[0].point;
        let last = self.vertices[1].point;
        let to_origin = -last;
        let edge = other - last;

        let direction = non_degenerate(triple_product(&edge, &to_origin, &edge), epsilon)
            .unwrap_or_else(|| perpendicular(&edge));

        Reduction::proceed(*self, direction)
    }

    fn reduce_triangle(&self, epsilon: f32) -> Reduction {
        let [v0, v1, last] = [self.vertices[0], self.vertices[1], self.vertices[2]];
        let to_origin = -last.point;
        let ab = v1.point - last.point;
        let ac = v0.point - last.point;
        let normal = ab.cross(&ac);

        // Outside edge ab
        if ab.cross(&normal).dot(&to_origin) > 0.0 {
            let direction = non_degenerate(triple_product(&ab, &to_origin, &ab), epsilon)
                .unwrap_or(normal);
            return Reduction::proceed(Self::from_slice(&[v1, last]), direction);
        }

        // Outside edge ac
        if normal.cross(&ac).dot(&to_origin) > 0.0 {
            let direction = non_degenerate(triple_product(&ac, &to_origin, &ac), epsilon)
                .unwrap_or(normal);
            return Reduction::proceed(Self::from_slice(&[v0, last]), direction);
        }

        if normal.dot(&to_origin) > 0.0 {
            return Reduction::proceed(*self, normal);
        }

        // Origin is below the triangle: flip winding so the normal faces it
        Reduction::proceed(Self::from_slice(&[v1, v0, last]), -normal)
    }

    fn reduce_tetrahedron(&self, direction: &Vec3, epsilon: f32) -> Reduction {
        let last = self.vertices[3];
        let to_origin = -last.point;

        let mut normals = [Vec3::zeros(); 3];
        let mut front_count = 0;
        let mut last_front = 0;
        let mut last_behind = 0;

        // Faces (last, p[i], p[i + 1]); normals point away from the opposite vertex
        for i in 0..3 {
            let p = self.vertices[i].point;
            let next = self.vertices[(i + 1) % 3].point;
            normals[i] = (last.point - p).cross(&(next - p));

            if to_origin.dot(&normals[i]) > 0.0 {
                front_count += 1;
                last_front = i;
            } else {
                last_behind = i;
            }
        }

        match front_count {
            0 => Reduction {
                simplex: *self,
                direction: *direction,
                encloses_origin: true,
            },
            1 => {
                let a = self.vertices[last_front];
                let b = self.vertices[(last_front + 1) % 3];
                Reduction::proceed(Self::from_slice(&[a, b, last]), normals[last_front])
            }
            2 => {
                // The two front faces share the vertex that follows the behind face's pair
                let shared = self.vertices[(last_behind + 2) % 3];
                let edge = shared.point - last.point;
                let direction = non_degenerate(triple_product(&edge, &to_origin, &edge), epsilon)
                    .unwrap_or_else(|| perpendicular(&edge));
                Reduction::proceed(Self::from_slice(&[shared, last]), direction)
            }
            _ => {
                log::warn!(
                    "GJK: origin in front of all tetrahedron faces, collapsing to {:?}",
                    last.point
                );
                Reduction::proceed(Self::from_slice(&[last]), to_origin)
            }
        }
    }
}

fn non_degenerate(direction: Vec3, epsilon: f32) -> Option<Vec3> {
    if direction.magnitude_squared() <= epsilon {
        None
    } else {
        Some(direction)
    }
}
