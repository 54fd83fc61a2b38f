//! Support-function capability consumed by the GJK solver
//!
//! Shapes are never inspected directly; the solver only asks for the point
//! of a shape farthest along a direction. Any convex shape that can answer
//! that can be tested against any other.

use crate::foundation::math::Vec3;

/// A convex shape described by its support function
pub trait SupportMap {
    /// Point of the shape farthest along `direction`
    ///
    /// `direction` is not normalized. Ties may be broken arbitrarily.
    fn support(&self, direction: &Vec3) -> Vec3;
}

/// Closures act as ad-hoc shapes
impl<F> SupportMap for F
where
    F: Fn(&Vec3) -> Vec3,
{
    fn support(&self, direction: &Vec3) -> Vec3 {
        self(direction)
    }
}
