//! Math utilities and types
//!
//! Provides the vector type used by the collision code together with the
//! small set of vector helpers the GJK solver relies on.

pub use nalgebra::Vector3;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// Fallback search axis ("world right") used when a query supplies no hint
pub const DEFAULT_AXIS: Vec3 = Vec3::new(1.0, 0.0, 0.0);

/// Double cross product `(u × v) × w`
///
/// With `u = w = edge` and `v = toward_origin` this yields the component of
/// `toward_origin` perpendicular to `edge`, lying in the plane spanned by both.
#[inline]
pub fn triple_product(u: &Vec3, v: &Vec3, w: &Vec3) -> Vec3 {
    u.cross(v).cross(w)
}

/// Returns some vector perpendicular to `v`
///
/// Crosses `v` with the world axis along which `v` has the smallest magnitude,
/// so the result is non-zero for any non-zero input. A zero input yields zero.
pub fn perpendicular(v: &Vec3) -> Vec3 {
    let ax = v.x.abs();
    let ay = v.y.abs();
    let az = v.z.abs();

    let axis = if ax <= ay && ax <= az {
        Vec3::x()
    } else if ay <= az {
        Vec3::y()
    } else {
        Vec3::z()
    };

    v.cross(&axis)
}

/// Exact zero test on every component
#[inline]
pub fn is_zero(v: &Vec3) -> bool {
    v.x == 0.0 && v.y == 0.0 && v.z == 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn test_triple_product_points_toward_origin() {
        // Segment from (1, 1, 0) to (1, -1, 0); origin lies on the -x side
        let last = Vec3::new(1.0, 1.0, 0.0);
        let other = Vec3::new(1.0, -1.0, 0.0);
        let edge = other - last;
        let to_origin = -last;

        let dir = triple_product(&edge, &to_origin, &edge);

        assert_relative_eq!(dir.dot(&edge), 0.0, epsilon = EPSILON);
        assert!(dir.dot(&to_origin) > 0.0);
        assert!(dir.x < 0.0);
    }

    #[test]
    fn test_triple_product_colinear_is_zero() {
        let edge = Vec3::new(2.0, 0.0, 0.0);
        let to_origin = Vec3::new(-1.0, 0.0, 0.0);
        assert!(triple_product(&edge, &to_origin, &edge).magnitude_squared() == 0.0);
    }

    #[test]
    fn test_perpendicular_is_orthogonal() {
        let inputs = [
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 3.0, 0.0),
            Vec3::new(0.0, 0.0, -2.0),
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(-0.5, 0.25, 4.0),
        ];

        for v in inputs {
            let p = perpendicular(&v);
            assert_relative_eq!(p.dot(&v), 0.0, epsilon = EPSILON);
            assert!(p.magnitude_squared() > 0.0, "perpendicular of {v:?} was zero");
        }
    }

    #[test]
    fn test_is_zero() {
        assert!(is_zero(&Vec3::zeros()));
        assert!(is_zero(&Vec3::new(-0.0, 0.0, 0.0)));
        assert!(!is_zero(&Vec3::new(0.0, 1e-30, 0.0)));
        assert!(!is_zero(&DEFAULT_AXIS));
    }
}
