//! Vector algebra for 3-component vectors
//!
//! Thin free functions over `nalgebra::Vector3<f64>`. Each one is spelled out
//! component-wise so the rounding of every step is fixed; the golden output
//! of the renderer depends on it.

use nalgebra::Vector3;

/// A 3-component vector (point or direction)
pub type Vec3 = Vector3<f64>;

/// Multiply every component by `s`
pub fn scale(s: f64, v: &Vec3) -> Vec3 {
    Vec3::new(s * v.x, s * v.y, s * v.z)
}

pub fn add(v: &Vec3, w: &Vec3) -> Vec3 {
    Vec3::new(v.x + w.x, v.y + w.y, v.z + w.z)
}

/// `v - w`, computed as `v + (-1 * w)`
pub fn sub(v: &Vec3, w: &Vec3) -> Vec3 {
    add(v, &scale(-1.0, w))
}

pub fn dot(v: &Vec3, w: &Vec3) -> f64 {
    v.x * w.x + v.y * w.y + v.z * w.z
}

/// Euclidean length
pub fn norm(v: &Vec3) -> f64 {
    dot(v, v).sqrt()
}

/// Unit vector in the direction of `v`.
///
/// A zero vector yields non-finite components; callers never pass one.
pub fn normalize(v: &Vec3) -> Vec3 {
    scale(1.0 / norm(v), v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_and_add() {
        let v = Vec3::new(1.0, -2.0, 3.0);
        let w = Vec3::new(0.5, 0.5, 0.5);
        assert_eq!(scale(2.0, &v), Vec3::new(2.0, -4.0, 6.0));
        assert_eq!(add(&v, &w), Vec3::new(1.5, -1.5, 3.5));
    }

    #[test]
    fn test_sub() {
        let v = Vec3::new(0.0, 1.0, 10.0);
        let w = Vec3::new(1.0, 1.0, 1.0);
        assert_eq!(sub(&v, &w), Vec3::new(-1.0, 0.0, 9.0));
    }

    #[test]
    fn test_dot_and_norm() {
        let v = Vec3::new(3.0, 0.0, 4.0);
        assert_eq!(dot(&v, &v), 25.0);
        assert_eq!(norm(&v), 5.0);
        assert_eq!(dot(&Vec3::new(1.0, 0.0, 0.0), &Vec3::new(0.0, 1.0, 0.0)), 0.0);
    }

    #[test]
    fn test_normalize() {
        let n = normalize(&Vec3::new(3.0, 0.0, 4.0));
        assert!((n.x - 0.6).abs() < 1e-12);
        assert_eq!(n.y, 0.0);
        assert!((n.z - 0.8).abs() < 1e-12);
        assert!((norm(&n) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_zero_vector_is_not_finite() {
        let n = normalize(&Vec3::zeros());
        assert!(!n.x.is_finite());
        assert!(!n.y.is_finite());
        assert!(!n.z.is_finite());
    }
}
