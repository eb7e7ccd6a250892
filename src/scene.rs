//! The fixed scene: a mirror sphere hovering between two checkerboard planes
//!
//! Camera sits at the origin looking down +z, film plane at z = 1. A pixel at
//! film coordinates `(l, m)` gets the brightness of whatever checkerboard tile
//! its ray ends on, either directly or after one bounce off the sphere.

use crate::solver::{nearest, solve};
use crate::vector::{add, dot, normalize, scale, sub, Vec3};
use std::f64::consts::PI;

/// Planes farther than this along z are not shaded
pub const FAR_CUTOFF: f64 = 60.0;

/// Sphere primitive
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f64,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Ray parameter of the nearest hit for a ray from the origin along `dir`
    pub fn hit(&self, dir: &Vec3) -> Option<f64> {
        let a = dot(dir, dir);
        let b = 2.0 * dot(dir, &scale(-1.0, &self.center));
        let c = dot(&self.center, &self.center) - self.radius * self.radius;
        solve(a, b, c).map(nearest)
    }

    /// Outward unit normal at `point`
    pub fn normal_at(&self, point: &Vec3) -> Vec3 {
        normalize(&sub(point, &self.center))
    }
}

/// Infinite plane `{ p : normal · p = offset }`
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    pub normal: Vec3,
    pub offset: f64,
}

impl Plane {
    pub fn new(normal: Vec3, offset: f64) -> Self {
        Self { normal, offset }
    }

    /// Parameter `u` at which `origin + u * dir` meets the plane
    pub fn intersect(&self, origin: &Vec3, dir: &Vec3) -> f64 {
        (self.offset - dot(&self.normal, origin)) / dot(&self.normal, dir)
    }
}

/// Sphere plus the two checkerboard planes
#[derive(Debug, Clone, Copy)]
pub struct Scene {
    pub sphere: Sphere,
    /// `y = 3`
    pub upper: Plane,
    /// `y = -5`
    pub lower: Plane,
}

impl Default for Scene {
    fn default() -> Self {
        Self::mirror_ball()
    }
}

impl Scene {
    /// The one scene this renderer draws
    pub fn mirror_ball() -> Self {
        Self {
            sphere: Sphere::new(Vec3::new(0.0, 1.0, 10.0), 2.0),
            upper: Plane::new(Vec3::new(0.0, 1.0, 0.0), 3.0),
            lower: Plane::new(Vec3::new(0.0, -1.0, 0.0), 5.0),
        }
    }

    /// Brightness in `[0, 1]` seen through film coordinates `(l, m)`
    pub fn bri_film(&self, l: f64, m: f64) -> f64 {
        let w = normalize(&Vec3::new(l, m, 1.0));

        match self.sphere.hit(&w) {
            Some(s) => self.shade_reflection(&scale(s, &w)),
            None => self.shade_miss(l, m),
        }
    }

    /// Ray missed the sphere: follow it straight to whichever plane it
    /// reaches at a positive distance.
    fn shade_miss(&self, l: f64, m: f64) -> f64 {
        if m == 0.0 {
            // parallel to both planes
            return bri_floor(f64::INFINITY, f64::INFINITY);
        }

        let up = self.upper.offset / m;
        let down = -self.lower.offset / m;
        if up > down {
            bri_floor(l * self.upper.offset / m, up)
        } else {
            // x is l * 5 / m, not l * d
            bri_floor(l * self.lower.offset / m, down)
        }
    }

    /// Bounce off the sphere at `hit` and shade the plane the reflected ray
    /// lands on.
    fn shade_reflection(&self, hit: &Vec3) -> f64 {
        let n = self.sphere.normal_at(hit);
        let bounce = add(hit, &scale(dot(&scale(-2.0, hit), &n), &n));

        let u0 = self.upper.intersect(hit, &bounce);
        let u1 = self.lower.intersect(hit, &bounce);
        let k = if u1 > u0 { u1 } else { u0 };

        let v = add(hit, &scale(k, &bounce));
        bri_floor(v.x, v.z)
    }
}

/// Clamp into `[lo, hi]`; NaN collapses to `lo`
pub fn constrain(value: f64, lo: f64, hi: f64) -> f64 {
    let capped = if hi < value { hi } else { value };
    if capped > lo {
        capped
    } else {
        lo
    }
}

/// Tile pattern on the planes, in `[0, 1]`
pub fn checker(x: f64, z: f64) -> f64 {
    constrain(6.0 * (x * PI / 4.0).sin() * (z * PI / 4.0).cos(), 0.0, 1.0)
}

/// Checker pattern with `1000 / z²` falloff, zero past the far cutoff
pub fn bri_floor(x: f64, z: f64) -> f64 {
    if z.abs() > FAR_CUTOFF {
        return 0.0;
    }
    constrain((1000.0 * checker(x, z)) / (z * z), 0.0, 1.0)
}
