//! Real roots of `a·t² + b·t + c = 0`

/// Solve the quadratic, returning `(+root, -root)` when the discriminant is
/// strictly positive.
///
/// A zero discriminant (tangent ray) counts as no intersection, same as a
/// negative one.
pub fn solve(a: f64, b: f64, c: f64) -> Option<(f64, f64)> {
    let discriminant = b * b - 4.0 * a * c;
    if discriminant > 0.0 {
        let sqrt_d = discriminant.sqrt();
        Some(((-b + sqrt_d) / (2.0 * a), (-b - sqrt_d) / (2.0 * a)))
    } else {
        None
    }
}

/// Smaller of the two roots: the second wins only when strictly smaller
pub fn nearest(roots: (f64, f64)) -> f64 {
    let (first, second) = roots;
    if second < first {
        second
    } else {
        first
    }
}
