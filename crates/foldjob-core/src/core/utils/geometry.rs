use nalgebra::Point3;

/// Euclidean distance between two points.
///
/// The squared terms are summed in x, y, z order before the square root so that the result
/// is bit-identical to other implementations of the same payload format.
#[inline]
pub fn euclidean_distance(a: &Point3<f64>, b: &Point3<f64>) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    let dz = a.z - b.z;
    (dx * dx + dy * dy + dz * dz).sqrt()
}
