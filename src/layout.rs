//! Point-set builders shared by the sketch drivers.
//!
//! Sketches rebuild these sets every frame; the functions allocate fresh
//! vectors and leave buffer reuse to the caller.

/// Uniform grid of `cols * rows` points centered on `center`, row-major
/// from the top-left.
pub fn grid_points(cols: usize, rows: usize, spacing: f64, center: (f64, f64)) -> Vec<(f64, f64)> {
    let mut points = Vec::with_capacity(cols * rows);
    for y in 0..rows {
        for x in 0..cols {
            points.push((
                center.0 - cols as f64 * 0.5 * spacing + x as f64 * spacing,
                center.1 - rows as f64 * 0.5 * spacing + y as f64 * spacing,
            ));
        }
    }
    points
}

/// `steps` points on a circle around `center`, starting at angle zero,
/// each coordinate rounded to a whole pixel.
pub fn ring_points(center: (f64, f64), radius: f64, steps: usize) -> Vec<(f64, f64)> {
    let step_angle = std::f64::consts::TAU / steps as f64;
    (0..steps)
        .map(|i| {
            let angle = i as f64 * step_angle;
            (
                (angle.cos() * radius).round() + center.0,
                (angle.sin() * radius).round() + center.1,
            )
        })
        .collect()
}
