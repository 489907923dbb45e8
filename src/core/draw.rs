use crate::core::shapes::{Shape, ShapeKind, ShapePool};
use glam::DVec2;

/// The 2D drawing primitives the frame loop needs.
///
/// The browser implementation wraps `CanvasRenderingContext2d`; tests record
/// the calls instead.
pub trait Surface {
    fn clear(&mut self, width: f64, height: f64);
    fn set_alpha(&mut self, alpha: f64);
    fn set_fill(&mut self, color: &str);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn fill_circle(&mut self, center: DVec2, radius: f64);
    fn fill_polygon(&mut self, points: &[DVec2]);
}

/// Corners of an upward-pointing isoceles triangle of height and base `size`
/// centered on `center`: apex first, then base right and base left.
#[inline]
pub fn triangle_points(center: DVec2, size: f64) -> [DVec2; 3] {
    let half = size / 2.0;
    [
        DVec2::new(center.x, center.y - half),
        DVec2::new(center.x + half, center.y + half),
        DVec2::new(center.x - half, center.y + half),
    ]
}

pub fn draw_shape<S: Surface + ?Sized>(surface: &mut S, shape: &Shape) {
    surface.set_alpha(shape.opacity);
    surface.set_fill(shape.color);
    let half = shape.size / 2.0;
    match shape.kind {
        ShapeKind::Circle => surface.fill_circle(shape.position, half),
        ShapeKind::Square => surface.fill_rect(
            shape.position.x - half,
            shape.position.y - half,
            shape.size,
            shape.size,
        ),
        ShapeKind::Triangle => surface.fill_polygon(&triangle_points(shape.position, shape.size)),
    }
}

/// Clear the viewport and draw every live shape; alpha is restored to 1 afterwards.
pub fn draw_frame<S: Surface + ?Sized>(surface: &mut S, pool: &ShapePool, width: f64, height: f64) {
    surface.clear(width, height);
    for shape in pool.iter() {
        draw_shape(surface, shape);
    }
    surface.set_alpha(1.0);
}
