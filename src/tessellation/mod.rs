mod tessellate_scene;

pub use tessellate_scene::TessellateScene;

use crate::geometry::Intersection;
use crate::math::Point2;

/// Parameters controlling how a solve is turned into drawable primitives.
#[derive(Debug, Clone, Copy)]
pub struct SceneParams {
    /// Number of chords used to approximate each circle.
    pub circle_segments: usize,
    /// Length of each bisector ray from the circle center.
    pub ray_length: f64,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            circle_segments: 64,
            ray_length: 1000.0,
        }
    }
}

/// A closed ring of points approximating a circle.
#[derive(Debug, Clone, Default)]
pub struct Ring {
    /// The ring vertices; the last connects back to the first.
    pub points: Vec<Point2>,
}

/// Render-ready data for one solve. Nothing here draws; a renderer consumes it.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    /// The equidistant point.
    pub solved_point: Point2,
    /// Circle with the solved radius.
    pub solved_circle: Ring,
    /// Inflated circle the crossings lie on.
    pub driving_circle: Ring,
    /// Crossing markers, tagged with the curve they belong to.
    pub markers: Vec<Intersection>,
    /// Bisector rays as `[center, end]` segments. Empty when selection was skipped.
    pub rays: Vec<[Point2; 2]>,
}
