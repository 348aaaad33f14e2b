use super::{Point2, DEGENERATE_LEN_SQ};

/// Sign used by the closed-form line/circle solution: `-1` for negative
/// values, `+1` otherwise (including zero).
fn sgn(x: f64) -> f64 {
    if x < 0.0 {
        -1.0
    } else {
        1.0
    }
}

/// Intersection of a circle with a bounded line segment in 2D.
///
/// Solves the infinite line through `v`, `w` against the circle in
/// circle-centered coordinates:
///
/// ```text
/// D     = x1*y2 - x2*y1
/// disc  = r²·dr² - D²
/// x     = (D·dy ± sgn(dy)·dx·√disc) / dr²
/// y     = (-D·dx ± |dy|·√disc) / dr²
/// ```
///
/// Each root is kept only if it lies on the finite segment (see
/// [`is_point_on_segment`]). Returns 0, 1 or 2 points; a tangent line yields
/// a single point. Zero-length segments never intersect.
#[must_use]
pub fn circle_segment_intersect_2d(
    center: &Point2,
    radius: f64,
    v: &Point2,
    w: &Point2,
    eps: f64,
) -> Vec<Point2> {
    let mut results = Vec::new();

    let a = v - center;
    let b = w - center;
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let dr_sq = dx * dx + dy * dy;
    if dr_sq < DEGENERATE_LEN_SQ {
        return results;
    }

    let big_d = a.x * b.y - b.x * a.y;
    let discriminant = radius * radius * dr_sq - big_d * big_d;
    if discriminant < 0.0 {
        return results;
    }

    let sqrt_disc = discriminant.sqrt();
    let base_x = big_d * dy;
    let base_y = -big_d * dx;
    let off_x = sgn(dy) * dx * sqrt_disc;
    let off_y = dy.abs() * sqrt_disc;

    let first = Point2::new(
        (base_x + off_x) / dr_sq + center.x,
        (base_y + off_y) / dr_sq + center.y,
    );
    if is_point_on_segment(&first, v, w, eps) {
        results.push(first);
    }

    if sqrt_disc > 0.0 {
        let second = Point2::new(
            (base_x - off_x) / dr_sq + center.x,
            (base_y - off_y) / dr_sq + center.y,
        );
        if is_point_on_segment(&second, v, w, eps) {
            results.push(second);
        }
    }

    results
}

/// Checks whether `p` lies on the finite segment `[start, end]`.
///
/// `p` must be collinear within `eps` (cross product test), then fall inside
/// the segment's range along its dominant axis.
#[must_use]
pub fn is_point_on_segment(p: &Point2, start: &Point2, end: &Point2, eps: f64) -> bool {
    let to_p = p - start;
    let seg = end - start;

    let cross = to_p.x * seg.y - to_p.y * seg.x;
    if cross.abs() > eps {
        return false;
    }

    if seg.x.abs() >= seg.y.abs() {
        if seg.x > 0.0 {
            start.x <= p.x && p.x <= end.x
        } else {
            end.x <= p.x && p.x <= start.x
        }
    } else if seg.y > 0.0 {
        start.y <= p.y && p.y <= end.y
    } else {
        end.y <= p.y && p.y <= start.y
    }
}
