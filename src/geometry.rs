//! Angular geometry for the ring: all angles are degrees measured clockwise
//! from north (straight up), in `[0, 360)`. This is the one coordinate system
//! shared by hit-testing, the drag integrator and the renderer.

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Angle of `to` as seen from `from`, clockwise from north.
///
/// `None` when the points coincide: a zero-length vector has no direction,
/// and callers are expected to drop the event rather than work with a NaN.
pub fn angle_from_north(from: Point, to: Point) -> Option<f64> {
    let (dx, dy) = (to.x - from.x, to.y - from.y);
    if dx == 0.0 && dy == 0.0 {
        return None;
    }
    let raw = dy.atan2(dx).to_degrees();
    // atan2 measures counterclockwise from east; remap so the seam sits at north
    Some(if raw >= -90.0 { raw + 90.0 } else { raw + 450.0 })
}

/// Signed shortest-path rotation from `last` to `current`, both in `[0, 360)`.
///
/// The naive interval is replaced by its complement when it spans more than
/// half the circle, flipping the direction, so a drag crossing the north seam
/// never produces a near-360 jump.
pub fn signed_arc(last: f64, current: f64) -> f64 {
    let mut interval = (current - last).abs();
    let mut direction = if current - last >= 0.0 { 1.0 } else { -1.0 };
    if 360.0 - 2.0 * interval < 0.0 {
        interval = 360.0 - interval;
        direction = -direction;
    }
    interval * direction
}

/// Point on the ring where the handle sits for a given display angle.
pub fn handle_point(center: Point, radius: f64, angle_deg: f64) -> Point {
    let theta = (-angle_deg - 90.0).to_radians();
    Point::new(
        center.x + radius * theta.cos(),
        center.y + radius * theta.sin(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn center() -> Point {
        Point::new(100.0, 100.0)
    }

    #[test]
    fn test_angle_from_north_cardinal_directions() {
        let c = center();
        let cases = vec![
            (Point::new(100.0, 0.0), 0.0),    // north
            (Point::new(200.0, 100.0), 90.0), // east
            (Point::new(100.0, 200.0), 180.0), // south
            (Point::new(0.0, 100.0), 270.0),  // west
        ];
        for (point, expected) in cases {
            let angle = angle_from_north(c, point).unwrap();
            assert!(
                (angle - expected).abs() < EPS,
                "point {point:?}: got {angle}, expected {expected}"
            );
        }
    }

    #[test]
    fn test_angle_from_north_stays_in_range() {
        let c = center();
        for i in 0..720 {
            let t = f64::from(i) * 0.5_f64.to_radians();
            let p = Point::new(c.x + 50.0 * t.cos(), c.y + 50.0 * t.sin());
            let angle = angle_from_north(c, p).unwrap();
            assert!((0.0..360.0).contains(&angle), "angle out of range: {angle}");
        }
    }

    #[test]
    fn test_angle_from_north_at_center_is_none() {
        assert_eq!(angle_from_north(center(), center()), None);
    }

    #[test]
    fn test_signed_arc_simple() {
        assert_eq!(signed_arc(0.0, 90.0), 90.0);
        assert_eq!(signed_arc(90.0, 0.0), -90.0);
        assert_eq!(signed_arc(45.0, 45.0), 0.0);
    }

    #[test]
    fn test_signed_arc_takes_the_short_way_across_the_seam() {
        // 350 -> 10 is +20 the short way, not -340
        assert_eq!(signed_arc(350.0, 10.0), 20.0);
        // 10 -> 350 is -20 the short way, not +340
        assert_eq!(signed_arc(10.0, 350.0), -20.0);
    }

    #[test]
    fn test_signed_arc_half_circle_keeps_naive_direction() {
        // exactly 180 is not shortened
        assert_eq!(signed_arc(0.0, 180.0), 180.0);
        assert_eq!(signed_arc(180.0, 0.0), -180.0);
    }

    #[test]
    fn test_handle_point_cardinal_angles() {
        let c = center();
        let r = 50.0;

        // display angle 0 (value at minimum) puts the handle at the top
        let north = handle_point(c, r, 0.0);
        assert!((north.x - c.x).abs() < EPS);
        assert!((north.y - (c.y - r)).abs() < EPS);

        // the display angle runs counter to clock direction
        let west = handle_point(c, r, 90.0);
        assert!((west.x - (c.x - r)).abs() < EPS);
        assert!((west.y - c.y).abs() < EPS);

        let south = handle_point(c, r, 180.0);
        assert!((south.x - c.x).abs() < EPS);
        assert!((south.y - (c.y + r)).abs() < EPS);

        let east = handle_point(c, r, 270.0);
        assert!((east.x - (c.x + r)).abs() < EPS);
        assert!((east.y - c.y).abs() < EPS);
    }
}
