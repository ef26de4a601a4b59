use egui::{Pos2, Vec2};

/// Straight-line distance between two field positions.
pub fn distance(a: Pos2, b: Pos2) -> f64 {
    let dx = (b.x - a.x) as f64;
    let dy = (b.y - a.y) as f64;
    dx.hypot(dy)
}

/// Heading from `from` to `to` in degrees: 0 points up the screen and the
/// angle grows clockwise. Returns 0 when the points coincide.
pub fn heading(from: Pos2, to: Pos2) -> f32 {
    let delta = to - from;
    if delta == Vec2::ZERO {
        return 0.0;
    }
    delta.x.atan2(-delta.y).to_degrees().rem_euclid(360.0)
}

/// Rotates `point` clockwise (on a y-down screen) around `pivot`.
pub fn rotate_about(point: Pos2, pivot: Pos2, degrees: f32) -> Pos2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    let d = point - pivot;
    pivot + Vec2::new(d.x * cos - d.y * sin, d.x * sin + d.y * cos)
}

/// Corners of the bar drawn from `start` toward `end`, `length` long.
///
/// The bar is laid out pointing down from `start` and then turned by the
/// heading from `end` back to `start`, which swings its far end onto `end`.
pub fn measuring_bar(start: Pos2, end: Pos2, width: f32, length: f32) -> [Pos2; 4] {
    let angle = heading(end, start);
    let left = start.x - 1.0;
    let right = left + width;
    [
        Pos2::new(left, start.y),
        Pos2::new(right, start.y),
        Pos2::new(right, start.y + length),
        Pos2::new(left, start.y + length),
    ]
    .map(|corner| rotate_about(corner, start, angle))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Pos2, b: Pos2) -> bool {
        (a - b).length() < 1e-2
    }

    #[test]
    fn distance_is_symmetric_and_zero_on_itself() {
        let o = Pos2::new(300.0, 300.0);
        let p = Pos2::new(12.5, 640.0);
        assert_eq!(distance(o, p), distance(p, o));
        assert_eq!(distance(o, o), 0.0);
        assert_eq!(distance(o, Pos2::new(300.0, 400.0)), 100.0);
        assert_eq!(distance(Pos2::ZERO, Pos2::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn heading_points_clockwise_from_up() {
        let o = Pos2::new(10.0, 10.0);
        let cases = [
            (Pos2::new(10.0, 0.0), 0.0),
            (Pos2::new(20.0, 10.0), 90.0),
            (Pos2::new(10.0, 20.0), 180.0),
            (Pos2::new(0.0, 10.0), 270.0),
        ];
        for (to, expected) in cases {
            let angle = heading(o, to);
            assert!((angle - expected).abs() < 1e-3, "{to:?}: {angle}");
        }
        assert_eq!(heading(o, o), 0.0);
    }

    #[test]
    fn bar_reaches_the_pointer() {
        let origin = Pos2::new(400.0, 400.0);
        for pointer in [
            Pos2::new(400.0, 100.0),
            Pos2::new(650.0, 520.0),
            Pos2::new(10.0, 790.0),
            Pos2::new(123.0, 45.0),
        ] {
            let length = distance(origin, pointer) as f32;
            let bar = measuring_bar(origin, pointer, 3.0, length);
            // The pivot sits one pixel in from the bar's left edge.
            let far_mid = bar[2] + (bar[3] - bar[2]) / 3.0 * 2.0;
            let near_mid = bar[1] + (bar[0] - bar[1]) / 3.0 * 2.0;
            assert!(close(near_mid, origin), "{near_mid:?}");
            assert!(close(far_mid, pointer), "{far_mid:?} vs {pointer:?}");
        }
    }
}
