use glam::Vec3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightState {
    /// Resting with the character.
    Grounded,
    InFlight,
}

/// The thrown ball.
///
/// `start`, `target` and `peak` only mean something while the ball is in flight.
#[derive(Debug, Clone)]
pub struct Ball {
    pub position: Vec3,
    pub flight: FlightState,
    pub start: Vec3,
    pub target: Vec3,
    pub peak: f32,
    /// Elapsed fraction of the current flight, in `[0, 1]`.
    pub t: f32,
}

impl Ball {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            flight: FlightState::Grounded,
            start: Vec3::ZERO,
            target: Vec3::ZERO,
            peak: 0.0,
            t: 0.0,
        }
    }

    pub fn in_flight(&self) -> bool {
        self.flight == FlightState::InFlight
    }

    /// Position on the arc at fraction `t`: linear in x/z, quadratic Bezier
    /// through `start.y`, `peak`, `target.y` vertically.
    pub fn arc_point(&self, t: f32) -> Vec3 {
        let u = 1.0 - t;
        let horizontal = self.start.lerp(self.target, t);
        let y = u * u * self.start.y + 2.0 * u * t * self.peak + t * t * self.target.y;
        Vec3::new(horizontal.x, y, horizontal.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn armed(start: Vec3, target: Vec3, peak: f32) -> Ball {
        let mut ball = Ball::new(start);
        ball.start = start;
        ball.target = target;
        ball.peak = peak;
        ball.flight = FlightState::InFlight;
        ball
    }

    #[test]
    fn test_arc_endpoints() {
        let ball = armed(Vec3::new(-3.0, 9.0, 4.0), Vec3::new(12.0, 0.5, -7.0), 14.0);
        assert!(ball.arc_point(0.0).abs_diff_eq(ball.start, 1e-5));
        assert!(ball.arc_point(1.0).abs_diff_eq(ball.target, 1e-5));
    }

    #[test]
    fn test_arc_midpoint() {
        let ball = armed(Vec3::new(0.0, 2.0, 0.0), Vec3::new(10.0, 1.0, 0.0), 7.0);
        let mid = ball.arc_point(0.5);
        assert!(mid.abs_diff_eq(Vec3::new(5.0, 4.25, 0.0), 1e-5), "midpoint {mid:?}");
    }
}
