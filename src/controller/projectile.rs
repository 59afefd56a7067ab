use glam::{Quat, Vec3};

use crate::config::SimConfig;
use crate::model::{Ball, Character, FlightState, RayQuery};

/// Scripted ball arc: armed on a throw, advanced a fixed step per tick.
pub struct ProjectileSimulator {
    /// Fraction of the flight covered per tick, independent of frame time.
    pub step: f32,
    pub peak_lift: f32,
    pub throw_lift: f32,
    pub fallback_distance: f32,
    pub fallback_height: f32,
    pub rest_offset: Vec3,
    pub bob_amplitude: f32,
    pub bob_frequency: f64,
}

impl ProjectileSimulator {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            step: config.flight_step(),
            peak_lift: config.peak_lift,
            throw_lift: config.throw_lift,
            fallback_distance: config.fallback_distance,
            fallback_height: config.fallback_height,
            rest_offset: config.ball_rest_offset,
            bob_amplitude: config.bob_amplitude,
            bob_frequency: f64::from(config.bob_frequency),
        }
    }

    /// Where a throw lands: the first obstacle hit by the click ray, or a point
    /// a fixed distance along the camera's view direction at a fixed height.
    pub fn pick_target(
        &self,
        query: Option<&dyn RayQuery>,
        click_origin: Vec3,
        click_dir: Vec3,
        view_origin: Vec3,
        view_dir: Vec3,
    ) -> Vec3 {
        if let Some(hit) = query.and_then(|q| q.raycast(click_origin, click_dir)) {
            return hit;
        }
        let mut target = view_origin + view_dir * self.fallback_distance;
        target.y = self.fallback_height;
        tracing::debug!(fallback = ?target, "throw ray missed");
        target
    }

    /// Arm a new flight from the character towards `target`. Returns false and
    /// leaves the ball alone if it is still airborne.
    pub fn launch(&self, ball: &mut Ball, thrower: Vec3, target: Vec3) -> bool {
        if ball.in_flight() {
            return false;
        }
        ball.start = thrower + Vec3::Y * self.throw_lift;
        ball.target = target;
        ball.peak = ball.start.y.max(target.y) + self.peak_lift;
        ball.t = 0.0;
        ball.flight = FlightState::InFlight;
        true
    }

    /// Advance the ball one tick. Returns true on the tick the flight ends.
    pub fn update(&self, ball: &mut Ball, character: &Character, now_ms: f64) -> bool {
        if ball.in_flight() {
            ball.t += self.step;
            let landed = ball.t >= 1.0;
            if landed {
                ball.t = 1.0;
                ball.flight = FlightState::Grounded;
            }
            ball.position = ball.arc_point(ball.t);
            return landed;
        }

        // Follows the quantized facing, not the eased one
        let offset = Quat::from_rotation_y(character.target_facing) * self.rest_offset;
        let bob = ((now_ms * self.bob_frequency).sin().abs() as f32) * self.bob_amplitude;
        ball.position = character.position + offset + Vec3::Y * bob;
        false
    }
}
