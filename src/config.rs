use glam::Vec3;
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

/// Every tunable of the court simulation.
///
/// Distances are scene units, durations of animations are milliseconds.
/// Ball flight is measured in the fixed "flight time" unit, see
/// [`SimConfig::fixed_tick`].
#[derive(Debug, Clone)]
pub struct SimConfig {
    // Character
    pub spawn_position: Vec3,
    pub move_speed: f32,
    /// Full size of the box used for collision checks, centered on the character.
    pub character_size: Vec3,

    // Orientation
    pub rotation_step: f32,
    pub rotation_duration_ms: f32,

    // Pose
    pub walk_frequency: f32,
    pub walk_arm_amplitude: f32,
    pub walk_leg_ratio: f32,
    pub idle_frequency_ratio: f32,
    pub idle_amplitude: f32,
    pub throw_arm_angle: f32,
    pub throw_phase_ms: f32,

    // Ball
    pub flight_duration: f32,
    pub fixed_tick: f32,
    pub peak_lift: f32,
    pub throw_lift: f32,
    pub fallback_distance: f32,
    pub fallback_height: f32,
    pub ball_rest_offset: Vec3,
    pub bob_amplitude: f32,
    pub bob_frequency: f32,

    // Camera
    pub home_eye: Vec3,
    pub home_look_at: Vec3,
    pub front_offset: Vec3,
    pub back_offset: Vec3,
    pub ball_offset: Vec3,
    pub follow_lerp: f32,
    pub ball_lerp: f32,
    pub look_lift: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            spawn_position: Vec3::new(0.0, 7.0, 0.0),
            move_speed: 0.3,
            character_size: Vec3::new(2.0, 5.0, 2.0),

            rotation_step: FRAC_PI_4,
            rotation_duration_ms: 250.0,

            walk_frequency: 0.008,
            walk_arm_amplitude: 0.8,
            walk_leg_ratio: 0.7,
            idle_frequency_ratio: 0.3,
            idle_amplitude: 0.15,
            throw_arm_angle: -FRAC_PI_2,
            throw_phase_ms: 200.0,

            flight_duration: 0.8,
            fixed_tick: 1.0 / 60.0,
            peak_lift: 5.0,
            throw_lift: 2.0,
            fallback_distance: 15.0,
            fallback_height: 1.0,
            ball_rest_offset: Vec3::new(1.4, -3.0, 1.4),
            bob_amplitude: 2.0,
            bob_frequency: 0.01,

            home_eye: Vec3::new(0.0, 30.0, 40.0),
            home_look_at: Vec3::ZERO,
            front_offset: Vec3::new(0.0, 6.0, 14.0),
            back_offset: Vec3::new(0.0, 6.0, -14.0),
            ball_offset: Vec3::new(0.0, 3.0, -6.0),
            follow_lerp: 0.08,
            ball_lerp: 0.15,
            look_lift: 4.0,
        }
    }
}

impl SimConfig {
    /// Fraction of a flight covered by one fixed tick.
    pub fn flight_step(&self) -> f32 {
        self.fixed_tick / self.flight_duration
    }
}
