use glam::Vec2;

use super::tween::{Easing, Tween};
use crate::config::SimConfig;
use crate::model::{Limbs, PoseMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    Raise,
    Return,
}

/// Two-phase throw motion of both arms. Owns the limbs while it runs.
#[derive(Debug, Clone, Copy)]
pub struct ArmGesture {
    pub phase: GesturePhase,
    pub arms: Tween<Vec2>,
}

/// Idle sway, walk cycle and the throw gesture.
pub struct PoseAnimator {
    walk_frequency: f64,
    walk_arm_amplitude: f32,
    walk_leg_ratio: f32,
    idle_frequency_ratio: f64,
    idle_amplitude: f32,
    throw_arm_angle: f32,
    throw_phase_ms: f32,
    gesture: Option<ArmGesture>,
}

impl PoseAnimator {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            walk_frequency: f64::from(config.walk_frequency),
            walk_arm_amplitude: config.walk_arm_amplitude,
            walk_leg_ratio: config.walk_leg_ratio,
            idle_frequency_ratio: f64::from(config.idle_frequency_ratio),
            idle_amplitude: config.idle_amplitude,
            throw_arm_angle: config.throw_arm_angle,
            throw_phase_ms: config.throw_phase_ms,
            gesture: None,
        }
    }

    pub fn gesture(&self) -> Option<&ArmGesture> {
        self.gesture.as_ref()
    }

    /// Pose the limbs are showing, given whether the character moved this tick.
    pub fn mode(&self, moved: bool) -> PoseMode {
        if self.gesture.is_some() {
            PoseMode::Throwing
        } else if moved {
            PoseMode::Walking
        } else {
            PoseMode::Idle
        }
    }

    /// Raise both arms from wherever they are now; the return phase follows on its own.
    pub fn start_throw(&mut self, limbs: &Limbs) {
        let (left, right) = limbs.arms();
        self.gesture = Some(ArmGesture {
            phase: GesturePhase::Raise,
            arms: Tween::new(
                Vec2::new(left, right),
                Vec2::splat(self.throw_arm_angle),
                self.throw_phase_ms,
                Easing::QuadraticOut,
            ),
        });
    }

    fn advance_gesture(&mut self, limbs: &mut Limbs, dt_ms: f32) {
        let Some(gesture) = self.gesture.as_mut() else {
            return;
        };
        let progress = gesture.arms.advance(dt_ms);
        let arms = progress.value();
        limbs.set_arms(arms.x, arms.y);
        if !progress.is_done() {
            return;
        }
        match gesture.phase {
            GesturePhase::Raise => {
                *gesture = ArmGesture {
                    phase: GesturePhase::Return,
                    arms: Tween::new(arms, Vec2::ZERO, self.throw_phase_ms, Easing::QuadraticOut),
                };
            }
            GesturePhase::Return => self.gesture = None,
        }
    }

    /// One tick of limb animation. `now_ms` is the wall clock; walk and idle
    /// poses depend on nothing else.
    pub fn update(&mut self, limbs: &mut Limbs, dt_ms: f32, moved: bool, ball_in_flight: bool, now_ms: f64) {
        if self.gesture.is_some() {
            self.advance_gesture(limbs, dt_ms);
            return;
        }

        let t = now_ms * self.walk_frequency;
        if moved {
            let step = t.sin() as f32 * self.walk_arm_amplitude;
            limbs.set_arms(step, -step);
            limbs.set_legs(-step * self.walk_leg_ratio, step * self.walk_leg_ratio);
        } else if !ball_in_flight {
            let sway = (t * self.idle_frequency_ratio).sin() as f32 * self.idle_amplitude;
            limbs.set_arms(sway, -sway);
            limbs.set_legs(0.0, 0.0);
        }
        // Otherwise the ball is still airborne after the gesture: hold the last pose
    }
}
