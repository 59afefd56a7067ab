use super::tween::{Easing, Tween};
use crate::config::SimConfig;
use crate::model::Character;

/// Turns the character in fixed steps, easing the shown facing towards the
/// latest target. A new command replaces the running turn.
pub struct OrientationController {
    pub step: f32,
    pub duration_ms: f32,
    turn: Option<Tween<f32>>,
}

impl OrientationController {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            step: config.rotation_step,
            duration_ms: config.rotation_duration_ms,
            turn: None,
        }
    }

    pub fn is_turning(&self) -> bool {
        self.turn.is_some()
    }

    pub fn rotate(&mut self, character: &mut Character, direction: i8) {
        let direction = f32::from(direction.signum());
        if direction == 0.0 {
            return;
        }
        character.target_facing += direction * self.step;
        self.turn = Some(Tween::new(
            character.facing,
            character.target_facing,
            self.duration_ms,
            Easing::QuadraticOut,
        ));
        tracing::debug!(target_facing = character.target_facing, "turn started");
    }

    pub fn update(&mut self, character: &mut Character, dt_ms: f32) {
        let Some(turn) = self.turn.as_mut() else {
            return;
        };
        let progress = turn.advance(dt_ms);
        character.facing = progress.value();
        if progress.is_done() {
            self.turn = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use std::f32::consts::{FRAC_PI_4, TAU};

    fn setup() -> (OrientationController, Character) {
        (
            OrientationController::new(&SimConfig::default()),
            Character::new(Vec3::ZERO),
        )
    }

    #[test]
    fn test_turn_eases_out_and_lands_on_target() {
        let (mut ctrl, mut character) = setup();
        ctrl.rotate(&mut character, 1);
        assert_eq!(character.target_facing, FRAC_PI_4);
        assert_eq!(character.facing, 0.0, "shown facing only moves on update");

        ctrl.update(&mut character, 125.0);
        assert!((character.facing - FRAC_PI_4 * 0.75).abs() < 1e-6);

        ctrl.update(&mut character, 125.0);
        assert_eq!(character.facing, FRAC_PI_4);
        assert!(!ctrl.is_turning());
    }

    #[test]
    fn test_new_command_restarts_from_shown_facing() {
        let (mut ctrl, mut character) = setup();
        ctrl.rotate(&mut character, 1);
        ctrl.update(&mut character, 125.0);
        let mid = character.facing;

        ctrl.rotate(&mut character, 1);
        ctrl.update(&mut character, 0.0);
        assert!((character.facing - mid).abs() < 1e-6, "restart from the shown angle, not the old target");

        ctrl.update(&mut character, 250.0);
        assert!((character.facing - 2.0 * FRAC_PI_4).abs() < 1e-6);
    }

    #[test]
    fn test_left_then_right_restores_target() {
        let (mut ctrl, mut character) = setup();
        let original = character.target_facing;
        ctrl.rotate(&mut character, 1);
        ctrl.update(&mut character, 40.0);
        ctrl.rotate(&mut character, -1);
        assert!((character.target_facing - original).rem_euclid(TAU) < 1e-6);
    }

    #[test]
    fn test_zero_direction_is_ignored() {
        let (mut ctrl, mut character) = setup();
        ctrl.rotate(&mut character, 0);
        assert!(!ctrl.is_turning());
        assert_eq!(character.target_facing, 0.0);
    }
}
