use glam::{Quat, Vec3};

use crate::config::SimConfig;
use crate::model::{Ball, Camera, Character};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraMode {
    /// Fixed overview pose captured at startup.
    #[default]
    Default,
    FrontFollow,
    BackFollow,
    BallFollow,
}

impl CameraMode {
    /// Modes by their number key, 1 through 4.
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(CameraMode::Default),
            2 => Some(CameraMode::FrontFollow),
            3 => Some(CameraMode::BackFollow),
            4 => Some(CameraMode::BallFollow),
            _ => None,
        }
    }

    pub fn index(self) -> u8 {
        match self {
            CameraMode::Default => 1,
            CameraMode::FrontFollow => 2,
            CameraMode::BackFollow => 3,
            CameraMode::BallFollow => 4,
        }
    }
}

/// Chooses where the camera sits each tick.
///
/// Every mode can be entered from every other one; throws and landings also
/// switch modes on their own.
pub struct CameraRig {
    mode: CameraMode,
    home_eye: Vec3,
    home_yaw: f32,
    home_pitch: f32,
    front_offset: Vec3,
    back_offset: Vec3,
    ball_offset: Vec3,
    follow_lerp: f32,
    ball_lerp: f32,
    look_lift: f32,
}

impl CameraRig {
    /// Takes the camera's current pose as the home pose.
    pub fn new(camera: &Camera, config: &SimConfig) -> Self {
        Self {
            mode: CameraMode::Default,
            home_eye: camera.eye,
            home_yaw: camera.yaw,
            home_pitch: camera.pitch,
            front_offset: config.front_offset,
            back_offset: config.back_offset,
            ball_offset: config.ball_offset,
            follow_lerp: config.follow_lerp,
            ball_lerp: config.ball_lerp,
            look_lift: config.look_lift,
        }
    }

    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: CameraMode) {
        if self.mode != mode {
            tracing::debug!(from = ?self.mode, to = ?mode, "camera mode changed");
        }
        self.mode = mode;
    }

    pub fn update(&self, camera: &mut Camera, character: &Character, ball: &Ball) {
        match self.mode {
            CameraMode::Default => {
                camera.eye = self.home_eye;
                camera.yaw = self.home_yaw;
                camera.pitch = self.home_pitch;
            }
            CameraMode::FrontFollow | CameraMode::BackFollow => {
                let offset = if self.mode == CameraMode::FrontFollow {
                    self.front_offset
                } else {
                    self.back_offset
                };
                let wanted = character.position + Quat::from_rotation_y(character.facing) * offset;
                camera.eye = camera.eye.lerp(wanted, self.follow_lerp);
                camera.set_look_at(character.position + Vec3::Y * self.look_lift);
            }
            CameraMode::BallFollow => {
                let wanted = ball.position + self.ball_offset;
                camera.eye = camera.eye.lerp(wanted, self.ball_lerp);
                camera.set_look_at(ball.position);
            }
        }
    }
}
