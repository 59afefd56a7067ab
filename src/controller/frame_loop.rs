use glam::Vec3;

use super::camera_rig::{CameraMode, CameraRig};
use super::input::{Command, InputEvent, InputState, KeyBindings};
use super::movement::MovementSystem;
use super::orientation::OrientationController;
use super::pose::PoseAnimator;
use super::projectile::ProjectileSimulator;
use crate::config::SimConfig;
use crate::model::{Ball, Camera, Character, GeometryIndex, Limbs, PoseMode, RayQuery};

/// Longest frame gap fed to time-based animations, in milliseconds.
const MAX_FRAME_MS: f64 = 100.0;

#[repr(C)]
#[derive(Clone, Copy, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

/// What the renderer needs to draw one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSnapshot {
    pub character_position: Vec3,
    pub character_facing: f32,
    pub limbs: Limbs,
    pub pose: PoseMode,
    pub ball_position: Vec3,
    pub ball_in_flight: bool,
    pub camera_eye: Vec3,
    pub camera_yaw: f32,
    pub camera_pitch: f32,
    pub camera_mode: CameraMode,
}

impl FrameSnapshot {
    pub const FLAT_LEN: usize = 18;

    /// Flat layout for hosts that cannot take structs:
    /// character xyz, facing, arms l/r, legs l/r, ball xyz, in-flight flag,
    /// camera xyz, yaw, pitch, mode number.
    pub fn to_array(&self) -> [f32; Self::FLAT_LEN] {
        let c = self.character_position;
        let b = self.ball_position;
        let e = self.camera_eye;
        [
            c.x, c.y, c.z, self.character_facing,
            self.limbs.left_arm, self.limbs.right_arm, self.limbs.left_leg, self.limbs.right_leg,
            b.x, b.y, b.z, if self.ball_in_flight { 1.0 } else { 0.0 },
            e.x, e.y, e.z, self.camera_yaw, self.camera_pitch,
            f32::from(self.camera_mode.index()),
        ]
    }
}

/// All mutable state of the court session, advanced once per display refresh.
pub struct Simulation {
    pub config: SimConfig,
    pub character: Character,
    pub ball: Ball,
    pub camera: Camera,
    pub input: InputState,
    geometry: Option<GeometryIndex>,
    ray_query: Option<Box<dyn RayQuery>>,
    movement: MovementSystem,
    orientation: OrientationController,
    pose: PoseAnimator,
    projectile: ProjectileSimulator,
    rig: CameraRig,
    last_time: Option<f64>,
    moved: bool,
}

impl Simulation {
    pub fn new(config: SimConfig, width: u32, height: u32) -> Self {
        Self::with_bindings(config, KeyBindings::default(), width, height)
    }

    pub fn with_bindings(config: SimConfig, bindings: KeyBindings, width: u32, height: u32) -> Self {
        let mut camera = Camera::new(width, height);
        camera.eye = config.home_eye;
        camera.set_look_at(config.home_look_at);

        let character = Character::new(config.spawn_position);
        let ball = Ball::new(config.spawn_position + config.ball_rest_offset);

        Self {
            movement: MovementSystem::new(&config),
            orientation: OrientationController::new(&config),
            pose: PoseAnimator::new(&config),
            projectile: ProjectileSimulator::new(&config),
            rig: CameraRig::new(&camera, &config),
            character,
            ball,
            camera,
            input: InputState::new(bindings),
            geometry: None,
            ray_query: None,
            last_time: None,
            moved: false,
            config,
        }
    }

    pub fn handle_event(&mut self, event: &InputEvent) {
        self.input.process_event(event);
    }

    /// Install the scene's obstacle index. Until this happens movement is unrestricted.
    pub fn load_geometry(&mut self, geometry: GeometryIndex) {
        tracing::info!(
            obstacles = geometry.obstacles().len(),
            bounded = geometry.bounds().is_some(),
            "scene geometry loaded"
        );
        self.geometry = Some(geometry);
    }

    pub fn geometry(&self) -> Option<&GeometryIndex> {
        self.geometry.as_ref()
    }

    /// Use exact scene geometry for throw targeting instead of the obstacle boxes.
    pub fn set_ray_query(&mut self, query: Box<dyn RayQuery>) {
        self.ray_query = Some(query);
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.set_viewport(width, height);
    }

    pub fn camera_mode(&self) -> CameraMode {
        self.rig.mode()
    }

    pub fn is_turning(&self) -> bool {
        self.orientation.is_turning()
    }

    pub fn is_throw_gesture_active(&self) -> bool {
        self.pose.gesture().is_some()
    }

    pub fn camera_uniform(&self) -> CameraUniform {
        CameraUniform {
            view_proj: self.camera.view_proj().to_cols_array_2d(),
        }
    }

    /// Run the whole pipeline for one display refresh at wall-clock `now_ms`.
    pub fn tick(&mut self, now_ms: f64) -> FrameSnapshot {
        let dt_ms = match self.last_time {
            Some(last) => (now_ms - last).clamp(0.0, MAX_FRAME_MS) as f32,
            None => 0.0,
        };
        self.last_time = Some(now_ms);

        for command in self.input.drain_commands() {
            self.apply_command(command);
        }

        let moved = self.movement.update(&mut self.character, &self.input, self.geometry.as_ref());
        self.moved = moved;

        self.orientation.update(&mut self.character, dt_ms);
        self.pose.update(&mut self.character.limbs, dt_ms, moved, self.ball.in_flight(), now_ms);

        if self.projectile.update(&mut self.ball, &self.character, now_ms) {
            tracing::info!(at = ?self.ball.position, "ball landed");
            self.rig.set_mode(CameraMode::FrontFollow);
        }

        self.rig.update(&mut self.camera, &self.character, &self.ball);

        self.snapshot()
    }

    fn apply_command(&mut self, command: Command) {
        match command {
            Command::SelectCamera(mode) => self.rig.set_mode(mode),
            Command::Rotate(direction) => self.orientation.rotate(&mut self.character, direction),
            Command::Throw { x, y } => self.throw_at(x, y),
        }
    }

    /// Throw towards the pixel `(x, y)`. Ignored while the ball is airborne.
    pub fn throw_at(&mut self, x: f32, y: f32) {
        if self.ball.in_flight() {
            tracing::debug!("throw ignored, ball still in flight");
            return;
        }

        let target = {
            let (origin, dir) = self.camera.screen_ray(x, y);
            let query: Option<&dyn RayQuery> = match (&self.ray_query, &self.geometry) {
                (Some(custom), _) => Some(custom.as_ref()),
                (None, Some(geometry)) => Some(geometry as &dyn RayQuery),
                (None, None) => None,
            };
            self.projectile
                .pick_target(query, origin, dir, self.camera.eye, self.camera.forward())
        };

        if self.projectile.launch(&mut self.ball, self.character.position, target) {
            tracing::info!(from = ?self.ball.start, to = ?target, peak = self.ball.peak, "ball thrown");
            self.rig.set_mode(CameraMode::BallFollow);
            self.pose.start_throw(&self.character.limbs);
        }
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            character_position: self.character.position,
            character_facing: self.character.facing,
            limbs: self.character.limbs,
            pose: self.pose.mode(self.moved),
            ball_position: self.ball.position,
            ball_in_flight: self.ball.in_flight(),
            camera_eye: self.camera.eye,
            camera_yaw: self.camera.yaw,
            camera_pitch: self.camera.pitch,
            camera_mode: self.rig.mode(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_in_home_pose() {
        let sim = Simulation::new(SimConfig::default(), 800, 600);
        assert_eq!(sim.camera_mode(), CameraMode::Default);
        assert_eq!(sim.camera.eye, Vec3::new(0.0, 30.0, 40.0));
        assert_eq!(sim.character.position, Vec3::new(0.0, 7.0, 0.0));
        assert!(sim.geometry().is_none());
    }

    #[test]
    fn test_snapshot_flat_layout() {
        let mut sim = Simulation::new(SimConfig::default(), 800, 600);
        let snap = sim.tick(0.0);
        let flat = snap.to_array();
        assert_eq!(&flat[0..3], &[0.0, 7.0, 0.0]);
        assert_eq!(flat[11], 0.0, "ball grounded");
        assert_eq!(flat[FrameSnapshot::FLAT_LEN - 1], 1.0, "default camera is mode 1");
    }

    #[test]
    fn test_snapshot_pose_follows_movement_and_throw() {
        let mut sim = Simulation::new(SimConfig::default(), 800, 600);
        assert_eq!(sim.tick(0.0).pose, PoseMode::Idle);

        sim.handle_event(&InputEvent::KeyDown("w".to_string()));
        assert_eq!(sim.tick(16.0).pose, PoseMode::Walking);

        sim.throw_at(400.0, 300.0);
        assert_eq!(sim.tick(32.0).pose, PoseMode::Throwing);

        sim.handle_event(&InputEvent::KeyUp("w".to_string()));
        for i in 0..10 {
            sim.tick(48.0 + f64::from(i) * 100.0);
        }
        assert_eq!(sim.snapshot().pose, PoseMode::Idle);
    }

    #[test]
    fn test_camera_uniform_is_pod() {
        let sim = Simulation::new(SimConfig::default(), 800, 600);
        let uniform = sim.camera_uniform();
        assert_eq!(bytemuck::bytes_of(&uniform).len(), 64);
    }
}
