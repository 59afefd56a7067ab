use glam::{Mat4, Vec2, Vec3};

/// Slightly less than π/2 to avoid gimbal lock.
const MAX_PITCH: f32 = 1.5533;

/// Perspective camera described by eye position plus yaw/pitch.
#[derive(Debug, Clone)]
pub struct Camera {
    pub eye: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub up: Vec3,
    pub fov_y: f32,
    pub aspect: f32,
    pub z_near: f32,
    pub z_far: f32,
    pub viewport: Vec2,
}

impl Camera {
    pub fn new(width: u32, height: u32) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            eye: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            up: Vec3::Y,
            fov_y: 75f32.to_radians(),
            aspect: width as f32 / height as f32,
            z_near: 0.1,
            z_far: 1000.0,
            viewport: Vec2::new(width as f32, height as f32),
        }
    }

    pub fn forward(&self) -> Vec3 {
        let cy = self.yaw;
        let cp = self.pitch.clamp(-MAX_PITCH, MAX_PITCH);
        Vec3::new(cy.cos() * cp.cos(), cp.sin(), cy.sin() * cp.cos()).normalize()
    }

    pub fn target(&self) -> Vec3 { self.eye + self.forward() }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        let width = width.max(1);
        let height = height.max(1);
        self.viewport = Vec2::new(width as f32, height as f32);
        self.aspect = width as f32 / height as f32;
    }

    pub fn view_proj(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye, self.target(), self.up);
        let proj = Mat4::perspective_rh(self.fov_y, self.aspect, self.z_near, self.z_far);
        proj * view
    }

    /// Turn towards `target`. Does nothing if `target` coincides with the eye.
    pub fn set_look_at(&mut self, target: Vec3) {
        let Some(dir) = (target - self.eye).try_normalize() else {
            return;
        };
        self.yaw = dir.z.atan2(dir.x);
        self.pitch = dir.y.clamp(-1.0, 1.0).asin().clamp(-MAX_PITCH, MAX_PITCH);
    }

    /// World-space ray through a pixel of the viewport, as `(origin, unit direction)`.
    pub fn screen_ray(&self, x: f32, y: f32) -> (Vec3, Vec3) {
        let ndc = Vec2::new(
            (x / self.viewport.x) * 2.0 - 1.0,
            1.0 - (y / self.viewport.y) * 2.0,
        );
        // Unproject a point just past the near plane; the far plane loses too much precision
        let inv = self.view_proj().inverse();
        let point = inv.project_point3(ndc.extend(0.5));
        let dir = (point - self.eye).try_normalize().unwrap_or_else(|| self.forward());
        (self.eye, dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_look_at_points_forward_at_target() {
        let mut cam = Camera::new(800, 600);
        cam.eye = Vec3::new(0.0, 30.0, 40.0);
        cam.set_look_at(Vec3::ZERO);
        let expected = Vec3::new(0.0, -30.0, -40.0).normalize();
        assert!(cam.forward().abs_diff_eq(expected, 1e-5), "forward {:?}", cam.forward());
    }

    #[test]
    fn test_look_at_steeply_below_is_exact() {
        let mut cam = Camera::new(800, 600);
        cam.eye = Vec3::new(0.0, 30.0, 2.0);
        let target = Vec3::new(0.5, 1.0, 0.0);
        cam.set_look_at(target);
        let expected = (target - cam.eye).normalize();
        assert!(cam.pitch < -1.4, "pitch {}", cam.pitch);
        assert!(cam.forward().angle_between(expected) < 1e-3, "forward {:?}", cam.forward());
    }

    #[test]
    fn test_look_at_self_keeps_orientation() {
        let mut cam = Camera::new(800, 600);
        cam.yaw = 0.7;
        cam.pitch = -0.2;
        cam.set_look_at(cam.eye);
        assert_eq!((cam.yaw, cam.pitch), (0.7, -0.2));
    }

    #[test]
    fn test_screen_center_ray_matches_forward() {
        let mut cam = Camera::new(1280, 720);
        cam.eye = Vec3::new(3.0, 8.0, -2.0);
        cam.set_look_at(Vec3::new(-4.0, 1.0, 6.0));
        let (origin, dir) = cam.screen_ray(640.0, 360.0);
        assert_eq!(origin, cam.eye);
        assert!(dir.abs_diff_eq(cam.forward(), 1e-3), "dir {dir:?} forward {:?}", cam.forward());
    }

    #[test]
    fn test_screen_top_ray_tilts_up() {
        let mut cam = Camera::new(800, 600);
        cam.set_look_at(Vec3::new(0.0, 0.0, -1.0));
        let (_, dir) = cam.screen_ray(400.0, 0.0);
        assert!(dir.y > 0.0, "top of screen should look upward, got {dir:?}");
    }
}
