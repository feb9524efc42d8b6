use super::constants::*;
use glam::{Mat4, Vec3};

/// Right-handed perspective camera. The projection is always derived from the
/// current `aspect`, so there is no cached matrix to go stale.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Orbit controls around `Camera::target` with damped motion.
///
/// Input only accumulates deltas; [`OrbitControls::update`] applies a fraction
/// of them each tick and decays the rest.
#[derive(Clone, Debug)]
pub struct OrbitControls {
    pub damping: f32,
    pub rotate_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    theta: f32,
    phi: f32,
    radius: f32,
    delta_theta: f32,
    delta_phi: f32,
    scale: f32,
}

impl OrbitControls {
    pub fn new(camera: &Camera) -> Self {
        let offset = camera.eye - camera.target;
        let radius = offset.length().max(CAMERA_NEAR);
        let theta = offset.x.atan2(offset.z);
        let phi = (offset.y / radius).clamp(-1.0, 1.0).acos();
        Self {
            damping: ORBIT_DAMPING,
            rotate_speed: ORBIT_ROTATE_SPEED,
            min_distance: camera.znear,
            max_distance: camera.zfar,
            theta,
            phi,
            radius,
            delta_theta: 0.0,
            delta_phi: 0.0,
            scale: 1.0,
        }
    }

    /// Pointer drag in pixels; a full viewport height spins one turn.
    pub fn rotate(&mut self, dx_px: f32, dy_px: f32, viewport_height_px: f32) {
        let h = viewport_height_px.max(1.0);
        let turn = std::f32::consts::TAU * self.rotate_speed / h;
        self.delta_theta -= dx_px * turn;
        self.delta_phi -= dy_px * turn;
    }

    /// Wheel notches; positive values move away from the target.
    pub fn dolly(&mut self, notches: f32) {
        self.scale *= ORBIT_ZOOM_STEP.powf(-notches);
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn angles(&self) -> (f32, f32) {
        (self.theta, self.phi)
    }

    /// Apply pending motion to `camera`. Returns true while still moving.
    pub fn update(&mut self, camera: &mut Camera) -> bool {
        self.theta += self.delta_theta * self.damping;
        self.phi += self.delta_phi * self.damping;
        self.phi = self
            .phi
            .clamp(ORBIT_POLE_EPSILON, std::f32::consts::PI - ORBIT_POLE_EPSILON);
        self.radius = (self.radius * self.scale).clamp(self.min_distance, self.max_distance);

        let sin_phi = self.phi.sin();
        let offset = Vec3::new(
            self.radius * sin_phi * self.theta.sin(),
            self.radius * self.phi.cos(),
            self.radius * sin_phi * self.theta.cos(),
        );
        camera.eye = camera.target + offset;

        self.delta_theta *= 1.0 - self.damping;
        self.delta_phi *= 1.0 - self.damping;
        self.scale = 1.0;
        self.delta_theta.abs() > 1e-6 || self.delta_phi.abs() > 1e-6
    }
}
