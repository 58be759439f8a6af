use glam::{Mat4, Vec3};

use crate::config::*;

/// Third-person orbit camera. The orbit target is a pure function of the
/// character position and the camera angles; the on-screen position trails
/// it by exponential smoothing, the only deliberately lagged quantity in
/// the simulation.
pub struct FollowCamera {
    pub position: Vec3,
    pub look_at: Vec3,
}

impl FollowCamera {
    pub fn new() -> Self {
        Self {
            position: Vec3::new(12.0, 6.0, 12.0),
            look_at: Vec3::ZERO,
        }
    }

    /// Where the camera wants to be for the given character and angles.
    pub fn orbit_target(character: Vec3, yaw: f32, pitch: f32) -> Vec3 {
        Vec3::new(
            character.x + yaw.sin() * CAM_DISTANCE,
            character.y + CAM_HEIGHT + pitch * CAM_PITCH_RISE,
            character.z + yaw.cos() * CAM_DISTANCE,
        )
    }

    /// One frame of follow: ease toward the orbit target, aim at the
    /// character's upper body.
    pub fn follow(&mut self, character: Vec3, yaw: f32, pitch: f32) {
        let target = Self::orbit_target(character, yaw, pitch);
        self.position = self.position.lerp(target, CAM_SMOOTHING);
        self.look_at = character + Vec3::new(0.0, CAM_LOOK_HEIGHT, 0.0);
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.look_at, Vec3::Y)
    }
}

impl Default for FollowCamera {
    fn default() -> Self {
        Self::new()
    }
}
