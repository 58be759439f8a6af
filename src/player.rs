use glam::Vec3;

use crate::config::*;
use crate::input::InputSnapshot;

/// Character state, owned by the game loop. Everything else reads it.
pub struct Player {
    pub position: Vec3,
    pub velocity: Vec3,
    pub on_ground: bool,
    /// Heading in radians; holds its last value while idle.
    pub facing: f32,
    pub last_checkpoint: Vec3,
    pub checkpoint_level: u32,
}

impl Player {
    pub fn new(spawn_position: Vec3) -> Self {
        Self {
            position: spawn_position,
            velocity: Vec3::ZERO,
            on_ground: false,
            facing: 0.0,
            // respawn anchor above the spawn pad until a checkpoint is reached
            last_checkpoint: Vec3::new(0.0, 3.0, 0.0),
            checkpoint_level: 0,
        }
    }

    /// One fixed substep of control and free movement; collision resolution
    /// runs afterwards and may pull the character back onto a platform.
    ///
    /// Horizontal velocity is replaced outright from the camera-rotated
    /// input axes (instant direction changes, no inertia); only the vertical
    /// axis integrates.
    pub fn integrate(&mut self, input: &InputSnapshot, dt: f32) {
        let (mx, mz) = input.move_axes();
        let (sin, cos) = input.yaw.sin_cos();
        self.velocity.x = (mx * cos + mz * sin) * MOVE_SPEED;
        self.velocity.z = (mz * cos - mx * sin) * MOVE_SPEED;

        if input.jump && self.on_ground {
            self.velocity.y = JUMP_FORCE;
            self.on_ground = false;
        }
        self.velocity.y += GRAVITY * dt;

        self.position += self.velocity * dt;

        if mx != 0.0 || mz != 0.0 {
            self.facing = self.velocity.x.atan2(self.velocity.z);
        }
    }

    /// Bottom of the 2-unit body.
    pub fn bottom(&self) -> f32 {
        self.position.y - PLAYER_HALF_HEIGHT
    }

    /// Snap onto a platform top and stop any descent.
    pub fn land(&mut self, top: f32) {
        self.position.y = top + PLAYER_HALF_HEIGHT;
        self.velocity.y = self.velocity.y.max(0.0);
        self.on_ground = true;
    }

    /// Advance the respawn anchor. Monotonic in level: landing back on an
    /// earlier checkpoint never regresses it. Returns whether it advanced.
    pub fn reach_checkpoint(&mut self, level: u32, anchor: Vec3) -> bool {
        if level <= self.checkpoint_level {
            return false;
        }
        self.checkpoint_level = level;
        self.last_checkpoint = anchor;
        true
    }

    pub fn respawn(&mut self) {
        self.position = self.last_checkpoint + Vec3::new(0.0, RESPAWN_LIFT, 0.0);
        self.velocity = Vec3::ZERO;
        self.on_ground = true;
    }
}
