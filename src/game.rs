use glam::Vec3;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use web_time::Instant;

use crate::camera::FollowCamera;
use crate::collision;
use crate::config::*;
use crate::input::{InputSnapshot, InputState};
use crate::player::Player;
use crate::progress::{ProgressState, ProgressTracker};
use crate::tower::{Decor, PlatformKind, Tower, scatter_decor};

/// The whole simulation: character, tower, camera and derived progress.
/// Driven once per animation frame; renderers and the HUD only read from it.
pub struct GameState {
    pub player: Player,
    pub tower: Tower,
    pub camera: FollowCamera,
    decor: Vec<Decor>,
    progress: ProgressTracker,
    last_update: Instant,
    pending_checkpoints: Vec<u32>,
    respawned: bool,
    victory_seen: bool,
}

impl GameState {
    pub fn new() -> Self {
        let mut rng = SmallRng::from_rng(&mut rand::rng());
        Self {
            player: Player::new(Vec3::new(0.0, 2.0, 0.0)),
            tower: Tower::generate(TOTAL_LEVELS),
            camera: FollowCamera::new(),
            decor: scatter_decor(&mut rng),
            progress: ProgressTracker::new(),
            last_update: Instant::now(),
            pending_checkpoints: Vec::new(),
            respawned: false,
            victory_seen: false,
        }
    }

    /// One frame driven by wall time. Elapsed time is clamped so a stalled
    /// or backgrounded tab resumes without a velocity spike.
    pub fn update(&mut self, input: &mut InputState) {
        let now = Instant::now();
        let dt = (now - self.last_update).as_secs_f32();
        self.last_update = now;
        self.advance(dt, input);
    }

    /// The timing-independent frame body; tests and the headless session
    /// drive this directly. The clamped interval is subdivided into fixed
    /// substeps so per-step displacement stays bounded under frame jitter.
    pub fn advance(&mut self, dt: f32, input: &mut InputState) {
        let dt = dt.min(MAX_FRAME_DT);
        input.integrate_pan(dt);
        let snap = input.snapshot();

        let steps = ((dt / SUBSTEP_DT).ceil() as u32).max(1);
        let step_dt = dt / steps as f32;
        for _ in 0..steps {
            self.step(&snap, step_dt);
        }

        self.camera.follow(self.player.position, snap.yaw, snap.pitch);

        if !self.victory_seen && self.progress().victory {
            self.victory_seen = true;
            log::info!("tower conquered at height {:.1}", self.player.position.y);
        }
    }

    fn step(&mut self, snap: &InputSnapshot, dt: f32) {
        self.player.integrate(snap, dt);

        let support = collision::find_support(&self.tower, self.player.position, self.player.velocity)
            .map(|p| (p.level, p.kind, p.top()));
        match support {
            Some((level, kind, top)) => {
                self.player.land(top);
                if kind == PlatformKind::Normal {
                    self.try_checkpoint(level);
                }
            }
            None => self.player.on_ground = false,
        }

        if self.player.position.y < FALL_LIMIT {
            log::info!(
                "fell out at y {:.1}, respawning at checkpoint level {}",
                self.player.position.y,
                self.player.checkpoint_level
            );
            self.player.respawn();
            self.respawned = true;
        }
    }

    /// Landing on a checkpoint's host platform close enough to the marker
    /// arms it as the new respawn anchor. Re-triggering an old one is a
    /// no-op, so the event fires once per checkpoint.
    fn try_checkpoint(&mut self, level: u32) {
        let Some(marker) = self.tower.checkpoint_at(level) else {
            return;
        };
        let dx = self.player.position.x - marker.position.x;
        let dz = self.player.position.z - marker.position.z;
        if (dx * dx + dz * dz).sqrt() >= CHECKPOINT_RADIUS {
            return;
        }
        let anchor = marker.position;
        if self.player.reach_checkpoint(level, anchor) {
            log::info!("checkpoint {} reached", level);
            self.progress.record_checkpoint(level);
            self.pending_checkpoints.push(level);
        }
    }

    pub fn progress(&self) -> ProgressState {
        self.progress.state(self.player.position.y)
    }

    pub fn decor(&self) -> &[Decor] {
        &self.decor
    }

    /// Checkpoint levels reached since the last call.
    pub fn take_checkpoints(&mut self) -> Vec<u32> {
        std::mem::take(&mut self.pending_checkpoints)
    }

    /// Whether a fall-through respawn happened since the last call.
    pub fn take_respawn(&mut self) -> bool {
        std::mem::take(&mut self.respawned)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Control;
    use crate::tower::level_position;

    fn resting_on_spawn() -> (GameState, InputState) {
        let mut game = GameState::new();
        game.player.position = Vec3::new(0.0, 1.25, 0.0);
        game.player.on_ground = true;
        (game, InputState::new())
    }

    /// Step until the character settles on something, bounded.
    fn settle(game: &mut GameState, input: &mut InputState) {
        for _ in 0..600 {
            game.advance(SUBSTEP_DT, input);
            if game.player.on_ground {
                return;
            }
        }
        panic!("never landed");
    }

    #[test]
    fn resting_character_does_not_jitter() {
        let (mut game, mut input) = resting_on_spawn();
        for _ in 0..120 {
            game.advance(SUBSTEP_DT, &mut input);
            assert_eq!(game.player.position.y, 1.25);
            assert!(game.player.on_ground);
            assert!(game.player.velocity.y >= 0.0);
        }
    }

    #[test]
    fn jump_scenario_from_spawn() {
        let (mut game, mut input) = resting_on_spawn();
        input.press(Control::Jump);
        game.advance(SUBSTEP_DT, &mut input);

        assert!((game.player.velocity.y - 17.44).abs() < 0.01);
        assert!(!game.player.on_ground);
        assert!(game.player.position.y > 1.25);
    }

    #[test]
    fn fall_through_respawns_in_the_same_step() {
        let mut game = GameState::new();
        let mut input = InputState::new();
        game.player.position = Vec3::new(0.0, -9.8, 0.0);
        game.player.velocity = Vec3::new(0.0, -20.0, 0.0);

        game.advance(SUBSTEP_DT, &mut input);

        assert_eq!(game.player.position, Vec3::new(0.0, 4.0, 0.0));
        assert_eq!(game.player.velocity, Vec3::ZERO);
        assert!(game.player.on_ground);
        assert!(game.take_respawn());
        assert!(!game.take_respawn());
    }

    #[test]
    fn stalled_frame_matches_a_clamped_frame() {
        let mut input = InputState::new();
        input.press(Control::Forward);

        let mut stalled = GameState::new();
        let mut steady = GameState::new();
        stalled.advance(0.5, &mut input);
        steady.advance(MAX_FRAME_DT, &mut input);

        assert_eq!(stalled.player.position, steady.player.position);
        assert_eq!(stalled.player.velocity, steady.player.velocity);
    }

    #[test]
    fn fall_speed_stays_bounded() {
        let mut game = GameState::new();
        let mut input = InputState::new();
        // off to the side, nothing to land on
        game.player.position = Vec3::new(30.0, 200.0, 30.0);

        let frames = 40;
        for _ in 0..frames {
            game.advance(MAX_FRAME_DT, &mut input);
        }
        let bound = -GRAVITY * MAX_FRAME_DT * frames as f32;
        assert!(game.player.velocity.y.abs() <= bound + 1e-3);
        assert!((game.player.velocity.y - GRAVITY * MAX_FRAME_DT * frames as f32).abs() < 1e-2);
    }

    #[test]
    fn checkpoint_reached_once_and_monotonic() {
        let mut game = GameState::new();
        let mut input = InputState::new();

        let drop_onto = |game: &mut GameState, input: &mut InputState, level: u32| {
            let p = level_position(level);
            game.player.position = Vec3::new(p.x, p.y + 2.5, p.z);
            game.player.velocity = Vec3::ZERO;
            game.player.on_ground = false;
            settle(game, input);
        };

        drop_onto(&mut game, &mut input, 8);
        assert_eq!(game.take_checkpoints(), vec![8]);
        assert_eq!(game.player.checkpoint_level, 8);

        // standing there re-triggers nothing
        for _ in 0..30 {
            game.advance(SUBSTEP_DT, &mut input);
        }
        assert!(game.take_checkpoints().is_empty());
        assert_eq!(game.progress().checkpoints, 1);

        drop_onto(&mut game, &mut input, 16);
        assert_eq!(game.take_checkpoints(), vec![16]);
        assert_eq!(game.progress().checkpoints, 2);

        // descending to an earlier checkpoint never regresses the anchor
        drop_onto(&mut game, &mut input, 8);
        assert!(game.take_checkpoints().is_empty());
        assert_eq!(game.player.checkpoint_level, 16);
        assert_eq!(game.progress().checkpoints, 2);
    }

    #[test]
    fn landing_on_a_plain_level_arms_nothing() {
        let mut game = GameState::new();
        let mut input = InputState::new();
        let p = level_position(5);
        game.player.position = Vec3::new(p.x, p.y + 2.5, p.z);
        settle(&mut game, &mut input);

        assert!(game.take_checkpoints().is_empty());
        assert_eq!(game.player.checkpoint_level, 0);
    }

    #[test]
    fn zero_dt_frame_is_harmless() {
        let (mut game, mut input) = resting_on_spawn();
        game.advance(0.0, &mut input);
        assert_eq!(game.player.position.y, 1.25);
        assert!(game.player.on_ground);
    }
}
