use std::collections::HashSet;
use winit::keyboard::KeyCode;

use crate::config::*;

/// The nine logical controls the simulation understands.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Control {
    Forward,
    Back,
    Left,
    Right,
    Jump,
    CamUp,
    CamDown,
    CamLeft,
    CamRight,
}

pub fn control_for_key(key: KeyCode) -> Option<Control> {
    match key {
        KeyCode::KeyW => Some(Control::Forward),
        KeyCode::KeyS => Some(Control::Back),
        KeyCode::KeyA => Some(Control::Left),
        KeyCode::KeyD => Some(Control::Right),
        KeyCode::Space => Some(Control::Jump),
        KeyCode::ArrowUp => Some(Control::CamUp),
        KeyCode::ArrowDown => Some(Control::CamDown),
        KeyCode::ArrowLeft => Some(Control::CamLeft),
        KeyCode::ArrowRight => Some(Control::CamRight),
        _ => None,
    }
}

/// Live input set, mutated by event delivery between frames. The simulation
/// never reads it directly; it takes one [`InputSnapshot`] per frame.
pub struct InputState {
    pressed: HashSet<Control>,
    yaw: f32,
    pitch: f32,
    pub cursor_grabbed: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            pressed: HashSet::new(),
            yaw: 0.0,
            pitch: 0.0,
            cursor_grabbed: false,
        }
    }

    pub fn press(&mut self, control: Control) {
        self.pressed.insert(control);
    }

    pub fn release(&mut self, control: Control) {
        self.pressed.remove(&control);
    }

    pub fn is_pressed(&self, control: Control) -> bool {
        self.pressed.contains(&control)
    }

    /// Pointer-drag camera deltas. Yaw turns freely; pitch stays in
    /// [-PITCH_LIMIT, PITCH_LIMIT] so the camera cannot flip over.
    pub fn handle_mouse_move(&mut self, dx: f32, dy: f32) {
        self.yaw -= dx * MOUSE_SENSITIVITY;
        self.pitch = (self.pitch - dy * MOUSE_SENSITIVITY).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Folds held camera-pan keys into the angle accumulators. Called once
    /// per frame with the clamped elapsed time.
    pub fn integrate_pan(&mut self, dt: f32) {
        let step = CAM_PAN_SPEED * dt;
        if self.is_pressed(Control::CamLeft) {
            self.yaw += step;
        }
        if self.is_pressed(Control::CamRight) {
            self.yaw -= step;
        }
        if self.is_pressed(Control::CamUp) {
            self.pitch = (self.pitch + step).min(PITCH_LIMIT);
        }
        if self.is_pressed(Control::CamDown) {
            self.pitch = (self.pitch - step).max(-PITCH_LIMIT);
        }
    }

    pub fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            forward: self.is_pressed(Control::Forward),
            back: self.is_pressed(Control::Back),
            left: self.is_pressed(Control::Left),
            right: self.is_pressed(Control::Right),
            jump: self.is_pressed(Control::Jump),
            yaw: self.yaw,
            pitch: self.pitch,
        }
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable per-frame view of the input state.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputSnapshot {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub yaw: f32,
    pub pitch: f32,
}

impl InputSnapshot {
    /// Raw movement axes before camera rotation: each axis is -1, 0 or +1.
    /// Forward is -z, matching the camera convention.
    pub fn move_axes(&self) -> (f32, f32) {
        let mut mx = 0.0;
        let mut mz = 0.0;
        if self.forward {
            mz -= 1.0;
        }
        if self.back {
            mz += 1.0;
        }
        if self.left {
            mx -= 1.0;
        }
        if self.right {
            mx += 1.0;
        }
        (mx, mz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_is_isolated_from_later_edits() {
        let mut input = InputState::new();
        input.press(Control::Forward);
        let snap = input.snapshot();
        input.release(Control::Forward);
        input.press(Control::Jump);
        assert!(snap.forward);
        assert!(!snap.jump);
    }

    #[test]
    fn pitch_clamps_under_any_drag() {
        let mut input = InputState::new();
        for _ in 0..10_000 {
            input.handle_mouse_move(0.0, -50.0);
        }
        assert_eq!(input.snapshot().pitch, PITCH_LIMIT);
        for _ in 0..10_000 {
            input.handle_mouse_move(0.0, 50.0);
        }
        assert_eq!(input.snapshot().pitch, -PITCH_LIMIT);
    }

    #[test]
    fn yaw_has_no_wraparound_clamp() {
        let mut input = InputState::new();
        for _ in 0..10_000 {
            input.handle_mouse_move(-50.0, 0.0);
        }
        assert!(input.snapshot().yaw > std::f32::consts::TAU);
    }

    #[test]
    fn pan_keys_integrate_scaled_by_dt() {
        let mut input = InputState::new();
        input.press(Control::CamLeft);
        input.integrate_pan(0.5);
        assert!((input.snapshot().yaw - CAM_PAN_SPEED * 0.5).abs() < 1e-6);

        input.release(Control::CamLeft);
        input.press(Control::CamUp);
        for _ in 0..100 {
            input.integrate_pan(0.05);
        }
        assert_eq!(input.snapshot().pitch, PITCH_LIMIT);
    }

    #[test]
    fn opposing_axes_cancel() {
        let mut input = InputState::new();
        input.press(Control::Left);
        input.press(Control::Right);
        assert_eq!(input.snapshot().move_axes(), (0.0, 0.0));
    }
}
