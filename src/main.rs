#[cfg(target_arch = "wasm32")]
fn main() {
    obby_tower::app::run();
}

/// Headless session for native runs: hold forward and hop for ten seconds,
/// then report where the climb ended up.
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use obby_tower::game::GameState;
    use obby_tower::input::{Control, InputState};

    env_logger::init();

    let mut game = GameState::new();
    let mut input = InputState::new();
    input.press(Control::Forward);

    for frame in 0..600 {
        if frame % 45 == 0 {
            input.press(Control::Jump);
        } else {
            input.release(Control::Jump);
        }
        game.advance(1.0 / 60.0, &mut input);
    }

    let progress = game.progress();
    log::info!(
        "session over: height {:.1}m, zone {}, stage {}, {} checkpoints, {:.1}%",
        progress.height,
        progress.zone.label(),
        progress.stage,
        progress.checkpoints,
        progress.percent
    );
}
