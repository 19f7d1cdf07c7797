//! Hold It Together headless demo
//!
//! Plays two scripted rounds against the real simulation and prints their
//! summaries as JSON. Set `RUST_LOG=debug` to watch the feedback stream.

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use hold_it_together::consts::SIM_DT;
    use hold_it_together::sim::autopilot::aim;
    use hold_it_together::sim::{RoundController, RoundPhase};
    use hold_it_together::{Config, FeedbackSettings, GatedPresenter, LogPresenter};

    env_logger::init();
    log::info!("Hold It Together (headless) starting...");

    // Phone-sized portrait viewport
    let config = Config::for_viewport(390.0, 844.0)?;
    let mut game = RoundController::new(config);
    let mut presenter = GatedPresenter::new(LogPresenter::new(), FeedbackSettings::default());
    let mut summaries = Vec::new();

    // Round 1: the pilot holds on for 20 seconds, then lets go
    let center = game.config().field.center();
    game.on_pointer_down(center, &mut presenter);
    for _ in 0..(20 * 60) {
        let target = aim(game.state().orb_position, game.config());
        game.on_pointer_move(target);
        game.advance_frame(SIM_DT, &mut presenter);
    }
    game.on_pointer_up(&mut presenter);
    summaries.extend(game.last_summary().copied());

    // Round 2: finger frozen in place until chaos wins (capped at 5 minutes)
    game.on_pointer_down(center, &mut presenter);
    let mut frames = 0;
    while game.phase() == RoundPhase::Running && frames < 5 * 60 * 60 {
        game.advance_frame(SIM_DT, &mut presenter);
        frames += 1;
    }
    game.on_pointer_up(&mut presenter);
    summaries.extend(game.last_summary().copied());

    log::info!(
        "Demo finished, {} impact cues sent",
        presenter.inner().impacts()
    );
    println!("{}", serde_json::to_string_pretty(&summaries)?);
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Hosts embed the library directly; there is no wasm entry point
}
