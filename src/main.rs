//! Arkanoid headless runner
//!
//! Plays one scripted session against the rules: the ball is launched, then a
//! brick is struck at a fixed cadence and every falling bonus is caught, until
//! the first level is cleared or the tick cap is reached. Prints a JSON summary.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::PathBuf;

    use arkanoid::Tuning;
    use arkanoid::consts::SIM_DT;
    use arkanoid::sim::{BodyId, BrickPhase, Contact, GameEvent, GameState, TickInput, tick};
    use serde::Serialize;

    const STRIKE_EVERY: u64 = 12;
    const MAX_TICKS: u64 = 20_000;

    struct Args {
        seed: u64,
        tuning: Option<PathBuf>,
    }

    #[derive(Serialize)]
    struct Summary {
        seed: u64,
        ticks: u64,
        score: u64,
        level: u32,
    }

    fn parse_args() -> Result<Args, String> {
        let mut args = Args {
            seed: 12345,
            tuning: None,
        };
        let mut iter = std::env::args().skip(1);
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--seed" => {
                    let value = iter.next().ok_or("--seed needs a value")?;
                    args.seed = value
                        .parse()
                        .map_err(|e| format!("invalid seed {value:?}: {e}"))?;
                }
                "--tuning" => {
                    let value = iter.next().ok_or("--tuning needs a path")?;
                    args.tuning = Some(PathBuf::from(value));
                }
                other => return Err(format!("unknown argument {other:?}")),
            }
        }
        Ok(args)
    }

    /// Contacts the scripted player produces this tick
    fn scripted_contacts(state: &GameState) -> Vec<Contact> {
        let mut contacts = Vec::new();

        if state.time_ticks % STRIKE_EVERY == 0 {
            let target = state
                .cells
                .iter()
                .filter_map(|c| c.brick.as_ref())
                .find(|b| b.phase() == BrickPhase::Idle);
            if let Some(brick) = target {
                contacts.push(Contact::new(BodyId::Ball, BodyId::Brick(brick.cell)));
            }
        }

        for cell in &state.cells {
            if cell.bonus.as_ref().is_some_and(|b| b.is_active()) {
                contacts.push(Contact::new(BodyId::Paddle, BodyId::Bonus(cell.id)));
            }
        }

        contacts
    }

    pub fn run() -> Result<(), String> {
        let args = parse_args()?;
        let tuning = args
            .tuning
            .as_deref()
            .map(Tuning::load)
            .unwrap_or_default();

        let mut state = GameState::with_tuning(args.seed, tuning);
        log::info!("Seed {}: {} bricks", args.seed, state.bricks_remaining());

        let launch = TickInput {
            launch: true,
            ..Default::default()
        };
        let mut result = tick(&mut state, &launch, &[], SIM_DT);

        let idle = TickInput::default();
        while !result.round_over && state.time_ticks < MAX_TICKS {
            let contacts = scripted_contacts(&state);
            result = tick(&mut state, &idle, &contacts, SIM_DT);
            for event in &result.events {
                match event {
                    GameEvent::BonusCollected { kind, .. } => log::debug!("Collected {kind:?}"),
                    GameEvent::RoundCleared { level } => log::info!("Level {level} cleared"),
                    _ => {}
                }
            }
        }

        if !result.round_over {
            log::warn!(
                "Tick cap reached with {} bricks left",
                state.bricks_remaining()
            );
        }

        let summary = Summary {
            seed: state.seed,
            ticks: state.time_ticks,
            score: state.score,
            level: state.level_index,
        };
        let json = serde_json::to_string_pretty(&summary).map_err(|e| e.to_string())?;
        println!("{json}");
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    if let Err(e) = headless::run() {
        log::error!("{e}");
        eprintln!("error: {e}");
        std::process::exit(2);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The rules library is the wasm artifact; there is no browser runner
}
