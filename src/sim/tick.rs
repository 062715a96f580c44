//! Per-frame round loop
//!
//! The host calls [`tick`] once per frame after its physics step, passing the
//! contacts that step produced. Entities react to contacts first, then the
//! physics and frame steps run, then the round loop scans the level once:
//! serve/launch, flight speed, dropped ball, score drain, collapsing and
//! collapsed bricks, level clear.

use super::contact::{BodyId, Collider, Contact, Effect};
use super::events::{Entity, GameEvent, ScoreSource};
use super::state::GameState;
use crate::ball_loss_y;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Desired paddle x in field coordinates (from touch/mouse projection)
    pub target_x: Option<f32>,
    /// Release the ball from the paddle
    pub launch: bool,
    /// Pause toggle
    pub pause: bool,
    /// Fly at turbo speed while held (debug/testing)
    pub turbo: bool,
}

/// Outcome of a tick
#[derive(Debug, Default)]
pub struct TickResult {
    /// Events generated this tick, in order
    pub events: Vec<GameEvent>,
    /// Every brick was gone and a new level was generated
    pub round_over: bool,
    /// The ball dropped out and went back to the paddle
    pub ball_lost: bool,
}

/// Advance the game by one frame
pub fn tick(state: &mut GameState, input: &TickInput, contacts: &[Contact], dt: f32) -> TickResult {
    let mut result = TickResult::default();

    if input.pause {
        state.paused = !state.paused;
        result.events.push(if state.paused {
            GameEvent::Paused
        } else {
            GameEvent::Resumed
        });
    }
    // A pause freezes the whole tick
    if state.paused {
        return result;
    }

    state.time_ticks += 1;

    for contact in contacts {
        dispatch_contact(state, contact, &mut result.events);
    }

    // Physics step
    state.ball.fixed_update();
    for cell in &mut state.cells {
        let missed = cell
            .bonus
            .as_mut()
            .is_some_and(|bonus| bonus.fixed_update(dt, &state.tuning));
        if missed {
            result.events.push(GameEvent::BonusMissed { cell: cell.id });
        }
    }

    // Frame step
    if let Some(target_x) = input.target_x {
        state.paddle.move_paddle(target_x);
    }
    state.paddle.update(dt, &state.tuning);
    for brick in state.cells.iter_mut().filter_map(|c| c.brick.as_mut()) {
        brick.update(dt);
    }

    // Serve and flight
    let mut speed = state.tuning.ball_speed;
    if state.ball.is_serving() {
        if input.launch {
            state.ball.launch(speed);
            log::debug!("Ball launched at tick {}", state.time_ticks);
            result.events.push(GameEvent::BallLaunched);
        }
    } else if input.turbo {
        speed = state.tuning.turbo_speed;
    }
    if state.ball.is_serving() {
        state.ball.follow(state.paddle.pos);
    } else {
        state.ball.stabilize_velocity(speed);
    }

    // Dropped ball: back to the paddle, falling bonuses vanish, paddle resets
    let loss_y = ball_loss_y(state.tuning.field_height);
    if !state.ball.is_serving() && state.ball.pos.y < loss_y {
        log::debug!("Ball lost at tick {}", state.time_ticks);
        state.ball.reset_to(state.paddle.pos);
        clear_active_bonuses(state, &mut result.events);
        state.paddle.reset_scale();
        result.ball_lost = true;
        result.events.push(GameEvent::BallLost);
    }

    let points = state.paddle.take_scores();
    if points > 0 {
        state.score += u64::from(points);
        result.events.push(GameEvent::ScoreAwarded {
            points,
            source: ScoreSource::Bonus,
        });
    }

    let round_over = scan_bricks(state, &mut result.events);

    // An empty level (no room for bricks) is never "cleared"
    if round_over && !state.cells.is_empty() {
        let cleared = state.level_index;
        log::info!("Level {} cleared, score {}", cleared + 1, state.score);
        state.ball.reset_to(state.paddle.pos);
        sweep_bonuses(state, &mut result.events);
        state.level_index += 1;
        result.events.push(GameEvent::RoundCleared { level: cleared });
        let bricks = state.prepare_level();
        result.events.push(GameEvent::LevelGenerated {
            level: state.level_index,
            bricks,
        });
        result.round_over = true;
    }

    result
}

/// Award collapsing bricks, remove collapsed ones; true if no brick is left
fn scan_bricks(state: &mut GameState, events: &mut Vec<GameEvent>) -> bool {
    let mut round_over = true;
    for cell in &mut state.cells {
        let Some(brick) = cell.brick.as_mut() else {
            continue;
        };
        if brick.take_collapse_edge() {
            let points = brick.take_scores();
            if points > 0 {
                state.score += u64::from(points);
                events.push(GameEvent::ScoreAwarded {
                    points,
                    source: ScoreSource::Brick(cell.id),
                });
            }
            if let Some(bonus) = cell.bonus.as_mut() {
                if bonus.arm() {
                    events.push(GameEvent::BonusArmed {
                        cell: cell.id,
                        kind: bonus.kind(),
                    });
                }
            }
            round_over = false;
        } else if brick.is_collapsed() {
            cell.brick = None;
            events.push(GameEvent::EntityRemoved(Entity::Brick(cell.id)));
        } else {
            round_over = false;
        }
    }
    round_over
}

/// Remove bonuses that are still falling
fn clear_active_bonuses(state: &mut GameState, events: &mut Vec<GameEvent>) {
    for cell in &mut state.cells {
        if cell.bonus.as_ref().is_some_and(|b| b.is_active()) {
            cell.bonus = None;
            events.push(GameEvent::EntityRemoved(Entity::Bonus(cell.id)));
        }
    }
}

/// Remove every bonus of the level, whatever its state
fn sweep_bonuses(state: &mut GameState, events: &mut Vec<GameEvent>) {
    for cell in &mut state.cells {
        if cell.bonus.take().is_some() {
            events.push(GameEvent::EntityRemoved(Entity::Bonus(cell.id)));
        }
    }
}

/// Resolve a body to the collider its counterpart sees; gone or disabled bodies resolve to nothing
fn resolve(state: &GameState, body: BodyId) -> Option<Collider> {
    match body {
        BodyId::Ball => Some(Collider::Ball),
        BodyId::Paddle => Some(Collider::Paddle),
        BodyId::Field => Some(Collider::Field),
        BodyId::Brick(id) => state
            .cell(id)?
            .brick
            .as_ref()
            .map(|_| Collider::Brick(id)),
        BodyId::Bonus(id) => state
            .cell(id)?
            .bonus
            .as_ref()
            .filter(|b| b.is_active())
            .map(|b| Collider::Bonus {
                cell: id,
                kind: b.kind(),
                y: b.pos.y,
            }),
    }
}

fn deliver(state: &mut GameState, target: BodyId, other: &Collider) -> Option<Effect> {
    let nominal_speed = state.tuning.bonus_speed;
    match target {
        BodyId::Ball => state.ball.on_contact(other),
        BodyId::Paddle => state.paddle.on_contact(other),
        BodyId::Field => None,
        BodyId::Brick(id) => state.cell_mut(id)?.brick.as_mut()?.on_contact(other),
        BodyId::Bonus(id) => state
            .cell_mut(id)?
            .bonus
            .as_mut()?
            .on_contact(other, nominal_speed),
    }
}

/// Hand each side of a contact the other side; unknown pairs are ignored
fn dispatch_contact(state: &mut GameState, contact: &Contact, events: &mut Vec<GameEvent>) {
    if contact.a == contact.b {
        return;
    }
    let (Some(a), Some(b)) = (resolve(state, contact.a), resolve(state, contact.b)) else {
        return;
    };
    let effects = [deliver(state, contact.a, &b), deliver(state, contact.b, &a)];
    for effect in effects.into_iter().flatten() {
        events.push(match effect {
            Effect::Sound(sound) => GameEvent::Sound(sound),
            Effect::BrickStruck(cell) => GameEvent::BrickStruck { cell },
            Effect::BonusCollected { cell, kind } => GameEvent::BonusCollected { cell, kind },
        });
    }
}
