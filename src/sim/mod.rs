//! Deterministic gameplay rules
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only advances through the `dt` handed to `tick`
//! - Seeded RNG only
//! - Stable iteration order (by cell id)
//! - No rendering, audio or platform dependencies

pub mod ball;
pub mod bonus;
pub mod bounds;
pub mod brick;
pub mod contact;
pub mod events;
pub mod level;
pub mod paddle;
pub mod state;
pub mod tick;

pub use ball::Ball;
pub use bonus::{Bonus, BonusState};
pub use bounds::Aabb;
pub use brick::{Brick, BrickPhase};
pub use contact::{BodyId, Collider, Contact, Effect};
pub use events::{Entity, GameEvent, ScoreSource};
pub use level::{BonusKind, BrickSkin, Cell, CellId, generate_level, grid_size};
pub use paddle::Paddle;
pub use state::{GamePhase, GameState, RngState};
pub use tick::{TickInput, TickResult, tick};
