//! Role&Roll dice-pool engine.
//!
//! Rolls pools of d6s whose faces are decided per die (normal, advantage or
//! negative), chases reroll faces round by round, and scores the pool into
//! a final total. Also ships the dice tray parser and a plain-text chat
//! summary for front-ends.
//!
//! ```
//! use rr_engine::{Bonuses, DieConfig, PoolResolver, ScriptedSource};
//!
//! let mut resolver = PoolResolver::new(ScriptedSource::new([1, 6, 6, 3, 2, 1, 3]));
//! let outcome = resolver
//!     .resolve_pool(&[DieConfig::normal(); 5], Bonuses::new(1, 0))
//!     .finish();
//! assert_eq!(outcome.score.final_total, 5);
//! ```

pub mod config;
pub mod dice;
pub mod error;
pub mod render;
pub mod resolution;
pub mod tray;

pub use config::RollConfig;
pub use dice::{
    DieConfig, DieFaceLayout, DieKind, DieResult, DieSource, Face, FixedSource, RollObserver,
    Round, ScriptedSource, face_for, layout,
};
pub use error::{EngineError, EngineResult};
pub use resolution::{
    Bonuses, PendingPool, PoolOutcome, PoolResolver, PoolScore, PoolStep, RerollPolicy,
};
pub use tray::Tray;
