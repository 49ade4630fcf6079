//! Error types for the dice-pool engine.

/// Errors raised while turning caller input into a dice pool.
///
/// Resolution and scoring never fail; every variant here is an input
/// rejection that happens before any die is rolled.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// More dice were requested than the configured cap allows.
    #[error("too many dice: {requested} requested, at most {max} allowed")]
    TooManyDice {
        /// Number of dice the caller asked for.
        requested: u32,
        /// The configured cap.
        max: u32,
    },

    /// More special dice were listed than the total die count.
    #[error("{specials} special dice listed but only {total} dice in the pool")]
    TooManySpecials {
        /// Number of advantage/negative dice listed.
        specials: u32,
        /// The total die count given.
        total: u32,
    },

    /// The request resolves to an empty pool.
    #[error("no dice to roll")]
    NoDice,

    /// Die configuration data could not be read.
    #[error("invalid die config: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidConfig(err.to_string())
    }
}

/// Convenience result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
