//! Die configurations, faces, and rolling.
//!
//! Every die in a Role&Roll pool is a d6. What changes between dice is the
//! face layout: a normal die has only a point and a reroll face, an
//! advantage die turns some blank sides into plus tokens and a negative die
//! turns them into minus tokens.

pub mod layout;
pub mod roll;
pub mod source;

pub use layout::{DieFaceLayout, face_for, face_for_value, layout};
pub use roll::{DieResult, Round};
pub use source::{DieSource, FixedSource, RollObserver, ScriptedSource};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::EngineResult;

/// Smallest number of plus/minus faces a special die carries.
pub const MIN_SPECIAL_FACES: u8 = 1;

/// Largest number of plus/minus faces a special die carries.
pub const MAX_SPECIAL_FACES: u8 = 4;

/// The kind of a die, which decides what its middle faces show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DieKind {
    /// Point, four blanks, reroll.
    #[default]
    Normal,
    /// Some blanks replaced with plus tokens.
    Advantage,
    /// Some blanks replaced with minus tokens.
    Negative,
}

impl DieKind {
    /// Parse a kind name. Unknown names fall back to [`DieKind::Normal`].
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "advantage" => Self::Advantage,
            "negative" => Self::Negative,
            _ => Self::Normal,
        }
    }
}

impl std::fmt::Display for DieKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::Advantage => write!(f, "advantage"),
            Self::Negative => write!(f, "negative"),
        }
    }
}

/// The configuration of a single die.
///
/// The plus/minus count is clamped into `1..=4` at construction and is only
/// reported for the kind it belongs to. Values are `Copy`, so queuing a die
/// for reroll is a plain copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "WireDieConfig", from = "RawDieConfig")]
pub struct DieConfig {
    kind: DieKind,
    count: u8,
}

impl Default for DieConfig {
    fn default() -> Self {
        Self::normal()
    }
}

impl DieConfig {
    /// A normal die.
    pub fn normal() -> Self {
        Self {
            kind: DieKind::Normal,
            count: MIN_SPECIAL_FACES,
        }
    }

    /// An advantage die with `plus` plus faces (clamped to 1-4).
    pub fn advantage(plus: i64) -> Self {
        Self::new(DieKind::Advantage, Some(plus))
    }

    /// A negative die with `minus` minus faces (clamped to 1-4).
    pub fn negative(minus: i64) -> Self {
        Self::new(DieKind::Negative, Some(minus))
    }

    /// Build a config from a kind and an optional face count.
    ///
    /// A missing count defaults to 1. The count is clamped to 1-4.
    pub fn new(kind: DieKind, count: Option<i64>) -> Self {
        Self {
            kind,
            count: clamp_special_count(count.unwrap_or(1)),
        }
    }

    /// Read a config leniently from a JSON value.
    ///
    /// Unknown kinds become normal dice, numeric strings are accepted and
    /// anything non-numeric falls back to a count of 1. Only values that are
    /// not objects are rejected.
    pub fn from_json(value: &Value) -> EngineResult<Self> {
        Ok(serde_json::from_value(value.clone())?)
    }

    /// Read a list of configs from JSON text holding an array of objects.
    pub fn list_from_json(text: &str) -> EngineResult<Vec<Self>> {
        Ok(serde_json::from_str(text)?)
    }

    /// The die kind.
    pub fn kind(&self) -> DieKind {
        self.kind
    }

    /// Number of plus faces, for advantage dice only.
    pub fn plus_count(&self) -> Option<u8> {
        (self.kind == DieKind::Advantage).then_some(self.count)
    }

    /// Number of minus faces, for negative dice only.
    pub fn minus_count(&self) -> Option<u8> {
        (self.kind == DieKind::Negative).then_some(self.count)
    }

    /// Returns true for advantage and negative dice.
    pub fn is_special(&self) -> bool {
        self.kind != DieKind::Normal
    }
}

/// Tray token form: `d6`, `a2`, `n1`.
impl std::fmt::Display for DieConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            DieKind::Normal => write!(f, "d6"),
            DieKind::Advantage => write!(f, "a{}", self.count),
            DieKind::Negative => write!(f, "n{}", self.count),
        }
    }
}

/// Clamp a plus/minus count into `1..=4`.
pub fn clamp_special_count(count: i64) -> u8 {
    count.clamp(i64::from(MIN_SPECIAL_FACES), i64::from(MAX_SPECIAL_FACES)) as u8
}

/// Coerce a loosely typed host value to an integer.
///
/// Integers are taken as-is, floats are truncated and numeric strings are
/// parsed. Everything else yields `None`.
pub fn coerce_number(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_u64().map(|_| i64::MAX))
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>().ok().or_else(|| {
                s.parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite())
                    .map(|f| f as i64)
            })
        }
        _ => None,
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WireDieConfig {
    kind: DieKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    plus_count: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    minus_count: Option<u8>,
}

impl From<DieConfig> for WireDieConfig {
    fn from(config: DieConfig) -> Self {
        Self {
            kind: config.kind,
            plus_count: config.plus_count(),
            minus_count: config.minus_count(),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDieConfig {
    #[serde(default)]
    kind: Value,
    #[serde(default)]
    plus_count: Value,
    #[serde(default)]
    minus_count: Value,
}

impl From<RawDieConfig> for DieConfig {
    fn from(raw: RawDieConfig) -> Self {
        let kind = raw.kind.as_str().map(DieKind::parse).unwrap_or_default();
        let count = match kind {
            DieKind::Normal => None,
            DieKind::Advantage => coerce_number(&raw.plus_count),
            DieKind::Negative => coerce_number(&raw.minus_count),
        };
        Self::new(kind, count)
    }
}

/// The symbolic outcome of one die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Face {
    /// One point.
    Point,
    /// One point, and the die is rolled again.
    Reroll,
    /// A bonus token.
    Plus,
    /// A penalty token.
    Minus,
    /// Nothing.
    Blank,
}

impl Face {
    /// The chat symbol for this face.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Point => "●",
            Self::Reroll => "⟳",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Blank => "○",
        }
    }

    /// Returns true if the face is worth a base point.
    pub fn is_point(self) -> bool {
        matches!(self, Self::Point | Self::Reroll)
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Point => write!(f, "point"),
            Self::Reroll => write!(f, "reroll"),
            Self::Plus => write!(f, "plus"),
            Self::Minus => write!(f, "minus"),
            Self::Blank => write!(f, "blank"),
        }
    }
}
