//! Face layouts: which symbol sits on which side of a die.
//!
//! Side 1 is always a point and side 6 always a reroll. Sides 2-5 start
//! blank and are overwritten from side 2 upward with plus faces (advantage)
//! or minus faces (negative), one per configured count.

use serde::Serialize;
use serde_json::Value;

use super::{DieConfig, DieKind, Face, coerce_number};

/// Number of sides on every Role&Roll die.
pub const SIDES: usize = 6;

/// The six faces of a die, indexed by pip count minus one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DieFaceLayout([Face; SIDES]);

impl DieFaceLayout {
    /// The face shown when the die lands on `pips` (1-6).
    ///
    /// Out-of-range values are clamped onto the nearest side.
    pub fn face(&self, pips: i64) -> Face {
        self.0[clamp_pips(pips) as usize - 1]
    }

    /// All six faces in side order.
    pub fn faces(&self) -> &[Face; SIDES] {
        &self.0
    }
}

impl std::fmt::Display for DieFaceLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbols: Vec<&str> = self.0.iter().map(|face| face.symbol()).collect();
        write!(f, "[{}]", symbols.join(" "))
    }
}

/// Build the face layout for a die configuration.
pub fn layout(config: &DieConfig) -> DieFaceLayout {
    let mut faces = [Face::Blank; SIDES];
    faces[0] = Face::Point;
    faces[SIDES - 1] = Face::Reroll;

    let special = match config.kind() {
        DieKind::Normal => None,
        DieKind::Advantage => config.plus_count().map(|n| (Face::Plus, n)),
        DieKind::Negative => config.minus_count().map(|n| (Face::Minus, n)),
    };

    if let Some((face, count)) = special {
        for slot in faces.iter_mut().skip(1).take(usize::from(count)) {
            *slot = face;
        }
    }

    DieFaceLayout(faces)
}

/// The face a die shows for a raw roll. The roll is clamped into 1-6.
pub fn face_for(config: &DieConfig, raw: i64) -> Face {
    layout(config).face(raw)
}

/// The face a die shows for a loosely typed raw roll.
///
/// Non-numeric values count as 0 and therefore land on side 1.
pub fn face_for_value(config: &DieConfig, raw: &Value) -> Face {
    face_for(config, coerce_number(raw).unwrap_or(0))
}

/// Clamp a raw roll onto a die side (1-6).
pub fn clamp_pips(raw: i64) -> u8 {
    raw.clamp(1, SIDES as i64) as u8
}
