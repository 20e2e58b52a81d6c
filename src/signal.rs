//! Signal definitions: the fixed set of symbols the game can present.
//!
//! The signal set is a closed enumeration decided at startup. The engine
//! never invents signals at runtime; it only draws uniformly from
//! [`Signal::ALL`].

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// One atomic unit of the challenge sequence.
///
/// Four colors, matching the classic board layout. Each signal carries the
/// tone a presenter should play when acknowledging it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Signal {
    Red,
    Blue,
    Green,
    Yellow,
}

/// The challenge revealed so far, in presentation order.
///
/// Inline capacity covers realistic game lengths; long games spill to the
/// heap transparently.
pub type Sequence = SmallVec<[Signal; 16]>;

impl Signal {
    /// All signals, in board order.
    pub const ALL: [Signal; 4] = [Signal::Red, Signal::Blue, Signal::Green, Signal::Yellow];

    /// Number of distinct signals.
    pub const COUNT: usize = Self::ALL.len();

    /// Tone frequency for this signal's audio acknowledgment, in hertz.
    #[must_use]
    pub const fn tone_hz(self) -> u32 {
        match self {
            Signal::Red => 220,
            Signal::Blue => 330,
            Signal::Green => 440,
            Signal::Yellow => 550,
        }
    }

    /// Stable lowercase name, for presenters that key UI elements by signal.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Signal::Red => "red",
            Signal::Blue => "blue",
            Signal::Green => "green",
            Signal::Yellow => "yellow",
        }
    }
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_signals_distinct() {
        for (i, a) in Signal::ALL.iter().enumerate() {
            for b in &Signal::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(Signal::COUNT, 4);
    }

    #[test]
    fn test_tone_frequencies() {
        assert_eq!(Signal::Red.tone_hz(), 220);
        assert_eq!(Signal::Blue.tone_hz(), 330);
        assert_eq!(Signal::Green.tone_hz(), 440);
        assert_eq!(Signal::Yellow.tone_hz(), 550);
    }

    #[test]
    fn test_display_matches_name() {
        for signal in Signal::ALL {
            assert_eq!(format!("{}", signal), signal.name());
        }
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Signal::Yellow).unwrap();
        assert_eq!(json, "\"yellow\"");

        let back: Signal = serde_json::from_str("\"red\"").unwrap();
        assert_eq!(back, Signal::Red);
    }
}
