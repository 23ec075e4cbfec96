//! Engine configuration

use std::time::Duration;

use log::warn;

use crate::board::Player;
use crate::rules::ForbiddenRule;

/// Default fixed search depth
pub const DEFAULT_DEPTH: u8 = 2;

/// Preset strength levels for the front end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Search parameters shared by [`Engine`](crate::Engine) and the searcher.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Plies searched; kept even so the last ply is the opponent's reply
    pub depth: u8,
    /// The searching (maximizing) side
    pub ai: Player,
    /// Side under the double-three rule, if any
    pub restricted: Option<Player>,
    /// Weight of the attack score in root ordering, per mille (1100 = 1.1)
    pub attack_permille: i64,
    /// Weight of the searching side's leaf total, per mille (1200 = 1.2)
    pub aggression_permille: i64,
    /// Seed for the random second-move reply. `None` draws from entropy.
    pub seed: Option<u64>,
    /// Wall-clock budget. When set, depths 2, 4, ... are searched up to
    /// `depth` and the deepest completed one is kept.
    pub time_limit: Option<Duration>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            ai: Player::White,
            restricted: Some(Player::Black),
            attack_permille: 1100,
            aggression_permille: 1200,
            seed: None,
            time_limit: None,
        }
    }
}

impl EngineConfig {
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        let base = Self::default();
        match difficulty {
            Difficulty::Easy => Self {
                depth: 2,
                aggression_permille: 1000,
                ..base
            },
            Difficulty::Normal => Self { depth: 2, ..base },
            Difficulty::Hard => Self {
                depth: 4,
                time_limit: Some(Duration::from_millis(1500)),
                ..base
            },
        }
    }

    #[must_use]
    pub fn with_depth(mut self, depth: u8) -> Self {
        self.depth = depth;
        self.normalized()
    }

    #[must_use]
    pub fn with_ai(mut self, ai: Player) -> Self {
        self.ai = ai;
        self
    }

    #[must_use]
    pub fn with_restricted(mut self, restricted: Option<Player>) -> Self {
        self.restricted = restricted;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Round an odd or zero depth up to the next even value.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if self.depth == 0 || self.depth % 2 == 1 {
            let even = (self.depth.saturating_add(1) & !1).max(DEFAULT_DEPTH);
            warn!("search depth {} is not a positive even number, using {}", self.depth, even);
            self.depth = even;
        }
        self
    }

    pub fn forbidden_rule(&self) -> ForbiddenRule {
        ForbiddenRule::new(self.restricted)
    }
}
