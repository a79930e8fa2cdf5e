//! Pipeline Stage
//!
//! The fixed set of phases a deal moves through. Stage order is the
//! left-to-right order of the kanban board.

use serde::{Deserialize, Serialize};

/// Pipeline stage a deal currently sits in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    #[default]
    Prospecting,
    Qualification,
    Proposal,
    Negotiation,
    ClosedWon,
    ClosedLost,
}

impl Stage {
    /// All stages in board order
    pub const ALL: [Stage; 6] = [
        Stage::Prospecting,
        Stage::Qualification,
        Stage::Proposal,
        Stage::Negotiation,
        Stage::ClosedWon,
        Stage::ClosedLost,
    ];

    /// Wire id, e.g. `closed-won`
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Prospecting => "prospecting",
            Stage::Qualification => "qualification",
            Stage::Proposal => "proposal",
            Stage::Negotiation => "negotiation",
            Stage::ClosedWon => "closed-won",
            Stage::ClosedLost => "closed-lost",
        }
    }

    /// Parse a wire id. Unknown ids are `None`.
    pub fn parse(s: &str) -> Option<Self> {
        Stage::ALL.into_iter().find(|stage| stage.as_str() == s)
    }

    /// Column heading
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Prospecting => "Prospecting",
            Stage::Qualification => "Qualification",
            Stage::Proposal => "Proposal",
            Stage::Negotiation => "Negotiation",
            Stage::ClosedWon => "Closed Won",
            Stage::ClosedLost => "Closed Lost",
        }
    }

    /// Whether the deal has left the active pipeline (won or lost)
    pub fn is_closed(&self) -> bool {
        matches!(self, Stage::ClosedWon | Stage::ClosedLost)
    }

    /// Position on the board, 0-based
    pub fn index(&self) -> usize {
        match self {
            Stage::Prospecting => 0,
            Stage::Qualification => 1,
            Stage::Proposal => 2,
            Stage::Negotiation => 3,
            Stage::ClosedWon => 4,
            Stage::ClosedLost => 5,
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_ids_round_trip() {
        for stage in Stage::ALL {
            assert_eq!(Stage::parse(stage.as_str()), Some(stage));
        }
        assert_eq!(Stage::parse("closed"), None);
        assert_eq!(Stage::parse("Prospecting"), None);
    }

    #[test]
    fn test_closed_stages() {
        let closed: Vec<_> = Stage::ALL.into_iter().filter(Stage::is_closed).collect();
        assert_eq!(closed, vec![Stage::ClosedWon, Stage::ClosedLost]);
    }

    #[test]
    fn test_index_matches_board_order() {
        for (i, stage) in Stage::ALL.iter().enumerate() {
            assert_eq!(stage.index(), i);
        }
    }

    #[test]
    fn test_serde_uses_kebab_case() {
        let json = serde_json::to_string(&Stage::ClosedWon).unwrap();
        assert_eq!(json, "\"closed-won\"");
        let parsed: Stage = serde_json::from_str("\"negotiation\"").unwrap();
        assert_eq!(parsed, Stage::Negotiation);
    }
}
