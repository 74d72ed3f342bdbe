use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which participant field of a [`Duel`] took the win.
///
/// Deserializing the winner into a role marker (rather than a free-form
/// string) means a record whose winner names neither participant can never
/// be constructed: the whole load fails instead of a badge being drawn on
/// the wrong side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WinnerSide {
    Creator,
    Target,
}

/// One recorded head-to-head match. The order records arrive from the API
/// is the order they are displayed in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Duel {
    pub id: u64,
    pub winner: WinnerSide,
    pub creator: String,
    pub target: String,
}

impl Duel {
    pub fn winner_name(&self) -> &str {
        match self.winner {
            WinnerSide::Creator => &self.creator,
            WinnerSide::Target => &self.target,
        }
    }

    /// Whether `summoner` took this duel. Drives the cup badge.
    pub fn won_by(&self, summoner: &str) -> bool {
        self.winner_name() == summoner
    }
}

#[derive(Debug, Clone, Error)]
pub enum DuelsError {
    #[error("summoner name must not be empty")]
    EmptyName,
    #[error("duels request failed: {0}")]
    Network(String),
    #[error("no duel history for {0}")]
    NotFound(String),
    #[error("malformed duel record: {0}")]
    Malformed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn winner_resolves_to_a_participant() {
        let duel = Duel {
            id: 7,
            winner: WinnerSide::Target,
            creator: "ngryman".into(),
            target: "Vocyfera2".into(),
        };
        assert_eq!(duel.winner_name(), "Vocyfera2");
        assert!(duel.won_by("Vocyfera2"));
        assert!(!duel.won_by("ngryman"));
    }

    #[test]
    fn unknown_winner_side_is_rejected() {
        let res = serde_json::from_str::<Duel>(
            r#"{"id":1,"winner":"referee","creator":"A","target":"B"}"#,
        );
        assert!(res.is_err());
    }

    #[test]
    fn records_decode_in_order() {
        let duels: Vec<Duel> = serde_json::from_str(
            r#"[{"id":1,"winner":"creator","creator":"A","target":"B"},
                {"id":2,"winner":"target","creator":"A","target":"C"}]"#,
        )
        .unwrap();
        assert_eq!(
            duels.iter().map(|d| d.id).collect::<Vec<_>>(),
            vec![1, 2]
        );
    }
}
