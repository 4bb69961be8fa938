//! Editable game form.
//!
//! Keeps quota and weight arrays in step with the issue and player counts while a user edits
//! them field by field, so the game handed to the engine is always well-formed.

use crate::{
    error::{PowerIndexError, Result},
    types::GameDescription,
};
use tracing::debug;

/// Coerce raw field text to a number: blank is 0, an integer is itself, anything else is
/// rejected.
pub fn coerce_field(text: &str) -> Option<i64> {
    let text = text.trim();
    if text.is_empty() {
        Some(0)
    } else {
        text.parse().ok()
    }
}

/// Field-by-field game editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameForm {
    player_count: usize,
    quotas: Vec<i64>,
    weight_vectors: Vec<Vec<i64>>,
}

impl Default for GameForm {
    fn default() -> Self {
        Self::new()
    }
}

impl GameForm {
    /// One issue, one player, everything zero
    pub fn new() -> Self {
        GameForm {
            player_count: 1,
            quotas: vec![0],
            weight_vectors: vec![vec![0]],
        }
    }

    pub fn issue_count(&self) -> usize {
        self.quotas.len()
    }

    pub fn player_count(&self) -> usize {
        self.player_count
    }

    pub fn quotas(&self) -> &[i64] {
        &self.quotas
    }

    pub fn weight_vectors(&self) -> &[Vec<i64>] {
        &self.weight_vectors
    }

    /// Change the number of issues; all quotas and weights reset to zero
    pub fn set_issue_count(&mut self, issue_count: usize) {
        debug!(issue_count, "resetting form issues");
        self.quotas = vec![0; issue_count];
        self.weight_vectors = vec![vec![0; self.player_count]; issue_count];
    }

    /// Change the number of players; all weights reset to zero, quotas are kept
    pub fn set_player_count(&mut self, player_count: usize) {
        debug!(player_count, "resetting form players");
        self.player_count = player_count;
        self.weight_vectors = vec![vec![0; player_count]; self.quotas.len()];
    }

    /// Edit a quota from field text. Returns `false` when the text was not a number and the
    /// quota was left unchanged.
    pub fn set_quota(&mut self, issue: usize, text: &str) -> Result<bool> {
        let len = self.quotas.len();
        let slot = self
            .quotas
            .get_mut(issue)
            .ok_or(PowerIndexError::IndexOutOfRange {
                what: "Issue",
                index: issue,
                len,
            })?;
        Ok(store(slot, text))
    }

    /// Edit one player's weight on an issue from field text. Returns `false` when the text
    /// was not a number and the weight was left unchanged.
    pub fn set_weight(&mut self, issue: usize, player: usize, text: &str) -> Result<bool> {
        let issues = self.weight_vectors.len();
        let weights =
            self.weight_vectors
                .get_mut(issue)
                .ok_or(PowerIndexError::IndexOutOfRange {
                    what: "Issue",
                    index: issue,
                    len: issues,
                })?;
        let players = weights.len();
        let slot = weights
            .get_mut(player)
            .ok_or(PowerIndexError::IndexOutOfRange {
                what: "Player",
                index: player,
                len: players,
            })?;
        Ok(store(slot, text))
    }

    /// Validated game for the current form contents
    pub fn to_game(&self) -> Result<GameDescription> {
        GameDescription::from_integers(&self.quotas, &self.weight_vectors)
    }
}

fn store(slot: &mut i64, text: &str) -> bool {
    match coerce_field(text) {
        Some(value) => {
            *slot = value;
            true
        }
        None => false,
    }
}
