//! Coalition enumeration.
//!
//! Coalitions are bitmasks over the player indices: bit `j` set means player `j` is a member.
//! Enumerating the integers `0..2^n` in order gives every subset exactly once, in a fixed
//! order that test fixtures can rely on.

use crate::{
    error::{PowerIndexError, Result},
    validation::{MAX_PLAYERS, check_player_count},
};
use std::{fmt, ops::Range};

/// A set of players, stored as a bitmask
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Coalition(u32);

impl Coalition {
    /// The coalition with no members
    pub const EMPTY: Coalition = Coalition(0);

    /// Build a coalition from player indices; duplicates collapse
    pub fn from_players<I: IntoIterator<Item = usize>>(players: I) -> Result<Self> {
        players
            .into_iter()
            .try_fold(Coalition::EMPTY, |coalition, p| coalition.with(p))
    }

    pub fn mask(&self) -> u32 {
        self.0
    }

    /// Whether `player` is a member; indices past [`MAX_PLAYERS`] never are
    pub fn contains(&self, player: usize) -> bool {
        player_bit(player).is_some_and(|bit| self.0 & bit != 0)
    }

    /// This coalition with `player` added
    pub fn with(&self, player: usize) -> Result<Self> {
        let bit = player_bit(player).ok_or(PowerIndexError::IndexOutOfRange {
            what: "Player",
            index: player,
            len: MAX_PLAYERS,
        })?;
        Ok(Coalition(self.0 | bit))
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Members in increasing index order
    pub fn players(&self) -> Players {
        Players(self.0)
    }
}

impl fmt::Debug for Coalition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.players()).finish()
    }
}

fn player_bit(player: usize) -> Option<u32> {
    (player < MAX_PLAYERS).then(|| 1 << player)
}

/// Iterator over the members of a [`Coalition`], lowest index first
#[derive(Debug, Clone)]
pub struct Players(u32);

impl Iterator for Players {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.0 == 0 {
            return None;
        }
        let player = self.0.trailing_zeros() as usize;
        // clear lowest set bit
        self.0 &= self.0 - 1;
        Some(player)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Players {}

/// Every subset of `n` players, in bitmask order
#[derive(Debug, Clone)]
pub struct Coalitions {
    masks: Range<u32>,
}

impl Iterator for Coalitions {
    type Item = Coalition;

    fn next(&mut self) -> Option<Coalition> {
        self.masks.next().map(Coalition)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.masks.size_hint()
    }
}

impl ExactSizeIterator for Coalitions {}

/// Enumerate all 2^n coalitions of `n_players`
pub fn coalitions(n_players: usize) -> Result<Coalitions> {
    check_player_count(n_players)?;
    Ok(Coalitions {
        masks: 0..(1u32 << n_players),
    })
}
