use crate::error::{PowerIndexError, Result};

/// Largest player count we will enumerate coalitions for
pub const MAX_PLAYERS: usize = 20;

/// Validate the shape and content of a game before any enumeration happens
pub(crate) fn check_game(quotas: &[f64], weight_vectors: &[Vec<f64>]) -> Result<()> {
    if weight_vectors.is_empty() {
        return Err(PowerIndexError::NoIssues);
    }

    if quotas.len() != weight_vectors.len() {
        return Err(PowerIndexError::QuotaCountMismatch {
            expected: weight_vectors.len(),
            actual: quotas.len(),
        });
    }

    // Every issue must weigh the same set of players
    let n_players = weight_vectors[0].len();
    if n_players == 0 {
        return Err(PowerIndexError::NoPlayers);
    }
    check_player_count(n_players)?;

    for (issue, weights) in weight_vectors.iter().enumerate() {
        if weights.len() != n_players {
            return Err(PowerIndexError::WeightCountMismatch {
                issue,
                expected: n_players,
                actual: weights.len(),
            });
        }
        if let Some((player, &value)) = weights
            .iter()
            .enumerate()
            .find(|(_, w)| !is_valid_amount(**w))
        {
            return Err(PowerIndexError::InvalidWeight {
                issue,
                player,
                value,
            });
        }
    }

    if let Some((issue, &value)) = quotas.iter().enumerate().find(|(_, q)| !is_valid_amount(**q))
    {
        return Err(PowerIndexError::InvalidQuota { issue, value });
    }

    Ok(())
}

/// Check that `n_players` coalitions can be enumerated
pub(crate) fn check_player_count(n_players: usize) -> Result<()> {
    if n_players == 0 {
        return Err(PowerIndexError::NoPlayers);
    }
    if n_players > MAX_PLAYERS {
        return Err(PowerIndexError::TooManyPlayers {
            count: n_players,
            limit: MAX_PLAYERS,
        });
    }
    Ok(())
}

fn is_valid_amount(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
