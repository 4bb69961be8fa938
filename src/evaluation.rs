use crate::{coalition::Coalition, types::GameDescription};

/// Whether `coalition` meets the quota on every issue of `game`.
///
/// Members at or past `game.player_count()` are not players of this game and carry no weight.
pub fn is_winning(coalition: Coalition, game: &GameDescription) -> bool {
    game.quotas()
        .iter()
        .zip(game.weight_vectors())
        .all(|(&quota, weights)| issue_weight(coalition, weights) >= quota)
}

/// Total weight of `coalition` on each issue; members outside the game count as zero
pub fn issue_totals(coalition: Coalition, game: &GameDescription) -> Vec<f64> {
    game.weight_vectors()
        .iter()
        .map(|weights| issue_weight(coalition, weights))
        .collect()
}

fn issue_weight(coalition: Coalition, weights: &[f64]) -> f64 {
    coalition
        .players()
        .filter_map(|p| weights.get(p))
        .sum()
}
