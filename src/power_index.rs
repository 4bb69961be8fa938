use crate::{
    coalition::{Coalition, Coalitions, coalitions},
    error::Result,
    evaluation::is_winning,
    types::{GameDescription, Method, ResultVector},
    utils::shapley_weight,
};
use tracing::{debug, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Compute one power index value per player of `game`
pub fn compute_indices(game: &GameDescription, method: Method) -> Result<ResultVector> {
    debug!(
        players = game.player_count(),
        issues = game.issue_count(),
        %method,
        "computing power indices"
    );

    let values = match method {
        Method::Shapley => shapley_values(game)?,
        Method::Banzhaf => normalize(swing_counts(game)?),
    };

    Ok(ResultVector::new(method, values))
}

/// Shapley–Shubik index of every player
pub fn shapley_shubik(game: &GameDescription) -> Result<ResultVector> {
    compute_indices(game, Method::Shapley)
}

/// Normalized Banzhaf index of every player
pub fn banzhaf(game: &GameDescription) -> Result<ResultVector> {
    compute_indices(game, Method::Banzhaf)
}

/// Raw Banzhaf swing counts: for each player, the number of losing coalitions of the other
/// players that the player turns into winning ones
pub fn swing_counts(game: &GameDescription) -> Result<Vec<u64>> {
    let all = coalitions(game.player_count())?;
    let counts = per_player(game.player_count(), |player| {
        let count = swings(game, all.clone(), player).count() as u64;
        trace!(player, swings = count, "counted swings");
        count
    });
    Ok(counts)
}

fn shapley_values(game: &GameDescription) -> Result<Vec<f64>> {
    let n_players = game.player_count();
    let all = coalitions(n_players)?;
    let values = per_player(n_players, |player| {
        let value: f64 = swings(game, all.clone(), player)
            .map(|coalition| shapley_weight(coalition.len(), n_players))
            .sum();
        trace!(player, value, "accumulated shapley weight");
        value
    });
    Ok(values)
}

/// Coalitions without `player` that lose, but win once `player` joins
fn swings<'a>(
    game: &'a GameDescription,
    all: Coalitions,
    player: usize,
) -> impl Iterator<Item = Coalition> + 'a {
    all.filter(move |coalition| {
        !coalition.contains(player)
            && !is_winning(*coalition, game)
            && coalition
                .with(player)
                .is_ok_and(|joined| is_winning(joined, game))
    })
}

/// Divide each swing count by the total. With no swings at all the zero vector is returned as is.
fn normalize(counts: Vec<u64>) -> Vec<f64> {
    let total: u64 = counts.iter().sum();
    if total == 0 {
        debug!("no player is ever pivotal; skipping normalization");
        return vec![0.0; counts.len()];
    }
    debug!(total_swings = total, "normalizing banzhaf swing counts");
    counts
        .into_iter()
        .map(|count| count as f64 / total as f64)
        .collect()
}

/// Run `f` once per player, writing each result to that player's slot
#[cfg(feature = "parallel")]
fn per_player<T, F>(n_players: usize, f: F) -> Vec<T>
where
    T: Send,
    F: Fn(usize) -> T + Sync + Send,
{
    // Small games are cheaper on one thread
    if n_players > 2 {
        (0..n_players).into_par_iter().map(f).collect()
    } else {
        (0..n_players).map(f).collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn per_player<T, F>(n_players: usize, f: F) -> Vec<T>
where
    F: Fn(usize) -> T,
{
    (0..n_players).map(f).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
            assert!(
                (a - e).abs() < TOLERANCE,
                "Mismatch at player {i}: got {a}, expected {e}"
            );
        }
    }

    #[test]
    fn test_majority_game() {
        let game = GameDescription::from_integers(&[2], &[vec![1, 1, 1]]).unwrap();
        let third = 1.0 / 3.0;

        let shapley = shapley_shubik(&game).unwrap();
        assert_eq!(shapley.method(), Method::Shapley);
        assert_close(shapley.values(), &[third, third, third]);

        let banzhaf = banzhaf(&game).unwrap();
        assert_eq!(banzhaf.method(), Method::Banzhaf);
        assert_close(banzhaf.values(), &[third, third, third]);

        // each player swings {other} twice
        assert_eq!(swing_counts(&game).unwrap(), vec![2, 2, 2]);
    }

    #[test]
    fn test_two_issue_game() {
        let game = GameDescription::from_integers(&[1, 1], &[vec![1, 0], vec![0, 1]]).unwrap();
        assert_close(shapley_shubik(&game).unwrap().values(), &[0.5, 0.5]);
        assert_close(banzhaf(&game).unwrap().values(), &[0.5, 0.5]);
    }

    #[test]
    fn test_weighted_game_differs_by_method() {
        // [3; 2, 1, 1]: player 0 is needed in every winning coalition
        let game = GameDescription::from_integers(&[3], &[vec![2, 1, 1]]).unwrap();

        let shapley = shapley_shubik(&game).unwrap();
        assert_close(shapley.values(), &[2.0 / 3.0, 1.0 / 6.0, 1.0 / 6.0]);

        assert_eq!(swing_counts(&game).unwrap(), vec![3, 1, 1]);
        let banzhaf = banzhaf(&game).unwrap();
        assert_close(banzhaf.values(), &[0.6, 0.2, 0.2]);
    }

    #[test]
    fn test_every_coalition_wins() {
        let game = GameDescription::from_integers(&[0], &[vec![1, 2, 3]]).unwrap();
        assert_eq!(swing_counts(&game).unwrap(), vec![0, 0, 0]);
        assert_close(banzhaf(&game).unwrap().values(), &[0.0, 0.0, 0.0]);
        assert_close(shapley_shubik(&game).unwrap().values(), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_single_player_swing() {
        let game = GameDescription::from_integers(&[1], &[vec![1]]).unwrap();
        assert_close(shapley_shubik(&game).unwrap().values(), &[1.0]);
        assert_close(banzhaf(&game).unwrap().values(), &[1.0]);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(vec![3, 1]), vec![0.75, 0.25]);
        assert_eq!(normalize(vec![0, 0]), vec![0.0, 0.0]);
        assert_eq!(normalize(vec![]), Vec::<f64>::new());
    }

    #[test]
    fn test_compute_indices_dispatch() {
        let game = GameDescription::from_integers(&[3], &[vec![2, 1, 1]]).unwrap();
        assert_eq!(
            compute_indices(&game, Method::Shapley).unwrap(),
            shapley_shubik(&game).unwrap()
        );
        assert_eq!(
            compute_indices(&game, Method::Banzhaf).unwrap(),
            banzhaf(&game).unwrap()
        );
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_fan_out_matches_fixed_values() {
        // Weight, headcount and population majorities over five players
        let game = GameDescription::from_integers(
            &[12, 3, 60],
            &[
                vec![6, 5, 4, 3, 2],
                vec![1, 1, 1, 1, 1],
                vec![40, 25, 15, 12, 8],
            ],
        )
        .unwrap();

        assert_eq!(swing_counts(&game).unwrap(), vec![9, 5, 5, 3, 3]);
        assert_close(
            shapley_shubik(&game).unwrap().values(),
            &[11.0 / 30.0, 0.2, 0.2, 7.0 / 60.0, 7.0 / 60.0],
        );
        assert_close(banzhaf(&game).unwrap().values(), &[0.36, 0.2, 0.2, 0.12, 0.12]);

        // Repeated runs land every player in the same slot with the same bits
        let first = shapley_shubik(&game).unwrap();
        for _ in 0..8 {
            assert_eq!(shapley_shubik(&game).unwrap(), first);
        }
    }
}
