use power_index::{
    GameDescription, Method, banzhaf, compute_indices, shapley_shubik, swing_counts,
};

const TOLERANCE: f64 = 1e-9;

fn assert_values(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len(), "player count mismatch");
    for (player, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            (a - e).abs() < TOLERANCE,
            "Player {player} mismatch: expected {e}, got {a}"
        );
    }
}

#[test]
fn test_symmetric_majority_game() {
    let game = GameDescription::from_integers(&[2], &[vec![1, 1, 1]]).unwrap();
    let third = 1.0 / 3.0;

    let shapley = compute_indices(&game, Method::Shapley).unwrap();
    assert_values(shapley.values(), &[third, third, third]);

    let banzhaf = compute_indices(&game, Method::Banzhaf).unwrap();
    assert_values(banzhaf.values(), &[third, third, third]);
}

#[test]
fn test_two_issue_game_needs_both_players() {
    let game = GameDescription::from_integers(&[1, 1], &[vec![1, 0], vec![0, 1]]).unwrap();

    assert_values(shapley_shubik(&game).unwrap().values(), &[0.5, 0.5]);
    assert_values(banzhaf(&game).unwrap().values(), &[0.5, 0.5]);
    assert_eq!(swing_counts(&game).unwrap(), vec![1, 1]);
}

#[test]
fn test_single_player_already_winning() {
    // The empty coalition meets quota 0, so nobody is ever pivotal
    let game = GameDescription::from_integers(&[0], &[vec![0]]).unwrap();

    assert_values(shapley_shubik(&game).unwrap().values(), &[0.0]);
    assert_values(banzhaf(&game).unwrap().values(), &[0.0]);
}

#[test]
fn test_single_player_never_winning() {
    let game = GameDescription::from_integers(&[1], &[vec![0]]).unwrap();

    assert_values(shapley_shubik(&game).unwrap().values(), &[0.0]);
    assert_values(banzhaf(&game).unwrap().values(), &[0.0]);
}

#[test]
fn test_single_player_pivotal() {
    let game = GameDescription::from_integers(&[1], &[vec![1]]).unwrap();

    assert_values(shapley_shubik(&game).unwrap().values(), &[1.0]);
    assert_values(banzhaf(&game).unwrap().values(), &[1.0]);
}

#[test]
fn test_weighted_game_with_dominant_player() {
    // [4; 3, 2, 1, 1]
    let game = GameDescription::from_integers(&[4], &[vec![3, 2, 1, 1]]).unwrap();

    let sixth = 1.0 / 6.0;
    assert_values(
        shapley_shubik(&game).unwrap().values(),
        &[0.5, sixth, sixth, sixth],
    );
    assert_eq!(swing_counts(&game).unwrap(), vec![6, 2, 2, 2]);
    assert_values(banzhaf(&game).unwrap().values(), &[0.5, sixth, sixth, sixth]);
}

#[test]
fn test_blocking_player_with_zero_weight() {
    // Player 1 has no weight and player 2 holds the balance
    let game = GameDescription::from_integers(&[51], &[vec![49, 0, 2, 49]]).unwrap();
    let third = 1.0 / 3.0;

    assert_values(
        shapley_shubik(&game).unwrap().values(),
        &[third, 0.0, third, third],
    );
    assert_eq!(swing_counts(&game).unwrap(), vec![4, 0, 4, 4]);
}

#[cfg(feature = "serde")]
#[test]
fn test_triple_majority_from_csv() {
    let game = GameDescription::from_csv("tests/data/triple_majority.csv").unwrap();
    assert_eq!(game.issue_count(), 3);
    assert_eq!(game.player_count(), 5);

    let shapley = shapley_shubik(&game).unwrap();
    assert_values(
        shapley.values(),
        &[0.366666666666667, 0.2, 0.2, 0.116666666666667, 0.116666666666667],
    );

    assert_eq!(swing_counts(&game).unwrap(), vec![9, 5, 5, 3, 3]);
    assert_values(
        banzhaf(&game).unwrap().values(),
        &[0.36, 0.2, 0.2, 0.12, 0.12],
    );
}
