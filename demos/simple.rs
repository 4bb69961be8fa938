use power_index::{GameDescription, Method, Result, compute_indices};

fn main() -> Result<()> {
    // Both issues must pass: player 0 carries the first, player 1 the second,
    // player 2 has a little of each.
    let game = GameDescription::from_integers(&[3, 3], &[vec![3, 0, 1], vec![0, 3, 1]])?;

    for method in [Method::Shapley, Method::Banzhaf] {
        let result = compute_indices(&game, method)?;
        println!("{method}");
        println!("{:>8}  {:>9}", "Player", "Index");
        for (player, value) in result.values().iter().enumerate() {
            println!("{player:>8}  {value:>9.4}");
        }
    }

    Ok(())
}
