use power_index::{GameDescription, Method, compute_indices, swing_counts};
use tabled::Table;

fn main() {
    let game = GameDescription::from_csv("demos/data/triple_majority.csv")
        .expect("Failed to read game");

    let shapley = compute_indices(&game, Method::Shapley).expect("Failed to compute Shapley");
    println!("Shapley–Shubik");
    println!("{}", Table::new(shapley.rows()));

    let banzhaf = compute_indices(&game, Method::Banzhaf).expect("Failed to compute Banzhaf");
    println!("Banzhaf");
    println!("{}", Table::new(banzhaf.rows()));

    let swings = swing_counts(&game).expect("Failed to count swings");
    println!("raw swings: {swings:?}");
}
