use power_index::{GameForm, Method, Result, compute_indices};

fn main() -> Result<()> {
    // Fields arrive as raw text, the way a data-entry screen hands them over
    let mut form = GameForm::new();
    form.set_issue_count(1);
    form.set_player_count(4);
    form.set_quota(0, "51")?;

    for (player, text) in ["49", "", "2", "49"].iter().enumerate() {
        form.set_weight(0, player, text)?;
    }
    if !form.set_weight(0, 1, "lots")? {
        println!("ignored non-numeric weight for player 1");
    }

    let game = form.to_game()?;
    let result = compute_indices(&game, Method::Shapley)?;
    print!("{result}");

    Ok(())
}
