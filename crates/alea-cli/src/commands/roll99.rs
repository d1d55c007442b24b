use alea_mechanics::{Alea99Result, Difficulty};
use colored::Colorize;

use super::Context;

pub fn run(ctx: &mut Context, dice: u32, threshold: i64, difficulty: &str) -> Result<(), String> {
    let difficulty = Difficulty::parse(difficulty).map_err(|e| e.to_string())?;
    let result = ctx
        .engine
        .roll_alea99(dice, threshold, difficulty, &mut ctx.rng)
        .map_err(|e| e.to_string())?;

    if ctx.is_json() {
        return super::print_json(&result);
    }
    print_result(&result, difficulty);
    Ok(())
}

fn print_result(result: &Alea99Result, difficulty: Difficulty) {
    println!("  {}", "ALEA99 Check".bold().underline());
    println!();

    let rolls: Vec<String> = result.all_rolls.iter().map(u32::to_string).collect();
    println!("  Dice ({}d10):   {}", result.dice_count, rolls.join(" "));
    println!(
        "  Two lowest:    {} and {}",
        result.two_lowest.0, result.two_lowest.1
    );
    println!(
        "  Result:        {}",
        format!("{:02}", result.result_value).bold()
    );
    if result.difficulty_level != 0 {
        println!("  Difficulty:    {difficulty}");
    }
    println!(
        "  Threshold:     {} (effective {})",
        result.threshold_value, result.effective_threshold
    );
    println!();

    let level = result.success_level.to_string();
    let level = match (result.success_level.is_success(), result.digits_identical) {
        (true, true) => level.green().bold(),
        (true, false) => level.green(),
        (false, false) => level.yellow(),
        (false, true) => level.red().bold(),
    };
    println!("  Outcome:       {level} ({})", result.acronym);
}
