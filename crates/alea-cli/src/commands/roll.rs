use alea_mechanics::dice::OpenDirection;
use alea_mechanics::{AleaCheck, Difficulty, RollResult, ScaledLevel, StatusInputs, ThresholdInputs};
use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use serde::Serialize;

use super::Context;

#[derive(Serialize)]
struct RollReport<'a> {
    #[serde(flatten)]
    result: &'a RollResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    levels: Option<Vec<ScaledLevel>>,
}

pub fn run(
    ctx: &mut Context,
    threshold: ThresholdInputs,
    difficulty: &str,
    status: StatusInputs,
    lucky: Option<u32>,
    show_levels: bool,
) -> Result<(), String> {
    let difficulty = Difficulty::parse(difficulty).map_err(|e| e.to_string())?;
    let check = AleaCheck {
        threshold,
        difficulty,
        status,
        lucky_number: lucky,
    };
    let result = ctx
        .engine
        .roll_alea(&check, &mut ctx.rng)
        .map_err(|e| e.to_string())?;

    let levels = if show_levels {
        Some(ctx.engine.result_levels(&result).map_err(|e| e.to_string())?)
    } else {
        None
    };

    if ctx.is_json() {
        return super::print_json(&RollReport {
            result: &result,
            levels,
        });
    }

    print_result(&result, difficulty, ctx.engine.table().len());
    if let Some(levels) = levels.filter(|l| !l.is_empty()) {
        println!();
        print_levels(&levels);
    }
    Ok(())
}

fn print_result(result: &RollResult, difficulty: Difficulty, levels: usize) {
    println!("  {}", "ALEA Check".bold().underline());
    println!();

    let first = match (result.open_direction, result.reroll) {
        (Some(OpenDirection::Down), Some(second)) => {
            format!("{} {}", result.first_roll, format!("(open roll -{second})").cyan())
        }
        (Some(OpenDirection::Up), Some(second)) => {
            format!("{} {}", result.first_roll, format!("(open roll +{second})").cyan())
        }
        _ => result.first_roll.to_string(),
    };
    println!("  First roll:    {first}");
    if result.lucky {
        println!("  {}", "Lucky number!".yellow().bold());
    }

    let Some(classification) = &result.classification else {
        println!("  Final roll:    {}", result.final_roll.to_string().bold());
        println!("  {}", "(no threshold given, not classified)".dimmed());
        return;
    };

    if result.difficulty_level != 0 {
        println!("  Difficulty:    {difficulty}");
    }
    if result.status_malus.penalty() != Some(0) {
        println!("  Status malus:  {}", result.status_malus);
    }
    println!("  Final roll:    {}", result.final_roll.to_string().bold());
    println!("  Threshold:     {}", result.threshold_value);
    println!();
    println!(
        "  Result:        {} ({})  {}",
        super::colorize_level(&classification.label, classification.index, levels),
        classification.acronym,
        classification.range.to_string().dimmed()
    );
}

fn print_levels(levels: &[ScaledLevel]) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["", "Level", "Code", "Range"]);
    for level in levels {
        let mark = if level.selected { "✓" } else { "" };
        table.add_row(vec![
            mark.to_string(),
            level.label.clone(),
            level.acronym.clone(),
            level.range.to_string(),
        ]);
    }
    println!("{table}");
}
