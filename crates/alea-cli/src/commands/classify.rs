use colored::Colorize;

use super::Context;

pub fn run(ctx: &Context, final_roll: i64, threshold: i64) -> Result<(), String> {
    let classification = ctx
        .engine
        .classify(final_roll, threshold)
        .map_err(|e| e.to_string())?;

    if ctx.is_json() {
        return super::print_json(&classification);
    }

    println!(
        "  {final_roll} vs {threshold}: {} ({})  {}",
        super::colorize_level(
            &classification.label,
            classification.index,
            ctx.engine.table().len()
        ),
        classification.acronym,
        classification.range.to_string().dimmed()
    );
    Ok(())
}
