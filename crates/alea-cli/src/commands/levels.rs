use comfy_table::{ContentArrangement, Table};

use super::Context;

pub fn run(ctx: &Context) -> Result<(), String> {
    let levels = ctx.engine.format_success_levels();

    if ctx.is_json() {
        return super::print_json(&levels);
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Level", "Code", "Cutoff", "Range"]);
    for level in &levels {
        let cutoff = level
            .cutoff_percent
            .map(|p| format!("{p}%"))
            .unwrap_or_else(|| "—".to_string());
        table.add_row(vec![
            level.label.clone(),
            level.acronym.clone(),
            cutoff,
            level.range.with_unit("%"),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} levels", levels.len());
    Ok(())
}
