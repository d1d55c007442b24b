pub mod classify;
pub mod levels;
pub mod roll;
pub mod roll99;

use alea_mechanics::AleaEngine;
use colored::Colorize;
use rand::rngs::StdRng;
use serde::Serialize;

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

/// Everything a command needs: the engine, its random source and the output format.
pub struct Context {
    pub engine: AleaEngine,
    pub rng: StdRng,
    pub format: Format,
}

impl Context {
    pub fn is_json(&self) -> bool {
        self.format == Format::Json
    }
}

/// Print any serializable result as pretty JSON on stdout.
fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), String> {
    let text =
        serde_json::to_string_pretty(value).map_err(|e| format!("JSON serialization error: {e}"))?;
    println!("{text}");
    Ok(())
}

/// Color a level label by where it sits in a table of `len` levels.
fn colorize_level(text: &str, index: usize, len: usize) -> colored::ColoredString {
    if index == 0 {
        text.green().bold()
    } else if index + 1 == len {
        text.red().bold()
    } else if index < len / 2 {
        text.green()
    } else {
        text.yellow()
    }
}
