use anyhow::{Context, Result};
use clap::Parser;
use std::time::Duration;
use tripeaks_solver::{
    deck::parse_deck,
    solver::{SolveResult, Solver, format_solution},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Max states to explore before giving up
    #[arg(long, default_value_t = 50_000_000, value_name = "NUM")]
    max_states: usize,
    /// File with the 52-card deal ('-' or omitted reads stdin)
    file: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let content = match cli.file.as_deref() {
        Some(path) if path != "-" => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read '{path}'"))?
        }
        _ => std::io::read_to_string(std::io::stdin())?,
    };
    let deck = parse_deck(&content)?;

    let mut solver = Solver::new(cli.max_states);
    let SolveResult {
        solution,
        states,
        elapsed,
    } = solver.solve(&deck)?;

    let elapsed = format_elapsed(elapsed);
    if solution.is_empty() {
        println!("✗ No way to clear the board. States: {states}, Elapsed: {elapsed}");
    } else {
        println!(
            r#"✓ Cleared the board in {} plays. States: {states}, Elapsed: {elapsed}

===== PLAYS =====
{}"#,
            solution.len(),
            format_solution(&solution)
        );
    }

    Ok(())
}

fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    if secs < 90 {
        let ms = elapsed.subsec_millis();
        format!("{secs}.{ms:03}s")
    } else {
        let minutes = secs / 60;
        let secs = secs % 60;
        format!("{minutes}m {secs}s")
    }
}
