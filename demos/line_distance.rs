use std::env;
use std::fs;
use std::process;

use anyhow::{Context, Result};
use console::Style;
use edit_distance::text::align_lines;
use edit_distance::Action;

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();

    let args: Vec<_> = env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <file1> <file2>", args[0]);
        process::exit(1);
    }

    let old = fs::read_to_string(&args[1]).with_context(|| format!("cannot read {}", args[1]))?;
    let new = fs::read_to_string(&args[2]).with_context(|| format!("cannot read {}", args[2]))?;

    println!("{}", args[1]);
    println!("{}", args[2]);
    for pair in align_lines(&old, &new)? {
        let alignment = pair.alignment();
        println!("Line 1: {}", pair.old_line());
        println!("Line 2: {}", pair.new_line());
        println!(
            "Distance: {} (matches: {})",
            alignment.distance(),
            alignment.matches()
        );
        for change in alignment.iter_changes() {
            let style = match change.action() {
                Action::Equal => Style::new().dim(),
                Action::Replace => Style::new().yellow(),
                Action::Insert => Style::new().green(),
                Action::Delete => Style::new().red(),
            };
            println!("  {}", style.apply_to(change));
        }
        println!("{}", "=".repeat(80));
    }
    Ok(())
}
