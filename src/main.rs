use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use clap::{Parser, Subcommand};
use pocket_solver::{
    verify_table, CubeKey, Facelets, Net, Result, Solver, StateTable, TableBuilder, Turn,
    SOLVED_KEY,
};

const DEFAULT_TABLE_PATH: &str = "state_table.bin";

/// Optimal solver for the 2x2x2 pocket cube.
///
/// Hold the cube with the red-yellow-blue corner bottom-back-right and enter
/// the stickers face by face (top, left, front, right, back, bottom), each
/// face read left to right, top to bottom, using the letters o r w y g b.
/// The solved cube is "oooo gggg wwww bbbb yyyy rrrr".
#[derive(Debug, Parser)]
#[command(name = "pocket", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Build the state table by breadth-first search and write it to disk.
    Build {
        #[arg(short, long, default_value = DEFAULT_TABLE_PATH)]
        output: PathBuf,
    },
    /// Solve a cube given as 24 facelet letters.
    Solve {
        #[arg(required = true)]
        facelets: Vec<String>,
        #[arg(short, long, default_value = DEFAULT_TABLE_PATH)]
        table: PathBuf,
    },
    /// Draw a cube given as facelets or as a raw key.
    Show {
        facelets: Vec<String>,
        #[arg(short, long, conflicts_with = "facelets")]
        key: Option<u64>,
    },
    /// Apply turns (FC FCC LC LCC TC TCC) to the solved cube.
    Apply {
        #[arg(required = true)]
        turns: Vec<String>,
    },
    /// Check that every state in a table file solves within 14 moves.
    Verify {
        #[arg(short, long, default_value = DEFAULT_TABLE_PATH)]
        table: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli.command) {
        eprintln!("ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Build { output } => {
            let started_at = Instant::now();
            println!("Building state table...");
            let (table, report) = TableBuilder::default().build()?;
            println!(
                "Discovered {} states in {:?} (max depth {})",
                report.entries,
                started_at.elapsed(),
                report.max_depth
            );
            for (depth, count) in report.depth_histogram.iter().enumerate() {
                println!("  depth {:>2}: {:>9}", depth, count);
            }
            table.save(&output)?;
            println!("Wrote {}", output.display());
        }
        Command::Solve { facelets, table } => {
            let cube: Facelets = facelets.join(" ").parse()?;
            let key = cube.to_key()?;
            println!("The cube you entered is:\n\n{}\n", cube.net());

            let solver = Solver::new(Arc::new(StateTable::load_complete(&table)?));
            let turns = solver.solve(key)?;
            if turns.is_empty() {
                println!("Already solved.");
            } else {
                for turn in &turns {
                    println!("{}", turn);
                }
                println!("\n{} moves", turns.len());
            }
        }
        Command::Show { facelets, key } => {
            let key = match key {
                Some(raw) => CubeKey::new(raw)?,
                None if facelets.is_empty() => SOLVED_KEY,
                None => facelets.join(" ").parse::<Facelets>()?.to_key()?,
            };
            print_cube(key);
        }
        Command::Apply { turns } => {
            let turns = Turn::parse_sequence(&turns.join(" "))?;
            print_cube(pocket_solver::pocket::moves::apply_all(SOLVED_KEY, turns));
        }
        Command::Verify { table } => {
            let table = StateTable::load(&table)?;
            println!("{} entries", table.len());
            let longest = verify_table(&table)?;
            println!("All entries solve; longest solution is {} moves", longest);
        }
    }
    Ok(())
}

fn print_cube(key: CubeKey) {
    println!("Key: {} ({})", key.raw(), key);
    if let Some(facelets) = Facelets::from_key(key) {
        println!("Facelets: {}", facelets);
    }
    println!("\n{}", Net::from_key(key));
}
