use anyhow::{Result, bail};
use clap::Parser;
use peg_solitaire::{
    Outcome, SolveResult, Solver, SolverConfig,
    action::{Move, apply_move, describe_move, format_moves},
    board::{Board, TOTAL_SLOTS},
    solver::DEFAULT_MAX_STATES,
};
use std::io::{IsTerminal, Write, stderr};
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Slot (0-14) whose peg is removed to open the game
    #[arg(allow_negative_numbers = true, required_unless_present = "all")]
    slot: Option<i64>,
    /// Max states to explore before giving up
    #[arg(short = 's', long, default_value_t = DEFAULT_MAX_STATES, value_name = "NUM")]
    max_states: u32,
    /// Skip boards already searched without success
    #[arg(short, long)]
    prune: bool,
    /// Solve every opening slot and print a summary line for each
    #[arg(short, long, conflicts_with = "slot")]
    all: bool,
    /// Print the board after every move
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let Cli {
        slot,
        max_states,
        prune,
        all,
        verbose,
    } = Cli::parse();

    let mut solver = Solver::new(SolverConfig {
        max_states,
        prune_dead_states: prune,
    });

    if all {
        return solve_all(&mut solver);
    }
    let Some(slot) = slot else {
        bail!("No opening `slot` provided.");
    };

    let moves = do_solve(&mut solver, slot)?;
    if verbose {
        println!("{}", walk_through(&moves)?);
    } else {
        println!("{}", format_moves(&moves));
    }

    Ok(())
}

fn do_solve(solver: &mut Solver, slot: i64) -> Result<Vec<Move>> {
    let SolveResult {
        outcome,
        states,
        elapsed,
    } = with_spinner("Solving the game...", || solver.solve(slot))?;
    let elapsed_str = format_elapsed(elapsed);
    match outcome {
        Outcome::Solved(moves) => {
            let jumps = moves.iter().filter(|m| m.is_jump()).count();
            println!("✓ Solved in {jumps} Jumps — Time: {elapsed_str}, States: {states}\n");
            Ok(moves)
        }
        Outcome::Exhausted => {
            bail!("✗ No solution from slot {slot} — Time: {elapsed_str}, States: {states}")
        }
        Outcome::LimitReached => {
            bail!("✗ Unable to solve from slot {slot}; reached max states {states}")
        }
    }
}

fn solve_all(solver: &mut Solver) -> Result<()> {
    for slot in 0..TOTAL_SLOTS as i64 {
        let SolveResult {
            outcome,
            states,
            elapsed,
        } = solver.solve(slot)?;
        let status = match &outcome {
            Outcome::Solved(moves) => format_moves(&moves[1..]).trim_end().replace('\n', " "),
            Outcome::Exhausted => "no solution".to_string(),
            Outcome::LimitReached => "gave up".to_string(),
        };
        println!(
            "{slot:>2}: {status} (States: {states}, Time: {})",
            format_elapsed(elapsed)
        );
    }
    Ok(())
}

fn walk_through(moves: &[Move]) -> Result<String> {
    let mut board = Board::full();
    let mut output = board.pretty_print();
    for mov in moves {
        output.push_str(&format!("\n{}\n", describe_move(&board, mov)));
        apply_move(&mut board, mov)?;
        output.push_str(&board.pretty_print());
    }
    Ok(output)
}

fn with_spinner<T, F: FnOnce() -> T>(message: &str, f: F) -> T {
    if stderr().is_terminal() {
        let spinning = Arc::new(AtomicBool::new(true));
        let spinning_clone = Arc::clone(&spinning);
        let message = message.to_string();

        let handle = std::thread::spawn(move || {
            let spinner_chars = ['|', '/', '-', '\\'];
            let mut i = 0;
            let stderr = stderr();
            let mut handle = stderr.lock();

            let _ = write!(handle, "\x1b[?25l"); // hide cursor
            let _ = handle.flush();

            while spinning_clone.load(Ordering::Relaxed) {
                let spinner_char = spinner_chars[i % spinner_chars.len()];
                let _ = write!(handle, "\r{spinner_char} {message}");
                let _ = handle.flush();
                std::thread::sleep(Duration::from_millis(100));
                i += 1;
            }

            let _ = write!(handle, "\r\x1b[2K\r\x1b[?25h"); // clear line and show cursor
            let _ = handle.flush();
        });

        let result = f();
        spinning.store(false, Ordering::Relaxed);
        let _ = handle.join();
        result
    } else {
        f()
    }
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
