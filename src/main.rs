//! Black Box terminal shell
//!
//! Parses the command line, builds a game and reads commands from stdin
//! until every atom is found, `quit`, or end of input.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;

use black_box::sim::RayEvent;
use black_box::{Coord, Game, RayOutcome, Settings};

/// Layout used when no --atoms are given
const DEFAULT_ATOMS: [(u8, u8); 4] = [(7, 1), (7, 3), (3, 6), (1, 6)];

#[derive(Parser, Debug)]
#[command(name = "black-box", about = "Find the hidden atoms by firing rays into the box")]
struct Args {
    /// Atom layout as space-separated "row,col" pairs, e.g. "7,1 7,3 3,6"
    #[arg(long, value_parser = parse_coord, num_args = 1.., value_delimiter = ' ')]
    atoms: Option<Vec<Coord>>,

    /// JSON file with scoring rules
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Show hidden atoms and ray paths
    #[arg(long)]
    reveal: bool,

    /// Debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Fire(u8, u8),
    Guess(u8, u8),
    Score,
    Left,
    Board,
    Help,
    Quit,
}

fn parse_coord(s: &str) -> Result<Coord, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected row,col but got `{s}`"))?;
    let row = row.trim().parse::<u8>().map_err(|e| format!("bad row `{row}`: {e}"))?;
    let col = col.trim().parse::<u8>().map_err(|e| format!("bad column `{col}`: {e}"))?;
    Ok(Coord::new(row, col))
}

fn parse_command(line: &str) -> Result<Command, String> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Err("empty command".to_string());
    };
    let mut number = |what: &str| -> Result<u8, String> {
        words
            .next()
            .ok_or_else(|| format!("missing {what}"))?
            .parse::<u8>()
            .map_err(|e| format!("bad {what}: {e}"))
    };

    match verb.to_lowercase().as_str() {
        "fire" | "f" => Ok(Command::Fire(number("row")?, number("column")?)),
        "guess" | "g" => Ok(Command::Guess(number("row")?, number("column")?)),
        "score" => Ok(Command::Score),
        "left" => Ok(Command::Left),
        "board" | "b" => Ok(Command::Board),
        "help" | "?" => Ok(Command::Help),
        "quit" | "q" | "exit" => Ok(Command::Quit),
        other => Err(format!("unknown command `{other}` (try `help`)")),
    }
}

fn print_help(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Commands:")?;
    writeln!(out, "  fire R C    fire a ray from border cell (R, C)")?;
    writeln!(out, "  guess R C   guess an atom at (R, C)")?;
    writeln!(out, "  score       show the current score")?;
    writeln!(out, "  left        show how many atoms remain")?;
    writeln!(out, "  board       draw the board")?;
    writeln!(out, "  quit        leave the game")
}

fn describe_event(event: &RayEvent) -> String {
    match event {
        RayEvent::Entered { at, heading } => format!("enter at {at} heading {heading}"),
        RayEvent::Reflected { at } => format!("reflect at {at}"),
        RayEvent::Deflected { at, from, to } => format!("deflect at {at}: {from} -> {to}"),
        RayEvent::Reversed { at } => format!("reverse at {at}"),
        RayEvent::Absorbed { at } => format!("absorbed at {at}"),
        RayEvent::Exited { at } => format!("exit at {at}"),
    }
}

/// Run one command, returning false when the shell should stop
fn run_command(game: &mut Game, command: Command, reveal: bool, out: &mut impl Write) -> io::Result<bool> {
    match command {
        Command::Fire(row, col) => {
            let result = if reveal {
                let traced = game.trace_ray(row, col);
                if let Ok(trace) = &traced {
                    for event in &trace.events {
                        writeln!(out, "  {}", describe_event(event))?;
                    }
                }
                traced.map(|trace| trace.outcome)
            } else {
                game.fire_ray(row, col)
            };
            match result {
                Ok(RayOutcome::Exited(exit)) => writeln!(out, "Ray exits at {exit}")?,
                Ok(RayOutcome::Absorbed) => writeln!(out, "Ray absorbed")?,
                Ok(RayOutcome::Rejected) | Err(black_box::GameError::InvalidEntryPoint { .. }) => {
                    writeln!(out, "({row}, {col}) is not a legal entry point")?
                }
                Err(e) => writeln!(out, "Internal error: {e}")?,
            }
            writeln!(out, "Score: {}", game.score())?;
        }
        Command::Guess(row, col) => {
            if game.guess_atom(row, col) {
                writeln!(out, "Hit! {} atoms left", game.remaining_atoms())?;
            } else {
                writeln!(out, "Miss")?;
            }
            writeln!(out, "Score: {}", game.score())?;
        }
        Command::Score => writeln!(out, "Score: {}", game.score())?,
        Command::Left => writeln!(out, "{} of {} atoms left", game.remaining_atoms(), game.atom_count())?,
        Command::Board => write!(out, "{}", game.board_view(reveal))?,
        Command::Help => print_help(out)?,
        Command::Quit => return Ok(false),
    }
    Ok(true)
}

fn main() {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();
    log::info!("Black Box starting...");

    let settings = args
        .settings
        .as_deref()
        .map(Settings::load)
        .unwrap_or_default();
    let atoms = args
        .atoms
        .unwrap_or_else(|| DEFAULT_ATOMS.iter().copied().map(Coord::from).collect());

    let mut game = match Game::with_settings(&atoms, &settings) {
        Ok(game) => game,
        Err(e) => {
            eprintln!("Invalid atom layout: {e}");
            std::process::exit(2);
        }
    };

    if let Err(e) = run(&mut game, args.reveal) {
        eprintln!("I/O error: {e}");
        std::process::exit(1);
    }
}

fn run(game: &mut Game, reveal: bool) -> io::Result<()> {
    let stdin = io::stdin();
    let mut out = io::stdout().lock();

    writeln!(out, "Black Box: {} atoms hidden, score {}", game.atom_count(), game.score())?;
    write!(out, "{}", game.board_view(reveal))?;
    print_help(&mut out)?;

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match parse_command(&line) {
            Ok(command) => {
                if !run_command(game, command, reveal, &mut out)? {
                    break;
                }
            }
            Err(msg) => writeln!(out, "{msg}")?,
        }
        if game.is_solved() {
            writeln!(out, "All atoms found! Final score: {}", game.score())?;
            break;
        }
        out.flush()?;
    }
    Ok(())
}
