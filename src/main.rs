#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleship_board::{
    init_logging, place_fleet, print_board, AttackResult, BoardState, BoardView, Placement, ShipSpan,
    DEFAULT_DELAY_MS, STANDARD_FLEET,
};
#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::io::BufRead;
#[cfg(feature = "std")]
use tokio::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Print board snapshots as JSON instead of the marker grid.
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Walk through placement, attacks and loss on scripted boards.
    Demo {
        #[arg(long, default_value_t = DEFAULT_DELAY_MS, help = "Pause between steps in milliseconds")]
        delay_ms: u64,
    },
    /// Lay out a random fleet and read "row col" attacks from stdin.
    Play {
        #[arg(long, help = "Fix RNG seed for a reproducible fleet (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 0, help = "Pause after each attack in milliseconds")]
        delay_ms: u64,
        #[arg(long, help = "Show intact ships on the printed board")]
        reveal: bool,
    },
}

/// Ships laid out on the first demo board.
#[cfg(feature = "std")]
const DEMO_FLEET: [ShipSpan; 4] = [
    ShipSpan::new((0, 0), (0, 5)),
    ShipSpan::new((2, 0), (6, 0)),
    ShipSpan::new((5, 5), (8, 5)),
    ShipSpan::new((2, 8), (6, 8)),
];

#[cfg(feature = "std")]
const DEMO_TARGET: ShipSpan = ShipSpan::new((0, 2), (0, 6));

#[cfg(feature = "std")]
struct Output {
    json: bool,
    reveal: bool,
    delay: Duration,
}

#[cfg(feature = "std")]
impl Output {
    fn show(&self, board: &BoardState) -> anyhow::Result<()> {
        let snapshot = board.snapshot()?;
        if self.json {
            println!("{}", serde_json::to_string(&snapshot)?);
        } else if self.reveal {
            print_board(&snapshot);
        } else {
            print!("{}", BoardView::concealed(&snapshot));
        }
        Ok(())
    }

    /// Print the board, pause, and announce a loss once the game is active.
    async fn show_and_check_loss(&self, board: &BoardState) -> anyhow::Result<bool> {
        self.show(board)?;
        self.pause().await;
        let lost = board.is_started() && board.has_lost()?;
        if lost {
            println!("Game lost!");
        }
        Ok(lost)
    }

    async fn pause(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

#[cfg(feature = "std")]
fn place_reporting(board: &mut BoardState, span: ShipSpan) -> anyhow::Result<()> {
    match span.place_on(board)? {
        Placement::Placed => log::info!("placed {}", span),
        Placement::Rejected => println!("Ship {} overlaps another ship", span),
    }
    Ok(())
}

#[cfg(feature = "std")]
async fn run_demo(out: &Output) -> anyhow::Result<()> {
    let mut board = BoardState::new();
    println!("Initial empty board");
    board.initialize()?;
    out.show(&board)?;
    out.pause().await;

    println!("Adding ships");
    for span in DEMO_FLEET {
        place_reporting(&mut board, span)?;
    }
    board.start()?;
    out.show_and_check_loss(&board).await?;
    out.pause().await;

    let mut board = BoardState::new();
    board.initialize()?;
    place_reporting(&mut board, DEMO_TARGET)?;
    board.start()?;
    println!("Starting game with one ship");
    out.pause().await;
    out.show_and_check_loss(&board).await?;

    let row = DEMO_TARGET.start.0;
    for col in 0..=DEMO_TARGET.end.1 {
        println!("Attacking ({}, {})", row, col);
        match board.receive_attack(row, col)? {
            AttackResult::Hit => println!("Hit!"),
            AttackResult::Miss => println!("Miss!"),
        }
        out.show_and_check_loss(&board).await?;
    }
    Ok(())
}

/// Parse "row col" or "row,col".
#[cfg(feature = "std")]
fn parse_coord(input: &str) -> Option<(i32, i32)> {
    let mut parts = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((row, col))
}

#[cfg(feature = "std")]
async fn run_play(out: &Output, seed: Option<u64>) -> anyhow::Result<()> {
    let mut rng = if let Some(s) = seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };
    let mut board = BoardState::new();
    board.initialize()?;
    place_fleet(&mut board, &mut rng, &STANDARD_FLEET)?;
    board.start()?;
    println!("Fleet placed. Enter attacks as \"row col\" (0-9).");
    out.show(&board)?;

    let stdin = std::io::stdin();
    let mut attacks = 0usize;
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let Some((row, col)) = parse_coord(line) else {
            eprintln!("Could not parse \"{}\", expected \"row col\"", line);
            continue;
        };
        match board.receive_attack(row, col) {
            Ok(AttackResult::Hit) => println!("Hit!"),
            Ok(AttackResult::Miss) => println!("Miss!"),
            Err(e) => {
                eprintln!("{}", e);
                continue;
            }
        }
        attacks += 1;
        if out.show_and_check_loss(&board).await? {
            println!("Fleet sunk after {} attacks", attacks);
            break;
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Demo { delay_ms } => {
            let out = Output {
                json: cli.json,
                reveal: true,
                delay: Duration::from_millis(delay_ms),
            };
            run_demo(&out).await?;
        }
        Commands::Play {
            seed,
            delay_ms,
            reveal,
        } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (fleet will be reproducible)", s);
            }
            let out = Output {
                json: cli.json,
                reveal,
                delay: Duration::from_millis(delay_ms),
            };
            run_play(&out, seed).await?;
        }
    }
    Ok(())
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::parse_coord;

    #[test]
    fn parses_space_and_comma_forms() {
        assert_eq!(parse_coord("3 4"), Some((3, 4)));
        assert_eq!(parse_coord(" 0,9 "), Some((0, 9)));
        assert_eq!(parse_coord("-1 3"), Some((-1, 3)));
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(parse_coord("3"), None);
        assert_eq!(parse_coord("a b"), None);
        assert_eq!(parse_coord("1 2 3"), None);
    }
}
