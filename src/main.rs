use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin};

use gridbattle::cli::{
    coord_label, parse_coord, parse_placement, render_own_board, render_target_board, JsonLines,
    Narrator,
};
use gridbattle::{
    drive_computer_turn, forward_events, init_logging, Difficulty, EventSink, MatchConfig,
    MatchEngine, Outcome, Pacing, Phase, PlacementReply, PlacementRequest, Side,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a match against the computer in the terminal.
    Play {
        #[arg(long, value_enum, default_value_t = Difficulty::Easy)]
        difficulty: Difficulty,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Deploy your fleet at random instead of placing ships by hand")]
        auto_place: bool,
        #[arg(long, help = "Write events as JSON lines instead of prose")]
        json: bool,
        #[arg(long, help = "Skip the delays between computer shots")]
        fast: bool,
    },
}

type Input = Lines<BufReader<Stdin>>;

async fn prompt(input: &mut Input, text: &str) -> anyhow::Result<Option<String>> {
    let mut out = tokio::io::stdout();
    out.write_all(text.as_bytes()).await?;
    out.flush().await?;
    Ok(input.next_line().await?)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            difficulty,
            seed,
            auto_place,
            json,
            fast,
        } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let config = MatchConfig {
                difficulty,
                seed,
                pacing: if fast {
                    Pacing::immediate()
                } else {
                    Pacing::default()
                },
            };
            let mut sink: Box<dyn EventSink> = if json {
                Box::new(JsonLines)
            } else {
                Box::new(Narrator)
            };
            play(config, auto_place, sink.as_mut()).await?;
        }
    }
    Ok(())
}

async fn play(
    config: MatchConfig,
    auto_place: bool,
    sink: &mut dyn EventSink,
) -> anyhow::Result<()> {
    let mut engine = MatchEngine::from_config(&config);
    let mut input = BufReader::new(tokio::io::stdin()).lines();
    println!("New match against the {} computer.", config.difficulty);

    if auto_place {
        engine.place_remaining_randomly()?;
        forward_events(&mut engine, sink).await?;
    } else if !place_fleet(&mut engine, &mut input, sink).await? {
        return Ok(());
    }
    println!("\nYour fleet:\n{}", render_own_board(engine.board(Side::Human)));
    engine.confirm_placement()?;
    forward_events(&mut engine, sink).await?;

    loop {
        match engine.phase() {
            Phase::ComputerAttacking => {
                drive_computer_turn(&mut engine, &config.pacing, sink).await?;
            }
            Phase::AwaitingHumanTurnStart => {
                println!("\nYour fleet:\n{}", render_own_board(engine.board(Side::Human)));
                if prompt(&mut input, "Press Enter to take your turn: ").await?.is_none() {
                    return Ok(());
                }
                engine.start_human_turn()?;
                forward_events(&mut engine, sink).await?;
            }
            Phase::HumanAttacking => {
                println!("\nEnemy waters:\n{}", render_target_board(engine.board(Side::Computer)));
                let Some(line) = prompt(&mut input, "Fire at: ").await? else {
                    return Ok(());
                };
                let Some(target) = parse_coord(&line) else {
                    println!("Invalid coordinate");
                    continue;
                };
                if engine.human_attack(target)? == Outcome::AlreadyAttacked {
                    println!("You already fired at {}.", coord_label(target));
                }
                forward_events(&mut engine, sink).await?;
            }
            Phase::GameOver | Phase::Placement => break,
        }
    }

    println!("\nEnemy fleet:\n{}", render_own_board(engine.board(Side::Computer)));
    Ok(())
}

/// Interactive placement. Returns `false` when stdin closed before the fleet
/// was complete.
async fn place_fleet(
    engine: &mut MatchEngine,
    input: &mut Input,
    sink: &mut dyn EventSink,
) -> anyhow::Result<bool> {
    println!("Place your ships (e.g. A5 H). Press enter for random placement.");
    loop {
        let Some(def) = engine.pending_ships().next() else {
            break;
        };
        println!("{}", render_own_board(engine.board(Side::Human)));
        let text = format!("Place {} (length {}): ", def.name(), def.cells());
        let Some(line) = prompt(input, &text).await? else {
            return Ok(false);
        };
        let line = line.trim();
        if line.is_empty() {
            engine.place_remaining_randomly()?;
        } else if let Some((origin, axis)) = parse_placement(line) {
            let footprint = def.footprint(origin, axis);
            let request = PlacementRequest {
                ship: def.id(),
                origin,
                width: footprint.width,
                height: footprint.height,
            };
            if let PlacementReply::Rejected(reason) = engine.place_ship(request)? {
                log::debug!("rejected {:?}: {}", request, reason);
            }
        } else {
            println!("Invalid input");
        }
        forward_events(engine, sink).await?;
    }
    Ok(true)
}
