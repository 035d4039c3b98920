use anyhow::anyhow;
use clap::Parser;
use gridbattle::{Adversary, Difficulty, MatchEngine, Phase, Side};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

/// Play full matches with the human side driven by a second adversary and
/// print a JSON summary.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, default_value_t = 100)]
    games: u32,
    #[arg(long, default_value_t = 1)]
    seed: u64,
    /// Strength of the computer side.
    #[arg(long, value_enum, default_value_t = Difficulty::Hard)]
    difficulty: Difficulty,
    /// Strength of the adversary standing in for the human.
    #[arg(long, value_enum, default_value_t = Difficulty::Medium)]
    opponent: Difficulty,
}

struct MatchSummary {
    winner: Side,
    human_turns: u32,
    computer_turns: u32,
}

fn play_one(
    seed: u64,
    difficulty: Difficulty,
    opponent: Difficulty,
) -> anyhow::Result<MatchSummary> {
    let mut engine = MatchEngine::new(difficulty, SmallRng::seed_from_u64(seed));
    let mut stand_in_rng = SmallRng::seed_from_u64(seed.wrapping_add(1));
    let mut stand_in = Adversary::new(opponent, &mut stand_in_rng);

    engine.place_remaining_randomly()?;
    engine.confirm_placement()?;
    loop {
        match engine.phase() {
            Phase::ComputerAttacking => {
                engine.computer_tick()?;
            }
            Phase::AwaitingHumanTurnStart => engine.start_human_turn()?,
            Phase::HumanAttacking => {
                let target = stand_in
                    .next_target(&mut stand_in_rng)
                    .ok_or_else(|| anyhow!("stand-in ran out of targets"))?;
                let outcome = engine.human_attack(target)?;
                stand_in.record_outcome(target, outcome, engine.board(Side::Computer));
            }
            Phase::GameOver => break,
            Phase::Placement => return Err(anyhow!("match fell back to placement")),
        }
        engine.drain_events();
    }

    let winner = engine.winner().ok_or_else(|| anyhow!("game over without a winner"))?;
    let turns = engine.turn_counts();
    Ok(MatchSummary {
        winner,
        human_turns: turns.human,
        computer_turns: turns.computer,
    })
}

fn main() -> anyhow::Result<()> {
    gridbattle::init_logging();
    let args = Args::parse();
    if args.games == 0 {
        return Err(anyhow!("--games must be at least 1"));
    }

    let mut computer_wins = 0u32;
    let mut human_wins = 0u32;
    let mut computer_turns = 0u64;
    let mut human_turns = 0u64;
    for i in 0..args.games {
        let seed = args.seed.wrapping_add(u64::from(i) * 2);
        let res = play_one(seed, args.difficulty, args.opponent)?;
        match res.winner {
            Side::Computer => computer_wins += 1,
            Side::Human => human_wins += 1,
        }
        computer_turns += u64::from(res.computer_turns);
        human_turns += u64::from(res.human_turns);
    }

    let games = f64::from(args.games);
    let result = json!({
        "games": args.games,
        "difficulty": args.difficulty,
        "opponent": args.opponent,
        "computer_wins": computer_wins,
        "human_wins": human_wins,
        "mean_turns": {
            "computer": computer_turns as f64 / games,
            "human": human_turns as f64 / games,
        },
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
