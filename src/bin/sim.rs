use bttlship::{Coord, GameSession, GameStatus, BOARD_SIZE};
use rand::seq::SliceRandom;
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

/// Plays one game by firing at every cell in a random order until the
/// fleet is gone, then prints a JSON summary.
fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut session = GameSession::start(&mut rng)?;
    let n = BOARD_SIZE as usize;
    let mut targets: Vec<Coord> = (0..n * n).map(|i| Coord { row: i / n, col: i % n }).collect();
    targets.shuffle(&mut rng);

    for coord in targets {
        if session.status() == GameStatus::Won {
            break;
        }
        session.fire(coord)?;
    }

    let card = session.score_card();
    let result = json!({
        "seed": seed,
        "status": format!("{:?}", session.status()),
        "shots": card.shots(),
        "hits": card.hits,
        "misses": card.misses,
        "accuracy": card.accuracy(),
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
