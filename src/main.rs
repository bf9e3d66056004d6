#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use armada::{init_logging, StandardBoard, FLEET};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible layouts (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(
        long,
        default_value_t = 3,
        help = "Whole-fleet attempts before giving up when placement fails"
    )]
    fleet_retries: u32,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (layout will be reproducible)", s);
    }
    let mut rng = if let Some(s) = cli.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let attempts = cli.fleet_retries.max(1);
    for attempt in 1..=attempts {
        let mut board = StandardBoard::new();
        match board.place_fleet(&mut rng, &FLEET) {
            Ok(()) => {
                log::info!(
                    "placed {} ships covering {} cells",
                    board.ships().len(),
                    board.occupied_cells()
                );
                for ship in board.ships() {
                    let (r, c) = ship.origin();
                    println!(
                        "{:<12} size {} at ({}, {}) {:?}",
                        ship.name(),
                        ship.size(),
                        r,
                        c,
                        ship.orientation()
                    );
                }
                println!("\n{}", board);
                return Ok(());
            }
            Err(e) => {
                log::warn!("fleet placement attempt {}/{} failed: {}", attempt, attempts, e);
                if attempt == attempts {
                    return Err(anyhow::anyhow!(
                        "could not place the fleet after {} attempts: {}",
                        attempts,
                        e
                    ));
                }
            }
        }
    }
    Ok(())
}
