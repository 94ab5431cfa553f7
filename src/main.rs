#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::io::{self, BufRead, Write};
#[cfg(feature = "std")]
use std::sync::Arc;

#[cfg(feature = "std")]
use bttlship::{
    format_time, init_logging,
    ui::{parse_coord, render_board, render_fleet},
    ApiService, GameSession, GameStatus, InMemoryScoreStore, ServerConfig, Session,
    SessionIdentity, Skeleton, Stub, TcpTransport,
};
#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use log::{info, warn};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use tokio::net::TcpListener;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Run the leaderboard server.
    Serve {
        #[arg(long, default_value = "127.0.0.1:7878")]
        bind: String,
        #[arg(long, default_value_t = bttlship::DEFAULT_PAGE_SIZE)]
        page_size: usize,
    },
    /// Hunt a hidden fleet in the terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible boards (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Leaderboard server to submit the final score to")]
        connect: Option<String>,
        #[arg(long, default_value = "local")]
        post: String,
        #[arg(long)]
        user: Option<String>,
    },
    /// Show a page of the leaderboard.
    Leaderboard {
        #[arg(long, default_value = "127.0.0.1:7878")]
        connect: String,
        #[arg(long, default_value = "local")]
        post: String,
        #[arg(long)]
        user: Option<String>,
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { bind, page_size } => {
            let config = ServerConfig {
                bind,
                page_size,
                ..ServerConfig::default()
            };
            serve(config).await
        }
        Commands::Play {
            seed,
            connect,
            post,
            user,
        } => {
            let mut rng = match seed {
                Some(s) => {
                    println!("Using fixed seed: {} (board will be reproducible)", s);
                    SmallRng::seed_from_u64(s)
                }
                None => SmallRng::from_rng(&mut rand::rng()),
            };
            let session = play(&mut rng)?;
            let Some(score) = session.final_score() else {
                println!("Game abandoned.");
                return Ok(());
            };
            if let Some(addr) = connect {
                let mut stub = connect_stub(&addr, &post, user).await?;
                let stored = stub.submit_score(score.time_ms, score.accuracy).await?;
                println!(
                    "Best time for {}: {} ({}% accuracy)",
                    stored.username,
                    format_time(stored.time),
                    stored.accuracy
                );
                if let Some(own) = stub.own_score().await? {
                    println!("Your rank: #{}", own.rank);
                }
            }
            Ok(())
        }
        Commands::Leaderboard {
            connect,
            post,
            user,
            page,
        } => {
            let has_user = user.is_some();
            let mut stub = connect_stub(&connect, &post, user).await?;
            let listing = stub.scores(page).await?;
            println!("Leaderboard page {}/{}", listing.page, listing.total_pages.max(1));
            for entry in &listing.entries {
                println!(
                    "  #{:<3} {:<20} {:>10} {:>5}%",
                    entry.rank,
                    entry.username,
                    format_time(entry.score),
                    entry.accuracy
                );
            }
            if listing.entries.is_empty() {
                println!("  (no scores yet)");
            }
            if has_user {
                match stub.own_score().await? {
                    Some(own) => println!(
                        "You: #{} {} {}%",
                        own.rank,
                        format_time(own.score),
                        own.accuracy
                    ),
                    None => println!("You have no score on this board yet."),
                }
            }
            Ok(())
        }
    }
}

#[cfg(feature = "std")]
async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let store = Arc::new(InMemoryScoreStore::new());
    let service =
        Arc::new(ApiService::new(store, SessionIdentity).with_page_size(config.page_size));
    let listener = TcpListener::bind(&config.bind).await?;
    info!("leaderboard listening on {}", config.bind);

    loop {
        let (stream, addr) = listener.accept().await?;
        info!("client connected from {}", addr);
        let transport = TcpTransport::with_config(stream, &config);
        let service = service.clone();
        tokio::spawn(async move {
            let mut skeleton = Skeleton::new(service, transport);
            if let Err(e) = skeleton.run().await {
                warn!("connection {} ended with an error: {}", addr, e);
            }
        });
    }
}

#[cfg(feature = "std")]
async fn connect_stub(
    addr: &str,
    post: &str,
    user: Option<String>,
) -> anyhow::Result<Stub<TcpTransport>> {
    let transport = TcpTransport::connect(addr).await?;
    let session = Session {
        post_id: Some(post.to_string()),
        username: user,
    };
    let mut stub = Stub::new(transport, session);
    let init = stub.init().await?;
    info!("connected to post {} as {}", init.post_id, init.username);
    Ok(stub)
}

#[cfg(feature = "std")]
fn play(rng: &mut SmallRng) -> anyhow::Result<GameSession> {
    let mut session = GameSession::start(rng)?;
    println!("Enemy fleet hidden. Fire with coordinates like B7, or 'quit'.");
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while session.status() == GameStatus::InProgress {
        println!("\n{}", render_board(session.board(), false));
        print!("Target> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            return Ok(session);
        };
        let line = line?;
        if line.trim().eq_ignore_ascii_case("quit") {
            return Ok(session);
        }
        let coord = match parse_coord(&line) {
            Ok(c) => c,
            Err(msg) => {
                println!("{}", msg);
                continue;
            }
        };
        let outcome = session.fire(coord)?;
        if outcome.already_attacked {
            println!("{} was already attacked.", coord);
        } else if let (Some(true), Some(name)) = (outcome.destroyed, outcome.ship_name) {
            println!("{}: hit! {} destroyed!", coord, name);
        } else if outcome.hit {
            println!("{}: hit!", coord);
        } else {
            println!("{}: miss.", coord);
        }
    }

    let card = session.score_card();
    println!("\n{}", render_board(session.board(), true));
    println!("{}", render_fleet(session.board()));
    println!(
        "\nFleet destroyed in {} with {} shots ({}% accuracy).",
        format_time(session.elapsed().as_millis() as u64),
        card.shots(),
        card.accuracy()
    );
    Ok(session)
}
