//! Kokky Flight entry point
//!
//! Native builds run a headless session, optionally in attract mode, and print
//! the outcome. The playable game is the wasm build driven from the browser.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use clap::Parser;

    use kokky_flight::persistence::{FileStore, MemoryStore, ScoreStore};
    use kokky_flight::sim::GameEvent;
    use kokky_flight::{Session, Tuning};

    /// Run the Kokky Flight simulation without a display
    #[derive(Debug, Parser)]
    #[command(version, about)]
    struct Args {
        /// Obstacle seed (random when omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Number of ticks to simulate
        #[arg(long, default_value_t = 3600)]
        ticks: u32,

        /// JSON tuning file
        #[arg(long)]
        tuning: Option<PathBuf>,

        /// JSON store for best score and identity (in-memory when omitted)
        #[arg(long)]
        store: Option<PathBuf>,

        /// Register this identity before playing
        #[arg(long)]
        identity: Option<String>,

        /// Let the built-in pilot play instead of only flapping once
        #[arg(long)]
        attract: bool,
    }

    pub fn run() -> Result<(), Box<dyn std::error::Error>> {
        let args = Args::parse();

        let tuning = match &args.tuning {
            Some(path) => Tuning::load(path)?,
            None => Tuning::default(),
        };
        let seed = args.seed.unwrap_or_else(rand::random);

        let store: Box<dyn ScoreStore> = match &args.store {
            Some(path) => {
                let store = FileStore::open(path);
                log::info!("Using store {}", store.path().display());
                Box::new(store)
            }
            None => Box::new(MemoryStore::new()),
        };

        let mut session = Session::new(seed, tuning, store)?;
        if let Some(identity) = &args.identity {
            session.set_identity(identity);
        }
        session.idle_mode = args.attract;

        if !session.activate() {
            log::warn!("No identity registered; pass --identity to play");
        }

        let mut crashes = 0;
        let mut flaps = 0;
        for _ in 0..args.ticks {
            session.step();
            for event in session.take_events() {
                match event {
                    GameEvent::Flapped => flaps += 1,
                    GameEvent::Crashed { cause } => {
                        crashes += 1;
                        println!("crash #{}: {:?}", crashes, cause);
                    }
                    _ => {}
                }
            }
            if !args.attract && session.snapshot().is_game_over() {
                break;
            }
        }

        let snapshot = session.snapshot();
        println!("seed {}", session.state().seed);
        println!("{} ({:?})", snapshot.hud_text(), snapshot.phase);
        println!("flaps: {}, crashes: {}", flaps, crashes);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Kokky Flight (headless) starting...");

    if let Err(e) = native::run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::wasm_start, this is just to satisfy the compiler
}
