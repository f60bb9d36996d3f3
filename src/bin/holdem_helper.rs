use clap::Parser;
use holdem_helper::advisor::{Advisor, AdvisorProfile};
use holdem_helper::console::Console;
use holdem_helper::session::Session;
use std::io;
use std::process::ExitCode;

/// Interactive Texas Hold'em hand advisor.
#[derive(Parser, Debug)]
#[command(name = "holdem-helper", version, about)]
struct Args {
    /// Seed for the bluff roll. Defaults to the current time.
    #[arg(long)]
    seed: Option<u64>,

    /// Chance, in percent, of recommending a bluff raise.
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(0..=100))]
    bluff_percent: u32,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let mut profile = AdvisorProfile::default().with_bluff_percent(args.bluff_percent);
    if let Some(seed) = args.seed {
        profile = profile.with_seed(seed);
    }
    let advisor = Advisor::from_profile(profile);
    let console = Console::new(io::stdin().lock(), io::stdout());
    let mut session = Session::new(console, advisor);

    match session.run() {
        Ok(outcome) => {
            log::info!("session ended: {outcome:?}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("session aborted: {e:?}");
            println!("{e}");
            ExitCode::FAILURE
        }
    }
}
