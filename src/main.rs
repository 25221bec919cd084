use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use vmm_sim::{AddressSource, SimConfig};

#[derive(Parser)]
#[command(name = "vmm-sim")]
#[command(about = "Demand-paged virtual memory simulator with a 16-entry TLB")]
#[command(version)]
struct Cli {
    /// Backing store image, at least 65536 bytes (256 pages of 256 bytes)
    backing_store: PathBuf,

    /// File with one logical address per line, or `-` for stdin
    addresses: PathBuf,

    /// Physical frames available for demand paging (1-256)
    #[arg(long, default_value_t = mmu::FRAMES)]
    frames: usize,

    /// Only print the final statistics
    #[arg(long)]
    summary_only: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let config = SimConfig::new(cli.backing_store, AddressSource::from_arg(&cli.addresses))
        .summary_only(cli.summary_only)
        .frames(cli.frames);

    match config.and_then(|config| vmm_sim::simulate(&config)) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}
