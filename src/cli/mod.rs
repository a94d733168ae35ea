mod args;
mod config;
mod global;
mod handlers;

use clap::Parser;

use args::Commands;
use global::GlobalArgs;

#[derive(Parser)]
#[command(name = "base-codec")]
#[command(version)]
#[command(about = "Encode and decode binary data with Base64, Base32, Ascii85, Base58 and related formats", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode(args) => {
            let registry = config::load_registry(&cli.global)?;
            handlers::encode::handle(args, &registry)
        }
        Commands::Decode(args) => {
            let registry = config::load_registry(&cli.global)?;
            handlers::decode::handle(args, &registry)
        }
        Commands::Radix { action } => handlers::radix::handle(action),
        Commands::List(args) => {
            let registry = config::load_registry(&cli.global)?;
            handlers::list::handle(args, &cli.global, &registry)
        }
    }
}
