//! Tiffin CLI — meal-subscription pricing.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "tiffin",
    version,
    about = "Meal-subscription pricing — plan building, add-ons, aggregate summaries"
)]
struct Cli {
    #[command(subcommand)]
    command: tiffin::cli::Commands,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = tiffin::cli::dispatch(cli.command) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
