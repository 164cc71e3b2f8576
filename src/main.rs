use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = slotboard::cli::Cli::parse();
    if let Err(e) = slotboard::cmd::dispatch(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
