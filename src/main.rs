use anyhow::Result;
use flashcards::{cli, config::Config, setup_logging};

fn main() -> Result<()> {
    // Parse command line arguments
    let args = cli::parse_args();
    let config = Config::from_args(&args);

    // Setup logging based on debug flag
    setup_logging(config.debug)?;

    cli::execute_session(&config)
}
