use clap::Parser;
use tradelog::cli::{self, output, Cli};
use tradelog::config::Config;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(output::OutputConfig::new(cli.json, cli.quiet));

    let config = match Config::load_or_default(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            output::error(&format!("Failed to load config: {e}"));
            std::process::exit(1);
        }
    };

    config.init_logging();

    if let Err(e) = cli::run(cli, &config).await {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
