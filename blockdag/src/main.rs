use blockdag::{cli, commands, Config};
use std::process;
use tracing::error;

fn main() {
    // Parse command line arguments
    let args = cli::parse_args();

    // Initialize logging
    init_logging(&args);

    // Load configuration (use defaults unless config file is provided)
    let mut config = if let Some(config_path) = &args.config_path {
        match Config::load(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("{}", e);
                error!("Failed to load configuration: {}", e);
                process::exit(1);
            }
        }
    } else {
        Config::default()
    };

    // Apply CLI overrides
    config.apply_cli_overrides(&args);

    let result = match &args.command {
        cli::Command::Check => commands::check(&config),
        cli::Command::Sets { node } => commands::sets(&config, node),
        cli::Command::Dump => commands::dump(&config),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        error!("{}", e);
        process::exit(1);
    }
}

fn init_logging(args: &cli::Args) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
