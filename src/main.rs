use clap::Parser;
use dayvault::application::{init::init, ConvertService};
use dayvault::cli::{format_report, Cli, Commands};
use dayvault::error::DayvaultError;
use dayvault::infrastructure::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("dayvault={}", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), DayvaultError> {
    match cli.command {
        Some(Commands::Convert { config, root, flat }) => {
            let mut config = Config::resolve(config.as_deref())?.with_root_override(root);
            if flat {
                config.use_date_folders = false;
            }

            let report = ConvertService::new(config).execute()?;
            print!("{}", format_report(&report));
            Ok(())
        }
        Some(Commands::Init { path, force }) => {
            init(&path, force)?;
            Ok(())
        }
        None => {
            println!("dayvault - Day One export to Markdown converter");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
