use std::error::Error;
use std::io;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use tracing_subscriber::{fmt, EnvFilter};

use userdir::cli::{Cli, Commands};
use userdir::client::UsersClient;
use userdir::config::Config;
use userdir::store::UserStore;
use userdir::{commands, output, Result};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_tracing(verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");

        // Show error chain if verbose flag was passed
        if verbose {
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("Caused by: {cause}");
                source = cause.source();
            }
        }

        std::process::exit(1);
    }
}

/// Log to stderr. `RUST_LOG` wins; otherwise warnings only, or debug with
/// `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "userdir=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    if let Err(e) = fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
    {
        eprintln!("tracing init failed: {e}");
    }
}

async fn run(cli: Cli) -> Result<()> {
    output::set_format(cli.output_format());
    output::set_quiet(cli.quiet);

    match cli.command {
        // Commands that don't need the directory
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "userdir", &mut io::stdout());
        }
        Commands::Init => {
            commands::init::run()?;
        }
        command => {
            let config = Config::load()?;
            let client = UsersClient::new(config.api_url(cli.api_url.as_deref())?);

            let mut store = UserStore::new();
            if let Err(e) = client.load_into(&mut store).await {
                tracing::error!(error = store.error().unwrap_or_default(), "loading users failed");
                return Err(e);
            }

            match command {
                Commands::List(args) => {
                    commands::list::list(&store, &args);
                }
                Commands::View { id } => {
                    commands::view::view(&store, &id)?;
                }
                Commands::Add(args) => {
                    commands::add::add(&mut store, &args, config.submit_delay()).await?;
                }
                Commands::Completions { .. } | Commands::Init => {
                    // Already handled above
                }
            }
        }
    }

    Ok(())
}
