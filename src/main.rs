use clap::{Parser, Subcommand};
use newsroom::{config, generate, output};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "newsroom")]
#[command(about = "Static site generator for programme news pages")]
#[command(long_about = "\
Static site generator for programme news pages

Each folder under the news directory is a programme. Running without a
command builds the whole site in place.

Site structure:

  site/
  ├── config.toml                  # Optional settings (see gen-config)
  ├── news.html                    # Generated listing page
  └── news/
      ├── art-workshop/            # Programme → \"Art Workshop\"
      │   ├── description.txt      # Shown verbatim on the detail page
      │   ├── 001-painting.jpg     # Gallery image
      │   ├── opening.mp4          # Gallery video
      │   └── index.html           # Generated detail page
      └── .drafts/                 # Hidden folders are skipped

Set RUST_LOG=newsroom=debug for detailed logging.")]
#[command(version)]
struct Cli {
    /// Site root containing the news directory
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Generate the listing page and every programme page (default)
    Build,
    /// List programmes, descriptions and media without writing pages
    Check {
        /// Print the inventory as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "newsroom=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command.unwrap_or(Command::Build) {
        Command::Build => {
            let site_config = config::load_config(&cli.root)?;
            println!("==> Building {}", cli.root.display());
            let report = generate::build(&cli.root, &site_config)?;
            output::print_build_output(&report, &site_config.news_dir);
            println!("==> Build complete");
        }
        Command::Check { json } => {
            let site_config = config::load_config(&cli.root)?;
            let programmes = generate::inspect(&cli.root, &site_config)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&programmes)?);
            } else {
                output::print_check_output(&programmes, &site_config);
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
