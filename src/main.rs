use clap::{Parser, Subcommand};
use showcase::content::Catalog;
use showcase::{config, generate, output};
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(name = "showcase")]
#[command(about = "Compose a landing page from content collections")]
#[command(long_about = "\
Compose a landing page from content collections

A page is a list of sections declared in site.toml. Each section pulls items
from one or more collections in content.json and arranges them with a display
mode (grid, list, cards, masonry, carousel, spotlight, featured, accordion,
hero) and a card style.

Inputs:

  site.toml        # Sections, colors, layout and carousel settings
  content.json     # One array per collection:
                   #   news, classes, features, media, weapons,
                   #   devices, maps, faq, game-modes, roadmap

Run 'showcase gen-config' to generate a documented site.toml.")]
#[command(version)]
struct Cli {
    /// Site configuration file
    #[arg(long, default_value = "site.toml", global = true)]
    config: PathBuf,

    /// Content catalog (JSON)
    #[arg(long, default_value = "content.json", global = true)]
    content: PathBuf,

    /// Log debug diagnostics (overridden by RUST_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the page to <output>/index.html
    Render {
        /// Output directory
        #[arg(long, default_value = "dist")]
        output: PathBuf,
    },
    /// Show what every section would display, without writing anything
    Check,
    /// Print a stock site.toml with all options documented
    GenConfig,
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Render { output: out_dir } => {
            let summary = generate::generate(&cli.config, &cli.content, &out_dir)?;
            output::print_render_output(&summary);
        }
        Command::Check => {
            let site = config::load_config(&cli.config)?;
            let catalog = Catalog::load(&cli.content)?;
            let composed = generate::compose(&site, &catalog);
            output::print_check_output(&composed);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
