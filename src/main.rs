//! CLI entry point for render-engine

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use render_engine::content::Category;

#[derive(Parser)]
#[command(name = "render-engine")]
#[command(version)]
#[command(about = "Load, inspect and render static site content files", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a content file's body to HTML
    #[command(alias = "r")]
    Render {
        /// Content file to render
        path: PathBuf,

        /// Content kind, used as the slug fallback
        #[arg(short, long, default_value = "Page")]
        kind: Category,
    },

    /// Show the slug and metadata of a content file
    Show {
        /// Content file to inspect
        path: PathBuf,

        /// Content kind, used as the slug fallback
        #[arg(short, long, default_value = "Page")]
        kind: Category,

        /// Print the page as JSON
        #[arg(long)]
        json: bool,
    },

    /// List all pages in the content directory
    List {
        /// Content kind, used as the slug fallback
        #[arg(short, long, default_value = "Page")]
        kind: Category,
    },

    /// Print the first or last git log date line of a file
    GitDate {
        /// File to look up
        path: PathBuf,

        /// Which end of the history to print (head, tail)
        #[arg(short, long, default_value = "head")]
        position: String,

        /// Branch to scope the history to (defaults to the config)
        #[arg(short, long)]
        branch: Option<String>,

        /// Text printed before the date (defaults to the config)
        #[arg(short, long)]
        message: Option<String>,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "render_engine=debug,info"
    } else {
        "render_engine=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Render { path, kind } => {
            let engine = render_engine::RenderEngine::new(&base_dir)?;
            tracing::debug!("Rendering {:?} as {}", path, kind);
            let html = render_engine::commands::render::run(&engine, &path, &kind)?;
            print!("{}", html);
        }

        Commands::Show { path, kind, json } => {
            let engine = render_engine::RenderEngine::new(&base_dir)?;
            let out = render_engine::commands::show::run(&engine, &path, &kind, json)?;
            println!("{}", out.trim_end());
        }

        Commands::List { kind } => {
            let engine = render_engine::RenderEngine::new(&base_dir)?;
            let lines = render_engine::commands::list::run(&engine, &kind)?;
            println!("Pages ({}):", lines.len());
            for line in lines {
                println!("  {}", line);
            }
        }

        Commands::GitDate {
            path,
            position,
            branch,
            message,
        } => {
            let engine = render_engine::RenderEngine::new(&base_dir)?;
            let line = render_engine::commands::git_date::run(
                &engine,
                &path,
                &position,
                branch.as_deref(),
                message.as_deref(),
            )?;
            if let Some(line) = line {
                println!("{}", line);
            }
        }

        Commands::Version => {
            println!("render-engine version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
