//! doclib - document library browser
//!
//! # Usage
//!
//! ```bash
//! doclib list                                   # List saved libraries
//! doclib show                                   # Show the active library
//! doclib show hr --type pdf --sort most-recent  # Filter and sort
//! doclib show --file library.json --search i-9  # Search a library file
//! doclib import library.json --name hr          # Save a file into the catalog
//! doclib delete hr                              # Remove a saved library
//! ```

use clap::{Parser, Subcommand};
use doclib::app::{Message, State, view};
use doclib::config::{self, AppConfig};
use doclib::core::catalog::{self, Catalog};
use doclib::core::filter::{FileTypeFilter, SortOption};
use doclib::{Error, Library};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "doclib")]
#[command(about = "Browse, filter and search document libraries", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List saved libraries
    List,
    /// Show a library with optional filtering, sorting and search
    Show {
        /// Saved library name (defaults to the active library)
        name: Option<String>,
        /// Read the library from a JSON file instead of the catalog
        #[arg(short, long, value_name = "PATH", conflicts_with = "name")]
        file: Option<PathBuf>,
        /// File type: all, pdf, videos, docs, ppt
        #[arg(short = 't', long = "type", value_name = "TYPE")]
        file_type: Option<String>,
        /// Sort: a-z, most-recent, most-viewed
        #[arg(short, long)]
        sort: Option<String>,
        /// Case-insensitive search over document names and section titles
        #[arg(short = 'q', long)]
        search: Option<String>,
        /// Expand every section
        #[arg(short, long)]
        expand_all: bool,
        /// Print the visible sections as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate a library file and save it into the catalog
    Import {
        path: PathBuf,
        /// Name to save the library under
        #[arg(short, long)]
        name: String,
        /// Make this the active library
        #[arg(long)]
        activate: bool,
    },
    /// Delete a saved library
    Delete { name: String },
}

struct ShowArgs {
    name: Option<String>,
    file: Option<PathBuf>,
    file_type: Option<String>,
    sort: Option<String>,
    search: Option<String>,
    expand_all: bool,
    json: bool,
}

fn main() -> ExitCode {
    let _ = doclib::utils::ensure_dirs();
    init_logging();
    let cli = Cli::parse();

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Error: failed to start runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(handle_cli(cli.command)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("Error: {e}");
            if let Some(hint) = e.hint() {
                eprintln!("Hint: {hint}");
            }
            ExitCode::FAILURE
        }
    }
}

/// Logs to `doclib.log` in the state directory, or stderr if that fails.
/// Level comes from `RUST_LOG`, defaulting to `info`.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if let Some(mut log_path) = doclib::utils::get_state_dir() {
        log_path.push("doclib.log");
        if let Ok(file) = std::fs::File::create(log_path) {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(file)
                .init();
            return;
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn handle_cli(command: Commands) -> doclib::Result<()> {
    match command {
        Commands::List => {
            let catalog = Catalog::open_default()?;
            let libraries = catalog.list_libraries().await?;
            let config = config::load_config().await;
            if libraries.is_empty() {
                println!("No saved libraries. Add one with `doclib import`.");
            } else {
                println!("Available libraries (* = active):");
                for name in libraries {
                    if name == config.active_library {
                        println!("  * {name}");
                    } else {
                        println!("    {name}");
                    }
                }
            }
        }
        Commands::Show {
            name,
            file,
            file_type,
            sort,
            search,
            expand_all,
            json,
        } => {
            show(ShowArgs {
                name,
                file,
                file_type,
                sort,
                search,
                expand_all,
                json,
            })
            .await?;
        }
        Commands::Import {
            path,
            name,
            activate,
        } => {
            let library = catalog::load_library_from_path(&path).await?;
            let catalog = Catalog::open_default()?;
            catalog.save_library(&name, &library).await?;
            println!(
                "Imported '{}' ({} sections, {} documents)",
                name,
                library.sections.len(),
                library.document_count()
            );
            if activate {
                let mut config = config::load_config().await;
                config.active_library = name;
                config::save_config(&config).await?;
            }
        }
        Commands::Delete { name } => {
            let catalog = Catalog::open_default()?;
            catalog.delete_library(&name).await?;
            println!("Deleted '{name}'");
        }
    }
    Ok(())
}

async fn show(args: ShowArgs) -> doclib::Result<()> {
    let config = config::load_config().await;
    let library = load_for_show(&args, &config).await?;
    let mut state = State::new(library, &config);

    if let Some(file_type) = &args.file_type {
        state.update(Message::FileTypeSelected(FileTypeFilter::parse_lenient(
            file_type,
        )));
    }
    if let Some(sort) = &args.sort
        && let Some(sort) = SortOption::parse_lenient(sort)
    {
        state.update(Message::SortSelected(sort));
    }
    if let Some(query) = args.search {
        state.update(Message::SearchChanged(query));
    }
    if args.expand_all {
        state.update(Message::ExpandAll);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(state.visible_sections())?);
    } else {
        print!("{}", view::render_text(&state));
    }
    Ok(())
}

async fn load_for_show(args: &ShowArgs, config: &AppConfig) -> doclib::Result<Library> {
    if let Some(path) = &args.file {
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            return Err(Error::Validation {
                field: "file".to_string(),
                message: format!("{} is not a .json file", path.display()),
            });
        }
        return Ok(catalog::load_library_from_path(path).await?);
    }

    let name = args.name.as_deref().unwrap_or(&config.active_library);
    let catalog = Catalog::open_default()?;
    Ok(catalog.load_library(name).await?)
}
