//! symsearch: type-aware search and usage ranking from the command line.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, Parser, Subcommand};
use symsearch::QueryError;
use symsearch::ide::{AnalysisHost, RankOptions, RenderOptions, SearchOptions};
use symsearch::interchange::JsonFrontEnd;
use symsearch::project::{CollaboratorError, CommandLister, LoadOptions};

#[derive(Parser)]
#[command(
    name = "symsearch",
    about = "Find uses of a declaration, or rank functions by how often they are referenced"
)]
#[command(version, propagate_version = true)]
struct Cli {
    /// Resolved program model (JSON) produced by the front-end exporter
    #[arg(long, value_name = "FILE")]
    model: PathBuf,

    /// Command expanding package patterns into package paths
    #[arg(long, default_value = "go list")]
    lister: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every use of a declaration, e.g. `net.Listen` or `"example.com/x".T.Method`
    Search {
        /// Include test sources
        #[arg(short = 't')]
        tests: bool,

        /// Keep going when packages have errors
        #[arg(short = 'a')]
        allow_errors: bool,

        /// Search for definitions instead of uses
        #[arg(short = 'd')]
        definitions: bool,

        /// Target path: package.Name[.Member...]
        target: String,

        /// Package patterns
        packages: Vec<String>,
    },

    /// Rank functions and methods by use count, least used first
    Rank {
        /// Keep going when packages have errors
        #[arg(short = 'a')]
        allow_errors: bool,

        /// Leave out methods that could implement an interface
        #[arg(short = 'i')]
        exclude_interface_satisfiers: bool,

        /// Package patterns
        packages: Vec<String>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("symsearch: {err}");
            eprintln!("{}", Cli::command().render_usage());
            ExitCode::from(QueryError::EXIT_CODE as u8)
        }
    }
}

fn run(cli: Cli) -> Result<(), QueryError> {
    let lister = CommandLister::from_command_line(&cli.lister).ok_or_else(|| {
        CollaboratorError::ToolNotFound {
            program: cli.lister.clone(),
        }
    })?;
    let front_end = JsonFrontEnd::new(cli.model);

    match cli.command {
        Commands::Search {
            tests,
            allow_errors,
            definitions,
            target,
            packages,
        } => {
            let options = LoadOptions {
                include_tests: tests,
                allow_errors,
            };
            let host = AnalysisHost::load(&lister, &front_end, &packages, options)?;
            let analysis = host.analysis();
            let occurrences = analysis.search(
                &target,
                SearchOptions {
                    want_definitions: definitions,
                },
            )?;

            let render = RenderOptions::detect();
            let mut stdout = std::io::stdout().lock();
            for occurrence in &occurrences {
                match analysis.render(occurrence, &render) {
                    Ok(line) => {
                        if stdout.write_all(line.as_bytes()).is_err() {
                            break;
                        }
                    }
                    Err(err) => eprintln!("{err}"),
                }
            }
        }
        Commands::Rank {
            allow_errors,
            exclude_interface_satisfiers,
            packages,
        } => {
            let options = LoadOptions {
                include_tests: false,
                allow_errors,
            };
            let host = AnalysisHost::load(&lister, &front_end, &packages, options)?;
            let ranked = host.analysis().rank(RankOptions {
                exclude_interface_satisfiers,
            });

            let mut stdout = std::io::stdout().lock();
            for entry in &ranked {
                if writeln!(stdout, "{entry}").is_err() {
                    break;
                }
            }
        }
    }
    Ok(())
}
