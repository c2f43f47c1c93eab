use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde_json::json;

use route_matcher::config::{load_config, ObservabilityConfig};
use route_matcher::observability::init_logging;
use route_matcher::routing::{pattern, Router};

#[derive(Parser)]
#[command(name = "route-matcher")]
#[command(about = "Match requests against route patterns", long_about = None)]
struct Cli {
    /// Override the configured log level.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Match a request against the routes in a route file
    Match {
        #[arg(short, long, default_value = "routes.toml")]
        config: PathBuf,

        /// Request method, compared case-sensitively
        method: String,

        /// Request path
        path: String,
    },
    /// Show how a single pattern compiles
    Inspect {
        pattern: String,
    },
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Match { config, method, path } => {
            let route_file = load_config(&config)?;

            let mut observability = route_file.observability.clone();
            if let Some(level) = cli.log_level {
                observability.log_level = level;
            }
            init_logging(&observability);
            tracing::debug!(path = ?config, routes = route_file.routes.len(), "Route file loaded");

            let router = Router::from_config(&route_file);
            match router.lookup(&method, &path) {
                Some(hit) => {
                    let out = json!({
                        "route": hit.handler(),
                        "pattern": hit.route.pattern(),
                        "params": hit.params,
                    });
                    println!("{}", serde_json::to_string_pretty(&out)?);
                    Ok(ExitCode::SUCCESS)
                }
                None => {
                    if router.path_exists(&path) {
                        eprintln!("No route for {} {} (path exists under another method)", method, path);
                    } else {
                        eprintln!("No route for {} {}", method, path);
                    }
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Commands::Inspect { pattern: raw } => {
            let mut observability = ObservabilityConfig::default();
            if let Some(level) = cli.log_level {
                observability.log_level = level;
            }
            init_logging(&observability);

            let compiled = pattern::compile(&raw);
            let out = json!({
                "pattern": raw,
                "regex": compiled.regex().as_str(),
                "compile_mode": compiled.mode().as_str(),
                "placeholders": pattern::placeholder_names(&raw),
                "param_names": pattern::param_names(&raw),
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}
