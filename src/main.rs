use clap::Parser;
use domos::api::HttpModuleSource;
use domos::core::config::{self, CliOverrides, DomosConfig};
use domos::core::route::RouteTable;
use domos::core::view;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::process::ExitCode;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "domos", about = "Terminal console for the Domos home automation backend")]
struct Args {
    /// Backend base URL, e.g. http://localhost:5000
    #[arg(long)]
    base_url: Option<String>,

    /// Route to open on startup
    #[arg(long)]
    path: Option<String>,

    /// Load PATH once, print its data as JSON and exit
    #[arg(long, value_name = "PATH")]
    dump: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let (file_config, config_error) = match config::load_config() {
        Ok(c) => (c, None),
        Err(e) => {
            eprintln!("warning: {e}, using defaults");
            (DomosConfig::default(), Some(e))
        }
    };
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            base_url: args.base_url,
            start_path: args.path,
        },
    );

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    // Config was read before the logger existed; report it now.
    match config::config_path() {
        Some(path) if path.exists() => log::info!("Config file: {}", path.display()),
        Some(path) => log::warn!(
            "Config file {} missing and could not be generated",
            path.display()
        ),
        None => log::warn!("Could not determine home directory, config file not read"),
    }
    if let Some(e) = config_error {
        log::warn!("Config file not used, falling back to defaults: {}", e);
    }
    for rejected in &resolved.rejected {
        log::warn!("Ignoring {}", rejected);
    }
    log::debug!("Resolved config: {:?}", resolved);

    let source = match HttpModuleSource::new(&resolved.base_url, resolved.request_timeout) {
        Ok(s) => s,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("domos: {e}");
            return ExitCode::FAILURE;
        }
    };
    log::info!("Domos starting up against {}", source.base_url());

    if let Some(path) = args.dump {
        return match view::load_path(&RouteTable::new(), &source, &path).await {
            Ok(data) => match serde_json::to_string_pretty(&data) {
                Ok(text) => {
                    println!("{text}");
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("domos: {e}");
                    ExitCode::FAILURE
                }
            },
            Err(e) => {
                log::error!("Dump of {} failed: {}", path, e);
                eprintln!("domos: {e}");
                ExitCode::FAILURE
            }
        };
    }

    match domos::tui::run(Arc::new(source), &resolved.start_path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("domos: {e}");
            ExitCode::FAILURE
        }
    }
}
