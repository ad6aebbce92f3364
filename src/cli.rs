use serde::Serialize;
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::data::dog::Dog;
use crate::data::post::PostRecord;
use crate::data::StoreError;
use crate::server::{self, AppState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Serve,
    Seed,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("serve") => Some(Command::Serve),
        Some("seed") => Some(Command::Seed),
        _ => None,
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    match parse_command(args) {
        Some(Command::Serve) => handle_serve(),
        Some(Command::Seed) => handle_seed(),
        None => {
            eprintln!("usage: pets <serve|seed>");
            2
        }
    }
}

/// Installs the stderr subscriber. `RUST_LOG` wins over the configured filter.
pub fn init_tracing(log_filter: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_filter.unwrap_or("info")))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn handle_serve() -> i32 {
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("config error: {err}");
            return 2;
        }
    };
    init_tracing(config.log_filter.as_deref());

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            tracing::error!(%err, "failed to start tokio runtime");
            return 1;
        }
    };

    match runtime.block_on(server::run_server(&config)) {
        Ok(()) => 0,
        Err(err) => {
            tracing::error!(%err, "server error");
            1
        }
    }
}

#[derive(Debug, Serialize)]
struct SeedDump {
    dogs: Vec<Dog>,
    posts: Vec<PostRecord>,
}

fn seed_dump(state: &AppState) -> Result<SeedDump, StoreError> {
    Ok(SeedDump {
        dogs: state.dogs.list(None)?,
        posts: state.posts.list()?,
    })
}

fn handle_seed() -> i32 {
    let dump = match seed_dump(&AppState::seeded()) {
        Ok(dump) => dump,
        Err(err) => {
            eprintln!("failed to read seed data: {err}");
            return 1;
        }
    };

    match serde_json::to_string_pretty(&dump) {
        Ok(payload) => {
            println!("{payload}");
            0
        }
        Err(err) => {
            eprintln!("failed to serialize seed data: {err}");
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn parses_known_commands() {
        assert_eq!(parse_command(&args(&["pets", "serve"])), Some(Command::Serve));
        assert_eq!(parse_command(&args(&["pets", "seed"])), Some(Command::Seed));
    }

    #[test]
    fn unknown_or_missing_command_is_none() {
        assert_eq!(parse_command(&args(&["pets"])), None);
        assert_eq!(parse_command(&args(&["pets", "delete"])), None);
        assert_eq!(run_with_args(&args(&["pets", "delete"])), 2);
    }
}
