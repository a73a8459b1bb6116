//! `gateway-search`: renders a TOML search description as the gateway request body.
//!
//! ```text
//! gateway-search query.toml
//! ```
//!
//! Prints `{"search": {...}}` as pretty JSON on stdout. Invalid files and values outside a
//! field's whitelist exit with a non-zero status.

mod observability;
mod query_file;

use std::{env, path::Path, process::ExitCode};

use gateway_sdk::Result;
use tracing::{error, info};

use crate::{
    observability::{LogFormat, init_observability},
    query_file::QueryFile,
};

fn run(path: &Path) -> Result<String> {
    let query = QueryFile::from_path(path)?.build()?;
    info!(path = %path.display(), fields = query.len(), "query file rendered");
    Ok(serde_json::to_string_pretty(&query.to_request_body())?)
}

fn main() -> ExitCode {
    init_observability(LogFormat::from_env());

    let Some(path) = env::args_os().nth(1) else {
        eprintln!("usage: gateway-search <query.toml>");
        return ExitCode::from(2);
    };

    match run(Path::new(&path)) {
        Ok(body) => {
            println!("{body}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "cannot render search");
            ExitCode::FAILURE
        }
    }
}
