//! Line-delimited JSON-RPC selection server
//!
//! Reads one request per stdin line and writes one response per stdout line.
//! Logs go to stderr (RUST_LOG controls verbosity).

use click_select::rpc::{handle_line, ServerState};
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    tracing::info!("Starting selection server");
    let mut state = ServerState::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                tracing::error!("Error reading stdin: {}", e);
                break;
            }
        };

        if let Some(response) = handle_line(&mut state, &line) {
            writeln!(stdout, "{}", response.to_line())?;
            stdout.flush()?;
        }
    }

    tracing::info!("Shutting down");
    Ok(())
}
