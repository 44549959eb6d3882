//! Serve command: answer newline-delimited JSON requests.
//!
//! Each input line is one request in either the canonical shape
//! (`{"resource": "character/current"}`) or the legacy shape
//! (`{"equipmentSlot": "Head"}`). Each output line is the JSON response.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use diablo_interface::{Dispatcher, InboundRequest, LiveCharacters, Response};
use tracing::{info, warn};

use crate::config::Config;
use crate::shutdown::ShutdownSignal;
use crate::state;
use crate::watcher::spawn_state_watcher;

const MALFORMED_MESSAGE: &str = "malformed request";

/// Counters reported when the input ends
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ServeStats {
    pub requests: usize,
    pub malformed: usize,
}

pub fn run(config: &Config, state_path: &Path, input: Option<&Path>, watch: bool) -> Result<()> {
    let live = Arc::new(LiveCharacters::new());
    if let Err(e) = state::load_into(state_path, &live) {
        warn!("Starting without characters: {:#}", e);
    }

    let dispatcher = super::build_dispatcher(config, Arc::clone(&live))?;

    let shutdown = Arc::new(ShutdownSignal::new());
    let watcher = watch.then(|| {
        info!(
            "Watching {} every {:?}",
            state_path.display(),
            config.poll_interval()
        );
        spawn_state_watcher(
            state_path.to_path_buf(),
            Arc::clone(&live),
            config.poll_interval(),
            Arc::clone(&shutdown),
        )
    });

    let reader: Box<dyn BufRead> = match input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    let stdout = io::stdout();
    let result = serve_lines(&dispatcher, reader, &mut stdout.lock());

    shutdown.trigger();
    if let Some(handle) = watcher
        && handle.join().is_err()
    {
        warn!("State watcher panicked");
    }

    let stats = result?;
    info!(
        "Input closed after {} requests ({} malformed)",
        stats.requests, stats.malformed
    );
    Ok(())
}

/// Answer every request line from `reader` on `writer`.
///
/// Blank lines are skipped. A line that is not a valid request gets an
/// `error` response and the loop continues.
pub fn serve_lines<R, W>(dispatcher: &Dispatcher, reader: R, writer: &mut W) -> Result<ServeStats>
where
    R: BufRead,
    W: Write,
{
    let mut stats = ServeStats::default();

    for line in reader.lines() {
        let line = line.context("Failed to read request line")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let response = match InboundRequest::from_json(line) {
            Ok(inbound) => {
                stats.requests += 1;
                dispatcher.dispatch_inbound(inbound)
            }
            Err(e) => {
                warn!("Malformed request {:?}: {}", line, e);
                stats.malformed += 1;
                Response::error(MALFORMED_MESSAGE)
            }
        };

        serde_json::to_writer(&mut *writer, &response)?;
        writeln!(writer)?;
        writer.flush()?;
    }

    Ok(stats)
}
