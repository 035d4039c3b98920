//! Terminal presentation helpers and event sinks used by the binaries.

pub mod input;
pub mod render;

pub use input::*;
pub use render::*;

use std::io::Write;

use crate::engine::MatchEvent;
use crate::pacing::EventSink;

/// Prints each event as a sentence on stdout.
#[derive(Debug, Default)]
pub struct Narrator;

#[async_trait::async_trait]
impl EventSink for Narrator {
    async fn deliver(&mut self, event: MatchEvent) -> anyhow::Result<()> {
        if let Some(line) = describe(&event) {
            let mut out = std::io::stdout().lock();
            writeln!(out, "{}", line)?;
            out.flush()?;
        }
        Ok(())
    }
}

/// Prints each event as one JSON object per line on stdout.
#[derive(Debug, Default)]
pub struct JsonLines;

#[async_trait::async_trait]
impl EventSink for JsonLines {
    async fn deliver(&mut self, event: MatchEvent) -> anyhow::Result<()> {
        let line = serde_json::to_string(&event)?;
        let mut out = std::io::stdout().lock();
        writeln!(out, "{}", line)?;
        out.flush()?;
        Ok(())
    }
}
