//! Paced delivery of the computer's shots.
//!
//! The engine resolves shots instantly; this driver spaces them out for the
//! presentation layer. Each delayed step re-checks the phase before acting,
//! so a phase change cancels whatever was scheduled.

use log::debug;
use tokio::time::sleep;

use crate::engine::{MatchEngine, MatchEvent, Pacing, Phase};

/// Receiver of match events, e.g. a terminal renderer.
#[async_trait::async_trait]
pub trait EventSink: Send {
    async fn deliver(&mut self, event: MatchEvent) -> anyhow::Result<()>;
}

/// Sink that keeps every event in memory.
#[derive(Debug, Default)]
pub struct EventLog {
    pub events: Vec<MatchEvent>,
}

#[async_trait::async_trait]
impl EventSink for EventLog {
    async fn deliver(&mut self, event: MatchEvent) -> anyhow::Result<()> {
        self.events.push(event);
        Ok(())
    }
}

/// Hand every queued engine event to `sink`.
pub async fn forward_events<S>(engine: &mut MatchEngine, sink: &mut S) -> anyhow::Result<()>
where
    S: EventSink + ?Sized,
{
    for event in engine.drain_events() {
        sink.deliver(event).await?;
    }
    Ok(())
}

/// Run computer steps until the match leaves [`Phase::ComputerAttacking`],
/// waiting `pacing.opening_delay` before the first step and
/// `pacing.attack_delay` between steps. Returns the number of shots fired.
pub async fn drive_computer_turn<S>(
    engine: &mut MatchEngine,
    pacing: &Pacing,
    sink: &mut S,
) -> anyhow::Result<usize>
where
    S: EventSink + ?Sized,
{
    let mut delay = pacing.opening_delay;
    let mut shots = 0;
    loop {
        if !delay.is_zero() {
            sleep(delay).await;
        }
        if engine.phase() != Phase::ComputerAttacking {
            debug!("computer turn over in {:?}", engine.phase());
            break;
        }
        if engine.computer_tick()?.is_some() {
            shots += 1;
        }
        forward_events(engine, sink).await?;
        delay = pacing.attack_delay;
    }
    forward_events(engine, sink).await?;
    Ok(shots)
}
