//! Cooperative two-rate scheduling.
//!
//! One slow periodic task runs the poll-compute-store cycle; one fast
//! periodic task advances the sweep animation with no data dependency on the
//! slow one. Both are dispatched on a single `current_thread` worker, one
//! event at a time to completion, so the tracked state is never accessed
//! concurrently and renderers never observe a half-built cycle.
//!
//! The scan call blocks the worker for the duration of a radio sweep. There
//! is no reentrancy guard: the poll period is assumed to exceed the scan
//! latency. A hung scan stalls both ticks.
//!
//! The latest record collection crosses to the rendering side through a
//! `watch` channel snapshot; no shared mutable structure is handed out.

use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::config::RadarConfig;
use crate::domain::network::NetworkRecord;
use crate::domain::registry::NetworkRegistry;
use crate::pipeline::orchestrator::RadarPipeline;
use crate::port::scan_source::ScanSource;

/// The latest completed cycle, handed to renderers wholesale.
#[derive(Debug, Clone, Default)]
pub struct CycleSnapshot {
    /// Sequence number of the cycle that produced this snapshot (0 = none yet).
    pub cycle: u64,
    /// The displayed record collection.
    pub records: Vec<NetworkRecord>,
}

/// Sweep-line animation state, advanced only by the fast tick.
#[derive(Debug, Clone, Copy)]
pub struct SweepAngle {
    angle: f64,
    step: f64,
}

impl SweepAngle {
    /// Create a sweep starting at angle zero.
    pub fn new(step: f64) -> Self {
        Self { angle: 0.0, step }
    }

    /// The current angle in radians.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Advance one tick and return the new angle, wrapping at `2pi`.
    pub fn advance(&mut self) -> f64 {
        self.angle += self.step;
        if self.angle >= std::f64::consts::TAU {
            self.angle = 0.0;
        }
        self.angle
    }
}

/// Run one poll-compute-store cycle.
///
/// Scan failure is logged and treated as "no networks currently visible";
/// the cycle always completes and the next one is always attempted.
pub fn poll_cycle(
    scanner: &mut dyn ScanSource,
    pipeline: &mut RadarPipeline,
    registry: &mut NetworkRegistry,
) -> Vec<NetworkRecord> {
    let observations = match scanner.scan() {
        Ok(observations) => observations,
        Err(error) => {
            warn!(source = scanner.name(), %error, "scan failed, continuing with empty result");
            Vec::new()
        }
    };

    if observations.is_empty() {
        debug!(source = scanner.name(), "no networks currently visible");
    }

    pipeline.process(&observations, registry)
}

/// Run the poll loop alone (list and chart modes).
///
/// Calls `on_snapshot` after every completed cycle. Runs for `cycles` cycles,
/// or until interrupted when `None`.
pub async fn run_poll_loop(
    scanner: &mut dyn ScanSource,
    pipeline: &mut RadarPipeline,
    registry: &mut NetworkRegistry,
    config: &RadarConfig,
    cycles: Option<u64>,
    mut on_snapshot: impl FnMut(&CycleSnapshot) -> anyhow::Result<()>,
) -> anyhow::Result<()> {
    let mut slow = tokio::time::interval(config.poll_interval);
    slow.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut completed = 0u64;
    loop {
        tokio::select! {
            _ = slow.tick() => {
                let records = poll_cycle(scanner, pipeline, registry);
                completed += 1;
                let snapshot = CycleSnapshot { cycle: completed, records };
                on_snapshot(&snapshot)?;
                if cycles.is_some_and(|limit| completed >= limit) {
                    break;
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("interrupted, stopping poll loop");
                break;
            }
        }
    }

    Ok(())
}

/// Run the poll loop together with the sweep animation (radar mode).
///
/// The slow tick publishes each completed cycle into a `watch` channel; the
/// fast tick advances the sweep angle and calls `on_sweep` with the latest
/// published snapshot. Runs for `cycles` poll cycles, or until interrupted
/// when `None`.
pub async fn run_with_sweep(
    scanner: &mut dyn ScanSource,
    pipeline: &mut RadarPipeline,
    registry: &mut NetworkRegistry,
    config: &RadarConfig,
    cycles: Option<u64>,
    mut on_sweep: impl FnMut(&CycleSnapshot, f64) -> anyhow::Result<()>,
) -> anyhow::Result<()> {
    let (tx, rx) = watch::channel(CycleSnapshot::default());

    let mut slow = tokio::time::interval(config.poll_interval);
    slow.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut fast = tokio::time::interval(config.sweep_interval);
    fast.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut sweep = SweepAngle::new(config.sweep_step);
    let mut completed = 0u64;

    loop {
        tokio::select! {
            _ = slow.tick() => {
                let records = poll_cycle(scanner, pipeline, registry);
                completed += 1;
                tx.send_replace(CycleSnapshot { cycle: completed, records });
                if cycles.is_some_and(|limit| completed >= limit) {
                    break;
                }
            }
            _ = fast.tick() => {
                let angle = sweep.advance();
                let snapshot = rx.borrow();
                on_sweep(&snapshot, angle)?;
            }
            _ = tokio::signal::ctrl_c() => {
                info!("interrupted, stopping radar loop");
                break;
            }
        }
    }

    Ok(())
}
