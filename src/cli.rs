//! Command-line interface.
//!
//! # Usage
//!
//! ```bash
//! # Live table of visible networks (ctrl-c to stop)
//! wifi-radar list
//!
//! # Ten poll cycles of radar animation written to radar.gif
//! wifi-radar radar --output radar.gif
//!
//! # Signal history chart for one network
//! wifi-radar chart HomeNetwork --output chart.png
//!
//! # What signal fidelity does the driver report?
//! wifi-radar adapter
//! ```

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::adapter::capability::probe_driver_capability;
use crate::adapter::simulated::SimulatedScanner;
use crate::config::RadarConfig;
use crate::domain::registry::NetworkRegistry;
use crate::domain::ssid::SsidEncoding;
use crate::pipeline::orchestrator::RadarPipeline;
use crate::port::scan_source::ScanSource;
use crate::render;
use crate::render::radar::{RadarRenderer, RADAR_SIZE};
use crate::scheduler;

/// Wi-Fi access point monitor and radar.
#[derive(Parser, Debug)]
#[command(name = "wifi-radar")]
#[command(author, version, about = "Wi-Fi signal strength monitor and radar")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Live table of visible networks
    List(ListArgs),

    /// Radar view written as an animated GIF
    Radar(RadarArgs),

    /// Signal history chart for one network
    Chart(ChartArgs),

    /// Probe the wireless driver for signal reporting support
    Adapter,
}

/// Options shared by every scanning command.
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Wireless interface(s) to scan, comma-separated (Linux only).
    /// With several interfaces, a failing one is skipped and the rest
    /// still contribute.
    #[arg(short, long, default_value = "wlan0")]
    pub interface: String,

    /// Use the deterministic simulated scan source
    #[arg(long)]
    pub simulate: bool,

    /// Poll interval in seconds
    #[arg(long, default_value = "2")]
    pub interval: u64,

    /// Name decoding strategy
    #[arg(long, value_enum, default_value = "utf8")]
    pub encoding: EncodingArg,
}

/// Name decoding strategy argument.
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum EncodingArg {
    /// UTF-8 with hex-dump fallback
    Utf8,
    /// Printable ASCII only, hex-dump fallback otherwise
    StrictAscii,
}

impl From<EncodingArg> for SsidEncoding {
    fn from(val: EncodingArg) -> Self {
        match val {
            EncodingArg::Utf8 => SsidEncoding::Utf8,
            EncodingArg::StrictAscii => SsidEncoding::StrictAscii,
        }
    }
}

/// Arguments for the list command.
#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub scan: ScanArgs,

    /// Stop after this many poll cycles (default: run until ctrl-c)
    #[arg(short, long)]
    pub cycles: Option<u64>,

    /// Emit JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the radar command.
#[derive(Args, Debug)]
pub struct RadarArgs {
    #[command(flatten)]
    pub scan: ScanArgs,

    /// Output GIF path
    #[arg(short, long, default_value = "radar.gif")]
    pub output: PathBuf,

    /// Number of poll cycles to record
    #[arg(short, long, default_value = "10")]
    pub cycles: u64,

    /// Full-scale radar radius in meters
    #[arg(short, long, default_value = "100.0")]
    pub range: f64,
}

/// Arguments for the chart command.
#[derive(Args, Debug)]
pub struct ChartArgs {
    /// Decoded network name to chart
    pub ssid: String,

    #[command(flatten)]
    pub scan: ScanArgs,

    /// Output PNG path
    #[arg(short, long, default_value = "chart.png")]
    pub output: PathBuf,

    /// Number of poll cycles to record before charting
    #[arg(short, long, default_value = "30")]
    pub cycles: u64,
}

/// Execute a parsed command line.
pub async fn execute(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::List(args) => list(args).await,
        Commands::Radar(args) => radar(args).await,
        Commands::Chart(args) => chart(args).await,
        Commands::Adapter => adapter(),
    }
}

/// Pick the platform scan source, honoring `--simulate`.
fn build_scanner(scan: &ScanArgs) -> Box<dyn ScanSource> {
    if scan.simulate {
        return Box::new(SimulatedScanner::new());
    }

    #[cfg(target_os = "linux")]
    {
        use crate::adapter::composite::CompositeScanner;
        use crate::adapter::iw_scanner::IwScanner;

        let mut sources: Vec<Box<dyn ScanSource>> = scan
            .interface
            .split(',')
            .map(str::trim)
            .filter(|iface| !iface.is_empty())
            .map(|iface| Box::new(IwScanner::with_interface(iface)) as Box<dyn ScanSource>)
            .collect();

        if sources.len() == 1 {
            sources.remove(0)
        } else {
            // Zero interfaces degrades to an always-empty composite.
            Box::new(CompositeScanner::new(sources))
        }
    }
    #[cfg(not(target_os = "linux"))]
    {
        Box::new(crate::adapter::netsh_scanner::NetshScanner::new())
    }
}

fn build_config(scan: &ScanArgs) -> RadarConfig {
    RadarConfig {
        poll_interval: Duration::from_secs(scan.interval.max(1)),
        encoding: scan.encoding.into(),
        ..Default::default()
    }
}

async fn list(args: ListArgs) -> anyhow::Result<()> {
    let config = build_config(&args.scan);
    let mut scanner = build_scanner(&args.scan);
    let mut pipeline = RadarPipeline::new(&config);
    let mut registry = NetworkRegistry::new();

    scheduler::run_poll_loop(
        scanner.as_mut(),
        &mut pipeline,
        &mut registry,
        &config,
        args.cycles,
        |snapshot| {
            if args.json {
                println!("{}", render::list::render_json(&snapshot.records)?);
            } else if snapshot.records.is_empty() {
                println!("(no networks currently visible)");
            } else {
                println!("{}", render::list::render_table(&snapshot.records));
            }
            Ok(())
        },
    )
    .await
}

async fn radar(args: RadarArgs) -> anyhow::Result<()> {
    let mut config = build_config(&args.scan);
    config.range_m = args.range;

    let mut scanner = build_scanner(&args.scan);
    let mut pipeline = RadarPipeline::new(&config);
    let mut registry = NetworkRegistry::new();

    let path = args.output.display().to_string();
    #[allow(clippy::cast_possible_truncation)]
    let frame_delay_ms = config.sweep_interval.as_millis() as u32;
    let renderer = RadarRenderer::create(&path, RADAR_SIZE, frame_delay_ms, config.range_m)?;

    scheduler::run_with_sweep(
        scanner.as_mut(),
        &mut pipeline,
        &mut registry,
        &config,
        Some(args.cycles),
        |snapshot, angle| {
            renderer.draw_frame(&snapshot.records, angle)?;
            Ok(())
        },
    )
    .await?;

    println!("radar animation written to {path}");
    Ok(())
}

async fn chart(args: ChartArgs) -> anyhow::Result<()> {
    let config = build_config(&args.scan);
    let mut scanner = build_scanner(&args.scan);
    let mut pipeline = RadarPipeline::new(&config);
    let mut registry = NetworkRegistry::new();

    scheduler::run_poll_loop(
        scanner.as_mut(),
        &mut pipeline,
        &mut registry,
        &config,
        Some(args.cycles),
        |snapshot| {
            println!("cycle {}: {} networks", snapshot.cycle, snapshot.records.len());
            Ok(())
        },
    )
    .await?;

    let history = registry
        .history(&args.ssid)
        .ok_or_else(|| crate::error::RenderError::NoHistory {
            name: args.ssid.clone(),
        })?;

    render::chart::render_history_chart(&args.output, &args.ssid, history)?;
    println!("history chart written to {}", args.output.display());
    Ok(())
}

fn adapter() -> anyhow::Result<()> {
    match probe_driver_capability() {
        Ok(capability) => println!("{}", capability.summary()),
        Err(error) => println!("driver capability probe unavailable: {error}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_list_with_flags() {
        let cli = Cli::parse_from(["wifi-radar", "list", "--simulate", "--cycles", "3", "--json"]);
        match cli.command {
            Commands::List(args) => {
                assert!(args.scan.simulate);
                assert_eq!(args.cycles, Some(3));
                assert!(args.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_chart_with_positional_name() {
        let cli = Cli::parse_from(["wifi-radar", "chart", "HomeNetwork", "--cycles", "5"]);
        match cli.command {
            Commands::Chart(args) => {
                assert_eq!(args.ssid, "HomeNetwork");
                assert_eq!(args.cycles, 5);
                assert_eq!(args.output, PathBuf::from("chart.png"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn encoding_arg_maps_to_domain() {
        assert_eq!(SsidEncoding::from(EncodingArg::Utf8), SsidEncoding::Utf8);
        assert_eq!(
            SsidEncoding::from(EncodingArg::StrictAscii),
            SsidEncoding::StrictAscii
        );
    }
}
