//! gmem - prints how much memory is available without swapping.
//!
//! Usage:
//!   gmem                  # total, free, available and unavailable in kB
//!   gmem --available -s m # available memory only, in MB
//!   gmem --used -s g      # unavailable ("used") memory only, in GB
//!   gmem --json           # all four figures as a JSON object
//!   gmem -v               # build information

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{Level, debug, error};
use tracing_subscriber::EnvFilter;

use gmem::collector::{RealFs, SystemCollector};
use gmem::fmt::Unit;
use gmem::report::{ReportConfig, render};
use gmem::version::BuildInfo;

/// Available memory estimate from /proc/meminfo and /proc/zoneinfo.
#[derive(Parser)]
#[command(name = "gmem", about = "Estimate memory available without swapping", version)]
struct Args {
    /// Print out available memory only.
    #[arg(long)]
    available: bool,

    /// Print out used (unavailable) memory only.
    #[arg(long)]
    used: bool,

    /// What units to use: k, m, g.
    #[arg(short, long, value_enum, default_value_t = Unit::Kilobytes)]
    size: Unit,

    /// Output as JSON.
    #[arg(long)]
    json: bool,

    /// Path to /proc filesystem.
    #[arg(long, default_value = "/proc")]
    proc_path: PathBuf,

    /// Show version/build information.
    #[arg(short = 'v', long)]
    build_info: bool,

    /// Increase logging verbosity (-d for debug, -dd for trace). Default is warn level.
    #[arg(short, long, action = clap::ArgAction::Count)]
    debug: u8,

    /// Quiet mode - only show errors.
    #[arg(short, long)]
    quiet: bool,
}

/// Initializes the tracing subscriber on stderr, keeping stdout for the report.
fn init_logging(debug: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match debug {
            0 => Level::WARN,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = format!("gmem={}", level).parse() {
        filter = filter.add_directive(directive);
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn print_build_info(json: bool) -> ExitCode {
    let info = BuildInfo::current();
    if !json {
        print!("{}", info.banner());
        return ExitCode::SUCCESS;
    }
    match serde_json::to_string(&info) {
        Ok(line) => {
            println!("{}", line);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("failed to encode build info: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    init_logging(args.debug, args.quiet);

    if args.build_info {
        return print_build_info(args.json);
    }

    #[cfg(not(target_os = "linux"))]
    tracing::warn!("memory counters are only available on Linux");

    let config = ReportConfig::from_flags(args.available, args.used, args.size, args.json);
    debug!(?config, proc = %args.proc_path.display(), "gmem {} starting", env!("CARGO_PKG_VERSION"));

    let collector = SystemCollector::new(RealFs::new(), args.proc_path);
    match collector.collect_availability() {
        Ok(result) => {
            debug!(?result, "collected");
            print!("{}", render(&result, &config));
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
