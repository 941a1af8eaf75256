//! hostsnap - one-shot snapshot of Linux host state.
//!
//! Collects kernel identity, distro, hostname, user, memory/swap,
//! processor count, load averages and per-mount disk capacity, and prints
//! a labeled text report to stdout.

use clap::Parser;
use tracing::{Level, debug, error};
use tracing_subscriber::EnvFilter;

#[cfg(not(target_os = "linux"))]
use hostsnap::collector::mock::{MockFs, MockSys};
#[cfg(target_os = "linux")]
use hostsnap::collector::{RealFs, RealSys};
use hostsnap::collector::HostCollector;
use hostsnap::view::render_report;

/// One-shot host state snapshot.
#[derive(Parser)]
#[command(name = "hostsnap", about = "Host state snapshot", version)]
struct Args {
    /// Path to /proc filesystem (for testing/mocking).
    #[arg(long, default_value = "/proc")]
    proc_path: String,

    /// Path to the distribution metadata file.
    #[arg(long, default_value = "/etc/os-release")]
    os_release: String,

    /// Increase logging verbosity (-v for debug, -vv for trace). Default is info level.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode - only show errors.
    #[arg(short, long)]
    quiet: bool,
}

/// Initializes the tracing subscriber with the appropriate log level.
/// Logging goes to stderr; stdout carries only the report itself.
fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let filter = EnvFilter::from_default_env()
        .add_directive(format!("hostsnap={}", level).parse().unwrap());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    debug!(
        "collecting snapshot: proc={} os_release={}",
        args.proc_path, args.os_release
    );

    #[cfg(target_os = "linux")]
    let collector = HostCollector::new(RealFs::new(), RealSys::new(), &args.proc_path)
        .with_os_release(&args.os_release);
    #[cfg(not(target_os = "linux"))]
    let collector = HostCollector::new(MockFs::typical_host(), MockSys::typical_host(), &args.proc_path)
        .with_os_release(&args.os_release);

    match collector.collect() {
        Ok(report) => print!("{}", render_report(&report)),
        Err(e) => {
            error!("collection failed: {}", e);
            std::process::exit(1);
        }
    }
}
