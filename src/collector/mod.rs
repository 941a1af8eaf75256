//! Host state collection.
//!
//! Two seams keep everything testable without a live kernel:
//!
//! ```text
//! ┌───────────────────────────────────────────────────────┐
//! │                    HostCollector                      │
//! │  ┌──────────────────┐      ┌───────────────────────┐  │
//! │  │    ProcReader    │      │        SysApi         │  │
//! │  │  - os-release    │      │  - uname / sysinfo    │  │
//! │  │  - meminfo       │      │  - get_nprocs         │  │
//! │  │  - loadavg       │      │  - statvfs            │  │
//! │  │  - mounts        │      │  - user / hostname    │  │
//! │  └────────┬─────────┘      └───────────┬───────────┘  │
//! │      FileSystem (trait)          SysApi (trait)       │
//! └───────────┼────────────────────────────┼──────────────┘
//!        RealFs / MockFs            RealSys / MockSys
//! ```
//!
//! `collect()` is fully synchronous: each accessor is one blocking read
//! or syscall, executed in sequence, with no shared state between them.

pub mod mock;
pub mod procfs;
pub mod sys;
pub mod traits;

use std::io;
use std::path::Path;

use tracing::debug;

use crate::report::{HostReport, MountEntry, bytes_to_mb};

pub use procfs::{ParseError, ProcReader};
#[cfg(target_os = "linux")]
pub use sys::RealSys;
pub use sys::{MemStats, SysApi, SysError};
pub use traits::{FileSystem, RealFs};

/// Error type for collection failures.
#[derive(Debug)]
pub enum CollectError {
    /// I/O error reading a pseudo-file.
    Io(io::Error),
    /// Parse error in a pseudo-file.
    Parse(String),
    /// Native call failure.
    Sys(SysError),
}

impl std::fmt::Display for CollectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CollectError::Io(e) => write!(f, "I/O error: {}", e),
            CollectError::Parse(msg) => write!(f, "parse error: {}", msg),
            CollectError::Sys(e) => write!(f, "syscall error: {}", e),
        }
    }
}

impl std::error::Error for CollectError {}

impl From<io::Error> for CollectError {
    fn from(e: io::Error) -> Self {
        CollectError::Io(e)
    }
}

impl From<ParseError> for CollectError {
    fn from(e: ParseError) -> Self {
        CollectError::Parse(e.message)
    }
}

impl From<SysError> for CollectError {
    fn from(e: SysError) -> Self {
        CollectError::Sys(e)
    }
}

/// Assembles a [`HostReport`] from the individual accessors.
///
/// Failure policy, per source:
/// - fatal: uname, sysinfo, nprocs, loadavg, mount table, user, hostname
/// - fallback: os-release (-> "unknown linux"), meminfo (-> 0 vmalloc),
///   statvfs denied by permissions (-> mount listed without space figures)
/// - statvfs failing with anything other than `EACCES` stays fatal: a
///   stale or broken mount entry is an anomaly worth surfacing.
pub struct HostCollector<F: FileSystem, S: SysApi> {
    proc: ProcReader<F>,
    sys: S,
}

impl<F: FileSystem, S: SysApi> HostCollector<F, S> {
    /// Creates a new collector.
    ///
    /// # Arguments
    /// * `fs` - Filesystem implementation (real or mock)
    /// * `sys` - Syscall implementation (real or mock)
    /// * `proc_path` - Base path to proc filesystem (usually "/proc")
    pub fn new(fs: F, sys: S, proc_path: impl Into<String>) -> Self {
        Self {
            proc: ProcReader::new(fs, proc_path),
            sys,
        }
    }

    /// Overrides the os-release path (for fixture trees).
    pub fn with_os_release(mut self, path: impl Into<String>) -> Self {
        self.proc = self.proc.with_os_release(path);
        self
    }

    /// Collects one complete snapshot.
    pub fn collect(&self) -> Result<HostReport, CollectError> {
        let kernel = self.sys.uname()?;
        let distro_name = self.proc.distro_name();
        let hostname = self.sys.hostname()?;
        let username = self.sys.username()?;

        let mem = self.sys.sysinfo()?;
        let unit = mem.mem_unit as u64;
        debug!(
            "sysinfo: totalram={} freeram={} mem_unit={}",
            mem.total_ram, mem.free_ram, mem.mem_unit
        );

        // meminfo values are in kB; only VmallocTotal is consumed.
        let vmalloc_total_mb = match self.proc.meminfo() {
            Ok(mut values) => values.remove("VmallocTotal").unwrap_or(0) / 1024,
            Err(e) => {
                debug!("meminfo unavailable, reporting zero vmalloc: {}", e);
                0
            }
        };

        let processor_count = self.sys.nprocs()?;
        let load_avg = self.proc.loadavg()?;

        let mut mounts = Vec::new();
        for record in self.proc.mounts()? {
            let space = match self.sys.statvfs(Path::new(&record.mount_point)) {
                Ok(space) => Some(space),
                Err(e) if e.is_permission_denied() => {
                    debug!("no access to {}: {}", record.mount_point, e);
                    None
                }
                Err(e) => return Err(e.into()),
            };
            mounts.push(MountEntry {
                device: record.device,
                mount_point: record.mount_point,
                fs_type: record.fs_type,
                space,
            });
        }

        Ok(HostReport {
            kernel,
            distro_name,
            hostname,
            username,
            total_ram_mb: bytes_to_mb(mem.total_ram * unit),
            free_ram_mb: bytes_to_mb(mem.free_ram * unit),
            total_swap_mb: bytes_to_mb(mem.total_swap * unit),
            free_swap_mb: bytes_to_mb(mem.free_swap * unit),
            vmalloc_total_mb,
            processor_count,
            load_avg,
            mounts,
        })
    }
}
