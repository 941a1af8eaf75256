//! Pseudo-file accessors reading through the `FileSystem` abstraction.

use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use crate::collector::CollectError;
use crate::collector::procfs::parser::{
    MountRecord, parse_loadavg, parse_meminfo, parse_mounts, parse_os_release,
};
use crate::collector::traits::FileSystem;

/// Distribution name used when os-release is missing or unusable.
pub const DISTRO_FALLBACK: &str = "unknown linux";

/// Reads host pseudo-files (`/proc/*` and os-release).
pub struct ProcReader<F: FileSystem> {
    fs: F,
    proc_path: String,
    os_release_path: String,
}

impl<F: FileSystem> ProcReader<F> {
    /// Creates a new reader.
    ///
    /// # Arguments
    /// * `fs` - Filesystem implementation (real or mock)
    /// * `proc_path` - Base path to proc filesystem (usually "/proc")
    pub fn new(fs: F, proc_path: impl Into<String>) -> Self {
        Self {
            fs,
            proc_path: proc_path.into(),
            os_release_path: "/etc/os-release".to_string(),
        }
    }

    /// Overrides the os-release path (for fixture trees).
    pub fn with_os_release(mut self, path: impl Into<String>) -> Self {
        self.os_release_path = path.into();
        self
    }

    /// Returns the distribution name from os-release.
    ///
    /// Never fails: a missing, unreadable or malformed file, or a file
    /// without `PRETTY_NAME`, all collapse to [`DISTRO_FALLBACK`].
    pub fn distro_name(&self) -> String {
        match self.fs.read_to_string(Path::new(&self.os_release_path)) {
            Ok(content) => parse_os_release(&content)
                .remove("PRETTY_NAME")
                .unwrap_or_else(|| {
                    debug!("no PRETTY_NAME in {}", self.os_release_path);
                    DISTRO_FALLBACK.to_string()
                }),
            Err(e) => {
                debug!("cannot read {}: {}", self.os_release_path, e);
                DISTRO_FALLBACK.to_string()
            }
        }
    }

    /// Reads `/proc/meminfo` into a key -> integer (kB) map.
    pub fn meminfo(&self) -> Result<HashMap<String, u64>, CollectError> {
        let path = format!("{}/meminfo", self.proc_path);
        let content = self.fs.read_to_string(Path::new(&path))?;
        Ok(parse_meminfo(&content)?)
    }

    /// Reads the three load averages from `/proc/loadavg`, as text.
    pub fn loadavg(&self) -> Result<[String; 3], CollectError> {
        let path = format!("{}/loadavg", self.proc_path);
        let content = self.fs.read_to_string(Path::new(&path))?;
        Ok(parse_loadavg(&content)?)
    }

    /// Reads the mount table from `/proc/mounts`, in source order.
    pub fn mounts(&self) -> Result<Vec<MountRecord>, CollectError> {
        let path = format!("{}/mounts", self.proc_path);
        let content = self.fs.read_to_string(Path::new(&path))?;
        Ok(parse_mounts(&content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::mock::MockFs;

    fn reader(fs: MockFs) -> ProcReader<MockFs> {
        ProcReader::new(fs, "/proc")
    }

    #[test]
    fn test_distro_name() {
        let fs = MockFs::typical_host();
        assert_eq!(reader(fs).distro_name(), "Debian GNU/Linux 12 (bookworm)");
    }

    #[test]
    fn test_distro_name_fallback_on_missing_file() {
        assert_eq!(reader(MockFs::new()).distro_name(), DISTRO_FALLBACK);
    }

    #[test]
    fn test_distro_name_fallback_on_malformed_content() {
        for content in [
            "",
            "ID=ubuntu\n",
            "PRETTY_NAME\n",
            "PRETTY_NAME=\"Ubuntu 22.04\n",
        ] {
            let mut fs = MockFs::new();
            fs.add_file("/etc/os-release", content);
            assert_eq!(reader(fs).distro_name(), DISTRO_FALLBACK, "{:?}", content);
        }
    }

    #[test]
    fn test_meminfo() {
        let fs = MockFs::typical_host();
        let values = reader(fs).meminfo().unwrap();
        assert_eq!(values["VmallocTotal"], 34359738367);
        assert_eq!(values["MemTotal"], 16384000);
    }

    #[test]
    fn test_meminfo_malformed_line_fails() {
        let mut fs = MockFs::new();
        fs.add_file("/proc/meminfo", "MemTotal: 1 kB\nbroken\n");
        assert!(reader(fs).meminfo().is_err());
    }

    #[test]
    fn test_loadavg() {
        let fs = MockFs::typical_host();
        let load = reader(fs).loadavg().unwrap();
        assert_eq!(load, ["0.15", "0.10", "0.05"].map(String::from));
    }

    #[test]
    fn test_loadavg_missing_file_fails() {
        assert!(reader(MockFs::new()).loadavg().is_err());
    }

    #[test]
    fn test_mounts_order() {
        let fs = MockFs::typical_host();
        let mounts = reader(fs).mounts().unwrap();
        assert!(mounts.len() >= 3);
        assert_eq!(mounts[0].mount_point, "/");
        assert_eq!(mounts[1].mount_point, "/proc");
    }
}
