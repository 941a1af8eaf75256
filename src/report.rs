//! Data model for a host snapshot.
//!
//! A [`HostReport`] is assembled exactly once per invocation and never
//! mutated afterwards. All byte conversions here are integer floor
//! division; fractional remainders are dropped, not rounded.

/// Kernel identity as reported by `uname(2)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KernelInfo {
    pub sysname: String,
    pub nodename: String,
    pub release: String,
    pub version: String,
    pub machine: String,
}

/// Free/total capacity of one mounted filesystem, in bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiskSpace {
    pub free_bytes: u64,
    pub total_bytes: u64,
}

/// One line of the mount table.
///
/// `space` is `None` when the statvfs call for the mount point was denied
/// by permissions. That is distinct from a legitimately full or empty
/// filesystem, which still carries `Some` with zero values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MountEntry {
    pub device: String,
    pub mount_point: String,
    pub fs_type: String,
    pub space: Option<DiskSpace>,
}

/// Immutable snapshot of host state.
///
/// Either fully constructed or the collection fails before one exists.
/// Only the documented optional fields (`distro_name`, `vmalloc_total_mb`,
/// per-mount `space`) may fall back to defaults independently.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HostReport {
    pub kernel: KernelInfo,
    /// Distribution name from os-release, or `"unknown linux"`.
    pub distro_name: String,
    pub hostname: String,
    pub username: String,
    pub total_ram_mb: u64,
    pub free_ram_mb: u64,
    pub total_swap_mb: u64,
    pub free_swap_mb: u64,
    /// `VmallocTotal` from meminfo, 0 if the file or key is unavailable.
    pub vmalloc_total_mb: u64,
    pub processor_count: i32,
    /// 1/5/15-minute load averages, verbatim as the kernel formats them.
    pub load_avg: [String; 3],
    /// Mount table order is preserved; entries are not deduplicated.
    pub mounts: Vec<MountEntry>,
}

/// Converts bytes to whole megabytes (floor).
pub fn bytes_to_mb(bytes: u64) -> u64 {
    bytes / 1024 / 1024
}

/// Converts bytes to whole gigabytes (floor).
pub fn bytes_to_gb(bytes: u64) -> u64 {
    bytes / 1024 / 1024 / 1024
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_to_gb_floors() {
        // 5e9 / 1024^3 is ~4.66, truncated to 4.
        assert_eq!(bytes_to_gb(5_000_000_000), 4);
        assert_eq!(bytes_to_gb(1024 * 1024 * 1024), 1);
        assert_eq!(bytes_to_gb(1024 * 1024 * 1024 - 1), 0);
    }

    #[test]
    fn test_bytes_to_mb_with_mem_unit_scaling() {
        // totalram=1000 with mem_unit=4096 is 4096000 bytes -> 3 MB.
        assert_eq!(bytes_to_mb(1000 * 4096), 3);
        assert_eq!(bytes_to_mb(0), 0);
    }
}
