//! Pre-built mock scenarios for testing.
//!
//! These provide a realistic host state for exercising the full
//! collection path without a live kernel.

use super::filesystem::MockFs;
use super::sys::MockSys;
use crate::collector::sys::MemStats;
use crate::report::KernelInfo;

impl MockFs {
    /// Creates the pseudo-files of a typical Debian host.
    pub fn typical_host() -> Self {
        let mut fs = Self::new();

        fs.add_file(
            "/etc/os-release",
            "\
PRETTY_NAME=\"Debian GNU/Linux 12 (bookworm)\"
NAME=\"Debian GNU/Linux\"
VERSION_ID=\"12\"
VERSION=\"12 (bookworm)\"
ID=debian
HOME_URL=\"https://www.debian.org/\"
",
        );

        fs.add_file(
            "/proc/meminfo",
            "\
MemTotal:       16384000 kB
MemFree:         8192000 kB
MemAvailable:   12000000 kB
Buffers:          512000 kB
Cached:          2048000 kB
SwapTotal:       4096000 kB
SwapFree:        4096000 kB
VmallocTotal:   34359738367 kB
VmallocUsed:       65536 kB
HugePages_Total:       0
",
        );

        fs.add_file("/proc/loadavg", "0.15 0.10 0.05 1/150 1234\n");

        fs.add_file(
            "/proc/mounts",
            "\
/dev/sda1 / ext4 rw,relatime,errors=remount-ro 0 0
proc /proc proc rw,nosuid,nodev,noexec,relatime 0 0
/dev/sda2 /home ext4 rw,relatime 0 0
",
        );

        fs
    }
}

impl MockSys {
    /// Creates syscall results matching [`MockFs::typical_host`].
    pub fn typical_host() -> Self {
        let mut sys = Self::new();
        sys.kernel = KernelInfo {
            sysname: "Linux".to_string(),
            nodename: "host01".to_string(),
            release: "6.1.0-18-amd64".to_string(),
            version: "#1 SMP PREEMPT_DYNAMIC Debian 6.1.76-1".to_string(),
            machine: "x86_64".to_string(),
        };
        sys.mem = MemStats {
            total_ram: 16_384_000 * 1024,
            free_ram: 8_192_000 * 1024,
            shared_ram: 0,
            buffer_ram: 512_000 * 1024,
            total_swap: 4_096_000 * 1024,
            free_swap: 4_096_000 * 1024,
            procs: 150,
            mem_unit: 1,
        };
        sys.nprocs = 8;
        sys.username = "user".to_string();
        sys.hostname = "host01".to_string();
        sys.add_mount_space("/", 2_000_000_000_000, 10_000_000_000_000);
        sys.add_mount_space("/proc", 0, 0);
        sys.add_mount_space("/home", 500_000_000_000, 1_000_000_000_000);
        sys
    }
}
