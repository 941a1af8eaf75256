//! Text rendering of a host report.
//!
//! Pure formatting only: no I/O, no styles. The binary prints the result
//! to stdout unchanged.

use std::fmt::Write;

use crate::report::{HostReport, bytes_to_gb};

/// Renders the report as labeled lines, one metric per line and one
/// indented line per mount.
pub fn render_report(report: &HostReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "OS: {}", report.distro_name);
    let _ = writeln!(
        out,
        "Kernel: {} {}",
        report.kernel.sysname, report.kernel.release
    );
    let _ = writeln!(out, "Architecture: {}", report.kernel.machine);
    let _ = writeln!(out, "Hostname: {}", report.hostname);
    let _ = writeln!(out, "User: {}", report.username);
    let _ = writeln!(
        out,
        "RAM: {}MB free / {}MB total",
        report.free_ram_mb, report.total_ram_mb
    );
    let _ = writeln!(
        out,
        "Swap: {}MB total / {}MB free",
        report.total_swap_mb, report.free_swap_mb
    );
    let _ = writeln!(out, "Virtual memory: {} MB", report.vmalloc_total_mb);
    let _ = writeln!(out, "Processors: {}", report.processor_count);
    let _ = writeln!(
        out,
        "Load average: {}, {}, {}",
        report.load_avg[0], report.load_avg[1], report.load_avg[2]
    );

    let _ = writeln!(out, "Drives:");
    for mount in &report.mounts {
        let mut line = format!("  {:<10} {:<6}", mount.mount_point, mount.fs_type);
        if let Some(space) = mount.space {
            let _ = write!(
                line,
                " {}GB free / {}GB total",
                bytes_to_gb(space.free_bytes),
                bytes_to_gb(space.total_bytes)
            );
        }
        let _ = writeln!(out, "{}", line.trim_end());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{DiskSpace, KernelInfo, MountEntry};

    fn sample_report() -> HostReport {
        HostReport {
            kernel: KernelInfo {
                sysname: "Linux".to_string(),
                nodename: "host01".to_string(),
                release: "6.1.0-18-amd64".to_string(),
                version: "#1 SMP".to_string(),
                machine: "x86_64".to_string(),
            },
            distro_name: "Debian GNU/Linux 12 (bookworm)".to_string(),
            hostname: "host01".to_string(),
            username: "user".to_string(),
            total_ram_mb: 16000,
            free_ram_mb: 8000,
            total_swap_mb: 4000,
            free_swap_mb: 4000,
            vmalloc_total_mb: 33554431,
            processor_count: 8,
            load_avg: ["0.15", "0.10", "0.05"].map(String::from),
            mounts: vec![MountEntry {
                device: "/dev/sda1".to_string(),
                mount_point: "/".to_string(),
                fs_type: "ext4".to_string(),
                space: Some(DiskSpace {
                    free_bytes: 2_000_000_000_000,
                    total_bytes: 10_000_000_000_000,
                }),
            }],
        }
    }

    #[test]
    fn test_render_labeled_lines() {
        let text = render_report(&sample_report());
        assert!(text.contains("OS: Debian GNU/Linux 12 (bookworm)\n"));
        assert!(text.contains("Kernel: Linux 6.1.0-18-amd64\n"));
        assert!(text.contains("Architecture: x86_64\n"));
        assert!(text.contains("Hostname: host01\n"));
        assert!(text.contains("User: user\n"));
        assert!(text.contains("RAM: 8000MB free / 16000MB total\n"));
        assert!(text.contains("Swap: 4000MB total / 4000MB free\n"));
        assert!(text.contains("Virtual memory: 33554431 MB\n"));
        assert!(text.contains("Processors: 8\n"));
        assert!(text.contains("Load average: 0.15, 0.10, 0.05\n"));
    }

    #[test]
    fn test_render_drive_line_floors_gb() {
        let text = render_report(&sample_report());
        // 2e12 / 1024^3 = 1862.64.. -> 1862; 1e13 / 1024^3 = 9313.22.. -> 9313
        assert!(text.contains("  /          ext4   1862GB free / 9313GB total\n"));
    }

    #[test]
    fn test_render_denied_mount_omits_space_figures() {
        let mut report = sample_report();
        report.mounts.push(MountEntry {
            device: "overlay".to_string(),
            mount_point: "/restricted".to_string(),
            fs_type: "overlay".to_string(),
            space: None,
        });
        let text = render_report(&report);
        assert!(text.contains("  /restricted overlay\n"));
        assert!(!text.contains("/restricted overlay 0GB"));
    }
}
