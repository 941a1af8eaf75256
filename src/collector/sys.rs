//! Native syscall boundary.
//!
//! The `SysApi` trait covers the six native queries the collector needs:
//! kernel identity, memory/swap statistics, processor count, per-mount
//! filesystem statistics, user name and hostname. `RealSys` is the only
//! module in the crate that touches raw libc structs; everything it
//! returns is already decoded into owned value types.

use std::io;
use std::path::Path;

use crate::report::{DiskSpace, KernelInfo};

/// Error from a native call, carrying the failing call name and errno.
#[derive(Debug)]
pub struct SysError {
    call: &'static str,
    source: io::Error,
}

impl SysError {
    /// Wraps an I/O error for the named call.
    pub fn new(call: &'static str, source: io::Error) -> Self {
        Self { call, source }
    }

    /// Captures `errno` for the named call.
    #[cfg(target_os = "linux")]
    fn last_os(call: &'static str) -> Self {
        Self::new(call, io::Error::last_os_error())
    }

    /// True when the call failed with `EACCES`.
    ///
    /// Per-mount statvfs treats this case specially: the mount stays in
    /// the report with its space figures omitted. Every other errno is a
    /// host anomaly and propagates.
    pub fn is_permission_denied(&self) -> bool {
        self.source.kind() == io::ErrorKind::PermissionDenied
    }
}

impl std::fmt::Display for SysError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.call, self.source)
    }
}

impl std::error::Error for SysError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Raw memory/swap statistics from `sysinfo(2)`.
///
/// All counts are in units of `mem_unit` bytes; scaling is the caller's
/// responsibility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemStats {
    pub total_ram: u64,
    pub free_ram: u64,
    pub shared_ram: u64,
    pub buffer_ram: u64,
    pub total_swap: u64,
    pub free_swap: u64,
    pub procs: u16,
    pub mem_unit: u32,
}

/// Abstraction over the native queries, mirroring `FileSystem` for the
/// syscall side so the orchestrator's failure policy is testable.
pub trait SysApi {
    /// Kernel identity from `uname(2)`.
    fn uname(&self) -> Result<KernelInfo, SysError>;

    /// Memory/swap statistics from `sysinfo(2)`, unscaled.
    fn sysinfo(&self) -> Result<MemStats, SysError>;

    /// Logical processor count from `get_nprocs`.
    fn nprocs(&self) -> Result<i32, SysError>;

    /// Free/total bytes for the filesystem mounted at `path`, from
    /// `statvfs(3)`: `f_bavail * f_frsize` and `f_blocks * f_frsize`.
    fn statvfs(&self, path: &Path) -> Result<DiskSpace, SysError>;

    /// Login name of the effective process owner, from the user database.
    fn username(&self) -> Result<String, SysError>;

    /// Local hostname.
    fn hostname(&self) -> Result<String, SysError>;
}

/// Production implementation issuing real syscalls through libc.
#[cfg(target_os = "linux")]
#[derive(Debug, Default, Clone, Copy)]
pub struct RealSys;

#[cfg(target_os = "linux")]
impl RealSys {
    /// Creates a new `RealSys` instance.
    pub fn new() -> Self {
        Self
    }
}

/// Decodes a NUL-terminated fixed-width libc string field.
#[cfg(target_os = "linux")]
fn decode_field(field: &[libc::c_char]) -> String {
    let bytes: Vec<u8> = field
        .iter()
        .take_while(|&&c| c != 0)
        .map(|&c| c as u8)
        .collect();
    String::from_utf8_lossy(&bytes).into_owned()
}

// The registry's libc build omits the `get_nprocs` binding; declare the
// glibc symbol directly.
#[cfg(target_os = "linux")]
unsafe extern "C" {
    fn get_nprocs() -> libc::c_int;
}

#[cfg(target_os = "linux")]
impl SysApi for RealSys {
    fn uname(&self) -> Result<KernelInfo, SysError> {
        // SAFETY: utsname is plain data; uname fills it or reports an error.
        let mut raw = unsafe { std::mem::zeroed::<libc::utsname>() };
        let rc = unsafe { libc::uname(&mut raw) };
        if rc != 0 {
            return Err(SysError::last_os("uname"));
        }
        Ok(KernelInfo {
            sysname: decode_field(&raw.sysname),
            nodename: decode_field(&raw.nodename),
            release: decode_field(&raw.release),
            version: decode_field(&raw.version),
            machine: decode_field(&raw.machine),
        })
    }

    fn sysinfo(&self) -> Result<MemStats, SysError> {
        // SAFETY: sysinfo is plain data; the call fills it or returns nonzero.
        let mut raw = unsafe { std::mem::zeroed::<libc::sysinfo>() };
        let rc = unsafe { libc::sysinfo(&mut raw) };
        if rc != 0 {
            return Err(SysError::last_os("sysinfo"));
        }
        Ok(MemStats {
            total_ram: raw.totalram as u64,
            free_ram: raw.freeram as u64,
            shared_ram: raw.sharedram as u64,
            buffer_ram: raw.bufferram as u64,
            total_swap: raw.totalswap as u64,
            free_swap: raw.freeswap as u64,
            procs: raw.procs,
            mem_unit: raw.mem_unit,
        })
    }

    fn nprocs(&self) -> Result<i32, SysError> {
        // SAFETY: no arguments, returns the online processor count.
        let n = unsafe { get_nprocs() };
        Ok(n)
    }

    fn statvfs(&self, path: &Path) -> Result<DiskSpace, SysError> {
        use std::os::unix::ffi::OsStrExt;

        let c_path = std::ffi::CString::new(path.as_os_str().as_bytes())
            .map_err(|_| SysError::new("statvfs", io::ErrorKind::InvalidInput.into()))?;
        // SAFETY: c_path is NUL-terminated and raw is plain data.
        let mut raw = unsafe { std::mem::zeroed::<libc::statvfs>() };
        let rc = unsafe { libc::statvfs(c_path.as_ptr(), &mut raw) };
        if rc != 0 {
            return Err(SysError::last_os("statvfs"));
        }
        Ok(DiskSpace {
            free_bytes: raw.f_bavail as u64 * raw.f_frsize as u64,
            total_bytes: raw.f_blocks as u64 * raw.f_frsize as u64,
        })
    }

    fn username(&self) -> Result<String, SysError> {
        // SAFETY: getuid cannot fail.
        let uid = unsafe { libc::getuid() };

        let mut pwd = unsafe { std::mem::zeroed::<libc::passwd>() };
        let mut buf = [0u8; 4096];
        let mut result: *mut libc::passwd = std::ptr::null_mut();
        // SAFETY: buf outlives the call; getpwuid_r writes pw_name into it
        // and points `result` at `pwd` on success.
        let rc = unsafe {
            libc::getpwuid_r(
                uid,
                &mut pwd,
                buf.as_mut_ptr() as *mut libc::c_char,
                buf.len(),
                &mut result,
            )
        };
        if rc != 0 {
            return Err(SysError::new("getpwuid_r", io::Error::from_raw_os_error(rc)));
        }
        if result.is_null() {
            return Err(SysError::new(
                "getpwuid_r",
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("no passwd entry for uid {uid}"),
                ),
            ));
        }
        // SAFETY: pw_name points into buf and is NUL-terminated on success.
        let name = unsafe { std::ffi::CStr::from_ptr(pwd.pw_name) };
        Ok(name.to_string_lossy().into_owned())
    }

    fn hostname(&self) -> Result<String, SysError> {
        let mut buf = [0u8; 256];
        // SAFETY: buf is writable for its full length.
        let rc = unsafe { libc::gethostname(buf.as_mut_ptr() as *mut libc::c_char, buf.len()) };
        if rc != 0 {
            return Err(SysError::last_os("gethostname"));
        }
        let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
        Ok(String::from_utf8_lossy(&buf[..end]).into_owned())
    }
}

#[cfg(all(test, target_os = "linux"))]
mod tests {
    use super::*;

    #[test]
    fn test_uname_reports_linux() {
        let info = RealSys::new().uname().unwrap();
        assert_eq!(info.sysname, "Linux");
        assert!(!info.release.is_empty());
        assert!(!info.machine.is_empty());
    }

    #[test]
    fn test_sysinfo_has_ram() {
        let mem = RealSys::new().sysinfo().unwrap();
        assert!(mem.total_ram > 0);
        assert!(mem.mem_unit > 0);
        assert!(mem.free_ram <= mem.total_ram);
    }

    #[test]
    fn test_nprocs_positive() {
        assert!(RealSys::new().nprocs().unwrap() >= 1);
    }

    #[test]
    fn test_statvfs_root() {
        let space = RealSys::new().statvfs(Path::new("/")).unwrap();
        assert!(space.total_bytes > 0);
        assert!(space.free_bytes <= space.total_bytes);
    }

    #[test]
    fn test_statvfs_missing_path_is_not_permission_denied() {
        let err = RealSys::new()
            .statvfs(Path::new("/nonexistent/path/12345"))
            .unwrap_err();
        assert!(!err.is_permission_denied());
    }

    #[test]
    fn test_username_and_hostname_nonempty() {
        let sys = RealSys::new();
        assert!(!sys.username().unwrap().is_empty());
        assert!(!sys.hostname().unwrap().is_empty());
    }
}
