//! Scripted `SysApi` implementation for tests and non-Linux builds.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::collector::sys::{MemStats, SysApi, SysError};
use crate::report::{DiskSpace, KernelInfo};

/// Scripted outcome of a statvfs call on one mount point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatvfsOutcome {
    /// Call succeeds with these figures.
    Space(DiskSpace),
    /// Call fails with `EACCES`.
    Denied,
    /// Call fails with the given non-permission error kind.
    Fails(io::ErrorKind),
}

/// In-memory `SysApi` returning pre-seeded values.
#[derive(Debug, Clone, Default)]
pub struct MockSys {
    pub kernel: KernelInfo,
    pub mem: MemStats,
    pub nprocs: i32,
    pub username: String,
    pub hostname: String,
    statvfs: HashMap<PathBuf, StatvfsOutcome>,
}

impl MockSys {
    /// Creates an empty mock; statvfs on any path fails with `NotFound`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts a successful statvfs for `path`.
    pub fn add_mount_space(&mut self, path: impl AsRef<Path>, free_bytes: u64, total_bytes: u64) {
        self.statvfs.insert(
            path.as_ref().to_path_buf(),
            StatvfsOutcome::Space(DiskSpace {
                free_bytes,
                total_bytes,
            }),
        );
    }

    /// Scripts an `EACCES` failure for `path`.
    pub fn deny_mount(&mut self, path: impl AsRef<Path>) {
        self.statvfs
            .insert(path.as_ref().to_path_buf(), StatvfsOutcome::Denied);
    }

    /// Scripts a non-permission failure for `path`.
    pub fn break_mount(&mut self, path: impl AsRef<Path>, kind: io::ErrorKind) {
        self.statvfs
            .insert(path.as_ref().to_path_buf(), StatvfsOutcome::Fails(kind));
    }
}

impl SysApi for MockSys {
    fn uname(&self) -> Result<KernelInfo, SysError> {
        Ok(self.kernel.clone())
    }

    fn sysinfo(&self) -> Result<MemStats, SysError> {
        Ok(self.mem)
    }

    fn nprocs(&self) -> Result<i32, SysError> {
        Ok(self.nprocs)
    }

    fn statvfs(&self, path: &Path) -> Result<DiskSpace, SysError> {
        match self.statvfs.get(path) {
            Some(StatvfsOutcome::Space(space)) => Ok(*space),
            Some(StatvfsOutcome::Denied) => Err(SysError::new(
                "statvfs",
                io::ErrorKind::PermissionDenied.into(),
            )),
            Some(StatvfsOutcome::Fails(kind)) => Err(SysError::new("statvfs", (*kind).into())),
            None => Err(SysError::new("statvfs", io::ErrorKind::NotFound.into())),
        }
    }

    fn username(&self) -> Result<String, SysError> {
        Ok(self.username.clone())
    }

    fn hostname(&self) -> Result<String, SysError> {
        Ok(self.hostname.clone())
    }
}
