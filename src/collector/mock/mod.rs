//! In-memory mocks for testing collectors without a live kernel.

pub mod filesystem;
pub mod scenarios;
pub mod sys;

pub use filesystem::MockFs;
pub use sys::MockSys;
