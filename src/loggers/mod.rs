//! Logger implementations

pub mod async_logger;
pub mod console;
pub mod file;
pub mod memory;

pub use async_logger::AsyncLogger;
pub use console::{ConsoleLogger, ConsoleStream};
pub use file::FileLogger;
pub use memory::MemoryLogger;

// Re-export the trait next to its implementations
pub use crate::core::EventLogger;
