//! Command implementations.

pub mod config;
pub mod inspect;
pub mod process;
pub mod summary;

pub use self::config::execute_config;
pub use self::inspect::execute_inspect;
pub use self::process::execute_process;
pub use self::summary::execute_summary;
