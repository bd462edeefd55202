pub mod config;
pub mod scan;
pub mod watch;

pub use config::*;
pub use scan::*;
pub use watch::*;
