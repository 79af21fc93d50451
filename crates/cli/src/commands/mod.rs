pub mod config;
pub mod filter;
pub mod inspect;

pub use config::*;
pub use filter::*;
pub use inspect::*;
