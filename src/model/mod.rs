pub mod candidate;
pub mod config;
pub mod tag;
pub mod workspace;

pub use candidate::*;
pub use config::*;
pub use tag::*;
pub use workspace::*;
