pub mod client;
pub mod errors;
pub mod maps;
pub mod merge;
pub mod providers;
pub mod resolver;
pub mod types;
pub mod utils;

pub use client::IpGeo;
pub use errors::LookupError;
pub use maps::MapLinks;
pub use types::{Config, IpDetails};
