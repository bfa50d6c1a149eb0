pub mod config;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod io;
pub mod oracle;
pub mod types;
