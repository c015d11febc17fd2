//! API request handlers

mod clients;
mod health;

pub use clients::*;
pub use health::*;
