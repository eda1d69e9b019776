//! Library crate for userdir.
//!
//! The query core is pure and takes collections as arguments:
//! - Name display formatting (`names`)
//! - Add-user form validation (`validation`)
//! - Name/email search (`search`)
//! - Header-click sorting (`sort`)
//!
//! Around it sit the API client (`client`), the in-memory user list
//! (`store`), configuration (`config`) and the CLI commands (`commands`).

pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod names;
pub mod output;
pub mod search;
pub mod sort;
pub mod store;
pub mod types;
pub mod validation;

pub use error::{Result, UserDirError};
