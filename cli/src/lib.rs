//! `sd-cli`: command line access to the StockDesk inventory admin.
//!
//! Runs the same session gate, validation and workflows as the web screen,
//! against the REST backend through `reqwest`.

pub mod cli;
pub mod commands;
pub mod http_api;
pub mod session_file;
pub mod utils;
