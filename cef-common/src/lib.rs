//! # CEF Common Library
//!
//! Shared code for the CEF dashboard including:
//! - Upload envelope and workbook decoding
//! - Block splitting and score normalization
//! - Question catalogue and colour bands
//! - Per-participant view computations
//! - Configuration loading

pub mod blocks;
pub mod config;
pub mod error;
pub mod questions;
pub mod scores;
pub mod session;
pub mod upload;
pub mod views;
pub mod workbook;

pub use error::{Error, Result};
pub use session::Session;
pub use workbook::{Cell, RawTable};
