//! Story page → library record extraction.
//!
//! [`parser::process_page`] is the pure core; [`library`], [`fetch`] and
//! [`publish`] are the I/O around it.

pub mod error;
pub mod fetch;
pub mod library;
pub mod model;
pub mod parser;
pub mod publish;
pub mod settings;
pub mod utils;
