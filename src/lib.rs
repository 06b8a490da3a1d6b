#![doc = include_str!("../README.md")]

pub mod config;
pub mod error;
pub mod table;
pub mod token;
pub mod workload;

pub use error::Error;
