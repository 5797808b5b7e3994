//! recordkeeper - a small record-keeping service
//!
//! A REST API over a record store with two interchangeable backends: an
//! in-memory map and a SQLite table.

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod records;
pub mod storage;
