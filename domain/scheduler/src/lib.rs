//! Domain of the PBS job controller: job snapshots, scheduler output parsing
//! and the service boundaries the controller is built on.

pub mod exception;
#[cfg(feature = "mock")]
pub mod mock;
pub mod model;
pub mod parser;
pub mod service;
