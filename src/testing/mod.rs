//! The dispatch engine: classify each test case, send its request, record
//! what came back.

pub mod classify;
pub mod outcome;
pub mod runner;
