pub mod check;
pub mod dump;
pub mod exec;
pub mod export;
pub mod load;
pub mod pattern_loader;
pub mod postfix;
pub mod run_common;
pub mod stats;
pub mod suite;
pub mod trace;

#[cfg(test)]
mod pattern_loader_tests;
