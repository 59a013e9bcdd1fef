//! Command-line front end for running the hook outside a bundler

pub mod args;
