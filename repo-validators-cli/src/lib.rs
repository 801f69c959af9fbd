//! Command-line front end for `repo-validators`.

pub mod cli;
pub mod logging;
