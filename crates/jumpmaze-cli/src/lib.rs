//! Library half of the `jumpmaze` binary: report formatting and the
//! interactive terminal player.

pub mod commands;
pub mod term;
