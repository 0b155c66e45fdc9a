pub mod check;
mod command_result;
pub mod helper;
pub mod merge;
pub mod stats;
pub mod strip;

pub use command_result::*;
