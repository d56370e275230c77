//! # memtarget
//!
//! An interactive target process for exercising external memory
//! inspection and modification tools.
//!
//! The fixture exposes ten process-global scalar variables of fixed
//! width and signedness, each at a stable address for the process's
//! lifetime, behind a line-oriented prompt. Attach your inspector, run
//! `print` to learn the addresses, then read and write away. Run `help`
//! at the prompt for the command list.

pub mod cmd;
pub mod term;
