/*!
## Command Module

This Rust module is the variable table and command interpreter for the
memory-inspection test target. It knows nothing about terminals; the
`term` module drives it and renders the events it returns.

*/

pub type Address = usize;

mod error;
mod runtime;
mod val;
mod var;

pub use error::Error;
pub use runtime::Event;
pub use runtime::Runtime;
pub use val::Kind;
pub use val::Val;
pub use var::Vars;
