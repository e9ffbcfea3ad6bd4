//! Console output adapters.

mod memory;
mod writer;

pub use memory::SharedBuffer;
pub use writer::ConsoleWriter;
