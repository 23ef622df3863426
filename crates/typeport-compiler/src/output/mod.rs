//! Output paths, file grouping, import linking, and writing.

mod layout;
mod linker;
mod writer;


pub use layout::{OUTPUT_EXTENSION, OutputLayout};
pub use linker::{Linker, OutputGroup, module_path};
pub use writer::{WriteMode, write_group};
