//! Closure traversal and type mapping.

mod mapper;
mod walker;


pub use mapper::map_type;
pub use walker::Translator;
