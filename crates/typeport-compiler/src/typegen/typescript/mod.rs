//! TypeScript declaration rendering.
//!
//! Classes render as `export interface`, enums as `export enum`. Imports use
//! the ES module named-import form with a path-alias prefix.

mod config;
mod render;


pub use config::{Config, EnumFallback};
pub use render::{render_import, render_type};
