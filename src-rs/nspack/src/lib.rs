//! nspack
//!
//! Compiles a namespaced description of device configuration objects into
//! the maps an install or uninstall run is built from. The work is split
//! across the workspace crates, re-exported here behind features:
//!
//! - `ir` re-exports [`nspack_ir`] as [`ir`]: the model graph
//! - `resolver` re-exports [`nspack_resolver`] as [`resolver`]: key
//!   generation, placeholder rewriting and duplicate detection, plus
//!   [`compile_module`] and [`compile_package`]
//!
//! Loading a package from disk and submitting the commands to a device are
//! left to the caller.

#[cfg(feature = "ir")]
pub use nspack_ir as ir;

#[cfg(feature = "resolver")]
pub use nspack_resolver as resolver;

#[cfg(feature = "resolver")]
mod compile;

#[cfg(feature = "resolver")]
pub use compile::{CommandSet, CompileError, compile_module, compile_package};
