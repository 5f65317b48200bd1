//! Entry-point source generation for Loupe component previews.
//!
//! Turns a [`ComponentDescriptor`] into a renderable program fragment: the
//! generated source imports the described component via a computed relative
//! path and mounts it with its serialized default props. Also provides the
//! diagnostic placeholder template and the relative-path resolver.
//!
//! # Example
//!
//! ```rust
//! use loupe_gen::{component_entry, ComponentDescriptor, FunctionPropPolicy};
//! use std::path::{Path, PathBuf};
//!
//! let descriptor = ComponentDescriptor {
//!     name: "Btn".to_string(),
//!     absolute_path: PathBuf::from("/ws/src/components/Btn.tsx"),
//!     props: vec![],
//! };
//! let source = component_entry(
//!     &descriptor,
//!     Path::new("/ext/preview"),
//!     FunctionPropPolicy::default(),
//! )?;
//! assert!(source.contains("../../ws/src/components/Btn.tsx"));
//! # Ok::<(), loupe_gen::GenError>(())
//! ```

mod entry;
mod error;
mod paths;

pub use entry::{
    component_entry, diagnostic_entry, serialize_prop, ComponentDescriptor, FunctionPropPolicy,
    Prop, PropKind,
};
pub use error::{GenError, Result};
pub use paths::relative_import;
