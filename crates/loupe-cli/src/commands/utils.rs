//! Shared helpers for command implementations.

use crate::error::{CliError, Result};
use loupe_gen::ComponentDescriptor;
use std::path::Path;

/// Read and parse a component descriptor JSON file.
pub(crate) fn read_descriptor(path: &Path) -> Result<ComponentDescriptor> {
    let content = std::fs::read_to_string(path)
        .map_err(|_| CliError::DescriptorNotFound(path.to_path_buf()))?;
    let descriptor: ComponentDescriptor = serde_json::from_str(&content)?;
    Ok(descriptor)
}
