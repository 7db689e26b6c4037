//! Filesystem helpers for the `address-field` binary.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde_json::Value;

use address_field::{AddressFieldError, AddressFieldResult};

/// Reads a UTF-8 file through a capability handle on its parent directory.
pub fn read_to_string(path: &Utf8Path) -> AddressFieldResult<String> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let file_name = path.file_name().ok_or_else(|| {
        AddressFieldError::io(
            path,
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "path has no file name"),
        )
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority())
        .map_err(|err| AddressFieldError::io(parent, err))?;
    dir.read_to_string(file_name)
        .map_err(|err| AddressFieldError::io(path, err))
}

/// Reads and parses a JSON document.
pub fn read_json(path: &Utf8Path) -> AddressFieldResult<Value> {
    let contents = read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}
