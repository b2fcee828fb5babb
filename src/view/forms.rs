//! Target construction and required-field validation for the two mutation
//! forms. Both operate on the current directory only; no path-character
//! sanitization happens here beyond what the route codec's escaping already
//! provides.

use crate::constants::PATH_SEPARATOR;
use crate::error::CidnavError;

/// One write target per selected file: the current directory path,
/// normalized to end with the separator, plus the file's own name.
pub fn upload_targets<S: AsRef<str>>(
    dir_path: &str,
    names: &[S],
) -> Result<Vec<String>, CidnavError> {
    if names.is_empty() {
        return Err(CidnavError::basic_str("No files to upload"));
    }

    let base = normalize_dir(dir_path);
    names
        .iter()
        .map(|name| {
            let name = name.as_ref();
            if name.is_empty() {
                return Err(CidnavError::basic_str("File name must not be empty"));
            }
            Ok(format!("{base}{name}"))
        })
        .collect()
}

/// Target path for a new directory under `dir_path`.
pub fn mkdir_target(dir_path: &str, name: &str) -> Result<String, CidnavError> {
    if name.is_empty() {
        return Err(CidnavError::basic_str("Directory name must not be empty"));
    }
    Ok(format!("{}{name}", normalize_dir(dir_path)))
}

fn normalize_dir(dir_path: &str) -> String {
    if dir_path.ends_with(PATH_SEPARATOR) {
        dir_path.to_string()
    } else {
        format!("{dir_path}{PATH_SEPARATOR}")
    }
}
