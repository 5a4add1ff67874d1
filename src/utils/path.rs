use std::path::{Component, Path, PathBuf};

/// Normalize a path, resolving ".." and "." components
pub fn normalize_path<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    let mut result = PathBuf::new();

    for component in path.components() {
        match component {
            Component::ParentDir => {
                // Go up one level unless we're at the root
                if !result.as_os_str().is_empty() && !result.ends_with("..") {
                    result.pop();
                } else {
                    result.push("..");
                }
            }
            Component::CurDir => {
                // Skip "." components
            }
            _ => {
                result.push(component);
            }
        }
    }

    result
}

/// Resolve a path to absolute canonical form against a base directory
pub fn to_absolute<B: AsRef<Path>, P: AsRef<Path>>(base: B, path: P) -> PathBuf {
    let path = path.as_ref();
    if path.is_absolute() {
        normalize_path(path)
    } else {
        normalize_path(base.as_ref().join(path))
    }
}

/// Compute the relative path from one directory to a target path,
/// producing ".." components where needed
pub fn relative_path<F: AsRef<Path>, T: AsRef<Path>>(from_dir: F, to: T) -> PathBuf {
    let from = normalize_path(from_dir);
    let to = normalize_path(to);

    let from_components: Vec<Component> = from.components().collect();
    let to_components: Vec<Component> = to.components().collect();

    let common = from_components
        .iter()
        .zip(to_components.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut result = PathBuf::new();
    for _ in common..from_components.len() {
        result.push("..");
    }
    for component in &to_components[common..] {
        result.push(component);
    }

    result
}

/// Map a source document path to its expected rendered-output path
pub fn with_html_extension<P: AsRef<Path>>(path: P) -> PathBuf {
    path.as_ref().with_extension("html")
}

/// Render a path with forward slashes for use inside an href
pub fn display_slashed(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
