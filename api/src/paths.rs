//! Helpers for the slash-separated paths used to address remote data.

use std::path::Path;

pub const ROOT: &str = "/";

pub fn is_root(path: &str) -> bool {
    path == ROOT
}

/// Strip trailing slashes, so that `/runs/` and `/runs` compare equal.
pub fn normalize(path: &str) -> &str {
    path.trim_end_matches('/')
}

/// Split a path into its parent folder (always with a trailing slash, as the
/// listing endpoint expects) and its base name.
pub fn split(path: &str) -> (String, String) {
    let path = Path::new(path);
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut parent = path
        .parent()
        .map(|parent| parent.to_string_lossy().into_owned())
        .filter(|parent| !parent.is_empty())
        .unwrap_or_else(|| ROOT.to_owned());
    if !parent.ends_with('/') {
        parent.push('/');
    }
    (parent, name)
}

pub fn parent(path: &str) -> String {
    split(path).0
}

pub fn join(folder: &str, name: &str) -> String {
    format!("{}/{}", normalize(folder), name)
}

/// The part of `destination` below `folder`, or `None` if the destination is
/// the folder itself.
pub fn relative_name(destination: &str, folder: &str) -> Option<String> {
    let destination = Path::new(destination);
    let relative = match destination.strip_prefix(folder) {
        Ok(relative) => relative.to_string_lossy().into_owned(),
        Err(_) => destination
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default(),
    };
    if relative.is_empty() {
        None
    } else {
        Some(relative)
    }
}
