//! TOML manifests describing a tree by hand.
//!
//! ```toml
//! name = "root"
//!
//! [[children]]
//! name = "a.txt"
//! size = 500
//!
//! [[children]]
//! name = "sub"
//!
//! [[children.children]]
//! name = "x.txt"
//! size = 100
//! ```
//!
//! An entry with a `size` is a file; anything else is a folder.

use crate::{
    component::{FileComponent, Folder},
    error::{Error, Result},
};
use serde::Deserialize;
use std::{fs, path::Path};
use tracing::debug;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Entry {
    pub name: String,
    #[serde(default)]
    pub size: Option<i64>,
    #[serde(default)]
    pub children: Option<Vec<Entry>>,
}

pub fn load_manifest(path: &Path) -> Result<Folder> {
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let entry: Entry = toml::from_str(&text).map_err(|source| Error::Manifest {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), root = %entry.name, "manifest parsed");
    build_root(&entry)
}

/// Turn a parsed manifest into a tree. The top-level entry must be a folder.
pub fn build_root(entry: &Entry) -> Result<Folder> {
    if entry.size.is_some() {
        return Err(Error::invalid(format!(
            "manifest root {:?} must be a folder, not a file",
            entry.name
        )));
    }
    build_folder(entry)
}

fn build_folder(entry: &Entry) -> Result<Folder> {
    let folder = Folder::new(entry.name.clone());
    for child in entry.children.iter().flatten() {
        match (child.size, &child.children) {
            (Some(_), Some(_)) => {
                return Err(Error::invalid(format!(
                    "entry {:?} has both a size and children",
                    child.name
                )));
            }
            (Some(size), None) => {
                folder.add_component(FileComponent::try_new(child.name.clone(), size)?)?
            }
            (None, _) => folder.add_component(build_folder(child)?)?,
        }
    }
    Ok(folder)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<Folder> {
        let entry: Entry = toml::from_str(text).unwrap();
        build_root(&entry)
    }

    #[test]
    fn test_nested_manifest() {
        let root = parse(
            r#"
            name = "root"

            [[children]]
            name = "a.txt"
            size = 500

            [[children]]
            name = "sub"

            [[children.children]]
            name = "x.txt"
            size = 100

            [[children]]
            name = "b.txt"
            size = 800
            "#,
        )
        .unwrap();

        assert_eq!(root.name(), "root");
        assert_eq!(root.size(), 1400);
        let names: Vec<_> = root.components().iter().map(|c| c.name().to_string()).collect();
        assert_eq!(names, ["a.txt", "sub", "b.txt"]);
        assert_eq!(root.find_folder("sub").unwrap().size(), 100);
    }

    #[test]
    fn test_entry_without_size_is_empty_folder() {
        let root = parse(
            r#"
            name = "root"
            [[children]]
            name = "empty"
            "#,
        )
        .unwrap();
        assert!(root.components()[0].is_folder());
        assert_eq!(root.size(), 0);
    }

    #[test]
    fn test_negative_size_rejected() {
        let err = parse(
            r#"
            name = "root"
            [[children]]
            name = "bad.txt"
            size = -5
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_size_and_children_rejected() {
        let err = parse(
            r#"
            name = "root"
            [[children]]
            name = "odd"
            size = 5
            children = []
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_file_root_rejected() {
        let err = parse("name = \"a.txt\"\nsize = 3").unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_unknown_field_is_a_parse_error() {
        let res: std::result::Result<Entry, _> = toml::from_str("name = \"r\"\nbytes = 3");
        assert!(res.is_err());
    }
}
