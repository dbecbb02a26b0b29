use crate::{
    args::Args,
    component::Folder,
    demo::sample_tree,
    error::Result,
    manifest::load_manifest,
    scanner::{ScanOptions, scan_dir},
};
use std::path::PathBuf;
use tracing::info;

/// Where a tree comes from
#[derive(Debug, Clone)]
pub enum Source {
    Directory { path: PathBuf, opts: ScanOptions },
    Manifest(PathBuf),
    Demo,
}

/// A freshly loaded tree
#[derive(Debug, Clone)]
pub struct Loaded {
    pub root: Folder,
    /// Entries skipped while loading (directory scans only)
    pub error_count: usize,
}

impl Source {
    pub fn from_args(args: &Args) -> Self {
        if args.demo {
            Source::Demo
        } else if let Some(manifest) = &args.manifest {
            Source::Manifest(manifest.clone())
        } else {
            Source::Directory {
                path: args.path.clone(),
                opts: ScanOptions::from(args),
            }
        }
    }

    pub fn load(&self) -> Result<Loaded> {
        info!(source = %self.describe(), "loading tree");
        match self {
            Source::Directory { path, opts } => {
                let scan = scan_dir(path, *opts)?;
                Ok(Loaded {
                    root: scan.root,
                    error_count: scan.error_count,
                })
            }
            Source::Manifest(path) => Ok(Loaded {
                root: load_manifest(path)?,
                error_count: 0,
            }),
            Source::Demo => Ok(Loaded {
                root: sample_tree()?,
                error_count: 0,
            }),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Source::Directory { path, .. } => path.display().to_string(),
            Source::Manifest(path) => format!("manifest {}", path.display()),
            Source::Demo => "demo tree".to_string(),
        }
    }
}
