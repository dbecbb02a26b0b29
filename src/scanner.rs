use crate::{
    args::Args,
    component::{FileComponent, Folder},
    error::{Error, Result},
    utils::num_cpus,
};
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, warn};

#[cfg(windows)]
use crate::utils::get_drive_letter;

#[cfg(not(windows))]
use crate::utils::get_volume_id;

/// Walk options taken from the command line
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanOptions {
    pub one_file_system: bool,
    pub follow_links: bool,
}

impl From<&Args> for ScanOptions {
    fn from(args: &Args) -> Self {
        Self {
            one_file_system: args.one_file_system,
            follow_links: args.follow_links,
        }
    }
}

/// Result of a directory scan
#[derive(Debug, Clone)]
pub struct Scan {
    pub root: Folder,
    /// Entries that could not be read and were left out of the tree
    pub error_count: usize,
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Parallel directory scanner using jwalk.
///
/// Directories become folders, everything else becomes a file sized by its
/// byte length (symlinks count as zero unless followed).
pub fn scan_dir(path: &Path, opts: ScanOptions) -> Result<Scan> {
    use jwalk::WalkDir;

    let root_path = path.to_path_buf();
    let root_meta = fs::metadata(&root_path).map_err(|source| Error::Io {
        path: root_path.clone(),
        source,
    })?;
    if !root_meta.is_dir() {
        return Err(Error::invalid(format!(
            "{} is not a directory",
            root_path.display()
        )));
    }

    let walker = WalkDir::new(&root_path)
        .follow_links(opts.follow_links)
        .skip_hidden(false)
        .parallelism(jwalk::Parallelism::RayonNewPool(num_cpus()));

    let mut entries: Vec<(PathBuf, u64, bool)> = Vec::new();
    let mut error_count = 0usize;

    for entry_result in walker {
        match entry_result {
            Ok(entry) => {
                let entry_path = entry.path();

                if entry_path == root_path {
                    continue;
                }

                // One-file-system check
                #[cfg(windows)]
                if opts.one_file_system
                    && let (Some(root_drive), Some(entry_drive)) =
                        (get_drive_letter(&root_path), get_drive_letter(&entry_path))
                    && root_drive != entry_drive
                {
                    continue;
                }

                #[cfg(not(windows))]
                if opts.one_file_system
                    && let (Some(root_vol), Some(entry_vol)) =
                        (get_volume_id(&root_path), get_volume_id(&entry_path))
                    && root_vol != entry_vol
                {
                    continue;
                }

                let meta = if opts.follow_links {
                    fs::metadata(&entry_path)
                } else {
                    fs::symlink_metadata(&entry_path)
                };

                match meta {
                    Ok(m) => {
                        let size = if m.is_file() { m.len() } else { 0 };
                        entries.push((entry_path, size, m.is_dir()));
                    }
                    Err(e) => {
                        error_count += 1;
                        warn!(
                            path = %entry_path.display(),
                            error = %e,
                            "skipping unreadable entry"
                        );
                    }
                }
            }
            Err(e) => {
                error_count += 1;
                warn!(error = %e, "walk error");
            }
        }
    }

    let root = Folder::new(display_name(&root_path));
    let mut folders: HashMap<PathBuf, Folder> = HashMap::new();
    folders.insert(root_path.clone(), root.clone());

    // Parents before children; siblings by name so the tree is stable across runs
    entries.sort_by(|a, b| {
        a.0.components()
            .count()
            .cmp(&b.0.components().count())
            .then_with(|| a.0.cmp(&b.0))
    });

    for (entry_path, size, is_dir) in entries {
        let name = display_name(&entry_path);
        let Some(parent) = entry_path.parent().and_then(|p| folders.get(p)).cloned() else {
            // parent was skipped (other filesystem or unreadable)
            continue;
        };
        if is_dir {
            let folder = Folder::new(name);
            parent.add_component(folder.clone())?;
            folders.insert(entry_path, folder);
        } else {
            parent.add_component(FileComponent::new(name, size))?;
        }
    }

    debug!(
        root = %root_path.display(),
        folders = folders.len(),
        errors = error_count,
        "scan complete"
    );

    Ok(Scan { root, error_count })
}
