use crate::{
    component::{FileSystemComponent, Folder},
    source::Loaded,
    utils::format_size,
};
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    /// Deepest level listed; the root is level 0
    pub max_depth: Option<usize>,
    /// Print byte counts instead of binary units
    pub raw_bytes: bool,
}

impl ReportOptions {
    fn size(&self, size: u64) -> String {
        if self.raw_bytes {
            format!("{} B", size)
        } else {
            format_size(size)
        }
    }
}

/// Indented listing of `root`, one line per entry, followed by the total.
pub fn report_lines(root: &Folder, opts: &ReportOptions) -> Vec<String> {
    let mut lines = vec![format!("{}/  {}", root.name(), opts.size(root.size()))];
    push_children(&mut lines, root, 1, opts);
    lines.push(format!("Total size: {}", opts.size(root.size())));
    lines
}

fn push_children(lines: &mut Vec<String>, folder: &Folder, depth: usize, opts: &ReportOptions) {
    if opts.max_depth.is_some_and(|max| depth > max) {
        return;
    }
    let indent = "  ".repeat(depth);
    for child in folder.components() {
        match &child {
            FileSystemComponent::File(file) => {
                lines.push(format!("{}{}  {}", indent, file.name(), opts.size(file.size())));
            }
            FileSystemComponent::Folder(sub) => {
                lines.push(format!("{}{}/  {}", indent, sub.name(), opts.size(sub.size())));
                push_children(lines, sub, depth + 1, opts);
            }
        }
    }
}

pub fn write_report<W: Write>(out: &mut W, root: &Folder, opts: &ReportOptions) -> io::Result<()> {
    for line in report_lines(root, opts) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Report for a loaded tree, noting entries the loader had to skip.
pub fn write_loaded_report<W: Write>(
    out: &mut W,
    loaded: &Loaded,
    opts: &ReportOptions,
) -> io::Result<()> {
    write_report(out, &loaded.root, opts)?;
    if loaded.error_count > 0 {
        writeln!(out, "({} entries could not be read)", loaded.error_count)?;
    }
    Ok(())
}

pub fn render_report(root: &Folder, opts: &ReportOptions) -> String {
    report_lines(root, opts)
        .into_iter()
        .map(|line| line + "\n")
        .collect()
}
