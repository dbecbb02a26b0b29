use clap::Parser;
use std::path::PathBuf;

/// comptree: build a composite tree of folders and files and report its sizes
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory to scan (default: current)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Load the tree from a TOML manifest instead of scanning a directory
    #[arg(short = 'm', long, value_name = "FILE", conflicts_with = "demo")]
    pub manifest: Option<PathBuf>,

    /// Use the built-in sample tree
    #[arg(long)]
    pub demo: bool,

    /// Print the tree as text and exit instead of opening the browser
    #[arg(short = 'p', long)]
    pub print: bool,

    /// Deepest level listed by --print (sizes still include everything below)
    #[arg(short = 'd', long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Show raw byte counts instead of KiB/MiB/...
    #[arg(short = 'b', long)]
    pub bytes: bool,

    /// Do not cross filesystem boundaries (drives on Windows)
    #[arg(short = 'x', long)]
    pub one_file_system: bool,

    /// Follow symbolic links and Junction points
    #[arg(short = 'L', long)]
    pub follow_links: bool,

    /// Write log output to this file
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["comptree"]).unwrap();
        assert_eq!(args.path, PathBuf::from("."));
        assert!(args.manifest.is_none());
        assert!(!args.demo);
        assert!(!args.print);
    }

    #[test]
    fn test_manifest_conflicts_with_demo() {
        let res = Args::try_parse_from(["comptree", "--demo", "-m", "tree.toml"]);
        assert!(res.is_err());
    }

    #[test]
    fn test_print_options() {
        let args = Args::try_parse_from(["comptree", "-p", "-d", "2", "-b", "/tmp"]).unwrap();
        assert!(args.print);
        assert!(args.bytes);
        assert_eq!(args.max_depth, Some(2));
        assert_eq!(args.path, PathBuf::from("/tmp"));
    }
}
