#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use comptree::{
    Error, FileComponent, FileSystemComponent, Folder, ReportOptions, Source,
    manifest::load_manifest, render_report,
};
use proptest::prelude::*;
use std::path::PathBuf;

fn demo_manifest() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos").join("project.toml")
}

#[test]
fn three_files_in_one_folder() {
    let root = Folder::new("root");
    root.add_component(FileComponent::new("a.txt", 500)).unwrap();
    root.add_component(FileComponent::new("b.txt", 800)).unwrap();
    root.add_component(FileComponent::new("c.txt", 1200)).unwrap();

    assert_eq!(root.size(), 2500);
    assert_eq!(root.components().len(), 3);
}

#[test]
fn nested_folder_reports_leaf_size() {
    let inner = Folder::new("sub");
    inner.add_component(FileComponent::new("x.txt", 100)).unwrap();
    let outer = Folder::new("root");
    outer.add_component(inner).unwrap();

    assert_eq!(outer.size(), 100);
}

#[test]
fn cycle_through_shared_handle_is_rejected() {
    let a = Folder::new("a");
    let b = Folder::new("b");
    let c = Folder::new("c");
    a.add_component(b.clone()).unwrap();
    b.add_component(c.clone()).unwrap();

    let err = c.add_component(a.clone()).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
    assert!(c.is_empty());
    assert_eq!(a.checked_size().unwrap(), 0);
}

#[test]
fn manifest_file_loads_in_order() {
    let root = load_manifest(&demo_manifest()).unwrap();
    assert_eq!(root.name(), "project");
    assert_eq!(root.size(), 1200 + 3400 + 800 + 20480);

    let names: Vec<_> = root.components().iter().map(|c| c.name().to_string()).collect();
    assert_eq!(names, ["README.md", "src", "assets", "empty"]);
    assert_eq!(root.find_folder("assets").unwrap().size(), 20480);
    assert!(root.find_folder("empty").unwrap().is_empty());
}

#[test]
fn missing_manifest_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_manifest(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn malformed_manifest_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "name = \n").unwrap();
    let err = load_manifest(&path).unwrap_err();
    assert!(matches!(err, Error::Manifest { .. }));
}

#[test]
fn negative_size_in_manifest_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("neg.toml");
    std::fs::write(&path, "name = \"r\"\n[[children]]\nname = \"n\"\nsize = -1\n").unwrap();
    let err = Source::Manifest(path).load().unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
}

#[test]
fn demo_report_matches_listing() {
    let loaded = Source::Demo.load().unwrap();
    let opts = ReportOptions {
        max_depth: None,
        raw_bytes: true,
    };
    assert_eq!(
        render_report(&loaded.root, &opts),
        concat!(
            "My Folder/  2500 B\n",
            "  file1.txt  500 B\n",
            "  file2.txt  800 B\n",
            "  file3.txt  1200 B\n",
            "Total size: 2500 B\n",
        )
    );
}

#[test]
fn scanned_directory_matches_disk() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("docs")).unwrap();
    std::fs::write(dir.path().join("docs").join("a.md"), vec![0u8; 300]).unwrap();
    std::fs::write(dir.path().join("b.bin"), vec![0u8; 700]).unwrap();

    let source = Source::Directory {
        path: dir.path().to_path_buf(),
        opts: Default::default(),
    };
    let loaded = source.load().unwrap();
    assert_eq!(loaded.root.size(), 1000);
    let docs = loaded.root.find_folder("docs").unwrap();
    assert_eq!(docs.components()[0].size(), 300);
}

#[derive(Debug, Clone)]
enum Shape {
    File(u32),
    Folder(Vec<Shape>),
}

fn shape() -> impl Strategy<Value = Shape> {
    let leaf = any::<u32>().prop_map(Shape::File);
    leaf.prop_recursive(4, 64, 6, |inner| {
        prop::collection::vec(inner, 0..6).prop_map(Shape::Folder)
    })
}

fn expected(shape: &Shape) -> u64 {
    match shape {
        Shape::File(size) => u64::from(*size),
        Shape::Folder(children) => children.iter().map(expected).sum(),
    }
}

fn build(shape: &Shape, name: &str) -> FileSystemComponent {
    match shape {
        Shape::File(size) => FileComponent::new(name, u64::from(*size)).into(),
        Shape::Folder(children) => {
            let folder = Folder::new(name);
            for (i, child) in children.iter().enumerate() {
                folder.add_component(build(child, &format!("{}-{}", name, i))).unwrap();
            }
            folder.into()
        }
    }
}

proptest! {
    #[test]
    fn size_is_sum_of_leaves(shape in shape()) {
        let tree = build(&shape, "n");
        prop_assert_eq!(tree.size(), expected(&shape));
        prop_assert_eq!(tree.size(), tree.size());
        prop_assert_eq!(tree.checked_size().unwrap(), expected(&shape));
    }

    #[test]
    fn add_then_remove_round_trips(
        sizes in prop::collection::vec(any::<u32>(), 0..8),
        pos in 0usize..8
    ) {
        let folder = Folder::new("f");
        for (i, size) in sizes.iter().enumerate() {
            folder.add_component(FileComponent::new(format!("{}", i), u64::from(*size))).unwrap();
        }
        let before = folder.components();

        let extra: FileSystemComponent = FileComponent::new("extra", 1).into();
        folder.add_component(extra.clone()).unwrap();
        prop_assert!(folder.remove_component(&extra));
        let after = folder.components();
        prop_assert_eq!(after.len(), before.len());
        prop_assert!(before.iter().zip(&after).all(|(a, b)| a.ptr_eq(b)));

        // removing any existing child, including index 0, works
        if let Some(victim) = before.get(pos % before.len().max(1)) {
            prop_assert!(folder.remove_component(victim));
            prop_assert!(folder.add_component(victim.clone()).is_ok());
        }

        prop_assert_eq!(folder.len(), before.len());
        let total: u64 = sizes.iter().map(|s| u64::from(*s)).sum();
        prop_assert_eq!(folder.size(), total);
    }
}
