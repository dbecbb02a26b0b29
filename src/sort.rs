use crate::component::FileSystemComponent;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortMode {
    Size,
    Name,
    ItemCount,
}

impl SortMode {
    pub fn next(&self) -> Self {
        match self {
            SortMode::Size => SortMode::Name,
            SortMode::Name => SortMode::ItemCount,
            SortMode::ItemCount => SortMode::Size,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SortMode::Size => "size",
            SortMode::Name => "name",
            SortMode::ItemCount => "count",
        }
    }

    pub fn compare(&self, a: &FileSystemComponent, b: &FileSystemComponent) -> Ordering {
        match self {
            SortMode::Size => a.size().cmp(&b.size()),
            SortMode::Name => a.name().cmp(b.name()),
            SortMode::ItemCount => a.child_count().cmp(&b.child_count()),
        }
    }
}

/// Sort a view of children. Stable, so equal keys keep folder order.
pub fn sort_view(view: &mut [FileSystemComponent], mode: SortMode, ascending: bool) {
    view.sort_by(|a, b| {
        let cmp = mode.compare(a, b);
        if ascending { cmp } else { cmp.reverse() }
    });
}
