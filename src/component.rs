use crate::error::{Error, Result};
use std::{cell::RefCell, collections::HashSet, rc::Rc};
use tracing::debug;

/// A file: fixed name, fixed size in bytes
#[derive(Debug, Clone)]
pub struct FileComponent {
    inner: Rc<Leaf>,
}

#[derive(Debug)]
struct Leaf {
    name: String,
    size: u64,
}

impl FileComponent {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            inner: Rc::new(Leaf {
                name: name.into(),
                size,
            }),
        }
    }

    /// Build a file from a signed size, rejecting negative values.
    pub fn try_new(name: impl Into<String>, size: i64) -> Result<Self> {
        let name = name.into();
        let size = u64::try_from(size).map_err(|_| {
            Error::invalid(format!("file {:?} has negative size {}", name, size))
        })?;
        Ok(Self::new(name, size))
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn size(&self) -> u64 {
        self.inner.size
    }

    /// Identity comparison: true only for clones of the same file.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

/// A folder: ordered children, size derived from theirs.
///
/// Cloning yields another handle to the same folder. The same folder (or file)
/// may be listed under several parents, but a folder can never end up below
/// itself: [`Folder::add_component`] refuses any insertion that would close a loop.
#[derive(Debug, Clone)]
pub struct Folder {
    inner: Rc<FolderNode>,
}

#[derive(Debug)]
struct FolderNode {
    name: String,
    children: RefCell<Vec<FileSystemComponent>>,
}

impl Folder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(FolderNode {
                name: name.into(),
                children: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Sum of the children's sizes, recomputed on every call.
    pub fn size(&self) -> u64 {
        self.inner
            .children
            .borrow()
            .iter()
            .fold(0u64, |total, child| total.saturating_add(child.size()))
    }

    /// Like [`Folder::size`], but tracks the folders on the current path and
    /// reports a cycle instead of recursing forever.
    pub fn checked_size(&self) -> Result<u64> {
        let mut ancestors = HashSet::new();
        self.checked_size_inner(&mut ancestors)
    }

    fn checked_size_inner(&self, ancestors: &mut HashSet<*const FolderNode>) -> Result<u64> {
        let key = Rc::as_ptr(&self.inner);
        if !ancestors.insert(key) {
            return Err(Error::Structural(format!(
                "folder {:?} is its own descendant",
                self.name()
            )));
        }
        let mut total = 0u64;
        for child in self.inner.children.borrow().iter() {
            let size = match child {
                FileSystemComponent::File(file) => file.size(),
                FileSystemComponent::Folder(folder) => folder.checked_size_inner(ancestors)?,
            };
            total = total.saturating_add(size);
        }
        ancestors.remove(&key);
        Ok(total)
    }

    /// Append a child. Fails without touching the tree if the child is this
    /// folder or one of its ancestors.
    pub fn add_component(&self, component: impl Into<FileSystemComponent>) -> Result<()> {
        let component = component.into();
        if let FileSystemComponent::Folder(folder) = &component
            && (folder.ptr_eq(self) || folder.has_descendant(self))
        {
            return Err(Error::invalid(format!(
                "adding {:?} to {:?} would create a cycle",
                folder.name(),
                self.name()
            )));
        }
        debug!(parent = self.name(), child = component.name(), "add component");
        self.inner.children.borrow_mut().push(component);
        Ok(())
    }

    /// Remove the first child that is `component` (by identity, not by name).
    /// Returns false if it was not a direct child.
    pub fn remove_component(&self, component: &FileSystemComponent) -> bool {
        let mut children = self.inner.children.borrow_mut();
        match children.iter().position(|c| c.ptr_eq(component)) {
            Some(index) => {
                children.remove(index);
                debug!(parent = self.name(), child = component.name(), "remove component");
                true
            }
            None => false,
        }
    }

    /// Snapshot of the direct children, in insertion order.
    pub fn components(&self) -> Vec<FileSystemComponent> {
        self.inner.children.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.inner.children.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.children.borrow().is_empty()
    }

    /// Whether `component` is a direct child.
    pub fn contains(&self, component: &FileSystemComponent) -> bool {
        self.inner.children.borrow().iter().any(|c| c.ptr_eq(component))
    }

    /// Whether `folder` appears anywhere below this folder.
    /// Each folder is searched once, so shared subtrees do not multiply the work.
    pub fn has_descendant(&self, folder: &Folder) -> bool {
        let mut visited = HashSet::new();
        self.has_descendant_inner(folder, &mut visited)
    }

    fn has_descendant_inner(
        &self,
        folder: &Folder,
        visited: &mut HashSet<*const FolderNode>,
    ) -> bool {
        if !visited.insert(Rc::as_ptr(&self.inner)) {
            return false;
        }
        self.inner.children.borrow().iter().any(|child| match child {
            FileSystemComponent::Folder(sub) => {
                sub.ptr_eq(folder) || sub.has_descendant_inner(folder, visited)
            }
            FileSystemComponent::File(_) => false,
        })
    }

    /// First direct child folder called `name`.
    pub fn find_folder(&self, name: &str) -> Option<Folder> {
        self.inner.children.borrow().iter().find_map(|child| match child {
            FileSystemComponent::Folder(folder) if folder.name() == name => Some(folder.clone()),
            _ => None,
        })
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    #[cfg(test)]
    pub(crate) fn push_unchecked(&self, component: FileSystemComponent) {
        self.inner.children.borrow_mut().push(component);
    }
}

/// Anything that can sit in a folder
#[derive(Debug, Clone)]
pub enum FileSystemComponent {
    File(FileComponent),
    Folder(Folder),
}

impl FileSystemComponent {
    pub fn name(&self) -> &str {
        match self {
            FileSystemComponent::File(file) => file.name(),
            FileSystemComponent::Folder(folder) => folder.name(),
        }
    }

    pub fn size(&self) -> u64 {
        match self {
            FileSystemComponent::File(file) => file.size(),
            FileSystemComponent::Folder(folder) => folder.size(),
        }
    }

    pub fn checked_size(&self) -> Result<u64> {
        match self {
            FileSystemComponent::File(file) => Ok(file.size()),
            FileSystemComponent::Folder(folder) => folder.checked_size(),
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, FileSystemComponent::Folder(_))
    }

    pub fn as_folder(&self) -> Option<&Folder> {
        match self {
            FileSystemComponent::Folder(folder) => Some(folder),
            FileSystemComponent::File(_) => None,
        }
    }

    pub fn child_count(&self) -> usize {
        match self {
            FileSystemComponent::File(_) => 0,
            FileSystemComponent::Folder(folder) => folder.len(),
        }
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (FileSystemComponent::File(a), FileSystemComponent::File(b)) => a.ptr_eq(b),
            (FileSystemComponent::Folder(a), FileSystemComponent::Folder(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl From<FileComponent> for FileSystemComponent {
    fn from(file: FileComponent) -> Self {
        FileSystemComponent::File(file)
    }
}

impl From<Folder> for FileSystemComponent {
    fn from(folder: Folder) -> Self {
        FileSystemComponent::Folder(folder)
    }
}
