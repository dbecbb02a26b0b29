use crate::{
    component::{FileComponent, Folder},
    error::Result,
};

/// "My Folder" holding three files of 500, 800 and 1200 bytes.
pub fn sample_tree() -> Result<Folder> {
    let folder = Folder::new("My Folder");
    folder.add_component(FileComponent::new("file1.txt", 500))?;
    folder.add_component(FileComponent::new("file2.txt", 800))?;
    folder.add_component(FileComponent::new("file3.txt", 1200))?;
    Ok(folder)
}
