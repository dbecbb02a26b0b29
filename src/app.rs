use crate::{
    component::{FileSystemComponent, Folder},
    sort::{SortMode, sort_view},
    source::{Loaded, Source},
    utils::format_size,
};
use ratatui::widgets::ListState;
use tracing::{info, warn};

const PAGE_SIZE: usize = 10;

/// Application State
pub struct App {
    pub source: Source,
    pub root: Folder,
    pub current: Folder,
    pub path_history: Vec<Folder>,
    /// Children of `current`, sorted for display. The folder itself keeps its own order.
    pub view: Vec<FileSystemComponent>,
    pub state: ListState,
    pub status_message: Option<String>,
    pub show_help: bool,
    pub sort_mode: SortMode,
    pub sort_ascending: bool,
    pub error_count: usize,
}

impl App {
    pub fn new(source: Source, loaded: Loaded) -> Self {
        let mut app = Self {
            source,
            current: loaded.root.clone(),
            root: loaded.root,
            path_history: Vec::new(),
            view: Vec::new(),
            state: ListState::default(),
            status_message: None,
            show_help: false,
            sort_mode: SortMode::Size,
            sort_ascending: false,
            error_count: loaded.error_count,
        };
        if app.error_count > 0 {
            app.status_message = Some(format!("{} entries could not be read", app.error_count));
        }
        app.sort_current_view();
        app.select_first();
        app
    }

    pub fn sort_current_view(&mut self) {
        self.view = self.current.components();
        sort_view(&mut self.view, self.sort_mode, self.sort_ascending);
    }

    /// Same mode flips direction, a new mode starts descending
    pub fn toggle_sort(&mut self, mode: SortMode) {
        if self.sort_mode == mode {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_mode = mode;
            self.sort_ascending = false;
        }
        self.sort_current_view();
        self.status_message = Some(format!(
            "Sort: {} {}",
            self.sort_mode.name(),
            if self.sort_ascending { "asc" } else { "desc" }
        ));
    }

    /// Step to the next sort mode, descending
    pub fn cycle_sort(&mut self) {
        self.toggle_sort(self.sort_mode.next());
    }

    pub fn current_children(&self) -> &[FileSystemComponent] {
        &self.view
    }

    /// Folder names from the root down to the current folder, joined by '/'
    pub fn current_trail(&self) -> String {
        self.path_history
            .iter()
            .chain(std::iter::once(&self.current))
            .map(|f| f.name())
            .collect::<Vec<_>>()
            .join("/")
    }

    pub fn current_total_size(&self) -> u64 {
        self.current.size()
    }

    pub fn selected(&self) -> Option<&FileSystemComponent> {
        self.state.selected().and_then(|i| self.view.get(i))
    }

    fn select_first(&mut self) {
        if self.view.is_empty() {
            self.state.select(None);
        } else {
            self.state.select(Some(0));
        }
    }

    pub fn next(&mut self) {
        if self.view.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(i) if i + 1 >= self.view.len() => 0,
            Some(i) => i + 1,
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        if self.view.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(0) => self.view.len() - 1,
            Some(i) => i - 1,
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn page_down(&mut self) {
        if self.view.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => (i + PAGE_SIZE).min(self.view.len() - 1),
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn page_up(&mut self) {
        if self.view.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => i.saturating_sub(PAGE_SIZE),
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn go_to_first(&mut self) {
        self.select_first();
    }

    pub fn go_to_last(&mut self) {
        if !self.view.is_empty() {
            self.state.select(Some(self.view.len() - 1));
        }
    }

    /// Enter the selected folder
    pub fn enter_dir(&mut self) {
        let Some(folder) = self.selected().and_then(|c| c.as_folder()).cloned() else {
            return;
        };
        let previous = std::mem::replace(&mut self.current, folder);
        self.path_history.push(previous);
        self.sort_current_view();
        self.select_first();
    }

    /// Go up one level
    pub fn go_up(&mut self) {
        if let Some(parent) = self.path_history.pop() {
            self.current = parent;
            self.sort_current_view();
            self.select_first();
        }
    }

    /// Drop the selected entry from the current folder. Only the in-memory tree changes.
    pub fn remove_selected(&mut self) {
        let Some(selected) = self.selected().cloned() else {
            return;
        };
        let index = self.state.selected().unwrap_or(0);
        if self.current.remove_component(&selected) {
            self.status_message = Some(format!(
                "Removed {} ({})",
                selected.name(),
                format_size(selected.size())
            ));
            self.sort_current_view();
            if self.view.is_empty() {
                self.state.select(None);
            } else {
                self.state.select(Some(index.min(self.view.len() - 1)));
            }
        }
    }

    /// Load the source again and walk back down to the same folder, as far as it still exists
    pub fn refresh(&mut self) {
        match self.source.load() {
            Ok(loaded) => {
                let trail: Vec<String> = if self.path_history.is_empty() {
                    Vec::new()
                } else {
                    self.path_history
                        .iter()
                        .skip(1)
                        .chain(std::iter::once(&self.current))
                        .map(|f| f.name().to_string())
                        .collect()
                };

                self.root = loaded.root;
                self.error_count = loaded.error_count;
                self.current = self.root.clone();
                self.path_history.clear();
                for name in &trail {
                    let Some(next) = self.current.find_folder(name) else {
                        break;
                    };
                    let previous = std::mem::replace(&mut self.current, next);
                    self.path_history.push(previous);
                }

                self.sort_current_view();
                self.select_first();
                info!(source = %self.source.describe(), "reloaded");
                self.status_message = Some("Refresh complete!".to_string());
            }
            Err(e) => {
                warn!(error = %e, "reload failed");
                self.status_message = Some(format!("Reload failed: {}", e));
            }
        }
    }
}
