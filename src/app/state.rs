use crate::selection::Selection;

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub created_at: std::time::Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Success,
            created_at: std::time::Instant::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Error,
            created_at: std::time::Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > std::time::Duration::from_secs(3)
    }
}

pub struct AppState {
    pub should_quit: bool,
    pub show_help: bool,

    // Gallery
    pub selection: Selection,
    pub nonce: Option<String>,
    pub loading: bool,
    pub loaded: bool,

    // Cursor and virtual scroll
    pub selected: usize,
    pub scroll_offset: usize,
    /// Rows available to the list at the last draw.
    pub viewport_height: usize,

    pub endpoint: String,
    pub toast: Option<Toast>,
    pub status: String,
}

impl AppState {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            show_help: false,
            selection: Selection::default(),
            nonce: None,
            loading: false,
            loaded: false,
            selected: 0,
            scroll_offset: 0,
            viewport_height: 20,
            endpoint: endpoint.into(),
            toast: None,
            status: String::new(),
        }
    }

    pub fn select_prev(&mut self, by: usize) {
        self.selected = self.selected.saturating_sub(by);
        self.update_scroll();
    }

    pub fn select_next(&mut self, by: usize) {
        if !self.selection.is_empty() {
            self.selected = (self.selected + by).min(self.selection.len() - 1);
        }
        self.update_scroll();
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
        self.scroll_offset = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.selection.len().saturating_sub(1);
        self.update_scroll();
    }

    pub fn update_scroll(&mut self) {
        let visible_height = self.viewport_height;
        if visible_height == 0 {
            return;
        }
        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        } else if self.selected >= self.scroll_offset + visible_height {
            self.scroll_offset = self.selected - visible_height + 1;
        }
    }

    /// Drop the toast once it has been shown long enough.
    pub fn expire_toast(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    /// Replace the gallery, keeping the cursor where it was if still valid.
    pub fn set_gallery(&mut self, selection: Selection, nonce: String) {
        self.selection = selection;
        self.nonce = Some(nonce);
        self.loading = false;
        self.loaded = true;
        self.selected = self.selected.min(self.selection.len().saturating_sub(1));
        self.update_scroll();
    }
}
