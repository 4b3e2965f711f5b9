/// Narrow view of the browser history / URL hash.
///
/// Slugs are passed without the leading `#`.
pub trait HistoryAdapter {
    /// Slug currently in the address bar.
    fn slug(&self) -> String;

    /// Navigate to `slug`, adding a history entry.
    fn set_slug(&mut self, slug: &str);

    /// Rewrite the current entry to `slug` without adding one.
    fn replace_slug(&mut self, slug: &str);

    /// Slug reached through back/forward (or a manual hash edit) since the last call.
    fn take_slug_change(&mut self) -> Option<String>;
}

/// Something that can be scrolled back to the top when the view changes.
pub trait Viewport {
    /// Reset the scroll offset to zero.
    fn scroll_to_top(&mut self);
}

/// In-memory history with back/forward stacks.
#[derive(Clone, Debug)]
pub struct MemoryHistory {
    entries: Vec<String>,
    cursor: usize,
    pending_change: Option<String>,
}

impl MemoryHistory {
    /// Start with a single entry.
    pub fn new(initial: impl Into<String>) -> Self {
        let initial = initial.into();
        let initial = initial.strip_prefix('#').map(str::to_owned).unwrap_or(initial);
        Self {
            entries: vec![initial],
            cursor: 0,
            pending_change: None,
        }
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Index of the current entry.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Browser back button. Returns `false` at the oldest entry.
    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.pending_change = Some(self.entries[self.cursor].clone());
        true
    }

    /// Browser forward button. Returns `false` at the newest entry.
    pub fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.entries.len() {
            return false;
        }
        self.cursor += 1;
        self.pending_change = Some(self.entries[self.cursor].clone());
        true
    }

    /// User typed a new hash into the address bar.
    pub fn edit_hash(&mut self, hash: &str) {
        let slug = hash.strip_prefix('#').unwrap_or(hash).to_owned();
        self.push(slug.clone());
        self.pending_change = Some(slug);
    }

    fn push(&mut self, slug: String) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(slug);
        self.cursor = self.entries.len() - 1;
    }
}

impl HistoryAdapter for MemoryHistory {
    fn slug(&self) -> String {
        self.entries[self.cursor].clone()
    }

    fn set_slug(&mut self, slug: &str) {
        self.push(slug.to_owned());
    }

    fn replace_slug(&mut self, slug: &str) {
        self.entries[self.cursor] = slug.to_owned();
    }

    fn take_slug_change(&mut self) -> Option<String> {
        self.pending_change.take()
    }
}

/// Viewport that only counts scroll resets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CountingViewport {
    /// Number of `scroll_to_top` calls.
    pub resets: usize,
}

impl Viewport for CountingViewport {
    fn scroll_to_top(&mut self) {
        self.resets += 1;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/navigation/history.rs"]
mod tests;
