// Scroll state shared by the list panels
//
// Each panel owns one `ScrollState`. The logs panel follows new entries at
// the bottom; the history panel is anchored at the top because its newest
// record comes first.

/// Position, content size, and viewport size of one scrollable list
#[derive(Debug, Clone)]
pub struct ScrollState {
    offset: usize,
    total: usize,
    viewport: usize,

    /// Keep the newest (bottom) item in view as content grows
    pub auto_follow: bool,
}

impl ScrollState {
    /// Bottom-following state, for lists that grow at the end
    pub fn following() -> Self {
        Self {
            offset: 0,
            total: 0,
            viewport: 0,
            auto_follow: true,
        }
    }

    /// Top-anchored state, for lists that grow at the front
    pub fn anchored() -> Self {
        Self {
            auto_follow: false,
            ..Self::following()
        }
    }

    /// Call each frame with the current sizes
    pub fn update_dimensions(&mut self, total: usize, viewport: usize) {
        self.total = total;
        self.viewport = viewport;

        if self.auto_follow {
            self.offset = self.max_offset();
        } else {
            self.offset = self.offset.min(self.max_offset());
        }
    }

    pub fn scroll_up(&mut self) {
        if self.offset > 0 {
            self.offset -= 1;
            self.auto_follow = false;
        }
    }

    pub fn scroll_down(&mut self) {
        if self.offset < self.max_offset() {
            self.offset += 1;
        }
    }

    pub fn page_up(&mut self) {
        self.offset = self.offset.saturating_sub(self.viewport.max(1));
        self.auto_follow = false;
    }

    pub fn page_down(&mut self) {
        self.offset = (self.offset + self.viewport.max(1)).min(self.max_offset());
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
        self.auto_follow = false;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Visible item range as (start, end)
    pub fn visible_range(&self) -> (usize, usize) {
        let end = (self.offset + self.viewport).min(self.total);
        (self.offset.min(end), end)
    }

    pub fn needs_scrollbar(&self) -> bool {
        self.total > self.viewport
    }

    pub fn total(&self) -> usize {
        self.total
    }

    fn max_offset(&self) -> usize {
        self.total.saturating_sub(self.viewport)
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::following()
    }
}
