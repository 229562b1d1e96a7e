//! Scroll viewport and title measurement for the drawer.

/// Row budget for the title when no measurement is available yet.
pub const FALLBACK_TITLE_HEIGHT: u16 = 1;

/// Rows used by the drawer frame around title and body: top border,
/// divider under the title, footer and bottom border.
pub const DRAWER_CHROME_HEIGHT: u16 = 4;

/// Vertical scroll state of the drawer body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollViewport {
    offset: u16,
    content_height: u16,
    viewport_height: u16,
}

impl ScrollViewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> u16 {
        self.offset
    }

    pub fn content_height(&self) -> u16 {
        self.content_height
    }

    pub fn viewport_height(&self) -> u16 {
        self.viewport_height
    }

    /// Largest offset that still fills the viewport.
    pub fn max_offset(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    /// Record the latest layout and re-clamp the offset to it.
    pub fn set_layout(&mut self, content_height: u16, viewport_height: u16) {
        self.content_height = content_height;
        self.viewport_height = viewport_height;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Set the offset, clamped to the current layout.
    pub fn set_offset(&mut self, offset: u16) {
        self.offset = offset.min(self.max_offset());
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    /// Scroll toward the end of the body. Returns true if the offset moved.
    pub fn scroll_down(&mut self, lines: u16) -> bool {
        let old = self.offset;
        self.set_offset(self.offset.saturating_add(lines));
        old != self.offset
    }

    /// Scroll toward the start of the body. Returns true if the offset moved.
    pub fn scroll_up(&mut self, lines: u16) -> bool {
        let old = self.offset;
        self.offset = self.offset.saturating_sub(lines);
        old != self.offset
    }

    /// One viewport minus a line of overlap, never less than one line.
    pub fn page(&self) -> u16 {
        self.viewport_height.saturating_sub(1).max(1)
    }

    /// Scroll the minimum amount needed to show `line`.
    pub fn ensure_visible(&mut self, line: u16) {
        if line < self.offset {
            self.offset = line;
        } else if self.viewport_height > 0 && line >= self.offset + self.viewport_height {
            self.set_offset(line + 1 - self.viewport_height);
        }
    }
}

/// The title height as measured on a previous frame.
///
/// Titles wrap, so their height depends on the drawer width and is only
/// known once a frame has been laid out. Until then, and whenever a
/// measurement came back as zero, [`TitleMeasure::height_or`] falls back
/// to a fixed minimum so the body never collapses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TitleMeasure {
    measured: Option<u16>,
}

impl TitleMeasure {
    pub fn height_or(&self, fallback: u16) -> u16 {
        match self.measured {
            Some(height) if height > 0 => height,
            _ => fallback,
        }
    }

    pub fn measured(&self) -> Option<u16> {
        self.measured
    }

    /// Store a new measurement. Returns true if it differs from the last.
    pub fn record(&mut self, height: u16) -> bool {
        let changed = self.measured != Some(height);
        self.measured = Some(height);
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laid_out(content: u16, viewport: u16) -> ScrollViewport {
        let mut vp = ScrollViewport::new();
        vp.set_layout(content, viewport);
        vp
    }

    #[test]
    fn test_offset_clamps_to_layout() {
        let mut vp = laid_out(50, 10);
        vp.set_offset(100);
        assert_eq!(vp.offset(), 40);
        vp.set_layout(20, 10);
        assert_eq!(vp.offset(), 10);
    }

    #[test]
    fn test_offset_before_layout_is_zero() {
        let mut vp = ScrollViewport::new();
        vp.set_offset(30);
        assert_eq!(vp.offset(), 0);
    }

    #[test]
    fn test_scroll_reports_movement() {
        let mut vp = laid_out(30, 10);
        assert!(vp.scroll_down(5));
        assert_eq!(vp.offset(), 5);
        assert!(vp.scroll_up(10));
        assert_eq!(vp.offset(), 0);
        assert!(!vp.scroll_up(1));
    }

    #[test]
    fn test_page_size() {
        assert_eq!(laid_out(100, 10).page(), 9);
        assert_eq!(laid_out(100, 1).page(), 1);
        assert_eq!(laid_out(100, 0).page(), 1);
    }

    #[test]
    fn test_ensure_visible() {
        let mut vp = laid_out(100, 10);
        vp.ensure_visible(25);
        assert_eq!(vp.offset(), 16);
        vp.ensure_visible(3);
        assert_eq!(vp.offset(), 3);
        vp.ensure_visible(5);
        assert_eq!(vp.offset(), 3);
    }

    #[test]
    fn test_title_measure_falls_back_on_zero() {
        let mut title = TitleMeasure::default();
        assert_eq!(title.height_or(3), 3);
        assert!(title.record(0));
        assert_eq!(title.height_or(3), 3);
        assert!(title.record(2));
        assert!(!title.record(2));
        assert_eq!(title.height_or(3), 2);
    }
}
