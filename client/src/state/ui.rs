//! Page chrome state: order modal target, mobile menu, gallery lightbox.
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the content and form state
//! so sections can open the shared order modal without knowing about each
//! other. `UiState` is provided as an `RwSignal` context by the landing page.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Scroll offset past which the header switches to its glass style.
pub const HEADER_SCROLL_THRESHOLD: f64 = 100.0;

/// Whether the header should render in its scrolled style.
#[must_use]
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > HEADER_SCROLL_THRESHOLD
}

/// What the order modal was opened for.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrderTarget {
    /// Product label from a catalog card; `None` for the general order button.
    pub product_label: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub order: Option<OrderTarget>,
    pub menu_open: bool,
}

impl UiState {
    pub fn open_order(&mut self, product_label: Option<String>) {
        self.order = Some(OrderTarget { product_label });
        self.menu_open = false;
    }

    pub fn close_order(&mut self) {
        self.order = None;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }
}

/// Gallery lightbox position over `len` images.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lightbox {
    len: usize,
    index: Option<usize>,
}

impl Lightbox {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { len, index: None }
    }

    #[must_use]
    pub fn current(&self) -> Option<usize> {
        self.index
    }

    /// Open at `index`; out-of-range indices are ignored.
    pub fn open(&mut self, index: usize) {
        if index < self.len {
            self.index = Some(index);
        }
    }

    pub fn close(&mut self) {
        self.index = None;
    }

    /// Step forward, wrapping to the first image.
    pub fn next(&mut self) {
        if let Some(i) = self.index {
            self.index = Some((i + 1) % self.len);
        }
    }

    /// Step back, wrapping to the last image.
    pub fn prev(&mut self) {
        if let Some(i) = self.index {
            self.index = Some((i + self.len - 1) % self.len);
        }
    }
}
