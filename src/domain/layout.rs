// Two-column grid layout for dashboard widgets

pub const WIDGET_WIDTH: u32 = 12;
pub const WIDGET_HEIGHT: u32 = 6;

/// Position of the next widget. Alternates between the left (`x = 0`) and
/// right (`x = width`) slot, moving down one row after the right slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutCursor {
    x: u32,
    y: u32,
    width: u32,
    height: u32,
}

impl LayoutCursor {
    pub fn new() -> Self {
        Self {
            x: 0,
            y: 0,
            width: WIDGET_WIDTH,
            height: WIDGET_HEIGHT,
        }
    }

    pub fn position(&self) -> (u32, u32) {
        (self.x, self.y)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Call exactly once after each appended widget.
    pub fn advance(&mut self) {
        if self.x == self.width {
            self.x = 0;
            self.y += self.height;
        } else {
            self.x = self.width;
        }
    }
}

impl Default for LayoutCursor {
    fn default() -> Self {
        Self::new()
    }
}
