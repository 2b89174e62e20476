//! Expansion windows over the working text buffer.
//!
//! A window is a half-open byte range of the *current* buffer that later
//! passes may still rewrite. Code passes carve their output out of the set
//! so nothing after them can touch a code payload.

use smallvec::SmallVec;

/// Half-open byte range `[start, end)` into the working buffer.
///
/// # Example
/// ```
/// use slackdown::Window;
///
/// let window = Window::new(3, 8);
/// assert_eq!(window.len(), 5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Window {
    pub start: usize,
    pub end: usize,
}

impl Window {
    /// Create a new window.
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length of the window in bytes (zero for degenerate windows).
    #[inline]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Degenerate windows (`start >= end`) are never scanned.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Move both bounds by `delta` bytes.
    #[inline]
    fn shift(&mut self, delta: isize) {
        self.start = self.start.saturating_add_signed(delta);
        self.end = self.end.saturating_add_signed(delta);
    }
}

impl From<std::ops::Range<usize>> for Window {
    #[inline]
    fn from(r: std::ops::Range<usize>) -> Self {
        Self::new(r.start, r.end)
    }
}

impl From<Window> for std::ops::Range<usize> {
    #[inline]
    fn from(w: Window) -> Self {
        w.start..w.end
    }
}

/// Ordered, non-overlapping windows, addressed by stable index.
///
/// Most messages never hold more than a handful of code spans, so the
/// windows live inline until the ninth one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WindowSet {
    windows: SmallVec<[Window; 8]>,
}

impl WindowSet {
    /// A set holding one window over a whole buffer of `len` bytes.
    pub fn covering(len: usize) -> Self {
        let mut windows = SmallVec::new();
        windows.push(Window::new(0, len));
        Self { windows }
    }

    /// Window at `index`, if any.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Window> {
        self.windows.get(index).copied()
    }

    /// All windows in order, including degenerate ones.
    #[inline]
    pub fn as_slice(&self) -> &[Window] {
        &self.windows
    }

    /// Move the end of the window at `index` by `delta`.
    ///
    /// Called after a replacement inside that window changed the buffer length.
    pub fn stretch_end(&mut self, index: usize, delta: isize) {
        if let Some(window) = self.windows.get_mut(index) {
            window.end = window.end.saturating_add_signed(delta);
        }
    }

    /// Shift every window strictly after `from_index` by `delta`.
    pub fn advance_offsets(&mut self, from_index: usize, delta: isize) {
        if delta == 0 {
            return;
        }
        for window in self.windows.iter_mut().skip(from_index + 1) {
            window.shift(delta);
        }
    }

    /// Shrink the window at `index` to end at `split_point` and insert
    /// `new_window` right after it.
    ///
    /// The bytes between `split_point` and `new_window.start` drop out of
    /// the set for good.
    pub fn partition(&mut self, index: usize, split_point: usize, new_window: Window) {
        let Some(window) = self.windows.get_mut(index) else {
            return;
        };
        debug_assert!(split_point >= window.start);
        debug_assert!(new_window.start >= split_point);
        window.end = split_point;
        self.windows.insert(index + 1, new_window);
        debug_assert!(self.is_ordered());
    }

    /// Sorted by start and mutually non-overlapping.
    fn is_ordered(&self) -> bool {
        self.windows
            .iter()
            .filter(|w| !w.is_empty())
            .collect::<SmallVec<[&Window; 8]>>()
            .windows(2)
            .all(|pair| pair[0].end <= pair[1].start)
    }
}
