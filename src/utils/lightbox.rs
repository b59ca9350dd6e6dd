//! Lightbox gallery state machine
//!
//! `Closed` is `index == None`, `Open(i)` is `index == Some(i)` with
//! `i < len`. Navigation wraps in both directions.

/// Index after `i` in a gallery of `n` images, `n` must be positive
pub fn next_index(i: usize, n: usize) -> usize {
    debug_assert!(n > 0, "empty gallery has no next image");
    (i + 1) % n
}

/// Index before `i` in a gallery of `n` images, `n` must be positive
pub fn prev_index(i: usize, n: usize) -> usize {
    debug_assert!(n > 0, "empty gallery has no previous image");
    (i + n - 1) % n
}

/// Keys the lightbox reacts to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightboxKey {
    Previous,
    Next,
    Close,
}

impl LightboxKey {
    /// Map a `KeyboardEvent.key` value
    pub fn from_key_name(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::Previous),
            "ArrowRight" => Some(Self::Next),
            "Escape" => Some(Self::Close),
            _ => None,
        }
    }
}

/// Where a click inside the open lightbox landed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightboxClick {
    Backdrop,
    Image,
    CloseButton,
    PreviousButton,
    NextButton,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lightbox {
    index: Option<usize>,
    len: usize,
}

impl Lightbox {
    pub fn new(len: usize) -> Self {
        Self { index: None, len }
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_open(&self) -> bool {
        self.index.is_some()
    }

    /// Open on thumbnail `i`; out of range indices are ignored
    pub fn open(&mut self, i: usize) {
        if i < self.len {
            self.index = Some(i);
        } else {
            log::warn!("Lightbox: ignoring open({}) for a gallery of {}", i, self.len);
        }
    }

    pub fn close(&mut self) {
        self.index = None;
    }

    pub fn next(&mut self) {
        if let Some(i) = self.index {
            self.index = Some(next_index(i, self.len));
        }
    }

    pub fn prev(&mut self) {
        if let Some(i) = self.index {
            self.index = Some(prev_index(i, self.len));
        }
    }

    /// Keys do nothing while closed
    pub fn handle_key(&mut self, key: LightboxKey) {
        if !self.is_open() {
            return;
        }
        match key {
            LightboxKey::Previous => self.prev(),
            LightboxKey::Next => self.next(),
            LightboxKey::Close => self.close(),
        }
    }

    /// Clicks on the image itself never reach the backdrop handler
    pub fn handle_click(&mut self, target: LightboxClick) {
        match target {
            LightboxClick::Backdrop | LightboxClick::CloseButton => self.close(),
            LightboxClick::PreviousButton => self.prev(),
            LightboxClick::NextButton => self.next(),
            LightboxClick::Image => {}
        }
    }

    /// The global keydown listener should exist exactly while this is true
    pub fn wants_keyboard(&self) -> bool {
        self.is_open()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_around_for_all_indices() {
        for n in 1..=30 {
            for i in 0..n {
                assert_eq!(next_index(i, n), (i + 1) % n);
                assert_eq!(prev_index(i, n), (i + n - 1) % n);
                assert!(next_index(i, n) < n);
                assert!(prev_index(i, n) < n);
            }
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "empty gallery")]
    fn test_next_index_rejects_empty_gallery() {
        next_index(0, 0);
    }

    #[test]
    fn test_empty_lightbox_never_opens() {
        let mut lightbox = Lightbox::new(0);
        assert_eq!(lightbox.len(), 0);
        lightbox.open(0);
        lightbox.next();
        lightbox.handle_key(LightboxKey::Previous);
        assert!(!lightbox.is_open());
    }

    #[test]
    fn test_file_eraser_gallery_edges() {
        let n = crate::content::file_eraser::GALLERY_IMAGES.len();
        assert_eq!(n, 27);
        assert_eq!(prev_index(0, n), 26);
        assert_eq!(next_index(26, n), 0);
    }

    #[test]
    fn test_open_navigate_close() {
        let mut lightbox = Lightbox::new(3);
        assert!(!lightbox.is_open());

        lightbox.open(2);
        assert_eq!(lightbox.index(), Some(2));

        lightbox.handle_key(LightboxKey::Next);
        assert_eq!(lightbox.index(), Some(0));

        lightbox.handle_key(LightboxKey::Previous);
        assert_eq!(lightbox.index(), Some(2));

        lightbox.handle_key(LightboxKey::Close);
        assert_eq!(lightbox.index(), None);
    }

    #[test]
    fn test_open_out_of_range_is_ignored() {
        let mut lightbox = Lightbox::new(3);
        lightbox.open(3);
        assert_eq!(lightbox.index(), None);

        lightbox.open(1);
        lightbox.open(7);
        assert_eq!(lightbox.index(), Some(1));
    }

    #[test]
    fn test_escape_while_closed_is_noop() {
        let mut lightbox = Lightbox::new(27);
        lightbox.handle_key(LightboxKey::Close);
        assert_eq!(lightbox, Lightbox::new(27));

        lightbox.handle_key(LightboxKey::Next);
        lightbox.next();
        lightbox.prev();
        assert_eq!(lightbox.index(), None);
    }

    #[test]
    fn test_image_click_does_not_close() {
        let mut lightbox = Lightbox::new(5);
        lightbox.open(4);

        lightbox.handle_click(LightboxClick::Image);
        assert_eq!(lightbox.index(), Some(4));

        lightbox.handle_click(LightboxClick::NextButton);
        assert_eq!(lightbox.index(), Some(0));

        lightbox.handle_click(LightboxClick::Backdrop);
        assert!(!lightbox.is_open());
    }

    #[test]
    fn test_key_names() {
        assert_eq!(LightboxKey::from_key_name("ArrowLeft"), Some(LightboxKey::Previous));
        assert_eq!(LightboxKey::from_key_name("ArrowRight"), Some(LightboxKey::Next));
        assert_eq!(LightboxKey::from_key_name("Escape"), Some(LightboxKey::Close));
        assert_eq!(LightboxKey::from_key_name("Enter"), None);
    }

    #[test]
    fn test_keyboard_wanted_only_while_open() {
        let mut lightbox = Lightbox::new(2);
        assert!(!lightbox.wants_keyboard());
        lightbox.open(0);
        assert!(lightbox.wants_keyboard());
        lightbox.close();
        assert!(!lightbox.wants_keyboard());
    }
}
