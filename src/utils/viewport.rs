/// Viewport abstraction over `window`
///
/// Scroll tracking and smooth scrolling only talk to the page through this
/// trait, so the logic can be exercised without a browser.
pub trait Viewport {
    /// Current vertical scroll offset (`window.scrollY`)
    fn scroll_y(&self) -> f64;

    /// Viewport width (`window.innerWidth`)
    fn inner_width(&self) -> f64;

    /// `offsetTop` of the element with this id, `None` if it isn't mounted
    fn offset_top(&self, id: &str) -> Option<f64>;

    /// Absolute page offset of the element with this id
    fn absolute_top(&self, id: &str) -> Option<f64> {
        self.offset_top(id)
    }

    /// Start a smooth scroll to the given page offset
    fn smooth_scroll_to(&self, top: f64);
}

/// `Viewport` backed by the real browser window
#[cfg(target_arch = "wasm32")]
pub struct BrowserViewport {
    window: web_sys::Window,
}

#[cfg(target_arch = "wasm32")]
impl BrowserViewport {
    pub fn new() -> crate::error::SiteResult<Self> {
        web_sys::window()
            .map(|window| Self { window })
            .ok_or(crate::error::SiteError::WindowUnavailable)
    }

    fn element(&self, id: &str) -> Option<web_sys::HtmlElement> {
        use wasm_bindgen::JsCast;

        self.window
            .document()?
            .get_element_by_id(id)?
            .dyn_into::<web_sys::HtmlElement>()
            .ok()
    }
}

#[cfg(target_arch = "wasm32")]
impl Viewport for BrowserViewport {
    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn inner_width(&self) -> f64 {
        self.window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or(0.0)
    }

    fn offset_top(&self, id: &str) -> Option<f64> {
        self.element(id).map(|el| el.offset_top() as f64)
    }

    fn absolute_top(&self, id: &str) -> Option<f64> {
        let el = self.element(id)?;
        Some(el.get_bounding_client_rect().top() + self.scroll_y())
    }

    fn smooth_scroll_to(&self, top: f64) {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use super::Viewport;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;
    use std::rc::Rc;

    /// In-memory viewport for tests
    #[derive(Default)]
    pub struct FakeViewport {
        pub scroll_y: Cell<f64>,
        pub width: Cell<f64>,
        pub offsets: HashMap<String, f64>,
        pub scrolled_to: RefCell<Vec<f64>>,
    }

    impl FakeViewport {
        pub fn with_sections(sections: &[(&str, f64)]) -> Self {
            Self {
                width: Cell::new(1280.0),
                offsets: sections
                    .iter()
                    .map(|(id, top)| (id.to_string(), *top))
                    .collect(),
                ..Default::default()
            }
        }

        pub fn scroll(&self, y: f64) {
            self.scroll_y.set(y);
        }

        pub fn resize(&self, width: f64) {
            self.width.set(width);
        }
    }

    impl Viewport for FakeViewport {
        fn scroll_y(&self) -> f64 {
            self.scroll_y.get()
        }

        fn inner_width(&self) -> f64 {
            self.width.get()
        }

        fn offset_top(&self, id: &str) -> Option<f64> {
            self.offsets.get(id).copied()
        }

        fn smooth_scroll_to(&self, top: f64) {
            self.scrolled_to.borrow_mut().push(top);
        }
    }

    /// Shared handle so a test can keep scrolling a viewport a handler owns
    impl Viewport for Rc<FakeViewport> {
        fn scroll_y(&self) -> f64 {
            (**self).scroll_y()
        }

        fn inner_width(&self) -> f64 {
            (**self).inner_width()
        }

        fn offset_top(&self, id: &str) -> Option<f64> {
            (**self).offset_top(id)
        }

        fn smooth_scroll_to(&self, top: f64) {
            (**self).smooth_scroll_to(top)
        }
    }
}
