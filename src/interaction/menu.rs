/// Class put on `<html>` and `<body>` while the mobile menu is open.
pub const NAV_OPEN_CLASS: &str = "nav-open";

/// Body style properties touched by the scroll lock.
pub const LOCK_PROPERTIES: [&str; 7] = [
    "position", "top", "left", "right", "width", "height", "overflow",
];

/// Body styles that pin the page at `offset` while an overlay is open.
pub fn lock_styles(offset: f64) -> [(&'static str, String); 7] {
    [
        ("position", "fixed".to_string()),
        ("top", format!("-{}px", offset.max(0.0))),
        ("left", "0".to_string()),
        ("right", "0".to_string()),
        ("width", "100%".to_string()),
        ("height", "100%".to_string()),
        ("overflow", "hidden".to_string()),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollLock {
    /// Pin the body at this offset.
    Lock(f64),
    /// Unpin and scroll back to this offset.
    Restore(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MobileMenu {
    locked_at: Option<f64>,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.locked_at.is_some()
    }

    pub fn open(&mut self, scroll_y: f64) -> Option<ScrollLock> {
        if self.is_open() {
            return None;
        }
        let offset = if scroll_y.is_finite() { scroll_y.max(0.0) } else { 0.0 };
        self.locked_at = Some(offset);
        log::debug!("mobile menu opened at {offset}");
        Some(ScrollLock::Lock(offset))
    }

    pub fn close(&mut self) -> Option<ScrollLock> {
        self.locked_at.take().map(ScrollLock::Restore)
    }

    /// The menu is going away; whatever lock it holds must be undone.
    pub fn release(mut self) -> Option<ScrollLock> {
        self.close()
    }

    pub fn toggle(&mut self, scroll_y: f64) -> Option<ScrollLock> {
        if self.is_open() {
            self.close()
        } else {
            self.open(scroll_y)
        }
    }
}

/// Desktop dropdowns; at most one open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dropdowns {
    open: Option<usize>,
}

impl Dropdowns {
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn toggle(&mut self, index: usize) {
        self.open = if self.is_open(index) { None } else { Some(index) };
    }

    /// A section was picked from the open dropdown.
    pub fn select(&mut self) {
        self.open = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_locks_and_restores_exact_offset() {
        let mut menu = MobileMenu::default();
        assert_eq!(menu.open(742.5), Some(ScrollLock::Lock(742.5)));
        assert!(menu.is_open());
        // opening again does not recapture
        assert_eq!(menu.open(0.0), None);
        assert_eq!(menu.close(), Some(ScrollLock::Restore(742.5)));
        assert!(!menu.is_open());
        assert_eq!(menu.close(), None);
    }

    #[test]
    fn test_release_restores_open_menu() {
        let mut menu = MobileMenu::default();
        assert_eq!(menu.release(), None);
        menu.open(1280.0);
        assert_eq!(menu.release(), Some(ScrollLock::Restore(1280.0)));
    }

    #[test]
    fn test_toggle() {
        let mut menu = MobileMenu::default();
        assert_eq!(menu.toggle(10.0), Some(ScrollLock::Lock(10.0)));
        assert_eq!(menu.toggle(99.0), Some(ScrollLock::Restore(10.0)));
    }

    #[test]
    fn test_lock_styles() {
        let styles = lock_styles(320.0);
        assert_eq!(styles[1], ("top", "-320px".to_string()));
        assert_eq!(lock_styles(-5.0)[1].1, "-0px");
        for (i, (prop, _)) in styles.iter().enumerate() {
            assert_eq!(*prop, LOCK_PROPERTIES[i]);
        }
    }

    #[test]
    fn test_single_dropdown() {
        let mut dropdowns = Dropdowns::default();
        dropdowns.toggle(0);
        assert!(dropdowns.is_open(0));
        dropdowns.toggle(2);
        assert!(!dropdowns.is_open(0));
        assert!(dropdowns.is_open(2));
        dropdowns.toggle(2);
        assert!((0..3).all(|i| !dropdowns.is_open(i)));
        dropdowns.toggle(1);
        dropdowns.select();
        assert!(!dropdowns.is_open(1));
    }
}
