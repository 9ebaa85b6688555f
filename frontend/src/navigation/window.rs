/// The slides kept mounted around the current one. Anything outside the
/// window is dropped together with its timers.
#[allow(clippy::len_without_is_empty)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MountWindow {
    first: u8,
    last: u8,
}

impl MountWindow {
    pub fn around(current: u8, total_pages: u8) -> Self {
        let total_pages = total_pages.max(1);
        let current = current.clamp(1, total_pages);
        Self {
            first: current.saturating_sub(1).max(1),
            last: current.saturating_add(1).min(total_pages),
        }
    }

    pub fn contains(&self, page: u8) -> bool {
        (self.first..=self.last).contains(&page)
    }

    pub fn pages(&self) -> impl Iterator<Item = u8> {
        self.first..=self.last
    }

    pub fn len(&self) -> usize {
        usize::from(self.last - self.first) + 1
    }
}

/// Document-level `overscroll-behavior-y`. Pull-to-refresh only exists on the
/// first slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverscrollPolicy {
    Auto,
    None,
}

impl OverscrollPolicy {
    pub fn for_page(page: u8) -> Self {
        if page == 1 {
            OverscrollPolicy::Auto
        } else {
            OverscrollPolicy::None
        }
    }

    pub fn css_value(&self) -> &'static str {
        match self {
            OverscrollPolicy::Auto => "auto",
            OverscrollPolicy::None => "none",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_is_clamped_at_both_ends() {
        assert_eq!(MountWindow::around(1, 7).pages().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(MountWindow::around(4, 7).pages().collect::<Vec<_>>(), vec![3, 4, 5]);
        assert_eq!(MountWindow::around(7, 7).pages().collect::<Vec<_>>(), vec![6, 7]);
    }

    #[test]
    fn window_always_holds_the_current_page() {
        for total in 1..=9u8 {
            for page in 1..=total {
                let window = MountWindow::around(page, total);
                assert!(window.contains(page));
                assert!(window.len() <= 3);
            }
        }
    }

    #[test]
    fn single_page_site_mounts_one_slide() {
        let window = MountWindow::around(1, 1);
        assert_eq!(window.len(), 1);
        assert!(!window.contains(2));
    }

    #[test]
    fn overscroll_only_enabled_on_first_page() {
        assert_eq!(OverscrollPolicy::for_page(1), OverscrollPolicy::Auto);
        for page in 2..=7 {
            assert_eq!(OverscrollPolicy::for_page(page).css_value(), "none");
        }
    }
}
