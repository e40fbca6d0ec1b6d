//! Sidebar navigation

use crate::router::{Navigator, Route};

/// A sidebar link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub route: Route,
    pub icon: &'static str,
}

impl NavItem {
    /// Active when the current path lies under this item's path
    pub fn is_active(&self, current_path: &str) -> bool {
        let path = self.route.path();
        current_path == path
            || current_path
                .strip_prefix(path.as_str())
                .map_or(false, |rest| rest.starts_with('/'))
    }
}

/// Sidebar links, in display order
pub fn nav_items() -> [NavItem; 2] {
    [
        NavItem {
            label: "Journals",
            route: Route::Journals,
            icon: "📓",
        },
        NavItem {
            label: "Resources",
            route: Route::Resources,
            icon: "🆘",
        },
    ]
}

/// Open/closed state on narrow viewports
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SidebarState {
    open: bool,
}

impl SidebarState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Backdrop click
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Follow a link and close
    pub fn navigate(&mut self, item: &NavItem, navigator: &dyn Navigator) {
        navigator.push(item.route.clone());
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::History;

    #[test]
    fn test_active_by_prefix() {
        let [journals, resources] = nav_items();
        assert!(journals.is_active("/journals"));
        assert!(journals.is_active("/journals/abc123"));
        assert!(journals.is_active("/journals/new"));
        assert!(!journals.is_active("/resources"));
        assert!(resources.is_active("/resources"));
        assert!(!resources.is_active("/"));
    }

    #[test]
    fn test_active_stops_at_segment_boundary() {
        let [journals, resources] = nav_items();
        assert!(!journals.is_active("/journalsx"));
        assert!(!journals.is_active("/journals-archive"));
        assert!(!resources.is_active("/resourcesfoo"));
        assert!(journals.is_active("/journals/abc"));
    }

    #[test]
    fn test_navigation_closes_sidebar() {
        let history = History::new(Route::Journals);
        let mut sidebar = SidebarState::default();
        sidebar.toggle();
        assert!(sidebar.is_open());

        let [_, resources] = nav_items();
        sidebar.navigate(&resources, &history);

        assert!(!sidebar.is_open());
        assert_eq!(history.current(), Route::Resources);
    }

    #[test]
    fn test_toggle_and_backdrop() {
        let mut sidebar = SidebarState::default();
        sidebar.toggle();
        sidebar.toggle();
        assert!(!sidebar.is_open());

        sidebar.toggle();
        sidebar.close();
        assert!(!sidebar.is_open());
    }
}
