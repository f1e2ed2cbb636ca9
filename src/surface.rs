use crate::models::{ContentUpdate, EventResponse, VisibilityUpdate};
use std::collections::BTreeSet;

/// Element ids the page shell provides for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Mount {
    Stats,
    Tabs,
    Promises,
    SearchInput,
    MenuButton,
    MenuIcon,
    CloseIcon,
    MobileMenu,
}

impl Mount {
    pub const ALL: [Mount; 8] = [
        Mount::Stats,
        Mount::Tabs,
        Mount::Promises,
        Mount::SearchInput,
        Mount::MenuButton,
        Mount::MenuIcon,
        Mount::CloseIcon,
        Mount::MobileMenu,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Mount::Stats => "stats-container",
            Mount::Tabs => "tabs-container",
            Mount::Promises => "promises-list",
            Mount::SearchInput => "search-input",
            Mount::MenuButton => "mobile-menu-button",
            Mount::MenuIcon => "menu-icon",
            Mount::CloseIcon => "close-icon",
            Mount::MobileMenu => "mobile-menu",
        }
    }
}

/// Where rendered markup ends up.
pub trait Surface {
    fn has_container(&self, mount: Mount) -> bool;
    fn replace_content(&mut self, mount: Mount, html: String);
    fn set_hidden(&mut self, mount: Mount, hidden: bool);
    /// Materializes `data-lucide` placeholders in freshly injected markup.
    fn create_icons(&mut self);
}

/// In-memory surface that records every change so it can be replayed in a browser.
#[derive(Debug, Default)]
pub struct Fragments {
    mounts: BTreeSet<Mount>,
    updates: Vec<(Mount, String)>,
    visibility: Vec<(Mount, bool)>,
    icons_requested: bool,
}

impl Fragments {
    /// A surface exposing every mount point of the page shell.
    pub fn page() -> Self {
        Self::with_mounts(Mount::ALL)
    }

    pub fn with_mounts(mounts: impl IntoIterator<Item = Mount>) -> Self {
        Self {
            mounts: mounts.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Latest markup written to `mount`, if any.
    pub fn content(&self, mount: Mount) -> Option<&str> {
        self.updates
            .iter()
            .rev()
            .find(|(target, _)| *target == mount)
            .map(|(_, html)| html.as_str())
    }

    pub fn hidden(&self, mount: Mount) -> Option<bool> {
        self.visibility
            .iter()
            .rev()
            .find(|(target, _)| *target == mount)
            .map(|(_, hidden)| *hidden)
    }

    pub fn touched(&self) -> Vec<Mount> {
        self.updates.iter().map(|(mount, _)| *mount).collect()
    }

    pub fn icons_requested(&self) -> bool {
        self.icons_requested
    }

    pub fn into_response(self, revision: u64) -> EventResponse {
        EventResponse {
            revision,
            updates: self
                .updates
                .into_iter()
                .map(|(mount, html)| ContentUpdate {
                    target: mount.id().to_string(),
                    html,
                })
                .collect(),
            visibility: self
                .visibility
                .into_iter()
                .map(|(mount, hidden)| VisibilityUpdate {
                    target: mount.id().to_string(),
                    hidden,
                })
                .collect(),
            refresh_icons: self.icons_requested,
        }
    }
}

impl Surface for Fragments {
    fn has_container(&self, mount: Mount) -> bool {
        self.mounts.contains(&mount)
    }

    fn replace_content(&mut self, mount: Mount, html: String) {
        self.updates.push((mount, html));
    }

    fn set_hidden(&mut self, mount: Mount, hidden: bool) {
        if self.mounts.contains(&mount) {
            self.visibility.push((mount, hidden));
        }
    }

    fn create_icons(&mut self) {
        self.icons_requested = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_write_wins() {
        let mut surface = Fragments::page();
        surface.replace_content(Mount::Tabs, "one".into());
        surface.replace_content(Mount::Tabs, "two".into());
        assert_eq!(surface.content(Mount::Tabs), Some("two"));
        assert_eq!(surface.content(Mount::Stats), None);
    }

    #[test]
    fn visibility_is_ignored_for_missing_mounts() {
        let mut surface = Fragments::with_mounts([Mount::Promises]);
        surface.set_hidden(Mount::MobileMenu, false);
        assert_eq!(surface.hidden(Mount::MobileMenu), None);
    }

    #[test]
    fn response_uses_element_ids() {
        let mut surface = Fragments::page();
        surface.replace_content(Mount::Promises, "<p></p>".into());
        surface.set_hidden(Mount::CloseIcon, true);
        surface.create_icons();
        let response = surface.into_response(7);
        assert_eq!(response.revision, 7);
        assert_eq!(response.updates[0].target, "promises-list");
        assert_eq!(response.visibility[0].target, "close-icon");
        assert!(response.visibility[0].hidden);
        assert!(response.refresh_icons);
    }
}
