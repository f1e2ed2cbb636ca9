use crate::data::Dataset;
use crate::models::{InteractionEvent, NavPanel, ViewState};
use crate::surface::{Mount, Surface};
use crate::ui::{render_promises, render_stats, render_tabs};
use serde::Serialize;
use tracing::debug;

/// Page session: what the visitor selected and whether the mobile menu is open.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Controller {
    pub view: ViewState,
    pub nav: NavPanel,
    /// Number of events applied so far; stamps each batch of updates.
    pub revision: u64,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial render of all three views.
    pub fn start<S: Surface + ?Sized>(&self, data: &Dataset, surface: &mut S) {
        render_stats(surface, &data.stats);
        render_tabs(surface, &self.view);
        render_promises(surface, &data.promises, &self.view);
    }

    pub fn handle<S: Surface + ?Sized>(&mut self, event: InteractionEvent, data: &Dataset, surface: &mut S) {
        self.revision += 1;
        debug!(?event, revision = self.revision, "applying interaction");
        match event {
            InteractionEvent::SelectTab { tab } => {
                self.view.active_tab = tab;
                render_tabs(surface, &self.view);
                render_promises(surface, &data.promises, &self.view);
            }
            InteractionEvent::Search { query } => {
                self.view.search_query = query;
                render_promises(surface, &data.promises, &self.view);
            }
            InteractionEvent::ToggleMenu => {
                self.nav = self.nav.toggled();
                self.show_nav(surface);
            }
        }
    }

    fn show_nav<S: Surface + ?Sized>(&self, surface: &mut S) {
        if !surface.has_container(Mount::MenuButton) || !surface.has_container(Mount::MobileMenu) {
            return;
        }
        let expanded = self.nav.is_expanded();
        surface.set_hidden(Mount::MobileMenu, !expanded);
        surface.set_hidden(Mount::MenuIcon, expanded);
        surface.set_hidden(Mount::CloseIcon, !expanded);
        surface.create_icons();
    }
}
