//! Application state definitions

use super::forms::{information_form, order_form, FormId, FormState};
use crate::config::TuiConfig;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Order,
    Information,
    /// Path matched no route; nothing is rendered
    NotFound,
}

impl View {
    /// Resolve a route path. Unknown paths map to `NotFound`.
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim().trim_end_matches('/');
        match trimmed {
            "" => Self::Home,
            "/order" | "order" => Self::Order,
            "/information" | "information" => Self::Information,
            _ => Self::NotFound,
        }
    }

    pub fn path(&self) -> Option<&'static str> {
        match self {
            Self::Home => Some("/"),
            Self::Order => Some("/order"),
            Self::Information => Some("/information"),
            Self::NotFound => None,
        }
    }

    /// Form shown by this view, if any
    pub fn form_id(&self) -> Option<FormId> {
        match self {
            Self::Order => Some(FormId::Order),
            Self::Information => Some(FormId::Information),
            Self::Home | Self::NotFound => None,
        }
    }
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub current_view: View,
    pub order: FormState,
    pub information: FormState,
}

impl AppState {
    pub fn new(config: &TuiConfig) -> Self {
        Self {
            current_view: View::from_path(config.start_path()),
            order: FormState::new(order_form(config.order_endpoint())),
            information: FormState::new(information_form(config.information_endpoint())),
        }
    }

    pub fn form(&self, id: FormId) -> &FormState {
        match id {
            FormId::Order => &self.order,
            FormId::Information => &self.information,
        }
    }

    pub fn form_mut(&mut self, id: FormId) -> &mut FormState {
        match id {
            FormId::Order => &mut self.order,
            FormId::Information => &mut self.information,
        }
    }

    /// Form belonging to the current view
    pub fn active_form(&self) -> Option<&FormState> {
        self.current_view.form_id().map(|id| self.form(id))
    }

    pub fn active_form_mut(&mut self) -> Option<&mut FormState> {
        let id = self.current_view.form_id()?;
        Some(self.form_mut(id))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&TuiConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(View::from_path("/"), View::Home);
        assert_eq!(View::from_path(""), View::Home);
        assert_eq!(View::from_path("/order"), View::Order);
        assert_eq!(View::from_path("/information/"), View::Information);
        assert_eq!(View::from_path("/undefined-path"), View::NotFound);
    }

    #[test]
    fn test_path_roundtrip_for_routed_views() {
        for view in [View::Home, View::Order, View::Information] {
            assert_eq!(View::from_path(view.path().unwrap()), view);
        }
        assert!(View::NotFound.path().is_none());
    }

    #[test]
    fn test_form_views() {
        assert_eq!(View::Order.form_id(), Some(FormId::Order));
        assert_eq!(View::Information.form_id(), Some(FormId::Information));
        assert!(View::Home.form_id().is_none());
        assert!(View::NotFound.form_id().is_none());
    }

    #[test]
    fn test_default_state_starts_home() {
        let state = AppState::default();
        assert_eq!(state.current_view, View::Home);
        assert!(state.active_form().is_none());
    }

    #[test]
    fn test_active_form_follows_view() {
        let mut state = AppState::default();
        state.current_view = View::Information;
        let form = state.active_form().unwrap();
        assert_eq!(form.definition.id, FormId::Information);
    }
}
