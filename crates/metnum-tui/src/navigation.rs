//! View navigation.

use metnum_core::Feature;

/// The views of the application, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Home,
    Interpolation,
    Integration,
    Differentiation,
}

impl View {
    pub const ALL: [View; 4] = [
        View::Home,
        View::Interpolation,
        View::Integration,
        View::Differentiation,
    ];

    /// The view a feature is shown in.
    #[must_use]
    pub fn of(feature: Feature) -> Self {
        match feature {
            Feature::Interpolation => Self::Interpolation,
            Feature::Integration => Self::Integration,
            Feature::Differentiation => Self::Differentiation,
        }
    }

    /// The feature this view hosts; `None` for the home view.
    #[must_use]
    pub fn feature(self) -> Option<Feature> {
        match self {
            Self::Home => None,
            Self::Interpolation => Some(Feature::Interpolation),
            Self::Integration => Some(Feature::Integration),
            Self::Differentiation => Some(Feature::Differentiation),
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        self.feature().map_or("Inicio", Feature::label)
    }

    /// Position in [`View::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Home => 0,
            Self::Interpolation => 1,
            Self::Integration => 2,
            Self::Differentiation => 3,
        }
    }
}

/// Tracks which single view is active.
#[derive(Debug, Clone)]
pub struct Navigator {
    active: [bool; 4],
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    /// Start on the home view.
    #[must_use]
    pub fn new() -> Self {
        let mut nav = Self { active: [false; 4] };
        nav.switch_to(View::Home);
        nav
    }

    /// Deactivate every view, then activate `view`.
    pub fn switch_to(&mut self, view: View) {
        self.active = [false; 4];
        self.active[view.index()] = true;
        tracing::debug!(view = view.title(), "switched view");
    }

    #[must_use]
    pub fn is_active(&self, view: View) -> bool {
        self.active[view.index()]
    }

    /// The active view.
    #[must_use]
    pub fn active(&self) -> View {
        View::ALL
            .into_iter()
            .find(|&v| self.is_active(v))
            .unwrap_or(View::Home)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_count(nav: &Navigator) -> usize {
        View::ALL.iter().filter(|&&v| nav.is_active(v)).count()
    }

    #[test]
    fn starts_on_home() {
        let nav = Navigator::new();
        assert_eq!(nav.active(), View::Home);
        assert_eq!(active_count(&nav), 1);
    }

    #[test]
    fn exactly_one_active_after_any_switch() {
        let mut nav = Navigator::new();
        for view in [
            View::Integration,
            View::Integration,
            View::Differentiation,
            View::Home,
            View::Interpolation,
        ] {
            nav.switch_to(view);
            assert_eq!(nav.active(), view);
            assert_eq!(active_count(&nav), 1);
        }
    }

    #[test]
    fn views_map_to_features() {
        for feature in Feature::ALL {
            assert_eq!(View::of(feature).feature(), Some(feature));
        }
        assert_eq!(View::Home.feature(), None);
        assert_eq!(View::Home.title(), "Inicio");
        assert_eq!(View::Integration.title(), "Integración");
    }

    #[test]
    fn index_matches_tab_order() {
        for (i, view) in View::ALL.iter().enumerate() {
            assert_eq!(view.index(), i);
        }
    }
}
