use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn flipped(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

// class placed on the document root while the dark palette is selected
pub const DARK_MARKER: &str = "dark";

// light/dark preference, held in memory only
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ThemePreference {
    theme: Theme,
}

impl ThemePreference {
    pub fn new(theme: Theme) -> Self {
        ThemePreference { theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.flipped();
        debug!({ theme = ?self.theme }, "theme toggled");
        self.theme
    }

    // root-element class the presentation layer should carry, if any
    pub fn marker(&self) -> Option<&'static str> {
        self.theme.is_dark().then_some(DARK_MARKER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_dark() {
        let pref = ThemePreference::default();
        assert_eq!(pref.theme(), Theme::Dark);
        assert_eq!(pref.marker(), Some(DARK_MARKER));
    }

    #[test]
    fn toggle_switches_marker() {
        let mut pref = ThemePreference::new(Theme::Dark);
        assert_eq!(pref.toggle(), Theme::Light);
        assert_eq!(pref.marker(), None);
    }

    #[test]
    fn double_toggle_restores_flag_and_marker() {
        for start in [Theme::Dark, Theme::Light] {
            let mut pref = ThemePreference::new(start);
            let marker = pref.marker();

            pref.toggle();
            pref.toggle();

            assert_eq!(pref.theme(), start);
            assert_eq!(pref.marker(), marker);
        }
    }
}
