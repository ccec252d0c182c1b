use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Local storage key holding the explicit preference.
pub const THEME_STORAGE_KEY: &str = "theme";
/// Class put on the document root while a toggle is in flight.
pub const INSTANT_THEME_CLASS: &str = "instant-theme";
pub const INSTANT_THEME_MS: u64 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn from_system(prefers_dark: bool) -> Self {
        if prefers_dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    /// Class applied to the document root.
    pub fn class(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown theme: {0}")]
pub struct ThemeParseError(pub String);

impl FromStr for ThemeMode {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(ThemeParseError(other.to_string())),
        }
    }
}

fn parse_stored(stored: Option<&str>) -> Option<ThemeMode> {
    let stored = stored?;
    match stored.parse() {
        Ok(mode) => Some(mode),
        Err(e) => {
            if !stored.is_empty() {
                log::debug!("ignoring stored theme: {e}");
            }
            None
        }
    }
}

/// In-memory theme with knowledge of whether the user picked it.
///
/// An explicit (stored) preference wins over the system color scheme and pins
/// the theme until the user toggles again. Without one, the theme follows the
/// system preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeState {
    mode: ThemeMode,
    explicit: bool,
}

impl ThemeState {
    /// Resolve the startup theme from the persisted value (if any) and the
    /// system preference.
    pub fn resolve(stored: Option<&str>, prefers_dark: bool) -> Self {
        match parse_stored(stored) {
            Some(mode) => Self {
                mode,
                explicit: true,
            },
            None => Self {
                mode: ThemeMode::from_system(prefers_dark),
                explicit: false,
            },
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn is_explicit(&self) -> bool {
        self.explicit
    }

    /// Flip the theme. The returned mode must be persisted by the caller.
    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        self.explicit = true;
        log::debug!("theme toggled to {}", self.mode);
        self.mode
    }

    /// System color scheme changed. Returns the new mode when it applies.
    pub fn system_changed(&mut self, prefers_dark: bool) -> Option<ThemeMode> {
        if self.explicit {
            return None;
        }
        let next = ThemeMode::from_system(prefers_dark);
        if next == self.mode {
            return None;
        }
        self.mode = next;
        Some(next)
    }

    /// Stored preference changed underneath us (another tab wrote it).
    pub fn stored_changed(&mut self, stored: Option<&str>) -> Option<ThemeMode> {
        let mode = parse_stored(stored)?;
        self.explicit = true;
        if mode == self.mode {
            return None;
        }
        self.mode = mode;
        Some(mode)
    }
}

/// Script inlined in `<head>` so the right class is on the root before first
/// paint, ahead of hydration.
pub const THEME_BOOTSTRAP_SCRIPT: &str = r#"try {
  var t = localStorage.getItem('theme');
  if (t !== 'light' && t !== 'dark') {
    t = window.matchMedia('(prefers-color-scheme: dark)').matches ? 'dark' : 'light';
  }
  document.documentElement.classList.remove('light', 'dark');
  document.documentElement.classList.add(t);
} catch (_) {
  document.documentElement.classList.add('dark');
}"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_preference_wins() {
        let state = ThemeState::resolve(Some("light"), true);
        assert_eq!(state.mode(), ThemeMode::Light);
        assert!(state.is_explicit());
    }

    #[test]
    fn test_falls_back_to_system() {
        assert_eq!(ThemeState::resolve(None, true).mode(), ThemeMode::Dark);
        assert_eq!(ThemeState::resolve(None, false).mode(), ThemeMode::Light);
        // garbage in storage counts as no preference
        let state = ThemeState::resolve(Some("sepia"), false);
        assert_eq!(state.mode(), ThemeMode::Light);
        assert!(!state.is_explicit());
        assert!(!ThemeState::resolve(Some(""), true).is_explicit());
    }

    #[test]
    fn test_toggle_twice_round_trips_and_persists() {
        let mut state = ThemeState::resolve(None, true);
        let original = state.mode();
        let mut persisted = Some(state.toggle().to_string());
        assert_eq!(state.mode(), ThemeMode::Light);
        assert_eq!(persisted.as_deref(), Some("light"));

        persisted = Some(state.toggle().to_string());
        assert_eq!(state.mode(), original);
        assert_eq!(persisted.as_deref(), Some(state.mode().class()));

        let reloaded = ThemeState::resolve(persisted.as_deref(), false);
        assert_eq!(reloaded.mode(), state.mode());
    }

    #[test]
    fn test_system_changes_only_apply_without_preference() {
        let mut state = ThemeState::resolve(None, false);
        assert_eq!(state.system_changed(true), Some(ThemeMode::Dark));
        assert_eq!(state.system_changed(true), None);

        state.toggle();
        assert_eq!(state.system_changed(true), None);
        assert_eq!(state.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_stored_change_from_other_tab() {
        let mut state = ThemeState::resolve(None, true);
        assert_eq!(state.stored_changed(Some("light")), Some(ThemeMode::Light));
        assert!(state.is_explicit());
        assert_eq!(state.stored_changed(Some("bogus")), None);
        assert_eq!(state.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert_eq!(
            "Dark".parse::<ThemeMode>(),
            Err(ThemeParseError("Dark".to_string()))
        );
        assert_eq!(ThemeMode::Light.to_string(), "light");
        assert_eq!(
            serde_json::to_string(&ThemeMode::Dark).unwrap(),
            "\"dark\""
        );
    }
}
