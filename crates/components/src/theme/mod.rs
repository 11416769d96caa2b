//! Theming context the components render under.
//!
//! A context-provided theme with light, dark, and high-contrast variants.
//! The preference is persisted in localStorage and applied as a `data-theme`
//! attribute on `<body>`; the stylesheet keys off that attribute.

use leptos::prelude::*;
use web_sys::window;

/// Available visual themes.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
    HighContrast,
}

impl Theme {
    /// Theme name as used for the `data-theme` attribute and localStorage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::HighContrast => "high-contrast",
        }
    }

    /// Display name for theme pickers.
    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
            Theme::HighContrast => "High contrast",
        }
    }

    /// Parse a stored theme name; unknown names fall back to the default.
    pub fn from_str(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            "high-contrast" => Theme::HighContrast,
            _ => Theme::Light,
        }
    }

    pub fn all() -> [Theme; 3] {
        [Theme::Light, Theme::Dark, Theme::HighContrast]
    }
}

const THEME_STORAGE_KEY: &str = "ui-theme";

fn load_theme_from_storage() -> Theme {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten())
        .map(|s| Theme::from_str(&s))
        .unwrap_or_default()
}

fn save_theme_to_storage(theme: Theme) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
    }
}

/// Apply the theme as a `data-theme` attribute on `<body>`.
fn apply_theme(theme: Theme) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.set_attribute("data-theme", theme.as_str());
    }
}

/// Theme context type.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current theme signal.
    pub theme: RwSignal<Theme>,
}

impl ThemeContext {
    /// Set the theme, persist it, and apply it to the document.
    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        save_theme_to_storage(theme);
        apply_theme(theme);
    }

    pub fn get_theme(&self) -> Theme {
        self.theme.get()
    }
}

/// Provides the theme context to children and applies the stored preference.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let initial_theme = load_theme_from_storage();
    let theme = RwSignal::new(initial_theme);

    apply_theme(initial_theme);
    provide_context(ThemeContext { theme });

    children()
}

/// Theme context hook used by every component in this crate. Rendering
/// without a [`ThemeProvider`] degrades to the default theme with a warning
/// instead of panicking.
pub fn use_theme() -> ThemeContext {
    match use_context::<ThemeContext>() {
        Some(context) => context,
        None => {
            log::warn!("no ThemeProvider mounted, falling back to the default theme");
            ThemeContext {
                theme: RwSignal::new(Theme::default()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_name_round_trip() {
        for theme in Theme::all() {
            assert_eq!(Theme::from_str(theme.as_str()), theme);
        }
    }

    #[test]
    fn test_unknown_theme_name_falls_back() {
        assert_eq!(Theme::from_str("forest"), Theme::Light);
        assert_eq!(Theme::from_str(""), Theme::Light);
    }
}
