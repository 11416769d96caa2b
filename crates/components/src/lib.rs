//! Presentational UI components for Leptos front-ends.
//!
//! Provides a page [`Footer`] with customizable legal links, a [`Tabs`]
//! navigation widget with keyboard support, and the [`ThemeProvider`]
//! context both render under.

pub mod footer;
pub mod tabs;
pub mod theme;

pub use footer::{Footer, FooterCustomization, FooterEntry, FooterKey, FooterTranslations};
pub use tabs::{
    ActivationMode, HorizontalTabs, Orientation, TabDefinition, Tabs, TabsKind, UncontrolledTabs,
    VerticalTabs,
};
pub use theme::{use_theme, Theme, ThemeContext, ThemeProvider};
