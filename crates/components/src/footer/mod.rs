//! Page footer with legal and informational links.

mod entries;

pub use entries::{
    compose_entries, default_entries, resolve_titles, FooterCustomization, FooterEntry, FooterKey,
    FooterTranslations, ResolvedTitles,
};

use chrono::{Datelike, Utc};
use leptos::either::Either;
use leptos::prelude::*;

use crate::theme::use_theme;

/// Footer with all needed legal and info links. Place it manually at the
/// bottom of the page.
///
/// Customization follows one surface: append entries after the defaults,
/// replace the whole list, or transform the default list with a function.
#[component]
pub fn Footer(
    /// How caller-supplied entries combine with the built-in legal links
    #[prop(optional)]
    customization: FooterCustomization,
    /// Localized titles for the built-in entries
    #[prop(optional)]
    translations: FooterTranslations,
    /// Year shown in the copyright line; current UTC year when omitted
    #[prop(optional)]
    year: Option<i32>,
    /// Additional CSS classes for the root element
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Inline style for the root element
    #[prop(optional, into)]
    style: MaybeProp<String>,
) -> impl IntoView {
    use_theme();

    let year = year.unwrap_or_else(|| Utc::now().year());
    let titles = resolve_titles(&translations, year);
    let entries = compose_entries(default_entries(&titles), customization);

    let root_class = move || format!("footer {}", class.get().unwrap_or_default());
    let root_style = move || style.get().unwrap_or_default();

    view! {
        <footer class=root_class style=root_style>
            <ul class="footer__list">
                {entries.into_iter().enumerate().map(|(index, entry)| {
                    view! {
                        <li class="footer__item">
                            {(index > 0).then(|| view! { <span class="footer__separator"></span> })}
                            {match entry {
                                FooterEntry::Link { title, url, .. } => Either::Left(view! {
                                    <a class="footer__link" href=url target="_blank" rel="noreferrer">
                                        {title}
                                    </a>
                                }),
                                FooterEntry::Text { title, .. } => Either::Right(view! {
                                    <span class="footer__text">{title}</span>
                                }),
                            }}
                        </li>
                    }
                }).collect_view()}
            </ul>
        </footer>
    }
}
