//! Pure footer entry model: locale-resolved titles, the built-in legal
//! link list, and the customization merge. No DOM access, testable natively.

use std::sync::Arc;

/// Well-known keys for the built-in legal entries.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FooterKey {
    Copyright,
    TermsOfService,
    Privacy,
    TermsOfUse,
    Cookies,
    LegalNotices,
}

/// One rendered footer entry: plain text or an external link.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum FooterEntry {
    Text {
        key: Option<FooterKey>,
        title: String,
    },
    Link {
        key: Option<FooterKey>,
        title: String,
        url: String,
    },
}

impl FooterEntry {
    /// Plain-text entry without a well-known key.
    pub fn text(title: impl Into<String>) -> Self {
        FooterEntry::Text {
            key: None,
            title: title.into(),
        }
    }

    /// Link entry without a well-known key. The URL is passed through
    /// unvalidated.
    pub fn link(title: impl Into<String>, url: impl Into<String>) -> Self {
        FooterEntry::Link {
            key: None,
            title: title.into(),
            url: url.into(),
        }
    }

    pub fn key(&self) -> Option<FooterKey> {
        match self {
            FooterEntry::Text { key, .. } | FooterEntry::Link { key, .. } => *key,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            FooterEntry::Text { title, .. } | FooterEntry::Link { title, .. } => title,
        }
    }
}

/// Per-key title overrides merged over the built-in English text.
/// A `None` field falls back to the default.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct FooterTranslations {
    pub copyright: Option<String>,
    pub terms_of_service: Option<String>,
    pub privacy: Option<String>,
    pub terms_of_use: Option<String>,
    pub cookies: Option<String>,
    pub legal_notices: Option<String>,
}

/// Titles after the override merge, one per built-in entry.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ResolvedTitles {
    pub copyright: String,
    pub terms_of_service: String,
    pub privacy: String,
    pub terms_of_use: String,
    pub cookies: String,
    pub legal_notices: String,
}

/// Merges caller overrides over the built-in English titles. The copyright
/// line embeds the injected `year`; callers decide where that year comes from.
pub fn resolve_titles(overrides: &FooterTranslations, year: i32) -> ResolvedTitles {
    let fallback = |field: &Option<String>, default: &str| {
        field.clone().unwrap_or_else(|| default.to_string())
    };
    ResolvedTitles {
        copyright: overrides
            .copyright
            .clone()
            .unwrap_or_else(|| format!("© {} Meridian Systems, Incorporated", year)),
        terms_of_service: fallback(&overrides.terms_of_service, "Terms of service"),
        privacy: fallback(&overrides.privacy, "Privacy"),
        terms_of_use: fallback(&overrides.terms_of_use, "Terms of use"),
        cookies: fallback(&overrides.cookies, "Cookies"),
        legal_notices: fallback(&overrides.legal_notices, "Legal notices"),
    }
}

/// The built-in legal list in render order: the copyright line first (text,
/// no URL), then the five linked entries.
pub fn default_entries(titles: &ResolvedTitles) -> Vec<FooterEntry> {
    vec![
        FooterEntry::Text {
            key: Some(FooterKey::Copyright),
            title: titles.copyright.clone(),
        },
        FooterEntry::Link {
            key: Some(FooterKey::TermsOfService),
            title: titles.terms_of_service.clone(),
            url: "https://www.meridian-systems.com/terms-of-service".to_string(),
        },
        FooterEntry::Link {
            key: Some(FooterKey::Privacy),
            title: titles.privacy.clone(),
            url: "https://www.meridian-systems.com/privacy-policy".to_string(),
        },
        FooterEntry::Link {
            key: Some(FooterKey::TermsOfUse),
            title: titles.terms_of_use.clone(),
            url: "https://www.meridian-systems.com/terms-of-use".to_string(),
        },
        FooterEntry::Link {
            key: Some(FooterKey::Cookies),
            title: titles.cookies.clone(),
            url: "https://www.meridian-systems.com/cookie-policy".to_string(),
        },
        FooterEntry::Link {
            key: Some(FooterKey::LegalNotices),
            title: titles.legal_notices.clone(),
            url: "https://www.meridian-systems.com/legal-notices".to_string(),
        },
    ]
}

/// How caller-supplied entries combine with the built-in list.
#[derive(Clone, Default)]
pub enum FooterCustomization {
    /// Defaults only.
    #[default]
    None,
    /// Defaults first, then the given entries.
    Append(Vec<FooterEntry>),
    /// Only the given entries; the defaults, including the copyright line,
    /// are suppressed entirely.
    ReplaceAll(Vec<FooterEntry>),
    /// Called with the default list; the return value is rendered verbatim
    /// with no amendments.
    Transform(Arc<dyn Fn(Vec<FooterEntry>) -> Vec<FooterEntry> + Send + Sync>),
}

impl FooterCustomization {
    /// Convenience constructor for the transform form.
    pub fn transform(
        f: impl Fn(Vec<FooterEntry>) -> Vec<FooterEntry> + Send + Sync + 'static,
    ) -> Self {
        FooterCustomization::Transform(Arc::new(f))
    }
}

/// Produces the final entry list from the defaults and the customization.
pub fn compose_entries(
    defaults: Vec<FooterEntry>,
    customization: FooterCustomization,
) -> Vec<FooterEntry> {
    match customization {
        FooterCustomization::None => defaults,
        FooterCustomization::Append(custom) => {
            let mut entries = defaults;
            entries.extend(custom);
            entries
        }
        FooterCustomization::ReplaceAll(custom) => custom,
        FooterCustomization::Transform(f) => f(defaults),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles() -> ResolvedTitles {
        resolve_titles(&FooterTranslations::default(), 2026)
    }

    #[test]
    fn test_overrides_take_precedence() {
        let overrides = FooterTranslations {
            privacy: Some("Privatsphäre".to_string()),
            cookies: Some("Cookies-Richtlinie".to_string()),
            ..Default::default()
        };
        let resolved = resolve_titles(&overrides, 2026);
        assert_eq!(resolved.privacy, "Privatsphäre");
        assert_eq!(resolved.cookies, "Cookies-Richtlinie");
        // untouched keys fall back to the built-in English text
        assert_eq!(resolved.terms_of_service, "Terms of service");
        assert_eq!(resolved.legal_notices, "Legal notices");
    }

    #[test]
    fn test_copyright_embeds_injected_year() {
        let resolved = resolve_titles(&FooterTranslations::default(), 1999);
        assert!(resolved.copyright.contains("1999"), "{}", resolved.copyright);
        let overridden = FooterTranslations {
            copyright: Some("All rights reserved".to_string()),
            ..Default::default()
        };
        let resolved = resolve_titles(&overridden, 1999);
        assert_eq!(resolved.copyright, "All rights reserved");
    }

    #[test]
    fn test_default_entries_order() {
        let entries = default_entries(&titles());
        let keys: Vec<_> = entries.iter().map(|e| e.key()).collect();
        assert_eq!(
            keys,
            vec![
                Some(FooterKey::Copyright),
                Some(FooterKey::TermsOfService),
                Some(FooterKey::Privacy),
                Some(FooterKey::TermsOfUse),
                Some(FooterKey::Cookies),
                Some(FooterKey::LegalNotices),
            ]
        );
        // the copyright line is text, everything else links
        assert!(matches!(entries[0], FooterEntry::Text { .. }));
        assert!(entries[1..].iter().all(|e| matches!(e, FooterEntry::Link { .. })));
    }

    #[test]
    fn test_append_keeps_defaults_first() {
        let defaults = default_entries(&titles());
        let custom = vec![FooterEntry::link("Status", "https://status.example.com")];
        let composed = compose_entries(defaults.clone(), FooterCustomization::Append(custom));
        assert_eq!(composed.len(), defaults.len() + 1);
        assert_eq!(&composed[..defaults.len()], &defaults[..]);
        assert_eq!(composed.last().unwrap().title(), "Status");
    }

    #[test]
    fn test_replace_all_with_empty_list_is_empty() {
        let defaults = default_entries(&titles());
        let composed = compose_entries(defaults, FooterCustomization::ReplaceAll(vec![]));
        assert!(composed.is_empty());
    }

    #[test]
    fn test_transform_output_is_verbatim() {
        let defaults = default_entries(&titles());
        let composed = compose_entries(
            defaults,
            FooterCustomization::transform(|_| vec![FooterEntry::text("only this")]),
        );
        assert_eq!(composed, vec![FooterEntry::text("only this")]);
    }

    #[test]
    fn test_transform_can_filter_privacy() {
        let defaults = default_entries(&titles());
        let composed = compose_entries(
            defaults,
            FooterCustomization::transform(|entries| {
                entries
                    .into_iter()
                    .filter(|e| e.key() != Some(FooterKey::Privacy))
                    .collect()
            }),
        );
        assert_eq!(composed.len(), 5);
        assert!(composed.iter().all(|e| e.key() != Some(FooterKey::Privacy)));
    }

    #[test]
    fn test_empty_and_duplicate_titles_pass_through() {
        let custom = vec![FooterEntry::text(""), FooterEntry::text("Docs"), FooterEntry::text("Docs")];
        let composed = compose_entries(vec![], FooterCustomization::ReplaceAll(custom.clone()));
        assert_eq!(composed, custom);
    }
}
