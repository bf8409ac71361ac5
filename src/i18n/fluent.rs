// SPDX-License-Identifier: MPL-2.0
use crate::app::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource, FluentValue};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

const DEFAULT_LOCALE: &str = "en-US";

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("available_locales", &self.available_locales)
            .field("current_locale", &self.current_locale)
            .finish()
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl I18n {
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale_str) = filename.strip_suffix(".ftl") else {
                continue;
            };
            let Ok(locale) = locale_str.parse::<LanguageIdentifier>() else {
                log::warn!("Skipping translation file with invalid locale: {filename}");
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };
            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            let resource = match FluentResource::try_new(source) {
                Ok(resource) => resource,
                Err((resource, errors)) => {
                    log::warn!("{} parse errors in {filename}", errors.len());
                    resource
                }
            };
            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            // Isolation marks render as boxes in some fonts.
            bundle.set_use_isolating(false);
            if let Err(errors) = bundle.add_resource(resource) {
                log::warn!("{} duplicate messages in {filename}", errors.len());
            }
            bundles.insert(locale.clone(), bundle);
            available_locales.push(locale);
        }
        available_locales.sort_by_key(ToString::to_string);

        let current_locale = resolve_locale(
            cli_lang,
            config,
            sys_locale::get_locale(),
            &available_locales,
        )
        .unwrap_or_else(default_locale);

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Translates `key`, substituting Fluent variables from `args`.
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, FluentValue::from(*value));
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(msg) = bundle.get_message(key) {
                if let Some(pattern) = msg.value() {
                    let mut errors = vec![];
                    let value = bundle.format_pattern(pattern, args, &mut errors);
                    if errors.is_empty() {
                        return value.to_string();
                    }
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

fn default_locale() -> LanguageIdentifier {
    DEFAULT_LOCALE.parse().unwrap_or_default()
}

/// Picks the UI locale: CLI flag, then config, then OS locale.
///
/// Each candidate must be one of `available`; an OS locale like `fr-FR`
/// also matches a bundle for its bare language (`fr`).
fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    os_locale: Option<String>,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let candidates = [cli_lang, config.general.language.clone(), os_locale];
    candidates
        .into_iter()
        .flatten()
        .filter_map(|raw| raw.parse::<LanguageIdentifier>().ok())
        .find_map(|lang| match_available(&lang, available))
}

fn match_available(
    lang: &LanguageIdentifier,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    if available.contains(lang) {
        return Some(lang.clone());
    }
    available
        .iter()
        .find(|candidate| candidate.language == lang.language)
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn available() -> Vec<LanguageIdentifier> {
        vec!["en-US".parse().unwrap(), "fr".parse().unwrap()]
    }

    #[test]
    fn test_resolve_locale_cli() {
        let config = Config::default();
        let lang = resolve_locale(Some("fr".to_string()), &config, None, &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn test_resolve_locale_config() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        let lang = resolve_locale(None, &config, Some("en-US".into()), &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn cli_beats_config() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        let lang = resolve_locale(Some("en-US".into()), &config, None, &available());
        assert_eq!(lang, Some("en-US".parse().unwrap()));
    }

    #[test]
    fn os_locale_matches_on_language() {
        let config = Config::default();
        let lang = resolve_locale(None, &config, Some("fr-CA".into()), &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn unknown_languages_resolve_to_none() {
        let config = Config::default();
        let lang = resolve_locale(Some("ja".into()), &config, Some("de-DE".into()), &available());
        assert!(lang.is_none());
    }

    #[test]
    fn bundled_locales_are_loaded() {
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        assert!(i18n.available_locales.len() >= 2);
        assert_eq!(i18n.current_locale(), &default_locale());
        assert_eq!(i18n.tr("onboarding-skip"), "Skip");
    }

    #[test]
    fn french_bundle_translates_chrome() {
        let i18n = I18n::new(Some("fr".into()), &Config::default());
        assert_eq!(i18n.tr("onboarding-skip"), "Passer");
    }

    #[test]
    fn missing_key_is_flagged() {
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }

    #[test]
    fn arguments_are_substituted() {
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        assert_eq!(
            i18n.tr_with_args("window-title-screen", &[("screen", "Camera")]),
            "Camera - Plant Identifier"
        );
    }
}
