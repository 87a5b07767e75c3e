// SPDX-License-Identifier: MPL-2.0
use crate::app::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::path::Path;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

pub const DEFAULT_LOCALE: &str = "en-US";

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
        Self::new(None, None, &Config::default())
    }
}

impl I18n {
    /// Loads every embedded translation, then any `.ftl` file from
    /// `i18n_dir` (which replaces an embedded locale of the same name).
    pub fn new(cli_lang: Option<String>, i18n_dir: Option<String>, config: &Config) -> Self {
        let mut sources: Vec<(String, String)> = Asset::iter()
            .filter_map(|file| {
                let content = Asset::get(file.as_ref())?;
                Some((
                    file.to_string(),
                    String::from_utf8_lossy(content.data.as_ref()).into_owned(),
                ))
            })
            .collect();

        if let Some(dir) = i18n_dir {
            sources.extend(read_translation_dir(Path::new(&dir)));
        }

        let mut bundles = HashMap::new();
        for (filename, content) in sources {
            let Some(locale_str) = filename.strip_suffix(".ftl") else {
                continue;
            };
            let Ok(locale) = locale_str.parse::<LanguageIdentifier>() else {
                tracing::warn!(file = %filename, "ignoring translation with invalid locale name");
                continue;
            };
            match build_bundle(&locale, content) {
                Some(bundle) => {
                    bundles.insert(locale, bundle);
                }
                None => tracing::warn!(file = %filename, "ignoring unparsable translation"),
            }
        }

        let mut available_locales: Vec<_> = bundles.keys().cloned().collect();
        available_locales.sort_by_key(ToString::to_string);

        let current_locale = resolve_locale(cli_lang, config, &available_locales)
            .unwrap_or_else(default_locale);

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    #[must_use]
    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Translates `key`, substituting `{ $name }` placeholders from `args`.
    #[must_use]
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs<'_>>) -> String {
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

fn build_bundle(
    locale: &LanguageIdentifier,
    content: String,
) -> Option<FluentBundle<FluentResource>> {
    let resource = FluentResource::try_new(content).ok()?;
    let mut bundle = FluentBundle::new(vec![locale.clone()]);
    // Placeholders are rendered without bidi isolation marks.
    bundle.set_use_isolating(false);
    bundle.add_resource(resource).ok()?;
    Some(bundle)
}

fn read_translation_dir(dir: &Path) -> Vec<(String, String)> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::warn!(dir = %dir.display(), %err, "cannot read translation directory");
            return Vec::new();
        }
    };

    entries
        .filter_map(Result::ok)
        .filter_map(|entry| {
            let name = entry.file_name().into_string().ok()?;
            if !name.ends_with(".ftl") {
                return None;
            }
            let content = std::fs::read_to_string(entry.path()).ok()?;
            Some((name, content))
        })
        .collect()
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    // 1. Check CLI args
    if let Some(lang_str) = cli_lang {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return Some(lang);
            }
        }
    }

    // 2. Check config file
    if let Some(lang_str) = &config.general.language {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return Some(lang);
            }
        }
    }

    // 3. Check OS locale
    if let Some(os_locale_str) = sys_locale::get_locale() {
        if let Ok(os_lang) = os_locale_str.parse::<LanguageIdentifier>() {
            if available.contains(&os_lang) {
                return Some(os_lang);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn locales() -> Vec<LanguageIdentifier> {
        vec!["en-US".parse().unwrap(), "fr".parse().unwrap()]
    }

    #[test]
    fn resolve_locale_prefers_cli() {
        let mut config = Config::default();
        config.general.language = Some("en-US".to_string());
        let lang = resolve_locale(Some("fr".to_string()), &config, &locales());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn resolve_locale_uses_config() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        let lang = resolve_locale(None, &config, &locales());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn resolve_locale_skips_unavailable_cli_language() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        let lang = resolve_locale(Some("de".to_string()), &config, &locales());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn resolve_locale_default_is_available_or_none() {
        let lang = resolve_locale(None, &Config::default(), &locales());
        if let Some(l) = lang {
            assert!(locales().contains(&l));
        }
    }

    #[test]
    fn embedded_locales_are_loaded() {
        let i18n = I18n::new(Some("en-US".into()), None, &Config::default());
        assert!(i18n.available_locales.contains(&"en-US".parse().unwrap()));
        assert!(i18n.available_locales.contains(&"fr".parse().unwrap()));
        assert_eq!(i18n.tr("nav-home"), "Home");
    }

    #[test]
    fn switching_locale_changes_translation() {
        let mut i18n = I18n::new(Some("en-US".into()), None, &Config::default());
        i18n.set_locale("fr".parse().unwrap());
        assert_eq!(i18n.tr("nav-home"), "Accueil");
    }

    #[test]
    fn missing_key_is_marked() {
        let i18n = I18n::new(Some("en-US".into()), None, &Config::default());
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }

    #[test]
    fn args_are_substituted_without_isolation_marks() {
        let i18n = I18n::new(Some("en-US".into()), None, &Config::default());
        let label = i18n.tr_with_args("detail-tab-images", &[("count", "17")]);
        assert_eq!(label, "Images (17)");
    }

    #[test]
    fn directory_translation_overrides_embedded() {
        let dir = tempdir().expect("temp dir");
        std::fs::write(dir.path().join("en-US.ftl"), "nav-home = Start\n").expect("write ftl");

        let i18n = I18n::new(
            Some("en-US".into()),
            Some(dir.path().to_string_lossy().into_owned()),
            &Config::default(),
        );

        assert_eq!(i18n.tr("nav-home"), "Start");
    }
}
