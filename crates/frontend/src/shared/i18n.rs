//! Localization for the frontend.
//!
//! Provides a context-based language system with Russian and English strings.
//! Language preference is persisted in localStorage.

use std::collections::HashMap;

use leptos::prelude::*;
use once_cell::sync::Lazy;
use web_sys::window;

/// Available interface languages.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Language {
    #[default]
    Ru,
    En,
}

impl Language {
    /// Locale code (used for localStorage and the `lang` attribute).
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Ru => "ru",
            Language::En => "en",
        }
    }

    /// Short label shown on the switcher buttons.
    pub fn button_label(&self) -> &'static str {
        match self {
            Language::Ru => "RU",
            Language::En => "ENG",
        }
    }

    /// Parse a locale code, falling back to the default.
    pub fn from_str(s: &str) -> Self {
        match s {
            "en" => Language::En,
            _ => Language::Ru,
        }
    }

    pub fn all() -> [Language; 2] {
        [Language::Ru, Language::En]
    }
}

struct Entry {
    ru: &'static str,
    en: &'static str,
}

macro_rules! entry {
    ($key:literal, $ru:literal, $en:literal) => {
        ($key, Entry { ru: $ru, en: $en })
    };
}

static STRINGS: Lazy<HashMap<&'static str, Entry>> = Lazy::new(|| {
    HashMap::from([
        entry!("nav.articles", "Статьи", "Articles"),
        entry!("nav.about", "О проекте", "About"),
        entry!("nav.support", "Поддержать", "Support"),
        entry!("login", "Войти", "Login"),
        entry!("logout", "Выйти", "Logout"),
        entry!("interactive.atmosphereMode", "Атмосферный режим", "Atmosphere mode"),
        entry!(
            "interactive.atmosphereModeTooltip",
            "Фоновая музыка для погружения",
            "Ambient background music"
        ),
        entry!("auth.signInTitle", "Вход", "Sign in"),
        entry!("auth.signUpTitle", "Регистрация", "Sign up"),
        entry!("auth.email", "Эл. почта", "Email"),
        entry!("auth.password", "Пароль", "Password"),
        entry!("auth.submitSignIn", "Войти", "Sign in"),
        entry!("auth.submitSignUp", "Зарегистрироваться", "Sign up"),
        entry!(
            "auth.switchToSignUp",
            "Нет аккаунта? Регистрация",
            "No account? Sign up"
        ),
        entry!(
            "auth.switchToSignIn",
            "Уже есть аккаунт? Войти",
            "Already have an account? Sign in"
        ),
        entry!("auth.loading", "Подождите...", "Please wait..."),
    ])
});

/// Resolve a string id for the given language.
///
/// Unrecognized ids are returned as-is so a missing translation shows up in
/// the UI instead of breaking rendering.
pub fn translate(language: Language, key: &str) -> String {
    match STRINGS.get(key) {
        Some(entry) => match language {
            Language::Ru => entry.ru.to_string(),
            Language::En => entry.en.to_string(),
        },
        None => key.to_string(),
    }
}

const LANGUAGE_STORAGE_KEY: &str = "app-language";

fn load_language_from_storage() -> Language {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(LANGUAGE_STORAGE_KEY).ok().flatten())
        .map(|s| Language::from_str(&s))
        .unwrap_or_default()
}

fn save_language_to_storage(language: Language) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(LANGUAGE_STORAGE_KEY, language.as_str());
    }
}

/// Language context shared through the component tree.
#[derive(Clone, Copy)]
pub struct LanguageContext {
    language: RwSignal<Language>,
}

impl LanguageContext {
    pub fn language(&self) -> Language {
        self.language.get()
    }

    /// Switch the interface language. Idempotent for the current language;
    /// the choice is persisted either way.
    pub fn set_language(&self, language: Language) {
        self.language.set(language);
        save_language_to_storage(language);
    }

    /// Translation lookup for the current language.
    pub fn t(&self, key: &str) -> String {
        translate(self.language.get(), key)
    }
}

/// Language context provider component.
#[component]
pub fn LanguageProvider(children: ChildrenFn) -> impl IntoView {
    let language = RwSignal::new(load_language_from_storage());

    provide_context(LanguageContext { language });

    children()
}

/// Hook to use the language context.
pub fn use_language() -> LanguageContext {
    use_context::<LanguageContext>()
        .expect("LanguageContext not found. Wrap your app with LanguageProvider.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_keys_resolve_in_both_languages() {
        assert_eq!(translate(Language::En, "login"), "Login");
        assert_eq!(translate(Language::Ru, "login"), "Войти");
        assert_eq!(translate(Language::En, "nav.articles"), "Articles");
        assert_eq!(translate(Language::Ru, "nav.support"), "Поддержать");
        assert_eq!(
            translate(Language::En, "interactive.atmosphereMode"),
            "Atmosphere mode"
        );
    }

    #[test]
    fn unknown_key_falls_back_to_itself() {
        assert_eq!(translate(Language::En, "nav.missing"), "nav.missing");
    }

    #[test]
    fn locale_codes_round_trip() {
        for language in Language::all() {
            assert_eq!(Language::from_str(language.as_str()), language);
        }
    }

    #[test]
    fn unknown_locale_code_falls_back_to_default() {
        assert_eq!(Language::from_str("de"), Language::default());
    }
}
