use leptos::prelude::*;

use crate::shared::i18n::{use_language, Language};
use crate::shared::icons::icon;

/// Two-option language switcher (RU / ENG).
///
/// Selection always calls the setter, also when the language is already
/// active.
#[component]
pub fn LanguageSwitch(
    /// Fired after any selection (the mobile menu closes itself on it)
    #[prop(optional)]
    on_select: Option<Callback<()>>,
) -> impl IntoView {
    let lang = use_language();

    view! {
        <div class="lang-switch">
            <span class="lang-switch__icon">{icon("globe")}</span>
            {Language::all()
                .into_iter()
                .map(|language| {
                    let option_class = move || {
                        if lang.language() == language {
                            "lang-switch__option lang-switch__option--active"
                        } else {
                            "lang-switch__option"
                        }
                    };
                    view! {
                        <button
                            class=option_class
                            on:click=move |_| {
                                lang.set_language(language);
                                if let Some(cb) = on_select {
                                    cb.run(());
                                }
                            }
                        >
                            {language.button_label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
