use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::header::atmosphere::AtmosphereToggle;
use crate::layout::header::language_switch::LanguageSwitch;
use crate::layout::header::mobile_menu::MobileMenu;
use crate::shared::audio::{AmbientPlayer, WebAudioSink, AMBIENT_AUDIO_URL};
use crate::shared::i18n::use_language;
use crate::shared::icons::icon;
use crate::system::auth::context::{use_auth, AuthContext};
use crate::system::auth::modal::AuthModal;
use crate::usecases::usage;

pub const BLOG_URL: &str = "https://blog.lunarum.app/";
pub const LOGO_URL: &str =
    "http://blog.lunarum.app/wp-content/uploads/2025/08/lunarum-logo-big.png";

/// Навигационные ссылки шапки: ключ строки и адрес.
const NAV_LINKS: [(&str, &str); 3] = [
    ("nav.articles", BLOG_URL),
    ("nav.about", "#about"),
    ("nav.support", "#support"),
];

/// What the auth button does for the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthAction {
    OpenModal,
    SignOut,
}

impl AuthAction {
    pub fn for_session(session_present: bool) -> Self {
        if session_present {
            AuthAction::SignOut
        } else {
            AuthAction::OpenModal
        }
    }
}

fn run_auth_action(auth: AuthContext, set_show_auth_modal: WriteSignal<bool>) {
    match AuthAction::for_session(auth.is_authenticated()) {
        AuthAction::SignOut => {
            spawn_local(async move {
                if let Err(err) = auth.sign_out().await {
                    log::warn!("Не удалось завершить сессию на сервере: {}", err);
                }
            });
        }
        AuthAction::OpenModal => set_show_auth_modal.set(true),
    }
}

/// Primary navigation links, shared by the desktop nav and the mobile strip.
#[component]
fn NavLinks(
    /// Fired when a link is selected (the mobile surfaces close the menu)
    #[prop(optional)]
    on_navigate: Option<Callback<()>>,
) -> impl IntoView {
    let lang = use_language();

    NAV_LINKS
        .into_iter()
        .map(|(key, href)| {
            view! {
                <a
                    href=href
                    class="site-header__link"
                    on:click=move |_| {
                        if let Some(cb) = on_navigate {
                            cb.run(());
                        }
                    }
                >
                    {move || lang.t(key)}
                </a>
            }
        })
        .collect_view()
}

/// Site header: brand, navigation, language switcher, ambient-audio toggle
/// and the authentication entry point, with a portal-rendered mobile menu.
#[component]
pub fn Header() -> impl IntoView {
    let auth = use_auth();
    let lang = use_language();

    let (show_auth_modal, set_show_auth_modal) = signal(false);
    let (mobile_menu_open, set_mobile_menu_open) = signal(false);
    let atmosphere_on = RwSignal::new(false);

    // Аудио живёт ровно столько, сколько смонтирована шапка.
    let player = StoredValue::new_local(AmbientPlayer::<WebAudioSink>::new());
    Effect::new(move |_| {
        if atmosphere_on.get() {
            player.update_value(|p| p.activate(|| WebAudioSink::create(AMBIENT_AUDIO_URL)));
        } else {
            player.update_value(|p| p.deactivate());
        }
    });
    // Уборка при размонтировании обязательна и не зависит от режима.
    on_cleanup(move || player.update_value(|p| p.release()));

    let auth_label = move || {
        if auth.is_authenticated() {
            lang.t("logout")
        } else {
            lang.t("login")
        }
    };
    let on_auth_click = move |_| run_auth_action(auth, set_show_auth_modal);

    let close_menu = Callback::new(move |_: ()| set_mobile_menu_open.set(false));
    let on_auth_close = Callback::new(move |_: ()| set_show_auth_modal.set(false));
    let on_auth_success = Callback::new(move |_: ()| {
        let Some(token) = auth.access_token() else {
            return;
        };
        spawn_local(usage::run_post_auth_migration(token));
    });
    let mobile_auth_action =
        Callback::new(move |_: ()| run_auth_action(auth, set_show_auth_modal));

    view! {
        <header class="site-header">
            <div class="site-header__inner">
                <div class="site-header__brand">
                    <a href="/" class="site-header__logo-link">
                        <img src=LOGO_URL alt="Lunarum" class="site-header__logo" />
                    </a>
                </div>

                <div class="site-header__controls">
                    <div class="site-header__desktop-controls">
                        <AtmosphereToggle enabled=atmosphere_on />
                        <LanguageSwitch />
                    </div>

                    <nav class="site-header__nav">
                        <NavLinks />
                        <button class="button button--accent" on:click=on_auth_click>
                            {auth_label}
                        </button>
                    </nav>

                    <button
                        class="site-header__menu-button"
                        aria-label="Menu"
                        on:click=move |_| set_mobile_menu_open.update(|open| *open = !*open)
                    >
                        {move || if mobile_menu_open.get() { icon("x") } else { icon("menu") }}
                    </button>
                </div>
            </div>

            // Полоса навигации для узких экранов
            <nav class="site-header__strip">
                <NavLinks on_navigate=close_menu />
            </nav>

            <MobileMenu
                open=mobile_menu_open
                atmosphere_on=atmosphere_on
                on_close=close_menu
                on_auth_action=mobile_auth_action
            />
        </header>

        <AuthModal
            open=show_auth_modal
            on_close=on_auth_close
            on_success=on_auth_success
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_action_is_a_pure_function_of_session_presence() {
        assert_eq!(AuthAction::for_session(false), AuthAction::OpenModal);
        assert_eq!(AuthAction::for_session(true), AuthAction::SignOut);
    }
}
