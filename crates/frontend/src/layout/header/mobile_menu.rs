use leptos::portal::Portal;
use leptos::prelude::*;

use crate::layout::header::atmosphere::AtmosphereToggle;
use crate::layout::header::language_switch::LanguageSwitch;
use crate::shared::i18n::use_language;
use crate::system::auth::context::use_auth;

/// Full-screen mobile menu: scrim plus a sheet with the same controls as the
/// desktop header.
///
/// Rendered through a portal onto `document.body` so it overlays everything
/// regardless of ancestor stacking contexts.
#[component]
pub fn MobileMenu(
    #[prop(into)] open: Signal<bool>,
    /// Shared atmosphere flag, same signal the desktop toggle drives
    atmosphere_on: RwSignal<bool>,
    on_close: Callback<()>,
    /// Auth entry point; the menu closes itself after invoking it
    on_auth_action: Callback<()>,
) -> impl IntoView {
    let auth = use_auth();
    let lang = use_language();

    let auth_label = move || {
        if auth.is_authenticated() {
            lang.t("logout")
        } else {
            lang.t("login")
        }
    };

    view! {
        <Show when=move || open.get()>
            <Portal>
                <div class="mobile-menu">
                    <div class="mobile-menu__scrim" on:click=move |_| on_close.run(())></div>
                    <div class="mobile-menu__sheet">
                        <nav class="mobile-menu__nav">
                            <div class="mobile-menu__row">
                                <AtmosphereToggle enabled=atmosphere_on labeled=true />
                            </div>

                            <div class="mobile-menu__row">
                                <LanguageSwitch on_select=on_close />
                            </div>

                            <button
                                class="button button--accent mobile-menu__auth"
                                on:click=move |_| {
                                    on_auth_action.run(());
                                    on_close.run(());
                                }
                            >
                                {auth_label}
                            </button>
                        </nav>
                    </div>
                </div>
            </Portal>
        </Show>
    }
}
