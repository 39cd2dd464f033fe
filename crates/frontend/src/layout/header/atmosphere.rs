use leptos::prelude::*;

use crate::shared::i18n::use_language;
use crate::shared::icons::icon;

/// Toggle switch for the ambient-audio "atmosphere" mode.
///
/// The desktop variant carries a hover tooltip on a help affordance; the
/// labeled variant (mobile menu) shows the mode name instead.
#[component]
pub fn AtmosphereToggle(
    /// Shared on/off flag; the header drives the audio from it
    enabled: RwSignal<bool>,
    /// Render the textual label instead of the help tooltip
    #[prop(default = false)]
    labeled: bool,
) -> impl IntoView {
    let lang = use_language();
    let (tooltip_visible, set_tooltip_visible) = signal(false);

    let music_class = move || {
        if enabled.get() {
            "atmosphere__icon atmosphere__icon--active"
        } else {
            "atmosphere__icon"
        }
    };
    let switch_class = move || {
        if enabled.get() {
            "switch switch--on"
        } else {
            "switch"
        }
    };

    view! {
        <div class="atmosphere">
            <span class=music_class>{icon("music")}</span>

            <Show when=move || labeled>
                <span class="atmosphere__label">
                    {move || lang.t("interactive.atmosphereMode")}
                </span>
            </Show>

            <Show when=move || !labeled>
                <div class="atmosphere__help">
                    <button
                        type="button"
                        class="atmosphere__help-button"
                        on:mouseenter=move |_| set_tooltip_visible.set(true)
                        on:mouseleave=move |_| set_tooltip_visible.set(false)
                    >
                        {icon("help-circle")}
                    </button>
                    <Show when=move || tooltip_visible.get()>
                        <div class="tooltip tooltip--above">
                            {move || lang.t("interactive.atmosphereModeTooltip")}
                        </div>
                    </Show>
                </div>
            </Show>

            <button
                type="button"
                class=switch_class
                on:click=move |_| enabled.update(|on| *on = !*on)
            >
                <span class="switch__thumb"></span>
            </button>
        </div>
    }
}
