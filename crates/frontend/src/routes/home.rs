use leptos::prelude::*;

use crate::layout::header::Header;
use crate::shared::i18n::use_language;

/// Landing page: the header over the anchor sections it links to.
#[component]
pub fn HomePage() -> impl IntoView {
    let lang = use_language();

    view! {
        <div class="page">
            <Header />
            <main class="page__main">
                <section id="about" class="page__section">
                    <h2>{move || lang.t("nav.about")}</h2>
                </section>
                <section id="support" class="page__section">
                    <h2>{move || lang.t("nav.support")}</h2>
                </section>
            </main>
        </div>
    }
}
