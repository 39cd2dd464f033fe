use leptos::prelude::*;

use crate::routes::routes::AppRoutes;
use crate::shared::i18n::LanguageProvider;
use crate::system::auth::context::AuthProvider;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <LanguageProvider>
            <AuthProvider>
                <AppRoutes />
            </AuthProvider>
        </LanguageProvider>
    }
}
