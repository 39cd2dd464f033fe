use leptos::prelude::*;

use crate::routes::home::HomePage;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! { <HomePage /> }
}
