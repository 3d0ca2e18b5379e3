//! Loading Component

use leptos::*;

/// Placeholder text shown until the first fetch completes
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <p class="loading">"Loading activities..."</p>
    }
}
