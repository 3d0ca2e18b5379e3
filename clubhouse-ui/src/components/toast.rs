//! Status Toast Component
//!
//! The transient status area. Messages are set through
//! [`BoardState::show_success`]/[`BoardState::show_error`], which hide them
//! again after a fixed delay.

use leptos::*;

use crate::state::global::{BoardState, StatusKind};

/// Transient status message area
#[component]
pub fn StatusToast() -> impl IntoView {
    let state = use_context::<BoardState>().expect("BoardState not found");

    view! {
        <div class="status-area">
            {move || {
                state.status.get().map(|msg| {
                    let class = match msg.kind {
                        StatusKind::Success => "status success",
                        StatusKind::Error => "status error",
                    };
                    view! { <div class=class>{msg.text}</div> }
                })
            }}
        </div>
    }
}
