//! Application Root
//!
//! Installs the shared board state and lays out the page shell.

use leptos::*;

use crate::components::StatusToast;
use crate::pages::Board;
use crate::state::provide_board_state;

/// Root component
#[component]
pub fn App() -> impl IntoView {
    provide_board_state();

    view! {
        <div class="app-container">
            <header class="app-header">
                <h1>"Mergington High School"</h1>
                <p>"Extracurricular Activities"</p>
            </header>

            <main>
                <Board />
            </main>

            <StatusToast />
        </div>
    }
}
