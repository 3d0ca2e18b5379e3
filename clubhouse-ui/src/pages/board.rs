//! Board Page
//!
//! The main page: activity cards on one side, the signup form on the other.
//! The card list is rebuilt from scratch whenever the fetched collection
//! changes, so the view never mixes entries from two loads.

use leptos::*;

use crate::components::{ActivityCard, Loading, SignupForm};
use crate::state::global::BoardState;

/// Activity board page
#[component]
pub fn Board() -> impl IntoView {
    let state = use_context::<BoardState>().expect("BoardState not found");

    // Fetch the roster once on mount.
    create_effect(move |_| {
        spawn_local(async move {
            state.refresh().await;
        });
    });

    view! {
        <div class="board">
            <section class="activities-section">
                <h3>"Activities"</h3>
                <div class="activities-list">
                    {move || {
                        if state.load_failed.get() {
                            view! {
                                <p class="load-error">
                                    "Failed to load activities. Please try again later."
                                </p>
                            }.into_view()
                        } else if !state.loaded.get() {
                            view! { <Loading /> }.into_view()
                        } else {
                            state.activities.get().0
                                .into_iter()
                                .map(|(name, activity)| view! {
                                    <ActivityCard name=name activity=activity />
                                })
                                .collect_view()
                        }
                    }}
                </div>
            </section>

            <section class="signup-section">
                <h3>"Sign Up for an Activity"</h3>
                <SignupForm />
            </section>
        </div>
    }
}
