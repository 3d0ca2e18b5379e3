//! Signup Form Component
//!
//! Email input plus an activity selector populated only from server data,
//! so the submitted name is always one of the listed activities.

use leptos::*;

use crate::api;
use crate::state::global::BoardState;

/// Signup form component
#[component]
pub fn SignupForm() -> impl IntoView {
    let state = use_context::<BoardState>().expect("BoardState not found");

    let (email, set_email) = create_signal(String::new());
    let (activity, set_activity) = create_signal(String::new());

    // Submissions are fired as-is; overlapping requests race independently
    // and each resolves into its own status message.
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let a = activity.get();
        let e = email.get();

        spawn_local(async move {
            match api::signup(&a, &e).await {
                Ok(message) => {
                    state.show_success(&message);
                    // The list itself is not refreshed on signup; only the
                    // next load shows the new participant.
                    set_email.set(String::new());
                    set_activity.set(String::new());
                }
                Err(e) => {
                    // Fields are kept for correction.
                    state.show_error(&e);
                }
            }
        });
    };

    view! {
        <form on:submit=on_submit class="signup-form">
            <div class="form-field">
                <label for="email">"Student Email"</label>
                <input
                    id="email"
                    type="email"
                    required
                    placeholder="your-email@mergington.edu"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
            </div>

            <div class="form-field">
                <label for="activity">"Select Activity"</label>
                <select
                    id="activity"
                    required
                    on:change=move |ev| set_activity.set(event_target_value(&ev))
                    prop:value=move || activity.get()
                >
                    <option value="">"-- Select an activity --"</option>

                    // Options come from the last fetched collection only.
                    {move || {
                        state.activities.get().0
                            .into_iter()
                            .map(|(name, _)| view! {
                                <option value=name.clone()>{name}</option>
                            })
                            .collect_view()
                    }}
                </select>
            </div>

            <button type="submit">"Sign Up"</button>
        </form>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn submit_button_is_never_disabled() {
        mount_to_body(|| {
            crate::state::provide_board_state();
            view! { <SignupForm /> }
        });

        let document = web_sys::window().unwrap().document().unwrap();
        let button = document
            .query_selector("button[type='submit']")
            .unwrap()
            .unwrap();

        // Overlapping submissions race; the form never locks itself.
        assert!(!button.has_attribute("disabled"));
    }
}
