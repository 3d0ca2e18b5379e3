//! Activity Card Component
//!
//! Displays a single activity: title, description, schedule, availability,
//! and the participant list with a removal control per row.

use leptos::*;

use crate::api;
use crate::state::global::{Activity, BoardState};

/// Card for one activity
#[component]
pub fn ActivityCard(
    /// Activity name (the collection key)
    name: String,
    activity: Activity,
) -> impl IntoView {
    let spots_left = activity.spots_left();
    let participants = activity.participants.clone();
    let row_activity = name.clone();

    view! {
        <div class="activity-card">
            <h4>{name}</h4>
            <p>{activity.description.clone()}</p>
            <p>
                <strong>"Schedule: "</strong>
                {activity.schedule.clone()}
            </p>
            <p>
                <strong>"Availability: "</strong>
                {format!("{} spots left", spots_left)}
            </p>

            <div class="participants-section">
                <h5>"Participants"</h5>
                <ul class="participants-list">
                    {match participant_rows(&participants) {
                        ParticipantRows::Sentinel => view! {
                            <li class="no-participants">"No participants yet"</li>
                        }.into_view(),
                        ParticipantRows::Rows(emails) => emails
                            .into_iter()
                            .map(|email| view! {
                                <ParticipantRow activity=row_activity.clone() email=email />
                            })
                            .collect_view(),
                    }}
                </ul>
            </div>
        </div>
    }
}

/// What the participant list renders: the sentinel row for an empty list,
/// otherwise one removable row per participant in server order.
#[derive(Debug, PartialEq)]
enum ParticipantRows {
    Sentinel,
    Rows(Vec<String>),
}

fn participant_rows(participants: &[String]) -> ParticipantRows {
    if participants.is_empty() {
        ParticipantRows::Sentinel
    } else {
        ParticipantRows::Rows(participants.to_vec())
    }
}

/// One participant with its unregister button.
///
/// The click handler closes over this row's activity and email; a refresh
/// rebuilds the card tree, so stale handlers go away with their rows.
#[component]
fn ParticipantRow(activity: String, email: String) -> impl IntoView {
    let state = use_context::<BoardState>().expect("BoardState not found");
    let email_label = email.clone();

    let on_remove = move |_| {
        let activity = activity.clone();
        let email = email.clone();
        spawn_local(async move {
            match api::unregister(&activity, &email).await {
                Ok(_) => {
                    // Re-fetch so the participant list and availability
                    // reflect the removal.
                    state.refresh().await;
                }
                Err(e) => state.show_error(&e),
            }
        });
    };

    view! {
        <li>
            <span class="participant-email">{email_label}</span>
            <button class="delete-btn" title="Unregister" on:click=on_remove>
                "✖"
            </button>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_renders_only_the_sentinel_row() {
        assert_eq!(participant_rows(&[]), ParticipantRows::Sentinel);
    }

    #[test]
    fn participants_render_one_removable_row_each_in_order() {
        let participants = vec!["b@x.com".to_string(), "a@x.com".to_string()];

        assert_eq!(
            participant_rows(&participants),
            ParticipantRows::Rows(participants)
        );
    }
}
