//! UI Components
//!
//! Reusable Leptos components for the activity board.

pub mod activity_card;
pub mod loading;
pub mod signup_form;
pub mod toast;

pub use activity_card::ActivityCard;
pub use loading::Loading;
pub use signup_form::SignupForm;
pub use toast::StatusToast;
