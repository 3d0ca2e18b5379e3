//! State Management
//!
//! Global board state shared by all components.

pub mod global;

pub use global::{provide_board_state, Activity, ActivityMap, BoardState, StatusKind, StatusMessage};
