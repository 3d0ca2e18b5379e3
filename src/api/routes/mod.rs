//! API Routes
//!
//! Route handlers organized by functionality.

pub mod activities;
pub mod health;
pub mod registration;
