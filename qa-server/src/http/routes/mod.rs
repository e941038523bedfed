//! Route handlers organized by resource

pub mod answers;
pub mod health;
pub mod questions;
