//! Reusable UI components

mod therapist_card;
mod therapist_detail;

pub use therapist_card::*;
pub use therapist_detail::*;
