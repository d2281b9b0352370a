//! Page behavior services.
//!
//! # Responsibility
//! - Turn DOM events and clock callbacks into state changes on ports.
//! - Keep each behavior independent; services never call each other except
//!   form submission reporting through the notification manager.

pub mod contact_service;
pub mod count_up;
pub mod navbar;
pub mod notification_service;
pub mod portfolio;
pub mod reveal;
pub mod smooth_scroll;
pub mod typing;
pub mod validator;
