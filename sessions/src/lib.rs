//! Client-side session core: remote authentication gateway, tri-state action
//! results, and a single-slot session cache.

pub mod domain;
pub mod outbound;

pub use domain::{Action, ActionStream, SessionAction, SessionService, User};
