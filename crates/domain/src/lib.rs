//! # veneer-domain
//!
//! Pure domain model for the veneer page interactivity layer.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, timestamps
//! - Define the **theme** preference and its resolution rules
//! - Define the **menu** open/closed state and the presentation derived from it
//! - Define the **scroll** visibility threshold and the leading-edge **throttle**
//! - Define the one-way **watch set** used by reveal and lazy-load features
//! - Define **observer** options, root margins and vertical intersection geometry
//! - Define the **lazy image** loading policy
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or browser crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;

pub mod lazy_image;
pub mod menu;
pub mod observer;
pub mod scroll;
pub mod theme;
pub mod throttle;
pub mod watch;
