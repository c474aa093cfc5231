//! gui/mod.rs
//!
//! This folder contains ONLY frontend concerns:
//! - app state ('Resona')
//! - messages ('Message')
//! - update logic ('update()')
//! - the two view layouts ('view()' dispatches on settings.ui)
//! - subscriptions (playback polling, keyboard shortcuts)
//! - small UI helpers ('util')

pub(crate) mod state;
pub(crate) mod subscription;
pub(crate) mod update;
pub(crate) mod util;
pub(crate) mod view;

// Re-export the entry points main.rs needs.
pub(crate) use state::{Message, Resona};
pub(crate) use subscription::subscription;
pub(crate) use update::update;
pub(crate) use view::view;
