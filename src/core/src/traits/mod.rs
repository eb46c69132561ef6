//! Shared traits for the admin console

pub mod notifier;

pub use notifier::Notifier;
