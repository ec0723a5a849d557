//! Notifier registry factory.

use crate::infrastructure::config::settings::Config;
use crate::port::{LogNotifier, NotifierRegistry};

/// Build the notifier registry from configuration.
///
/// Always includes the log notifier.
pub fn build_notifier_registry(_config: &Config) -> NotifierRegistry {
    let mut registry = NotifierRegistry::new();
    registry.register(Box::new(LogNotifier));
    registry
}
