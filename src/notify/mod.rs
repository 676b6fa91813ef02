//! Notification facade.
//!
//! Pages raise a [`NotificationRequest`]; the [`Notifier`] translates it
//! into exactly one call on a [`NotificationSink`], selected by the variant.
//! The sink is the seam over whatever presentation layer renders the toast;
//! it is always an explicitly injected capability, never a module-global.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tracing::{error, info};

/// Presentation style of a notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Default,
    Success,
    Destructive,
}

impl Variant {
    /// Lenient parse: unrecognized tags map to `Default`.
    pub fn parse(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "success" => Self::Success,
            "destructive" => Self::Destructive,
            _ => Self::Default,
        }
    }
}

/// One notification to present, consumed once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRequest {
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub variant: Variant,
}

impl NotificationRequest {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            variant: Variant::Default,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }
}

/// The three operations the underlying presentation layer exposes.
pub trait NotificationSink: Send + Sync {
    fn neutral(&self, title: &str, description: Option<&str>);
    fn success(&self, title: &str, description: Option<&str>);
    fn error(&self, title: &str, description: Option<&str>);
}

/// Facade normalizing a [`NotificationRequest`] onto a sink.
#[derive(Clone)]
pub struct Notifier {
    sink: Arc<dyn NotificationSink>,
}

impl Notifier {
    pub fn new(sink: Arc<dyn NotificationSink>) -> Self {
        Self { sink }
    }

    /// Dispatch the request: exactly one sink call, chosen by the variant.
    /// Fire-and-forget; the sink owns presentation and dismissal.
    pub fn notify(&self, request: NotificationRequest) {
        let description = request.description.as_deref();
        match request.variant {
            Variant::Destructive => self.sink.error(&request.title, description),
            Variant::Success => self.sink.success(&request.title, description),
            Variant::Default => self.sink.neutral(&request.title, description),
        }
    }

    pub fn info(&self, title: impl Into<String>) {
        self.notify(NotificationRequest::new(title));
    }

    pub fn success(&self, title: impl Into<String>) {
        self.notify(NotificationRequest::new(title).with_variant(Variant::Success));
    }

    pub fn error(&self, title: impl Into<String>) {
        self.notify(NotificationRequest::new(title).with_variant(Variant::Destructive));
    }
}

/// Sink that renders notifications as structured tracing events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn neutral(&self, title: &str, description: Option<&str>) {
        info!(title = title, description = description.unwrap_or(""), "notification");
    }

    fn success(&self, title: &str, description: Option<&str>) {
        info!(
            title = title,
            description = description.unwrap_or(""),
            "notification (success)"
        );
    }

    fn error(&self, title: &str, description: Option<&str>) {
        error!(
            title = title,
            description = description.unwrap_or(""),
            "notification (error)"
        );
    }
}

/// A notification recorded by [`MemorySink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedNotification {
    pub variant: Variant,
    pub title: String,
    pub description: Option<String>,
}

/// Sink that records notifications in memory, for tests and headless
/// embedders.
#[derive(Default)]
pub struct MemorySink {
    recorded: Mutex<Vec<RecordedNotification>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recorded(&self) -> Vec<RecordedNotification> {
        self.recorded
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    fn record(&self, variant: Variant, title: &str, description: Option<&str>) {
        self.recorded
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(RecordedNotification {
                variant,
                title: title.to_string(),
                description: description.map(str::to_string),
            });
    }
}

impl NotificationSink for MemorySink {
    fn neutral(&self, title: &str, description: Option<&str>) {
        self.record(Variant::Default, title, description);
    }

    fn success(&self, title: &str, description: Option<&str>) {
        self.record(Variant::Success, title, description);
    }

    fn error(&self, title: &str, description: Option<&str>) {
        self.record(Variant::Destructive, title, description);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destructive_request_fires_exactly_the_error_call() {
        let sink = Arc::new(MemorySink::new());
        let notifier = Notifier::new(sink.clone());

        notifier.notify(
            NotificationRequest::new("Erreur").with_variant(Variant::Destructive),
        );

        let recorded = sink.recorded();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].variant, Variant::Destructive);
        assert_eq!(recorded[0].title, "Erreur");
    }

    #[test]
    fn each_variant_maps_to_one_call() {
        let sink = Arc::new(MemorySink::new());
        let notifier = Notifier::new(sink.clone());

        notifier.info("a");
        notifier.success("b");
        notifier.error("c");

        let recorded = sink.recorded();
        assert_eq!(recorded.len(), 3);
        assert_eq!(recorded[0].variant, Variant::Default);
        assert_eq!(recorded[1].variant, Variant::Success);
        assert_eq!(recorded[2].variant, Variant::Destructive);
    }

    #[test]
    fn unrecognized_variant_tags_parse_as_default() {
        assert_eq!(Variant::parse("success"), Variant::Success);
        assert_eq!(Variant::parse("DESTRUCTIVE"), Variant::Destructive);
        assert_eq!(Variant::parse("warning"), Variant::Default);
        assert_eq!(Variant::parse(""), Variant::Default);
    }

    #[test]
    fn memory_sink_survives_a_poisoned_lock() {
        let sink = Arc::new(MemorySink::new());
        let poisoner = sink.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.recorded.lock().unwrap();
            panic!("poison the sink lock");
        })
        .join();

        sink.neutral("toujours là", None);
        assert_eq!(sink.recorded().len(), 1);
    }

    #[test]
    fn description_is_forwarded() {
        let sink = Arc::new(MemorySink::new());
        let notifier = Notifier::new(sink.clone());

        notifier.notify(
            NotificationRequest::new("Enregistré")
                .with_description("Le véhicule a été mis à jour")
                .with_variant(Variant::Success),
        );

        let recorded = sink.recorded();
        assert_eq!(
            recorded[0].description.as_deref(),
            Some("Le véhicule a été mis à jour")
        );
    }
}
