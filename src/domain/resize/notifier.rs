use super::types::{Activation, EmbeddingContext, FrameMessage, Trigger, WILDCARD_ORIGIN};
use crate::debug_log;
use crate::domain::config::FrameConfig;
use crate::domain::error::FrameError;
use crate::platform::Platform;
use crate::ports::{ChangeCallback, ChangeSignalPort, DocumentPort, LoggerPort, MessageSinkPort};
use std::rc::Rc;

/// Relays the content region's size to the hosting window.
///
/// Every trigger measures the region again and posts one message; nothing is
/// cached, debounced or coalesced.
pub struct ResizeNotifier {
    document: Rc<dyn DocumentPort>,
    sink: Rc<dyn MessageSinkPort>,
    logger: &'static dyn LoggerPort,
}

impl ResizeNotifier {
    pub fn new(
        document: Rc<dyn DocumentPort>,
        sink: Rc<dyn MessageSinkPort>,
        logger: &'static dyn LoggerPort,
    ) -> Self {
        Self {
            document,
            sink,
            logger,
        }
    }

    pub fn dispatch(&self, trigger: Trigger) -> Result<FrameMessage, FrameError> {
        let dimensions = self.document.content_size();
        let message = FrameMessage::resize(dimensions);

        debug_log!(
            self.logger,
            "[resize] {} -> {}x{}",
            trigger.as_str(),
            dimensions.width,
            dimensions.height
        );

        self.sink.send(&message, WILDCARD_ORIGIN)?;
        Ok(message)
    }

    /// Signal callback entry point. Delivery failures are logged and dropped.
    pub fn handle(&self, trigger: Trigger) {
        if let Err(e) = self.dispatch(trigger) {
            self.logger
                .error(&format!("Failed to post resize message: {}", e));
        }
    }
}

/// Activates the relay when the page runs inside another window.
///
/// A top-level page is left untouched: no body class, no subscriptions.
/// An error means nothing was activated; a trigger that cannot be observed
/// while others can is logged and left out of the returned activation.
pub fn install(
    embedding: EmbeddingContext,
    config: &FrameConfig,
    document: Rc<dyn DocumentPort>,
    signals: &dyn ChangeSignalPort,
    sink: Rc<dyn MessageSinkPort>,
    platform: &Platform,
) -> Result<Activation, FrameError> {
    if !embedding.is_embedded() {
        return Ok(Activation::Dormant);
    }

    let logger = platform.logger();
    let notifier = Rc::new(ResizeNotifier::new(document.clone(), sink, logger));
    let mut triggers = Vec::with_capacity(Trigger::ALL.len());
    let mut first_error = None;

    for trigger in Trigger::ALL {
        let notifier = Rc::clone(&notifier);
        let callback: ChangeCallback = Rc::new(move |fired: Trigger| notifier.handle(fired));
        match signals.subscribe(trigger, callback) {
            Ok(()) => triggers.push(trigger),
            Err(e) => {
                logger.warn(&format!("Cannot observe {} signals: {}", trigger.as_str(), e));
                first_error.get_or_insert(e);
            }
        }
    }

    if triggers.is_empty() {
        if let Some(e) = first_error {
            return Err(e);
        }
    }

    if let Err(e) = document.add_body_class(&config.body_class) {
        logger.warn(&format!("Failed to mark embedded body: {}", e));
    }

    Ok(Activation::Active { triggers })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::native::{FixedDocument, ManualSignals, RecordingSink};
    use crate::domain::resize::Dimensions;
    use serde_json::json;

    struct Harness {
        document: Rc<FixedDocument>,
        signals: ManualSignals,
        sink: Rc<RecordingSink>,
    }

    impl Harness {
        fn new(width: u32, height: u32) -> Self {
            Self {
                document: Rc::new(FixedDocument::new(Dimensions::new(width, height))),
                signals: ManualSignals::new(),
                sink: Rc::new(RecordingSink::new()),
            }
        }

        fn install(&self, embedding: EmbeddingContext) -> Activation {
            install(
                embedding,
                &FrameConfig::default(),
                self.document.clone(),
                &self.signals,
                self.sink.clone(),
                &Platform::new(),
            )
            .unwrap()
        }
    }

    #[test]
    fn test_top_level_page_is_dormant() {
        let harness = Harness::new(400, 300);

        let activation = harness.install(EmbeddingContext::TopLevel);

        assert_eq!(activation, Activation::Dormant);
        assert_eq!(harness.signals.subscription_count(), 0);
        assert!(harness.document.body_classes().is_empty());
    }

    #[test]
    fn test_top_level_page_never_posts() {
        let harness = Harness::new(400, 300);
        harness.install(EmbeddingContext::TopLevel);

        harness.document.set_size(Dimensions::new(400, 500));
        for trigger in Trigger::ALL {
            harness.signals.fire(trigger);
        }

        assert!(harness.sink.messages().is_empty());
    }

    #[test]
    fn test_embedded_page_marks_body_and_subscribes_all_triggers() {
        let harness = Harness::new(400, 300);

        let activation = harness.install(EmbeddingContext::Embedded);

        assert_eq!(
            activation,
            Activation::Active {
                triggers: Trigger::ALL.to_vec()
            }
        );
        assert_eq!(harness.document.body_classes(), vec!["view-in-mfe"]);
        for trigger in Trigger::ALL {
            assert_eq!(harness.signals.subscribers(trigger), 1);
        }
        assert!(harness.sink.messages().is_empty());
    }

    #[test]
    fn test_load_then_mutation_scenario() {
        let harness = Harness::new(400, 300);
        harness.install(EmbeddingContext::Embedded);

        harness.signals.fire(Trigger::Load);
        assert_eq!(harness.sink.messages().len(), 1);

        harness.document.set_size(Dimensions::new(400, 500));
        harness.signals.fire(Trigger::Mutation);

        let sent: Vec<serde_json::Value> = harness
            .sink
            .messages()
            .iter()
            .map(|(message, _)| serde_json::to_value(message).unwrap())
            .collect();
        assert_eq!(
            sent,
            vec![
                json!({ "type": "plugin.resize", "payload": { "width": 400, "height": 300 } }),
                json!({ "type": "plugin.resize", "payload": { "width": 400, "height": 500 } }),
            ]
        );
    }

    #[test]
    fn test_resize_signal_reports_current_size() {
        let harness = Harness::new(200, 100);
        harness.install(EmbeddingContext::Embedded);

        harness.document.set_size(Dimensions::new(320, 180));
        harness.signals.fire(Trigger::Resize);

        assert_eq!(
            harness.sink.messages(),
            vec![(
                FrameMessage::Resize(Dimensions::new(320, 180)),
                "*".to_string()
            )]
        );
    }

    #[test]
    fn test_simultaneous_triggers_are_not_coalesced() {
        let harness = Harness::new(50, 60);
        harness.install(EmbeddingContext::Embedded);

        harness.signals.fire(Trigger::Mutation);
        harness.signals.fire(Trigger::Load);
        harness.signals.fire(Trigger::Resize);

        let messages = harness.sink.messages();
        assert_eq!(messages.len(), 3);
        assert!(messages
            .iter()
            .all(|(m, _)| *m == FrameMessage::Resize(Dimensions::new(50, 60))));
    }

    #[test]
    fn test_target_origin_is_always_wildcard() {
        let harness = Harness::new(1, 1);
        harness.install(EmbeddingContext::Embedded);

        for trigger in Trigger::ALL {
            harness.signals.fire(trigger);
        }

        assert!(harness
            .sink
            .messages()
            .iter()
            .all(|(_, origin)| origin == WILDCARD_ORIGIN));
    }

    #[test]
    fn test_custom_body_class() {
        let harness = Harness::new(1, 1);
        let config = FrameConfig {
            body_class: "in-frame".to_string(),
            ..FrameConfig::default()
        };

        install(
            EmbeddingContext::Embedded,
            &config,
            harness.document.clone(),
            &harness.signals,
            harness.sink.clone(),
            &Platform::new(),
        )
        .unwrap();

        assert_eq!(harness.document.body_classes(), vec!["in-frame"]);
    }

    #[test]
    fn test_sink_failure_is_swallowed_by_handle() {
        let document = Rc::new(FixedDocument::new(Dimensions::new(10, 10)));
        let sink = Rc::new(RecordingSink::failing());
        let notifier = ResizeNotifier::new(document, sink.clone(), Platform::new().logger());

        assert!(notifier.dispatch(Trigger::Load).is_err());
        notifier.handle(Trigger::Load);
        assert!(sink.messages().is_empty());
    }

    #[test]
    fn test_partial_subscription_failure_keeps_working_triggers() {
        let harness = Harness::new(400, 300);
        let signals = ManualSignals::rejecting(&[Trigger::Resize]);

        let activation = install(
            EmbeddingContext::Embedded,
            &FrameConfig::default(),
            harness.document.clone(),
            &signals,
            harness.sink.clone(),
            &Platform::new(),
        )
        .unwrap();

        assert_eq!(
            activation,
            Activation::Active {
                triggers: vec![Trigger::Mutation, Trigger::Load]
            }
        );
        assert_eq!(harness.document.body_classes(), vec!["view-in-mfe"]);
        assert_eq!(signals.subscription_count(), 2);

        signals.fire(Trigger::Load);
        assert_eq!(
            harness.sink.messages(),
            vec![(FrameMessage::Resize(Dimensions::new(400, 300)), "*".to_string())]
        );
    }

    #[test]
    fn test_failed_install_leaves_nothing_running() {
        let harness = Harness::new(400, 300);
        let signals = ManualSignals::rejecting(&Trigger::ALL);

        let result = install(
            EmbeddingContext::Embedded,
            &FrameConfig::default(),
            harness.document.clone(),
            &signals,
            harness.sink.clone(),
            &Platform::new(),
        );

        assert!(matches!(result, Err(FrameError::Dom(_))));
        assert!(harness.document.body_classes().is_empty());
        assert_eq!(signals.subscription_count(), 0);

        for trigger in Trigger::ALL {
            signals.fire(trigger);
        }
        assert!(harness.sink.messages().is_empty());
    }

    #[test]
    fn test_missing_body_does_not_block_activation() {
        let document = Rc::new(FixedDocument::without_body(Dimensions::new(30, 40)));
        let signals = ManualSignals::new();
        let sink = Rc::new(RecordingSink::new());

        let activation = install(
            EmbeddingContext::Embedded,
            &FrameConfig::default(),
            document.clone(),
            &signals,
            sink.clone(),
            &Platform::new(),
        )
        .unwrap();

        assert!(activation.is_active());
        signals.fire(Trigger::Resize);
        assert_eq!(sink.messages().len(), 1);
    }
}
