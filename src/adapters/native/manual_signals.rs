use crate::domain::error::FrameError;
use crate::domain::resize::Trigger;
use crate::ports::{ChangeCallback, ChangeSignalPort};
use std::cell::RefCell;

/// Signal source fired explicitly with [`ManualSignals::fire`].
#[derive(Default)]
pub struct ManualSignals {
    subscriptions: RefCell<Vec<(Trigger, ChangeCallback)>>,
    rejected: Vec<Trigger>,
}

impl ManualSignals {
    pub fn new() -> Self {
        Self::default()
    }

    /// A source that refuses subscriptions for every trigger in `triggers`.
    pub fn rejecting(triggers: &[Trigger]) -> Self {
        Self {
            subscriptions: RefCell::new(Vec::new()),
            rejected: triggers.to_vec(),
        }
    }

    pub fn fire(&self, trigger: Trigger) {
        let callbacks: Vec<ChangeCallback> = self
            .subscriptions
            .borrow()
            .iter()
            .filter(|(t, _)| *t == trigger)
            .map(|(_, callback)| callback.clone())
            .collect();

        for callback in callbacks {
            callback(trigger);
        }
    }

    pub fn subscription_count(&self) -> usize {
        self.subscriptions.borrow().len()
    }

    pub fn subscribers(&self, trigger: Trigger) -> usize {
        self.subscriptions
            .borrow()
            .iter()
            .filter(|(t, _)| *t == trigger)
            .count()
    }
}

impl ChangeSignalPort for ManualSignals {
    fn subscribe(&self, trigger: Trigger, callback: ChangeCallback) -> Result<(), FrameError> {
        if self.rejected.contains(&trigger) {
            return Err(FrameError::dom(format!(
                "cannot observe {} signals",
                trigger.as_str()
            )));
        }
        self.subscriptions.borrow_mut().push((trigger, callback));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_fire_reaches_matching_subscribers_only() {
        let signals = ManualSignals::new();
        let hits = Rc::new(Cell::new(0));

        let counter = hits.clone();
        signals
            .subscribe(Trigger::Load, Rc::new(move |_: Trigger| counter.set(counter.get() + 1)))
            .unwrap();

        signals.fire(Trigger::Mutation);
        assert_eq!(hits.get(), 0);
        signals.fire(Trigger::Load);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_rejecting_source() {
        let signals = ManualSignals::rejecting(&[Trigger::Resize]);
        assert!(signals.subscribe(Trigger::Resize, Rc::new(|_: Trigger| {})).is_err());
        assert!(signals.subscribe(Trigger::Load, Rc::new(|_: Trigger| {})).is_ok());
        assert_eq!(signals.subscription_count(), 1);
    }
}
