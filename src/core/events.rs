use tokio::sync::broadcast::{self, error::RecvError, error::TryRecvError};
use tracing::{debug, warn};

const CHANGE_BUFFER: usize = 64;

/// What part of the stored state a mutation touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateChange {
    Username,
    Tier,
    Premium,
    Contract,
    Cart,
    Applying,
    Approved,
    /// The subscriber fell behind and must re-read everything.
    Resync,
}

impl StateChange {
    pub fn touches_work_list(self) -> bool {
        matches!(
            self,
            StateChange::Cart | StateChange::Applying | StateChange::Approved | StateChange::Resync
        )
    }
}

/// In-process broadcast of state changes between views sharing one store handle.
#[derive(Debug, Clone)]
pub struct ChangeBus {
    sender: broadcast::Sender<StateChange>,
}

impl Default for ChangeBus {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangeBus {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANGE_BUFFER);
        Self { sender }
    }

    pub fn publish(&self, change: StateChange) {
        match self.sender.send(change) {
            Ok(receivers) => debug!(?change, receivers, "published state change"),
            // nobody is listening
            Err(_) => debug!(?change, "state change dropped, no subscribers"),
        }
    }

    pub fn subscribe(&self) -> Subscription {
        Subscription {
            receiver: self.sender.subscribe(),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

/// A view's handle on the [`ChangeBus`]. Dropping it unsubscribes.
#[derive(Debug)]
pub struct Subscription {
    receiver: broadcast::Receiver<StateChange>,
}

impl Subscription {
    /// Wait for the next change. `None` once every bus handle is gone.
    pub async fn changed(&mut self) -> Option<StateChange> {
        match self.receiver.recv().await {
            Ok(change) => Some(change),
            Err(RecvError::Lagged(missed)) => {
                warn!(missed, "subscriber lagged, forcing resync");
                Some(StateChange::Resync)
            }
            Err(RecvError::Closed) => None,
        }
    }

    /// Non-blocking variant of [`Subscription::changed`].
    pub fn try_changed(&mut self) -> Option<StateChange> {
        match self.receiver.try_recv() {
            Ok(change) => Some(change),
            Err(TryRecvError::Lagged(missed)) => {
                warn!(missed, "subscriber lagged, forcing resync");
                Some(StateChange::Resync)
            }
            Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => None,
        }
    }

    /// Everything published since the last call.
    pub fn drain(&mut self) -> Vec<StateChange> {
        std::iter::from_fn(|| self.try_changed()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscribers_see_changes_in_order() {
        let bus = ChangeBus::new();
        let mut sub = bus.subscribe();
        bus.publish(StateChange::Cart);
        bus.publish(StateChange::Applying);
        assert_eq!(sub.drain(), vec![StateChange::Cart, StateChange::Applying]);
        assert!(sub.try_changed().is_none());
    }

    #[test]
    fn dropping_subscription_releases_it() {
        let bus = ChangeBus::new();
        let sub = bus.subscribe();
        assert_eq!(bus.subscriber_count(), 1);
        drop(sub);
        assert_eq!(bus.subscriber_count(), 0);
        bus.publish(StateChange::Tier);
    }

    #[test]
    fn lagging_subscriber_gets_resync() {
        let bus = ChangeBus::new();
        let mut sub = bus.subscribe();
        for _ in 0..(CHANGE_BUFFER + 5) {
            bus.publish(StateChange::Cart);
        }
        assert_eq!(sub.try_changed(), Some(StateChange::Resync));
    }
}
