use super::PlaygroundState;

/// Areas of [`PlaygroundState`] touched by one dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChangeSet {
    pub snapshot: bool,
    pub windows: bool,
    pub log: bool,
    pub view: bool,
    pub theme: bool,
    pub code: bool,
}

impl ChangeSet {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&PlaygroundState, &ChangeSet)>;

/// Callbacks run synchronously in registration order.
#[derive(Default)]
pub(super) struct Subscribers {
    next_id: u64,
    callbacks: Vec<(SubscriptionId, Callback)>,
}

impl Subscribers {
    pub(super) fn add(&mut self, callback: Callback) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.callbacks.push((id, callback));
        id
    }

    pub(super) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(existing, _)| *existing != id);
        self.callbacks.len() != before
    }

    pub(super) fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub(super) fn notify(&mut self, state: &PlaygroundState, changes: &ChangeSet) {
        for (_, callback) in &mut self.callbacks {
            callback(state, changes);
        }
    }
}
