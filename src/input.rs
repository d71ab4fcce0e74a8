/// Held-key bookkeeping for terminal input.
///
/// Terminals differ in what they report.  With keyboard enhancement a key
/// sends Press, Repeat and Release, so held state is exact.  Classic
/// terminals only send a press per OS auto-repeat and nothing on release,
/// so a key has to be assumed held for a while after it was last seen.
use std::collections::HashMap;
use std::hash::Hash;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoldPolicy {
    /// Held from press until the matching release.
    UntilRelease,
    /// Held for this many frames after the last press or repeat.
    Window(u64),
}

/// Tracks, per key, the frame it was last seen down.
#[derive(Clone, Debug)]
pub struct HeldKeys<K> {
    policy: HoldPolicy,
    last_seen: HashMap<K, u64>,
}

impl<K: Eq + Hash> HeldKeys<K> {
    pub fn new(policy: HoldPolicy) -> Self {
        HeldKeys {
            policy,
            last_seen: HashMap::new(),
        }
    }

    pub fn policy(&self) -> HoldPolicy {
        self.policy
    }

    /// Record a press.  Returns true if the key was not already held, i.e.
    /// this press is a new key-down rather than an auto-repeat.
    pub fn press(&mut self, key: K, frame: u64) -> bool {
        let fresh = !self.is_held(&key, frame);
        self.last_seen.insert(key, frame);
        fresh
    }

    pub fn repeat(&mut self, key: K, frame: u64) {
        self.last_seen.insert(key, frame);
    }

    pub fn release(&mut self, key: &K) {
        self.last_seen.remove(key);
    }

    pub fn is_held(&self, key: &K, frame: u64) -> bool {
        let Some(&last) = self.last_seen.get(key) else {
            return false;
        };
        match self.policy {
            HoldPolicy::UntilRelease => true,
            HoldPolicy::Window(frames) => frame.saturating_sub(last) <= frames,
        }
    }

    pub fn any_held(&self, keys: &[K], frame: u64) -> bool {
        keys.iter().any(|k| self.is_held(k, frame))
    }
}
