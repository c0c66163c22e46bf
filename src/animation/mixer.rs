use slotmap::SlotMap;

use crate::animation::interval::LerpInterval;
use crate::scene::{NodeKey, NodeState};

#[derive(Debug)]
struct MixerEntry {
    interval: LerpInterval,
    node: NodeKey,
    time: f32,
}

/// Plays lerp intervals against a pool of nodes.
///
/// Intervals are stepped in the order they were played. Each finishes (end
/// values applied) on the update its time reaches the duration, then is dropped.
#[derive(Debug, Default)]
pub struct LerpMixer {
    entries: Vec<MixerEntry>,
}

impl LerpMixer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Starts playing `interval` on `node` from time zero.
    pub fn play(&mut self, interval: LerpInterval, node: NodeKey) {
        log::debug!("LerpMixer: play '{}' on {:?}", interval.name(), node);
        self.entries.push(MixerEntry {
            interval,
            node,
            time: 0.0,
        });
    }

    /// Advances every playing interval by `dt` seconds.
    pub fn update(&mut self, dt: f32, nodes: &mut SlotMap<NodeKey, NodeState>) {
        self.entries.retain_mut(|entry| {
            let Some(node) = nodes.get_mut(entry.node) else {
                log::warn!(
                    "LerpMixer: node {:?} for '{}' no longer exists, dropping",
                    entry.node,
                    entry.interval.name()
                );
                return false;
            };

            entry.time += dt;
            if entry.time >= entry.interval.duration() {
                entry.interval.finish(node);
                return false;
            }

            entry.interval.step(entry.time, node);
            true
        });
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stops all intervals without applying their end values.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
