// src/query/debounce.rs - Debounced filter state

//! Search inputs hold two values: the immediate one the input displays and
//! a settled copy committed after the input has been quiet for the
//! configured delay. Queries read only the settled value; list pages reset
//! to page 1 when it changes.

use dioxus::prelude::*;

use crate::utils::sleep_ms;

/// Whether a scheduled commit is still the latest one. Every keystroke
/// bumps the generation; only the timer that still matches commits.
pub(crate) fn should_commit(current: u64, scheduled: u64) -> bool {
    current == scheduled
}

#[derive(Clone, Copy, PartialEq)]
pub struct Debounced {
    /// Per-keystroke value; bind the input to this.
    pub immediate: Signal<String>,
    /// Quiet-period value; feed queries from this.
    pub settled: Signal<String>,
    generation: Signal<u64>,
    delay_ms: u32,
}

pub fn use_debounced(delay_ms: u32) -> Debounced {
    Debounced {
        immediate: use_signal(String::new),
        settled: use_signal(String::new),
        generation: use_signal(|| 0u64),
        delay_ms,
    }
}

impl Debounced {
    pub fn set(&self, value: String) {
        let mut immediate = self.immediate;
        immediate.set(value.clone());

        let mut generation = self.generation;
        let scheduled = *generation.peek() + 1;
        generation.set(scheduled);

        let generation = self.generation;
        let mut settled = self.settled;
        let delay = self.delay_ms;
        spawn(async move {
            sleep_ms(delay).await;
            if should_commit(*generation.peek(), scheduled) && *settled.peek() != value {
                settled.set(value);
            }
        });
    }

    /// Commits immediately (e.g. an explicit "clear" button).
    pub fn set_now(&self, value: String) {
        let mut generation = self.generation;
        let next = *generation.peek() + 1;
        generation.set(next);
        let mut immediate = self.immediate;
        immediate.set(value.clone());
        let mut settled = self.settled;
        settled.set(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_generation_commits() {
        // Three keystrokes scheduled commits 1, 2, 3; only 3 is current.
        assert!(!should_commit(3, 1));
        assert!(!should_commit(3, 2));
        assert!(should_commit(3, 3));
    }
}
