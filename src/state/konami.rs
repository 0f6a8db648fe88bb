//! Key-sequence matcher for the easter egg.

#[cfg(test)]
#[path = "konami_test.rs"]
mod konami_test;

/// `KeyboardEvent.key` values, in order.
pub const KONAMI_SEQUENCE: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "b",
    "a",
];

/// Markup swapped into the terminal region while the easter egg runs.
pub const EASTER_EGG_HTML: &str = r#"<p class="terminal-line"><span class="prompt">$</span> sudo make me a sandwich</p>
<p style="color: #00ff00;">&#10003; Sandwich made successfully!</p>
<p style="color: #cccccc; margin-top: 1rem;">&#127881; You found the easter egg. The Konami code lives on.</p>"#;

/// Cursor into `KONAMI_SEQUENCE`.
///
/// A mismatch resets to zero outright; the offending key is not re-tested
/// against the start of the sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KonamiTracker {
    cursor: usize,
}

impl KonamiTracker {
    /// Feed one key. Returns `true` exactly when the sequence completes.
    pub fn press(&mut self, key: &str) -> bool {
        if KONAMI_SEQUENCE.get(self.cursor) != Some(&key) {
            self.cursor = 0;
            return false;
        }
        self.cursor += 1;
        if self.cursor == KONAMI_SEQUENCE.len() {
            self.cursor = 0;
            return true;
        }
        false
    }

    pub fn progress(&self) -> usize {
        self.cursor
    }
}
