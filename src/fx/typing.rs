//! Typewriter headline effect.
//!
//! Cycles through a phrase list, typing forward one character at a time and
//! deleting back, with a long hold on the full phrase and a short one before
//! the next phrase starts. Each tick returns the text to show and the delay
//! until the next tick, so the scheduling stays outside.

const TYPE_DELAY_MS: u32 = 100;
const DELETE_DELAY_MS: u32 = 50;
const HOLD_FULL_MS: u32 = 2000;
const HOLD_EMPTY_MS: u32 = 500;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeStep {
    pub text: String,
    pub delay_ms: u32,
}

#[derive(Clone, Debug)]
pub struct TypingEffect {
    phrases: &'static [&'static str],
    phrase: usize,
    chars: usize,
    deleting: bool,
}

impl TypingEffect {
    /// The phrase list must be non-empty and free of empty phrases.
    pub fn new(phrases: &'static [&'static str]) -> Self {
        debug_assert!(phrases.iter().all(|p| !p.is_empty()));
        Self {
            phrases,
            phrase: 0,
            chars: 0,
            deleting: false,
        }
    }

    pub fn tick(&mut self) -> TypeStep {
        let current = self.phrases[self.phrase];
        let len = current.chars().count();

        let mut delay_ms = if self.deleting {
            self.chars -= 1;
            DELETE_DELAY_MS
        } else {
            self.chars += 1;
            TYPE_DELAY_MS
        };

        if !self.deleting && self.chars == len {
            self.deleting = true;
            delay_ms = HOLD_FULL_MS;
        } else if self.deleting && self.chars == 0 {
            self.deleting = false;
            self.phrase = (self.phrase + 1) % self.phrases.len();
            delay_ms = HOLD_EMPTY_MS;
        }

        TypeStep {
            text: current.chars().take(self.chars).collect(),
            delay_ms,
        }
    }
}
