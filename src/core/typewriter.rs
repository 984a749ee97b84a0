//! Typing animation progression
//!
//! A [`Typewriter`] reveals a string one character at a time. The UI
//! component drives it from a timer; this module only knows how far along
//! the animation is. It types once and stops; replaying means building a
//! fresh one.

use std::time::Duration;

/// Animation settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterOptions {
    /// Delay between typed characters
    pub delay: Duration,
    /// Start typing as soon as the component mounts
    pub auto_start: bool,
}

impl Default for TypewriterOptions {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(50),
            auto_start: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    text: &'static str,
    /// Number of characters currently shown
    shown: usize,
    total: usize,
    options: TypewriterOptions,
}

impl Typewriter {
    pub fn new(text: &'static str, options: TypewriterOptions) -> Self {
        Self {
            text,
            shown: 0,
            total: text.chars().count(),
            options,
        }
    }

    /// Reveal one more character.
    ///
    /// Returns `false` once the whole text is already shown.
    pub fn tick(&mut self) -> bool {
        if self.is_done() {
            return false;
        }
        self.shown += 1;
        true
    }

    /// The prefix revealed so far
    pub fn visible(&self) -> &'static str {
        match self.text.char_indices().nth(self.shown) {
            Some((idx, _)) => &self.text[..idx],
            None => self.text,
        }
    }

    pub fn is_done(&self) -> bool {
        self.shown >= self.total
    }

    /// Delay before the next tick should fire
    pub fn next_delay(&self) -> Duration {
        self.options.delay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_end(tw: &mut Typewriter) -> usize {
        let mut ticks = 0;
        while tw.tick() {
            ticks += 1;
            assert!(ticks < 10_000, "animation never finished");
        }
        ticks
    }

    #[test]
    fn test_default_options() {
        let opts = TypewriterOptions::default();
        assert_eq!(opts.delay, Duration::from_millis(50));
        assert!(opts.auto_start);
    }

    #[test]
    fn test_reveals_one_char_per_tick() {
        let mut tw = Typewriter::new("Hey", TypewriterOptions::default());
        assert_eq!(tw.visible(), "");
        tw.tick();
        assert_eq!(tw.visible(), "H");
        tw.tick();
        assert_eq!(tw.visible(), "He");
        tw.tick();
        assert_eq!(tw.visible(), "Hey");
        assert!(tw.is_done());
        assert!(!tw.tick());
        assert_eq!(tw.visible(), "Hey");
    }

    #[test]
    fn test_tick_count_matches_length() {
        let text = "Transform Your Vision Into Reality";
        let mut tw = Typewriter::new(text, TypewriterOptions::default());
        assert_eq!(run_to_end(&mut tw), text.chars().count());
        assert_eq!(tw.visible(), text);
    }

    #[test]
    fn test_multibyte_characters() {
        let mut tw = Typewriter::new("né✓", TypewriterOptions::default());
        tw.tick();
        tw.tick();
        assert_eq!(tw.visible(), "né");
        tw.tick();
        assert_eq!(tw.visible(), "né✓");
    }

    #[test]
    fn test_empty_text_is_done() {
        let mut tw = Typewriter::new("", TypewriterOptions::default());
        assert!(tw.is_done());
        assert!(!tw.tick());
        assert_eq!(tw.visible(), "");
    }

    #[test]
    fn test_delay_comes_from_options() {
        let opts = TypewriterOptions {
            delay: Duration::from_millis(20),
            ..Default::default()
        };
        let tw = Typewriter::new("ab", opts);
        assert_eq!(tw.next_delay(), Duration::from_millis(20));
    }
}
