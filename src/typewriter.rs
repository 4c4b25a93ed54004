// Typewriter headline effect: types each phrase a character at a time,
// holds it, erases it faster, and moves on to the next phrase, wrapping
// around forever.

use std::cell::RefCell;
use std::rc::Rc;

use crate::dom_helpers;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Document;

const PHRASES: [&str; 5] = [
    "AWS Expert",
    "Cloud Architect",
    "Serverless Specialist",
    "Infrastructure as Code",
    "AI Integration Expert",
];

pub const START_DELAY_MS: i32 = 1000;
pub const TYPE_DELAY_MS: i32 = 100;
pub const HOLD_DELAY_MS: i32 = 2000;
pub const ERASE_DELAY_MS: i32 = 50;
pub const NEXT_PHRASE_DELAY_MS: i32 = 500;

#[derive(Copy, Clone, Debug, PartialEq)]
enum Phase {
    Typing,
    Erasing,
}

/// Phrase-cycling state machine, separate from the DOM so the timing
/// behavior is testable. Each `tick` yields the text to display and the
/// delay until the next tick.
pub struct Typewriter {
    phrases: Vec<String>,
    phrase: usize,
    chars: usize,
    phase: Phase,
}

impl Typewriter {
    /// `phrases` must be non-empty.
    pub fn new(phrases: Vec<String>) -> Typewriter {
        Typewriter {
            phrases,
            phrase: 0,
            chars: 0,
            phase: Phase::Typing,
        }
    }

    pub fn tick(&mut self) -> (String, i32) {
        let phrase = &self.phrases[self.phrase];
        match self.phase {
            Phase::Typing => {
                self.chars += 1;
                let text: String = phrase.chars().take(self.chars).collect();
                if self.chars >= phrase.chars().count() {
                    self.phase = Phase::Erasing;
                    (text, HOLD_DELAY_MS)
                } else {
                    (text, TYPE_DELAY_MS)
                }
            }
            Phase::Erasing => {
                self.chars -= 1;
                let text: String = phrase.chars().take(self.chars).collect();
                if self.chars == 0 {
                    self.phrase = (self.phrase + 1) % self.phrases.len();
                    self.phase = Phase::Typing;
                    (text, NEXT_PHRASE_DELAY_MS)
                } else {
                    (text, ERASE_DELAY_MS)
                }
            }
        }
    }
}

pub fn install(document: &Document) -> Result<(), JsValue> {
    let element = match document.get_element_by_id("typed-text") {
        Some(element) => element,
        None => return Ok(()),
    };
    let machine = Rc::new(RefCell::new(Typewriter::new(
        PHRASES.iter().map(|s| s.to_string()).collect(),
    )));

    // Same self-referencing closure arrangement as the animation loop,
    // with setTimeout instead of requestAnimationFrame so each tick picks
    // its own delay.
    let callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let scheduled = callback.clone();
    *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let (text, delay) = machine.borrow_mut().tick();
        element.set_text_content(Some(&text));
        schedule(&scheduled, delay);
    }) as Box<dyn FnMut()>));

    schedule(&callback, START_DELAY_MS);
    Ok(())
}

fn schedule(callback: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>, delay_ms: i32) {
    if let Some(window) = dom_helpers::window() {
        if let Some(callback) = callback.borrow().as_ref() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                delay_ms,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine(phrases: &[&str]) -> Typewriter {
        Typewriter::new(phrases.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn types_holds_erases_and_advances() {
        let mut tw = machine(&["ab", "c"]);

        assert_eq!(tw.tick(), ("a".to_string(), TYPE_DELAY_MS));
        assert_eq!(tw.tick(), ("ab".to_string(), HOLD_DELAY_MS));
        assert_eq!(tw.tick(), ("a".to_string(), ERASE_DELAY_MS));
        assert_eq!(tw.tick(), ("".to_string(), NEXT_PHRASE_DELAY_MS));

        // Single-character phrase: completes immediately, then erases.
        assert_eq!(tw.tick(), ("c".to_string(), HOLD_DELAY_MS));
        assert_eq!(tw.tick(), ("".to_string(), NEXT_PHRASE_DELAY_MS));

        // Wrapped back to the first phrase.
        assert_eq!(tw.tick(), ("a".to_string(), TYPE_DELAY_MS));
    }

    #[test]
    fn full_cycle_tick_count_matches_phrase_lengths() {
        let phrases = ["Cloud Architect", "AWS Expert"];
        let mut tw = machine(&phrases);
        let mut ticks = 0;
        loop {
            tw.tick();
            ticks += 1;
            if tw.phrase == 0 && tw.chars == 0 && tw.phase == Phase::Typing {
                break;
            }
        }
        // Each phrase contributes one tick per character typed and one per
        // character erased.
        let expected: usize = phrases.iter().map(|p| p.chars().count() * 2).sum();
        assert_eq!(ticks, expected);
    }

    #[test]
    fn displayed_text_is_always_a_prefix() {
        let mut tw = machine(&["Serverless Specialist"]);
        for _ in 0..200 {
            let (text, _) = tw.tick();
            assert!("Serverless Specialist".starts_with(&text));
        }
    }
}
