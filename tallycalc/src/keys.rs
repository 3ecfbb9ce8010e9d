//! Keyboard bindings
//!
//! Typed characters are read from text events so `+`, `*` and `%` work
//! regardless of keyboard layout. Editing keys come from key events.

use egui::{Event, Key};
use tallycore::{Input, Operator};

pub const KEY_HELP: &[(&str, &str)] = &[
    ("0-9 .", "enter a number"),
    ("+ - * / %", "operators"),
    ("Enter =", "calculate"),
    ("Backspace", "delete last digit"),
    ("Delete", "clear entry"),
    ("Esc", "clear all"),
];

/// Input for a typed character.
pub fn input_for_char(c: char) -> Option<Input> {
    match c {
        '0'..='9' => Some(Input::Digit(c)),
        '.' | ',' => Some(Input::Point),
        '=' => Some(Input::Equals),
        _ => Operator::from_symbol(c).map(Input::Operator),
    }
}

/// Input for a non-text key.
pub fn input_for_key(key: Key) -> Option<Input> {
    match key {
        Key::Enter => Some(Input::Equals),
        Key::Backspace => Some(Input::Backspace),
        Key::Delete => Some(Input::ClearEntry),
        Key::Escape => Some(Input::ClearAll),
        _ => None,
    }
}

/// Translate this frame's keyboard events into calculator inputs, in order.
pub fn frame_inputs(ctx: &egui::Context) -> Vec<Input> {
    ctx.input(|i| {
        i.events
            .iter()
            .flat_map(|event| -> Vec<Input> {
                match event {
                    Event::Text(text) => text.chars().filter_map(input_for_char).collect(),
                    Event::Key {
                        key,
                        pressed: true,
                        modifiers,
                        ..
                    } if !modifiers.command => input_for_key(*key).into_iter().collect(),
                    _ => Vec::new(),
                }
            })
            .collect()
    })
}
