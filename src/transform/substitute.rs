use regex::{Captures, Regex};
use std::borrow::Cow;

use crate::error::{TexthooksError, TexthooksResult};
use crate::registry::CharacterClass;

/// Replaces every character of one or more classes with its canonical text.
#[derive(Debug, Clone)]
pub struct Substitution {
    classes: Vec<CharacterClass>,
    pattern: Option<Regex>,
}

impl Substitution {
    pub fn new(classes: Vec<CharacterClass>) -> TexthooksResult<Self> {
        for (idx, class) in classes.iter().enumerate() {
            for other in &classes[idx + 1..] {
                if let Some(c) = class.chars().iter().find(|c| other.contains(**c)) {
                    return Err(TexthooksError::usage(format!(
                        "U+{:04X} is listed as both {} and {}",
                        u32::from(*c),
                        class.category(),
                        other.category()
                    )));
                }
            }
        }

        let alternatives: String = classes
            .iter()
            .flat_map(|class| class.chars())
            .map(|c| format!("\\x{{{:X}}}", u32::from(*c)))
            .collect();
        let pattern = if alternatives.is_empty() {
            None
        } else {
            Some(Regex::new(&format!("[{}]", alternatives))?)
        };

        Ok(Self { classes, pattern })
    }

    pub fn is_empty(&self) -> bool {
        self.pattern.is_none()
    }

    pub fn replacement_for(&self, c: char) -> Option<&'static str> {
        self.classes.iter().find_map(|class| class.replacement_for(c))
    }

    /// Width of the text `c` is rewritten to; characters outside every class
    /// keep a width of 1.
    pub fn width(&self, c: char) -> usize {
        self.replacement_for(c)
            .map(|text| text.chars().count())
            .unwrap_or(1)
    }

    pub fn apply<'a>(&self, line: &'a str) -> Cow<'a, str> {
        match &self.pattern {
            None => Cow::Borrowed(line),
            Some(pattern) => pattern.replace_all(line, |caps: &Captures<'_>| {
                let matched = &caps[0];
                matched
                    .chars()
                    .next()
                    .and_then(|c| self.replacement_for(c))
                    .unwrap_or(matched)
                    .to_string()
            }),
        }
    }
}
