use regex::Regex;
use std::borrow::Cow;

use crate::error::{TexthooksError, TexthooksResult};

const VALUE_TOKEN: &str = "$VALUE";

/// A `prefix` followed by a word, rewritten through `format`.
///
/// `issue:12` with format `[#$VALUE](https://example.com/issues/$VALUE)`
/// becomes `[#12](https://example.com/issues/12)`.
#[derive(Debug, Clone)]
pub struct Macro {
    format: String,
    pattern: Regex,
}

impl Macro {
    pub fn new(prefix: impl Into<String>, format: impl Into<String>) -> TexthooksResult<Self> {
        let prefix: String = prefix.into();
        if prefix.is_empty() {
            return Err(TexthooksError::usage("--macro: PREFIX must not be empty"));
        }
        let pattern = Regex::new(&format!(r"{}(\w+)", regex::escape(&prefix)))?;

        Ok(Self {
            format: format.into(),
            pattern,
        })
    }

    pub fn expand<'a>(&self, line: &'a str) -> Cow<'a, str> {
        let mut expanded = String::new();
        let mut last = 0;
        let mut pos = 0;
        let mut matched = false;

        while let Some(caps) = self.pattern.captures_at(line, pos) {
            let (Some(whole), Some(value)) = (caps.get(0), caps.get(1)) else {
                break;
            };

            // a prefix glued to a preceding word is not an invocation
            let glued = line[..whole.start()]
                .chars()
                .next_back()
                .is_some_and(is_word_char);
            if glued {
                pos = whole.start()
                    + line[whole.start()..]
                        .chars()
                        .next()
                        .map_or(1, char::len_utf8);
                continue;
            }

            matched = true;
            expanded.push_str(&line[last..whole.start()]);
            expanded.push_str(&self.format.replace(VALUE_TOKEN, value.as_str()));
            last = whole.end();
            pos = whole.end();
        }

        if !matched {
            return Cow::Borrowed(line);
        }
        expanded.push_str(&line[last..]);
        Cow::Owned(expanded)
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Applies macros in order, each over the previous macro's output.
#[derive(Debug, Clone, Default)]
pub struct MacroExpander {
    macros: Vec<Macro>,
}

impl MacroExpander {
    pub fn new(macros: Vec<Macro>) -> Self {
        Self { macros }
    }

    pub fn apply(&self, line: &str) -> String {
        let mut current = line.to_string();
        for mac in &self.macros {
            let next = match mac.expand(&current) {
                Cow::Borrowed(_) => continue,
                Cow::Owned(next) => next,
            };
            current = next;
        }
        current
    }
}
