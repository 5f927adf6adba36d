//! Named character classes and their canonical replacements.

pub mod tables;

use std::fmt;

use crate::error::{TexthooksError, TexthooksResult};

/// The fixed set of character categories the tools know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Ligature,
    DoubleQuote,
    SingleQuote,
    SpaceSeparator,
    Hyphen,
    EmDash,
    BidiControl,
}

/// What a category's characters are rewritten to.
#[derive(Debug, Clone, Copy)]
pub enum Replacement {
    Fixed(&'static str),
    PerChar(&'static [(u32, &'static str)]),
    /// Checker-only categories have no replacement.
    Forbidden,
}

impl Category {
    pub fn name(self) -> &'static str {
        match self {
            Category::Ligature => "ligature",
            Category::DoubleQuote => "double-quote",
            Category::SingleQuote => "single-quote",
            Category::SpaceSeparator => "separator",
            Category::Hyphen => "hyphen",
            Category::EmDash => "emdash",
            Category::BidiControl => "bidi-control",
        }
    }

    pub fn replacement(self) -> Replacement {
        match self {
            Category::Ligature => Replacement::PerChar(tables::LIGATURES),
            Category::DoubleQuote => Replacement::Fixed("\""),
            Category::SingleQuote => Replacement::Fixed("'"),
            Category::SpaceSeparator => Replacement::Fixed(" "),
            Category::Hyphen => Replacement::Fixed("-"),
            Category::EmDash => Replacement::Fixed("--"),
            Category::BidiControl => Replacement::Forbidden,
        }
    }

    pub fn default_codepoints(self) -> Vec<u32> {
        match self {
            Category::Ligature => tables::LIGATURES.iter().map(|(cp, _)| *cp).collect(),
            Category::DoubleQuote => tables::DOUBLE_QUOTES.to_vec(),
            Category::SingleQuote => tables::SINGLE_QUOTES.to_vec(),
            Category::SpaceSeparator => tables::SPACE_SEPARATORS.to_vec(),
            Category::Hyphen => tables::HYPHENS.to_vec(),
            Category::EmDash => tables::EM_DASHES.to_vec(),
            Category::BidiControl => tables::BIDI_CONTROLS.to_vec(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Replacement {
    pub fn for_char(&self, c: char) -> Option<&'static str> {
        match self {
            Replacement::Fixed(s) => Some(*s),
            Replacement::PerChar(table) => table
                .iter()
                .find(|(cp, _)| *cp == u32::from(c))
                .map(|(_, s)| *s),
            Replacement::Forbidden => None,
        }
    }
}

/// An ordered set of characters belonging to one category.
#[derive(Debug, Clone)]
pub struct CharacterClass {
    category: Category,
    chars: Vec<char>,
}

impl CharacterClass {
    pub fn defaults(category: Category) -> Self {
        let chars = category
            .default_codepoints()
            .into_iter()
            .filter_map(char::from_u32)
            .collect();
        Self { category, chars }
    }

    /// Build a class from explicit codepoints, validating them against the
    /// category's replacement.
    pub fn with_codepoints(category: Category, codepoints: &[u32]) -> TexthooksResult<Self> {
        let mut chars: Vec<char> = Vec::with_capacity(codepoints.len());
        for &cp in codepoints {
            let c = char::from_u32(cp).ok_or_else(|| {
                TexthooksError::usage(format!(
                    "--{}-codepoints: {:04X} is not a valid Unicode scalar value",
                    category, cp
                ))
            })?;
            if chars.contains(&c) {
                continue;
            }

            let replacement = category.replacement();
            if let Replacement::Forbidden = replacement {
                chars.push(c);
                continue;
            }
            match replacement.for_char(c) {
                None => {
                    return Err(TexthooksError::usage(format!(
                        "--{}-codepoints: U+{:04X} has no known replacement",
                        category, cp
                    )));
                }
                Some(text) if text.contains(c) => {
                    return Err(TexthooksError::usage(format!(
                        "--{}-codepoints: U+{:04X} is its own replacement",
                        category, cp
                    )));
                }
                Some(_) => chars.push(c),
            }
        }

        Ok(Self { category, chars })
    }

    /// Defaults when no override is given; otherwise the parsed override,
    /// where an empty list disables the class.
    pub fn from_override(category: Category, value: Option<&str>) -> TexthooksResult<Self> {
        match value {
            None => Ok(Self::defaults(category)),
            Some(csv) => {
                let codepoints = parse_codepoints(csv).map_err(|bad| {
                    TexthooksError::usage(format!(
                        "--{}-codepoints: '{}' is not a hexadecimal codepoint",
                        category, bad
                    ))
                })?;
                Self::with_codepoints(category, &codepoints)
            }
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn replacement_for(&self, c: char) -> Option<&'static str> {
        if self.contains(c) {
            self.category.replacement().for_char(c)
        } else {
            None
        }
    }
}

/// Parse a comma-separated list of hex codepoints (`2013,U+2212, FF0D`).
/// Empty segments are skipped, so an empty string yields an empty list.
/// On failure the offending segment is returned.
pub fn parse_codepoints(csv: &str) -> Result<Vec<u32>, String> {
    csv.split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let digits = segment
                .strip_prefix("U+")
                .or_else(|| segment.strip_prefix("u+"))
                .unwrap_or(segment);
            u32::from_str_radix(digits, 16).map_err(|_| segment.to_string())
        })
        .collect()
}
