// Default codepoint tables, commented with their Unicode names.

/// Ligatures which are typographic only, mapped to their letters.
pub const LIGATURES: &[(u32, &str)] = &[
    (0xFB00, "ff"),
    (0xFB01, "fi"),
    (0xFB02, "fl"),
    (0xFB03, "ffi"),
    (0xFB04, "ffl"),
];

pub const DOUBLE_QUOTES: &[u32] = &[
    0xFF02,  // Fullwidth quotation mark
    // left
    0x201C,  // Left double quotation mark
    0x201F,  // Double high-reversed-9 quotation mark
    0x275D,  // Heavy double turned comma quotation mark ornament
    0x1F676, // Sans-serif heavy double turned comma quotation mark ornament
    // right
    0x201D,  // Right double quotation mark
    0x275E,  // Heavy double comma quotation mark ornament
    0x1F677, // Sans-serif heavy double comma quotation mark ornament
];

pub const SINGLE_QUOTES: &[u32] = &[
    0xFF07, // Fullwidth apostrophe
    // left
    0x2018, // Left single quotation mark
    0x201B, // Single high-reversed-9 quotation mark
    0x275B, // Heavy single turned comma quotation mark ornament
    // right
    0x2019, // Right single quotation mark
    0x275C, // Heavy single comma quotation mark ornament
];

// U+1680 Ogham Space Mark renders visibly and is left alone.
pub const SPACE_SEPARATORS: &[u32] = &[
    0x00A0, // No-Break Space
    0x202F, // Narrow No-Break Space
    0x2000, // En Quad
    0x2001, // Em Quad
    0x2002, // En Space
    0x2003, // Em Space
    0x2004, // Three-Per-Em Space
    0x2005, // Four-Per-Em Space
    0x2006, // Six-Per-Em Space
    0x2007, // Figure Space
    0x2008, // Punctuation Space
    0x2009, // Thin Space
    0x200A, // Hair Space
    0x205F, // Medium Mathematical Space
    0x3000, // Ideographic Space
];

pub const HYPHENS: &[u32] = &[
    0x2013, // En Dash
    0x2212, // Minus Sign
    0xFF0D, // Fullwidth Hyphen-Minus
];

pub const EM_DASHES: &[u32] = &[
    0x2014, // Em Dash
];

// http://www.unicode.org/reports/tr9/#Directional_Formatting_Characters
pub const BIDI_CONTROLS: &[u32] = &[
    0x202A, // LRE
    0x202B, // RLE
    0x202C, // PDF
    0x202D, // LRO
    0x202E, // RLO
    0x2066, // LRI
    0x2067, // RLI
    0x2068, // FSI
    0x2069, // PDI
    0x200E, // LRM
    0x200F, // RLM
    0x061C, // ALM
];
