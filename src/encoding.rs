//! Run-wide text encoding.
//!
//! A single encoding is resolved once per run from the locale environment and
//! used for every read and write. A locale that resolves to plain ASCII is
//! widened to UTF-8, since the files being fixed are expected to contain
//! non-ASCII text. Every other codeset goes through the `encoding_rs` label
//! table; a codeset it does not know is an error rather than a silent
//! fallback.

use std::env;
use std::path::Path;

use encoding_rs::Encoding;

use crate::error::{ConfigError, TexthooksError, TexthooksResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextEncoding(&'static Encoding);

impl Default for TextEncoding {
    fn default() -> Self {
        TextEncoding(encoding_rs::UTF_8)
    }
}

impl TextEncoding {
    pub fn utf8() -> Self {
        Self::default()
    }

    /// Resolve the encoding from `LC_ALL`, `LC_CTYPE` and `LANG`, in that order.
    pub fn detect() -> TexthooksResult<Self> {
        let locale = ["LC_ALL", "LC_CTYPE", "LANG"]
            .iter()
            .filter_map(|var| env::var(var).ok())
            .find(|value| !value.is_empty());

        match locale {
            Some(locale) => Self::from_locale(&locale),
            None => Ok(Self::utf8()),
        }
    }

    /// Map a locale string such as `en_US.UTF-8` or `de_DE.ISO-8859-15@euro`.
    pub fn from_locale(locale: &str) -> TexthooksResult<Self> {
        if locale == "C" || locale == "POSIX" {
            return Ok(Self::utf8());
        }

        let codeset = match locale.split_once('.') {
            Some((_, rest)) => rest.split('@').next().unwrap_or(rest),
            None => return Ok(Self::utf8()),
        };

        Self::from_label(codeset).ok_or_else(|| {
            ConfigError::InvalidValue {
                field: "locale codeset".to_string(),
                value: codeset.to_string(),
            }
            .into()
        })
    }

    /// Parse an encoding label, as found in a locale codeset or a config file.
    /// ASCII labels resolve to UTF-8.
    pub fn from_label(label: &str) -> Option<Self> {
        let normalized: String = label
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        if matches!(normalized.as_str(), "ascii" | "usascii" | "ansix3.41968" | "646") {
            return Some(Self::utf8());
        }

        let encoding = Encoding::for_label(label.trim().as_bytes())
            .or_else(|| Self::for_locale_codeset(&normalized))?;

        // Labels that only exist to be refused, and encodings without an encoder
        if encoding == encoding_rs::REPLACEMENT
            || encoding == encoding_rs::UTF_16LE
            || encoding == encoding_rs::UTF_16BE
        {
            return None;
        }
        Some(TextEncoding(encoding))
    }

    /// libc spells codesets without the separators the WHATWG labels use,
    /// e.g. `eucJP`, `ISO8859-15` or `KOI8R`.
    fn for_locale_codeset(normalized: &str) -> Option<&'static Encoding> {
        match normalized {
            "eucjp" => Some(encoding_rs::EUC_JP),
            "euckr" => Some(encoding_rs::EUC_KR),
            "euccn" => Some(encoding_rs::GBK),
            "euctw" | "big5hkscs" => Some(encoding_rs::BIG5),
            "sjis" | "shiftjis" => Some(encoding_rs::SHIFT_JIS),
            "koi8r" => Some(encoding_rs::KOI8_R),
            "koi8u" => Some(encoding_rs::KOI8_U),
            other => other
                .strip_prefix("iso8859")
                .and_then(|part| Encoding::for_label(format!("iso-8859-{}", part).as_bytes())),
        }
    }

    pub fn name(self) -> &'static str {
        self.0.name()
    }

    pub fn decode(self, bytes: Vec<u8>, path: &Path) -> TexthooksResult<String> {
        if self.0 == encoding_rs::UTF_8 {
            return String::from_utf8(bytes).map_err(|err| {
                let offset = err.utf8_error().valid_up_to();
                let message = match err.as_bytes().get(offset) {
                    Some(byte) => format!("invalid byte 0x{:02X} at offset {}", byte, offset),
                    None => format!("truncated sequence at offset {}", offset),
                };
                self.error(path, message)
            });
        }

        match self.0.decode_without_bom_handling_and_without_replacement(&bytes) {
            Some(text) => Ok(text.into_owned()),
            None => Err(self.error(path, "contains byte sequences with no mapping".to_string())),
        }
    }

    pub fn encode(self, text: &str, path: &Path) -> TexthooksResult<Vec<u8>> {
        if self.0 == encoding_rs::UTF_8 {
            return Ok(text.as_bytes().to_vec());
        }

        let (bytes, _, had_errors) = self.0.encode(text);
        if had_errors {
            let message = match text.chars().find(|c| !self.can_encode(*c)) {
                Some(c) => format!("character U+{:04X} cannot be encoded", u32::from(c)),
                None => "text cannot be encoded".to_string(),
            };
            return Err(self.error(path, message));
        }
        Ok(bytes.into_owned())
    }

    fn can_encode(self, c: char) -> bool {
        let mut buf = [0u8; 4];
        !self.0.encode(c.encode_utf8(&mut buf)).2
    }

    fn error(self, path: &Path, message: String) -> TexthooksError {
        TexthooksError::Encoding {
            path: path.to_path_buf(),
            encoding: self.name(),
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(name: &str) -> TextEncoding {
        TextEncoding::from_label(name).unwrap()
    }

    #[test]
    fn test_locale_resolution() {
        assert_eq!(TextEncoding::from_locale("en_US.UTF-8").unwrap(), TextEncoding::utf8());
        assert_eq!(TextEncoding::from_locale("en_US.utf8").unwrap(), TextEncoding::utf8());
        assert_eq!(TextEncoding::from_locale("C").unwrap(), TextEncoding::utf8());
        assert_eq!(TextEncoding::from_locale("en_US").unwrap(), TextEncoding::utf8());
        assert_eq!(
            TextEncoding::from_locale("de_DE.ISO-8859-1@euro").unwrap().name(),
            "windows-1252"
        );
    }

    #[test]
    fn test_libc_codeset_spellings() {
        assert_eq!(TextEncoding::from_locale("ja_JP.eucJP").unwrap().name(), "EUC-JP");
        assert_eq!(TextEncoding::from_locale("ru_RU.KOI8-R").unwrap().name(), "KOI8-R");
        assert_eq!(
            TextEncoding::from_locale("fr_FR.ISO8859-15@euro").unwrap().name(),
            "ISO-8859-15"
        );
        assert_eq!(TextEncoding::from_locale("ko_KR.eucKR").unwrap().name(), "EUC-KR");
    }

    #[test]
    fn test_unknown_codeset_is_an_error() {
        let err = TextEncoding::from_locale("xx_XX.EBCDIC-037").unwrap_err();
        match err {
            TexthooksError::Config(ConfigError::InvalidValue { value, .. }) => {
                assert_eq!(value, "EBCDIC-037");
            }
            other => panic!("Expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_ascii_widens_to_utf8() {
        assert_eq!(
            TextEncoding::from_locale("C.ANSI_X3.4-1968").unwrap(),
            TextEncoding::utf8()
        );
        assert_eq!(TextEncoding::from_label("US-ASCII"), Some(TextEncoding::utf8()));
        assert_eq!(TextEncoding::from_label("ebcdic"), None);
        assert_eq!(TextEncoding::from_label("utf-16le"), None);
    }

    #[test]
    fn test_utf8_decode_error_is_reported() {
        let err = TextEncoding::utf8()
            .decode(vec![b'o', b'k', 0xFF], Path::new("bad.txt"))
            .unwrap_err();

        match err {
            TexthooksError::Encoding { path, message, .. } => {
                assert_eq!(path, Path::new("bad.txt"));
                assert!(message.contains("0xFF"));
                assert!(message.contains("offset 2"));
            }
            other => panic!("Expected encoding error, got {:?}", other),
        }
    }

    #[test]
    fn test_latin1_round_trip() {
        let path = Path::new("latin.txt");
        let text = label("latin1").decode(vec![b'c', 0xE9], path).unwrap();
        assert_eq!(text, "c\u{e9}");
        assert_eq!(label("latin1").encode(&text, path).unwrap(), vec![b'c', 0xE9]);
    }

    #[test]
    fn test_iso_8859_15_differs_from_latin1() {
        let path = Path::new("euro.txt");
        let latin9 = label("ISO-8859-15");
        let text = latin9.decode(vec![b'5', 0xA4], path).unwrap();
        assert_eq!(text, "5\u{20AC}");
        assert_eq!(latin9.encode("5\u{20AC}", path).unwrap(), vec![b'5', 0xA4]);
    }

    #[test]
    fn test_koi8r_round_trip() {
        let path = Path::new("ru.txt");
        let koi8 = label("KOI8-R");
        let text = koi8.decode(vec![0xD0, 0xD2, 0xC9], path).unwrap();
        assert_eq!(text, "\u{43F}\u{440}\u{438}");
        assert_eq!(koi8.encode(&text, path).unwrap(), vec![0xD0, 0xD2, 0xC9]);
    }

    #[test]
    fn test_euc_jp_rejects_invalid_bytes() {
        let result = label("euc-jp").decode(vec![b'a', 0x8E], Path::new("jp.txt"));
        assert!(matches!(result, Err(TexthooksError::Encoding { encoding: "EUC-JP", .. })));
    }

    #[test]
    fn test_unmappable_character_is_rejected() {
        let err = label("latin1").encode("a\u{4E00}", Path::new("cjk.txt")).unwrap_err();
        match err {
            TexthooksError::Encoding { message, .. } => assert!(message.contains("U+4E00")),
            other => panic!("Expected encoding error, got {:?}", other),
        }
    }
}
