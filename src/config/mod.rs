pub mod project;

pub use project::Config;

use serde::Deserialize;

use crate::transform::CodeownersDialect;

/// Contents of `.texthooks.toml`. Every field is optional; a missing field
/// leaves the built-in default in place.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ConfigData {
    pub color: Option<bool>,
    pub encoding: Option<String>,
    #[serde(default)]
    pub fix_smartquotes: SmartquotesConfig,
    #[serde(default)]
    pub fix_spaces: SpacesConfig,
    #[serde(default)]
    pub fix_unicode_dashes: DashesConfig,
    #[serde(default)]
    pub macro_expand: MacroExpandConfig,
    #[serde(default)]
    pub alphabetize_codeowners: CodeownersConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct SmartquotesConfig {
    pub double_quote_codepoints: Option<String>,
    pub single_quote_codepoints: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct SpacesConfig {
    pub separator_codepoints: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct DashesConfig {
    pub hyphen_codepoints: Option<String>,
    pub emdash_codepoints: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct MacroExpandConfig {
    #[serde(default)]
    pub macros: Vec<MacroConfig>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MacroConfig {
    pub prefix: String,
    pub format: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct CodeownersConfig {
    pub dialect: Option<CodeownersDialect>,
}
