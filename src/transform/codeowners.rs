use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

// `[Section]`, `^[Optional Section]`, either optionally followed by `[N]`
static GITLAB_SECTION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\^?\[[^\]]+\](?:\[\d+\])?)(\s.*)?$")
        .expect("Failed to compile section pattern")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeownersDialect {
    #[default]
    Standard,
    Gitlab,
}

/// Sorts the owners of every CODEOWNERS rule, normalizing whitespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct CodeownersSorter {
    dialect: CodeownersDialect,
}

impl CodeownersSorter {
    pub fn new(dialect: CodeownersDialect) -> Self {
        Self { dialect }
    }

    /// Returns the sorted rule without its line terminator, or the line
    /// unchanged when it is blank, a comment, or has no owners.
    pub fn sort_line(&self, line: &str) -> String {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return line.to_string();
        }

        if self.dialect == CodeownersDialect::Gitlab {
            if let Some(caps) = GITLAB_SECTION_PATTERN.captures(trimmed) {
                let marker = caps.get(1).map_or("", |m| m.as_str());
                let rest = caps.get(2).map_or("", |m| m.as_str());
                return render_rule(marker, rest).unwrap_or_else(|| line.to_string());
            }
        }

        let (head, rest) = match trimmed.split_once(char::is_whitespace) {
            Some(parts) => parts,
            None => return line.to_string(),
        };
        render_rule(head, rest).unwrap_or_else(|| line.to_string())
    }
}

fn render_rule(head: &str, rest: &str) -> Option<String> {
    let (owners, comment) = split_comment(rest);
    let mut owners: Vec<&str> = owners.split_whitespace().collect();
    if owners.is_empty() {
        return None;
    }
    owners.sort_by_key(|owner| owner.to_lowercase());

    let mut rule = String::with_capacity(head.len() + rest.len() + 1);
    rule.push_str(head);
    for owner in owners {
        rule.push(' ');
        rule.push_str(owner);
    }
    if let Some(comment) = comment {
        rule.push_str("  ");
        rule.push_str(comment);
    }
    Some(rule)
}

/// Splits off a trailing `# comment` that starts a whitespace-separated token.
fn split_comment(text: &str) -> (&str, Option<&str>) {
    let mut prev_is_space = true;
    for (idx, c) in text.char_indices() {
        if c == '#' && prev_is_space {
            return (&text[..idx], Some(text[idx..].trim_end()));
        }
        prev_is_space = c.is_whitespace();
    }
    (text, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard(line: &str) -> String {
        CodeownersSorter::default().sort_line(line)
    }

    fn gitlab(line: &str) -> String {
        CodeownersSorter::new(CodeownersDialect::Gitlab).sort_line(line)
    }

    #[test]
    fn test_sorts_case_insensitively() {
        assert_eq!(
            standard("/foo/bar.txt @Bob @alice @charlie\n"),
            "/foo/bar.txt @alice @Bob @charlie"
        );
    }

    #[test]
    fn test_equal_keys_keep_their_order() {
        assert_eq!(standard("*.rs @Team @team @TEAM"), "*.rs @Team @team @TEAM");
        assert_eq!(standard("*.rs @zed @TEAM @team"), "*.rs @TEAM @team @zed");
    }

    #[test]
    fn test_normalizes_whitespace() {
        assert_eq!(standard("/foo/bar.txt   @alice\t@bob  "), "/foo/bar.txt @alice @bob");
    }

    #[test]
    fn test_comments_and_blank_lines_pass_through() {
        assert_eq!(standard("# owners for @zed @amy\n"), "# owners for @zed @amy\n");
        assert_eq!(standard("   \n"), "   \n");
        assert_eq!(standard(""), "");
    }

    #[test]
    fn test_path_without_owners_is_untouched() {
        assert_eq!(standard("/vendor/   \n"), "/vendor/   \n");
        assert_eq!(standard("/vendor/ # unowned\n"), "/vendor/ # unowned\n");
    }

    #[test]
    fn test_inline_comment_is_reattached() {
        assert_eq!(
            standard("/docs/ @zoe @adam # writers   \n"),
            "/docs/ @adam @zoe  # writers"
        );
        assert_eq!(standard("/a#b @z @y"), "/a#b @y @z");
    }

    #[test]
    fn test_gitlab_sections() {
        assert_eq!(gitlab("[Docs] @zoe @adam"), "[Docs] @adam @zoe");
        assert_eq!(gitlab("^[Docs][2] @zoe @Adam\n"), "^[Docs][2] @Adam @zoe");
        assert_eq!(gitlab("[Section Name]\n"), "[Section Name]\n");
        assert_eq!(gitlab("/app/ @zoe @adam"), "/app/ @adam @zoe");
    }

    #[test]
    fn test_gitlab_marker_only_in_gitlab_dialect() {
        // the standard dialect treats "[Docs][2]" as a path
        assert_eq!(standard("[Docs][2] @zoe @adam"), "[Docs][2] @adam @zoe");
        assert_eq!(gitlab("[Docs][2]"), "[Docs][2]");
    }

    #[test]
    fn test_idempotent() {
        let once = gitlab("^[Backend][1] @Zed @amy  # core team");
        assert_eq!(once, "^[Backend][1] @amy @Zed  # core team");
        assert_eq!(gitlab(&once), once);
    }
}
