// src/parse.rs

//! Scraping of `<icon>`, `<txt>` and `<tool>` tags out of script output.
//!
//! This is a best-effort regex scrape, not an XML parser: the first match of
//! each tag wins, content is trimmed and passed through verbatim (including
//! any Pango markup), and nothing here can fail.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

static ICON_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<icon>(.*?)</icon>").expect("valid icon regex"));
static TEXT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<txt>(.*?)</txt>").expect("valid txt regex"));
static TOOLTIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<tool>(.*?)</tool>").expect("valid tool regex"));

/// Fields extracted from one run of the script.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedOutput {
    /// Icon name (single line).
    pub icon: Option<String>,
    /// Label markup.
    pub text: Option<String>,
    /// Tooltip / detail markup.
    pub tooltip: Option<String>,
}

impl ParsedOutput {
    pub fn is_empty(&self) -> bool {
        self.icon.is_none() && self.text.is_none() && self.tooltip.is_none()
    }
}

/// Extract the three optional fields from `stdout`.
pub fn parse(stdout: &str) -> ParsedOutput {
    let parsed = ParsedOutput {
        icon: first_capture(&ICON_RE, stdout),
        text: first_capture(&TEXT_RE, stdout),
        tooltip: first_capture(&TOOLTIP_RE, stdout),
    };
    debug!(?parsed, "parsed command output");
    parsed
}

fn first_capture(re: &Regex, haystack: &str) -> Option<String> {
    re.captures(haystack)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}
