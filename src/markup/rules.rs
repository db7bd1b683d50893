//! Individual substitution rules for the annotation markup
//!
//! Each rule is a regex matcher paired with a replacement template. Rules are
//! plain values so a pipeline can reorder or drop them.

use regex::Regex;

/// Stable names of the standard rules, in canonical order
pub mod names {
    pub const HEADING_1: &str = "heading-1";
    pub const HEADING_2: &str = "heading-2";
    pub const HEADING_3: &str = "heading-3";
    pub const BOLD: &str = "bold";
    pub const ITALIC: &str = "italic";
    pub const LINK: &str = "link";
    pub const LIST_ITEM: &str = "list-item";
    pub const BLOCKQUOTE: &str = "blockquote";
    pub const CODE_BLOCK: &str = "code-block";
    pub const PARAGRAPH_BREAK: &str = "paragraph-break";
    pub const LINE_BREAK: &str = "line-break";
}

/// A single `(matcher, replacer)` pair
#[derive(Debug, Clone)]
pub struct MarkupRule {
    name: &'static str,
    matcher: Regex,
    /// Replacement template; `${n}` refers to capture group n
    replacement: &'static str,
}

impl MarkupRule {
    /// Build a rule from a pattern known to be valid
    fn fixed(name: &'static str, pattern: &str, replacement: &'static str) -> Self {
        Self {
            name,
            matcher: Regex::new(pattern).unwrap(),
            replacement,
        }
    }

    /// Build a rule from a caller-supplied pattern
    pub fn new(
        name: &'static str,
        pattern: &str,
        replacement: &'static str,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            name,
            matcher: Regex::new(pattern)?,
            replacement,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn pattern(&self) -> &str {
        self.matcher.as_str()
    }

    /// Apply this rule to every match in `source`
    pub fn apply(&self, source: &str) -> String {
        self.matcher
            .replace_all(source, self.replacement)
            .into_owned()
    }
}

/// `# title` at line start
pub fn heading_1() -> MarkupRule {
    MarkupRule::fixed(names::HEADING_1, r"(?mR)^# (.*)$", "<h1>${1}</h1>")
}

/// `## title` at line start
pub fn heading_2() -> MarkupRule {
    MarkupRule::fixed(names::HEADING_2, r"(?mR)^## (.*)$", "<h2>${1}</h2>")
}

/// `### title` at line start
pub fn heading_3() -> MarkupRule {
    MarkupRule::fixed(names::HEADING_3, r"(?mR)^### (.*)$", "<h3>${1}</h3>")
}

/// `**text**`; must run before [`italic`] since both use `*`
pub fn bold() -> MarkupRule {
    MarkupRule::fixed(names::BOLD, r"(?R)\*\*(.*?)\*\*", "<strong>${1}</strong>")
}

/// `*text*`
pub fn italic() -> MarkupRule {
    MarkupRule::fixed(names::ITALIC, r"(?R)\*(.*?)\*", "<em>${1}</em>")
}

/// `[label](target)`, opened in a new browsing context
pub fn link() -> MarkupRule {
    MarkupRule::fixed(
        names::LINK,
        r"\[([^\]]+)\]\(([^)]+)\)",
        r#"<a href="${2}" target="_blank">${1}</a>"#,
    )
}

/// `- item` at line start. Container wrapping happens after the pipeline.
pub fn list_item() -> MarkupRule {
    MarkupRule::fixed(names::LIST_ITEM, r"(?mR)^- (.*)$", "<li>${1}</li>")
}

/// `> quote` at line start
pub fn blockquote() -> MarkupRule {
    MarkupRule::fixed(
        names::BLOCKQUOTE,
        r"(?mR)^> (.*)$",
        "<blockquote>${1}</blockquote>",
    )
}

/// Text between triple-backtick fences, possibly spanning lines
pub fn code_block() -> MarkupRule {
    MarkupRule::fixed(
        names::CODE_BLOCK,
        r"```([\s\S]*?)```",
        "<pre><code>${1}</code></pre>",
    )
}

/// Blank line between paragraphs
pub fn paragraph_break() -> MarkupRule {
    MarkupRule::fixed(names::PARAGRAPH_BREAK, r"\n\n", "<br><br>")
}

/// Any newline left after the paragraph rule
pub fn line_break() -> MarkupRule {
    MarkupRule::fixed(names::LINE_BREAK, r"\n", "<br>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings_match_only_their_level() {
        assert_eq!(heading_1().apply("# Title"), "<h1>Title</h1>");
        assert_eq!(heading_1().apply("## Title"), "## Title");
        assert_eq!(heading_2().apply("## Sub"), "<h2>Sub</h2>");
        assert_eq!(heading_3().apply("### Minor"), "<h3>Minor</h3>");
    }

    #[test]
    fn test_heading_is_per_line() {
        assert_eq!(
            heading_1().apply("intro\n# A\n# B"),
            "intro\n<h1>A</h1>\n<h1>B</h1>"
        );
    }

    #[test]
    fn test_line_rules_leave_carriage_return_outside_tags() {
        assert_eq!(heading_1().apply("# Title\r\nnext"), "<h1>Title</h1>\r\nnext");
        assert_eq!(
            list_item().apply("- a\r\n- b\r\n"),
            "<li>a</li>\r\n<li>b</li>\r\n"
        );
        assert_eq!(
            blockquote().apply("> note\r\n"),
            "<blockquote>note</blockquote>\r\n"
        );
    }

    #[test]
    fn test_pattern_is_exposed() {
        assert_eq!(line_break().pattern(), r"\n");
        assert!(heading_2().pattern().starts_with("(?mR)"));
    }

    #[test]
    fn test_bold_is_lazy() {
        assert_eq!(
            bold().apply("**a** and **b**"),
            "<strong>a</strong> and <strong>b</strong>"
        );
    }

    #[test]
    fn test_italic_alone_breaks_bold() {
        // Applied before bold, the italic rule eats the doubled delimiter
        assert_eq!(italic().apply("**a**"), "<em></em>a<em></em>");
    }

    #[test]
    fn test_link_keeps_target_verbatim() {
        assert_eq!(
            link().apply("see [docs](https://example.com/a?b=c)"),
            r#"see <a href="https://example.com/a?b=c" target="_blank">docs</a>"#
        );
    }

    #[test]
    fn test_unmatched_link_passes_through() {
        assert_eq!(link().apply("[docs](broken"), "[docs](broken");
    }

    #[test]
    fn test_list_item_and_blockquote() {
        assert_eq!(list_item().apply("- a\n- b"), "<li>a</li>\n<li>b</li>");
        assert_eq!(
            blockquote().apply("> note"),
            "<blockquote>note</blockquote>"
        );
        assert_eq!(list_item().apply("-no space"), "-no space");
    }

    #[test]
    fn test_code_block_spans_lines_and_is_not_escaped() {
        assert_eq!(
            code_block().apply("```\n<b>x</b>\n```"),
            "<pre><code>\n<b>x</b>\n</code></pre>"
        );
    }

    #[test]
    fn test_line_breaks() {
        assert_eq!(paragraph_break().apply("a\n\nb\nc"), "a<br><br>b\nc");
        assert_eq!(line_break().apply("b\nc"), "b<br>c");
    }

    #[test]
    fn test_custom_rule_rejects_bad_pattern() {
        assert!(MarkupRule::new("broken", "(", "").is_err());
        let rule = MarkupRule::new("strike", r"~~(.*?)~~", "<del>${1}</del>").unwrap();
        assert_eq!(rule.apply("~~x~~"), "<del>x</del>");
        assert_eq!(rule.name(), "strike");
    }
}
