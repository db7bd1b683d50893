//! Ordered rule pipeline turning annotation markup into a display fragment

use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use super::rules::{self, MarkupRule};

/// Shown instead of an empty fragment
pub const EMPTY_PREVIEW_PLACEHOLDER: &str =
    r#"<p class="text-muted">Markdown preview will appear here...</p>"#;

static LIST_ITEM_FRAGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(<li>.*?</li>)").unwrap());

/// A run of list items separated by at most one line break
static LIST_ITEM_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<li>.*?</li>(?:<br><li>.*?</li>)*").unwrap());

/// How `<li>` fragments are wrapped in `<ul>` containers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListWrapping {
    /// Every item gets its own container (`- a\n- b` renders two lists)
    #[default]
    PerItem,
    /// Consecutive items share one container
    Merged,
}

impl ListWrapping {
    fn wrap(self, html: &str) -> String {
        match self {
            ListWrapping::PerItem => LIST_ITEM_FRAGMENT
                .replace_all(html, "<ul>${1}</ul>")
                .into_owned(),
            ListWrapping::Merged => LIST_ITEM_RUN
                .replace_all(html, |caps: &Captures| {
                    format!("<ul>{}</ul>", caps[0].replace("</li><br><li>", "</li><li>"))
                })
                .into_owned(),
        }
    }
}

/// Ordered list of substitution rules applied in sequence
#[derive(Debug, Clone)]
pub struct MarkupPipeline {
    rules: Vec<MarkupRule>,
    list_wrapping: ListWrapping,
}

impl Default for MarkupPipeline {
    fn default() -> Self {
        Self::standard()
    }
}

impl MarkupPipeline {
    /// The canonical rule order.
    ///
    /// Bold precedes italic, and the fenced-code rule runs after the line
    /// rules, so heading or list syntax inside a fence is still rewritten.
    pub fn standard() -> Self {
        Self {
            rules: vec![
                rules::heading_1(),
                rules::heading_2(),
                rules::heading_3(),
                rules::bold(),
                rules::italic(),
                rules::link(),
                rules::list_item(),
                rules::blockquote(),
                rules::code_block(),
                rules::paragraph_break(),
                rules::line_break(),
            ],
            list_wrapping: ListWrapping::default(),
        }
    }

    /// A pipeline with an explicit rule list
    pub fn from_rules(rules: Vec<MarkupRule>) -> Self {
        Self {
            rules,
            list_wrapping: ListWrapping::default(),
        }
    }

    pub fn with_list_wrapping(mut self, list_wrapping: ListWrapping) -> Self {
        self.list_wrapping = list_wrapping;
        self
    }

    pub fn list_wrapping(&self) -> ListWrapping {
        self.list_wrapping
    }

    pub fn rules(&self) -> &[MarkupRule] {
        &self.rules
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    pub fn rule(&self, name: &str) -> Option<&MarkupRule> {
        self.rules.iter().find(|r| r.name() == name)
    }

    /// Drop a rule by name
    pub fn without(mut self, name: &str) -> Self {
        self.rules.retain(|r| r.name() != name);
        self
    }

    /// Append a rule at the end of the pipeline
    pub fn with_rule(mut self, rule: MarkupRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Exchange the positions of two rules. Unknown names leave the order as is.
    pub fn swap(mut self, a: &str, b: &str) -> Self {
        let pos_a = self.rules.iter().position(|r| r.name() == a);
        let pos_b = self.rules.iter().position(|r| r.name() == b);
        if let (Some(i), Some(j)) = (pos_a, pos_b) {
            self.rules.swap(i, j);
        }
        self
    }

    /// Run every rule over the source, then wrap list items.
    ///
    /// Never fails; unmatched syntax is left as typed.
    pub fn transform(&self, source: &str) -> String {
        let html = self
            .rules
            .iter()
            .fold(source.to_string(), |text, rule| rule.apply(&text));
        let html = self.list_wrapping.wrap(&html);

        if html.is_empty() {
            EMPTY_PREVIEW_PLACEHOLDER.to_string()
        } else {
            html
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::rules::names;

    #[test]
    fn test_standard_order() {
        assert_eq!(
            MarkupPipeline::standard().rule_names(),
            vec![
                names::HEADING_1,
                names::HEADING_2,
                names::HEADING_3,
                names::BOLD,
                names::ITALIC,
                names::LINK,
                names::LIST_ITEM,
                names::BLOCKQUOTE,
                names::CODE_BLOCK,
                names::PARAGRAPH_BREAK,
                names::LINE_BREAK,
            ]
        );
    }

    #[test]
    fn test_empty_source_gives_placeholder() {
        assert_eq!(
            MarkupPipeline::standard().transform(""),
            EMPTY_PREVIEW_PLACEHOLDER
        );
    }

    #[test]
    fn test_whitespace_source_is_not_placeholder() {
        assert_eq!(MarkupPipeline::standard().transform(" "), " ");
    }

    #[test]
    fn test_swapping_bold_and_italic_changes_output() {
        let swapped = MarkupPipeline::standard().swap(names::BOLD, names::ITALIC);
        assert_ne!(
            swapped.transform("**x**"),
            MarkupPipeline::standard().transform("**x**")
        );
    }

    #[test]
    fn test_without_rule_leaves_syntax_literal() {
        let pipeline = MarkupPipeline::standard().without(names::LINK);
        assert_eq!(pipeline.transform("[a](b)"), "[a](b)");
        assert!(pipeline.rule(names::LINK).is_none());
    }

    #[test]
    fn test_per_item_wrapping() {
        assert_eq!(
            MarkupPipeline::standard().transform("- a\n- b"),
            "<ul><li>a</li></ul><br><ul><li>b</li></ul>"
        );
    }

    #[test]
    fn test_merged_wrapping() {
        let pipeline = MarkupPipeline::standard().with_list_wrapping(ListWrapping::Merged);
        assert_eq!(pipeline.transform("- a\n- b"), "<ul><li>a</li><li>b</li></ul>");
        assert_eq!(
            pipeline.transform("- a\n\n- b"),
            "<ul><li>a</li></ul><br><br><ul><li>b</li></ul>"
        );
    }

    #[test]
    fn test_custom_pipeline_from_rules() {
        let strike = MarkupRule::new("strike", r"~~(.*?)~~", "<del>${1}</del>").unwrap();
        let pipeline = MarkupPipeline::from_rules(vec![rules::bold()]).with_rule(strike);
        assert_eq!(pipeline.rules().len(), 2);
        assert_eq!(pipeline.list_wrapping(), ListWrapping::PerItem);
        assert_eq!(
            pipeline.transform("**a** ~~b~~\nc"),
            "<strong>a</strong> <del>b</del>\nc"
        );
    }
}
