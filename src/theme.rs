//! Themes - per-role inline style rules for the rendered markup.
//!
//! WeChat's article editor drops `<style>` blocks and class selectors, so every
//! element carries its look in a `style` attribute. A [`Theme`] maps each
//! [`StyleRole`] to a [`StyleRule`], and [`make_style_text`] serializes a rule
//! into attribute text.

use std::collections::HashMap;

/// Semantic category of an element, used to look up its style rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleRole {
    Wrapper,
    Paragraph,
    /// Heading with level 1..=6.
    Heading(u8),
    Link,
    Strong,
    Emphasis,
    Strikethrough,
    CodeSpan,
    CodeBlock,
    BlockQuote,
    List,
    ListItem,
    Image,
    ImageCaption,
    HorizontalRule,
    Table,
    TableHeadCell,
    TableCell,
    FootnoteTitle,
    FootnoteSection,
    FootnoteItem,
    FootnoteIndex,
    FootnoteTarget,
}

/// Ordered CSS property/value pairs.
///
/// Insertion order is preserved so serialized output is stable; setting a
/// property that already exists overwrites it in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleRule {
    declarations: Vec<(String, String)>,
}

impl StyleRule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property, returning the rule for chaining.
    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        match self.declarations.iter_mut().find(|(p, _)| *p == property) {
            Some(existing) => existing.1 = value,
            None => self.declarations.push((property, value)),
        }
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.declarations
            .iter()
            .map(|(p, v)| (p.as_str(), v.as_str()))
    }
}

impl<P, V> FromIterator<(P, V)> for StyleRule
where
    P: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (P, V)>>(iter: I) -> Self {
        let mut rule = StyleRule::new();
        for (property, value) in iter {
            rule.set(property, value);
        }
        rule
    }
}

/// Serializes a style rule into inline `style` attribute text.
///
/// Output is `prop:value;prop2:value2;`, or an empty string for an empty rule.
pub fn make_style_text(rule: &StyleRule) -> String {
    let mut text = String::new();
    for (property, value) in rule.iter() {
        text.push_str(property);
        text.push(':');
        text.push_str(value);
        text.push(';');
    }
    text
}

/// Mapping from style roles to style rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    rules: HashMap<StyleRole, StyleRule>,
    empty: StyleRule,
}

impl Theme {
    /// Creates a theme with no rules at all; every element renders unstyled.
    pub fn empty() -> Self {
        Self {
            rules: HashMap::new(),
            empty: StyleRule::new(),
        }
    }

    /// Sets the rule for a role, replacing any previous rule.
    pub fn with_rule(mut self, role: StyleRole, rule: StyleRule) -> Self {
        self.rules.insert(role, rule);
        self
    }

    /// Looks up the rule for a role. Unknown roles yield an empty rule.
    pub fn style(&self, role: StyleRole) -> &StyleRule {
        self.rules.get(&role).unwrap_or(&self.empty)
    }

    pub fn link(&self) -> &StyleRule {
        self.style(StyleRole::Link)
    }

    /// Serialized style text for a role.
    pub fn style_text(&self, role: StyleRole) -> String {
        make_style_text(self.style(role))
    }

    /// Default theme tuned for the WeChat article editor.
    pub fn wechat() -> Self {
        let accent = "rgb(239, 112, 96)";
        let text = "rgb(63, 63, 63)";

        let heading = |size: &str| {
            StyleRule::new()
                .with("margin-top", "30px")
                .with("margin-bottom", "15px")
                .with("font-size", size)
                .with("font-weight", "bold")
                .with("color", text)
        };

        Self::empty()
            .with_rule(
                StyleRole::Wrapper,
                StyleRule::new()
                    .with("font-size", "16px")
                    .with("color", text)
                    .with("line-height", "1.6")
                    .with("word-spacing", "0px")
                    .with("letter-spacing", "0px")
                    .with("word-break", "break-word")
                    .with("text-align", "left")
                    .with("padding", "0 10px"),
            )
            .with_rule(
                StyleRole::Paragraph,
                StyleRule::new()
                    .with("margin", "10px 0")
                    .with("line-height", "26px")
                    .with("font-size", "15px"),
            )
            .with_rule(StyleRole::Heading(1), heading("24px").with("text-align", "center"))
            .with_rule(
                StyleRole::Heading(2),
                heading("22px")
                    .with("border-bottom", format!("2px solid {accent}"))
                    .with("padding-bottom", "4px"),
            )
            .with_rule(StyleRole::Heading(3), heading("20px"))
            .with_rule(StyleRole::Heading(4), heading("18px"))
            .with_rule(StyleRole::Heading(5), heading("16px"))
            .with_rule(StyleRole::Heading(6), heading("16px"))
            .with_rule(
                StyleRole::Link,
                StyleRule::new()
                    .with("color", accent)
                    .with("word-wrap", "break-word")
                    .with("font-weight", "bold")
                    .with("border-bottom", format!("1px solid {accent}"))
                    .with("text-decoration", "none"),
            )
            .with_rule(
                StyleRole::Strong,
                StyleRule::new()
                    .with("font-weight", "bold")
                    .with("color", accent),
            )
            .with_rule(StyleRole::Emphasis, StyleRule::new().with("font-style", "italic"))
            .with_rule(
                StyleRole::Strikethrough,
                StyleRule::new().with("text-decoration", "line-through"),
            )
            .with_rule(
                StyleRole::CodeSpan,
                StyleRule::new()
                    .with("font-size", "14px")
                    .with("padding", "2px 4px")
                    .with("border-radius", "4px")
                    .with("margin", "0 2px")
                    .with("color", "rgb(30, 107, 184)")
                    .with("background-color", "rgba(27, 31, 35, 0.05)")
                    .with("font-family", "Consolas, Monaco, Menlo, monospace")
                    .with("word-break", "break-all"),
            )
            .with_rule(
                StyleRole::CodeBlock,
                StyleRule::new()
                    .with("font-size", "13px")
                    .with("padding", "12px")
                    .with("border-radius", "5px")
                    .with("background", "rgb(40, 44, 52)")
                    .with("color", "rgb(171, 178, 191)")
                    .with("overflow-x", "auto")
                    .with("white-space", "pre")
                    .with("font-family", "Consolas, Monaco, Menlo, monospace")
                    .with("margin", "10px 0"),
            )
            .with_rule(
                StyleRole::BlockQuote,
                StyleRule::new()
                    .with("margin", "20px 0")
                    .with("padding", "10px 10px 10px 20px")
                    .with("border-left", "3px solid rgb(219, 219, 219)")
                    .with("background", "rgba(0, 0, 0, 0.05)")
                    .with("color", "rgb(106, 115, 125)"),
            )
            .with_rule(
                StyleRole::List,
                StyleRule::new()
                    .with("margin", "8px 0")
                    .with("padding-left", "25px")
                    .with("color", text),
            )
            .with_rule(
                StyleRole::ListItem,
                StyleRule::new()
                    .with("margin", "5px 0")
                    .with("line-height", "26px")
                    .with("font-size", "15px"),
            )
            .with_rule(
                StyleRole::Image,
                StyleRule::new()
                    .with("display", "block")
                    .with("margin", "0 auto")
                    .with("max-width", "100%"),
            )
            .with_rule(
                StyleRole::ImageCaption,
                StyleRule::new()
                    .with("display", "block")
                    .with("margin-top", "5px")
                    .with("text-align", "center")
                    .with("color", "rgb(136, 136, 136)")
                    .with("font-size", "14px"),
            )
            .with_rule(
                StyleRole::HorizontalRule,
                StyleRule::new()
                    .with("height", "1px")
                    .with("margin", "10px 0")
                    .with("border", "none")
                    .with("border-top", "1px solid black"),
            )
            .with_rule(
                StyleRole::Table,
                StyleRule::new()
                    .with("display", "table")
                    .with("text-align", "left")
                    .with("border-collapse", "collapse"),
            )
            .with_rule(
                StyleRole::TableHeadCell,
                StyleRule::new()
                    .with("font-size", "14px")
                    .with("border", "1px solid rgb(204, 204, 204)")
                    .with("padding", "5px 10px")
                    .with("font-weight", "bold")
                    .with("background-color", "rgb(240, 240, 240)"),
            )
            .with_rule(
                StyleRole::TableCell,
                StyleRule::new()
                    .with("font-size", "14px")
                    .with("border", "1px solid rgb(204, 204, 204)")
                    .with("padding", "5px 10px"),
            )
            .with_rule(
                StyleRole::FootnoteTitle,
                heading("18px").with("margin-top", "40px"),
            )
            .with_rule(
                StyleRole::FootnoteSection,
                StyleRule::new().with("font-size", "14px").with("color", text),
            )
            .with_rule(
                StyleRole::FootnoteItem,
                StyleRule::new()
                    .with("margin", "4px 0")
                    .with("line-height", "22px")
                    .with("word-break", "break-all"),
            )
            .with_rule(
                StyleRole::FootnoteIndex,
                StyleRule::new().with("color", accent).with("margin-right", "4px"),
            )
            .with_rule(
                StyleRole::FootnoteTarget,
                StyleRule::new().with("font-style", "italic"),
            )
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::wechat()
    }
}
