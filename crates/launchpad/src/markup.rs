//! Minimal HTML element tree.
//!
//! Only what the template page needs: elements with attributes, escaped text
//! and compact rendering with no whitespace between tags, so the same tree
//! always produces byte-identical output.

use std::fmt::Write as _;

/// A node in the markup tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A nested element.
    Element(Element),
    /// Text content, escaped on render.
    Text(String),
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// An HTML element with ordered attributes and children.
///
/// # Example
///
/// ```rust
/// use launchpad::markup::Element;
///
/// let html = Element::new("span").class("badge").text("a < b").render();
/// assert_eq!(html, r#"<span class="badge">a &lt; b</span>"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Node>,
}

impl Element {
    /// Create an empty element.
    #[must_use]
    pub const fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add an attribute.
    #[must_use]
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    /// Shorthand for the `id` attribute.
    #[must_use]
    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    /// Shorthand for the `class` attribute.
    #[must_use]
    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    /// Append a child node.
    #[must_use]
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Append a text child.
    #[must_use]
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    /// Append several children.
    #[must_use]
    pub fn children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    /// Tag name.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        self.tag
    }

    /// Value of the first attribute with this name.
    #[must_use]
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Render to a new string.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    /// Render, appending to `out`.
    pub fn render_into(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            let _ = write!(out, " {name}=\"{}\"", escape(value));
        }
        out.push('>');
        for child in &self.children {
            match child {
                Node::Element(element) => element.render_into(out),
                Node::Text(text) => out.push_str(&escape(text)),
            }
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

/// Escape text for use in element content or a quoted attribute.
#[must_use]
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_special_chars() {
        assert_eq!(
            escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_keeps_unicode() {
        assert_eq!(escape("🚀 ✅"), "🚀 ✅");
    }

    #[test]
    fn test_nested_render_is_compact() {
        let html = Element::new("p")
            .child(Element::new("strong").text("Status:"))
            .text(" ok")
            .render();
        assert_eq!(html, "<p><strong>Status:</strong> ok</p>");
    }

    #[test]
    fn test_attributes_keep_order_and_escape() {
        let el = Element::new("button")
            .id("counter")
            .attr("type", "button")
            .attr("title", "say \"hi\"");
        assert_eq!(
            el.render(),
            r#"<button id="counter" type="button" title="say &quot;hi&quot;"></button>"#
        );
        assert_eq!(el.get_attr("type"), Some("button"));
        assert_eq!(el.get_attr("missing"), None);
        assert_eq!(el.tag(), "button");
    }

    #[test]
    fn test_children_from_iterator() {
        let html = Element::new("div")
            .children(["a", "b"].map(|label| Element::new("span").text(label)))
            .render();
        assert_eq!(html, "<div><span>a</span><span>b</span></div>");
    }
}
