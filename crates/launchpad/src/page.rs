//! Standalone HTML document export.
//!
//! Deployment pipelines publish a single `index.html` next to the wasm
//! bundle. The document carries the prerendered widget inside the mount
//! container so the page reads correctly before the bundle boots, then the
//! module script mounts the live widget over it.

use crate::config::PageContent;
use crate::error::{Error, Result};
use crate::markup::escape;

/// Default bundle path produced by `wasm-pack build --target web`.
pub const DEFAULT_SCRIPT: &str = "./launchpad_wasm.js";

/// Stylesheet embedded in exported pages.
pub const STYLESHEET: &str = "\
:root{font-family:Inter,system-ui,Avenir,Helvetica,Arial,sans-serif;line-height:1.5;\
color-scheme:light dark;color:rgba(255,255,255,.87);background-color:#242424}\
body{margin:0;display:flex;place-items:center;min-width:320px;min-height:100vh}\
#app{max-width:1280px;margin:0 auto;padding:2rem;text-align:center}\
h1{font-size:3.2em;line-height:1.1}\
.info{margin:2em 0;padding:1.5em;border-radius:8px;background:rgba(255,255,255,.05)}\
.badge{display:inline-block;margin:.25em;padding:.25em .75em;border-radius:999px;\
background:#646cff;color:#fff;font-size:.85em}\
button{border-radius:8px;border:1px solid transparent;padding:.6em 1.2em;font-size:1em;\
font-weight:500;font-family:inherit;background-color:#1a1a1a;cursor:pointer;\
transition:border-color .25s}\
button:hover{border-color:#646cff}\
@media (prefers-color-scheme:light){:root{color:#213547;background-color:#fff}\
button{background-color:#f9f9f9}}";

/// A complete HTML document wrapping a prerendered widget fragment.
///
/// # Example
///
/// ```rust
/// use launchpad::{Document, PageContent};
///
/// let content = PageContent::default();
/// let html = Document::new("<div>hi</div>", &content).render().unwrap();
/// assert!(html.starts_with("<!DOCTYPE html>"));
/// assert!(html.contains(r#"<div id="app"><div>hi</div></div>"#));
/// ```
#[derive(Debug, Clone)]
pub struct Document<'a> {
    fragment: &'a str,
    content: &'a PageContent,
    script: String,
}

impl<'a> Document<'a> {
    /// Wrap a fragment produced by the widget.
    #[must_use]
    pub fn new(fragment: &'a str, content: &'a PageContent) -> Self {
        Self {
            fragment,
            content,
            script: DEFAULT_SCRIPT.to_string(),
        }
    }

    /// Override the path of the wasm bundle's JS entry point.
    #[must_use]
    pub fn script(mut self, path: impl Into<String>) -> Self {
        self.script = path.into();
        self
    }

    /// Element id of the mount container.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedSelector`] unless the selector is `#id`.
    pub fn mount_id(&self) -> Result<&'a str> {
        mount_id(&self.content.mount_selector)
    }

    /// Render the full document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedSelector`] unless the mount selector is `#id`.
    pub fn render(&self) -> Result<String> {
        let id = self.mount_id()?;
        let title = escape(&self.content.title);
        let script = escape(&self.script);
        Ok(format!(
            "<!DOCTYPE html>\n\
             <html lang=\"en\">\n\
             <head>\n\
             <meta charset=\"UTF-8\">\n\
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
             <title>{title}</title>\n\
             <style>{STYLESHEET}</style>\n\
             </head>\n\
             <body>\n\
             <div id=\"{id}\">{fragment}</div>\n\
             <script type=\"module\">import init, {{ run }} from \"{script}\"; init().then(run);</script>\n\
             </body>\n\
             </html>\n",
            id = escape(id),
            fragment = self.fragment,
        ))
    }
}

fn mount_id(selector: &str) -> Result<&str> {
    selector
        .strip_prefix('#')
        .filter(|id| {
            !id.is_empty()
                && id
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        })
        .ok_or_else(|| Error::UnsupportedSelector {
            selector: selector.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mount_id_accepts_id_selectors() {
        assert_eq!(mount_id("#app").unwrap(), "app");
        assert_eq!(mount_id("#main-root_2").unwrap(), "main-root_2");
    }

    #[test]
    fn test_mount_id_rejects_other_selectors() {
        for selector in ["app", ".app", "#", "#a b", "div#app", "#app > div"] {
            assert!(
                matches!(mount_id(selector), Err(Error::UnsupportedSelector { .. })),
                "selector {selector} should be rejected"
            );
        }
    }

    #[test]
    fn test_title_is_escaped() {
        let content = PageContent {
            title: "A & B".to_string(),
            ..PageContent::default()
        };
        let html = Document::new("", &content).render().unwrap();
        assert!(html.contains("<title>A &amp; B</title>"));
    }

    #[test]
    fn test_custom_script_path() {
        let content = PageContent::default();
        let html = Document::new("", &content)
            .script("/static/app.js")
            .render()
            .unwrap();
        assert!(html.contains(r#"from "/static/app.js""#));
        assert!(html.contains("init().then(run);"));
    }

    #[test]
    fn test_stylesheet_embedded() {
        let content = PageContent::default();
        let html = Document::new("", &content).render().unwrap();
        assert!(html.contains(".badge{"));
        assert!(html.ends_with("</html>\n"));
    }
}
