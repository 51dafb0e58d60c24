//! Code block rendering.

use mdreader_parser::push_escaped;

/// Render a fenced code block.
///
/// The text is escaped verbatim; no inline formatting is applied. A language
/// tag becomes a `language-*` class on the `<code>` element.
pub fn render_code_block(language: Option<&str>, code: &str) -> String {
    let mut html = String::with_capacity(code.len() + 40);
    html.push_str("<pre><code");
    if let Some(lang) = language {
        html.push_str(" class=\"language-");
        push_escaped(&mut html, lang);
        html.push('"');
    }
    html.push('>');
    push_escaped(&mut html, code);
    html.push_str("</code></pre>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_block_with_language() {
        assert_eq!(
            render_code_block(Some("js"), "code"),
            r#"<pre><code class="language-js">code</code></pre>"#
        );
    }

    #[test]
    fn test_code_block_without_language() {
        assert_eq!(
            render_code_block(None, "a\nb"),
            "<pre><code>a\nb</code></pre>"
        );
    }

    #[test]
    fn test_code_block_is_escaped_not_formatted() {
        assert_eq!(
            render_code_block(None, "if a < b && *p { \"x\" }"),
            "<pre><code>if a &lt; b &amp;&amp; *p { &quot;x&quot; }</code></pre>"
        );
    }
}
