//! Standalone HTML page around a rendered fragment.

use chrono::{DateTime, Local};
use mdreader_config::PageConfig;
use mdreader_parser::{escape_html, push_escaped};
use std::time::SystemTime;

const STYLESHEET: &str = r#"* { margin: 0; padding: 0; box-sizing: border-box; }
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Microsoft JhengHei', 'Helvetica Neue', Arial, sans-serif; line-height: 1.6; color: #333; background-color: #f5f5f5; padding: 20px; }
.container { max-width: 1200px; margin: 0 auto; background: white; padding: 40px; border-radius: 8px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }
h1 { color: #2c3e50; border-bottom: 3px solid #3498db; padding-bottom: 10px; margin-bottom: 20px; }
h2 { color: #34495e; border-bottom: 2px solid #ecf0f1; padding-bottom: 8px; margin: 30px 0 15px; }
h3 { color: #555; margin: 25px 0 12px; }
h4, h5, h6 { color: #666; margin: 20px 0 10px; }
p { margin-bottom: 15px; }
table { width: 100%; border-collapse: collapse; margin: 20px 0; box-shadow: 0 1px 3px rgba(0,0,0,0.1); }
table thead { background-color: #3498db; color: white; }
table th { padding: 12px; text-align: left; font-weight: 600; }
table td { padding: 10px 12px; border-bottom: 1px solid #ecf0f1; }
table tbody tr:nth-child(even) { background-color: #fafafa; }
code { background-color: #f4f4f4; padding: 2px 6px; border-radius: 3px; font-family: 'Courier New', monospace; font-size: 0.9em; color: #e74c3c; }
pre { background-color: #2d2d2d; color: #f8f8f2; padding: 15px; border-radius: 5px; overflow-x: auto; margin: 20px 0; }
pre code { background-color: transparent; color: inherit; padding: 0; }
ul, ol { margin: 15px 0; padding-left: 30px; }
li { margin: 5px 0; }
hr { border: none; border-top: 2px solid #ecf0f1; margin: 30px 0; }
strong { font-weight: 600; color: #2c3e50; }
em { font-style: italic; color: #555; }
.file-list { display: flex; flex-wrap: wrap; gap: 8px; background-color: #3498db; padding: 20px; border-radius: 8px; margin-bottom: 20px; }
.file-list-item { background-color: rgba(255,255,255,0.2); color: white; padding: 6px 12px; border-radius: 4px; text-decoration: none; }
.file-list-item.current { background-color: rgba(255,255,255,0.4); font-weight: 600; }
.file-info { background-color: #ecf0f1; padding: 15px; border-radius: 5px; margin-bottom: 30px; font-size: 0.9em; color: #7f8c8d; }
.file-info strong { color: #34495e; }"#;

/// Everything the page shows besides the fragment itself.
#[derive(Debug, Clone)]
pub struct Page<'a> {
    pub config: &'a PageConfig,
    /// Name of the document being shown
    pub name: &'a str,
    /// Document size in bytes
    pub size: u64,
    /// Last modification time, when the document is a file
    pub modified: Option<SystemTime>,
    /// Catalog entries for the document switcher
    pub documents: &'a [String],
}

impl Page<'_> {
    /// Wrap `fragment` into a complete HTML document.
    pub fn render(&self, fragment: &str) -> String {
        let mut html = String::with_capacity(fragment.len() + STYLESHEET.len() + 1024);

        html.push_str("<!DOCTYPE html>\n");
        html.push_str(&format!("<html lang=\"{}\">\n", escape_html(&self.config.lang)));
        html.push_str("<head>\n<meta charset=\"UTF-8\">\n");
        html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
        html.push_str(&format!(
            "<title>{} - {}</title>\n",
            escape_html(&self.config.title_prefix),
            escape_html(self.name)
        ));
        html.push_str("<style>\n");
        html.push_str(STYLESHEET);
        html.push_str("\n</style>\n</head>\n<body>\n<div class=\"container\">\n");

        if self.documents.len() > 1 {
            self.push_switcher(&mut html);
        }

        html.push_str("<div class=\"file-info\"><strong>File:</strong> ");
        push_escaped(&mut html, self.name);
        html.push_str(&format!(
            " | <strong>Size:</strong> {} bytes",
            group_thousands(self.size)
        ));
        if let Some(modified) = self.modified {
            html.push_str(&format!(
                " | <strong>Modified:</strong> {}",
                format_modified(modified)
            ));
        }
        html.push_str("</div>\n");

        html.push_str("<div class=\"markdown-content\">\n");
        html.push_str(fragment);
        html.push_str("\n</div>\n</div>\n</body>\n</html>\n");
        html
    }

    fn push_switcher(&self, html: &mut String) {
        html.push_str("<nav class=\"file-list\">\n");
        for name in self.documents {
            let class = if name == self.name {
                "file-list-item current"
            } else {
                "file-list-item"
            };
            html.push_str(&format!(
                "<a href=\"{}\" class=\"{}\">{}</a>\n",
                escape_html(&page_href(name)),
                class,
                escape_html(name)
            ));
        }
        html.push_str("</nav>\n");
    }
}

/// Output file name for a rendered document: `guide.md` becomes `guide.html`.
pub fn page_file_name(name: &str) -> String {
    let stem = name
        .len()
        .checked_sub(3)
        .filter(|&split| name.is_char_boundary(split) && name[split..].eq_ignore_ascii_case(".md"))
        .map_or(name, |split| &name[..split]);
    format!("{}.html", stem)
}

/// Switcher link target: the page file name, percent-encoded.
fn page_href(name: &str) -> String {
    urlencoding::encode(&page_file_name(name)).into_owned()
}

/// Format a modification time as local `YYYY-MM-DD HH:MM:SS`.
fn format_modified(time: SystemTime) -> String {
    DateTime::<Local>::from(time)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

/// Format a byte count with comma thousands separators.
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn page<'a>(config: &'a PageConfig, name: &'a str, documents: &'a [String]) -> Page<'a> {
        Page {
            config,
            name,
            size: 1234,
            modified: None,
            documents,
        }
    }

    #[test]
    fn test_page_skeleton() {
        let config = PageConfig::default();
        let html = page(&config, "a.md", &[]).render("<p>x</p>");

        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"zh-TW\">"));
        assert!(html.contains("<title>Markdown Reader - a.md</title>"));
        assert!(html.contains("<div class=\"markdown-content\">\n<p>x</p>\n</div>"));
        assert!(html.contains("<strong>Size:</strong> 1,234 bytes"));
        assert!(html.ends_with("</html>\n"));
    }

    #[test]
    fn test_switcher_only_with_several_documents() {
        let config = PageConfig::default();
        let single = vec!["a.md".to_string()];
        assert!(!page(&config, "a.md", &single).render("").contains("file-list"));

        let several = vec!["a.md".to_string(), "b.md".to_string()];
        let html = page(&config, "b.md", &several).render("");
        assert!(html.contains("<a href=\"a.html\" class=\"file-list-item\">a.md</a>"));
        assert!(html.contains("<a href=\"b.html\" class=\"file-list-item current\">b.md</a>"));
    }

    #[test]
    fn test_names_are_escaped() {
        let config = PageConfig {
            title_prefix: "R&D".to_string(),
            ..PageConfig::default()
        };
        let html = page(&config, "<x>.md", &[]).render("");
        assert!(html.contains("<title>R&amp;D - &lt;x&gt;.md</title>"));
        assert!(html.contains("<strong>File:</strong> &lt;x&gt;.md |"));
    }

    #[test]
    fn test_switcher_links_are_percent_encoded() {
        let config = PageConfig::default();
        let documents = vec![
            "C#.md".to_string(),
            "50%.md".to_string(),
            "a b.md".to_string(),
            "說明.md".to_string(),
        ];
        let html = page(&config, "C#.md", &documents).render("");

        assert!(html.contains("<a href=\"C%23.html\" class=\"file-list-item current\">C#.md</a>"));
        assert!(html.contains("<a href=\"50%25.html\" class=\"file-list-item\">50%.md</a>"));
        assert!(html.contains("<a href=\"a%20b.html\" class=\"file-list-item\">a b.md</a>"));
        assert!(html.contains("<a href=\"%E8%AA%AA%E6%98%8E.html\""));
    }

    #[test]
    fn test_modified_time_shown_when_known() {
        let config = PageConfig::default();
        let without = page(&config, "a.md", &[]).render("");
        assert!(!without.contains("Modified:"));

        let time = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        let with = Page {
            modified: Some(time),
            ..page(&config, "a.md", &[])
        }
        .render("");
        let expected = DateTime::<Local>::from(time)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string();
        assert!(with.contains(&format!(
            "<strong>Size:</strong> 1,234 bytes | <strong>Modified:</strong> {}</div>",
            expected
        )));
    }

    #[test]
    fn test_format_modified_shape() {
        let formatted = format_modified(SystemTime::UNIX_EPOCH + Duration::from_secs(86_400 * 365));
        let bytes = formatted.as_bytes();
        assert_eq!(bytes.len(), 19);
        assert_eq!((bytes[4], bytes[7], bytes[10], bytes[13], bytes[16]), (b'-', b'-', b' ', b':', b':'));
        assert!(formatted.starts_with("1970-") || formatted.starts_with("1971-"));
    }

    #[test]
    fn test_page_file_name() {
        assert_eq!(page_file_name("guide.md"), "guide.html");
        assert_eq!(page_file_name("NOTES.MD"), "NOTES.html");
        assert_eq!(page_file_name("stdin"), "stdin.html");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }
}
