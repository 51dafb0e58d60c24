//! Table rendering.

/// Render a table with a header row and body rows.
///
/// Cells are inline HTML already. An empty body still produces `<tbody>`.
pub fn render_table(header: &[String], rows: &[Vec<String>]) -> String {
    let mut html = String::from("<table><thead><tr>");
    for cell in header {
        push_cell(&mut html, "th", cell);
    }
    html.push_str("</tr></thead><tbody>");

    for row in rows {
        html.push_str("<tr>");
        for cell in row {
            push_cell(&mut html, "td", cell);
        }
        html.push_str("</tr>");
    }

    html.push_str("</tbody></table>");
    html
}

fn push_cell(html: &mut String, tag: &str, content: &str) {
    html.push('<');
    html.push_str(tag);
    html.push('>');
    html.push_str(content);
    html.push_str("</");
    html.push_str(tag);
    html.push('>');
}
