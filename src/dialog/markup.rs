/// Loading-indicator markup shown while the confirmation content resolves.
pub fn loading_markup() -> &'static str {
    r#"<p class="loading"><span class="spinner"></span></p>"#
}

/// Renders the changed-field notice list into dialog body markup.
pub trait NoticeRenderer {
    fn render(&self, title: &str, notices: &[String]) -> String;
}

/// Self-contained HTML: heading, changed-field list, all text escaped.
pub struct HtmlNoticeRenderer;

impl NoticeRenderer for HtmlNoticeRenderer {
    fn render(&self, title: &str, notices: &[String]) -> String {
        let mut out = String::new();
        out.push_str(&format!("<h3>{}</h3>\n", escape_html(title)));

        if notices.is_empty() {
            out.push_str("<p class=\"no-changes\">No fields were changed.</p>\n");
            return out;
        }

        out.push_str("<ul class=\"changed-fields\">\n");
        for notice in notices {
            out.push_str(&format!("<li>{}</li>\n", escape_html(notice)));
        }
        out.push_str("</ul>\n");
        out
    }
}

/// Escape text for embedding in HTML markup.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
