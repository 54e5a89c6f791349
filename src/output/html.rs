use pulldown_cmark::{Options, Parser, html};

/// Converts the report markdown to HTML and wraps it in the fixed document
/// shell (title and inline stylesheet).
pub fn render_document(report_text: &str, year: i32) -> String {
    let parser = Parser::new_ext(report_text, Options::empty());
    let mut body = String::new();
    html::push_html(&mut body, parser);

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>FDA Device Recall Report {year}</title>
    <style>
        body {{ font-family: Arial, sans-serif; max-width: 800px; margin: 40px auto; padding: 20px; line-height: 1.6; }}
        h1 {{ color: #2c3e50; border-bottom: 2px solid #3498db; padding-bottom: 10px; }}
        h2 {{ color: #34495e; margin-top: 30px; }}
        li {{ margin-bottom: 6px; }}
    </style>
</head>
<body>
{body}</body>
</html>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings_and_bullets_convert() {
        let doc = render_document("## Key Findings\n\n- First\n- Second\n", 2024);
        assert!(doc.contains("<h2>Key Findings</h2>"));
        assert!(doc.contains("<li>First</li>"));
        assert!(doc.contains("<li>Second</li>"));
    }

    #[test]
    fn test_shell_carries_title_and_stylesheet() {
        let doc = render_document("plain text", 2024);
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<title>FDA Device Recall Report 2024</title>"));
        assert!(doc.contains("font-family: Arial, sans-serif"));
        assert!(doc.ends_with("</html>"));
    }

    #[test]
    fn test_title_tracks_year() {
        let doc = render_document("x", 2019);
        assert!(doc.contains("<title>FDA Device Recall Report 2019</title>"));
    }
}
