//! HTML page templates.
//!
//! Produces standalone HTML5 pages: a head referencing the shared stylesheet,
//! the document body, and a footer with the back link. Code block bodies go
//! through [`escape_html`] only, so their text survives byte-for-byte.

use std::fmt::Write;

use quire_content::{ContentNode, Document, LinkTarget, PAGE_EXTENSION, Span};

use crate::escape::escape_html;

/// Relative URL of a link target (`index.html`, `{slug}.html`).
///
/// All pages live side by side, so a bare file name is enough.
pub fn page_href(target: &LinkTarget) -> String {
    format!("{}.{PAGE_EXTENSION}", target.slug())
}

/// Render one document to a complete HTML page.
pub(crate) fn render_page(doc: &Document, stylesheet: &str) -> String {
    let mut html = String::with_capacity(4096);

    render_head(&mut html, &doc.title, stylesheet);
    html.push_str("<body>\n<main>\n<article>\n");
    let _ = writeln!(html, "<h1>{}</h1>", escape_html(&doc.title));

    for node in &doc.content {
        render_node(&mut html, node);
    }

    html.push_str("</article>\n</main>\n");
    html.push_str("<footer>\n");
    let _ = writeln!(
        html,
        "<a href=\"{}\">{}</a>",
        escape_html(&page_href(&doc.footer.target)),
        escape_html(&doc.footer.label),
    );
    html.push_str("</footer>\n");
    html.push_str("</body>\n</html>\n");
    html
}

/// Render the site index: one link per document, in document order.
pub(crate) fn render_index_page(documents: &[Document], title: &str, stylesheet: &str) -> String {
    let mut html = String::with_capacity(1024 + documents.len() * 128);

    render_head(&mut html, title, stylesheet);
    html.push_str("<body>\n<main>\n");
    let _ = writeln!(html, "<h1>{}</h1>", escape_html(title));
    html.push_str("<ul>\n");
    for doc in documents {
        let href = page_href(&LinkTarget::Document(doc.slug.clone()));
        let _ = writeln!(
            html,
            "<li><a href=\"{}\">{}</a></li>",
            escape_html(&href),
            escape_html(&doc.title),
        );
    }
    html.push_str("</ul>\n</main>\n</body>\n</html>\n");
    html
}

fn render_head(html: &mut String, title: &str, stylesheet: &str) {
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(html, "<title>{}</title>", escape_html(title));
    let _ = writeln!(
        html,
        "<link rel=\"stylesheet\" href=\"{}\">",
        escape_html(stylesheet)
    );
    html.push_str("</head>\n");
}

fn render_node(html: &mut String, node: &ContentNode) {
    match node {
        ContentNode::Heading { level, text } => {
            let level = level.as_u8();
            let _ = writeln!(html, "<h{level}>{}</h{level}>", escape_html(text));
        }
        ContentNode::Paragraph { spans } => {
            html.push_str("<p>");
            for span in spans {
                render_span(html, span);
            }
            html.push_str("</p>\n");
        }
        ContentNode::CodeBlock { language, body } => {
            if language.is_empty() {
                let _ = writeln!(html, "<pre><code>{}</code></pre>", escape_html(body));
            } else {
                let _ = writeln!(
                    html,
                    "<pre><code class=\"language-{}\">{}</code></pre>",
                    escape_html(language),
                    escape_html(body)
                );
            }
        }
    }
}

fn render_span(html: &mut String, span: &Span) {
    match &span.href {
        Some(href) => {
            let _ = write!(
                html,
                "<a href=\"{}\">{}</a>",
                escape_html(href),
                escape_html(&span.text)
            );
        }
        None => html.push_str(&escape_html(&span.text)),
    }
}
