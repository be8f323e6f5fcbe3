//! HTML rendering of the image cross-reference.
//!
//! The report is a single self-contained document with two tables: images
//! per article version, and article versions per image. Thumbnails are
//! referenced by their remote URL.

use std::fmt::Write;

use super::index::ImageIndex;
use crate::languages::language_name;

const STYLE: &str = "\
h1, h2 { background: #363636; color: white; padding: 0.4em 0.25em 0.25em 0.25em; }
html { font-family: sans-serif; background: white; color: #363636; white-space: nowrap; }
img { max-height: 125px; }
a { color: inherit; }
nav { font-weight: bold; }
td { background: #eff0f3; padding: 0.25em; }
*[title] { border-bottom: 1px dashed #363636; cursor: help; }";

/// Escapes text for use in element content and quoted attributes.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn file_page(language: &str, filename: &str) -> String {
    format!(
        "https://{}.wikipedia.org/wiki/File:{}",
        language,
        super::wiki_path(filename)
    )
}

/// Renders the report for the article that seeded the collection.
pub fn render_report(subject: &str, index: &ImageIndex) -> String {
    let mut html = String::new();

    // Writing to a String cannot fail.
    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Wikipedia Cross-Lingual Image Analysis &#8226; {}</title>\n\
         <style>\n{}\n</style>\n</head>\n<body>\n\
         <h1>Wikipedia Cross-Lingual Image Analysis</h1>\n\
         <nav>Navigate: <a href=\"#per-article\">Images per article</a> &#8226; \
         <a href=\"#per-image\">Articles per image</a></nav>\n",
        escape_html(subject),
        STYLE
    );

    html.push_str("<h2 id=\"per-article\">Images per article version</h2>\n<table>\n");
    html.push_str("<tr><th>Page</th><th>Language</th><th>Images</th></tr>\n");
    for article in index.articles() {
        let _ = write!(
            html,
            "<tr><td><a href=\"{}\">{}</a></td><td><span title=\"{}\">{}</span></td><td>",
            escape_html(&article.page_url),
            escape_html(&article.title),
            escape_html(&article.language),
            escape_html(language_name(&article.language))
        );
        for image in &article.images {
            let _ = write!(
                html,
                "<a href=\"{}\"><img src=\"{}\" alt=\"\"></a>",
                escape_html(&file_page(&article.language, &image.filename)),
                escape_html(&image.url)
            );
        }
        html.push_str("</td></tr>\n");
    }
    html.push_str("</table>\n");

    html.push_str("<h2 id=\"per-image\">Article versions per image</h2>\n<table>\n");
    html.push_str("<tr><th>Image</th><th>Occurrences</th>");
    for article in index.articles() {
        let _ = write!(
            html,
            "<th><a href=\"https://{}.wikipedia.org\"><span title=\"{}\">{}</span></a></th>",
            escape_html(&article.language),
            escape_html(language_name(&article.language)),
            escape_html(&article.language)
        );
    }
    html.push_str("</tr>\n");

    for entry in index.ranked() {
        let first_language = index
            .articles()
            .iter()
            .find(|a| entry.is_referenced_by(&a.page_url))
            .map_or("en", |a| a.language.as_str());
        let _ = write!(
            html,
            "<tr><td><a href=\"{}\"><img src=\"{}\" alt=\"\"></a></td><td>{}</td>",
            escape_html(&file_page(first_language, &entry.filename)),
            escape_html(&entry.url),
            entry.reference_count()
        );
        for article in index.articles() {
            html.push_str("<td>");
            if entry.is_referenced_by(&article.page_url) {
                let _ = write!(
                    html,
                    "<a href=\"{}\">&times;</a>",
                    escape_html(&article.page_url)
                );
            }
            html.push_str("</td>");
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</table>\n</body>\n</html>\n");

    html
}
