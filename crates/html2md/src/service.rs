//! Html2MdService - the main entry point for HTML to text conversion.

use html2md_core::{dump_tree, render, Document, Options};
use log::debug;

use crate::html::parse_html;

/// The main service for converting HTML to Markdown-flavored text
#[derive(Debug, Clone, Default)]
pub struct Html2MdService {
    options: Options,
}

impl Html2MdService {
    /// Create a service with default options
    pub fn new() -> Self {
        Self {
            options: Options::default(),
        }
    }

    /// Create a service with custom options
    pub fn with_options(options: Options) -> Self {
        Self { options }
    }

    /// Convert an HTML string. Never fails; empty input gives empty output.
    pub fn convert(&self, html: &str) -> String {
        let document = self.parse(html);
        self.convert_document(&document)
    }

    /// Build the tree for an HTML string without rendering it
    pub fn parse(&self, html: &str) -> Document {
        let document = parse_html(html, &self.options);
        debug!("built tree with {} node(s)", document.len());
        if self.options.dump_tree {
            debug!("tree:\n{}", dump_tree(&document));
        }
        document
    }

    /// Render an already built tree
    pub fn convert_document(&self, document: &Document) -> String {
        render(document, &self.options)
    }

    /// Get the current options
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_paragraph() {
        let service = Html2MdService::new();
        assert_eq!(service.convert("<p>Hello World</p>"), "Hello World");
    }

    #[test]
    fn test_empty_input() {
        let service = Html2MdService::new();
        assert_eq!(service.convert(""), "");
        assert_eq!(service.convert("   \n  "), "");
    }

    #[test]
    fn test_whole_page() {
        let service = Html2MdService::new();
        let html = r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8">
    <title>Page</title>
    <link rel="stylesheet" href="site.css">
    <style>body { margin: 0 }</style>
  </head>
  <body>
    <h1>Report</h1>
    <p>Numbers   for
       the quarter.</p>
    <table>
      <thead><tr><th>Region</th><th>Total</th></tr></thead>
      <tbody>
        <tr><td>North</td><td>10</td></tr>
        <tr><td>South</td></tr>
      </tbody>
    </table>
    <hr>
    <p>End</p>
    <script>track();</script>
  </body>
</html>"#;

        assert_eq!(
            service.convert(html),
            "Page\n\nReport\n\nNumbers for the quarter.\n\n\
             | Region | Total |\n|---|---|\n| North | 10 |\n| South |  |\n\n\
             ---\n\nEnd"
        );
    }

    #[test]
    fn test_custom_ignore_set() {
        let options = Options::default().ignore("nav");
        let service = Html2MdService::with_options(options);
        let result = service.convert("<nav><a href=\"/\">Home</a></nav><p>Article</p>");
        assert_eq!(result, "Article");
    }

    #[test]
    fn test_unignored_tag_is_rendered() {
        let mut service = Html2MdService::new();
        let options = service.options().clone().unignore("noscript");
        *service.options_mut() = options;
        let result = service.convert("<noscript>Enable JS</noscript><p>x</p>");
        assert_eq!(result, "Enable JS\n\nx");
    }

    #[test]
    fn test_parse_then_convert() {
        let service = Html2MdService::new();
        let document = service.parse("<p>a</p><p>b</p>");
        assert_eq!(service.convert_document(&document), "a\n\nb");
    }
}
