//! Incremental SVG text builder
//!
//! Elements are kept in insertion order and numbers are rounded to two
//! decimals, so identical calls always build identical text.

use super::AvatarConfig;

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: AvatarConfig,
    title: Option<String>,
    elements: Vec<String>,
    indent: usize,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: AvatarConfig) -> Self {
        Self {
            config,
            title: None,
            elements: vec![],
            indent: 1,
        }
    }

    /// Set the document title
    pub fn set_title(&mut self, title: &str) {
        self.title = Some(escape_xml(title));
    }

    fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    fn class_attr(&self, class: Option<&str>) -> String {
        class
            .map(|c| format!(r#" class="{}{}""#, self.prefix(), c))
            .unwrap_or_default()
    }

    /// Add a circle element
    pub fn add_circle(&mut self, class: Option<&str>, cx: f64, cy: f64, r: f64, styles: &str) {
        self.elements.push(format!(
            r#"{}<circle{} cx="{}" cy="{}" r="{}"{}/>"#,
            self.indent_str(),
            self.class_attr(class),
            fmt_num(cx),
            fmt_num(cy),
            fmt_num(r),
            styles
        ));
    }

    /// Add a rectangle element
    pub fn add_rect(&mut self, class: Option<&str>, x: f64, y: f64, w: f64, h: f64, styles: &str) {
        self.elements.push(format!(
            r#"{}<rect{} x="{}" y="{}" width="{}" height="{}"{}/>"#,
            self.indent_str(),
            self.class_attr(class),
            fmt_num(x),
            fmt_num(y),
            fmt_num(w),
            fmt_num(h),
            styles
        ));
    }

    /// Open a group element
    pub fn start_group(&mut self, class: Option<&str>, styles: &str) {
        self.elements.push(format!(
            "{}<g{}{}>",
            self.indent_str(),
            self.class_attr(class),
            styles
        ));
        self.indent += 1;
    }

    /// Close a group element
    pub fn end_group(&mut self) {
        self.indent = self.indent.saturating_sub(1);
        self.elements.push(format!("{}</g>", self.indent_str()));
    }

    /// Build the final SVG string for a square canvas
    pub fn build(self) -> String {
        let size = fmt_num(self.config.size);
        let nl = self.newline();

        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#
        ));
        svg.push_str(nl);

        if let Some(title) = &self.title {
            svg.push_str(&self.indent_str_at(1));
            svg.push_str(&format!("<title>{}</title>", title));
            svg.push_str(nl);
        }

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");
        svg.push_str(nl);

        svg
    }

    fn indent_str_at(&self, level: usize) -> String {
        if self.config.pretty_print {
            "  ".repeat(level)
        } else {
            String::new()
        }
    }
}

/// Format a coordinate rounded to two decimals, without trailing zeros
pub fn fmt_num(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        // avoid "-0"
        return "0".to_string();
    }
    format!("{}", rounded)
}

/// Escape special XML characters
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
