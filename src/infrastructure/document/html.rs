use crate::domain::timestamp::{TimestampDocument, TimestampElement};
use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

// Comments and script/style bodies are matched first so `<time>` markup inside
// them is consumed without being treated as an element.
static TIME_ELEMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?is)<!--.*?(?:-->|\z)",
        r#"|<script\b(?:[^>"']|"[^"]*"|'[^']*')*>.*?(?:</script\s*>|\z)"#,
        r#"|<style\b(?:[^>"']|"[^"]*"|'[^']*')*>.*?(?:</style\s*>|\z)"#,
        r#"|<time\b(?P<attrs>(?:[^>"']|"[^"]*"|'[^']*')*)>(?P<content>.*?)</time\s*>"#,
    ))
    .expect("time element pattern is valid")
});

static DATETIME_ATTR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)(?:^|\s)datetime\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+))"#)
        .expect("datetime attribute pattern is valid")
});

/// A `<time>` element found in an HTML document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlTimeElement {
    utc_instant: Option<String>,
    content: Range<usize>,
    inner_html: String,
}

impl HtmlTimeElement {
    #[cfg(test)]
    fn inner_html(&self) -> &str {
        &self.inner_html
    }
}

impl TimestampElement for HtmlTimeElement {
    fn utc_instant(&self) -> Option<&str> {
        self.utc_instant.as_deref()
    }

    fn set_text(&mut self, text: &str) {
        self.inner_html = escape_text(text);
    }
}

/// HTML source whose `<time datetime="...">` elements can be rewritten.
///
/// Only element content changes; every byte outside the `<time>` bodies,
/// including the tags and their attributes, is rendered back verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlDocument {
    source: String,
    elements: Vec<HtmlTimeElement>,
}

impl HtmlDocument {
    #[must_use]
    pub fn parse(source: impl Into<String>) -> Self {
        let source = source.into();
        let elements = TIME_ELEMENT
            .captures_iter(&source)
            .filter_map(|caps| {
                let attrs = caps.name("attrs")?.as_str();
                let content = caps.name("content")?;
                Some(HtmlTimeElement {
                    utc_instant: datetime_attribute(attrs),
                    content: content.range(),
                    inner_html: content.as_str().to_string(),
                })
            })
            .collect();

        Self { source, elements }
    }

    #[must_use]
    pub fn elements(&self) -> &[HtmlTimeElement] {
        &self.elements
    }

    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.source.len());
        let mut cursor = 0;
        for element in &self.elements {
            out.push_str(&self.source[cursor..element.content.start]);
            out.push_str(&element.inner_html);
            cursor = element.content.end;
        }
        out.push_str(&self.source[cursor..]);
        out
    }
}

impl TimestampDocument for HtmlDocument {
    fn visit_timestamps(&mut self, visitor: &mut dyn FnMut(&mut dyn TimestampElement)) {
        for element in &mut self.elements {
            visitor(element);
        }
    }
}

fn datetime_attribute(attrs: &str) -> Option<String> {
    let caps = DATETIME_ATTR.captures(attrs)?;
    caps.get(1)
        .or_else(|| caps.get(2))
        .or_else(|| caps.get(3))
        .map(|value| value.as_str().trim().to_string())
}

fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<ul>
  <li class="status">shipped it <TIME class="ts" datetime="2024-06-01T16:05:00Z">16:05 UTC</TIME></li>
  <li><time datetime='2024-06-01T09:07:00+00:00'><b>9:07</b></time></li>
  <li><time pubdate datetime=2024-06-01T00:00:00Z>x</time></li>
  <li><time>no attribute</time></li>
</ul>"#;

    #[test]
    fn finds_time_elements_with_any_quoting() {
        let doc = HtmlDocument::parse(PAGE);
        let instants: Vec<_> = doc.elements().iter().map(|e| e.utc_instant()).collect();
        assert_eq!(
            instants,
            vec![
                Some("2024-06-01T16:05:00Z"),
                Some("2024-06-01T09:07:00+00:00"),
                Some("2024-06-01T00:00:00Z"),
                None,
            ]
        );
        assert_eq!(doc.elements()[1].inner_html(), "<b>9:07</b>");
    }

    #[test]
    fn untouched_document_renders_verbatim() {
        assert_eq!(HtmlDocument::parse(PAGE).render(), PAGE);
        assert_eq!(HtmlDocument::parse("no times here").render(), "no times here");
    }

    #[test]
    fn set_text_only_changes_element_content() {
        let mut doc = HtmlDocument::parse(r#"<p>at <time datetime="x" class="a">old</time>.</p>"#);
        doc.visit_timestamps(&mut |element: &mut dyn TimestampElement| element.set_text("4:05 pm"));
        assert_eq!(
            doc.render(),
            r#"<p>at <time datetime="x" class="a">4:05 pm</time>.</p>"#
        );
    }

    #[test]
    fn text_is_escaped() {
        let mut doc = HtmlDocument::parse("<time datetime=\"x\"></time>");
        doc.visit_timestamps(&mut |element: &mut dyn TimestampElement| element.set_text("a<b & c>"));
        assert_eq!(
            doc.render(),
            "<time datetime=\"x\">a&lt;b &amp; c&gt;</time>"
        );
    }

    #[test]
    fn quoted_angle_bracket_stays_inside_the_tag() {
        let mut doc = HtmlDocument::parse(
            r#"<p><time datetime="2024-01-15T21:05:00Z" title="a>b">old</time></p>"#,
        );
        assert_eq!(doc.elements().len(), 1);
        assert_eq!(doc.elements()[0].utc_instant(), Some("2024-01-15T21:05:00Z"));
        doc.visit_timestamps(&mut |element: &mut dyn TimestampElement| element.set_text("4:05 pm"));
        assert_eq!(
            doc.render(),
            r#"<p><time datetime="2024-01-15T21:05:00Z" title="a>b">4:05 pm</time></p>"#
        );
    }

    #[test]
    fn time_markup_in_comments_and_scripts_is_not_an_element() {
        let source = concat!(
            r#"<!-- <time datetime="2024-01-15T21:05:00Z">keep</time> -->"#,
            r#"<script>var t = '<time datetime="2024-01-15T21:05:00Z">js</time>';</script>"#,
            r#"<style>/* <time datetime="x">css</time> */</style>"#,
            r#"<time datetime="2024-01-15T09:07:00Z">real</time>"#,
        );
        let mut doc = HtmlDocument::parse(source);
        assert_eq!(doc.elements().len(), 1);
        assert_eq!(doc.elements()[0].inner_html(), "real");

        doc.visit_timestamps(&mut |element: &mut dyn TimestampElement| element.set_text("X"));
        assert_eq!(doc.render(), source.replace(">real<", ">X<"));
    }

    #[test]
    fn unterminated_comment_hides_the_rest() {
        let doc = HtmlDocument::parse(r#"<!-- <time datetime="x">a</time>"#);
        assert!(doc.elements().is_empty());
    }

    #[test]
    fn data_datetime_is_not_the_datetime_attribute() {
        let doc = HtmlDocument::parse(r#"<time data-datetime="nope">x</time>"#);
        assert_eq!(doc.elements()[0].utc_instant(), None);
    }
}
