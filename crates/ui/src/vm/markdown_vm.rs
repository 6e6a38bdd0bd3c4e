use std::collections::{HashMap, HashSet};

/// Heading shown above a rendered recommendation.
pub const RESULT_TITLE: &str = "Course recommendation";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultVm {
    pub title: &'static str,
    pub html: String,
}

/// Render a successful response body for display.
#[must_use]
pub fn present_result(body: &str) -> ResultVm {
    ResultVm {
        title: RESULT_TITLE,
        html: markdown_to_html(body),
    }
}

#[must_use]
pub fn markdown_to_html(input: &str) -> String {
    let mut options = pulldown_cmark::Options::empty();
    options.insert(pulldown_cmark::Options::ENABLE_STRIKETHROUGH);
    options.insert(pulldown_cmark::Options::ENABLE_TABLES);
    options.insert(pulldown_cmark::Options::ENABLE_TASKLISTS);

    let parser = pulldown_cmark::Parser::new_ext(input, options);
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    sanitize_html(&html)
}

#[must_use]
pub fn sanitize_html(html: &str) -> String {
    let tags: HashSet<&str> = [
        "p", "br", "hr", "em", "strong", "del", "code", "pre", "blockquote", "ul", "ol", "li",
        "a", "h1", "h2", "h3", "h4", "h5", "h6", "table", "thead", "tbody", "tr", "th", "td",
    ]
    .into_iter()
    .collect();

    let mut attributes: HashMap<&str, HashSet<&str>> = HashMap::new();
    attributes.insert("a", ["href"].into_iter().collect());
    attributes.insert("ol", ["start"].into_iter().collect());

    ammonia::Builder::new()
        .tags(tags)
        .tag_attributes(attributes)
        .clean(html)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::{markdown_to_html, present_result};

    #[test]
    fn renders_grouped_course_list() {
        let html = markdown_to_html(
            "## Electrical & Computer Engineering\n\n- **ECE 564** - Mobile App Development\n",
        );
        assert!(html.contains("<h2>Electrical &amp; Computer Engineering</h2>"), "{html}");
        assert!(html.contains("<li><strong>ECE 564</strong> - Mobile App Development</li>"), "{html}");
    }

    #[test]
    fn renders_gfm_tables_and_strikethrough() {
        let html = markdown_to_html("| Term | Course |\n|---|---|\n| Fall | CS 571 |\n\n~~old~~");
        assert!(html.contains("<table>"), "{html}");
        assert!(html.contains("<td>CS 571</td>"), "{html}");
        assert!(html.contains("<del>old</del>"), "{html}");
    }

    #[test]
    fn strips_scripts_and_javascript_links() {
        let html = markdown_to_html("<script>alert(1)</script>\n\n[Link](javascript:alert(1))");
        assert!(!html.contains("<script"), "{html}");
        assert!(!html.contains("javascript:"), "{html}");
        assert!(html.contains("Link"), "{html}");
    }

    #[test]
    fn present_result_uses_fixed_title() {
        let vm = present_result("Take **CS 590**.");
        assert_eq!(vm.title, "Course recommendation");
        assert!(vm.html.contains("<strong>CS 590</strong>"));
    }
}
