//! Server-rendered HTML views.
//!
//! Every page goes through [`layout`], which provides the document shell and
//! the navigation bar.

mod dashboard;
mod error;
mod iss;
mod osdr;
mod page;

use chrono::{DateTime, Utc};
use maud::{DOCTYPE, Markup, PreEscaped, html};

pub use dashboard::{DashboardView, dashboard};
pub use error::error_page;
pub use iss::iss_page;
pub use osdr::osdr_page;
pub use page::cms_page;

/// Title used when a page does not set one.
pub const DEFAULT_TITLE: &str = "Space Dashboard";

const STYLES: &str = r"
body { margin: 0; padding-top: 64px; font-family: system-ui, sans-serif; background: #f6f7f9; color: #1d232a; }
nav { position: fixed; top: 0; left: 0; right: 0; background: #1d232a; }
nav .container { display: flex; gap: 1.5rem; align-items: center; height: 52px; }
nav a { color: #e6e9ee; text-decoration: none; }
nav a.brand { font-weight: 600; }
.container { max-width: 1140px; margin: 0 auto; padding: 0 1rem; }
.grid { display: grid; gap: 1rem; grid-template-columns: repeat(auto-fill, minmax(320px, 1fr)); }
.card { background: #fff; border: 1px solid #dde1e6; border-radius: 8px; padding: 1rem; }
.notice { background: #fff4e5; border: 1px solid #f3c784; border-radius: 8px; padding: 0.75rem 1rem; }
.gallery { display: grid; gap: 0.75rem; grid-template-columns: repeat(auto-fill, minmax(180px, 1fr)); }
.gallery img { width: 100%; height: 160px; object-fit: cover; border-radius: 6px; }
table { width: 100%; border-collapse: collapse; }
th, td { text-align: left; padding: 0.4rem 0.5rem; border-bottom: 1px solid #e4e7eb; }
.muted { color: #6b7580; font-size: 0.9em; }
";

/// Page shell with the default head and no extra scripts.
pub fn layout(title: &str, content: Markup) -> Markup {
    layout_with(title, None, content, None)
}

/// Page shell with optional extra `<head>` content and trailing scripts.
pub fn layout_with(
    title: &str,
    head: Option<Markup>,
    content: Markup,
    scripts: Option<Markup>,
) -> Markup {
    let title = if title.trim().is_empty() {
        DEFAULT_TITLE
    } else {
        title
    };

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                style { (PreEscaped(STYLES)) }
                @if let Some(head) = head {
                    (head)
                }
            }
            body {
                nav {
                    div.container {
                        a.brand href="/dashboard" { "Dashboard" }
                        a href="/iss" { "ISS" }
                        a href="/osdr" { "OSDR" }
                    }
                }
                main.container {
                    (content)
                }
                @if let Some(scripts) = scripts {
                    (scripts)
                }
            }
        }
    }
}

/// Inline warning shown in place of a section whose data is unavailable.
pub(crate) fn notice(message: &str) -> Markup {
    html! {
        div.notice role="status" { (message) }
    }
}

pub(crate) fn fmt_time(time: Option<&DateTime<Utc>>) -> String {
    time.map_or_else(
        || "n/a".to_string(),
        |t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
    )
}

pub(crate) fn fmt_num(value: Option<f64>, decimals: usize) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{v:.decimals$}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_has_shell_and_nav() {
        let html = layout("", html! { p { "hi" } }).into_string();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Space Dashboard</title>"));
        assert!(html.contains(r#"href="/dashboard""#));
        assert!(html.contains(r#"href="/iss""#));
        assert!(html.contains(r#"href="/osdr""#));
        assert!(html.contains("<p>hi</p>"));
    }

    #[test]
    fn layout_escapes_title() {
        let html = layout("<script>", html! {}).into_string();
        assert!(html.contains("<title>&lt;script&gt;</title>"));
    }

    #[test]
    fn layout_with_slots() {
        let html = layout_with(
            "x",
            Some(html! { meta name="robots" content="noindex"; }),
            html! {},
            Some(html! { script { "void 0" } }),
        )
        .into_string();
        assert!(html.contains(r#"<meta name="robots" content="noindex">"#));
        assert!(html.contains("<script>void 0</script>"));
    }

    #[test]
    fn formats_missing_values() {
        assert_eq!(fmt_num(None, 2), "n/a");
        assert_eq!(fmt_num(Some(1.23456), 2), "1.23");
        assert_eq!(fmt_time(None), "n/a");
    }
}
