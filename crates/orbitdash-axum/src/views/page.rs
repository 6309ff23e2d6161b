use maud::{Markup, PreEscaped, html};
use orbitdash_core::Page;

use super::{fmt_time, layout};

/// A CMS page. The body is stored HTML and is emitted as-is.
pub fn cms_page(page: &Page) -> Markup {
    layout(
        &page.title,
        html! {
            article.card {
                h1 { (page.title) }
                (PreEscaped(&page.body))
                p.muted { "Updated " (fmt_time(Some(&page.updated_at))) }
            }
        },
    )
}
