use axum::http::StatusCode;
use maud::{Markup, html};

use super::layout;

pub fn error_page(status: StatusCode, message: &str) -> Markup {
    let reason = status.canonical_reason().unwrap_or("Error");
    layout(
        reason,
        html! {
            div.card {
                h1 { (status.as_u16()) " " (reason) }
                p { (message) }
                p { a href="/dashboard" { "Back to the dashboard" } }
            }
        },
    )
}
