use maud::{Markup, html};
use orbitdash_core::OsdrDataset;

use super::{fmt_time, layout, notice};

/// OSDR listing. `Err` carries the message shown instead of the table.
pub fn osdr_page(datasets: Result<&[OsdrDataset], &str>) -> Markup {
    layout(
        "OSDR",
        html! {
            h1 { "NASA OSDR datasets" }
            @match datasets {
                Err(message) => (notice(message)),
                Ok([]) => p.muted { "No datasets have been collected yet." },
                Ok(datasets) => {
                    table.card {
                        thead {
                            tr {
                                th { "Title" }
                                th { "Dataset" }
                                th { "Status" }
                                th { "Updated" }
                                th { "Inserted" }
                            }
                        }
                        tbody {
                            @for d in datasets {
                                tr {
                                    td {
                                        @if let Some(url) = &d.rest_url {
                                            a href=(url) rel="noopener" target="_blank" { (d.label()) }
                                        } @else {
                                            (d.label())
                                        }
                                    }
                                    td { (d.dataset_id.as_deref().unwrap_or("n/a")) }
                                    td { (d.status.as_deref().unwrap_or("n/a")) }
                                    td { (fmt_time(d.updated_at.as_ref())) }
                                    td { (fmt_time(d.inserted_at.as_ref())) }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}
