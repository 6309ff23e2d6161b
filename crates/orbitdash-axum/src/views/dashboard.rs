use maud::{Markup, PreEscaped, html};
use orbitdash_core::{AstroEvents, IssOverview, JwstFeed};

use super::iss::{position_card, trend_card};
use super::{layout_with, notice};

/// Refreshes the ISS coordinates from the proxy without reloading the page.
const REFRESH_SCRIPT: &str = r"
(function () {
  var el = document.getElementById('iss-position');
  if (!el) return;
  setInterval(function () {
    fetch('/api/iss/last')
      .then(function (r) { return r.ok ? r.json() : null; })
      .then(function (j) {
        if (!j) return;
        var p = j.payload || j;
        if (typeof p.latitude === 'number' && typeof p.longitude === 'number') {
          el.textContent = p.latitude.toFixed(4) + ', ' + p.longitude.toFixed(4);
        }
      })
      .catch(function () {});
  }, 15000);
})();
";

/// Everything the dashboard shows. Failed sections carry the message to
/// display in their place.
pub struct DashboardView {
    pub iss: IssOverview,
    pub jwst: Result<JwstFeed, String>,
    pub astro: Result<AstroEvents, String>,
}

fn jwst_section(feed: &Result<JwstFeed, String>) -> Markup {
    html! {
        section.card {
            h2 { "JWST gallery" }
            @match feed {
                Err(message) => (notice(message)),
                Ok(feed) => {
                    @if feed.items.is_empty() {
                        p.muted { "No images in this feed." }
                    }
                    div.gallery {
                        @for item in &feed.items {
                            figure {
                                a href=(item.link) rel="noopener" target="_blank" {
                                    img src=(item.url) alt=(item.caption) loading="lazy";
                                }
                                figcaption.muted { (item.caption) }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn astro_section(events: &Result<AstroEvents, String>) -> Markup {
    html! {
        section.card {
            h2 { "Astronomical events" }
            @match events {
                Err(message) => (notice(message)),
                Ok(events) => {
                    p.muted { (events.from_date.to_string()) " to " (events.to_date.to_string()) }
                    @if events.events.is_empty() {
                        p.muted { "No events in this window." }
                    } @else {
                        table {
                            thead {
                                tr { th { "Body" } th { "Event" } th { "Peak" } th { "Rise" } th { "Set" } }
                            }
                            tbody {
                                @for e in &events.events {
                                    tr {
                                        td { (e.body) }
                                        td { (e.kind) }
                                        td { (e.peak.as_deref().unwrap_or("n/a")) }
                                        td { (e.rise.as_deref().unwrap_or("n/a")) }
                                        td { (e.set.as_deref().unwrap_or("n/a")) }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn dashboard(view: &DashboardView) -> Markup {
    layout_with(
        "Space Dashboard",
        None,
        html! {
            h1 { "Space Dashboard" }
            div.grid {
                (position_card(view.iss.snapshot.as_ref()))
                (trend_card(view.iss.trend.as_ref()))
            }
            (jwst_section(&view.jwst))
            (astro_section(&view.astro))
        },
        Some(html! { script { (PreEscaped(REFRESH_SCRIPT)) } }),
    )
}
