use maud::{Markup, html};
use orbitdash_core::{IssOverview, IssSnapshot, IssTrend};

use super::{fmt_num, fmt_time, layout, notice};

pub(crate) fn position_card(snapshot: Option<&IssSnapshot>) -> Markup {
    html! {
        section.card {
            h2 { "ISS position" }
            @if let Some(s) = snapshot {
                p.lead id="iss-position" {
                    (format!("{:.4}, {:.4}", s.latitude, s.longitude))
                }
                table {
                    tr { th { "Altitude, km" } td { (fmt_num(s.altitude_km, 1)) } }
                    tr { th { "Velocity, km/h" } td { (fmt_num(s.velocity_kmh, 0)) } }
                    tr { th { "Visibility" } td { (s.visibility.as_deref().unwrap_or("n/a")) } }
                    tr { th { "Sampled at" } td { (fmt_time(s.fetched_at.as_ref())) } }
                }
            } @else {
                (notice("ISS position is unavailable right now."))
            }
        }
    }
}

pub(crate) fn trend_card(trend: Option<&IssTrend>) -> Markup {
    html! {
        section.card {
            h2 { "Movement" }
            @if let Some(t) = trend {
                p {
                    @if t.movement { "Moving" } @else { "Stationary" }
                    " over " (format!("{:.0}", t.dt_sec)) " s"
                }
                table {
                    tr { th { "Distance, km" } td { (format!("{:.2}", t.delta_km)) } }
                    tr { th { "Velocity, km/h" } td { (fmt_num(t.velocity_kmh, 0)) } }
                    tr {
                        th { "From" }
                        td { (fmt_num(t.from_lat, 3)) ", " (fmt_num(t.from_lon, 3)) }
                    }
                    tr {
                        th { "To" }
                        td { (fmt_num(t.to_lat, 3)) ", " (fmt_num(t.to_lon, 3)) }
                    }
                    tr { th { "Window" } td { (fmt_time(t.from_time.as_ref())) " to " (fmt_time(t.to_time.as_ref())) } }
                }
            } @else {
                (notice("Movement trend is unavailable right now."))
            }
        }
    }
}

pub fn iss_page(overview: &IssOverview) -> Markup {
    layout(
        "ISS",
        html! {
            h1 { "International Space Station" }
            div.grid {
                (position_card(overview.snapshot.as_ref()))
                (trend_card(overview.trend.as_ref()))
            }
            p.muted {
                "Raw data: " a href="/api/iss/last" { "last sample" } ", "
                a href="/api/iss/trend" { "trend" }
            }
        },
    )
}
