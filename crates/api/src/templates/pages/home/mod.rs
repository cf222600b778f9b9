use maud::{html, Markup};

use crate::{
    db::DateRange,
    templates::layouts::{base, PageConfig},
};

pub fn home_page(api_base: &str, bounds: Option<&DateRange>) -> Markup {
    let config = PageConfig {
        title: "Hawaii Climate API",
        api_base,
    };

    base(&config, content(bounds))
}

fn content(bounds: Option<&DateRange>) -> Markup {
    let (first, last) = match bounds {
        Some(bounds) => (bounds.first.to_string(), bounds.last.to_string()),
        None => ("unknown".to_string(), "unknown".to_string()),
    };

    html! {
        div class="content" {
            h2 class="subtitle" { "Available Routes" }

            (link_route("/api/v1.0/precipitation", "Queries precipitation by date"))
            (link_route("/api/v1.0/stations", "Queries station data"))
            (link_route(
                "/api/v1.0/tobs",
                "Queries temperature data over the last year in the database at the most popular station",
            ))

            p {
                code { "/api/v1.0/<start_date>" }
                ul {
                    li {
                        "Date parameter must be in format YYYY-MM-DD to return a result. "
                        "Returns a JSON list of the minimum temperature, the average temperature, "
                        "and the max temperature between a given start date and " (last) ". "
                        "Date range in database is " (first) " to " (last)
                    }
                }
            }
            p {
                code { "/api/v1.0/<start_date>/<end_date>" }
                ul {
                    li {
                        "Date parameters must be in format YYYY-MM-DD to return a result. "
                        "Returns a JSON list of the minimum temperature, the average temperature, "
                        "and the max temperature between a given start date and end date. "
                        "Date range in database is " (first) " to " (last)
                    }
                }
            }
        }
    }
}

fn link_route(path: &str, description: &str) -> Markup {
    html! {
        p {
            a href=(path) { (path) }
            ul {
                li { (description) }
            }
        }
    }
}
