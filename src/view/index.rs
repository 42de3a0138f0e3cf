use maud::{DOCTYPE, Markup, html};

use crate::HTMX_PATH;

#[must_use]
pub fn render_index_template(title: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                link rel="stylesheet" type="text/css" href="static/styles.css";
                title { (title) }
                script src=(HTMX_PATH) {}
            }
            body {
                h1 { (title) }
                div id="cards" hx-get="cards" hx-trigger="load" {
                    p class="htmx-indicator" { "Loading player stats..." }
                }
            }
        }
    }
}
