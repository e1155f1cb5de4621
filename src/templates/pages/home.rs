// templates/pages/home.rs

use crate::templates::desktop_layout;
use maud::{html, Markup};

/// Landing page served at `/`; doubles as a liveness check.
pub fn home_page() -> Markup {
    desktop_layout(
        "Property Listings",
        html! {
            h1 { "Hello from the property listings backend!" }
            p {
                "The API lives under "
                code { "/api/properties" }
                "."
            }
        },
    )
}
