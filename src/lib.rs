pub mod args;
pub mod error;
pub mod model;
pub mod controller {
    pub mod cards;
    pub mod faceit;
}
pub mod view {
    pub mod cards;
    pub mod index;
}

const HTMX_PATH: &str = "https://unpkg.com/htmx.org@1.9.12";

pub use error::CardError;
