//! Page data loaders. Each one composes a query, calls the CMS and reshapes
//! the result into the props a page renders from.

pub mod about;
pub mod radio;

pub use about::get_about_page;
pub use radio::{
    get_all_shows, get_radio_page, get_radio_page_single, get_shows_by_genre_category,
    partition_shows, related_shows, AllShows, RadioPage, RadioPageSingle, GENRE_PAGE_SIZE,
};

/// Upper bounds on collection sizes requested from the CMS
pub struct Limits {
    pub shows: u32,
}

pub const LIMITS: Limits = Limits { shows: 500 };
