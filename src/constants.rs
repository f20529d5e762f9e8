/// Body of every error response. Callers never see upstream or store detail.
pub const ERROR_BODY: &str = "Sorry, something went wrong";

pub const USER_AGENT: &str = "CityExplorer/1.0";

pub mod format {

    /// Renders as e.g. `Mon Jan 01 2018`.
    pub const SHORT_DATE: &str = "%a %b %d %Y";

    pub const SHORT_DATE_LEN: usize = 15;
}

pub mod providers {

    pub const TMDB_POSTER_BASE: &str = "https://image.tmdb.org/t/p/w185";

    pub const TRAILS_MAX_DISTANCE: &str = "10";

    pub const MEETUP_PAGE_SIZE: &str = "20";
}
