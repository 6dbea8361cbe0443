//! OKR handlers.

mod get_okr_overview;

pub use get_okr_overview::{GetOkrOverviewHandler, GetOkrOverviewQuery, GetOkrOverviewResult};
