//! Feed query parameters and their lowering to a store filter.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shindig_core::config::FeedConfig;
use shindig_core::constants::FIRST_PAGE;
use shindig_store::store::EventFilter;

/// Caller-facing feed filters.
///
/// Whether a caller is permitted to set `include_past` (admins, an
/// organizer's own listings) is decided by the authorization collaborator,
/// not here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedQuery {
    pub region: Option<String>,
    pub sub_region: Option<String>,
    pub organizer_id: Option<uuid::Uuid>,
    #[serde(default)]
    pub include_past: bool,
}

impl FeedQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    #[must_use]
    pub fn with_sub_region(mut self, sub_region: impl Into<String>) -> Self {
        self.sub_region = Some(sub_region.into());
        self
    }

    #[must_use]
    pub const fn with_organizer(mut self, organizer_id: uuid::Uuid) -> Self {
        self.organizer_id = Some(organizer_id);
        self
    }

    #[must_use]
    pub const fn including_past(mut self) -> Self {
        self.include_past = true;
        self
    }

    /// ## Summary
    /// Lowers the query to a store filter.
    ///
    /// Unless past events are requested, the filter carries the liveness
    /// disjunction "stored `end >= now` OR recurring" — recurring events are
    /// always fetched so the resolver can decide their liveness.
    #[must_use]
    pub fn to_filter(&self, now: DateTime<Utc>) -> EventFilter {
        let mut filter = EventFilter::new();
        if let Some(region) = &self.region {
            filter = filter.with_region(region.clone());
        }
        if let Some(sub_region) = &self.sub_region {
            filter = filter.with_sub_region(sub_region.clone());
        }
        if let Some(organizer_id) = self.organizer_id {
            filter = filter.with_organizer(organizer_id);
        }
        if !self.include_past {
            filter = filter.with_live_after(now);
        }
        filter
    }
}

/// 1-based page selection for a feed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
}

impl Pagination {
    #[must_use]
    pub const fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }

    /// ## Summary
    /// Builds pagination from raw request values, defaulting and clamping
    /// the page size per configuration and flooring the page at 1.
    #[must_use]
    pub fn from_request(page: Option<u32>, page_size: Option<u32>, config: &FeedConfig) -> Self {
        let page = page.unwrap_or(FIRST_PAGE).max(FIRST_PAGE);
        let page_size = page_size
            .unwrap_or(config.default_page_size)
            .clamp(1, config.max_page_size);
        Self { page, page_size }
    }

    /// Store offset of this page's first row.
    #[must_use]
    pub fn skip(self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.page_size)
    }
}
