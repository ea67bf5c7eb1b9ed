use tokio_util::sync::CancellationToken;

use crate::api::client::OsuClient;
use crate::api::enums::EventSortType;
use crate::api::models::EventsBundle;
use crate::api::query::QueryBuilder;
use crate::api::result::ApiResult;
use crate::error::Result;

impl OsuClient {
    /// A page of the global event feed. `cursor` is the `cursor_string` of
    /// the previous page.
    pub async fn get_events(
        &self,
        sort: Option<EventSortType>,
        cursor: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<EventsBundle>> {
        let query = QueryBuilder::new()
            .param("sort", sort)
            .param("cursor_string", cursor);
        self.get("events", query, None, cancel).await
    }
}
