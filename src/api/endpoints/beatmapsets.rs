use tokio_util::sync::CancellationToken;

use crate::api::client::OsuClient;
use crate::api::models::BeatmapSetExtended;
use crate::api::query::QueryBuilder;
use crate::api::result::ApiResult;
use crate::error::Result;

impl OsuClient {
    /// The beatmapset containing the given beatmap
    pub async fn lookup_beatmapset(
        &self,
        beatmap_id: u32,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<BeatmapSetExtended>> {
        let query = QueryBuilder::new().param("beatmap_id", Some(beatmap_id));
        self.get("beatmapsets/lookup", query, None, cancel).await
    }

    pub async fn get_beatmapset(
        &self,
        beatmapset_id: u32,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<BeatmapSetExtended>> {
        self.get(&format!("beatmapsets/{}", beatmapset_id), QueryBuilder::new(), None, cancel)
            .await
    }
}
