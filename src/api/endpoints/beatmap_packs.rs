use tokio_util::sync::CancellationToken;

use crate::api::client::OsuClient;
use crate::api::enums::BeatmapPackType;
use crate::api::models::{BeatmapPack, BeatmapPacksBundle};
use crate::api::query::{escape, QueryBuilder};
use crate::api::result::ApiResult;
use crate::error::Result;

impl OsuClient {
    pub async fn get_beatmap_packs(
        &self,
        pack_type: Option<BeatmapPackType>,
        cursor: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<BeatmapPacksBundle>> {
        let query = QueryBuilder::new()
            .param("type", pack_type)
            .param("cursor_string", cursor);
        self.get("beatmaps/packs", query, None, cancel).await
    }

    /// A beatmap pack by its tag, e.g. `S1`
    pub async fn get_beatmap_pack(
        &self,
        tag: &str,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<BeatmapPack>> {
        self.get(&format!("beatmaps/packs/{}", escape(tag)), QueryBuilder::new(), None, cancel)
            .await
    }
}
