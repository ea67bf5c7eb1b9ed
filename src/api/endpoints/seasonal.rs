use tokio_util::sync::CancellationToken;

use crate::api::client::OsuClient;
use crate::api::models::SeasonalBackgroundsBundle;
use crate::api::query::QueryBuilder;
use crate::api::result::ApiResult;
use crate::error::Result;

impl OsuClient {
    pub async fn get_seasonal_backgrounds(
        &self,
        cancel: &CancellationToken,
    ) -> Result<ApiResult<SeasonalBackgroundsBundle>> {
        self.get("seasonal-backgrounds", QueryBuilder::new(), None, cancel).await
    }
}
