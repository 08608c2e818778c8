use crate::client::{Client, Transport};
use crate::decode::{Decode, decode};
use crate::endpoint::{Endpoint, Page};
use crate::error::Result;
use crate::model::*;

impl<T: Transport> Client<T> {
    async fn call<R: Decode>(&self, endpoint: Endpoint<'_>) -> Result<R> {
        decode(&self.fetch(&endpoint).await?)
    }

    pub async fn stats(&self) -> Result<Stats> {
        self.call(Endpoint::Stats).await
    }

    pub async fn creature(&self, asset_id: AssetId) -> Result<Creature> {
        self.call(Endpoint::Creature(asset_id)).await
    }

    pub async fn user_info(&self, username: &str) -> Result<User> {
        self.call(Endpoint::User(username)).await
    }

    pub async fn user_assets(&self, username: &str, page: Page) -> Result<Assets> {
        self.call(Endpoint::UserAssets(username, page)).await
    }

    pub async fn user_sporecasts(&self, username: &str) -> Result<Sporecasts> {
        self.call(Endpoint::UserSporecasts(username)).await
    }

    pub async fn sporecast_assets(
        &self,
        sporecast_id: SporecastId,
        page: Page,
    ) -> Result<SporecastAssets> {
        self.call(Endpoint::SporecastAssets(sporecast_id, page)).await
    }

    pub async fn user_achievements(&self, username: &str, page: Page) -> Result<Achievements> {
        self.call(Endpoint::UserAchievements(username, page)).await
    }

    pub async fn asset_info(&self, asset_id: AssetId) -> Result<FullAsset> {
        self.call(Endpoint::Asset(asset_id)).await
    }

    pub async fn asset_comments(&self, asset_id: AssetId, page: Page) -> Result<AssetComments> {
        self.call(Endpoint::AssetComments(asset_id, page)).await
    }

    pub async fn user_buddies(&self, username: &str, page: Page) -> Result<Buddies> {
        self.call(Endpoint::UserBuddies(username, page)).await
    }

    pub async fn user_subscribers(&self, username: &str, page: Page) -> Result<Buddies> {
        self.call(Endpoint::UserSubscribers(username, page)).await
    }

    pub async fn search_assets(
        &self,
        view: ViewType,
        page: Page,
        asset_type: Option<AssetType>,
    ) -> Result<Assets> {
        self.call(Endpoint::SearchAssets(view, page, asset_type)).await
    }
}
