use crate::error::{Error, Result};
use crate::model::{AssetId, AssetType, SporecastId, ViewType};
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://www.spore.com";

/// Window into a paged listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub start: u32,
    pub length: u32,
}

impl Page {
    pub fn new(start: u32, length: u32) -> Self {
        Self { start, length }
    }
}

/// Every remote operation, carrying its path parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    /// `/rest/stats`
    Stats,
    /// `/rest/creature/{assetId}`
    Creature(AssetId),
    /// `/rest/user/{username}`
    User(&'a str),
    /// `/rest/assets/user/{username}/{start}/{length}`
    UserAssets(&'a str, Page),
    /// `/rest/sporecasts/{username}`
    UserSporecasts(&'a str),
    /// `/rest/assets/sporecast/{sporecastId}/{start}/{length}`
    SporecastAssets(SporecastId, Page),
    /// `/rest/achievements/{username}/{start}/{length}`
    UserAchievements(&'a str, Page),
    /// `/rest/asset/{assetId}`
    Asset(AssetId),
    /// `/rest/comments/{assetId}/{start}/{length}`
    AssetComments(AssetId, Page),
    /// `/rest/users/buddies/{username}/{start}/{length}`
    UserBuddies(&'a str, Page),
    /// `/rest/users/subscribers/{username}/{start}/{length}`
    UserSubscribers(&'a str, Page),
    /// `/rest/assets/search/{viewType}/{start}/{length}[/{assetType}]`
    SearchAssets(ViewType, Page, Option<AssetType>),
}

fn paged(mut segments: Vec<String>, page: Page) -> Vec<String> {
    segments.push(page.start.to_string());
    segments.push(page.length.to_string());
    segments
}

impl Endpoint<'_> {
    /// Path segments after `/rest`, unescaped.
    pub fn segments(&self) -> Vec<String> {
        use Endpoint::*;
        let s = |parts: &[&str]| parts.iter().map(|p| p.to_string()).collect::<Vec<_>>();
        match *self {
            Stats => s(&["stats"]),
            Creature(id) => vec!["creature".into(), id.to_string()],
            User(name) => s(&["user", name]),
            UserAssets(name, page) => paged(s(&["assets", "user", name]), page),
            UserSporecasts(name) => s(&["sporecasts", name]),
            SporecastAssets(id, page) => {
                paged(vec!["assets".into(), "sporecast".into(), id.to_string()], page)
            }
            UserAchievements(name, page) => paged(s(&["achievements", name]), page),
            Asset(id) => vec!["asset".into(), id.to_string()],
            AssetComments(id, page) => paged(vec!["comments".into(), id.to_string()], page),
            UserBuddies(name, page) => paged(s(&["users", "buddies", name]), page),
            UserSubscribers(name, page) => paged(s(&["users", "subscribers", name]), page),
            SearchAssets(view, page, kind) => {
                let view: &str = view.into();
                let mut v = paged(s(&["assets", "search", view]), page);
                if let Some(kind) = kind {
                    v.push(kind.to_string());
                }
                v
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiEndpoint {
    base: Url,
}

impl ApiEndpoint {
    pub fn with_base(base: &str) -> Result<Self> {
        let base = Url::parse(base)?;
        if base.cannot_be_a_base() {
            return Err(Error::BaseUrl(base.into()));
        }
        Ok(Self { base })
    }

    pub fn new() -> Self {
        Self::with_base(DEFAULT_BASE_URL).unwrap()
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    pub fn url(&self, endpoint: &Endpoint) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().push("rest").extend(endpoint.segments());
        }
        url
    }
}

impl Default for ApiEndpoint {
    fn default() -> Self {
        Self::new()
    }
}
