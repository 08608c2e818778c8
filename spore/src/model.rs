use serde::Serialize;
use strum_macros::{Display, EnumString, IntoStaticStr};
use time::OffsetDateTime;

pub type AssetId = u64;
pub type UserId = u64;
pub type SporecastId = u64;

pub const ACHIEVEMENT_IMAGE_BASE: &str = "http://www.spore.com/static/war/images/achievements";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total_uploads: u64,
    pub day_uploads: u64,
    pub total_users: u64,
    pub day_users: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Creature {
    pub cost: u32,
    pub health: f64,
    pub height: f64,
    pub meanness: f64,
    pub cuteness: f64,
    pub sense: f64,
    pub bonecount: f64,
    pub footcount: f64,
    pub graspercount: f64,
    pub basegear: f64,
    pub carnivore: f64,
    pub herbivore: f64,
    pub glide: f64,
    pub sprint: f64,
    pub stealth: f64,
    pub bite: f64,
    pub charge: f64,
    pub strike: f64,
    pub spit: f64,
    pub sing: f64,
    pub dance: f64,
    pub gesture: f64,
    pub posture: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: UserId,
    pub image_url: String,
    pub tagline: String,
    #[serde(with = "time::serde::rfc3339")]
    pub create_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetType {
    Creature,
    Building,
    Vehicle,
    Ufo,
    Adventure,
}

/// Subtype codes as the service writes them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Display, EnumString, IntoStaticStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetSubtype {
    #[strum(serialize = "0x9ea3031a")]
    Creature,
    #[strum(serialize = "0x372e2c04")]
    TribeCreature,
    #[strum(serialize = "0xccc35c46")]
    CivCreature,
    #[strum(serialize = "0x65672ade")]
    SpaceCreature,
    #[strum(serialize = "0x4178b8e8")]
    AdventureCreature,
    #[strum(serialize = "0x99e92f05")]
    CityHall,
    #[strum(serialize = "0x4e3f7777")]
    House,
    #[strum(serialize = "0x47c10953")]
    Industry,
    #[strum(serialize = "0x72c49181")]
    Entertainment,
    #[strum(serialize = "0x7d433fad")]
    LandMilitary,
    #[strum(serialize = "0x8f963dcb")]
    LandEconomic,
    #[strum(serialize = "0x9b8e862f")]
    LandCultural,
    #[strum(serialize = "0x441cd3e6")]
    WaterMilitary,
    #[strum(serialize = "0x1f2a25b6")]
    WaterEconomic,
    #[strum(serialize = "0x26fdc6c8")]
    WaterCultural,
    #[strum(serialize = "0x2090a8cf")]
    AirMilitary,
    #[strum(serialize = "0x449c040f")]
    AirEconomic,
    #[strum(serialize = "0xf670aa86")]
    AirCultural,
    #[strum(serialize = "0x1a4e0708")]
    Ufo,
    #[strum(serialize = "0x287adadb")]
    AdventureAttack,
    #[strum(serialize = "0x2ac8b8ca")]
    AdventureDefend,
    #[strum(serialize = "0x3a2a2a6b")]
    AdventureSocialize,
    #[strum(serialize = "0x3d5b3ba4")]
    AdventureExplore,
    #[strum(serialize = "0x0f5b0e1f")]
    AdventureQuest,
    #[strum(serialize = "0x9b8e8a2c")]
    AdventureStory,
    #[strum(serialize = "0x33a52b63")]
    AdventureCollect,
    #[strum(serialize = "0x2f6b0b0f")]
    AdventurePuzzle,
    #[strum(serialize = "0x8e2e2a5c")]
    AdventureTemplate,
    #[strum(serialize = "0x00000000")]
    AdventureNone,
}

/// Listing selector for asset search. Only ever written into URLs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViewType {
    TopRated,
    TopRatedNew,
    Newest,
    Featured,
    MaxisMade,
    Random,
    CuteAndCreepy,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Asset {
    pub id: AssetId,
    pub name: String,
    pub thumbnail_url: String,
    pub image_url: String,
    pub author_name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub create_at: OffsetDateTime,
    pub rating: f64,
    #[serde(rename = "type")]
    pub type_: AssetType,
    pub subtype: AssetSubtype,
    pub parent_id: Option<AssetId>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FullAsset {
    #[serde(flatten)]
    pub asset: Asset,
    pub author_id: UserId,
    pub comments: Comments,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sporecast {
    pub id: SporecastId,
    pub title: String,
    pub subtitle: String,
    pub author_name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub update_at: OffsetDateTime,
    pub rating: f64,
    pub subscription_count: u32,
    pub tags: Vec<String>,
    pub assets_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Achievement {
    pub guid: String,
    pub image_url: String,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
}

impl Achievement {
    pub fn image_url_for(guid: &str) -> String {
        format!("{ACHIEVEMENT_IMAGE_BASE}/{guid}.png")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comment {
    pub message: String,
    pub sender_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Buddy {
    pub name: String,
    pub id: UserId,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assets {
    pub assets: Vec<Asset>,
}

impl Assets {
    pub fn count(&self) -> usize {
        self.assets.len()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SporecastAssets {
    pub name: String,
    #[serde(flatten)]
    pub assets: Assets,
}

impl SporecastAssets {
    pub fn count(&self) -> usize {
        self.assets.count()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sporecasts {
    pub sporecasts: Vec<Sporecast>,
}

impl Sporecasts {
    pub fn count(&self) -> usize {
        self.sporecasts.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Achievements {
    pub achievements: Vec<Achievement>,
}

impl Achievements {
    pub fn count(&self) -> usize {
        self.achievements.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comments {
    pub comments: Vec<Comment>,
}

impl Comments {
    pub fn count(&self) -> usize {
        self.comments.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetComments {
    pub name: String,
    #[serde(flatten)]
    pub comments: Comments,
}

impl AssetComments {
    pub fn count(&self) -> usize {
        self.comments.count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Buddies {
    pub buddies: Vec<Buddy>,
}

impl Buddies {
    pub fn count(&self) -> usize {
        self.buddies.len()
    }
}
