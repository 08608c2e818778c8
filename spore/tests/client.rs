use spore::endpoint::ApiEndpoint;
use spore::model::{AssetSubtype, AssetType, ViewType};
use spore::{Client, Error, Page, Result, Transport};
use std::collections::HashMap;
use std::sync::Mutex;
use time::macros::datetime;
use url::Url;

/// Serves canned bodies by path and remembers what was asked for.
#[derive(Default)]
struct Fixtures {
    bodies: HashMap<String, &'static str>,
    seen: Mutex<Vec<String>>,
}

impl Fixtures {
    fn serve(mut self, path: &str, body: &'static str) -> Self {
        self.bodies.insert(path.to_owned(), body);
        self
    }

    fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

impl Transport for Fixtures {
    async fn get_text(&self, url: &Url) -> Result<String> {
        self.seen.lock().unwrap().push(url.path().to_owned());
        match self.bodies.get(url.path()) {
            Some(body) => Ok(body.to_string()),
            None => Err(Error::Http(404, "not found".into())),
        }
    }
}

fn client(fixtures: Fixtures) -> Client<Fixtures> {
    let _ = pretty_env_logger::try_init();
    Client::with_transport(fixtures, ApiEndpoint::new())
}

const PAGE: Page = Page {
    start: 0,
    length: 10,
};

#[tokio::test]
async fn stats() {
    let c = client(Fixtures::default().serve("/rest/stats", include_str!("fixtures/stats.xml")));
    let s = c.stats().await.unwrap();
    assert_eq!(s.total_uploads, 155461854);
    assert_eq!(s.day_uploads, 1082);
    assert_eq!(s.total_users, 4938672);
    assert_eq!(s.day_users, 121);
}

#[tokio::test]
async fn creature() {
    let c = client(Fixtures::default().serve(
        "/rest/creature/500267423060",
        include_str!("fixtures/creature.xml"),
    ));
    let cr = c.creature(500267423060).await.unwrap();
    assert_eq!(cr.cost, 1835);
    assert_eq!(cr.health, 3.0);
    assert_eq!(cr.height, 1.3522);
    assert_eq!(cr.meanness, 42.0);
    assert_eq!(cr.cuteness, 17.5);
    assert_eq!(cr.sense, 2.0);
    assert_eq!(cr.bonecount, 12.0);
    assert_eq!(cr.footcount, 4.0);
    assert_eq!(cr.graspercount, 2.0);
    assert_eq!(cr.basegear, 1.0);
    assert_eq!(cr.carnivore, 1.0);
    assert_eq!(cr.herbivore, 0.0);
    assert_eq!(cr.glide, 0.0);
    assert_eq!(cr.sprint, 3.0);
    assert_eq!(cr.stealth, 1.0);
    assert_eq!(cr.bite, 4.0);
    assert_eq!(cr.charge, 2.0);
    assert_eq!(cr.strike, 5.0);
    assert_eq!(cr.spit, 0.0);
    assert_eq!(cr.sing, 1.0);
    assert_eq!(cr.dance, 2.0);
    assert_eq!(cr.gesture, 3.0);
    assert_eq!(cr.posture, 4.0);
}

#[tokio::test]
async fn user_info() {
    let c = client(
        Fixtures::default().serve("/rest/user/MaxisCactus", include_str!("fixtures/user.xml")),
    );
    let u = c.user_info("MaxisCactus").await.unwrap();
    assert_eq!(u.id, 2263012843);
    assert_eq!(
        u.image_url,
        "http://www.spore.com/static/thumb/500/190/457/500190457259.png"
    );
    assert_eq!(u.tagline, "Fun & games");
    assert_eq!(u.create_at, datetime!(2008-06-13 20:45:53 UTC));
}

#[tokio::test]
async fn user_assets() {
    let c = client(Fixtures::default().serve(
        "/rest/assets/user/MaxisCactus/0/10",
        include_str!("fixtures/user_assets.xml"),
    ));
    let a = c.user_assets("MaxisCactus", PAGE).await.unwrap();
    assert_eq!(a.count(), 3);
    let ids: Vec<_> = a.assets.iter().map(|a| a.id).collect();
    assert_eq!(ids, [500267423060, 500267423061, 500267423062]);

    let first = &a.assets[0];
    assert_eq!(first.name, "Spiky");
    assert_eq!(
        first.thumbnail_url,
        "http://www.spore.com/static/thumb/500/267/423/500267423060.png"
    );
    assert_eq!(
        first.image_url,
        "http://www.spore.com/static/image/500/267/423/500267423060_lrg.png"
    );
    assert_eq!(first.author_name, "MaxisCactus");
    assert_eq!(first.create_at, datetime!(2009-03-01 10:00:00 UTC));
    assert_eq!(first.rating, 4.5);
    assert_eq!(first.type_, AssetType::Creature);
    assert_eq!(first.subtype, AssetSubtype::Creature);
    assert_eq!(first.parent_id, None);
    assert_eq!(first.description.as_deref(), Some("A spiky friend"));
    assert_eq!(
        first.tags,
        Some(vec!["spiky".to_owned(), "cute".to_owned(), "green".to_owned()])
    );

    let second = &a.assets[1];
    assert_eq!(second.name, "Hut");
    assert_eq!(
        second.thumbnail_url,
        "http://www.spore.com/static/thumb/500/267/423/500267423061.png"
    );
    assert_eq!(second.create_at, datetime!(2009-03-02 11:30:00 UTC));
    assert_eq!(second.type_, AssetType::Building);
    assert_eq!(second.subtype, AssetSubtype::House);
    assert_eq!(second.rating, -1.0);
    assert_eq!(second.parent_id, Some(500267423060));
    assert_eq!(second.description, None);
    assert_eq!(second.tags, None);

    let third = &a.assets[2];
    assert_eq!(third.type_, AssetType::Ufo);
    assert_eq!(third.description.as_deref(), Some(""));
    assert_eq!(third.tags, Some(vec!["space".to_owned()]));
}

#[tokio::test]
async fn user_sporecasts() {
    let c = client(Fixtures::default().serve(
        "/rest/sporecasts/MaxisCactus",
        include_str!("fixtures/sporecasts.xml"),
    ));
    let s = c.user_sporecasts("MaxisCactus").await.unwrap();
    assert_eq!(s.count(), 1);
    let cast = &s.sporecasts[0];
    assert_eq!(cast.id, 500190457259);
    assert_eq!(cast.title, "Cactus Picks");
    assert_eq!(cast.subtitle, "The best of the desert");
    assert_eq!(cast.author_name, "MaxisCactus");
    assert_eq!(cast.update_at, datetime!(2009-05-20 08:15:30 UTC));
    assert_eq!(cast.rating, 12.0);
    assert_eq!(cast.subscription_count, 345);
    assert_eq!(cast.tags, ["desert", "cacti", "plants"]);
    assert_eq!(cast.assets_count, 42);
}

#[tokio::test]
async fn sporecast_assets() {
    let c = client(Fixtures::default().serve(
        "/rest/assets/sporecast/500190457259/0/10",
        include_str!("fixtures/sporecast_assets.xml"),
    ));
    let s = c.sporecast_assets(500190457259, PAGE).await.unwrap();
    assert_eq!(s.name, "Cactus Picks");
    assert_eq!(s.count(), 1);
    assert_eq!(s.assets.assets[0].tags, Some(vec!["spiky".to_owned()]));
}

#[tokio::test]
async fn user_achievements() {
    let c = client(Fixtures::default().serve(
        "/rest/achievements/MaxisCactus/0/10",
        include_str!("fixtures/achievements.xml"),
    ));
    let a = c.user_achievements("MaxisCactus", PAGE).await.unwrap();
    assert_eq!(a.count(), 2);
    let first = &a.achievements[0];
    assert_eq!(first.guid, "0x00000000f0b1d8ae");
    assert_eq!(
        first.image_url,
        "http://www.spore.com/static/war/images/achievements/0x00000000f0b1d8ae.png"
    );
    assert_eq!(first.date, datetime!(2008-09-07 17:02:11 UTC));
    assert_eq!(a.achievements[1].guid, "0x00000000ae35e03a");
}

#[tokio::test]
async fn asset_info() {
    let c = client(Fixtures::default().serve(
        "/rest/asset/500267423060",
        include_str!("fixtures/asset.xml"),
    ));
    let a = c.asset_info(500267423060).await.unwrap();
    assert_eq!(a.asset.id, 500267423060);
    assert_eq!(a.asset.name, "Spiky");
    assert_eq!(
        a.asset.thumbnail_url,
        "http://www.spore.com/static/thumb/500/267/423/500267423060.png"
    );
    assert_eq!(
        a.asset.image_url,
        "http://www.spore.com/static/image/500/267/423/500267423060_lrg.png"
    );
    assert_eq!(a.asset.author_name, "MaxisCactus");
    assert_eq!(a.asset.create_at, datetime!(2009-03-01 10:00:00 UTC));
    assert_eq!(a.asset.rating, 4.5);
    assert_eq!(a.asset.type_, AssetType::Creature);
    assert_eq!(a.asset.subtype, AssetSubtype::Creature);
    assert_eq!(a.asset.description.as_deref(), Some("A spiky friend"));
    assert_eq!(a.asset.parent_id, Some(500267423001));
    assert_eq!(a.asset.tags, Some(vec!["spiky".to_owned(), "cute".to_owned()]));
    assert_eq!(a.author_id, 2263012843);
    assert_eq!(a.comments.count(), 1);
    assert_eq!(a.comments.comments[0].message, "Love it!");
    assert_eq!(a.comments.comments[0].sender_name, "SporeFan");
}

#[tokio::test]
async fn asset_comments() {
    let c = client(Fixtures::default().serve(
        "/rest/comments/500267423060/0/10",
        include_str!("fixtures/comments.xml"),
    ));
    let a = c.asset_comments(500267423060, PAGE).await.unwrap();
    assert_eq!(a.name, "Spiky");
    assert_eq!(a.count(), 2);
    let senders: Vec<_> = a
        .comments
        .comments
        .iter()
        .map(|c| c.sender_name.as_str())
        .collect();
    assert_eq!(senders, ["SporeFan", "Critic"]);
}

#[tokio::test]
async fn buddies_and_subscribers() {
    let c = client(
        Fixtures::default()
            .serve(
                "/rest/users/buddies/MaxisCactus/0/10",
                include_str!("fixtures/buddies.xml"),
            )
            .serve(
                "/rest/users/subscribers/MaxisCactus/0/10",
                include_str!("fixtures/subscribers.xml"),
            ),
    );
    let b = c.user_buddies("MaxisCactus", PAGE).await.unwrap();
    assert_eq!(b.count(), 2);
    assert_eq!(b.buddies[0].name, "MaxisDangerousYams");
    assert_eq!(b.buddies[1].id, 2263012845);

    let s = c.user_subscribers("MaxisCactus", PAGE).await.unwrap();
    assert_eq!(s.count(), 1);
    assert_eq!(s.buddies[0].name, "Critic");
}

#[tokio::test]
async fn search_assets() {
    let c = client(
        Fixtures::default()
            .serve(
                "/rest/assets/search/TOP_RATED/0/10",
                include_str!("fixtures/user_assets.xml"),
            )
            .serve(
                "/rest/assets/search/NEWEST/0/10/UFO",
                include_str!("fixtures/sporecast_assets.xml"),
            ),
    );
    let all = c.search_assets(ViewType::TopRated, PAGE, None).await.unwrap();
    assert_eq!(all.count(), 3);
    let ufos = c
        .search_assets(ViewType::Newest, PAGE, Some(AssetType::Ufo))
        .await
        .unwrap();
    assert_eq!(ufos.count(), 1);
    assert_eq!(
        c.transport().seen(),
        ["/rest/assets/search/TOP_RATED/0/10", "/rest/assets/search/NEWEST/0/10/UFO"]
    );
}

#[tokio::test]
async fn api_status_error() {
    let c = client(
        Fixtures::default().serve("/rest/user/nobody", include_str!("fixtures/error.xml")),
    );
    assert!(matches!(c.user_info("nobody").await, Err(Error::ApiStatus(2))));
}

#[tokio::test]
async fn transport_error_propagates() {
    let c = client(Fixtures::default());
    assert!(matches!(c.stats().await, Err(Error::Http(404, _))));
}
