//! Response decoding: status gate, tree parse, then per-record extraction.

use crate::coerce::{comma_list, optional, parse_as, string, timestamp, value, word_list};
use crate::error::{Error, Result};
use crate::model::*;
use crate::xml::{self, Node};
use log::error;

/// Builds a record from its element.
pub trait FromNode: Sized {
    fn from_node(node: &Node) -> Result<Self>;
}

/// A record that is the whole payload of an endpoint, found under `ROOT`.
pub trait Decode: FromNode {
    const ROOT: &'static str;
}

/// Looks for the first `<status>N</status>` in the raw text. Anything but
/// `1` aborts the decode; codes too wide for `u64` saturate.
pub fn check_status(text: &str) -> Result<()> {
    const OPEN: &str = "<status>";
    const CLOSE: &str = "</status>";
    let mut rest = text;
    while let Some(i) = rest.find(OPEN) {
        rest = &rest[i + OPEN.len()..];
        let Some(j) = rest.find(CLOSE) else {
            break;
        };
        let code = &rest[..j];
        if code.is_empty() || !code.bytes().all(|b| b.is_ascii_digit()) {
            continue;
        }
        let digits = code.trim_start_matches('0');
        if digits == "1" {
            return Ok(());
        }
        error!("api status {code}");
        let code = if digits.is_empty() {
            0
        } else {
            digits.parse().unwrap_or(u64::MAX)
        };
        return Err(Error::ApiStatus(code));
    }
    Ok(())
}

pub fn decode<T: Decode>(text: &str) -> Result<T> {
    check_status(text)?;
    let doc = xml::parse(text)?;
    let root = doc.get(T::ROOT).ok_or(Error::MissingField(T::ROOT))?;
    T::from_node(root)
}

fn items<T: FromNode>(node: &Node, key: &str) -> Result<Vec<T>> {
    node.seq(key).into_iter().map(T::from_node).collect()
}

impl FromNode for Stats {
    fn from_node(n: &Node) -> Result<Self> {
        Ok(Self {
            total_uploads: value(n, "totalUploads")?,
            day_uploads: value(n, "dayUploads")?,
            total_users: value(n, "totalUsers")?,
            day_users: value(n, "dayUsers")?,
        })
    }
}

impl Decode for Stats {
    const ROOT: &'static str = "stats";
}

impl FromNode for Creature {
    fn from_node(n: &Node) -> Result<Self> {
        Ok(Self {
            cost: value(n, "cost")?,
            health: value(n, "health")?,
            height: value(n, "height")?,
            meanness: value(n, "meanness")?,
            cuteness: value(n, "cuteness")?,
            sense: value(n, "sense")?,
            bonecount: value(n, "bonecount")?,
            footcount: value(n, "footcount")?,
            graspercount: value(n, "graspercount")?,
            basegear: value(n, "basegear")?,
            carnivore: value(n, "carnivore")?,
            herbivore: value(n, "herbivore")?,
            glide: value(n, "glide")?,
            sprint: value(n, "sprint")?,
            stealth: value(n, "stealth")?,
            bite: value(n, "bite")?,
            charge: value(n, "charge")?,
            strike: value(n, "strike")?,
            spit: value(n, "spit")?,
            sing: value(n, "sing")?,
            dance: value(n, "dance")?,
            gesture: value(n, "gesture")?,
            posture: value(n, "posture")?,
        })
    }
}

impl Decode for Creature {
    const ROOT: &'static str = "creature";
}

impl FromNode for User {
    fn from_node(n: &Node) -> Result<Self> {
        Ok(Self {
            id: value(n, "id")?,
            image_url: string(n, "image")?,
            tagline: string(n, "tagline")?,
            create_at: timestamp(n, "creation")?,
        })
    }
}

impl Decode for User {
    const ROOT: &'static str = "user";
}

impl FromNode for Asset {
    fn from_node(n: &Node) -> Result<Self> {
        Ok(Self {
            id: value(n, "id")?,
            name: string(n, "name")?,
            thumbnail_url: string(n, "thumb")?,
            image_url: string(n, "image")?,
            author_name: string(n, "author")?,
            create_at: timestamp(n, "created")?,
            rating: value(n, "rating")?,
            type_: value(n, "type")?,
            subtype: value(n, "subtype")?,
            parent_id: optional(n, "parent", |s| parse_as("parent", s))?,
            description: optional(n, "description", |s| Ok(s.to_owned()))?,
            tags: optional(n, "tags", |s| Ok(comma_list(s)))?,
        })
    }
}

impl FromNode for Assets {
    fn from_node(n: &Node) -> Result<Self> {
        Ok(Self {
            assets: items(n, "asset")?,
        })
    }
}

impl Decode for Assets {
    const ROOT: &'static str = "assets";
}

impl FromNode for SporecastAssets {
    fn from_node(n: &Node) -> Result<Self> {
        Ok(Self {
            name: string(n, "name")?,
            assets: Assets::from_node(n)?,
        })
    }
}

impl Decode for SporecastAssets {
    const ROOT: &'static str = "assets";
}

impl FromNode for Sporecast {
    fn from_node(n: &Node) -> Result<Self> {
        Ok(Self {
            id: value(n, "id")?,
            title: string(n, "title")?,
            subtitle: string(n, "subtitle")?,
            author_name: string(n, "author")?,
            update_at: timestamp(n, "updated")?,
            rating: value(n, "rating")?,
            subscription_count: value(n, "subscriptioncount")?,
            tags: word_list(&string(n, "tags")?),
            assets_count: value(n, "count")?,
        })
    }
}

impl FromNode for Sporecasts {
    fn from_node(n: &Node) -> Result<Self> {
        Ok(Self {
            sporecasts: items(n, "sporecast")?,
        })
    }
}

impl Decode for Sporecasts {
    const ROOT: &'static str = "sporecasts";
}

impl FromNode for Achievement {
    fn from_node(n: &Node) -> Result<Self> {
        let guid = string(n, "guid")?;
        Ok(Self {
            image_url: Achievement::image_url_for(&guid),
            date: timestamp(n, "date")?,
            guid,
        })
    }
}

impl FromNode for Achievements {
    fn from_node(n: &Node) -> Result<Self> {
        Ok(Self {
            achievements: items(n, "achievement")?,
        })
    }
}

impl Decode for Achievements {
    const ROOT: &'static str = "achievements";
}

impl FromNode for Comment {
    fn from_node(n: &Node) -> Result<Self> {
        Ok(Self {
            message: string(n, "message")?,
            sender_name: string(n, "sender")?,
        })
    }
}

impl FromNode for Comments {
    fn from_node(n: &Node) -> Result<Self> {
        Ok(Self {
            comments: items(n, "comment")?,
        })
    }
}

impl FromNode for AssetComments {
    fn from_node(n: &Node) -> Result<Self> {
        Ok(Self {
            name: string(n, "name")?,
            comments: Comments::from_node(n)?,
        })
    }
}

impl Decode for AssetComments {
    const ROOT: &'static str = "comments";
}

impl FromNode for FullAsset {
    fn from_node(n: &Node) -> Result<Self> {
        // An asset without comments may omit the element or leave it empty.
        let comments = match n.get("comments") {
            Some(c) => Comments::from_node(c)?,
            None => Comments {
                comments: Vec::new(),
            },
        };
        Ok(Self {
            asset: Asset::from_node(n)?,
            author_id: value(n, "authorid")?,
            comments,
        })
    }
}

impl Decode for FullAsset {
    const ROOT: &'static str = "asset";
}

impl FromNode for Buddy {
    fn from_node(n: &Node) -> Result<Self> {
        Ok(Self {
            name: string(n, "name")?,
            id: value(n, "id")?,
        })
    }
}

impl FromNode for Buddies {
    fn from_node(n: &Node) -> Result<Self> {
        Ok(Self {
            buddies: items(n, "buddy")?,
        })
    }
}

impl Decode for Buddies {
    const ROOT: &'static str = "users";
}
