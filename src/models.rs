//! Read-only views over CMS records, shaped after the GraphQL selections
//! the loaders send. Field names follow the CMS (camelCase) on both the
//! wire and in the JSON props served by the API routes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::utils::{parse_cms_date, uniq_by};

/// Deserialize null as the type's default. Pair with `#[serde(default)]`
/// to also accept a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let opt: Option<T> = Option::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

fn deserialize_cms_date<'de, D>(deserializer: D) -> std::result::Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(raw) => parse_cms_date(&raw)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid date '{}'", raw))),
    }
}

/// A `fooCollection { items }` selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Collection<T> {
    #[serde(default = "Vec::new", deserialize_with = "null_as_default")]
    pub items: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sys {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub sys: Sys,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content_type: Option<String>,
    /// Empty while an upload is still processing
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub city: Option<City>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreCategory {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Genre {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub genre_category: Option<GenreCategory>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mark {
    #[serde(rename = "type")]
    pub mark_type: String,
}

/// One node of a rich-text document tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RichTextNode {
    pub node_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub marks: Vec<Mark>,
    #[serde(default)]
    pub data: serde_json::Value,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<RichTextNode>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetLinks {
    #[serde(default, deserialize_with = "null_as_default")]
    pub block: Vec<Asset>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RichTextLinks {
    #[serde(default, deserialize_with = "null_as_default")]
    pub assets: AssetLinks,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichText {
    pub json: RichTextNode,
    #[serde(default, deserialize_with = "null_as_default")]
    pub links: RichTextLinks,
}

impl RichText {
    /// Embedded block asset referenced by `sys.id`
    pub fn block_asset(&self, id: &str) -> Option<&Asset> {
        self.links.assets.block.iter().find(|asset| asset.sys.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Show {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_cms_date")]
    pub date: Option<DateTime<Utc>>,
    /// Empty for drafts that have not been given a slug yet
    #[serde(deserialize_with = "null_as_default")]
    pub slug: String,
    #[serde(default)]
    pub mixcloud_link: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_featured: bool,
    #[serde(default)]
    pub cover_image: Option<Asset>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub artists_collection: Collection<Artist>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub genres_collection: Collection<Genre>,
    #[serde(default)]
    pub content: Option<RichText>,
}

impl Show {
    /// Shows without a slug cannot be linked to or told apart
    pub fn has_slug(&self) -> bool {
        !self.slug.is_empty()
    }

    pub fn artists(&self) -> &[Artist] {
        &self.artists_collection.items
    }

    pub fn genres(&self) -> &[Genre] {
        &self.genres_collection.items
    }

    pub fn genre_names(&self) -> impl Iterator<Item = &str> {
        self.genres()
            .iter()
            .map(|genre| genre.name.as_str())
            .filter(|name| !name.is_empty())
    }

    /// Whether the two shows carry at least one genre with the same name
    pub fn shares_genre_with(&self, other: &Show) -> bool {
        self.genre_names()
            .any(|name| other.genre_names().any(|other_name| other_name == name))
    }

    pub fn is_after(&self, instant: DateTime<Utc>) -> bool {
        self.date.is_some_and(|date| date > instant)
    }

    pub fn is_before(&self, instant: DateTime<Utc>) -> bool {
        self.date.is_some_and(|date| date < instant)
    }
}

/// About page family singleton
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub cover_image: Option<Asset>,
    #[serde(default)]
    pub content: Option<RichText>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenreLinks {
    #[serde(default, deserialize_with = "null_as_default")]
    pub show_collection: Collection<Show>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedGenre {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub linked_from: GenreLinks,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenreCategoryLinks {
    #[serde(default, deserialize_with = "null_as_default")]
    pub genres_collection: Collection<LinkedGenre>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenreCategoryNode {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub linked_from: GenreCategoryLinks,
}

/// Raw category → genres → shows traversal. A show tagged with several
/// genres of the same category appears once per genre.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenreCategoryShows {
    pub genre_category_collection: Collection<GenreCategoryNode>,
}

impl GenreCategoryShows {
    pub fn category(&self) -> Option<&GenreCategoryNode> {
        self.genre_category_collection.items.first()
    }

    pub fn is_empty(&self) -> bool {
        self.genre_category_collection.items.is_empty()
    }

    /// Flatten the traversal, keeping the first occurrence of every slug
    pub fn unique_shows(&self) -> Vec<&Show> {
        let shows = self
            .genre_category_collection
            .items
            .iter()
            .flat_map(|category| category.linked_from.genres_collection.items.iter())
            .flat_map(|genre| genre.linked_from.show_collection.items.iter())
            .filter(|show| show.has_slug());

        uniq_by(shows, |show| show.slug.clone())
    }

    /// Whether any genre filled its page, so a later page may hold more
    pub fn has_more(&self, page_size: u32) -> bool {
        self.genre_category_collection
            .items
            .iter()
            .flat_map(|category| category.linked_from.genres_collection.items.iter())
            .any(|genre| genre.linked_from.show_collection.items.len() >= page_size as usize)
    }
}
