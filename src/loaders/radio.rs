//! Radio show loaders: the show listing, the landing page partition, single
//! show pages with related shows, and the genre category traversal.
//!
//! Every loader that compares against the current time takes `now` as an
//! argument. Callers read the clock once per request.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;

use super::LIMITS;
use crate::{
    error::{AppError, Result},
    models::{Collection, GenreCategory, GenreCategoryShows, Show},
    services::{extract_collection, extract_collection_item, ContentfulService},
    utils::sort,
};

const ALL_SHOWS_QUERY: &str = r#"
query AllShowsQuery($preview: Boolean, $limit: Int) {
  showCollection(
    order: date_DESC
    where: { artistsCollection_exists: true }
    preview: $preview
    limit: $limit
  ) {
    items {
      title
      date
      slug
      mixcloudLink
      isFeatured
      coverImage {
        sys {
          id
        }
        title
        description
        url
        width
        height
      }
      artistsCollection(limit: 4) {
        items {
          name
          slug
          city {
            name
          }
        }
      }
      genresCollection(limit: 5) {
        items {
          name
          genreCategory {
            name
          }
        }
      }
      content {
        json
      }
    }
  }
}
"#;

const GENRE_CATEGORIES_QUERY: &str = r#"
query AllGenreCategoriesQuery($preview: Boolean) {
  genreCategoryCollection(preview: $preview) {
    items {
      name
    }
  }
}
"#;

const RADIO_PAGE_SINGLE_QUERY: &str = r#"
query RadioPageSingleQuery($slug: String, $preview: Boolean) {
  showCollection(where: { slug: $slug }, limit: 1, preview: $preview) {
    items {
      title
      date
      slug
      mixcloudLink
      isFeatured
      coverImage {
        sys {
          id
        }
        title
        description
        url
        width
        height
      }
      artistsCollection(limit: 9) {
        items {
          name
          slug
          city {
            name
          }
        }
      }
      genresCollection(limit: 9) {
        items {
          name
        }
      }
      content {
        json
        links {
          assets {
            block {
              sys {
                id
              }
              contentType
              title
              description
              url
              width
              height
            }
          }
        }
      }
    }
  }
}
"#;

const SHOWS_BY_GENRE_CATEGORY_QUERY: &str = r#"
query ShowsByGenreCategoryQuery($preview: Boolean, $genre: String, $skip: Int) {
  genreCategoryCollection(preview: $preview, limit: 1, where: { name: $genre }) {
    items {
      name
      linkedFrom {
        genresCollection(limit: 100) {
          items {
            name
            linkedFrom {
              showCollection(limit: 8, skip: $skip) {
                items {
                  title
                  date
                  slug
                  mixcloudLink
                  isFeatured
                  coverImage {
                    sys {
                      id
                    }
                    title
                    url
                    width
                    height
                  }
                  artistsCollection(limit: 4) {
                    items {
                      name
                    }
                  }
                  genresCollection(limit: 4) {
                    items {
                      name
                    }
                  }
                }
              }
            }
          }
        }
      }
    }
  }
}
"#;

/// Shows per page in the genre category traversal
pub const GENRE_PAGE_SIZE: u32 = 8;

/// Upcoming shows kept on the landing page
pub const UPCOMING_LIMIT: usize = 16;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllShows {
    pub shows: Vec<Show>,
    pub genre_categories: Vec<GenreCategory>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RadioPage {
    pub upcoming_shows: Vec<Show>,
    pub past_shows: Vec<Show>,
    pub genres: Vec<GenreCategory>,
    pub featured_shows: Vec<Show>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RadioPageSingle {
    pub show: Show,
    pub related_shows: Vec<Show>,
}

/// Every show with at least one artist, newest first, plus all genre
/// categories. `limit` defaults to `LIMITS.shows`.
pub async fn get_all_shows(
    cms: &ContentfulService,
    preview: bool,
    limit: Option<u32>,
) -> Result<AllShows> {
    let limit = limit.unwrap_or(LIMITS.shows);

    let (mut shows, mut genre_categories) = tokio::try_join!(
        cms.graphql(
            ALL_SHOWS_QUERY,
            json!({ "preview": preview, "limit": limit }),
            preview,
        ),
        cms.graphql(GENRE_CATEGORIES_QUERY, json!({ "preview": preview }), preview),
    )?;

    let all = AllShows {
        shows: drop_unaddressable(extract_collection(&mut shows, "showCollection")?),
        genre_categories: extract_collection(&mut genre_categories, "genreCategoryCollection")?,
    };

    tracing::debug!(
        shows = all.shows.len(),
        genre_categories = all.genre_categories.len(),
        "Loaded show listing"
    );

    Ok(all)
}

/// Drop shows that have no slug yet. Drafts in preview can lack one and
/// would otherwise collide in related-show and self-exclusion checks.
fn drop_unaddressable(shows: Vec<Show>) -> Vec<Show> {
    shows
        .into_iter()
        .filter(|show| {
            if !show.has_slug() {
                tracing::warn!(title = %show.title, "Skipping show without a slug");
            }
            show.has_slug()
        })
        .collect()
}

/// Landing page data: upcoming, past and featured shows
pub async fn get_radio_page(
    cms: &ContentfulService,
    preview: bool,
    now: DateTime<Utc>,
) -> Result<RadioPage> {
    let AllShows {
        shows,
        genre_categories,
    } = get_all_shows(cms, preview, None).await?;

    Ok(partition_shows(shows, genre_categories, now))
}

/// Split a show listing around `now`. A show dated exactly `now` is neither
/// upcoming nor past; undated shows are neither.
pub fn partition_shows(
    shows: Vec<Show>,
    genre_categories: Vec<GenreCategory>,
    now: DateTime<Utc>,
) -> RadioPage {
    let mut upcoming_shows: Vec<Show> = shows.iter().filter(|show| show.is_after(now)).cloned().collect();
    upcoming_shows.sort_by(|a, b| sort::date_asc(a.date, b.date));
    upcoming_shows.truncate(UPCOMING_LIMIT);

    let mut past_shows: Vec<Show> = shows.iter().filter(|show| show.is_before(now)).cloned().collect();
    past_shows.sort_by(|a, b| sort::date_desc(a.date, b.date));

    let featured_shows = shows.into_iter().filter(|show| show.is_featured).collect();

    RadioPage {
        upcoming_shows,
        past_shows,
        genres: genre_categories,
        featured_shows,
    }
}

/// A single show by slug, with related past shows
pub async fn get_radio_page_single(
    cms: &ContentfulService,
    slug: &str,
    preview: bool,
    now: DateTime<Utc>,
) -> Result<RadioPageSingle> {
    let mut data = cms
        .graphql(
            RADIO_PAGE_SINGLE_QUERY,
            json!({ "slug": slug, "preview": preview }),
            preview,
        )
        .await?;

    let show: Show = extract_collection_item(&mut data, "showCollection")?
        .ok_or_else(|| AppError::NotFound(format!("No Show found for slug '{}'", slug)))?;

    let AllShows { shows, .. } = get_all_shows(cms, preview, None).await?;
    let related_shows = related_shows(&show, shows, now);

    tracing::debug!(slug, related = related_shows.len(), "Loaded single show");

    Ok(RadioPageSingle {
        show,
        related_shows,
    })
}

/// Past shows, other than `target`, sharing at least one genre name with it.
/// Keeps the order of `shows`.
pub fn related_shows(target: &Show, shows: Vec<Show>, now: DateTime<Utc>) -> Vec<Show> {
    shows
        .into_iter()
        .filter(|show| show.slug != target.slug)
        .filter(|show| show.is_before(now))
        .filter(|show| show.shares_genre_with(target))
        .collect()
}

/// Category → genres → shows traversal for one page of shows. The nested
/// result is returned untouched; see [`GenreCategoryShows::unique_shows`].
pub async fn get_shows_by_genre_category(
    cms: &ContentfulService,
    preview: bool,
    genre: &str,
    skip: u32,
) -> Result<GenreCategoryShows> {
    let mut data = cms
        .graphql(
            SHOWS_BY_GENRE_CATEGORY_QUERY,
            json!({ "preview": preview, "genre": genre, "skip": skip }),
            preview,
        )
        .await?;

    let categories = extract_collection(&mut data, "genreCategoryCollection")?;

    Ok(GenreCategoryShows {
        genre_category_collection: Collection { items: categories },
    })
}
