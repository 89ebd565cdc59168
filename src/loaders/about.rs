use serde_json::json;

use crate::{
    error::{AppError, Result},
    models::Page,
    services::{extract_collection_item, ContentfulService},
};

const ABOUT_PAGE_QUERY: &str = r#"
query AboutPageQuery($preview: Boolean) {
  aboutPageCollection(preview: $preview, limit: 1) {
    items {
      title
      subtitle
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

/// The about page singleton
pub async fn get_about_page(cms: &ContentfulService, preview: bool) -> Result<Page> {
    let mut data = cms
        .graphql(ABOUT_PAGE_QUERY, json!({ "preview": preview }), preview)
        .await?;

    extract_collection_item(&mut data, "aboutPageCollection")?
        .ok_or_else(|| AppError::NotFound("No About page found".to_string()))
}
