use serde::Deserialize;

use crate::{
    models::{AnilistMedia, AnimePage},
    AnilistClient,
};

const MEDIA_FIELDS: &str = r#"
    id
    title { english romaji native }
    startDate { year }
    status
    format
    episodes
    coverImage { extraLarge large }
    bannerImage
    description(asHtml: false)
    genres
    averageScore
    popularity
    studios(isMain: true) { nodes { id name } }
    trailer { id site }
    characters(sort: ROLE, perPage: 12) {
        edges {
            role
            node { id name { userPreferred } image { large } }
        }
    }
"#;

#[derive(Debug, Deserialize)]
struct PageData {
    #[serde(rename = "Page")]
    page: AnimePage,
}

#[derive(Debug, Deserialize)]
struct MediaData {
    #[serde(rename = "Media")]
    media: AnilistMedia,
}

impl AnilistClient {
    /// Get one page of trending anime, sorted by AniList's trending rank.
    pub async fn trending_anime(&self, page: i64, per_page: i64) -> crate::Result<AnimePage> {
        let query = format!(
            r#"query ($page: Int, $perPage: Int) {{
                Page(page: $page, perPage: $perPage) {{
                    pageInfo {{ currentPage lastPage hasNextPage }}
                    media(sort: TRENDING_DESC, type: ANIME, isAdult: false) {{ {} }}
                }}
            }}"#,
            MEDIA_FIELDS
        );

        let data: PageData = self
            .graphql(
                &query,
                serde_json::json!({ "page": page, "perPage": per_page }),
            )
            .await?;
        Ok(data.page)
    }

    /// Get the details of one anime by AniList id.
    pub async fn anime_details(&self, id: i64) -> crate::Result<AnilistMedia> {
        let query = format!(
            r#"query ($id: Int) {{
                Media(id: $id, type: ANIME) {{ {} }}
            }}"#,
            MEDIA_FIELDS
        );

        let data: MediaData = self
            .graphql(&query, serde_json::json!({ "id": id }))
            .await?;
        Ok(data.media)
    }
}
