//! Pure mapping from provider records to canonical records.

use std::sync::OnceLock;

use regex::Regex;

use anilist::models::AnilistMedia;
use tmdb::models::{
    CastCredit, CrewCredit, Movie, MovieDetails, PaginatedResponse, PersonCredit, Recommendation,
    TvShow, TvShowDetails, Video, WatchProviders,
};
use tmdb::{backdrop_url, logo_url, poster_url, profile_url};

use crate::classify::classify;
use crate::dedup::dedup_by_key;
use crate::models::{
    CastMember, CrewMember, DetailedMedia, Financials, MediaKind, Rating, RelatedTitle,
    StreamingProvider, UnifiedMedia,
};

const UNTITLED: &str = "Untitled";
const DOCUMENTARY_GENRE_ID: i64 = 99;
const CREW_CAP: usize = 8;
const CAST_CAP: usize = 12;
/// AniList popularity counts are on a different scale than vote counts.
const ANILIST_BADGE_THRESHOLD: i64 = 1000;

const CREW_ALLOWED_JOBS: &[&str] = &[
    "Director",
    "Executive Producer",
    "Director of Photography",
    "Original Music Composer",
    "Screenplay",
    "Writer",
];

const COMPOSER_JOBS: &[&str] = &["Original Music Composer", "Music"];

const RECOMMENDATION_CAP: usize = 5;
/// Offerings are region-scoped; only one region is surfaced for now.
const PROVIDER_REGION: &str = "US";

// ============ Summary projections ============

pub fn unified_from_movie(movie: &Movie) -> UnifiedMedia {
    let kind = movie_kind(&movie.genre_ids);
    UnifiedMedia {
        id: movie.id.to_string(),
        title: resolve_title(&movie.title, &movie.original_title),
        kind,
        poster_url: poster_url(movie.poster_path.as_deref()),
        year: parse_year(&[movie.release_date.as_deref()]),
        classification: classify(kind, &movie.genre_ids),
        rating: Rating::from_votes(movie.vote_average, movie.vote_count),
        genres: Vec::new(),
        popularity: movie.popularity,
    }
}

pub fn unified_from_tv(tv: &TvShow) -> UnifiedMedia {
    let kind = series_kind(&tv.genre_ids);
    UnifiedMedia {
        id: tv.id.to_string(),
        title: resolve_title(&tv.name, &tv.original_name),
        kind,
        poster_url: poster_url(tv.poster_path.as_deref()),
        year: parse_year(&[tv.first_air_date.as_deref()]),
        classification: classify(kind, &tv.genre_ids),
        rating: Rating::from_votes(tv.vote_average, tv.vote_count),
        genres: Vec::new(),
        popularity: tv.popularity,
    }
}

/// Map one entry of a person's combined credits.
pub fn unified_from_person_credit(credit: &PersonCredit) -> UnifiedMedia {
    let kind = match credit.media_type.as_deref() {
        Some("tv") => series_kind(&credit.genre_ids),
        _ => movie_kind(&credit.genre_ids),
    };
    let title = credit
        .title
        .as_deref()
        .or(credit.name.as_deref())
        .unwrap_or("");
    UnifiedMedia {
        id: credit.id.to_string(),
        title: resolve_title(title, ""),
        kind,
        poster_url: poster_url(credit.poster_path.as_deref()),
        year: parse_year(&[
            credit.release_date.as_deref(),
            credit.first_air_date.as_deref(),
        ]),
        classification: classify(kind, &credit.genre_ids),
        rating: Rating::from_votes(credit.vote_average, credit.vote_count),
        genres: Vec::new(),
        popularity: credit.popularity,
    }
}

pub fn unified_from_anilist(media: &AnilistMedia) -> UnifiedMedia {
    let popularity = media.popularity.unwrap_or(0);
    UnifiedMedia {
        id: media.id.to_string(),
        title: resolve_anilist_title(media),
        kind: MediaKind::Anime,
        poster_url: media.cover_image.as_ref().and_then(|cover| {
            cover
                .extra_large
                .clone()
                .or_else(|| cover.large.clone())
        }),
        year: media.start_date.year,
        classification: classify(MediaKind::Anime, &[]),
        rating: Rating {
            average: media.average_score.unwrap_or(0) as f64 / 10.0,
            count: popularity,
            show_badge: popularity > ANILIST_BADGE_THRESHOLD,
        },
        genres: media.genres.clone(),
        popularity: popularity as f64,
    }
}

// ============ Detail projections ============

pub fn detailed_from_movie(details: &MovieDetails) -> DetailedMedia {
    let genre_ids: Vec<i64> = details.genres.iter().map(|g| g.id).collect();
    let kind = movie_kind(&genre_ids);
    let crew = details
        .credits
        .as_ref()
        .map(|c| c.crew.as_slice())
        .unwrap_or_default();

    let summary = UnifiedMedia {
        id: details.id.to_string(),
        title: resolve_title(&details.title, &details.original_title),
        kind,
        poster_url: poster_url(details.poster_path.as_deref()),
        year: parse_year(&[details.release_date.as_deref()]),
        classification: classify(kind, &genre_ids),
        rating: Rating::from_votes(details.vote_average, details.vote_count),
        genres: details.genres.iter().map(|g| g.name.clone()).collect(),
        popularity: details.popularity,
    };

    DetailedMedia {
        summary,
        overview: details.overview.clone(),
        backdrop_url: backdrop_url(details.backdrop_path.as_deref()),
        runtime_label: details.runtime.map(|minutes| format!("{} min", minutes)),
        status_label: status_label(kind, details.status.as_deref()),
        cast: cast_members(
            details
                .credits
                .as_ref()
                .map(|c| c.cast.as_slice())
                .unwrap_or_default(),
        ),
        crew: filter_crew(crew),
        composers: composers_from_crew(crew),
        soundtrack: Vec::new(),
        trailer_url: pick_trailer(
            details
                .videos
                .as_ref()
                .map(|v| v.results.as_slice())
                .unwrap_or_default(),
        ),
        financials: financials(details.budget, details.revenue),
        providers: streaming_providers(details.watch_providers.as_ref()),
        recommendations: related_titles(details.recommendations.as_ref(), MediaKind::Film),
        imdb_id: details.imdb_id.clone().or_else(|| {
            details
                .external_ids
                .as_ref()
                .and_then(|ids| ids.imdb_id.clone())
        }),
        keywords: details
            .keywords
            .as_ref()
            .map(|k| k.items().iter().map(|kw| kw.name.clone()).collect())
            .unwrap_or_default(),
    }
}

pub fn detailed_from_tv(details: &TvShowDetails) -> DetailedMedia {
    let genre_ids: Vec<i64> = details.genres.iter().map(|g| g.id).collect();
    let kind = series_kind(&genre_ids);
    let crew = details
        .credits
        .as_ref()
        .map(|c| c.crew.as_slice())
        .unwrap_or_default();

    let summary = UnifiedMedia {
        id: details.id.to_string(),
        title: resolve_title(&details.name, &details.original_name),
        kind,
        poster_url: poster_url(details.poster_path.as_deref()),
        year: parse_year(&[details.first_air_date.as_deref()]),
        classification: classify(kind, &genre_ids),
        rating: Rating::from_votes(details.vote_average, details.vote_count),
        genres: details.genres.iter().map(|g| g.name.clone()).collect(),
        popularity: details.popularity,
    };

    DetailedMedia {
        summary,
        overview: details.overview.clone(),
        backdrop_url: backdrop_url(details.backdrop_path.as_deref()),
        runtime_label: Some(format!("{} Seasons", details.number_of_seasons)),
        status_label: status_label(kind, details.status.as_deref()),
        cast: cast_members(
            details
                .credits
                .as_ref()
                .map(|c| c.cast.as_slice())
                .unwrap_or_default(),
        ),
        crew: series_crew(details, crew),
        composers: composers_from_crew(crew),
        soundtrack: Vec::new(),
        trailer_url: pick_trailer(
            details
                .videos
                .as_ref()
                .map(|v| v.results.as_slice())
                .unwrap_or_default(),
        ),
        financials: None,
        providers: streaming_providers(details.watch_providers.as_ref()),
        recommendations: related_titles(details.recommendations.as_ref(), MediaKind::Series),
        imdb_id: details
            .external_ids
            .as_ref()
            .and_then(|ids| ids.imdb_id.clone()),
        keywords: details
            .keywords
            .as_ref()
            .map(|k| k.items().iter().map(|kw| kw.name.clone()).collect())
            .unwrap_or_default(),
    }
}

pub fn detailed_from_anilist(media: &AnilistMedia) -> DetailedMedia {
    let summary = unified_from_anilist(media);

    let cast = media
        .characters
        .as_ref()
        .map(|connection| {
            connection
                .edges
                .iter()
                .take(CAST_CAP)
                .map(|edge| CastMember {
                    person_id: edge.node.id.to_string(),
                    name: edge
                        .node
                        .name
                        .user_preferred
                        .clone()
                        .unwrap_or_default(),
                    character: edge.role.clone().unwrap_or_else(|| "Character".to_string()),
                    photo_url: edge
                        .node
                        .image
                        .as_ref()
                        .and_then(|image| image.large.clone()),
                })
                .collect()
        })
        .unwrap_or_default();

    DetailedMedia {
        summary,
        overview: media
            .description
            .as_deref()
            .map(strip_html)
            .unwrap_or_default(),
        backdrop_url: media.banner_image.clone(),
        runtime_label: media.episodes.map(|count| format!("{} Episodes", count)),
        status_label: status_label(MediaKind::Anime, media.status.as_deref()),
        cast,
        crew: Vec::new(),
        composers: Vec::new(),
        soundtrack: Vec::new(),
        trailer_url: anilist_trailer(media),
        financials: None,
        providers: Vec::new(),
        recommendations: Vec::new(),
        imdb_id: None,
        keywords: Vec::new(),
    }
}

// ============ Resolution rules ============

/// Prefer the localized title, fall back to the original-language title,
/// fall back to a literal sentinel. Never fails.
fn resolve_title(primary: &str, secondary: &str) -> String {
    if !primary.is_empty() {
        primary.to_string()
    } else if !secondary.is_empty() {
        secondary.to_string()
    } else {
        UNTITLED.to_string()
    }
}

fn resolve_anilist_title(media: &AnilistMedia) -> String {
    media
        .title
        .english
        .clone()
        .or_else(|| media.title.romaji.clone())
        .unwrap_or_else(|| UNTITLED.to_string())
}

/// Parse the year from the first populated date field (`YYYY-MM-DD`).
fn parse_year(dates: &[Option<&str>]) -> Option<i32> {
    dates
        .iter()
        .flatten()
        .find(|date| !date.is_empty())
        .and_then(|date| date.get(..4))
        .and_then(|year| year.parse().ok())
}

fn movie_kind(genre_ids: &[i64]) -> MediaKind {
    if genre_ids.contains(&DOCUMENTARY_GENRE_ID) {
        MediaKind::Documentary
    } else {
        MediaKind::Film
    }
}

fn series_kind(genre_ids: &[i64]) -> MediaKind {
    if genre_ids.contains(&DOCUMENTARY_GENRE_ID) {
        MediaKind::Documentary
    } else {
        MediaKind::Series
    }
}

fn status_label(kind: MediaKind, status: Option<&str>) -> Option<String> {
    let status = status?;
    let label = match (kind, status) {
        (MediaKind::Film | MediaKind::Documentary, "Released") => "Now Playing",
        (MediaKind::Film | MediaKind::Documentary, "Post Production" | "Planned") => "Coming Soon",
        (MediaKind::Series, "Ended") => "Completed",
        (MediaKind::Series, "Returning Series") => "Returning",
        (MediaKind::Anime, "RELEASING") => "Simulcast",
        (MediaKind::Anime, "FINISHED") => "Completed",
        (MediaKind::Anime, "NOT_YET_RELEASED") => "Upcoming",
        (_, other) => other,
    };
    Some(label.to_string())
}

/// Keep only the allow-listed job titles, capped, upstream order intact.
fn filter_crew(crew: &[CrewCredit]) -> Vec<CrewMember> {
    crew.iter()
        .filter(|member| CREW_ALLOWED_JOBS.contains(&member.job.as_str()))
        .take(CREW_CAP)
        .map(crew_member)
        .collect()
}

/// Series crew: the creators lead, followed by the allow-listed crew,
/// capped as one list.
fn series_crew(details: &TvShowDetails, crew: &[CrewCredit]) -> Vec<CrewMember> {
    let mut members: Vec<CrewMember> = details
        .created_by
        .iter()
        .map(|creator| CrewMember {
            person_id: creator.id.to_string(),
            name: creator.name.clone(),
            job: "Creator".to_string(),
            photo_url: profile_url(creator.profile_path.as_deref()),
        })
        .collect();
    members.extend(filter_crew(crew));
    members.truncate(CREW_CAP);
    members
}

fn composers_from_crew(crew: &[CrewCredit]) -> Vec<CrewMember> {
    crew.iter()
        .filter(|member| COMPOSER_JOBS.contains(&member.job.as_str()))
        .map(crew_member)
        .collect()
}

fn crew_member(credit: &CrewCredit) -> CrewMember {
    CrewMember {
        person_id: credit.id.to_string(),
        name: credit.name.clone(),
        job: credit.job.clone(),
        photo_url: profile_url(credit.profile_path.as_deref()),
    }
}

fn cast_members(cast: &[CastCredit]) -> Vec<CastMember> {
    cast.iter()
        .take(CAST_CAP)
        .map(|credit| CastMember {
            person_id: credit.id.to_string(),
            name: credit.name.clone(),
            character: credit.character.clone(),
            photo_url: profile_url(credit.profile_path.as_deref()),
        })
        .collect()
}

/// Prefer the official YouTube trailer, fall back to any YouTube trailer.
fn pick_trailer(videos: &[Video]) -> Option<String> {
    let youtube_trailer =
        |video: &&Video| video.video_type == "Trailer" && video.site == "YouTube";

    videos
        .iter()
        .filter(youtube_trailer)
        .find(|video| video.official)
        .or_else(|| videos.iter().find(youtube_trailer))
        .map(|video| format!("https://www.youtube.com/watch?v={}", video.key))
}

fn anilist_trailer(media: &AnilistMedia) -> Option<String> {
    let trailer = media.trailer.as_ref()?;
    match (trailer.site.as_deref(), trailer.id.as_deref()) {
        (Some("youtube"), Some(id)) => {
            Some(format!("https://www.youtube.com/watch?v={}", id))
        }
        _ => None,
    }
}

/// Merge the region's offer types and de-dup by provider id; a provider
/// offering both streaming and purchase appears once.
fn streaming_providers(providers: Option<&WatchProviders>) -> Vec<StreamingProvider> {
    let Some(offerings) = providers.and_then(|p| p.results.get(PROVIDER_REGION)) else {
        return Vec::new();
    };

    let merged: Vec<_> = offerings
        .flatrate
        .iter()
        .chain(offerings.buy.iter())
        .chain(offerings.rent.iter())
        .collect();

    dedup_by_key(merged, |provider| provider.provider_id)
        .into_iter()
        .map(|provider| StreamingProvider {
            provider_id: provider.provider_id,
            name: provider.provider_name.clone(),
            logo_url: logo_url(provider.logo_path.as_deref()),
        })
        .collect()
}

fn related_titles(
    recommendations: Option<&PaginatedResponse<Recommendation>>,
    default_kind: MediaKind,
) -> Vec<RelatedTitle> {
    let Some(page) = recommendations else {
        return Vec::new();
    };

    page.results
        .iter()
        .take(RECOMMENDATION_CAP)
        .map(|rec| RelatedTitle {
            id: rec.id.to_string(),
            title: rec
                .title
                .clone()
                .or_else(|| rec.name.clone())
                .unwrap_or_else(|| UNTITLED.to_string()),
            poster_url: poster_url(rec.poster_path.as_deref()),
            kind: match rec.media_type.as_deref() {
                Some("tv") => MediaKind::Series,
                Some("movie") => MediaKind::Film,
                _ => default_kind,
            },
        })
        .collect()
}

fn financials(budget: i64, revenue: i64) -> Option<Financials> {
    if budget > 0 || revenue > 0 {
        Some(Financials { budget, revenue })
    } else {
        None
    }
}

fn strip_html(text: &str) -> String {
    static TAGS: OnceLock<Regex> = OnceLock::new();
    let tags = TAGS.get_or_init(|| Regex::new(r"<[^>]*>").expect("static regex is valid"));
    tags.replace_all(text, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Classification;

    fn movie_json(value: serde_json::Value) -> Movie {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn title_falls_back_to_original_then_sentinel() {
        assert_eq!(resolve_title("Heat", "Heat"), "Heat");
        assert_eq!(resolve_title("", "La Haine"), "La Haine");
        assert_eq!(resolve_title("", ""), "Untitled");
    }

    #[test]
    fn year_uses_first_populated_date() {
        assert_eq!(parse_year(&[Some("1999-10-15")]), Some(1999));
        assert_eq!(parse_year(&[None, Some("2012-01-01")]), Some(2012));
        assert_eq!(parse_year(&[Some(""), Some("2005-06-01")]), Some(2005));
        assert_eq!(parse_year(&[None, None]), None);
    }

    #[test]
    fn unified_movie_maps_core_fields() {
        let movie = movie_json(serde_json::json!({
            "id": 603,
            "title": "The Matrix",
            "original_title": "The Matrix",
            "poster_path": "/matrix.jpg",
            "release_date": "1999-03-30",
            "vote_average": 8.2,
            "vote_count": 24000,
            "popularity": 85.3,
            "genre_ids": [28, 878],
        }));

        let unified = unified_from_movie(&movie);
        assert_eq!(unified.id, "603");
        assert_eq!(unified.kind, MediaKind::Film);
        assert_eq!(unified.year, Some(1999));
        assert_eq!(unified.classification, Classification::Visceral);
        assert!(unified.rating.show_badge);
        assert_eq!(
            unified.poster_url.as_deref(),
            Some("https://image.tmdb.org/t/p/w500/matrix.jpg")
        );
    }

    #[test]
    fn documentary_genre_overrides_kind() {
        let movie = movie_json(serde_json::json!({
            "id": 1,
            "title": "Koyaanisqatsi",
            "genre_ids": [99, 10402],
        }));
        assert_eq!(unified_from_movie(&movie).kind, MediaKind::Documentary);
    }

    #[test]
    fn schema_drift_defaults_gracefully() {
        // Bare-minimum record: only an id.
        let movie = movie_json(serde_json::json!({ "id": 7 }));
        let unified = unified_from_movie(&movie);
        assert_eq!(unified.title, "Untitled");
        assert_eq!(unified.year, None);
        assert_eq!(unified.classification, Classification::DEFAULT);
    }

    #[test]
    fn crew_is_filtered_and_capped() {
        let crew: Vec<CrewCredit> = (0..25)
            .map(|i| {
                serde_json::from_value(serde_json::json!({
                    "id": i,
                    "name": format!("Person {}", i),
                    "job": if i % 5 == 0 { "Gaffer" } else { "Director" },
                }))
                .unwrap()
            })
            .collect();

        let filtered = filter_crew(&crew);
        assert_eq!(filtered.len(), CREW_CAP);
        // Upstream relative order preserved; gaffers skipped.
        assert_eq!(filtered[0].person_id, "1");
        assert_eq!(filtered[1].person_id, "2");
        assert!(filtered.iter().all(|member| member.job == "Director"));
    }

    #[test]
    fn composers_match_both_composer_jobs() {
        let crew: Vec<CrewCredit> = vec![
            serde_json::from_value(
                serde_json::json!({"id": 1, "name": "A", "job": "Original Music Composer"}),
            )
            .unwrap(),
            serde_json::from_value(serde_json::json!({"id": 2, "name": "B", "job": "Music"}))
                .unwrap(),
            serde_json::from_value(serde_json::json!({"id": 3, "name": "C", "job": "Director"}))
                .unwrap(),
        ];
        let composers = composers_from_crew(&crew);
        assert_eq!(composers.len(), 2);
        assert_eq!(composers[0].person_id, "1");
    }

    #[test]
    fn official_trailer_is_preferred() {
        let videos: Vec<Video> = serde_json::from_value(serde_json::json!([
            {"key": "fan", "site": "YouTube", "type": "Trailer", "official": false},
            {"key": "teaser", "site": "YouTube", "type": "Teaser", "official": true},
            {"key": "official", "site": "YouTube", "type": "Trailer", "official": true},
        ]))
        .unwrap();

        assert_eq!(
            pick_trailer(&videos).as_deref(),
            Some("https://www.youtube.com/watch?v=official")
        );
    }

    #[test]
    fn unofficial_trailer_is_a_fallback() {
        let videos: Vec<Video> = serde_json::from_value(serde_json::json!([
            {"key": "fan", "site": "YouTube", "type": "Trailer", "official": false},
        ]))
        .unwrap();
        assert_eq!(
            pick_trailer(&videos).as_deref(),
            Some("https://www.youtube.com/watch?v=fan")
        );
        assert_eq!(pick_trailer(&[]), None);
    }

    #[test]
    fn status_labels_follow_release_state() {
        assert_eq!(
            status_label(MediaKind::Film, Some("Released")).as_deref(),
            Some("Now Playing")
        );
        assert_eq!(
            status_label(MediaKind::Film, Some("Post Production")).as_deref(),
            Some("Coming Soon")
        );
        assert_eq!(
            status_label(MediaKind::Series, Some("Ended")).as_deref(),
            Some("Completed")
        );
        assert_eq!(
            status_label(MediaKind::Series, Some("Returning Series")).as_deref(),
            Some("Returning")
        );
        assert_eq!(status_label(MediaKind::Film, None), None);
    }

    #[test]
    fn anilist_detail_strips_html_and_resolves_title() {
        let media: AnilistMedia = serde_json::from_value(serde_json::json!({
            "id": 21,
            "title": {"english": null, "romaji": "One Piece", "native": "ワンピース"},
            "startDate": {"year": 1999},
            "description": "Pirates <b>sail</b> the <i>Grand Line</i>.",
            "episodes": 1000,
            "averageScore": 88,
            "popularity": 500000,
            "genres": ["Action", "Adventure"],
        }))
        .unwrap();

        let detail = detailed_from_anilist(&media);
        assert_eq!(detail.summary.title, "One Piece");
        assert_eq!(detail.summary.kind, MediaKind::Anime);
        assert_eq!(detail.overview, "Pirates sail the Grand Line.");
        assert_eq!(detail.runtime_label.as_deref(), Some("1000 Episodes"));
        assert!((detail.summary.rating.average - 8.8).abs() < f64::EPSILON);
        assert!(detail.summary.rating.show_badge);
    }

    #[test]
    fn providers_merge_offer_types_without_duplicates() {
        let providers: WatchProviders = serde_json::from_value(serde_json::json!({
            "results": {
                "US": {
                    "flatrate": [
                        {"provider_id": 8, "provider_name": "Netflix", "logo_path": "/n.jpg"},
                    ],
                    "buy": [
                        {"provider_id": 2, "provider_name": "Apple TV", "logo_path": "/a.jpg"},
                        {"provider_id": 8, "provider_name": "Netflix", "logo_path": "/n.jpg"},
                    ],
                    "rent": [
                        {"provider_id": 2, "provider_name": "Apple TV", "logo_path": "/a.jpg"},
                    ],
                },
                "FR": {
                    "flatrate": [
                        {"provider_id": 119, "provider_name": "Canal+", "logo_path": "/c.jpg"},
                    ],
                },
            }
        }))
        .unwrap();

        let merged = streaming_providers(Some(&providers));
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].provider_id, 8);
        assert_eq!(merged[1].name, "Apple TV");
        assert_eq!(
            merged[0].logo_url.as_deref(),
            Some("https://image.tmdb.org/t/p/original/n.jpg")
        );

        assert!(streaming_providers(None).is_empty());
    }

    #[test]
    fn recommendations_are_capped_and_typed() {
        let page: PaginatedResponse<Recommendation> = serde_json::from_value(serde_json::json!({
            "results": (0..8).map(|i| serde_json::json!({
                "id": i,
                "title": format!("Related {}", i),
                "poster_path": "/r.jpg",
                "media_type": if i == 0 { "tv" } else { "movie" },
            })).collect::<Vec<_>>(),
        }))
        .unwrap();

        let related = related_titles(Some(&page), MediaKind::Film);
        assert_eq!(related.len(), RECOMMENDATION_CAP);
        assert_eq!(related[0].kind, MediaKind::Series);
        assert_eq!(related[1].kind, MediaKind::Film);
        assert_eq!(related[0].title, "Related 0");
    }

    #[test]
    fn series_creators_lead_the_crew() {
        let details: TvShowDetails = serde_json::from_value(serde_json::json!({
            "id": 1396,
            "name": "Breaking Bad",
            "created_by": [{"id": 66633, "name": "Vince Gilligan", "profile_path": "/vg.jpg"}],
            "credits": {
                "cast": [],
                "crew": [
                    {"id": 1, "name": "A", "job": "Director of Photography"},
                    {"id": 2, "name": "B", "job": "Gaffer"},
                ],
            },
        }))
        .unwrap();

        let detail = detailed_from_tv(&details);
        assert_eq!(detail.crew[0].job, "Creator");
        assert_eq!(detail.crew[0].name, "Vince Gilligan");
        assert_eq!(detail.crew[1].job, "Director of Photography");
        assert_eq!(detail.crew.len(), 2);
    }

    #[test]
    fn documentary_series_keeps_its_display_kind() {
        let details: TvShowDetails = serde_json::from_value(serde_json::json!({
            "id": 207,
            "name": "Planet Earth",
            "genres": [{"id": 99, "name": "Documentary"}],
        }))
        .unwrap();

        let detail = detailed_from_tv(&details);
        assert_eq!(detail.summary.kind, MediaKind::Documentary);
    }

    #[test]
    fn anilist_statuses_map_to_display_labels() {
        assert_eq!(
            status_label(MediaKind::Anime, Some("RELEASING")).as_deref(),
            Some("Simulcast")
        );
        assert_eq!(
            status_label(MediaKind::Anime, Some("FINISHED")).as_deref(),
            Some("Completed")
        );
        assert_eq!(
            status_label(MediaKind::Anime, Some("NOT_YET_RELEASED")).as_deref(),
            Some("Upcoming")
        );
        assert_eq!(
            status_label(MediaKind::Anime, Some("CANCELLED")).as_deref(),
            Some("CANCELLED")
        );
    }

    #[test]
    fn financials_absent_when_zero() {
        assert_eq!(financials(0, 0), None);
        assert_eq!(
            financials(1000, 0),
            Some(Financials {
                budget: 1000,
                revenue: 0
            })
        );
    }
}
