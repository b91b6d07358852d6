use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Predicted location of a screenplay on a known archive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ScriptLink {
    pub source: String,
    pub url: String,
    /// Predictions are never verified against the archive, so this is
    /// always `false` until a confirmation pass exists.
    pub is_confirmed: bool,
}

/// Predict screenplay URLs for a title across the known script archives.
///
/// Each archive has its own slug convention: IMSDB keeps the original
/// casing with dashes for whitespace, ScriptSlug lowercases with dashes,
/// DailyScript lowercases with underscores.
pub fn predict_script_links(title: &str) -> Vec<ScriptLink> {
    vec![
        ScriptLink {
            source: "IMSDB".to_string(),
            url: format!("https://imsdb.com/scripts/{}.html", dash_join(title)),
            is_confirmed: false,
        },
        ScriptLink {
            source: "ScriptSlug".to_string(),
            url: format!("https://www.scriptslug.com/script/{}", slug(title, '-')),
            is_confirmed: false,
        },
        ScriptLink {
            source: "DailyScript".to_string(),
            url: format!(
                "https://www.dailyscript.com/scripts/{}.html",
                slug(title, '_')
            ),
            is_confirmed: false,
        },
    ]
}

/// Replace whitespace runs with dashes, keeping case and punctuation.
fn dash_join(title: &str) -> String {
    title.split_whitespace().collect::<Vec<_>>().join("-")
}

/// Lowercase, collapse every non-alphanumeric run into one `separator`,
/// trim leading and trailing separators.
fn slug(title: &str, separator: char) -> String {
    let mut out = String::with_capacity(title.len());
    let mut pending_separator = false;
    for ch in title.chars().flat_map(|c| c.to_lowercase()) {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !out.is_empty() {
                out.push(separator);
            }
            pending_separator = false;
            out.push(ch);
        } else {
            pending_separator = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_archives_are_predicted() {
        let links = predict_script_links("Blade Runner");
        assert_eq!(links.len(), 3);
        assert_eq!(
            links[0].url,
            "https://imsdb.com/scripts/Blade-Runner.html"
        );
        assert_eq!(
            links[1].url,
            "https://www.scriptslug.com/script/blade-runner"
        );
        assert_eq!(
            links[2].url,
            "https://www.dailyscript.com/scripts/blade_runner.html"
        );
        assert!(links.iter().all(|link| !link.is_confirmed));
    }

    #[test]
    fn punctuation_collapses_into_one_separator() {
        assert_eq!(slug("2001: A Space Odyssey", '-'), "2001-a-space-odyssey");
        assert_eq!(slug("WALL-E", '_'), "wall_e");
    }

    #[test]
    fn leading_and_trailing_separators_are_trimmed() {
        assert_eq!(slug("...Rec", '-'), "rec");
        assert_eq!(slug("Akira!", '_'), "akira");
    }
}
