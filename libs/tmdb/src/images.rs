//! URL helpers for the TMDB image CDN.

const IMG_BASE: &str = "https://image.tmdb.org/t/p";

/// Build a poster URL, defaulting to the w500 rendition.
pub fn poster_url(path: Option<&str>) -> Option<String> {
    sized_url(path, "w500")
}

/// Build a backdrop URL in the w1280 rendition.
pub fn backdrop_url(path: Option<&str>) -> Option<String> {
    sized_url(path, "w1280")
}

/// Build a profile photo URL in the w342 rendition.
pub fn profile_url(path: Option<&str>) -> Option<String> {
    sized_url(path, "w342")
}

/// Build a provider logo URL in the original rendition.
pub fn logo_url(path: Option<&str>) -> Option<String> {
    sized_url(path, "original")
}

fn sized_url(path: Option<&str>, size: &str) -> Option<String> {
    path.map(|p| format!("{}/{}{}", IMG_BASE, size, p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_sized_urls() {
        assert_eq!(
            poster_url(Some("/abc.jpg")).as_deref(),
            Some("https://image.tmdb.org/t/p/w500/abc.jpg")
        );
        assert_eq!(
            backdrop_url(Some("/b.jpg")).as_deref(),
            Some("https://image.tmdb.org/t/p/w1280/b.jpg")
        );
    }

    #[test]
    fn missing_path_yields_none() {
        assert_eq!(poster_url(None), None);
        assert_eq!(profile_url(None), None);
    }
}
