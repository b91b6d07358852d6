use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum TriviaCategory {
    Production,
    Casting,
    EasterEgg,
    General,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct TriviaItem {
    pub id: String,
    pub text: String,
    pub category: TriviaCategory,
}

/// Assign a category from keyword matches in the trivia text.
pub fn categorize_trivia(text: &str) -> TriviaCategory {
    let lower = text.to_lowercase();
    if lower.contains("easter egg") || lower.contains("reference") {
        TriviaCategory::EasterEgg
    } else if lower.contains("original") || lower.contains("budget") {
        TriviaCategory::Production
    } else if lower.contains("cameo") || lower.contains("cast") {
        TriviaCategory::Casting
    } else {
        TriviaCategory::General
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categorizes_by_keyword() {
        assert_eq!(
            categorize_trivia("A subtle easter egg for fans"),
            TriviaCategory::EasterEgg
        );
        assert_eq!(
            categorize_trivia("The original budget was doubled"),
            TriviaCategory::Production
        );
        assert_eq!(
            categorize_trivia("An uncredited cameo by the director"),
            TriviaCategory::Casting
        );
        assert_eq!(
            categorize_trivia("Filmed over three summers"),
            TriviaCategory::General
        );
    }
}
