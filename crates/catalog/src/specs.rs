use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Production details inferred from keyword and overview text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct TechnicalSpecs {
    pub camera: Option<String>,
    pub negative_format: Option<String>,
    pub aspect_ratio: Option<String>,
    pub sound_mix: Vec<String>,
}

impl TechnicalSpecs {
    pub fn is_empty(&self) -> bool {
        self.camera.is_none()
            && self.negative_format.is_none()
            && self.aspect_ratio.is_none()
            && self.sound_mix.is_empty()
    }
}

enum SpecField {
    Camera,
    NegativeFormat,
    SoundMix,
}

/// Substring triggers over lowercased keyword names.
const KEYWORD_SPECS: &[(&str, SpecField)] = &[
    ("imax", SpecField::Camera),
    ("70mm", SpecField::NegativeFormat),
    ("35mm", SpecField::NegativeFormat),
    ("panavision", SpecField::Camera),
    ("arri", SpecField::Camera),
    ("dolby atmos", SpecField::SoundMix),
    ("dts", SpecField::SoundMix),
    ("sdds", SpecField::SoundMix),
];

const ASPECT_RATIOS: &[&str] = &["2.39:1", "1.85:1"];

/// Best-effort spec extraction from keyword names plus the overview.
///
/// Matching is substring based and case-insensitive; the matched keyword
/// itself (uppercased) becomes the spec value. Sound mixes accumulate
/// without duplicates, single-valued fields take the last match.
pub fn extract_technical_specs(keywords: &[String], overview: &str) -> TechnicalSpecs {
    let mut specs = TechnicalSpecs::default();

    for keyword in keywords {
        let name = keyword.to_lowercase();
        for (trigger, field) in KEYWORD_SPECS {
            if !name.contains(trigger) {
                continue;
            }
            let value = name.to_uppercase();
            match field {
                SpecField::Camera => specs.camera = Some(value),
                SpecField::NegativeFormat => specs.negative_format = Some(value),
                SpecField::SoundMix => {
                    if !specs.sound_mix.contains(&value) {
                        specs.sound_mix.push(value);
                    }
                }
            }
        }
    }

    for ratio in ASPECT_RATIOS {
        if overview.contains(ratio) {
            specs.aspect_ratio = Some((*ratio).to_string());
        }
    }

    specs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn keywords_populate_spec_fields() {
        let specs = extract_technical_specs(
            &keywords(&["shot on imax", "70mm film", "dolby atmos"]),
            "",
        );
        assert_eq!(specs.camera.as_deref(), Some("SHOT ON IMAX"));
        assert_eq!(specs.negative_format.as_deref(), Some("70MM FILM"));
        assert_eq!(specs.sound_mix, vec!["DOLBY ATMOS"]);
    }

    #[test]
    fn sound_mixes_accumulate_without_duplicates() {
        let specs = extract_technical_specs(&keywords(&["dts", "sdds", "dts"]), "");
        assert_eq!(specs.sound_mix, vec!["DTS", "SDDS"]);
    }

    #[test]
    fn aspect_ratio_comes_from_overview_text() {
        let specs =
            extract_technical_specs(&[], "Projected in a striking 2.39:1 frame.");
        assert_eq!(specs.aspect_ratio.as_deref(), Some("2.39:1"));
    }

    #[test]
    fn no_triggers_yield_empty_specs() {
        let specs = extract_technical_specs(&keywords(&["time travel", "heist"]), "A caper.");
        assert!(specs.is_empty());
    }
}
