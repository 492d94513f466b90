//! Recruiting mode — the four-way focus selector that decides which angle the
//! generated recruiting site leans on.

use serde::{Deserialize, Deserializer, Serialize};

/// Which narrative angle the generated site should emphasize.
///
/// Deserialization never fails: `null`, non-string values and unrecognized
/// strings all become `CorporateBase`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecruitingMode {
    #[default]
    CorporateBase,
    SpecificProject,
    RegionalLocal,
    SkillTech,
}

impl RecruitingMode {
    /// All modes in the order the UI presents them.
    pub const ALL: [RecruitingMode; 4] = [
        RecruitingMode::CorporateBase,
        RecruitingMode::SpecificProject,
        RecruitingMode::RegionalLocal,
        RecruitingMode::SkillTech,
    ];

    /// Stable machine key.
    pub fn key(self) -> &'static str {
        match self {
            RecruitingMode::CorporateBase => "corporate_base",
            RecruitingMode::SpecificProject => "specific_project",
            RecruitingMode::RegionalLocal => "regional_local",
            RecruitingMode::SkillTech => "skill_tech",
        }
    }

    /// Label shown in the radio group and interpolated into the system prompt.
    pub fn label(self) -> &'static str {
        match self {
            RecruitingMode::CorporateBase => "Corporate Base (全社・理念重視)",
            RecruitingMode::SpecificProject => "Specific Project (プロジェクト・ミッション重視)",
            RecruitingMode::RegionalLocal => "Regional/Local (地域・生活重視)",
            RecruitingMode::SkillTech => "Skill/Tech (技術・環境重視)",
        }
    }

    /// Leading English phrase of the label. A selection string containing it picks the mode.
    fn marker(self) -> &'static str {
        match self {
            RecruitingMode::CorporateBase => "Corporate Base",
            RecruitingMode::SpecificProject => "Specific Project",
            RecruitingMode::RegionalLocal => "Regional/Local",
            RecruitingMode::SkillTech => "Skill/Tech",
        }
    }

    /// Parses a selection coming from the UI layer.
    ///
    /// Accepts the machine key, the variant name, or any text containing the
    /// label's marker phrase. Everything else falls back to `CorporateBase`.
    pub fn from_selection(selection: &str) -> Self {
        const PRECEDENCE: [RecruitingMode; 4] = [
            RecruitingMode::SpecificProject,
            RecruitingMode::RegionalLocal,
            RecruitingMode::SkillTech,
            RecruitingMode::CorporateBase,
        ];

        let trimmed = selection.trim();
        PRECEDENCE
            .into_iter()
            .find(|mode| {
                trimmed.eq_ignore_ascii_case(mode.key())
                    || trimmed.eq_ignore_ascii_case(&format!("{mode:?}"))
                    || trimmed.contains(mode.marker())
            })
            .unwrap_or_default()
    }
}

impl<'de> Deserialize<'de> for RecruitingMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<serde_json::Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(serde_json::Value::String(selection)) => Self::from_selection(&selection),
            _ => Self::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_corporate_base() {
        assert_eq!(RecruitingMode::default(), RecruitingMode::CorporateBase);
    }

    #[test]
    fn test_full_labels_round_trip_through_selection() {
        for mode in RecruitingMode::ALL {
            assert_eq!(RecruitingMode::from_selection(mode.label()), mode);
        }
    }

    #[test]
    fn test_machine_keys_and_variant_names_parse() {
        assert_eq!(
            RecruitingMode::from_selection("skill_tech"),
            RecruitingMode::SkillTech
        );
        assert_eq!(
            RecruitingMode::from_selection("RegionalLocal"),
            RecruitingMode::RegionalLocal
        );
        assert_eq!(
            RecruitingMode::from_selection(" SPECIFIC_PROJECT "),
            RecruitingMode::SpecificProject
        );
    }

    #[test]
    fn test_marker_phrase_anywhere_in_selection() {
        assert_eq!(
            RecruitingMode::from_selection("mode: Specific Project"),
            RecruitingMode::SpecificProject
        );
    }

    #[test]
    fn test_unknown_selection_falls_back_to_corporate_base() {
        assert_eq!(
            RecruitingMode::from_selection("Hybrid (なんでも)"),
            RecruitingMode::CorporateBase
        );
        assert_eq!(RecruitingMode::from_selection(""), RecruitingMode::CorporateBase);
    }

    #[test]
    fn test_serde_accepts_unknown_values() {
        let mode: RecruitingMode = serde_json::from_str(r#""galaxy_brain""#).unwrap();
        assert_eq!(mode, RecruitingMode::CorporateBase);
        let mode: RecruitingMode = serde_json::from_str(r#""regional_local""#).unwrap();
        assert_eq!(mode, RecruitingMode::RegionalLocal);
    }

    #[test]
    fn test_serde_null_and_non_string_fall_back() {
        for raw in ["null", "3", "true", r#"{"mode":"skill_tech"}"#, r#"["skill_tech"]"#] {
            let mode: RecruitingMode = serde_json::from_str(raw).unwrap();
            assert_eq!(mode, RecruitingMode::CorporateBase, "input {raw}");
        }
    }

    #[test]
    fn test_serializes_as_machine_key() {
        let json = serde_json::to_string(&RecruitingMode::SkillTech).unwrap();
        assert_eq!(json, r#""skill_tech""#);
    }
}
