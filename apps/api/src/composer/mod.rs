// Prompt Composer: turns the UI's free-text material and mode selection into
// the (system_prompt, raw_data) pair sent to the model provider.
// Pure string work: no I/O, no logging, no provider access.

pub mod focus;
pub mod mode;
pub mod prompts;

use serde::{Deserialize, Serialize};

use crate::composer::focus::{select_focus_instruction, FocusInstruction};
use crate::composer::mode::RecruitingMode;
use crate::composer::prompts::{RAW_DATA_TEMPLATE, SYSTEM_PROMPT_TEMPLATE};

/// Free-text material and client metadata collected by the UI layer.
/// Any field may be empty; missing fields deserialize as empty strings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct InputBundle {
    pub client_name: String,
    pub target_audience: String,
    /// Hearing / interview transcript.
    pub transcript: String,
    /// Text lifted from company documents and slides.
    pub docs: String,
    /// Text from the client's current website.
    pub web: String,
}

impl InputBundle {
    /// True when transcript, docs and web are all empty or whitespace.
    pub fn has_no_material(&self) -> bool {
        [&self.transcript, &self.docs, &self.web]
            .iter()
            .all(|s| s.trim().is_empty())
    }
}

/// The two message parts handed to the provider, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComposedPrompt {
    pub system_prompt: String,
    pub raw_data: String,
}

/// Concatenates the three material sections under fixed headers.
/// Text is inserted verbatim: no trimming, truncation or escaping.
pub fn compose_raw_data(transcript: &str, docs: &str, web: &str) -> String {
    fill_template(
        RAW_DATA_TEMPLATE,
        &[("transcript", transcript), ("docs", docs), ("web", web)],
    )
}

/// Fills the meta-prompt with client metadata, the mode label and the focus block.
pub fn compose_system_prompt(
    client_name: &str,
    target_audience: &str,
    mode: RecruitingMode,
    focus: &FocusInstruction,
) -> String {
    let focus_block = focus.render();
    fill_template(
        SYSTEM_PROMPT_TEMPLATE,
        &[
            ("client_name", client_name),
            ("target_audience", target_audience),
            ("mode_label", mode.label()),
            ("focus_instruction", &focus_block),
        ],
    )
}

/// Runs focus lookup, system prompt and raw data composition for one request.
pub fn compose(bundle: &InputBundle, mode: RecruitingMode) -> ComposedPrompt {
    let focus = select_focus_instruction(mode);
    ComposedPrompt {
        system_prompt: compose_system_prompt(
            &bundle.client_name,
            &bundle.target_audience,
            mode,
            &focus,
        ),
        raw_data: compose_raw_data(&bundle.transcript, &bundle.docs, &bundle.web),
    }
}

/// Replaces `{key}` placeholders in a single left-to-right pass.
///
/// Substituted values are never re-scanned, so user text containing `{...}`
/// lands in the output literally. Unknown placeholders are left as-is.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let extra: usize = values.iter().map(|(_, v)| v.len()).sum();
    let mut out = String::with_capacity(template.len() + extra);
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let hit = after.find('}').and_then(|end| {
            values
                .iter()
                .find(|(key, _)| *key == &after[..end])
                .map(|(_, value)| (end, *value))
        });
        match hit {
            Some((end, value)) => {
                out.push_str(value);
                rest = &after[end + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundle() -> InputBundle {
        InputBundle {
            client_name: "株式会社コスモテック".to_string(),
            target_audience: "30代の組み込みエンジニア、Uターン希望者".to_string(),
            transcript: "社長: 来年の打ち上げに向けて人が足りない".to_string(),
            docs: "会社案内 2024".to_string(),
            web: "沿革: 1998年創業".to_string(),
        }
    }

    #[test]
    fn test_raw_data_with_empty_inputs_keeps_headers() {
        let raw = compose_raw_data("", "", "");
        assert!(!raw.is_empty());
        assert!(raw.contains("【ヒアリング情報】"));
        assert!(raw.contains("【資料情報】"));
        assert!(raw.contains("【既存Web情報】"));
    }

    #[test]
    fn test_raw_data_sections_in_fixed_order() {
        let raw = compose_raw_data("T-TEXT", "D-TEXT", "W-TEXT");
        let t = raw.find("T-TEXT").unwrap();
        let d = raw.find("D-TEXT").unwrap();
        let w = raw.find("W-TEXT").unwrap();
        assert!(raw.find("【ヒアリング情報】").unwrap() < t);
        assert!(t < raw.find("【資料情報】").unwrap());
        assert!(d < raw.find("【既存Web情報】").unwrap());
        assert!(t < d && d < w);
    }

    #[test]
    fn test_raw_data_is_verbatim() {
        let messy = "  <b>{docs}</b> & \"quotes\"\n\n";
        let raw = compose_raw_data(messy, "", "");
        assert!(raw.contains(messy));
        assert_eq!(raw, compose_raw_data(messy, "", ""));
    }

    #[test]
    fn test_system_prompt_contains_client_metadata() {
        let b = bundle();
        let prompt = compose(&b, RecruitingMode::CorporateBase).system_prompt;
        assert!(prompt.contains("企業名: 株式会社コスモテック"));
        assert!(prompt.contains("ターゲット: 30代の組み込みエンジニア、Uターン希望者"));
        assert!(prompt.contains("採用モード: Corporate Base (全社・理念重視)"));
        // target audience also appears in the required output format
        assert!(prompt.contains("30代の組み込みエンジニア、Uターン希望者の心を動かす"));
    }

    #[test]
    fn test_specific_project_excludes_other_focus_blocks() {
        let prompt = compose(&bundle(), RecruitingMode::SpecificProject).system_prompt;
        let project = select_focus_instruction(RecruitingMode::SpecificProject).render();
        let tech = select_focus_instruction(RecruitingMode::SkillTech).render();
        let regional = select_focus_instruction(RecruitingMode::RegionalLocal).render();
        assert!(prompt.contains(&project));
        assert!(!prompt.contains(&tech));
        assert!(!prompt.contains(&regional));
    }

    #[test]
    fn test_system_prompt_keeps_output_format() {
        let prompt = compose(&InputBundle::default(), RecruitingMode::SkillTech).system_prompt;
        for heading in [
            "### 1. サイトのコンセプト",
            "### 2. 掲載すべき主要コンテンツ（Context）",
            "### 3. デザインとトーン＆マナー",
            "### 4. 実装要件",
        ] {
            assert!(prompt.contains(heading), "missing {heading}");
        }
        assert!(!prompt.contains("{focus_instruction}"));
        assert!(!prompt.contains("{target_audience}"));
    }

    #[test]
    fn test_placeholder_like_values_are_not_expanded() {
        let prompt = compose_system_prompt(
            "{target_audience}",
            "engineers",
            RecruitingMode::CorporateBase,
            &select_focus_instruction(RecruitingMode::CorporateBase),
        );
        assert!(prompt.contains("企業名: {target_audience}"));
    }

    #[test]
    fn test_fill_template_leaves_unknown_and_unclosed_braces() {
        assert_eq!(
            fill_template("a {x} {y} {z", &[("x", "1")]),
            "a 1 {y} {z"
        );
    }

    #[test]
    fn test_has_no_material_ignores_metadata() {
        let mut b = InputBundle {
            client_name: "Acme".to_string(),
            target_audience: "SRE".to_string(),
            transcript: "  \n\t".to_string(),
            ..Default::default()
        };
        assert!(b.has_no_material());
        b.web = "https://acme.example".to_string();
        assert!(!b.has_no_material());
    }
}
