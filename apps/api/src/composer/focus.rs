//! Focus instructions — the per-mode guidance block embedded in the system prompt.
//!
//! The table is built once and never mutated. Every `RecruitingMode` has exactly
//! one entry; a lookup that misses resolves to the CorporateBase block.

use serde::Serialize;

use crate::composer::mode::RecruitingMode;

/// What the model should prioritize, extract and design for under one mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FocusInstruction {
    /// Top-priority viewpoint (最重要視点).
    pub priority: &'static str,
    /// What to pull out of the raw material (抽出方針).
    pub extraction: &'static str,
    /// Layout and tone direction for the site (デザイン指示).
    pub design: &'static str,
}

impl FocusInstruction {
    /// Renders the block as the three bullets embedded under the mode guidance heading.
    pub fn render(&self) -> String {
        format!(
            "- **最重要視点:** {}\n- **抽出方針:** {}\n- **デザイン指示:** {}",
            self.priority, self.extraction, self.design
        )
    }
}

const CORPORATE_BASE_FOCUS: FocusInstruction = FocusInstruction {
    priority: "「創業の想い」「企業の歴史」「ビジョン」「安定性と成長性」。",
    extraction: "創業ストーリー、代表の哲学、福利厚生、全社的な文化をバランスよく抜き出す。",
    design: "コーポレートサイト形式。信頼感、誠実さ、洗練された印象。",
};

const SPECIFIC_PROJECT_FOCUS: FocusInstruction = FocusInstruction {
    priority: "「期間限定」「ミッションの緊急性」「成功時の社会的インパクト」。",
    extraction: "ワクワクする挑戦の要素、プロジェクトの詳細、期限、解決すべき課題を抜き出す。",
    design: "LP形式。映画の予告編のような高揚感。ヒーローセクションを大きく。",
};

const REGIONAL_LOCAL_FOCUS: FocusInstruction = FocusInstruction {
    priority: "「ライフスタイル」「働く環境」「地域コミュニティとの関わり」。",
    extraction: "オフィスの雰囲気、周辺環境、UIターンのメリット、社員の笑顔や人間関係を抜き出す。",
    design: "マガジン形式。写真を多用し、空気感や安心感を伝えるグリッドレイアウト。",
};

const SKILL_TECH_FOCUS: FocusInstruction = FocusInstruction {
    priority: "「技術スタック」「開発環境」「エンジニアリングカルチャー」「裁量権」。",
    extraction: "使用言語、ツール、開発手法、技術的な課題の難易度、キャリアパスを詳細に抜き出す。",
    design: "ドキュメント/スペックシート形式。ダークモード基調、情報の網羅性と検索性を重視。",
};

/// Mode → focus block. Immutable for the life of the process.
pub static FOCUS_INSTRUCTIONS: [(RecruitingMode, FocusInstruction); 4] = [
    (RecruitingMode::CorporateBase, CORPORATE_BASE_FOCUS),
    (RecruitingMode::SpecificProject, SPECIFIC_PROJECT_FOCUS),
    (RecruitingMode::RegionalLocal, REGIONAL_LOCAL_FOCUS),
    (RecruitingMode::SkillTech, SKILL_TECH_FOCUS),
];

/// Returns the focus block for `mode`. Total: a missing entry yields CorporateBase.
pub fn select_focus_instruction(mode: RecruitingMode) -> FocusInstruction {
    FOCUS_INSTRUCTIONS
        .iter()
        .find(|(m, _)| *m == mode)
        .map(|(_, focus)| *focus)
        .unwrap_or(CORPORATE_BASE_FOCUS)
}
