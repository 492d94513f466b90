// All prompt templates for the composer.
// Placeholders are `{name}` and are filled in one pass by `fill_template`.

/// Raw material block. Replace: {transcript}, {docs}, {web}
pub const RAW_DATA_TEMPLATE: &str = "
【ヒアリング情報】
{transcript}

【資料情報】
{docs}

【既存Web情報】
{web}
";

/// Meta-prompt sent as the first message part.
/// Replace: {client_name}, {target_audience}, {mode_label}, {focus_instruction}
pub const SYSTEM_PROMPT_TEMPLATE: &str = r#"あなたはプロの「求人サイト構成作家」です。
以下の「雑多な入力データ」を分析し、Google Gemini Canvas（Webサイト生成AI）に入力するための
『最高品質の指示プロンプト』を作成してください。

## 対象クライアント
企業名: {client_name}
ターゲット: {target_audience}
採用モード: {mode_label}

## あなたのタスク
1. 入力データから、上記の「採用モード」に最適な「Hidden Gems（埋もれた魅力）」を発掘・抽出してください。
2. それ以外のノイズ（無関係な情報）は捨ててください。
3. Gemini Canvasに対して、「HTML/Tailwind CSSでサイトを出力せよ」という命令文を構成してください。

## 採用モードごとの指針
{focus_instruction}

## 出力フォーマット（この形式で出力してください）
---
あなたは世界最高峰のWebデザイナー兼コピーライターです。
以下の情報を元に、{target_audience}の心を動かす採用Webサイト（HTMLシングルページ + Tailwind CSS）を作成してください。

### 1. サイトのコンセプト
（ここに、抽出した魅力を元にしたサイトのコンセプトを記載）

### 2. 掲載すべき主要コンテンツ（Context）
（入力データから抽出した、事実・ストーリー・数値を構造化して記載）
- キャッチコピー案: ...
- 必須セクション: ...
- 魅力の根拠: ...

### 3. デザインとトーン＆マナー
（採用モードに基づいた具体的なデザイン指示）
- 配色: ...
- レイアウト: ...
- 雰囲気: ...

### 4. 実装要件
- HTML5, Tailwind CSS (CDN)を使用
- 画像はプレースホルダー (https://placehold.co/...) を使用
- レスポンシブ対応
- 実際にブラウザで動作するコードを出力すること
---
"#;

/// Hint returned alongside a generated prompt.
pub const CANVAS_TIP: &str = "Canvasで出力されたサイトを見ながら、「もっと写真を大きく」「セクションを入れ替えて」と会話で修正してください。";
