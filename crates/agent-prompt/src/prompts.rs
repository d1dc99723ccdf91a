//! Built-in prompt templates

use crate::{JinjaTemplate, Result};

/// Name of the report translation template
pub const TRANSLATION_PROMPT: &str = "translation";

const TRANSLATION_ZH_TW: &str = r#"請將以下金融分析報告翻譯成{{ target_language }}。

要求：
1. 保持專業術語的準確性
2. 保持原文的段落和格式結構（包括 Markdown 標題、列表、表格與粗體標記）
3. 保持數字、百分比、日期、股票代碼不變
4. 保持專業性和可讀性
5. 只輸出翻譯結果，不要添加任何說明或前綴

原文：
{{ text }}

翻譯："#;

const TRANSLATION_ZH_CN: &str = r#"请将以下金融分析报告翻译成{{ target_language }}。

要求：
1. 保持专业术语的准确性
2. 保持原文的段落和格式结构（包括 Markdown 标题、列表、表格与粗体标记）
3. 保持数字、百分比、日期、股票代码不变
4. 保持专业性和可读性
5. 只输出翻译结果，不要添加任何说明或前缀

原文：
{{ text }}

翻译："#;

const TRANSLATION_EN: &str = r#"Translate the following financial analysis report into {{ target_language }}.

Requirements:
1. Keep financial terminology accurate
2. Keep the paragraph and formatting structure (Markdown headings, lists, tables and bold markers)
3. Leave numbers, percentages, dates and ticker symbols unchanged
4. Keep the tone professional and readable
5. Output only the translation, without any explanation or prefix

Original:
{{ text }}

Translation:"#;

/// Translation prompt, one variant per target language
///
/// Variables: `target_language` (see [`crate::Language::translation_target`])
/// and `text`.
pub fn translation_prompt() -> Result<JinjaTemplate> {
    JinjaTemplate::builder(TRANSLATION_PROMPT)
        .traditional_chinese(TRANSLATION_ZH_TW)
        .simplified_chinese(TRANSLATION_ZH_CN)
        .english(TRANSLATION_EN)
        .build()
}
