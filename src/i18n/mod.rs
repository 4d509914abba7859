//! i18n - Internationalization Module
//!
//! Component strings (placeholders, accessible labels) in English and
//! Simplified Chinese, looked up from a static table.

use std::collections::HashMap;
use std::sync::OnceLock;

use gpui::SharedString;
use serde::{Deserialize, Serialize};

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    /// English (US)
    #[default]
    #[serde(rename = "en-US", alias = "en")]
    EnUS,
    /// Chinese (Simplified)
    #[serde(rename = "zh-CN", alias = "zh")]
    ZhCN,
}

impl Locale {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::EnUS => "English",
            Locale::ZhCN => "中文",
        }
    }

    /// Map a language tag such as `zh-CN` or `en_US.UTF-8`
    pub fn from_tag(tag: &str) -> Self {
        let lang = tag
            .split(['-', '_', '.'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match lang.as_str() {
            "zh" => Locale::ZhCN,
            _ => Locale::EnUS,
        }
    }

    /// Locale of the current user session
    pub fn detect() -> Self {
        Self::from_tag(&locale_config::Locale::current().to_string())
    }
}

/// Translation resources
static TRANSLATIONS: OnceLock<HashMap<&'static str, (&'static str, &'static str)>> = OnceLock::new();

/// Initialize translations (key -> (en, zh))
fn init_translations() -> HashMap<&'static str, (&'static str, &'static str)> {
    let mut map = HashMap::new();

    // Gallery
    map.insert("app-title", ("Component Library Demo", "组件库演示"));
    map.insert("gallery-inputs", ("InputField Component", "输入框组件"));
    map.insert("gallery-table", ("DataTable Component", "数据表格组件"));
    map.insert("gallery-selected", ("Selected: {count}", "已选择: {count}"));

    // Table
    map.insert("table-loading", ("Loading...", "加载中..."));
    map.insert("table-no-data", ("No data available", "暂无数据"));
    map.insert("table-select-all", ("Select all rows", "选择所有行"));
    map.insert("table-select-row", ("Select row {index}", "选择第 {index} 行"));

    // Input
    map.insert("input-clear", ("Clear input", "清除输入"));
    map.insert("input-show-password", ("Show password", "显示密码"));
    map.insert("input-hide-password", ("Hide password", "隐藏密码"));

    map
}

/// Get translations
fn translations() -> &'static HashMap<&'static str, (&'static str, &'static str)> {
    TRANSLATIONS.get_or_init(init_translations)
}

/// Translate a key
pub fn t(locale: Locale, key: &str) -> SharedString {
    if let Some(&(en, zh)) = translations().get(key) {
        match locale {
            Locale::EnUS => SharedString::from(en),
            Locale::ZhCN => SharedString::from(zh),
        }
    } else {
        // Fallback: return the key itself
        SharedString::from(key.to_string())
    }
}

/// Translate a key and fill `{name}` placeholders
pub fn t_format(locale: Locale, key: &str, args: &[(&str, &str)]) -> SharedString {
    let mut result = t(locale, key).to_string();
    for (name, value) in args {
        result = result.replace(&format!("{{{name}}}"), value);
    }
    result.into()
}
