//! 国际化（i18n）模块
//!
//! 使用纯 Rust 结构体方案，编译期类型检查，零运行时开销。
//! 语言在启动时由配置决定，运行中不切换。

use std::sync::atomic::{AtomicUsize, Ordering};

mod en_us;
pub mod keys;
mod ru_ru;

pub use keys::*;

/// 支持的语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// 英语（美国）
    #[default]
    EnUs,
    /// 俄语（俄罗斯）
    RuRu,
}

impl Language {
    /// 获取语言代码（BCP 47 标准）
    pub fn code(self) -> &'static str {
        match self {
            Language::EnUs => "en-US",
            Language::RuRu => "ru-RU",
        }
    }

    /// 从语言代码解析
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "en-US" | "en" => Some(Language::EnUs),
            "ru-RU" | "ru" => Some(Language::RuRu),
            _ => None,
        }
    }

    fn index(self) -> usize {
        match self {
            Language::EnUs => 0,
            Language::RuRu => 1,
        }
    }
}

/// 当前语言索引（0 = EnUs）
static CURRENT_LANGUAGE: AtomicUsize = AtomicUsize::new(0);

/// 获取当前语言的翻译
pub fn t() -> &'static Translations {
    match CURRENT_LANGUAGE.load(Ordering::Relaxed) {
        1 => &ru_ru::TRANSLATIONS,
        _ => &en_us::TRANSLATIONS,
    }
}

/// 设置当前语言
pub fn set_language(lang: Language) {
    CURRENT_LANGUAGE.store(lang.index(), Ordering::Relaxed);
}

/// 获取当前语言
pub fn current_language() -> Language {
    match CURRENT_LANGUAGE.load(Ordering::Relaxed) {
        1 => Language::RuRu,
        _ => Language::EnUs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_codes_round_trip() {
        for lang in [Language::EnUs, Language::RuRu] {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Language::from_code("ru"), Some(Language::RuRu));
        assert_eq!(Language::from_code("zz"), None);
    }

    #[test]
    fn russian_table_uses_console_labels() {
        assert_eq!(ru_ru::TRANSLATIONS.common.no_data, "Нет данных для отображения");
        assert_eq!(ru_ru::TRANSLATIONS.accounts.delete_title, "Удалить аккаунт?");
        assert_eq!(en_us::TRANSLATIONS.common.no_data, "No data to display");
    }
}
