use std::fmt;

/// Supported UI languages. The quizzed language is always Dutch and is not a
/// `Locale`; this only controls labels and the translation overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    En,
    Zh,
}

pub const DEFAULT_LOCALE: Locale = Locale::Zh;

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Zh];

    /// Normalizes an arbitrary locale tag. Unknown tags fall back to the
    /// default locale, never an error.
    pub fn parse(tag: &str) -> Locale {
        match tag.trim().to_ascii_lowercase().as_str() {
            "en" => Locale::En,
            "zh" => Locale::Zh,
            _ => DEFAULT_LOCALE,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Zh => "zh",
        }
    }

    pub fn native_name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Zh => "中文",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Interface labels, one explicit table per label instead of dynamic key
/// lookup so a missing translation cannot compile.
impl Locale {
    pub fn label_flashcard(&self) -> &'static str {
        match self {
            Locale::En => "Flashcard",
            Locale::Zh => "抽认卡",
        }
    }

    pub fn label_check_answer(&self) -> &'static str {
        match self {
            Locale::En => "Check Answer",
            Locale::Zh => "查看答案",
        }
    }

    pub fn label_show_translation(&self) -> &'static str {
        match self {
            Locale::En => "Show Translation",
            Locale::Zh => "显示翻译",
        }
    }

    pub fn label_hide_translation(&self) -> &'static str {
        match self {
            Locale::En => "Hide Translation",
            Locale::Zh => "隐藏翻译",
        }
    }

    pub fn msg_correct(&self) -> &'static str {
        match self {
            Locale::En => "Correct!",
            Locale::Zh => "答对了！",
        }
    }

    pub fn msg_answer_prefix(&self) -> &'static str {
        match self {
            Locale::En => "Answer: ",
            Locale::Zh => "正确答案：",
        }
    }

    pub fn msg_translation_correct(&self) -> &'static str {
        match self {
            Locale::En => "Translation: Correct!",
            Locale::Zh => "翻译：答对了",
        }
    }

    pub fn msg_translation_prefix(&self) -> &'static str {
        match self {
            Locale::En => "Translation: ",
            Locale::Zh => "翻译：",
        }
    }

    pub fn hint_new_question(&self) -> &'static str {
        match self {
            Locale::En => "New question shows every visit",
            Locale::Zh => "新问题每次页面刷新时呈现",
        }
    }

    pub fn label_select(&self) -> &'static str {
        match self {
            Locale::En => "Select",
            Locale::Zh => "选择",
        }
    }

    pub fn label_new_card(&self) -> &'static str {
        match self {
            Locale::En => "New Card",
            Locale::Zh => "换一题",
        }
    }

    pub fn label_menu(&self) -> &'static str {
        match self {
            Locale::En => "Menu",
            Locale::Zh => "菜单",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_supported_locales() {
        assert_eq!(Locale::parse("en"), Locale::En);
        assert_eq!(Locale::parse("zh"), Locale::Zh);
    }

    #[test]
    fn test_parse_is_case_and_whitespace_insensitive() {
        assert_eq!(Locale::parse("EN"), Locale::En);
        assert_eq!(Locale::parse(" zh "), Locale::Zh);
    }

    #[test]
    fn test_parse_unknown_tag_falls_back_to_default() {
        assert_eq!(Locale::parse("fr"), DEFAULT_LOCALE);
        assert_eq!(Locale::parse("nl"), DEFAULT_LOCALE);
        assert_eq!(Locale::parse(""), DEFAULT_LOCALE);
    }

    #[test]
    fn test_as_str_round_trip() {
        for locale in Locale::ALL {
            assert_eq!(Locale::parse(locale.as_str()), locale);
        }
    }

    #[test]
    fn test_labels_differ_per_locale() {
        assert_ne!(
            Locale::En.label_check_answer(),
            Locale::Zh.label_check_answer()
        );
        assert_ne!(Locale::En.msg_correct(), Locale::Zh.msg_correct());
    }
}
