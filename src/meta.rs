use crate::locale::Locale;

pub const SITE_BASE_URL: &str = "https://openknm.org";

/// Routes of the companion site. The trainer itself only renders titles and
/// descriptions, but the full per-locale metadata set is kept here as the
/// single source for SEO tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Speaking,
}

pub struct PageMeta {
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
}

impl Page {
    pub const ALL: [Page; 2] = [Page::Home, Page::Speaking];

    fn path_segment(&self) -> &'static str {
        match self {
            Page::Home => "",
            Page::Speaking => "/speaking",
        }
    }
}

pub fn page_meta(page: Page, locale: Locale) -> &'static PageMeta {
    match (page, locale) {
        (Page::Home, Locale::En) => &PageMeta {
            title: "KNM Exam Prep & Flashcards | Open KNM",
            description: "Free preparation for the Dutch Inburgering KNM exam: \
                 bilingual study articles and a random flashcard quiz with \
                 Chinese and English translations.",
            keywords: &[
                "KNM exam",
                "Inburgering exam",
                "Dutch civic integration",
                "KNM flashcards",
                "KNM practice questions",
                "learn Dutch society",
            ],
        },
        (Page::Home, Locale::Zh) => &PageMeta {
            title: "KNM 考试准备与抽认卡 | Open KNM",
            description: "免费准备荷兰融入考试 KNM：双语学习文章和带中英文翻译的随机抽认卡测验。",
            keywords: &[
                "KNM 考试",
                "荷兰融入考试",
                "Inburgering",
                "KNM 抽认卡",
                "KNM 练习题",
                "荷兰社会知识",
            ],
        },
        (Page::Speaking, Locale::En) => &PageMeta {
            title: "A2 Speaking Practice & Mock Exam | Open KNM",
            description: "Interactive Dutch A2 speaking practice with speech \
                 recognition. Mock exam questions for Inburgering Part 1 (Q&A) \
                 and Part 2 (Picture Description).",
            keywords: &[
                "Dutch speaking practice",
                "Inburgering exam A2",
                "Dutch speaking exam",
                "speaking mock test",
                "Inburgering part 1",
                "Inburgering part 2",
            ],
        },
        (Page::Speaking, Locale::Zh) => &PageMeta {
            title: "A2 口语模拟练习 (带语音识别) | Open KNM",
            description: "融入考试口语全真模拟。包含第一部分（问答）与第二部分（看图说话），\
                 助你自信通过荷兰语 A2 口语考试。",
            keywords: &[
                "荷兰语口语练习",
                "融入考试口语",
                "Inburgering A2 口语",
                "荷兰语口语模拟",
                "荷兰语看图说话",
            ],
        },
    }
}

pub fn absolute_url(path: &str) -> String {
    format!("{SITE_BASE_URL}{path}")
}

/// Canonical URL for a page in a given locale, `/{locale}{path}`.
pub fn canonical_url(page: Page, locale: Locale) -> String {
    absolute_url(&format!("/{}{}", locale.as_str(), page.path_segment()))
}

/// Alternate-language URL set for a page, one entry per supported locale.
pub fn alternate_urls(page: Page) -> Vec<(Locale, String)> {
    Locale::ALL
        .iter()
        .map(|&locale| (locale, canonical_url(page, locale)))
        .collect()
}
