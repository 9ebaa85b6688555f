//! Static string tables keyed by `section.key`, one column per [`Language`]
//! in [`Language::ALL`] order.
//!
//! Lookups fall back to English and then to the key itself, so a missing
//! entry shows up on screen instead of rendering blank.

use crate::preferences::Language;

type Row = [&'static str; 6];
type ListRow = [&'static [&'static str]; 6];

fn row(key: &str) -> Option<Row> {
    let row = match key {
        "page1.hero" => ["EXPOSED", "در معرض خطر", "暴露", "ПОД УГРОЗОЙ", "ПІД ЗАГРОЗОЮ", "असुरक्षित"],
        "page1.ctaButton" => [
            "1 GB Completely Free",
            "۱ گیگابایت کاملا رایگان",
            "1 GB 完全免费",
            "1 ГБ Совершенно Бесплатно",
            "1 ГБ Цілком Безкоштовно",
            "1 जीबी पूरी तरह मुफ़्त",
        ],
        "page2.hero" => ["YOUR DATA", "اطلاعات شما", "你的数据", "ВАШИ ДАННЫЕ", "ВАШІ ДАНІ", "आपका डेटा"],
        "page2.entities.police" => ["Police", "پلیس", "警察", "Полиция", "Поліція", "पुलिस"],
        "page2.entities.hacker" => ["Hacker", "هکر", "黑客", "Хакер", "Хакер", "हैकर"],
        "page2.entities.isp" => ["ISP", "ISP", "ISP", "ISP", "ISP", "ISP"],
        "page2.ctaButton" => [
            "Secure Your Data",
            "اطلاعات خود را ایمن کنید",
            "保护您的数据",
            "Защитите Ваши Данные",
            "Захистіть Ваші Дані",
            "अपने डेटा को सुरक्षित करें",
        ],
        "header.blog" => ["Blog", "بلاگ", "博客", "Блог", "Блог", "ब्लॉग"],
        "header.faq" => ["FAQ", "سوالات متداول", "常见问题", "FAQ", "FAQ", "FAQ"],
        "header.privacy" => [
            "Privacy",
            "حریم خصوصی",
            "隐私",
            "Конфиденциальность",
            "Конфіденційність",
            "गोपनीयता",
        ],
        "header.about" => ["About Us", "درباره ما", "关于我们", "О нас", "Про нас", "हमारे बारे में"],
        "header.login" => ["Login", "ورود", "登录", "Войти", "Увійти", "लॉगिन"],
        "header.theme" => ["Theme", "تم", "主题", "Тема", "Тема", "थीम"],
        "header.language" => ["Language", "زبان", "语言", "Язык", "Мова", "भाषा"],
        "footer.privacyPolicy" => [
            "Privacy Policy",
            "سیاست حریم خصوصی",
            "隐私政策",
            "Политика конфиденциальности",
            "Політика конфіденційності",
            "गोपनीयता नीति",
        ],
        "page7.hero" => ["FREE!", "رایگان!", "免费！", "БЕСПЛАТНО!", "БЕЗКОШТОВНО!", "मुफ़्त!"],
        "page7.freeTrialTitle" => [
            "Start Your Free Trial Today!",
            "امروز آزمایش رایگان خود را شروع کنید!",
            "立即开始免费试用！",
            "Начните бесплатную пробную версию сегодня!",
            "Почніть безкоштовну пробну версію сьогодні!",
            "आज ही अपना मुफ़्त परीक्षण शुरू करें!",
        ],
        "page7.noCreditCard" => [
            "NO Credit Card",
            "بدون کارت اعتباری",
            "无需信用卡",
            "БЕЗ кредитной карты",
            "БЕЗ кредитної картки",
            "कोई क्रेडिट कार्ड नहीं",
        ],
        "page7.getStarted" => ["Get Started", "شروع کنید", "开始使用", "Начать", "Почати", "शुरू करें"],
        "scroll.scroll" => ["Scroll", "اسکرول", "滚动", "Прокрутить", "Прокрутити", "स्क्रॉल करें"],
        "scroll.swipe" => ["Swipe", "بکشید", "滑动", "Свайп", "Свайп", "स्वाइप करें"],
        "pageNames.page1" => ["Dangers", "خطرات", "危险", "Опасности", "Небезпеки", "खतरे"],
        "pageNames.page2" => ["Tracked", "ردیابی", "被追踪", "Отслеживается", "Відстежується", "ट्रैक किया गया"],
        "pageNames.page3" => ["Restrictions", "محدودیت‌ها", "限制", "Ограничения", "Обмеження", "प्रतिबंध"],
        "pageNames.page4" => ["Solution", "راه حل", "解决方案", "Решение", "Рішення", "समाधान"],
        "pageNames.page5" => ["Security", "امنیت", "安全", "Безопасность", "Безпека", "सुरक्षा"],
        "pageNames.page6" => ["Technologies", "فناوری‌ها", "技术", "Технологии", "Технології", "प्रौद्योगिकी"],
        "pageNames.page7" => ["Freedom", "آزادی", "自由", "Свобода", "Свобода", "स्वतंत्रता"],
        _ => return None,
    };
    Some(row)
}

fn list_row(key: &str) -> Option<ListRow> {
    let row: ListRow = match key {
        "page1.threats" => [
            &["HACKED", "STOLEN", "LEAKED", "ATTACKED", "VULNERABLE"],
            &["هک شده", "دزدیده شده", "نشت داده", "حمله شده", "آسیب‌پذیر"],
            &["被黑", "被盗", "泄露", "攻击", "脆弱"],
            &["ВЗЛОМАН", "УКРАДЕНО", "УТЕЧКА", "АТАКОВАН", "УЯЗВИМ"],
            &["ЗЛОМ", "ВКРАДЕНО", "ВИТІК", "АТАКА", "ВРАЗЛИВИЙ"],
            &["हैक किया", "चोरी", "लीक", "हमला", "कमजोर"],
        ],
        "page2.surveillance" => [
            &["WATCHING", "TRACKING", "RECORDING", "MONITORING", "LOGGING"],
            &["نظارت", "ردیابی", "ضبط", "مانیتور", "ثبت"],
            &["监视", "追踪", "记录", "监控", "日志"],
            &["НАБЛЮДЕНИЕ", "ОТСЛЕЖИВАНИЕ", "ЗАПИСЬ", "МОНИТОРИНГ", "ЛОГИРОВАНИЕ"],
            &["СПОСТЕРЕЖЕННЯ", "ВІДСТЕЖЕННЯ", "ЗАПИС", "МОНІТОРИНГ", "ЛОГУВАННЯ"],
            &["निगरानी", "ट्रैकिंग", "रिकॉर्डिंग", "मॉनिटरिंग", "लॉगिंग"],
        ],
        _ => return None,
    };
    Some(row)
}

/// Translated string for `key`, falling back to English, then to `key`.
pub fn translate(key: &str, language: Language) -> &str {
    match row(key) {
        Some(row) => {
            let value = row[language.index()];
            if value.is_empty() {
                row[Language::English.index()]
            } else {
                value
            }
        }
        None => key,
    }
}

/// Translated word list for `key`; empty when the key is unknown.
pub fn translate_list(key: &str, language: Language) -> &'static [&'static str] {
    match list_row(key) {
        Some(row) => {
            let value = row[language.index()];
            if value.is_empty() {
                row[Language::English.index()]
            } else {
                value
            }
        }
        None => &[],
    }
}

/// Indicator label for a slide, e.g. "Dangers" for page 1.
pub fn page_name(page: u8, language: Language) -> String {
    let key = format!("pageNames.page{}", page);
    translate(&key, language).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looks_up_each_language() {
        assert_eq!(translate("header.login", Language::English), "Login");
        assert_eq!(translate("header.login", Language::Russian), "Войти");
        assert_eq!(translate("scroll.swipe", Language::Chinese), "滑动");
    }

    #[test]
    fn unknown_key_falls_back_to_itself() {
        assert_eq!(translate("header.nope", Language::Hindi), "header.nope");
        assert!(translate_list("page9.words", Language::Farsi).is_empty());
    }

    #[test]
    fn every_row_is_complete() {
        let keys = [
            "page1.hero",
            "page1.ctaButton",
            "page2.hero",
            "page2.ctaButton",
            "header.blog",
            "header.faq",
            "header.privacy",
            "header.about",
            "header.login",
            "header.theme",
            "header.language",
            "footer.privacyPolicy",
            "page7.hero",
            "page7.freeTrialTitle",
            "page7.noCreditCard",
            "page7.getStarted",
            "scroll.scroll",
            "scroll.swipe",
        ];
        for key in keys {
            for lang in Language::ALL {
                assert_ne!(translate(key, lang), key, "{} missing for {}", key, lang);
            }
        }
    }

    #[test]
    fn lists_have_five_words_everywhere() {
        for key in ["page1.threats", "page2.surveillance"] {
            for lang in Language::ALL {
                assert_eq!(translate_list(key, lang).len(), 5, "{} for {}", key, lang);
            }
        }
    }

    #[test]
    fn every_page_has_a_name() {
        for page in 1..=7 {
            for lang in Language::ALL {
                assert!(!page_name(page, lang).starts_with("pageNames."));
            }
        }
        assert_eq!(page_name(7, Language::English), "Freedom");
    }
}
