use serde::Serialize;

/// One entry of the global section search: everything the page can scroll to.
#[derive(Debug, Clone, Serialize)]
pub struct Section {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

const fn section(id: &'static str, title: &'static str, description: &'static str) -> Section {
    Section { id, title, description }
}

pub const SECTIONS: &[Section] = &[
    section("hero", "Главная", "Знакомство и быстрые ссылки для связи."),
    section("about", "Обо мне", "Биография, миссия и факты о себе."),
    section("mission", "Миссия и ценности", "Ключевые принципы и ориентиры в работе."),
    section("skills", "Навыки и языки", "Категории навыков, уровни владения и текущие изучения."),
    section("projects", "Проекты", "Пет-проекты, коммерческие инициативы и ссылки."),
    section("questions", "Вопросы с собеседований", "Коллекция вопросов с фильтрами и синхронизацией."),
    section("travel", "Путешествия", "Города и страны, которые удалось посетить."),
    section("gallery", "Галерея", "Подборка фотографий и иллюстраций."),
    section("career", "Карьера", "Основные этапы профессионального пути."),
    section("timeline", "Личный таймлайн", "Запоминающиеся события и моменты."),
    section("achievements", "Достижения", "Значимые победы и награды."),
    section("inspiration", "Вдохновение", "Что читаю, смотрю и слушаю сейчас."),
    section("faq", "FAQ", "Ответы на часто задаваемые вопросы."),
    section("now", "Сейчас", "Чем занимаюсь и какие цели ставлю."),
    section("recommended", "Рекомендую", "Курсы, книги и полезные материалы."),
    section("tools", "Рабочие инструменты", "Софт и сервисы для ежедневной работы."),
    section("presets", "Пресеты тем", "Готовые цветовые схемы для сайта."),
    section("microblog", "Дневник", "Короткие заметки и размышления."),
    section("music", "Музыка", "Плейлисты и любимые альбомы."),
    section("coming-soon", "Скоро", "Предстоящие проекты и задумки."),
    section("contact", "Где меня найти", "Социальные сети и способы связи."),
];

/// Plain substring search over "title description"; the empty query lists
/// every section in page order.
pub fn search_sections(query: &str) -> Vec<Section> {
    let trimmed = query.trim().to_lowercase();
    if trimmed.is_empty() {
        return SECTIONS.to_vec();
    }
    SECTIONS
        .iter()
        .filter(|section| {
            format!("{} {}", section.title, section.description)
                .to_lowercase()
                .contains(&trimmed)
        })
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct NavAccent {
    pub from: &'static str,
    pub to: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
    pub accent: NavAccent,
}

const fn nav(href: &'static str, label: &'static str, from: &'static str, to: &'static str) -> NavItem {
    NavItem {
        href,
        label,
        accent: NavAccent { from, to },
    }
}

pub const NAV_ITEMS: &[NavItem] = &[
    nav("#hero", "Главная", "#6366f1", "#8b5cf6"),
    nav("#about", "Обо мне", "#f97316", "#facc15"),
    nav("#mission", "Миссия", "#ec4899", "#f97316"),
    nav("#skills", "Навыки", "#22c55e", "#84cc16"),
    nav("#projects", "Проекты", "#22d3ee", "#0ea5e9"),
    nav("#questions", "Вопросы", "#a855f7", "#6366f1"),
    nav("#timeline", "Таймлайн", "#10b981", "#14b8a6"),
    nav("#contact", "Контакты", "#f43f5e", "#ec4899"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_lists_all_sections() {
        let result = search_sections("   ");
        assert_eq!(result.len(), SECTIONS.len());
        assert_eq!(result[0].id, "hero");
        assert_eq!(result.last().unwrap().id, "contact");
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let result = search_sections("ВОПРОСЫ");
        assert_eq!(result.len(), 2);
        assert!(result.iter().any(|s| s.id == "questions"));
        assert!(result.iter().any(|s| s.id == "faq"));

        assert!(search_sections("нет такого раздела").is_empty());
    }

    #[test]
    fn test_search_covers_descriptions() {
        let result = search_sections("плейлисты");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "music");
    }

    #[test]
    fn test_nav_items_reference_known_sections() {
        for item in NAV_ITEMS {
            let id = item.href.trim_start_matches('#');
            assert!(SECTIONS.iter().any(|section| section.id == id), "{id}");
        }
    }
}
