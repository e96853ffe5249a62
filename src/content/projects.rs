use chrono::Utc;
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::model::ensure_tags;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectLinkType {
    Github,
    Demo,
    Docs,
    Article,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectLink {
    pub label: String,
    pub href: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub link_type: Option<ProjectLinkType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub last_updated: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<ProjectLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_placeholder: bool,
}

fn project(
    id: &str,
    title: &str,
    description: &str,
    tags: &[&str],
    last_updated: &str,
) -> Project {
    Project {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        last_updated: last_updated.to_string(),
        link: None,
        note: None,
        is_placeholder: false,
    }
}

fn link(label: &str, href: &str, link_type: ProjectLinkType) -> Option<ProjectLink> {
    Some(ProjectLink {
        label: label.to_string(),
        href: href.to_string(),
        link_type: Some(link_type),
    })
}

pub fn base_projects() -> Vec<Project> {
    vec![
        Project {
            link: link(
                "GitHub",
                "https://github.com/almirus/observability-starter",
                ProjectLinkType::Github,
            ),
            ..project(
                "observability-starter",
                "Observability Starter Kit",
                "Набор шаблонов и Terraform-модулей, который ускоряет запуск наблюдаемости: прометеевские метрики, трассировки и алерты по SLO из коробки.",
                &["Go", "OpenTelemetry", "Terraform", "Grafana"],
                "2024-05-12",
            )
        },
        Project {
            link: link("Live demo", "https://incidents.almir.dev", ProjectLinkType::Demo),
            ..project(
                "incident-hub",
                "Incident Retrospective Hub",
                "Веб-приложение для проведения постмортемов: шаблоны, анализ цепочек событий и выгрузка отчёта в Confluence или Notion одним кликом.",
                &["Next.js", "PostgreSQL", "Product Ops"],
                "2024-03-28",
            )
        },
        Project {
            link: link(
                "GitHub",
                "https://github.com/almirus/delivery-pulse",
                ProjectLinkType::Github,
            ),
            ..project(
                "delivery-pulse",
                "Delivery Pulse Dashboard",
                "Автоматически собирает сигналы по релизам и выкатам, строит когорты по качеству и помогает договориться о целевых метриках команды.",
                &["Analytics", "TypeScript", "D3.js"],
                "2024-04-19",
            )
        },
        Project {
            note: Some("Исходники доступны по запросу — репозиторий приватный.".to_string()),
            ..project(
                "feature-flag-auditor",
                "Feature Flag Auditor",
                "CLI-утилита, которая вычищает забытые фичефлаги, считает охват и формирует digest для продуктового менеджера.",
                &["Go", "CLI", "Feature Flags"],
                "2024-02-02",
            )
        },
        Project {
            link: link("Docs", "https://playbooks.almir.dev", ProjectLinkType::Docs),
            ..project(
                "playbook-catalogue",
                "Playbook Catalogue",
                "Коллекция фасилитационных сценариев и шаблонов командных ритуалов. Позволяет экспортировать мероприятия в Linear или Jira.",
                &["Notion API", "Automation", "Team Enablement"],
                "2024-01-18",
            )
        },
        Project {
            link: link(
                "Case study",
                "https://almir.dev/blog/etl-observer",
                ProjectLinkType::Article,
            ),
            ..project(
                "etl-observer",
                "ETL Observer",
                "Сервис наблюдаемости для data-pipeline: метрики свежести датасетов, оповещения в Telegram и автоматические runbook-и.",
                &["Python", "Airflow", "Monitoring"],
                "2023-12-11",
            )
        },
        Project {
            note: Some("Пока без публичной ссылки, идёт внутренняя апробация в команде.".to_string()),
            ..project(
                "career-compass",
                "Career Compass",
                "Интерактивный гид по развитию инженеров: матрицы компетенций, планирование 1:1 и напоминания о следующих шагах для каждого специалиста.",
                &["Career", "React", "Coaching"],
                "2023-11-07",
            )
        },
        Project {
            link: link(
                "GitHub",
                "https://github.com/almirus/service-blueprints",
                ProjectLinkType::Github,
            ),
            ..project(
                "service-blueprints",
                "Service Blueprint Generator",
                "Генератор сервисных blueprints: синхронизирует CJM, Backstage и внутренний портал, чтобы видеть потоки данных end-to-end.",
                &["Systems Design", "Backstage", "Diagrams"],
                "2024-05-30",
            )
        },
    ]
}

/// Extra project cards injected through configuration. Only records with a
/// string title and description survive; everything else is skipped quietly.
pub fn placeholder_projects(raw: Option<&str>) -> Vec<Project> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    let items = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(items)) => items,
        Ok(_) => return Vec::new(),
        Err(e) => {
            debug!("Ignoring malformed placeholder projects config: {e}");
            return Vec::new();
        }
    };

    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            let obj = item.as_object()?;
            let title = obj.get("title")?.as_str()?;
            let description = obj.get("description")?.as_str()?;

            let href = obj.get("href").and_then(Value::as_str);
            let link_label = obj
                .get("linkLabel")
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|label| !label.is_empty())
                .map(str::to_string)
                .or_else(|| href.map(|_| "Подробнее".to_string()));

            let last_updated = obj
                .get("lastUpdated")
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|date| !date.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| Utc::now().format("%Y-%m-%d").to_string());

            Some(Project {
                id: format!("placeholder-{index}"),
                title: title.trim().to_string(),
                description: description.trim().to_string(),
                tags: ensure_tags(obj.get("tags")),
                last_updated,
                link: match (href, link_label) {
                    (Some(href), Some(label)) => Some(ProjectLink {
                        label,
                        href: href.to_string(),
                        link_type: None,
                    }),
                    _ => None,
                },
                note: obj
                    .get("note")
                    .and_then(Value::as_str)
                    .map(str::trim)
                    .filter(|note| !note.is_empty())
                    .map(str::to_string),
                is_placeholder: true,
            })
        })
        .collect()
}

pub fn all_projects(placeholder_raw: Option<&str>) -> Vec<Project> {
    let mut projects = base_projects();
    projects.extend(placeholder_projects(placeholder_raw));
    projects
}

pub fn project_by_id(projects: &[Project], id: &str) -> Option<Project> {
    projects.iter().find(|project| project.id == id).cloned()
}
