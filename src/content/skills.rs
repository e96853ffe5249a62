use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Frequent,
    Occasional,
    Beginner,
}

#[derive(Debug, Clone, Serialize)]
pub struct Skill {
    pub name: &'static str,
    pub level: SkillLevel,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGroup {
    pub category: &'static str,
    pub short_label: &'static str,
    pub summary: &'static str,
    pub score: f64,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Language {
    pub label: &'static str,
    pub note: &'static str,
}

fn skill(name: &'static str, level: SkillLevel) -> Skill {
    Skill { name, level }
}

pub fn skill_groups() -> Vec<SkillGroup> {
    use SkillLevel::{Beginner, Frequent, Occasional};

    vec![
        SkillGroup {
            category: "Backend / Go",
            short_label: "Backend",
            summary: "Проектирую устойчивые сервисы, API и интеграции на Go, уделяя внимание наблюдаемости и продуктивности команды.",
            score: 0.9,
            skills: vec![
                skill("Go", Frequent),
                skill("gRPC & protobuf", Frequent),
                skill("PostgreSQL", Frequent),
                skill("Event-driven architecture", Occasional),
                skill("Domain-Driven Design", Occasional),
            ],
        },
        SkillGroup {
            category: "Observability & Reliability",
            short_label: "Observability",
            summary: "Строю прозрачность систем: собираю метрики, трассировки и логи, чтобы команда понимала, что происходит в проде.",
            score: 0.78,
            skills: vec![
                skill("OpenTelemetry", Frequent),
                skill("Grafana / Prometheus", Frequent),
                skill("Incident response", Occasional),
                skill("Chaos experiments", Beginner),
                skill("SLO & Error budgets", Occasional),
            ],
        },
        SkillGroup {
            category: "Infrastructure & Delivery",
            short_label: "Infrastructure",
            summary: "Настраиваю платёжеспособные CI/CD и облачную инфраструктуру, чтобы релизы выходили быстро и безопасно.",
            score: 0.74,
            skills: vec![
                skill("Kubernetes", Occasional),
                skill("Terraform", Occasional),
                skill("GitHub Actions", Frequent),
                skill("Helm & Kustomize", Occasional),
                skill("AWS / GCP", Occasional),
                skill("Docker", Frequent),
            ],
        },
        SkillGroup {
            category: "Product Discovery",
            short_label: "Discovery",
            summary: "Помогаю командам валидировать гипотезы, работать с интервью, картами путешествия пользователя и экспериментами.",
            score: 0.65,
            skills: vec![
                skill("Customer interviews", Occasional),
                skill("Experiment design", Frequent),
                skill("Product analytics", Occasional),
                skill("JTBD mapping", Beginner),
                skill("Story mapping", Occasional),
            ],
        },
        SkillGroup {
            category: "Team Enablement",
            short_label: "Enablement",
            summary: "Создаю ритуалы, менторство и прозрачные карьерные треки, чтобы команда росла и сохраняла фокус.",
            score: 0.82,
            skills: vec![
                skill("1:1 coaching", Frequent),
                skill("Hiring & onboarding", Occasional),
                skill("Knowledge sharing", Frequent),
                skill("Facilitation", Frequent),
                skill("Career frameworks", Occasional),
            ],
        },
    ]
}

pub fn languages() -> Vec<Language> {
    vec![
        Language { label: "Русский", note: "родной" },
        Language { label: "English", note: "C1" },
        Language { label: "Deutsch", note: "B1" },
    ]
}

pub fn currently_learning() -> Vec<&'static str> {
    vec!["Rust", "Temporal", "Product analytics instrumentation"]
}

// Radar chart geometry. The webview only draws the primitives computed here.

const CHART_SIZE: f64 = 280.0;
const EDGE_PADDING: f64 = 24.0;
const LABEL_RATIO: f64 = 1.15;
const GRID_LEVELS: [f64; 4] = [0.25, 0.5, 0.75, 1.0];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct RadarPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RadarLabel {
    pub x: f64,
    pub y: f64,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarChart {
    pub size: f64,
    pub grid_polygons: Vec<String>,
    pub axis_points: Vec<RadarPoint>,
    pub surface_points: String,
    pub dots: Vec<RadarPoint>,
    pub labels: Vec<RadarLabel>,
    pub summary: String,
}

fn point_for(ratio: f64, index: usize, count: usize) -> RadarPoint {
    let center = CHART_SIZE / 2.0;
    let radius = center - EDGE_PADDING;
    let safe_ratio = ratio.max(0.0);
    let angle = -PI / 2.0 + index as f64 * (2.0 * PI / count as f64);
    RadarPoint {
        x: center + angle.cos() * safe_ratio * radius,
        y: center + angle.sin() * safe_ratio * radius,
    }
}

fn polygon(ratios: impl Iterator<Item = f64>, count: usize) -> String {
    ratios
        .enumerate()
        .map(|(index, ratio)| {
            let RadarPoint { x, y } = point_for(ratio, index, count);
            format!("{x},{y}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn radar_chart() -> RadarChart {
    let groups = skill_groups();
    let count = groups.len();

    let grid_polygons = GRID_LEVELS
        .iter()
        .map(|level| polygon(std::iter::repeat(*level).take(count), count))
        .collect();

    let axis_points = (0..count).map(|index| point_for(1.0, index, count)).collect();

    let surface_points = polygon(groups.iter().map(|group| group.score), count);

    let dots = groups
        .iter()
        .enumerate()
        .map(|(index, group)| point_for(group.score, index, count))
        .collect();

    let labels = groups
        .iter()
        .enumerate()
        .map(|(index, group)| {
            let RadarPoint { x, y } = point_for(LABEL_RATIO, index, count);
            RadarLabel {
                x,
                y,
                label: group.short_label,
            }
        })
        .collect();

    let summary = groups
        .iter()
        .map(|group| format!("{}: {}%", group.short_label, (group.score * 100.0).round()))
        .collect::<Vec<_>>()
        .join(", ");

    RadarChart {
        size: CHART_SIZE,
        grid_polygons,
        axis_points,
        surface_points,
        dots,
        labels,
        summary,
    }
}
