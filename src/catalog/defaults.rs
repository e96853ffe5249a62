use super::model::{Complexity, Frequency, InterviewQuestion};

/// The seeded question set shown before the user imports their own.
pub fn default_questions() -> Vec<InterviewQuestion> {
    [
        (
            "go-context-cancellation",
            "Как в Go работает контекст и почему с ним важно уметь отменять долгие операции?",
            "Показать, как устроены Context WithTimeout/WithCancel, как прокидывать их в goroutine и зачем отменять запросы к внешним сервисам.",
            &["Go", "Concurrency", "Resilience"][..],
            Frequency::Often,
            Complexity::Middle,
        ),
        (
            "k8s-crashloopbackoff",
            "Что означает статус CrashLoopBackOff в Kubernetes и как бы вы диагностировали проблему?",
            "Нужно описать цикл рестартов, посмотреть describe, логи контейнера, readiness/liveness, лимиты ресурсов и общие паттерны.",
            &["Kubernetes", "Operations", "Troubleshooting"][..],
            Frequency::Often,
            Complexity::Middle,
        ),
        (
            "feature-flags-system",
            "Как бы вы спроектировали систему feature flag-ов для продукта с миллионами пользователей?",
            "Рассказать про rollout по сегментам, audit trail, антибюджет на чистку флагов и интеграции с CI/CD.",
            &["Architecture", "Feature Flags", "Product"][..],
            Frequency::Normal,
            Complexity::Senior,
        ),
        (
            "apdex-calculation",
            "Как считается Apdex и чем он полезнее простой медианы времени ответа?",
            "Apdex агрегирует латентность в индикатор удовлетворённости — полезно обсудить выбор T, влияние slow-requests и коммуникацию с бизнесом.",
            &["Observability", "SLI/SLO"][..],
            Frequency::Normal,
            Complexity::Middle,
        ),
        (
            "saga-pattern",
            "Объясните паттерн Saga и приведите пример, когда он лучше, чем распределённая транзакция.",
            "Сравнить choreography vs orchestration, показать компенсирующие действия и что делать, если шагов становится слишком много.",
            &["Architecture", "Distributed Systems"][..],
            Frequency::Normal,
            Complexity::Senior,
        ),
        (
            "zero-downtime-migrations",
            "Как организовать миграции базы без простоя, если нужно добавить обязательное поле?",
            "Рассказать про expand-contract, backfill, feature toggles на запись и как мониторить деградацию во время миграции.",
            &["Databases", "Delivery"][..],
            Frequency::Often,
            Complexity::Middle,
        ),
        (
            "token-bucket",
            "Как работает алгоритм token bucket и как применить его в сервисе с непредсказуемой нагрузкой?",
            "Нужно уметь объяснить refill rate, burst, что хранить в Redis/в памяти и как наблюдать ситуацию при runaway трафике.",
            &["Backend", "Rate limiting"][..],
            Frequency::Normal,
            Complexity::Middle,
        ),
        (
            "event-vs-request",
            "Event-driven или request/response: как выбрать коммуникацию между сервисами?",
            "Сравнить согласованность, наблюдаемость, обратную совместимость, топологию и влияние на конечную задержку.",
            &["Architecture", "Messaging"][..],
            Frequency::Normal,
            Complexity::Senior,
        ),
        (
            "product-discovery-interviews",
            "Как вы проводите пользовательские интервью, чтобы команда не влюблялась в решение?",
            "Говорим про подготовку сценария, активное слушание, synthesis и как результаты превращаются в гипотезы.",
            &["Discovery", "Product", "Customer Research"][..],
            Frequency::Rare,
            Complexity::Junior,
        ),
        (
            "observability-pillars",
            "Что включают три столпа наблюдаемости и как их связать в единую историю для онколла?",
            "Показать связь метрик, логов и трассировок, построить storytelling и договориться о runbooks для команды.",
            &["Observability", "Incident Response"][..],
            Frequency::Often,
            Complexity::Junior,
        ),
        (
            "experiment-design",
            "Как сформулировать эксперимент так, чтобы инженерная команда понимала критерии успеха?",
            "Разобрать постановку гипотезы, метрику успеха, минимальный срез и кто принимает решение о rollout.",
            &["Experimentation", "Product"][..],
            Frequency::Normal,
            Complexity::Middle,
        ),
        (
            "retro-outcomes",
            "Как сделать ретро после инцидента полезным, а не списком виноватых?",
            "Говорим про blameless подход, action items с owners, закрытие контекстов и связь с roadmap.",
            &["Team", "Postmortem"][..],
            Frequency::Rare,
            Complexity::Junior,
        ),
    ]
    .into_iter()
    .map(
        |(id, question, answer, tags, frequency, complexity)| InterviewQuestion {
            id: id.to_string(),
            question: question.to_string(),
            answer: Some(answer.to_string()),
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
            frequency,
            complexity,
            source: None,
        },
    )
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_set_shape() {
        let questions = default_questions();
        assert_eq!(questions.len(), 12);
        assert!(questions.iter().all(|q| !q.question.is_empty()));
        assert!(questions.iter().all(|q| q.answer.is_some()));

        // Ids are unique within the seed.
        let mut ids: Vec<&str> = questions.iter().map(|q| q.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 12);
    }
}
