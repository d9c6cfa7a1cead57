use rand::seq::IteratorRandom;
use sqlx::PgPool;
use std::collections::BTreeSet;

use crate::error::Result;
use crate::models::vacancy::VacancyListing;

const SKILL_DELIMITER: &str = ", ";

#[derive(Clone)]
pub struct SearchService {
    pool: PgPool,
}

impl SearchService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Case-insensitive substring match on vacancy title or skills; when
    /// nothing matches, fall back to matching the specialty title. An empty
    /// query returns everything.
    pub async fn search_vacancies(&self, query: Option<&str>) -> Result<Vec<VacancyListing>> {
        let base = r#"
            SELECT v.id, v.title, v.skills, v.description, v.salary_min, v.salary_max,
                   v.published_at,
                   s.code AS specialty_code, s.title AS specialty_title,
                   c.id AS company_id, c.name AS company_name
            FROM vacancies v
            JOIN specialties s ON s.id = v.specialty_id
            JOIN companies c ON c.id = v.company_id
        "#;

        let Some(query) = query.filter(|q| !q.is_empty()) else {
            let all = sqlx::query_as::<_, VacancyListing>(&format!(
                "{base} ORDER BY v.published_at DESC"
            ))
            .fetch_all(&self.pool)
            .await?;
            return Ok(all);
        };

        let pattern = format!("%{}%", query);
        let matched = sqlx::query_as::<_, VacancyListing>(&format!(
            "{base} WHERE v.title ILIKE $1 OR v.skills ILIKE $1 ORDER BY v.published_at DESC"
        ))
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await?;

        if !matched.is_empty() {
            return Ok(matched);
        }

        let by_specialty = sqlx::query_as::<_, VacancyListing>(&format!(
            "{base} WHERE s.title ILIKE $1 ORDER BY v.published_at DESC"
        ))
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await?;

        Ok(by_specialty)
    }

    /// Random sample of distinct skill tags for the home page, clamped to
    /// the population size when fewer than `n` distinct skills exist.
    pub async fn skills_sample(&self, n: usize) -> Result<Vec<String>> {
        let fields = sqlx::query_scalar::<_, String>("SELECT skills FROM vacancies")
            .fetch_all(&self.pool)
            .await?;

        Ok(sample_distinct_skills(&fields, n))
    }
}

pub fn sample_distinct_skills(skill_fields: &[String], n: usize) -> Vec<String> {
    let distinct: BTreeSet<&str> = skill_fields
        .iter()
        .flat_map(|field| field.split(SKILL_DELIMITER))
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .collect();

    distinct
        .into_iter()
        .choose_multiple(&mut rand::thread_rng(), n)
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn sample_clamps_to_population_size() {
        let fields = fields(&["Python, Django", "Python, SQL"]);
        // 3 distinct skills, asking for 5
        let sample = sample_distinct_skills(&fields, 5);
        assert_eq!(sample.len(), 3);
    }

    #[test]
    fn sample_deduplicates_across_vacancies() {
        let fields = fields(&["Rust, Tokio", "Rust, Tokio", "Rust, Axum"]);
        let mut sample = sample_distinct_skills(&fields, 10);
        sample.sort();
        assert_eq!(sample, vec!["Axum", "Rust", "Tokio"]);
    }

    #[test]
    fn sample_of_empty_population_is_empty() {
        assert!(sample_distinct_skills(&[], 5).is_empty());
    }

    #[test]
    fn sample_returns_exactly_n_when_population_is_larger() {
        let fields = fields(&["A, B, C, D, E, F, G"]);
        assert_eq!(sample_distinct_skills(&fields, 5).len(), 5);
    }

    #[test]
    fn sample_ignores_blank_tokens() {
        let fields = fields(&["Rust, , Tokio"]);
        let mut sample = sample_distinct_skills(&fields, 10);
        sample.sort();
        assert_eq!(sample, vec!["Rust", "Tokio"]);
    }
}
