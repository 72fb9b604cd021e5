//! Relevance ranking: weighted keyword matching of a free-text query against
//! profiles and job posts.
//!
//! Algorithm:
//! 1. Trim the query. Empty → browse mode: every record, score 1, input order.
//! 2. Lower-case, split on whitespace, drop tokens shorter than 2 characters.
//! 3. For each token, add the weight of every field category that contains it:
//!    title 20, location 15, keyword list (skills / requirements) 10, name 5.
//! 4. Drop records scoring 0, stable-sort the rest by descending score.
//!
//! The functions are pure. Callers hand in records that are already
//! visibility-filtered.

use serde::Serialize;

use crate::models::job::JobPost;
use crate::models::profile::Profile;

pub const TITLE_WEIGHT: u32 = 20;
pub const LOCATION_WEIGHT: u32 = 15;
pub const KEYWORD_LIST_WEIGHT: u32 = 10;
pub const NAME_WEIGHT: u32 = 5;

/// Tokens shorter than this are ignored.
pub const MIN_TOKEN_CHARS: usize = 2;

/// Score assigned to every record when no query was given.
pub const BROWSE_SCORE: u32 = 1;

// ────────────────────────────────────────────────────────────────────────────
// Output
// ────────────────────────────────────────────────────────────────────────────

/// A record paired with its relevance score. Serializes as the record's own
/// fields plus `score`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scored<T> {
    #[serde(flatten)]
    pub record: T,
    pub score: u32,
}

impl<T: Clone> Scored<&T> {
    pub fn cloned(self) -> Scored<T> {
        Scored {
            record: self.record.clone(),
            score: self.score,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Query parsing
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchMode {
    /// No query: show everything, unranked.
    Browse,
    /// Lower-cased keyword tokens. May be empty when every token was too short,
    /// in which case nothing matches.
    Keywords(Vec<String>),
}

pub fn parse_query(query: &str) -> SearchMode {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return SearchMode::Browse;
    }

    let tokens = trimmed
        .to_lowercase()
        .split_whitespace()
        .filter(|t| t.chars().count() >= MIN_TOKEN_CHARS)
        .map(str::to_string)
        .collect();

    SearchMode::Keywords(tokens)
}

// ────────────────────────────────────────────────────────────────────────────
// Field extraction
// ────────────────────────────────────────────────────────────────────────────

/// The four field categories a record exposes to the ranker. Absent optional
/// fields contribute empty text.
pub trait Rankable {
    fn title_text(&self) -> &str;
    fn location_text(&self) -> String;
    fn keyword_list(&self) -> &[String];
    fn name_text(&self) -> &str;
}

impl Rankable for Profile {
    fn title_text(&self) -> &str {
        &self.job_title
    }

    /// `city state country location`, skipping absent or empty parts.
    fn location_text(&self) -> String {
        [
            self.city.as_deref(),
            self.state.as_deref(),
            self.country.as_deref(),
            Some(self.location.as_str()),
        ]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }

    fn keyword_list(&self) -> &[String] {
        &self.skills
    }

    fn name_text(&self) -> &str {
        &self.full_name
    }
}

impl Rankable for JobPost {
    fn title_text(&self) -> &str {
        &self.title
    }

    fn location_text(&self) -> String {
        self.location.clone()
    }

    fn keyword_list(&self) -> &[String] {
        &self.requirements
    }

    fn name_text(&self) -> &str {
        &self.company_name
    }
}

/// Lower-cased copy of a record's rankable fields, built once per record.
struct MatchFields {
    title: String,
    location: String,
    keywords: Vec<String>,
    name: String,
}

impl MatchFields {
    fn of<R: Rankable + ?Sized>(record: &R) -> Self {
        Self {
            title: record.title_text().to_lowercase(),
            location: record.location_text().to_lowercase(),
            keywords: record
                .keyword_list()
                .iter()
                .map(|k| k.to_lowercase())
                .collect(),
            name: record.name_text().to_lowercase(),
        }
    }

    fn score(&self, tokens: &[String]) -> u32 {
        tokens.iter().map(|token| self.token_score(token)).sum()
    }

    fn token_score(&self, token: &str) -> u32 {
        let mut score = 0;
        if self.title.contains(token) {
            score += TITLE_WEIGHT;
        }
        if self.location.contains(token) {
            score += LOCATION_WEIGHT;
        }
        if self.keywords.iter().any(|k| k.contains(token)) {
            score += KEYWORD_LIST_WEIGHT;
        }
        if self.name.contains(token) {
            score += NAME_WEIGHT;
        }
        score
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Ranking
// ────────────────────────────────────────────────────────────────────────────

/// Ranks any rankable records against `query`.
pub fn rank<'a, R, I>(query: &str, records: I) -> Vec<Scored<&'a R>>
where
    R: Rankable + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let tokens = match parse_query(query) {
        SearchMode::Browse => {
            return records
                .into_iter()
                .map(|record| Scored {
                    record,
                    score: BROWSE_SCORE,
                })
                .collect();
        }
        SearchMode::Keywords(tokens) => tokens,
    };

    let mut scored: Vec<_> = records
        .into_iter()
        .map(|record| Scored {
            record,
            score: MatchFields::of(record).score(&tokens),
        })
        .filter(|s| s.score > 0)
        .collect();

    // Stable: equal scores keep input order.
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}

pub fn score_profiles<'a, I>(query: &str, profiles: I) -> Vec<Scored<&'a Profile>>
where
    I: IntoIterator<Item = &'a Profile>,
{
    rank(query, profiles)
}

pub fn score_job_posts<'a, I>(query: &str, jobs: I) -> Vec<Scored<&'a JobPost>>
where
    I: IntoIterator<Item = &'a JobPost>,
{
    rank(query, jobs)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
