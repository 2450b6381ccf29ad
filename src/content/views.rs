//! View-model transformers.
//!
//! Pure reshaping of resolved content into what pages render. No I/O, and
//! inputs are never mutated; every function returns a fresh allocation.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::models::{Advisor, CommunityNewsItem, Milestone, ProgramCategory};

/// One program flattened out of its category for the combined list view.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FlattenedProgram {
    pub title: String,
    pub description: String,
    pub category_title: String,
    pub category_id: String,
    pub order: i64,
}

/// Flatten nested program categories into a single ordered list.
///
/// Primary key is the owning category's `order`, secondary key the program's
/// own `order`; ties keep input order. A program without goal text inherits
/// its category's description.
pub fn flatten_programs(categories: &[ProgramCategory]) -> Vec<FlattenedProgram> {
    let mut cats: Vec<&ProgramCategory> = categories.iter().collect();
    // Vec::sort_by_key is stable, which gives the tie-break by input order.
    cats.sort_by_key(|c| c.order);

    let mut out = Vec::new();
    for cat in cats {
        let mut programs: Vec<_> = cat.programs.iter().collect();
        programs.sort_by_key(|p| p.order);

        for program in programs {
            out.push(FlattenedProgram {
                title: program.title.clone(),
                description: program
                    .goal
                    .clone()
                    .unwrap_or_else(|| cat.description.clone()),
                category_title: cat.title.clone(),
                category_id: cat.id.clone(),
                order: program.order,
            });
        }
    }
    out
}

/// Items grouped by a 4-character year key, with the key list sorted
/// numerically descending.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct YearGroups<T> {
    pub years: Vec<String>,
    pub groups: HashMap<String, Vec<T>>,
}

/// Group items by a derived year key.
pub fn group_by_year<T: Clone>(items: &[T], year_of: impl Fn(&T) -> String) -> YearGroups<T> {
    let mut groups: HashMap<String, Vec<T>> = HashMap::new();
    for item in items {
        groups.entry(year_of(item)).or_default().push(item.clone());
    }

    let mut years: Vec<String> = groups.keys().cloned().collect();
    // Numeric descending, not lexical: "2024" before "2016".
    years.sort_by_key(|y| std::cmp::Reverse(y.parse::<i64>().unwrap_or(0)));

    YearGroups { years, groups }
}

/// News grouped by year, most recent first within each year.
pub fn news_by_year(items: &[CommunityNewsItem]) -> YearGroups<CommunityNewsItem> {
    let mut grouped = group_by_year(items, |item| item.year_key());
    for group in grouped.groups.values_mut() {
        group.sort_by(|a, b| b.date.cmp(&a.date));
    }
    grouped
}

/// Milestones grouped by year, chronologically forward within each year.
pub fn milestones_by_year(items: &[Milestone]) -> YearGroups<Milestone> {
    let mut grouped = group_by_year(items, |m| m.year.to_string());
    for group in grouped.groups.values_mut() {
        group.sort_by_key(|m| m.month);
    }
    grouped
}

/// Token that selects every category.
pub const ALL_CATEGORIES: &str = "all";

/// Filter news items by category token. Exact, case-sensitive match; the
/// counts per token must sum to the total.
pub fn filter_by_category(items: &[CommunityNewsItem], token: &str) -> Vec<CommunityNewsItem> {
    if token == ALL_CATEGORIES {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.category == token)
        .cloned()
        .collect()
}

/// Count of items per category token, for badge counters.
pub fn category_counts(items: &[CommunityNewsItem]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for item in items {
        *counts.entry(item.category.clone()).or_insert(0) += 1;
    }
    counts
}

/// Priority-ordered keyword classifier: first rule with any matching keyword
/// wins, else the fallback label. Matching is on the lowercased input.
pub struct Classifier {
    rules: Vec<(&'static [&'static str], &'static str)>,
    fallback: &'static str,
}

impl Classifier {
    pub fn new(
        rules: Vec<(&'static [&'static str], &'static str)>,
        fallback: &'static str,
    ) -> Self {
        Self { rules, fallback }
    }

    pub fn classify(&self, text: &str) -> &'static str {
        let lowered = text.to_lowercase();
        for (keywords, label) in &self.rules {
            if keywords.iter().any(|k| lowered.contains(k)) {
                return label;
            }
        }
        self.fallback
    }
}

const PROFESSOR_KEYWORDS: &[&str] = &["professor"];
const LEADERSHIP_KEYWORDS: &[&str] = &["director", "representative", "chairman"];
const PHARMACIST_KEYWORDS: &[&str] = &["pharmacist"];
const POLICE_KEYWORDS: &[&str] = &["police", "inspector", "superintendent"];

const FOUNDING_KEYWORDS: &[&str] = &["opened", "established", "founding"];
const AWARD_KEYWORDS: &[&str] = &["award"];
const PARTNERSHIP_KEYWORDS: &[&str] = &["partnership", "agreement"];
const EXPANSION_KEYWORDS: &[&str] = &["expanded", "expansion", "renovation"];

/// Badge for advisor positions. Professor keywords are checked before
/// director/representative, before pharmacist, before police ranks.
pub fn advisor_position_classifier() -> Classifier {
    Classifier::new(
        vec![
            (PROFESSOR_KEYWORDS, "Academic"),
            (LEADERSHIP_KEYWORDS, "Leadership"),
            (PHARMACIST_KEYWORDS, "Healthcare"),
            (POLICE_KEYWORDS, "Public safety"),
        ],
        "Advisor",
    )
}

/// Badge for history milestone events.
pub fn milestone_event_classifier() -> Classifier {
    Classifier::new(
        vec![
            (FOUNDING_KEYWORDS, "Founding"),
            (AWARD_KEYWORDS, "Award"),
            (PARTNERSHIP_KEYWORDS, "Partnership"),
            (EXPANSION_KEYWORDS, "Expansion"),
        ],
        "Event",
    )
}

/// Stable sort by the `order` field, without mutating the input.
pub fn sorted_by_order<T: Clone>(items: &[T], order_of: impl Fn(&T) -> i64) -> Vec<T> {
    let mut out = items.to_vec();
    out.sort_by_key(order_of);
    out
}

/// Advisor with its position badge attached.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisorView {
    #[serde(flatten)]
    pub advisor: Advisor,
    pub badge: String,
}

/// Milestone with its event badge attached.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneView {
    #[serde(flatten)]
    pub milestone: Milestone,
    pub badge: String,
}

/// One year of the history timeline, months ascending.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryYear {
    pub year: String,
    pub entries: Vec<MilestoneView>,
}

/// Build the history timeline: years descending, badges attached.
pub fn history_timeline(milestones: &[Milestone]) -> Vec<HistoryYear> {
    let classifier = milestone_event_classifier();
    let grouped = milestones_by_year(milestones);

    grouped
        .years
        .iter()
        .map(|year| HistoryYear {
            year: year.clone(),
            entries: grouped.groups[year]
                .iter()
                .map(|m| MilestoneView {
                    milestone: m.clone(),
                    badge: classifier.classify(&m.event).to_string(),
                })
                .collect(),
        })
        .collect()
}

/// Advisors sorted by order with position badges attached.
pub fn advisor_board(advisors: &[Advisor]) -> Vec<AdvisorView> {
    let classifier = advisor_position_classifier();
    sorted_by_order(advisors, |a| a.order)
        .into_iter()
        .map(|advisor| {
            let badge = classifier.classify(&advisor.position).to_string();
            AdvisorView { advisor, badge }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Program;

    fn category(id: &str, order: i64, program_orders: &[i64]) -> ProgramCategory {
        ProgramCategory {
            id: id.to_string(),
            title: format!("Category {}", id),
            description: format!("Description {}", id),
            order,
            programs: program_orders
                .iter()
                .map(|&o| Program {
                    id: format!("{}-p{}", id, o),
                    title: format!("Program {}-{}", id, o),
                    order: o,
                    ..Default::default()
                })
                .collect(),
        }
    }

    fn news(id: &str, date: &str, cat: &str) -> CommunityNewsItem {
        CommunityNewsItem {
            id: id.to_string(),
            date: date.to_string(),
            category: cat.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_flatten_length_is_sum_of_program_lists() {
        let cats = vec![category("a", 1, &[1, 2, 3]), category("b", 2, &[1, 2])];
        assert_eq!(flatten_programs(&cats).len(), 5);
    }

    #[test]
    fn test_flatten_orders_by_category_then_program() {
        // Category order 1 holds programs [2, 1]; category order 0 holds [1].
        let cats = vec![category("x", 1, &[2, 1]), category("y", 0, &[1])];
        let flat = flatten_programs(&cats);

        let ids: Vec<_> = flat
            .iter()
            .map(|p| (p.category_id.as_str(), p.order))
            .collect();
        assert_eq!(ids, vec![("y", 1), ("x", 1), ("x", 2)]);
    }

    #[test]
    fn test_flatten_stable_on_equal_orders() {
        let cats = vec![category("a", 0, &[0, 0]), category("b", 0, &[0])];
        let flat = flatten_programs(&cats);
        let ids: Vec<_> = flat.iter().map(|p| p.category_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "a", "b"]);
    }

    #[test]
    fn test_flatten_description_falls_back_to_category() {
        let mut cat = category("a", 0, &[1]);
        cat.programs[0].goal = None;
        let flat = flatten_programs(&[cat]);
        assert_eq!(flat[0].description, "Description a");

        let mut cat = category("a", 0, &[1]);
        cat.programs[0].goal = Some("own goal".to_string());
        let flat = flatten_programs(&[cat]);
        assert_eq!(flat[0].description, "own goal");
    }

    #[test]
    fn test_group_by_year_keys_descending() {
        let items = vec![
            news("a", "2023-05-17", "news"),
            news("b", "2024-06-10", "news"),
            news("c", "2022-01-01", "news"),
        ];
        let grouped = news_by_year(&items);
        assert_eq!(grouped.years, vec!["2024", "2023", "2022"]);
        for year in &grouped.years {
            for item in &grouped.groups[year] {
                assert_eq!(&item.year_key(), year);
            }
        }
    }

    #[test]
    fn test_year_sort_is_numeric_not_lexical() {
        let items = vec![news("a", "999-01-01", "n"), news("b", "1998-01-01", "n")];
        let grouped = news_by_year(&items);
        assert_eq!(grouped.years, vec!["1998", "999-"]);
    }

    #[test]
    fn test_news_within_year_most_recent_first() {
        let items = vec![
            news("a", "2023-01-05", "n"),
            news("b", "2023-09-12", "n"),
            news("c", "2023-04-01", "n"),
        ];
        let grouped = news_by_year(&items);
        let dates: Vec<_> = grouped.groups["2023"].iter().map(|i| &i.date).collect();
        assert_eq!(dates, vec!["2023-09-12", "2023-04-01", "2023-01-05"]);
    }

    #[test]
    fn test_milestones_within_year_month_ascending() {
        let items = vec![
            Milestone {
                year: 2016,
                month: 11,
                event: "Award received".to_string(),
            },
            Milestone {
                year: 2016,
                month: 2,
                event: "Annex opened".to_string(),
            },
        ];
        let grouped = milestones_by_year(&items);
        let months: Vec<_> = grouped.groups["2016"].iter().map(|m| m.month).collect();
        assert_eq!(months, vec![2, 11]);
    }

    #[test]
    fn test_filter_all_returns_everything() {
        let items = vec![news("a", "2024-01-01", "notice"), news("b", "2024-01-02", "news")];
        let filtered = filter_by_category(&items, ALL_CATEGORIES);
        assert_eq!(filtered, items);
    }

    #[test]
    fn test_filter_is_exact_and_case_sensitive() {
        let items = vec![
            news("a", "2024-01-01", "notice"),
            news("b", "2024-01-02", "Notice"),
            news("c", "2024-01-03", "notices"),
        ];
        let filtered = filter_by_category(&items, "notice");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "a");
    }

    #[test]
    fn test_category_counts_sum_to_total() {
        let items = vec![
            news("a", "2024-01-01", "notice"),
            news("b", "2024-01-02", "news"),
            news("c", "2024-01-03", "notice"),
        ];
        let counts = category_counts(&items);
        assert_eq!(counts.values().sum::<usize>(), items.len());
        assert_eq!(counts["notice"], 2);
        assert_eq!(counts["news"], 1);
    }

    #[test]
    fn test_classifier_priority_order_wins() {
        let classifier = advisor_position_classifier();
        // Both keywords present: the earlier rule (professor) wins.
        assert_eq!(
            classifier.classify("Professor and director of the institute"),
            "Academic"
        );
        // Only the director keyword: the leadership rule matches.
        assert_eq!(classifier.classify("Director of the institute"), "Leadership");
    }

    #[test]
    fn test_classifier_fallback() {
        let classifier = advisor_position_classifier();
        assert_eq!(classifier.classify("Community volunteer"), "Advisor");
    }

    #[test]
    fn test_milestone_classifier() {
        let classifier = milestone_event_classifier();
        assert_eq!(classifier.classify("Center opened in March"), "Founding");
        assert_eq!(classifier.classify("Received a regional award"), "Award");
        assert_eq!(classifier.classify("Staff picnic"), "Event");
    }

    #[test]
    fn test_sorted_by_order_does_not_mutate_input() {
        let advisors = vec![
            Advisor {
                id: "b".to_string(),
                order: 2,
                ..Default::default()
            },
            Advisor {
                id: "a".to_string(),
                order: 1,
                ..Default::default()
            },
        ];
        let sorted = sorted_by_order(&advisors, |a| a.order);
        assert_eq!(sorted[0].id, "a");
        // Input untouched.
        assert_eq!(advisors[0].id, "b");
    }

    #[test]
    fn test_history_timeline_badges_and_order() {
        let milestones = vec![
            Milestone {
                year: 2016,
                month: 11,
                event: "Regional award received".to_string(),
            },
            Milestone {
                year: 2009,
                month: 3,
                event: "Center opened".to_string(),
            },
        ];
        let timeline = history_timeline(&milestones);
        assert_eq!(timeline[0].year, "2016");
        assert_eq!(timeline[0].entries[0].badge, "Award");
        assert_eq!(timeline[1].entries[0].badge, "Founding");
    }

    #[test]
    fn test_advisor_board_sorted_with_badges() {
        let advisors = vec![
            Advisor {
                id: "second".to_string(),
                position: "Pharmacist".to_string(),
                order: 2,
                ..Default::default()
            },
            Advisor {
                id: "first".to_string(),
                position: "Professor of Social Welfare".to_string(),
                order: 1,
                ..Default::default()
            },
        ];
        let board = advisor_board(&advisors);
        assert_eq!(board[0].advisor.id, "first");
        assert_eq!(board[0].badge, "Academic");
        assert_eq!(board[1].badge, "Healthcare");
    }
}
