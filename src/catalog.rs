//! Saved query catalog.
//!
//! Pre-written analysis queries for the restaurant market dataset, keyed by
//! a short name for `--query`. Custom SQL via `--sql` bypasses the catalog
//! entirely.

/// A saved analysis query.
#[derive(Debug, Clone, Copy)]
pub struct SavedQuery {
    pub name: &'static str,
    pub description: &'static str,
    pub sql: &'static str,
}

/// All saved queries, in menu order.
pub fn all() -> &'static [SavedQuery] {
    SAVED_QUERIES
}

/// Finds a saved query by name (case-insensitive).
pub fn find(name: &str) -> Option<&'static SavedQuery> {
    SAVED_QUERIES
        .iter()
        .find(|q| q.name.eq_ignore_ascii_case(name))
}

/// The default query used when neither `--query` nor `--sql` is given.
pub fn default_query() -> &'static SavedQuery {
    &SAVED_QUERIES[0]
}

const SAVED_QUERIES: &[SavedQuery] = &[
    SavedQuery {
        name: "ratings-by-stars",
        description: "Average rating by star count",
        sql: "\
SELECT stars, COUNT(*) AS restaurant_count, AVG(review_count) AS avg_reviews
FROM business
WHERE city = 'Tampa' AND categories LIKE '%Restaurant%'
GROUP BY stars
ORDER BY stars",
    },
    SavedQuery {
        name: "top-cuisines",
        description: "Top 15 cuisines by restaurant count",
        sql: "\
SELECT TRIM(cuisine) AS cuisine, COUNT(DISTINCT business_id) AS restaurant_count
FROM business, UNNEST(STRING_TO_ARRAY(categories, ',')) AS cuisine
WHERE city = 'Tampa' AND TRIM(cuisine) NOT IN ('Restaurants', 'Food')
GROUP BY TRIM(cuisine)
ORDER BY restaurant_count DESC
LIMIT 15",
    },
    SavedQuery {
        name: "performance",
        description: "Restaurant performance: ratings vs reviews",
        sql: "\
SELECT name, stars, review_count, is_open
FROM business
WHERE city = 'Tampa' AND categories LIKE '%Restaurant%' AND review_count > 50
ORDER BY review_count DESC
LIMIT 50",
    },
    SavedQuery {
        name: "market-saturation",
        description: "Reviews by rating bracket",
        sql: "\
SELECT
    CASE
        WHEN stars >= 4.5 THEN '4.5+ Stars (Excellent)'
        WHEN stars >= 4 THEN '4-4.5 Stars (Very Good)'
        WHEN stars >= 3.5 THEN '3.5-4 Stars (Good)'
        WHEN stars >= 3 THEN '3-3.5 Stars (Average)'
        ELSE 'Below 3 Stars (Poor)'
    END AS rating_bracket,
    COUNT(*) AS restaurant_count,
    AVG(review_count) AS avg_review_count,
    AVG(is_open::int) AS pct_open
FROM business
WHERE city = 'Tampa' AND categories LIKE '%Restaurant%'
GROUP BY 1
ORDER BY rating_bracket DESC",
    },
    SavedQuery {
        name: "review-trends",
        description: "Review activity trends by month",
        sql: "\
SELECT
    EXTRACT(YEAR FROM date)::int AS review_year,
    EXTRACT(MONTH FROM date)::int AS review_month,
    COUNT(*) AS review_count
FROM review
WHERE business_id IN (
    SELECT business_id FROM business
    WHERE city = 'Tampa' AND categories LIKE '%Restaurant%'
)
GROUP BY 1, 2
ORDER BY review_year DESC, review_month DESC
LIMIT 12",
    },
    SavedQuery {
        name: "most-reviewed",
        description: "Top 20 most reviewed restaurants",
        sql: "\
SELECT name, stars, review_count,
    CASE WHEN is_open THEN 'Open' ELSE 'Closed' END AS status
FROM business
WHERE city = 'Tampa' AND categories LIKE '%Restaurant%'
ORDER BY review_count DESC
LIMIT 20",
    },
    SavedQuery {
        name: "sentiment-over-time",
        description: "Average review sentiment over time",
        sql: "\
SELECT
    EXTRACT(YEAR FROM r.date)::int AS year,
    EXTRACT(MONTH FROM r.date)::int AS month,
    AVG(r.stars) AS avg_rating,
    COUNT(*) AS total_reviews
FROM review r
WHERE r.business_id IN (
    SELECT business_id FROM business
    WHERE city = 'Tampa' AND categories LIKE '%Restaurant%'
)
GROUP BY 1, 2
ORDER BY year DESC, month DESC
LIMIT 12",
    },
    SavedQuery {
        name: "active-vs-inactive",
        description: "Active vs inactive restaurants",
        sql: "\
SELECT
    CASE WHEN is_open THEN 'Active' ELSE 'Inactive' END AS status,
    COUNT(*) AS count,
    AVG(stars) AS avg_rating,
    AVG(review_count) AS avg_reviews
FROM business
WHERE city = 'Tampa' AND categories LIKE '%Restaurant%'
GROUP BY is_open",
    },
    SavedQuery {
        name: "highest-rated",
        description: "Top 10 highest rated restaurants",
        sql: "\
SELECT name, stars, review_count, categories
FROM business
WHERE city = 'Tampa' AND categories LIKE '%Restaurant%' AND stars >= 4
ORDER BY stars DESC, review_count DESC
LIMIT 10",
    },
];
