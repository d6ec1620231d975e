use crate::models::{RiskLevel, TrackerHit};

/// Known tracker categories and the URL substrings that identify them.
///
/// Matching is a case-sensitive substring check against the script source.
const TRACKER_CATEGORIES: &[(&str, &[&str])] = &[
    ("google", &["google-analytics.com", "googletagmanager.com", "googleadservices.com"]),
    ("facebook", &["facebook.net", "fb.com", "facebook.com"]),
    ("twitter", &["twitter.com", "twimg.com"]),
    ("linkedin", &["linkedin.com"]),
    ("advertising", &["doubleclick.net", "adsrvr.org", "adnxs.com"]),
];

fn category_risk(category: &str) -> RiskLevel {
    if category == "advertising" {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Attribute each script source to every tracker category it matches.
///
/// Hits follow script discovery order; a script matching several categories
/// yields one hit per category, and nothing is deduplicated.
pub fn detect_trackers(scripts: &[String]) -> Vec<TrackerHit> {
    let mut hits = Vec::new();
    for script in scripts {
        for (category, domains) in TRACKER_CATEGORIES {
            if domains.iter().any(|domain| script.contains(domain)) {
                hits.push(TrackerHit {
                    category: category.to_string(),
                    source: script.clone(),
                    risk: category_risk(category),
                });
            }
        }
    }
    hits
}
