//! Built-in monitoring methodology and recommended tools.

use serde::Serialize;

/// One phase of a monitoring process, with practical tips.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct MonitoringStep {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tips: &'static [&'static str],
}

/// A recommended third-party monitoring tool.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Tool {
    pub name: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub url: &'static str,
}

pub const STEPS: &[MonitoringStep] = &[
    MonitoringStep {
        id: "framing",
        title: "1. Framing and definition",
        description: "Pin down your objectives and information needs.",
        tips: &[
            "Identify your priority themes",
            "Define your keywords (in every working language)",
            "Decide how often you monitor (daily, weekly)",
            "Know who the output is for",
        ],
    },
    MonitoringStep {
        id: "collection",
        title: "2. Collection and sourcing",
        description: "Set up the tools that capture relevant information.",
        tips: &[
            "Diversify sources (media, blogs, social networks, academic journals)",
            "Use push tools (alerts, newsletters, RSS feeds)",
            "Practice pull searching (regular manual queries)",
            "Organize your bookmarks",
        ],
    },
    MonitoringStep {
        id: "analysis",
        title: "3. Analysis and processing",
        description: "Sort, verify, and synthesize the incoming material.",
        tips: &[
            "Check source reliability (fact-checking)",
            "Discard documentary noise (off-topic items)",
            "Add value (summaries, commentary)",
            "Cross-check sources to confirm a fact",
        ],
    },
    MonitoringStep {
        id: "distribution",
        title: "4. Distribution and sharing",
        description: "Get useful information to the right people.",
        tips: &[
            "Fit the format to the reader (newsletter, dashboard, memo)",
            "Be concise and visual",
            "Provide a feedback channel",
            "Archive for the long term",
        ],
    },
];

pub const TOOLS: &[Tool] = &[
    Tool {
        name: "Feedly",
        category: "RSS feeds",
        description: "The reference tool for centralizing RSS feeds and following favorite sites.",
        url: "https://feedly.com",
    },
    Tool {
        name: "Google Alerts",
        category: "Alerts",
        description: "Notifications as soon as newly indexed content matches your keywords.",
        url: "https://google.com/alerts",
    },
    Tool {
        name: "Pocket",
        category: "Storage",
        description: "Save articles to read later, even offline.",
        url: "https://getpocket.com",
    },
    Tool {
        name: "Inoreader",
        category: "RSS feeds",
        description: "A powerful aggregator with advanced filtering.",
        url: "https://inoreader.com",
    },
    Tool {
        name: "Zotero",
        category: "Reference management",
        description: "Essential for academic and scientific monitoring.",
        url: "https://zotero.org",
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn step_ids_are_unique() {
        let ids: HashSet<&str> = STEPS.iter().map(|step| step.id).collect();
        assert_eq!(ids.len(), STEPS.len());
    }

    #[test]
    fn tool_urls_are_https() {
        assert!(TOOLS.iter().all(|tool| tool.url.starts_with("https://")));
    }
}
