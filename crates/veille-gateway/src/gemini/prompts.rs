//! Prompt builders for the two research requests.

use serde_json::{Value, json};

/// Scope sentence used by the strategy prompt.
fn scope_sentence(scope: Option<&str>) -> String {
    match scope.map(str::trim).filter(|s| !s.is_empty()) {
        Some(scope) => format!("The target geographic scope is: {scope}."),
        None => String::from("The scope is worldwide."),
    }
}

pub fn strategy_prompt(topic: &str, context: &str, scope: Option<&str>, language: &str) -> String {
    format!(
        "As an expert in research methodology, design a thorough monitoring strategy.\n\
         Title: \"{topic}\"\n\
         Description: \"{context}\"\n\
         {scope}\n\n\
         Give advice on how to monitor this subject specifically within this area or at this scale.\n\
         Write every field in {language}.",
        scope = scope_sentence(scope),
    )
}

pub fn trends_prompt(
    topic: &str,
    keywords: &[String],
    context: Option<&str>,
    scope: Option<&str>,
    language: &str,
) -> String {
    let focus = match scope.map(str::trim).filter(|s| !s.is_empty()) {
        Some(scope) => format!(", focusing on the region/country: {scope}"),
        None => String::from(" (worldwide)"),
    };
    let context = context
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or("Strategic monitoring");
    let keywords = if keywords.is_empty() {
        String::new()
    } else {
        format!("Priority keywords: {}\n", keywords.join(", "))
    };

    format!(
        "Act as an expert documentary-monitoring analyst. Write a structured, in-depth report about: \"{topic}\"{focus}.\n\n\
         IMPORTANT: for every fact, figure or quotation you MUST cite the source inline using the Markdown format [Source name](URL). \
         Do not only list sources at the end; weave them into the text.\n\n\
         Report structure:\n\
         1. Introduction (current context)\n\
         2. Major developments and recent news (cite the source for each point)\n\
         3. Analysis of impacts and emerging trends\n\
         4. Conclusion and monitoring recommendations\n\n\
         Formatting:\n\
         - Headings with ## and ###\n\
         - Bullet lists for clarity\n\
         - Markdown links [Title](URL) required for every cited fact\n\
         - Bold for key terms\n\n\
         Subject: {topic}\n\
         Context: {context}\n\
         {keywords}\
         Write the report in {language}."
    )
}

/// Response schema for the strategy request.
pub fn strategy_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "advice": {
                "type": "STRING",
                "description": "Methodological analysis and strategic advice."
            },
            "suggestedKeywords": {
                "type": "ARRAY",
                "items": {"type": "STRING"},
                "description": "Precise keywords and recommended boolean queries."
            },
            "suggestedSources": {
                "type": "ARRAY",
                "items": {"type": "STRING"},
                "description": "Databases, journals and experts to follow."
            }
        },
        "required": ["advice", "suggestedKeywords", "suggestedSources"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_prompt_mentions_scope() {
        let prompt = strategy_prompt("Bees", "pollinators", Some("Brittany"), "French");
        assert!(prompt.contains("geographic scope is: Brittany."));
        assert!(prompt.contains("Write every field in French."));
    }

    #[test]
    fn strategy_prompt_defaults_to_worldwide() {
        let prompt = strategy_prompt("Bees", "", Some("   "), "English");
        assert!(prompt.contains("The scope is worldwide."));
    }

    #[test]
    fn trends_prompt_lists_keywords_and_context_fallback() {
        let keywords = vec![String::from("apis"), String::from("varroa")];
        let prompt = trends_prompt("Bees", &keywords, None, None, "French");
        assert!(prompt.contains("\"Bees\" (worldwide)."));
        assert!(prompt.contains("Priority keywords: apis, varroa\n"));
        assert!(prompt.contains("Context: Strategic monitoring\n"));
    }

    #[test]
    fn trends_prompt_without_keywords() {
        let prompt = trends_prompt("Bees", &[], Some("hives"), Some("Quebec"), "French");
        assert!(prompt.contains("focusing on the region/country: Quebec."));
        assert!(!prompt.contains("Priority keywords"));
        assert!(prompt.contains("Context: hives\n"));
    }

    #[test]
    fn schema_requires_all_fields() {
        let schema = strategy_schema();
        assert_eq!(
            schema["required"],
            json!(["advice", "suggestedKeywords", "suggestedSources"])
        );
    }
}
