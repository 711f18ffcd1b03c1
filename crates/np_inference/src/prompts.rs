pub const MODEL_NAME: &str = "gemini-2.5-flash";

/// Answer text used when a search comes back without any text.
pub const NO_RESULTS_TEXT: &str = "No results found.";

/// Raw news payload standing in for "nothing came back".
pub const EMPTY_NEWS_JSON: &str = "[]";

pub fn search_system_instruction() -> &'static str {
    "You are Naijpedia, a premium Nigerian search engine. Provide concise, accurate, and relevant answers \
     specifically tailored to a Nigerian context where applicable. Format the output clearly."
}

pub fn trending_news_prompt(category: &str) -> String {
    let category = category.trim();
    let scope = if category.is_empty() || category.eq_ignore_ascii_case("All") {
        String::new()
    } else {
        format!("related to \"{}\" ", category)
    };

    format!(
        "Perform a Google Search for the top 9 trending news stories in Nigeria right now {scope}from authentic \
         Nigerian sources (e.g., Punch, Vanguard, Pulse NG, The Cable, Daily Trust, Linda Ikeji).\n\n\
         Return ONLY a raw JSON array of objects (no markdown, no code fences) with the following exact keys:\n\
         - \"title\": The exact headline of the article.\n\
         - \"summary\": A short, engaging 1-sentence teaser (approx 15-20 words) to display on the card.\n\
         - \"category\": The category (e.g., Politics, Entertainment, Metro, Sports).\n\
         - \"time\": relative time (e.g., \"1h ago\").\n\
         - \"source\": The name of the publisher (e.g., \"Punch NG\").\n\
         - \"url\": The DIRECT, ABSOLUTE URL to the article starting with \"https://\". Do not use relative paths.\n"
    )
}

pub fn article_summary_prompt(title: &str, source: &str) -> String {
    format!(
        "Research the news article titled \"{title}\" from \"{source}\".\n\n\
         Provide a concise summary in strict JSON format (no markdown, no code fences) with:\n\
         1. \"points\": An array of 3 distinct, factual bullet points summarizing the key details.\n\
         2. \"whyItMatters\": A single sentence explaining why this news is significant to a Nigerian audience.\n"
    )
}
