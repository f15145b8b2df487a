//! User-Agent based visitor classification.
//!
//! A request is treated as automated when its lower-cased User-Agent contains
//! any entry of [`BOT_SIGNATURES`]. Everything else, including a missing or
//! empty header, is treated as a human browser.

/// Substrings identifying search engines, link-preview fetchers, HTTP client
/// libraries and generic crawlers. All entries are lower-case.
pub const BOT_SIGNATURES: &[&str] = &[
    "bot",
    "crawl",
    "spider",
    "slurp",
    "facebook",
    "google",
    "bing",
    "yahoo",
    "duckduckgo",
    "baidu",
    "yandex",
    "sogou",
    "exabot",
    "ia_archiver",
    "twitterbot",
    "telegrambot",
    "whatsapp",
    "mediapartners",
    "applebot",
    "embedly",
    "quora",
    "pinterest",
    "redditbot",
    "slackbot",
    "vkshare",
    "w3c_validator",
    "wget",
    "curl",
    "java",
    "libwww-perl",
    "python-requests",
    "httpclient",
    "aiohttp",
    "okhttp",
    "scrapy",
    "php",
    "go-http-client",
    "ruby",
    "node-fetch",
];

/// Classification result for a single request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visitor {
    Bot,
    Human,
}

/// Classifies a request by its User-Agent header value.
pub fn classify(user_agent: &str) -> Visitor {
    if matched_signature(user_agent).is_some() {
        Visitor::Bot
    } else {
        Visitor::Human
    }
}

/// Returns the first signature contained in `user_agent`, ignoring case.
pub fn matched_signature(user_agent: &str) -> Option<&'static str> {
    if user_agent.is_empty() {
        return None;
    }

    let normalized = user_agent.to_lowercase();
    BOT_SIGNATURES
        .iter()
        .copied()
        .find(|signature| normalized.contains(signature))
}
