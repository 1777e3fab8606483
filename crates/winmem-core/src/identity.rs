use serde::{Deserialize, Serialize};

/// Base window title; every launcher window starts with it.
pub const BASE_TITLE: &str = "SimpleAI";

/// AI chat services the launcher can host, one window each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Service {
    ChatGpt,
    Claude,
    Copilot,
    Deepseek,
    Gemini,
    Grok,
    Meta,
    Perplexity,
}

impl Service {
    pub const ALL: [Service; 8] = [
        Service::ChatGpt,
        Service::Claude,
        Service::Copilot,
        Service::Deepseek,
        Service::Gemini,
        Service::Grok,
        Service::Meta,
        Service::Perplexity,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Service::ChatGpt => "chatgpt",
            Service::Claude => "claude",
            Service::Copilot => "copilot",
            Service::Deepseek => "deepseek",
            Service::Gemini => "gemini",
            Service::Grok => "grok",
            Service::Meta => "meta",
            Service::Perplexity => "perplexity",
        }
    }

    /// Label shown in the window title.
    pub fn label(&self) -> &'static str {
        match self {
            Service::ChatGpt => "ChatGPT",
            Service::Claude => "Claude (Sonnet)",
            Service::Copilot => "Copilot",
            Service::Deepseek => "Deepseek",
            Service::Gemini => "Gemini",
            Service::Grok => "Grok",
            Service::Meta => "Meta AI",
            Service::Perplexity => "Perplexity",
        }
    }

    /// Window title, which doubles as the geometry key.
    pub fn window_title(&self) -> String {
        format!("{BASE_TITLE} - {}", self.label())
    }
}

impl std::fmt::Display for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Service {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        Service::ALL
            .into_iter()
            .find(|service| service.as_str() == lowered)
            .ok_or_else(|| {
                format!(
                    "Unknown service '{}'. Known services: chatgpt, claude, copilot, deepseek, gemini, grok, meta, perplexity",
                    s
                )
            })
    }
}

/// Geometry key for a window opened for `service`.
///
/// No service, or one the launcher does not know, maps to the bare base title.
pub fn window_identity(service: Option<&str>) -> String {
    match service.map(str::parse::<Service>) {
        Some(Ok(service)) => service.window_title(),
        _ => BASE_TITLE.to_string(),
    }
}
