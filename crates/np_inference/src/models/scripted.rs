use async_trait::async_trait;
use np_core::{Error, GroundingChunk, Result, WebSource};
use std::collections::VecDeque;
use std::fmt;
use std::sync::Mutex;
use std::time::Duration;

use super::{GenerateRequest, GenerateResponse, Provider};

type Responder = fn(&GenerateRequest) -> GenerateResponse;

#[derive(Debug, Clone)]
enum Outcome {
    Reply(GenerateResponse),
    Fail { status: u16, message: String },
}

#[derive(Debug, Clone)]
struct Step {
    outcome: Outcome,
    delay: Option<Duration>,
}

/// Provider that plays back queued outcomes in order and records every
/// request it sees. Once the queue is drained it falls back to a responder,
/// or fails when there is none. The demo provider records nothing.
pub struct ScriptedProvider {
    steps: Mutex<VecDeque<Step>>,
    requests: Mutex<Vec<GenerateRequest>>,
    recording: bool,
    fallback: Option<Responder>,
}

impl fmt::Debug for ScriptedProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScriptedProvider")
            .field("pending", &self.pending())
            .field("fallback", &self.fallback.is_some())
            .finish()
    }
}

impl Default for ScriptedProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self {
            steps: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
            recording: true,
            fallback: None,
        }
    }

    /// Canned Nigerian headlines, summaries and answers for offline runs.
    pub fn demo() -> Self {
        Self {
            recording: false,
            fallback: Some(demo_response),
            ..Self::new()
        }
    }

    pub fn reply(self, text: impl Into<String>) -> Self {
        self.push(Outcome::Reply(GenerateResponse::text(text)), None)
    }

    pub fn reply_with(self, response: GenerateResponse) -> Self {
        self.push(Outcome::Reply(response), None)
    }

    pub fn reply_after(self, delay: Duration, text: impl Into<String>) -> Self {
        self.push(Outcome::Reply(GenerateResponse::text(text)), Some(delay))
    }

    pub fn fail(self, status: u16, message: impl Into<String>) -> Self {
        self.push(
            Outcome::Fail {
                status,
                message: message.into(),
            },
            None,
        )
    }

    fn push(self, outcome: Outcome, delay: Option<Duration>) -> Self {
        self.steps
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push_back(Step { outcome, delay });
        self
    }

    pub fn pending(&self) -> usize {
        self.steps
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl Provider for ScriptedProvider {
    fn name(&self) -> &str {
        "Scripted"
    }

    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse> {
        if self.recording {
            self.requests
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner())
                .push(request.clone());
        }

        let step = self
            .steps
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .pop_front();

        let Some(step) = step else {
            return match self.fallback {
                Some(responder) => Ok(responder(request)),
                None => Err(Error::provider("scripted provider has no response queued")),
            };
        };

        if let Some(delay) = step.delay {
            tokio::time::sleep(delay).await;
        }
        match step.outcome {
            Outcome::Reply(response) => Ok(response),
            Outcome::Fail { status, message } => Err(Error::Provider { status, message }),
        }
    }
}

const DEMO_HEADLINES: [(&str, &str, &str, &str); 9] = [
    ("Naira firms up against dollar at official window", "Business", "Punch NG", "punchng.com/naira-firms-up"),
    ("Senate passes revised electoral act amendment", "Politics", "Vanguard", "https://www.vanguardngr.com/electoral-act"),
    ("Lagos unveils new rail timetable for Blue Line", "Metro", "The Cable", "https://www.thecable.ng/blue-line"),
    ("Super Eagles name squad for AFCON qualifiers", "Sports", "Pulse NG", "https://www.pulse.ng/sports/super-eagles"),
    ("Nollywood film tops West African box office", "Entertainment", "Linda Ikeji", "https://www.lindaikejisblog.com/nollywood"),
    ("Fintech startup raises Series B to expand payments", "Technology", "TechCabal", "https://techcabal.com/series-b"),
    ("CBN holds benchmark interest rate steady", "Business", "Daily Trust", "https://dailytrust.com/cbn-rate"),
    ("Abuja hosts regional security summit", "Politics", "Punch NG", "https://punchng.com/security-summit"),
    ("Afrobeats star announces stadium tour", "Entertainment", "Pulse NG", "https://www.pulse.ng/afrobeats-tour"),
];

fn demo_response(request: &GenerateRequest) -> GenerateResponse {
    let prompt = request.contents.as_str();
    if prompt.contains("trending news stories") {
        let items: Vec<serde_json::Value> = DEMO_HEADLINES
            .iter()
            .enumerate()
            .filter(|(_, (_, category, _, _))| {
                !prompt.contains("related to") || prompt.contains(&format!("\"{}\"", category))
            })
            .map(|(i, (title, category, source, url))| {
                serde_json::json!({
                    "title": title,
                    "summary": format!("Developing story from {}, with more updates expected through the day.", source),
                    "category": category,
                    "time": format!("{}h ago", i + 1),
                    "source": source,
                    "url": url,
                })
            })
            .collect();
        // fenced on purpose: the real provider does this often
        return GenerateResponse::text(format!(
            "```json\n{}\n```",
            serde_json::Value::Array(items)
        ));
    }

    if prompt.starts_with("Research the news article") {
        return GenerateResponse::text(
            serde_json::json!({
                "points": [
                    "The story was confirmed by multiple Nigerian outlets.",
                    "Officials say further details will follow this week.",
                    "Analysts expect knock-on effects for households."
                ],
                "whyItMatters": "It shapes everyday decisions for millions of Nigerians."
            })
            .to_string(),
        );
    }

    GenerateResponse {
        text: Some(format!(
            "**{}** is a popular search in Nigeria right now.\n\n\
             - Coverage is led by Lagos and Abuja outlets\n\
             - Interest peaked over the last 24 hours\n\n\
             Running offline: these are demo results.",
            request.contents.trim()
        )),
        grounding_chunks: vec![
            GroundingChunk {
                web: Some(WebSource::new("https://punchng.com", "punchng.com")),
            },
            GroundingChunk {
                web: Some(WebSource::new("https://www.thecable.ng", "thecable.ng")),
            },
        ],
    }
}
