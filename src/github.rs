use std::time::Duration;

use config::Config;
use errors::*;
use http;

pub const DEFAULT_API: &'static str = "https://api.github.com";

/// One entry of a user's public event feed.
///
/// Payload fields the upstream record leaves out (or sets to `null`) come
/// through as empty strings.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(from = "RawEvent")]
pub struct Event {
    /// Full name of the repository, `owner/name`.
    pub repo: String,
    pub kind: EventKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EventKind {
    Create { ref_type: String },
    Push { before: String, head: String },
    Watch,
    Fork,
    PullRequest { action: String },
    Issues { action: String },
    Other { event_type: String },
}

#[derive(Deserialize, Debug)]
struct RawEvent {
    #[serde(rename = "type")]
    event_type: String,
    #[serde(default)]
    repo: Option<Repo>,
    #[serde(default)]
    payload: Option<Payload>,
}

#[derive(Deserialize, Debug, Default)]
struct Repo {
    #[serde(default)]
    name: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
struct Payload {
    #[serde(default)]
    action: Option<String>,
    #[serde(default)]
    ref_type: Option<String>,
    #[serde(default)]
    head: Option<String>,
    #[serde(default)]
    before: Option<String>,
}

impl From<RawEvent> for Event {
    fn from(raw: RawEvent) -> Event {
        let RawEvent { event_type, repo, payload } = raw;
        let payload = payload.unwrap_or_default();
        let kind = match &event_type[..] {
            "CreateEvent" => EventKind::Create {
                ref_type: payload.ref_type.unwrap_or_default(),
            },
            "PushEvent" => EventKind::Push {
                before: payload.before.unwrap_or_default(),
                head: payload.head.unwrap_or_default(),
            },
            "WatchEvent" => EventKind::Watch,
            "ForkEvent" => EventKind::Fork,
            "PullRequestEvent" => EventKind::PullRequest {
                action: payload.action.unwrap_or_default(),
            },
            "IssuesEvent" => EventKind::Issues {
                action: payload.action.unwrap_or_default(),
            },
            _ => EventKind::Other { event_type: event_type.clone() },
        };
        Event {
            repo: repo.unwrap_or_default().name.unwrap_or_default(),
            kind: kind,
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct Comparison {
    pub total_commits: u64,
}

pub struct Client {
    api: String,
    timeout: Option<Duration>,
}

impl Client {
    pub fn new(config: &Config) -> Client {
        Client {
            api: config.api_url.trim_end_matches('/').to_string(),
            timeout: config.timeout,
        }
    }

    pub fn user_events(&self, user: &str) -> MyResult<Vec<Event>> {
        let url = format!("/users/{}/events", user);
        self.get(&url, "user not found. please check username")
    }

    pub fn total_commits(&self,
                         repo: &str,
                         before: &str,
                         head: &str) -> MyResult<u64> {
        let url = format!("/repos/{}/compare/{}...{}", repo, before, head);
        let comparison: Comparison = self.get(&url, "repository not found")?;
        Ok(comparison.total_commits)
    }

    fn get<T>(&self, url: &str, not_found: &'static str) -> MyResult<T>
        where T: ::serde::de::DeserializeOwned
    {
        let headers = vec![
            "Accept: application/vnd.github.v3+json".to_string(),
        ];
        http::get_json(&format!("{}{}", self.api, url),
                       &headers,
                       self.timeout,
                       not_found)
    }
}
