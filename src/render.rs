use crate::github::models::Event;

/// The event types that get a dedicated summary line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind<'a> {
    Push,
    Issues,
    Watch,
    Create,
    Other(&'a str),
}

impl<'a> EventKind<'a> {
    pub fn parse(kind: &'a str) -> Self {
        match kind {
            "PushEvent" => EventKind::Push,
            "IssuesEvent" => EventKind::Issues,
            "WatchEvent" => EventKind::Watch,
            "CreateEvent" => EventKind::Create,
            other => EventKind::Other(other),
        }
    }

    pub fn as_str(&self) -> &'a str {
        match *self {
            EventKind::Push => "PushEvent",
            EventKind::Issues => "IssuesEvent",
            EventKind::Watch => "WatchEvent",
            EventKind::Create => "CreateEvent",
            EventKind::Other(kind) => kind,
        }
    }
}

/// Summary lines for `events`, in order. Produced lazily, one event at a time.
pub fn render<'a, I>(events: I) -> impl Iterator<Item = String> + 'a
where
    I: IntoIterator<Item = &'a Event>,
    I::IntoIter: 'a,
{
    events.into_iter().filter_map(render_event)
}

/// A single summary line. `None` only for a push whose payload has no
/// `commits` array.
pub fn render_event(event: &Event) -> Option<String> {
    let repo = &event.repo.name;
    let payload = &event.payload;

    let line = match EventKind::parse(&event.kind) {
        EventKind::Push => {
            let Some(commits) = payload.array("commits") else {
                tracing::debug!(repo = %repo, "skipping PushEvent without a commits array");
                return None;
            };
            format!("- Pushed {} commits to {repo}", commits.len())
        }
        EventKind::Issues => {
            let action = payload.str("action").unwrap_or_default();
            format!("- {} an issue in {repo}", capitalize(action))
        }
        EventKind::Watch => format!("- Starred {repo}"),
        EventKind::Create => {
            let ref_type = payload.str("ref_type").unwrap_or_default();
            format!("- Created a new {ref_type} in {repo}")
        }
        other @ EventKind::Other(_) => format!("- {} on {repo}", other.as_str()),
    };

    Some(line)
}

/// Uppercases the first character and leaves the rest alone.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
