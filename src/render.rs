use std::io::Write;

use errors::*;
use github::{Client, Event, EventKind};

/// Source of commit counts for push events.
pub trait CommitCounter {
    fn total_commits(&self, repo: &str, before: &str, head: &str) -> MyResult<u64>;
}

impl CommitCounter for Client {
    fn total_commits(&self, repo: &str, before: &str, head: &str) -> MyResult<u64> {
        Client::total_commits(self, repo, before, head)
    }
}

/// Writes the activity report for `user`, one line per event.
///
/// Lines are flushed to `out` as they are produced, so a failed commit
/// lookup leaves everything before the failing push event in place.
pub fn render<W, C>(out: &mut W,
                    user: &str,
                    events: &[Event],
                    counter: &C) -> MyResult<()>
    where W: Write,
          C: CommitCounter + ?Sized,
{
    if events.is_empty() {
        return Err(MyErrorKind::EmptyActivity.into())
    }

    writeln!(out)?;
    writeln!(out, "{}'s recent activity", user)?;
    writeln!(out)?;

    for event in events {
        let line = line(event, counter)?;
        writeln!(out, "{}", line)?;
        out.flush()?;
    }
    Ok(())
}

pub fn line<C>(event: &Event, counter: &C) -> MyResult<String>
    where C: CommitCounter + ?Sized,
{
    let repo = &event.repo;
    let line = match event.kind {
        EventKind::Create { ref ref_type } => {
            format!("- Created a new {} {}", ref_type, repo)
        }
        EventKind::Push { ref before, ref head } => {
            let count = counter.total_commits(repo, before, head)?;
            format!("- Pushed {} commits to {}", count, repo)
        }
        EventKind::Watch => format!("- Starred repository {}", repo),
        EventKind::Fork => format!("- Forked repository {}", repo),
        EventKind::PullRequest { ref action } => {
            format!("- {} pull request in {}", action, repo)
        }
        EventKind::Issues { ref action } => {
            format!("- {} an issue in {}", action, repo)
        }
        EventKind::Other { ref event_type } => {
            format!("- {} in {}", event_type, repo)
        }
    };
    Ok(line)
}
