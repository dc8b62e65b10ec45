use std::time::Duration;

use getopts::Options;

use errors::*;
use github::DEFAULT_API;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub username: String,
    pub api_url: String,
    /// Per-request limit; `None` waits forever.
    pub timeout: Option<Duration>,
}

#[derive(Debug, PartialEq)]
pub enum Command {
    Help,
    Run(Config),
}

fn options() -> Options {
    let mut opts = Options::new();
    opts.optflag("h", "help", "print this help menu");
    opts.optopt("t",
                "timeout",
                &format!("request timeout in seconds, 0 for none (default {})",
                         DEFAULT_TIMEOUT_SECS),
                "SECS");
    opts.optopt("",
                "api-url",
                &format!("GitHub API base URL (default {})", DEFAULT_API),
                "URL");
    opts
}

pub fn usage(program: &str) -> String {
    let brief = format!("Usage: {} [options] <username>", program);
    options().usage(&brief)
}

/// Parses the arguments following the program name.
pub fn parse(args: &[String]) -> MyResult<Command> {
    let matches = options().parse(args)?;
    if matches.opt_present("h") {
        return Ok(Command::Help)
    }

    let username = match matches.free.first() {
        Some(name) if !name.is_empty() => name.clone(),
        _ => {
            let msg = "please provide a github username".to_string();
            return Err(MyErrorKind::Usage(msg).into())
        }
    };

    let timeout = match matches.opt_str("timeout") {
        Some(s) => {
            let secs = s.parse::<u64>().map_err(|_| {
                MyErrorKind::Usage(format!("invalid timeout: {}", s))
            })?;
            if secs == 0 { None } else { Some(Duration::from_secs(secs)) }
        }
        None => Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
    };

    Ok(Command::Run(Config {
        username: username,
        api_url: matches.opt_str("api-url").unwrap_or_else(|| DEFAULT_API.to_string()),
        timeout: timeout,
    }))
}
