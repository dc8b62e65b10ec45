extern crate env_logger;
extern crate github_activity;

use std::env;
use std::io::{self, Write};
use std::process;

use github_activity::config::{self, Command};
use github_activity::errors::*;

fn main() {
    drop(env_logger::try_init());
    let program = env::args().next().unwrap_or_else(|| "github-activity".to_string());
    let args = env::args().skip(1).collect::<Vec<_>>();

    let res = config::parse(&args).and_then(|command| {
        match command {
            Command::Help => {
                print!("{}", config::usage(&program));
                Ok(())
            }
            Command::Run(config) => github_activity::run(&config),
        }
    });

    if let Err(e) = res {
        let stderr = io::stderr();
        let mut stderr = stderr.lock();
        drop(writeln!(stderr, "error: {}", e));
        for cause in e.iter().skip(1) {
            drop(writeln!(stderr, "caused by: {}", cause));
        }
        match *e.kind() {
            MyErrorKind::Usage(_) | MyErrorKind::Options(_) => {
                drop(write!(stderr, "\n{}", config::usage(&program)));
            }
            _ => {}
        }
        process::exit(1);
    }
}
