#![recursion_limit = "1024"]

extern crate curl;
extern crate getopts;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;
#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate log;

pub mod config;
pub mod errors;
pub mod github;
pub mod http;
pub mod render;

use std::io;

use config::Config;
use errors::*;
use github::Client;

/// Fetches `config.username`'s public events and prints them to stdout.
pub fn run(config: &Config) -> MyResult<()> {
    let client = Client::new(config);
    let events = client.user_events(&config.username)?;
    debug!("{} events for {}", events.len(), config.username);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render::render(&mut out, &config.username, &events, &client)
}
