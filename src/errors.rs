use std::io;

use curl;
use getopts;

error_chain! {
    types {
        MyError, MyErrorKind, MyChainErr, MyResult;
    }

    foreign_links {
        Curl(curl::Error);
        Io(io::Error);
        Options(getopts::Fail);
    }

    errors {
        Usage(msg: String) {
            description("usage error")
            display("{}", msg)
        }
        Transport(url: String) {
            description("network request failed")
            display("error making GET request to {}", url)
        }
        Decode(url: String) {
            description("malformed response body")
            display("error decoding JSON from {}", url)
        }
        NotFound(msg: &'static str) {
            description("resource not found")
            display("{}", msg)
        }
        Upstream(code: u32) {
            description("unexpected status code")
            display("error fetching data: {}", code)
        }
        EmptyActivity {
            description("no activity found")
            display("no activity found")
        }
    }
}
