use std::str;
use std::time::Duration;

use curl::easy::{Easy, List};
use serde::de::DeserializeOwned;
use serde_json;

use errors::*;

pub struct Response {
    pub code: u32,
    pub body: Vec<u8>,
}

pub fn get_json<T>(url: &str,
                   headers: &[String],
                   timeout: Option<Duration>,
                   not_found: &'static str) -> MyResult<T>
    where T: DeserializeOwned
{
    let response = get(url, headers, timeout)?;
    decode(url, response, not_found)
}

/// Checks the status of a finished request and decodes its body.
///
/// A 404 maps to `NotFound(not_found)` so callers can say which resource was
/// missing; any other code besides 200 is reported as `Upstream`.
pub fn decode<T>(url: &str,
                 response: Response,
                 not_found: &'static str) -> MyResult<T>
    where T: DeserializeOwned
{
    match response.code {
        200 => {}
        404 => return Err(MyErrorKind::NotFound(not_found).into()),
        code => return Err(MyErrorKind::Upstream(code).into()),
    }
    let json = str::from_utf8(&response.body).chain_err(|| {
        MyErrorKind::Decode(url.to_string())
    })?;
    serde_json::from_str(json).chain_err(|| {
        MyErrorKind::Decode(url.to_string())
    })
}

pub fn get(url: &str,
           headers: &[String],
           timeout: Option<Duration>) -> MyResult<Response> {
    let mut handle = Easy::new();
    let mut list = List::new();
    list.append(&format!("User-Agent: github-activity/{}",
                         env!("CARGO_PKG_VERSION")))?;
    for header in headers {
        list.append(header)?;
    }

    if let Some(timeout) = timeout {
        handle.timeout(timeout)?;
    }

    handle.http_headers(list)?;
    handle.get(true)?;
    handle.url(url)?;

    perform(handle, url)
}

pub fn perform(mut easy: Easy, url: &str) -> MyResult<Response> {
    debug!("fetching: {}", url);
    let mut body = Vec::new();
    {
        let mut transfer = easy.transfer();
        transfer.write_function(|buf| {
            body.extend_from_slice(buf);
            Ok(buf.len())
        })?;
        transfer.perform().chain_err(|| {
            MyErrorKind::Transport(url.to_string())
        })?;
    }

    let code = easy.response_code()?;
    debug!("finished: {} ({}, {} bytes)", url, code, body.len());
    Ok(Response {
        code: code,
        body: body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize, Debug)]
    struct Count {
        total_commits: u64,
    }

    fn response(code: u32, body: &str) -> Response {
        Response {
            code: code,
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn decodes_ok_body() {
        let count: Count = decode("u", response(200, r#"{"total_commits": 7}"#), "gone")
            .unwrap();
        assert_eq!(count.total_commits, 7);
    }

    #[test]
    fn not_found_carries_message() {
        let err = decode::<Count>("u", response(404, "{}"), "repository not found")
            .unwrap_err();
        match *err.kind() {
            MyErrorKind::NotFound(msg) => assert_eq!(msg, "repository not found"),
            ref other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(err.to_string(), "repository not found");
    }

    #[test]
    fn other_codes_are_upstream_errors() {
        for &code in &[201, 403, 500, 502] {
            let err = decode::<Count>("u", response(code, "{}"), "gone").unwrap_err();
            match *err.kind() {
                MyErrorKind::Upstream(c) => assert_eq!(c, code),
                ref other => panic!("unexpected error: {:?}", other),
            }
            assert_eq!(err.to_string(), format!("error fetching data: {}", code));
        }
    }

    #[test]
    fn status_is_checked_before_body() {
        let err = decode::<Count>("u", response(500, "<html>"), "gone").unwrap_err();
        match *err.kind() {
            MyErrorKind::Upstream(500) => {}
            ref other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn malformed_body_is_decode_error() {
        let err = decode::<Count>("https://x/compare", response(200, "not json"), "gone")
            .unwrap_err();
        match *err.kind() {
            MyErrorKind::Decode(ref url) => assert_eq!(url, "https://x/compare"),
            ref other => panic!("unexpected error: {:?}", other),
        }
        assert!(err.iter().nth(1).is_some(), "json error should be chained");
    }

    #[test]
    fn non_utf8_body_is_decode_error() {
        let resp = Response {
            code: 200,
            body: vec![b'{', 0xff, 0xfe, b'}'],
        };
        let err = decode::<Count>("u", resp, "gone").unwrap_err();
        match *err.kind() {
            MyErrorKind::Decode(_) => {}
            ref other => panic!("unexpected error: {:?}", other),
        }
        let cause = err.iter().nth(1).unwrap().to_string();
        assert!(cause.contains("invalid utf-8"), "{}", cause);
    }
}
