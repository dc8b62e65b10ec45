use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener};
use std::sync::mpsc::{channel, Receiver};
use std::thread;

/// Serves `responses` in order, one per connection, and reports each
/// request path back over the returned channel.
pub fn serve(responses: Vec<(u32, &'static str)>) -> (SocketAddr, Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = channel();

    thread::spawn(move || {
        for (code, body) in responses {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break
                }
                request.extend_from_slice(&buf[..n]);
            }
            let request = String::from_utf8_lossy(&request).into_owned();
            let path = request.split_whitespace().nth(1).unwrap_or("").to_string();
            drop(tx.send(path));

            let response = format!("HTTP/1.1 {} Stub\r\n\
                                    Content-Type: application/json\r\n\
                                    Content-Length: {}\r\n\
                                    Connection: close\r\n\r\n{}",
                                   code,
                                   body.len(),
                                   body);
            stream.write_all(response.as_bytes()).unwrap();
        }
    });

    (addr, rx)
}
