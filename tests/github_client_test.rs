use std::io::Read;
use std::thread;

use autorelease::hosting::{GitHubClient, NewRelease, ReleaseHost, RepoSlug};
use autorelease::ReleaseError;
use tiny_http::{Header, Response, Server, StatusCode};

struct CapturedRequest {
    method: String,
    url: String,
    authorization: Option<String>,
    body: serde_json::Value,
}

fn spawn_api(status: u16, response_body: &'static str) -> (String, thread::JoinHandle<CapturedRequest>) {
    let server = Server::http("127.0.0.1:0").expect("server");
    let base_url = format!("http://{}", server.server_addr());

    let handle = thread::spawn(move || {
        let mut req = server.recv().expect("request");

        let mut raw = String::new();
        req.as_reader().read_to_string(&mut raw).expect("body");

        let authorization = req
            .headers()
            .iter()
            .find(|h| h.field.equiv("Authorization"))
            .map(|h| h.value.to_string());

        let captured = CapturedRequest {
            method: req.method().to_string(),
            url: req.url().to_string(),
            authorization,
            body: serde_json::from_str(&raw).expect("json body"),
        };

        let header = Header::from_bytes("Content-Type", "application/json").expect("header");
        let response = Response::from_string(response_body)
            .with_status_code(StatusCode(status))
            .with_header(header);
        req.respond(response).expect("respond");

        captured
    });

    (base_url, handle)
}

fn release() -> NewRelease {
    NewRelease {
        slug: RepoSlug::parse("octo/demo").unwrap(),
        tag_name: "v1.2.0".to_string(),
        title: "v1.2.0".to_string(),
        body: "- Added things".to_string(),
        draft: false,
        prerelease: true,
    }
}

#[test]
fn test_create_release_success() {
    let (base_url, handle) = spawn_api(
        201,
        r#"{"id": 1234, "html_url": "https://github.com/octo/demo/releases/tag/v1.2.0"}"#,
    );

    let client = GitHubClient::new(&base_url, "secret-token").unwrap();
    let created = client.create_release(&release()).unwrap();

    assert_eq!(created.id, 1234);
    assert_eq!(
        created.url,
        "https://github.com/octo/demo/releases/tag/v1.2.0"
    );

    let captured = handle.join().expect("join server");
    assert_eq!(captured.method, "POST");
    assert_eq!(captured.url, "/repos/octo/demo/releases");
    assert_eq!(captured.authorization.as_deref(), Some("Bearer secret-token"));
    assert_eq!(captured.body["tag_name"], "v1.2.0");
    assert_eq!(captured.body["name"], "v1.2.0");
    assert_eq!(captured.body["body"], "- Added things");
    assert_eq!(captured.body["draft"], false);
    assert_eq!(captured.body["prerelease"], true);
}

#[test]
fn test_create_release_auth_failure() {
    let (base_url, handle) = spawn_api(401, r#"{"message": "Bad credentials"}"#);

    let client = GitHubClient::new(&base_url, "wrong").unwrap();
    let err = client.create_release(&release()).unwrap_err();

    assert!(matches!(err, ReleaseError::Api(_)));
    let msg = err.to_string();
    assert!(msg.contains("401"), "got: {}", msg);
    assert!(msg.contains("Bad credentials"), "got: {}", msg);

    handle.join().expect("join server");
}

#[test]
fn test_create_release_unreachable_host() {
    let client = GitHubClient::new("http://127.0.0.1:9", "token").unwrap();
    let err = client.create_release(&release()).unwrap_err();
    assert!(matches!(err, ReleaseError::Api(_)));
}
