use assert_fs::prelude::*;
use predicates::prelude::*;
use std::collections::HashMap;
use std::fs;
use tokio::task;
use warp::Filter;
use warp::http::StatusCode;

fn bugs_response() -> serde_json::Value {
    serde_json::json!({
        "bugs": [
            {
                "id": 1386670,
                "priority": "P1",
                "status": "RESOLVED",
                "creation_time": "2018-01-01T09:12:00Z",
                "last_change_time": "2018-01-03T17:40:00Z"
            },
            {
                "id": 1386671,
                "priority": "P1",
                "status": "REOPENED",
                "creation_time": "2018-01-02T11:00:00Z",
                "last_change_time": "2018-01-02T12:00:00Z"
            },
            {
                "id": 1386672,
                "priority": "P2",
                "status": "NEW",
                "creation_time": "2018-01-03T08:00:00Z",
                "last_change_time": "2018-01-03T08:00:00Z"
            }
        ]
    })
}

async fn serve_bugs(status: StatusCode, body: serde_json::Value) -> std::net::SocketAddr {
    let bugs_route = warp::path("rest")
        .and(warp::path("bug"))
        .and(warp::path::end())
        .and(warp::get())
        .and(warp::query::<HashMap<String, String>>())
        .map(move |query: HashMap<String, String>| {
            let body = if query.get("blocks").map(|value| value.as_str()) == Some("1386669") {
                body.clone()
            } else {
                serde_json::json!({ "bugs": [] })
            };
            warp::reply::with_status(warp::reply::json(&body), status)
        });
    let (addr, server) = warp::serve(bugs_route).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);
    addr
}

fn write_config(socket_addr: std::net::SocketAddr) -> assert_fs::NamedTempFile {
    let config_yaml = format!(
        r#"
base_url: http://{socket_addr}/rest
tracking_bug_id: 1386669
priorities: [P1, P2]
start_date: 2018-01-01
"#
    );
    let config_file = assert_fs::NamedTempFile::new("bugzilla_config.yaml").unwrap();
    config_file.write_str(&config_yaml).unwrap();
    config_file
}

#[tokio::test]
async fn get_burndown_writes_csv_for_configured_priorities() {
    let addr = serve_bugs(StatusCode::OK, bugs_response()).await;
    let config_file = write_config(addr);
    let output_file = assert_fs::NamedTempFile::new("burndown.csv").unwrap();

    let config_arg = config_file.path().to_str().unwrap().to_string();
    let output_arg = output_file.path().to_str().unwrap().to_string();
    task::spawn_blocking(move || {
        let mut cmd = assert_cmd::cargo_bin_cmd!("burndown");
        cmd.args(["get-burndown", "-c", &config_arg, "-o", &output_arg, "-e", "2018-01-05"]);

        cmd.assert()
            .success()
            .stdout(predicate::str::contains("Burndown Summary"))
            .stdout(predicate::str::contains("Burndown data written to"));
    })
    .await
    .unwrap();

    let output = fs::read_to_string(output_file.path()).unwrap();
    assert_eq!(
        output,
        "Day,Count,Priority\n\
         2018-01-01,1,P1\n\
         2018-01-02,2,P1\n\
         2018-01-03,1,P1\n\
         2018-01-04,1,P1\n\
         2018-01-01,0,P2\n\
         2018-01-02,0,P2\n\
         2018-01-03,1,P2\n\
         2018-01-04,1,P2\n"
    );
}

#[tokio::test]
async fn get_burndown_fails_on_server_error() {
    let addr = serve_bugs(StatusCode::INTERNAL_SERVER_ERROR, serde_json::json!({})).await;
    let config_file = write_config(addr);
    let output_file = assert_fs::NamedTempFile::new("burndown.csv").unwrap();

    let config_arg = config_file.path().to_str().unwrap().to_string();
    let output_arg = output_file.path().to_str().unwrap().to_string();
    task::spawn_blocking(move || {
        let mut cmd = assert_cmd::cargo_bin_cmd!("burndown");
        cmd.args(["get-burndown", "-c", &config_arg, "-o", &output_arg]);

        cmd.assert()
            .failure()
            .stderr(predicate::str::contains("failed to fetch issues"));
    })
    .await
    .unwrap();

    output_file.assert(predicate::path::missing());
}

#[tokio::test]
async fn get_burndown_fails_on_not_found() {
    let addr = serve_bugs(StatusCode::NOT_FOUND, serde_json::json!({})).await;
    let config_file = write_config(addr);
    let output_file = assert_fs::NamedTempFile::new("burndown.csv").unwrap();

    let config_arg = config_file.path().to_str().unwrap().to_string();
    let output_arg = output_file.path().to_str().unwrap().to_string();
    task::spawn_blocking(move || {
        let mut cmd = assert_cmd::cargo_bin_cmd!("burndown");
        cmd.args(["get-burndown", "-c", &config_arg, "-o", &output_arg]);

        cmd.assert()
            .failure()
            .stderr(predicate::str::contains("failed to fetch issues"))
            .stderr(predicate::str::contains("404"));
    })
    .await
    .unwrap();

    output_file.assert(predicate::path::missing());
}

#[tokio::test]
async fn get_burndown_reports_bugzilla_error_payload() {
    let body = serde_json::json!({
        "error": true,
        "code": 32000,
        "message": "The requested bug list is too large."
    });
    let addr = serve_bugs(StatusCode::OK, body).await;
    let config_file = write_config(addr);
    let output_file = assert_fs::NamedTempFile::new("burndown.csv").unwrap();

    let config_arg = config_file.path().to_str().unwrap().to_string();
    let output_arg = output_file.path().to_str().unwrap().to_string();
    task::spawn_blocking(move || {
        let mut cmd = assert_cmd::cargo_bin_cmd!("burndown");
        cmd.args(["get-burndown", "-c", &config_arg, "-o", &output_arg]);

        cmd.assert()
            .failure()
            .stderr(predicate::str::contains("The requested bug list is too large."));
    })
    .await
    .unwrap();
}

#[tokio::test]
async fn get_burndown_requires_tracking_bug() {
    let config_file = assert_fs::NamedTempFile::new("incomplete_config.yaml").unwrap();
    config_file
        .write_str("base_url: http://127.0.0.1:9/rest\n")
        .unwrap();
    let output_file = assert_fs::NamedTempFile::new("burndown.csv").unwrap();

    let config_arg = config_file.path().to_str().unwrap().to_string();
    let output_arg = output_file.path().to_str().unwrap().to_string();
    task::spawn_blocking(move || {
        let mut cmd = assert_cmd::cargo_bin_cmd!("burndown");
        cmd.args(["get-burndown", "-c", &config_arg, "-o", &output_arg]);

        cmd.assert()
            .failure()
            .stderr(predicate::str::contains("tracking_bug_id"));
    })
    .await
    .unwrap();
}
