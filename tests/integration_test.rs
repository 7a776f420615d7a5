//! Integration tests for the quiz room server using process-based testing.

use std::process::{Child, Command, Stdio};
use std::time::Duration;

use serde_json::{Value, json};

/// Helper struct to manage server process lifecycle
struct TestServer {
    process: Child,
    port: u16,
}

impl TestServer {
    /// Start a test server on the specified port and wait until it
    /// answers health checks
    async fn start(port: u16) -> Self {
        let process = Command::new("cargo")
            .args(["run", "--bin", "server", "--", "--port", &port.to_string()])
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to start server");

        let server = TestServer { process, port };

        // The first run may compile; poll health until the server is up
        let health_url = format!("{}/api/health", server.base_url());
        let client = reqwest::Client::new();
        for _ in 0..300 {
            if let Ok(response) = client.get(&health_url).send().await {
                if response.status().is_success() {
                    return server;
                }
            }
            tokio::time::sleep(Duration::from_millis(200)).await;
        }
        panic!("Server did not become healthy on port {}", port);
    }

    fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        // Kill the server process when the test ends
        let _ = self.process.kill();
        let _ = self.process.wait();
    }
}

/// Post one action to the room endpoint, returning (status, body)
async fn post_action(server: &TestServer, action: &str, params: Value) -> (u16, Value) {
    let response = reqwest::Client::new()
        .post(format!("{}/api/multiplayer", server.base_url()))
        .json(&json!({"action": action, "params": params}))
        .send()
        .await
        .expect("Failed to reach server");
    let status = response.status().as_u16();
    let body = response.json::<Value>().await.expect("Non-JSON body");
    (status, body)
}

#[tokio::test]
async fn test_full_game_flow_with_two_players() {
    // テスト項目: 作成 → 参加 → 開始 → 回答 → 進行 → 終了の一連の流れ
    // given (前提条件):
    let server = TestServer::start(18090).await;

    // when (操作): ホストがルームを作成する
    let (status, room) = post_action(
        &server,
        "createRoom",
        json!({
            "config": {
                "topic": "ecosystems",
                "grade": "6",
                "difficulty": "easy",
                "quizLength": 5,
            },
            "host": "alice",
        }),
    )
    .await;

    // then (期待する結果): lobby 状態のルームが返る
    assert_eq!(status, 200);
    assert_eq!(room["status"], "lobby");
    assert_eq!(room["host"], "alice");
    assert_eq!(room["quizLength"], 5);
    assert_eq!(room["currentQuestionIndex"], -1);
    assert_eq!(room["questions"].as_array().unwrap().len(), 5);
    let room_id = room["roomId"].as_str().unwrap().to_string();
    assert_eq!(room_id.len(), 6);

    // when (操作): bob が小文字のコードで参加する（大文字小文字は区別されない）
    let (status, joined) = post_action(
        &server,
        "joinRoom",
        json!({"roomId": room_id.to_lowercase(), "username": "bob"}),
    )
    .await;

    // then (期待する結果):
    assert_eq!(status, 200);
    assert_eq!(joined["players"], json!(["alice", "bob"]));

    // when (操作): ホスト以外が開始を試みる
    let (status, body) = post_action(
        &server,
        "startGame",
        json!({"roomId": room_id, "username": "bob"}),
    )
    .await;

    // then (期待する結果): 403 とエラーメッセージ
    assert_eq!(status, 403);
    assert!(body["error"].is_string());

    // when (操作): ホストが開始する
    let (status, started) = post_action(
        &server,
        "startGame",
        json!({"roomId": room_id, "username": "alice"}),
    )
    .await;

    // then (期待する結果): in-progress になり index が 0 に進む
    assert_eq!(status, 200);
    assert_eq!(started["status"], "in-progress");
    assert_eq!(started["currentQuestionIndex"], 0);

    // when (操作): bob が 5 秒で正答を提出する
    let (status, ack) = post_action(
        &server,
        "submitAnswer",
        json!({
            "roomId": room_id,
            "username": "bob",
            "questionIndex": 0,
            "isCorrect": true,
            "timeTaken": 5.0,
        }),
    )
    .await;

    // then (期待する結果): 1000 - 5 * 40 = 800 点が加算される
    assert_eq!(status, 200);
    assert_eq!(ack["ok"], true);
    let (_, state) = post_action(&server, "getRoomState", json!({"roomId": room_id})).await;
    let bob_score = state["scores"]
        .as_array()
        .unwrap()
        .iter()
        .find(|entry| entry["username"] == "bob")
        .unwrap()["score"]
        .clone();
    assert_eq!(bob_score, 800);

    // when (操作): 同じ問題に再提出する
    let (status, _) = post_action(
        &server,
        "submitAnswer",
        json!({
            "roomId": room_id,
            "username": "bob",
            "questionIndex": 0,
            "isCorrect": true,
            "timeTaken": 1.0,
        }),
    )
    .await;

    // then (期待する結果): 受理はされるが得点は変わらない
    assert_eq!(status, 200);
    let (_, state) = post_action(&server, "getRoomState", json!({"roomId": room_id})).await;
    let bob_score = state["scores"]
        .as_array()
        .unwrap()
        .iter()
        .find(|entry| entry["username"] == "bob")
        .unwrap()["score"]
        .clone();
    assert_eq!(bob_score, 800);

    // when (操作): ホストが最後の問題まで進め、さらにもう一度進める
    for expected_index in 1..=4 {
        let (status, body) = post_action(
            &server,
            "nextQuestion",
            json!({"roomId": room_id, "username": "alice"}),
        )
        .await;
        assert_eq!(status, 200);
        assert_eq!(body["status"], "in-progress");
        assert_eq!(body["currentQuestionIndex"], expected_index);
    }
    let (status, last) = post_action(
        &server,
        "nextQuestion",
        json!({"roomId": room_id, "username": "alice"}),
    )
    .await;

    // then (期待する結果): 最後の問題からの進行で finished になる
    assert_eq!(status, 200);
    assert_eq!(last["status"], "finished");
    assert_eq!(last["currentQuestionIndex"], 4);

    // bob が先頭でランキングされている
    assert_eq!(last["scores"][0]["username"], "bob");
    assert_eq!(last["scores"][0]["score"], 800);
}

#[tokio::test]
async fn test_unknown_room_returns_404() {
    // テスト項目: 存在しないルームコードで 404 が返る
    // given (前提条件):
    let server = TestServer::start(18091).await;

    // when (操作):
    let (status, body) = post_action(
        &server,
        "getRoomState",
        json!({"roomId": "ZZZZZZ"}),
    )
    .await;

    // then (期待する結果):
    assert_eq!(status, 404);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_join_is_rejected_after_game_start() {
    // テスト項目: 開始後のルームには参加できない
    // given (前提条件):
    let server = TestServer::start(18092).await;
    let (_, room) = post_action(
        &server,
        "createRoom",
        json!({
            "config": {
                "topic": "space",
                "grade": "7",
                "difficulty": "medium",
                "quizLength": 2,
            },
            "host": "alice",
        }),
    )
    .await;
    let room_id = room["roomId"].as_str().unwrap().to_string();

    // 開始前の再参加は冪等に成功し、重複登録されない
    let (status, rejoined) = post_action(
        &server,
        "joinRoom",
        json!({"roomId": room_id, "username": "alice"}),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(rejoined["players"], json!(["alice"]));

    post_action(
        &server,
        "startGame",
        json!({"roomId": room_id, "username": "alice"}),
    )
    .await;

    // when (操作):
    let (status, body) = post_action(
        &server,
        "joinRoom",
        json!({"roomId": room_id, "username": "carol"}),
    )
    .await;

    // then (期待する結果):
    assert_eq!(status, 403);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_non_member_submission_is_rejected() {
    // テスト項目: 参加していないユーザーの回答提出が拒否される
    // given (前提条件):
    let server = TestServer::start(18093).await;
    let (_, room) = post_action(
        &server,
        "createRoom",
        json!({
            "config": {
                "topic": "forces",
                "grade": "8",
                "difficulty": "hard",
                "quizLength": 2,
            },
            "host": "alice",
        }),
    )
    .await;
    let room_id = room["roomId"].as_str().unwrap().to_string();
    post_action(
        &server,
        "startGame",
        json!({"roomId": room_id, "username": "alice"}),
    )
    .await;

    // when (操作):
    let (status, body) = post_action(
        &server,
        "submitAnswer",
        json!({
            "roomId": room_id,
            "username": "mallory",
            "questionIndex": 0,
            "isCorrect": true,
            "timeTaken": 1.0,
        }),
    )
    .await;

    // then (期待する結果):
    assert_eq!(status, 403);
    assert!(body["error"].is_string());
}
