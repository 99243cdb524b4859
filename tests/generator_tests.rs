// tests/generator_tests.rs

use std::sync::Arc;
use std::time::Duration;

use mockito::Matcher;
use reqwest::StatusCode;
use serde_json::json;
use url::Url;

use traffic_gen::client::RequestOutcome;
use traffic_gen::config::Config;
use traffic_gen::generator::Generator;
use traffic_gen::pacing::PacingPolicy;

fn config_for(server_url: &str) -> Config {
    let mut config = Config::default();
    config.target.url = Url::parse(&format!("{}/api/ai/generate", server_url)).unwrap();
    config
}

#[tokio::test]
async fn success_response_maps_to_ten_second_pacing() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/ai/generate")
        .match_body(Matcher::PartialJson(json!({
            "modelVersion": "gemini-2.0-flash"
        })))
        .with_status(200)
        .with_body("{\"text\":\"generated\"}")
        .create_async()
        .await;

    let config = config_for(&server.url());
    let generator = Generator::new(&config).unwrap();
    let policy = PacingPolicy::new(&config.pacing);

    let outcome = generator.run_once().await;

    mock.assert_async().await;
    assert!(outcome.is_success());
    assert_eq!(policy.delay_for(&outcome), Duration::from_secs(10));
}

#[tokio::test]
async fn rate_limit_response_maps_to_thirty_second_cooldown() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/api/ai/generate")
        .with_status(429)
        .with_body("Too Many Requests")
        .create_async()
        .await;

    let config = config_for(&server.url());
    let generator = Generator::new(&config).unwrap();
    let policy = PacingPolicy::new(&config.pacing);

    let outcome = generator.run_once().await;

    assert_eq!(outcome, RequestOutcome::RateLimited);
    assert_eq!(policy.delay_for(&outcome), Duration::from_secs(30));
}

#[tokio::test]
async fn server_error_maps_to_five_second_backoff_with_truncated_body() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/api/ai/generate")
        .with_status(500)
        .with_body("Internal Server Error")
        .create_async()
        .await;

    let config = config_for(&server.url());
    let generator = Generator::new(&config).unwrap();
    let policy = PacingPolicy::new(&config.pacing);

    let outcome = generator.run_once().await;

    match &outcome {
        RequestOutcome::Failed { status, body } => {
            assert_eq!(*status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body, "Internal Server Error");
            assert!(body.chars().count() <= 100);
        }
        other => panic!("expected Failed, got {:?}", other),
    }
    assert_eq!(policy.delay_for(&outcome), Duration::from_secs(5));
}

#[tokio::test]
async fn unreachable_endpoint_maps_to_five_second_backoff() {
    let mut config = Config::default();
    // Port 9 (discard) is assumed to have no listener.
    config.target.url = Url::parse("http://127.0.0.1:9/api/ai/generate").unwrap();

    let generator = Generator::new(&config).unwrap();
    let policy = PacingPolicy::new(&config.pacing);

    let outcome = generator.run_once().await;

    assert!(matches!(outcome, RequestOutcome::ConnectionError { .. }));
    assert_eq!(policy.delay_for(&outcome), Duration::from_secs(5));
}

#[tokio::test]
async fn payload_prompt_always_comes_from_the_configured_set() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/ai/generate")
        .match_body(Matcher::PartialJson(json!({
            "prompt": "Only prompt",
            "modelVersion": "gemini-2.0-flash"
        })))
        .with_status(200)
        .expect(5)
        .create_async()
        .await;

    let mut config = config_for(&server.url());
    config.workload.prompts = vec!["Only prompt".to_string()];

    let generator = Generator::new(&config).unwrap();
    for _ in 0..5 {
        let outcome = generator.run_once().await;
        assert!(outcome.is_success());
    }

    mock.assert_async().await;
}

#[tokio::test]
async fn iterations_are_independent_across_outcome_changes() {
    let mut server = mockito::Server::new_async().await;
    let failing = server
        .mock("POST", "/api/ai/generate")
        .with_status(503)
        .with_body("unavailable")
        .expect(1)
        .create_async()
        .await;

    let config = config_for(&server.url());
    let generator = Generator::new(&config).unwrap();

    let first = generator.run_once().await;
    assert!(matches!(first, RequestOutcome::Failed { .. }));
    failing.assert_async().await;

    // The endpoint recovering is all it takes for the next iteration to
    // succeed; nothing from the failed iteration carries forward.
    server
        .mock("POST", "/api/ai/generate")
        .with_status(200)
        .create_async()
        .await;

    let second = generator.run_once().await;
    assert!(second.is_success());
}

#[tokio::test]
async fn run_loop_stops_on_shutdown() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/api/ai/generate")
        .with_status(200)
        .expect_at_least(1)
        .create_async()
        .await;

    let mut config = config_for(&server.url());
    config.pacing.success_secs = 1;

    let generator = Arc::new(Generator::new(&config).unwrap());
    let runner = {
        let generator = generator.clone();
        tokio::spawn(async move {
            generator.run().await;
        })
    };

    tokio::time::sleep(Duration::from_millis(200)).await;
    generator.shutdown();

    tokio::time::timeout(Duration::from_secs(5), runner)
        .await
        .expect("run loop must exit after shutdown")
        .unwrap();
}
