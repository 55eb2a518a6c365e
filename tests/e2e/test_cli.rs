use crate::helpers::{fixtures, TestContext, API_KEY, SYNTHESIS_PATH, TOKEN_PATH};
use std::process::Output;
use tokio::process::Command;

async fn run_speak(ctx: &TestContext, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_speak"))
        .args(args)
        .env("SPEECH_TOKEN_URL", ctx.config.token_url.as_str())
        .env("SPEECH_SYNTHESIS_URL", ctx.config.synthesis_url.as_str())
        .env("RUST_LOG", "speak=debug")
        .output()
        .await
        .expect("binary runs")
}

#[tokio::test]
async fn it_should_print_usage_without_network_calls_when_text_is_missing() {
    let ctx = TestContext::new().await;
    ctx.mount_token(200, "issued-token", 0).await;
    ctx.mount_synthesis(200, fixtures::wav_bytes(), 0).await;

    for args in [vec![], vec![API_KEY]] {
        let output = run_speak(&ctx, &args).await;

        assert!(!output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Usage"), "stderr was: {}", stderr);
    }

    assert!(ctx.received_paths().await.is_empty());
}

#[tokio::test]
async fn it_should_write_audio_to_the_output_file() {
    let ctx = TestContext::new().await;
    ctx.mount_token(200, "issued-token", 1).await;
    ctx.mount_synthesis(200, fixtures::wav_bytes(), 1).await;

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("speech.wav");
    let out_arg = out.to_string_lossy().to_string();

    let output = run_speak(&ctx, &["--output", &out_arg, API_KEY, "hello", "there"]).await;

    assert!(
        output.status.success(),
        "stderr was: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(std::fs::read(&out).unwrap(), fixtures::wav_bytes());
    assert_eq!(
        ctx.received_paths().await,
        vec![TOKEN_PATH.to_string(), SYNTHESIS_PATH.to_string()]
    );

    let requests = ctx.server.received_requests().await.unwrap();
    let body = String::from_utf8_lossy(&requests[1].body).to_string();
    assert!(body.contains(">hello there</voice>"));
}

#[tokio::test]
async fn it_should_exit_non_zero_when_authentication_fails() {
    let ctx = TestContext::new().await;
    ctx.mount_token(401, "denied", 1).await;
    ctx.mount_synthesis(200, fixtures::wav_bytes(), 0).await;

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("speech.wav");
    let out_arg = out.to_string_lossy().to_string();

    let output = run_speak(&ctx, &["--output", &out_arg, API_KEY, "hello"]).await;

    assert_eq!(output.status.code(), Some(77));
    assert!(!out.exists());
    assert_eq!(ctx.received_paths().await, vec![TOKEN_PATH.to_string()]);
}
