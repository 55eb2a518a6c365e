use crate::helpers::{TestContext, API_KEY, TOKEN_PATH};
use speak::domain::tts::TtsServiceError;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn it_should_send_the_api_key_in_the_subscription_header() {
    let ctx = TestContext::new().await;

    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .and(header("Ocp-Apim-Subscription-Key", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_string("issued-token"))
        .expect(1)
        .mount(&ctx.server)
        .await;
    ctx.mount_synthesis(200, crate::helpers::fixtures::wav_bytes(), 1)
        .await;

    ctx.service.speak(API_KEY, "hello").await.unwrap();
}

#[tokio::test]
async fn it_should_not_synthesize_when_authentication_fails() {
    let ctx = TestContext::new().await;
    ctx.mount_token(401, "Access denied due to invalid subscription key.", 1)
        .await;
    ctx.mount_synthesis(200, crate::helpers::fixtures::wav_bytes(), 0)
        .await;

    let err = ctx.service.speak(API_KEY, "hello").await.unwrap_err();

    assert!(matches!(err, TtsServiceError::Authentication(_)));
    assert!(err.to_string().contains("401"));
    assert_eq!(ctx.received_paths().await, vec![TOKEN_PATH.to_string()]);
    assert!(ctx.sink.played().is_empty());
}

#[tokio::test]
async fn it_should_treat_an_empty_token_as_a_failure() {
    let ctx = TestContext::new().await;
    ctx.mount_token(200, "   ", 1).await;
    ctx.mount_synthesis(200, crate::helpers::fixtures::wav_bytes(), 0)
        .await;

    let err = ctx.service.speak(API_KEY, "hello").await.unwrap_err();

    assert!(matches!(err, TtsServiceError::Authentication(_)));
}

#[tokio::test]
async fn it_should_reuse_the_token_for_the_same_key() {
    let ctx = TestContext::new().await;
    ctx.mount_token(200, "issued-token", 1).await;
    ctx.mount_synthesis(200, crate::helpers::fixtures::wav_bytes(), 2)
        .await;

    ctx.service.speak(API_KEY, "first").await.unwrap();
    ctx.service.speak(API_KEY, "second").await.unwrap();

    let paths = ctx.received_paths().await;
    assert_eq!(paths.iter().filter(|p| *p == TOKEN_PATH).count(), 1);
    assert_eq!(ctx.sink.played().len(), 2);
}
