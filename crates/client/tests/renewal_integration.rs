//! Integration tests for the session-renewal pipeline
//!
//! Drives the client against a mock backend and checks the coordination
//! properties: single-flight renewal under concurrency, at-most-one replay
//! per request, consistent batch failure, and untouched pass-through for
//! ordinary errors.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures::future::join_all;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};
use zapwallet_client::{SessionLostHook, WalletClient, WalletError};

const RENEWAL_PATH: &str = "/auth/refresh-token";

fn expired_body() -> serde_json::Value {
    serde_json::json!({
        "statusCode": 500,
        "success": false,
        "message": "jwt expired"
    })
}

fn ok_envelope(data: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "statusCode": 200,
        "success": true,
        "message": "ok",
        "data": data
    })
}

fn client_for(server: &MockServer) -> WalletClient {
    WalletClient::builder().base_url(server.uri()).build().expect("client")
}

async fn renewal_calls(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|request| request.url.path() == RENEWAL_PATH)
        .count()
}

struct CountingHook {
    fired: AtomicUsize,
}

#[async_trait]
impl SessionLostHook for CountingHook {
    async fn session_lost(&self, _error: &WalletError) {
        self.fired.fetch_add(1, Ordering::SeqCst);
    }
}

/// Mounts an endpoint whose first attempt fails with the expired-session
/// signal and whose replay succeeds with the given payload.
async fn mount_expiring_endpoint(server: &MockServer, route: &str, data: serde_json::Value) {
    let attempts = AtomicUsize::new(0);
    let expired = expired_body();
    let ok = ok_envelope(data);
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(move |_req: &Request| -> ResponseTemplate {
            if attempts.fetch_add(1, Ordering::SeqCst) == 0 {
                ResponseTemplate::new(500).set_body_json(expired.clone())
            } else {
                ResponseTemplate::new(200).set_body_json(ok.clone())
            }
        })
        .mount(server)
        .await;
}

/// Scenario A: five requests hit an expired session concurrently while no
/// renewal is in flight.
///
/// Expectations:
/// - the renewal endpoint is called exactly once, regardless of N
/// - every caller receives the replayed outcome of its own request
#[tokio::test]
async fn five_concurrent_expiries_trigger_a_single_renewal() {
    let server = MockServer::start().await;

    for index in 0..5 {
        mount_expiring_endpoint(
            &server,
            &format!("/ledger/{index}"),
            serde_json::json!({ "index": index }),
        )
        .await;
    }

    // Slow renewal keeps the epoch open until every caller has queued.
    Mock::given(method("POST"))
        .and(path(RENEWAL_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(200))
                .set_body_json(ok_envelope(serde_json::Value::Null)),
        )
        .mount(&server)
        .await;

    let client = Arc::new(client_for(&server));
    let calls = (0..5).map(|index| {
        let client = client.clone();
        async move {
            let data: serde_json::Value =
                client.get(&format!("/ledger/{index}")).await.expect("replayed outcome");
            (index, data)
        }
    });

    for (index, data) in join_all(calls).await {
        assert_eq!(data["index"], index, "caller {index} got someone else's result");
    }
    assert_eq!(renewal_calls(&server).await, 1);
}

/// Scenario B: a request fails with the expired signal, is replayed after a
/// successful renewal, and fails with the same signal again.
///
/// Expectations:
/// - the second failure is returned to the caller as a plain API error
/// - no second renewal attempt is made (no infinite loop)
#[tokio::test]
async fn second_expiry_on_replayed_request_is_terminal() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wallet/my-wallet"))
        .respond_with(ResponseTemplate::new(500).set_body_json(expired_body()))
        .expect(2) // first attempt + exactly one replay
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(RENEWAL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(serde_json::Value::Null)))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error =
        client.get::<serde_json::Value>("/wallet/my-wallet").await.expect_err("terminal failure");

    assert!(
        matches!(&error, WalletError::Api { status: 500, message } if message == "jwt expired"),
        "expected the raw API error, got {error:?}"
    );
    assert_eq!(renewal_calls(&server).await, 1);
}

/// Scenario C: the renewal call itself fails.
///
/// Expectations:
/// - every queued caller (and the driver) rejects with a renewal failure
/// - none of the original requests is replayed
/// - the session-lost hook fires exactly once, not once per caller
/// - the coordinator returns to idle: a later expiry starts a fresh epoch
#[tokio::test]
async fn failed_renewal_rejects_the_whole_batch_and_fires_the_hook_once() {
    let server = MockServer::start().await;

    for index in 0..3 {
        Mock::given(method("GET"))
            .and(path(format!("/ledger/{index}")))
            .respond_with(ResponseTemplate::new(500).set_body_json(expired_body()))
            .mount(&server)
            .await;
    }
    Mock::given(method("POST"))
        .and(path(RENEWAL_PATH))
        .respond_with(
            ResponseTemplate::new(503)
                .set_delay(Duration::from_millis(200))
                .set_body_string("gateway unavailable"),
        )
        .mount(&server)
        .await;

    let hook = Arc::new(CountingHook { fired: AtomicUsize::new(0) });
    let client = Arc::new(
        WalletClient::builder()
            .base_url(server.uri())
            .session_lost_hook(hook.clone())
            .build()
            .expect("client"),
    );

    let calls = (0..3).map(|index| {
        let client = client.clone();
        async move { client.get::<serde_json::Value>(&format!("/ledger/{index}")).await }
    });

    for outcome in join_all(calls).await {
        let error = outcome.expect_err("renewal failure must reject every caller");
        assert!(
            matches!(error, WalletError::RenewalFailed(_)),
            "expected a renewal failure, got {error:?}"
        );
    }
    assert_eq!(hook.fired.load(Ordering::SeqCst), 1);
    assert_eq!(renewal_calls(&server).await, 1);

    // Each original request was attempted once and never replayed.
    let requests = server.received_requests().await.unwrap();
    for index in 0..3 {
        let route = format!("/ledger/{index}");
        let hits = requests.iter().filter(|r| r.url.path() == route).count();
        assert_eq!(hits, 1, "request {index} must not be replayed after renewal failure");
    }
}

/// Scenario C continued: a failed epoch does not poison the coordinator.
#[tokio::test]
async fn fresh_epoch_starts_after_a_failed_renewal() {
    let server = MockServer::start().await;

    // Expired for the first call of each epoch: attempt 0 (rejected epoch)
    // and attempt 1 (fresh epoch), then the replay succeeds.
    let attempts = AtomicUsize::new(0);
    Mock::given(method("GET"))
        .and(path("/user/myInfo"))
        .respond_with(move |_req: &Request| -> ResponseTemplate {
            if attempts.fetch_add(1, Ordering::SeqCst) < 2 {
                ResponseTemplate::new(500).set_body_json(expired_body())
            } else {
                ResponseTemplate::new(200)
                    .set_body_json(ok_envelope(serde_json::json!({"ok": true})))
            }
        })
        .mount(&server)
        .await;

    let renewal_attempts = AtomicUsize::new(0);
    Mock::given(method("POST"))
        .and(path(RENEWAL_PATH))
        .respond_with(move |_req: &Request| -> ResponseTemplate {
            if renewal_attempts.fetch_add(1, Ordering::SeqCst) == 0 {
                ResponseTemplate::new(503)
            } else {
                ResponseTemplate::new(200).set_body_json(serde_json::json!({
                    "statusCode": 200,
                    "success": true,
                    "message": "ok",
                    "data": null
                }))
            }
        })
        .mount(&server)
        .await;

    let client = client_for(&server);

    // First epoch: renewal fails, caller rejects.
    let error = client.get::<serde_json::Value>("/user/myInfo").await.expect_err("rejected");
    assert!(matches!(error, WalletError::RenewalFailed(_)));

    // Second epoch: the endpoint's replay path now succeeds end to end.
    let data: serde_json::Value = client.get("/user/myInfo").await.expect("second epoch succeeds");
    assert_eq!(data["ok"], true);
    assert_eq!(renewal_calls(&server).await, 2);
}

/// Scenario D: an ordinary 404 is passed through untouched.
///
/// Expectations:
/// - the classifier returns the failure to the caller immediately
/// - the renewal coordinator is never invoked
#[tokio::test]
async fn ordinary_errors_never_touch_the_renewal_coordinator() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "statusCode": 404,
            "success": false,
            "message": "Not Found"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = client.get::<serde_json::Value>("/missing").await.expect_err("pass-through");

    assert!(matches!(error, WalletError::Api { status: 404, .. }));
    assert_eq!(renewal_calls(&server).await, 0);
}

/// A matching status with a non-matching message is not renewable: only the
/// exact expired-session signal triggers the coordinator.
#[tokio::test]
async fn non_matching_500_is_passed_through() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "statusCode": 500,
            "success": false,
            "message": "internal server error"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = client.get::<serde_json::Value>("/ledger/0").await.expect_err("pass-through");

    assert!(matches!(&error, WalletError::Api { status: 500, message } if message != "jwt expired"));
    assert_eq!(renewal_calls(&server).await, 0);
}

/// Renewal refreshes credentials as a cookie side effect: the replay carries
/// the cookie set by the renewal response.
#[tokio::test]
async fn replay_carries_the_renewed_session_cookie() {
    let server = MockServer::start().await;

    // With the renewed cookie the endpoint succeeds; without it, the
    // expired-session signal.
    Mock::given(method("GET"))
        .and(path("/wallet/my-wallet"))
        .and(wiremock::matchers::header("cookie", "accessToken=renewed"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(ok_envelope(serde_json::json!({"balance": 42}))),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/wallet/my-wallet"))
        .respond_with(ResponseTemplate::new(500).set_body_json(expired_body()))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(RENEWAL_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "accessToken=renewed; Path=/")
                .set_body_json(ok_envelope(serde_json::Value::Null)),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let data: serde_json::Value = client.get("/wallet/my-wallet").await.expect("renewed outcome");

    assert_eq!(data["balance"], 42);
    assert_eq!(renewal_calls(&server).await, 1);
}
