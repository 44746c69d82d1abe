//! Merging an outer group with an instance group.

use hookfetch::{
    Fetch, InterceptorGroup, InterceptorSet, NormalizedError, Response, create_interceptors,
    testing::{MockTransport, RecordingInterceptor},
};

mod common;
use common::{entries, order_log, tagging};

#[tokio::test]
async fn test_outer_handlers_run_first() {
    let log = order_log();
    let outer = InterceptorGroup::new();
    outer.request().use_shared(tagging("G1", &log));
    outer.request().use_shared(tagging("G2", &log));
    let instance = InterceptorGroup::new();
    instance.request().use_shared(tagging("I1", &log));

    let fetch = Fetch::with_interceptors(MockTransport::new(), outer.combine(&instance));
    fetch.call("/merged", None).await.unwrap();

    assert_eq!(entries(&log), vec!["G1", "G2", "I1"]);
}

#[tokio::test]
async fn test_empty_instance_behaves_like_outer() {
    let log = order_log();
    let outer = InterceptorGroup::new();
    outer.request().use_shared(tagging("G1", &log));
    outer.response().use_shared(tagging("G-res", &log));

    let combined = outer.combine(&InterceptorGroup::new());
    assert_eq!(combined.request().len(), 1);
    assert_eq!(combined.response().len(), 1);
    assert!(combined.error().is_empty());

    Fetch::with_interceptors(MockTransport::new(), combined)
        .call("/a", None)
        .await
        .unwrap();
    Fetch::with_interceptors(MockTransport::new(), outer)
        .call("/b", None)
        .await
        .unwrap();

    assert_eq!(entries(&log), vec!["G1", "G-res", "G1", "G-res"]);
}

#[tokio::test]
async fn test_concerns_merge_independently() {
    let outer_errors = RecordingInterceptor::<NormalizedError>::new();
    let outer = InterceptorGroup::new();
    outer.error().use_interceptor(outer_errors.clone());
    outer
        .response()
        .use_fn(|res, next| next.proceed(res.with_header("x-outer", "1")));

    let instance = create_interceptors(
        InterceptorSet::new()
            .on_error(|err, next| next.reject(format!("instance saw {}", err.url))),
    );

    let transport = MockTransport::new();
    transport.push_response(Response::new(503, "Service Unavailable"));
    let fetch = Fetch::with_interceptors(transport, outer.combine(&instance));

    let err = fetch.call("/flaky", None).await.unwrap_err();
    assert_eq!(err.to_string(), "instance saw /flaky");
    assert_eq!(outer_errors.count(), 1);

    let ok = fetch.call("/flaky", None).await.unwrap();
    assert_eq!(ok.headers["x-outer"], "1");
}

#[tokio::test]
async fn test_combined_group_is_a_snapshot() {
    let log = order_log();
    let outer = InterceptorGroup::new();
    outer.request().use_shared(tagging("before", &log));
    let instance = InterceptorGroup::new();

    let combined = outer.combine(&instance);
    outer.request().use_shared(tagging("after-outer", &log));
    instance.request().use_shared(tagging("after-instance", &log));

    Fetch::with_interceptors(MockTransport::new(), combined)
        .call("/snap", None)
        .await
        .unwrap();

    assert_eq!(entries(&log), vec!["before"]);
}

#[tokio::test]
async fn test_combined_tokens_do_not_affect_sources() {
    let log = order_log();
    let outer = InterceptorGroup::new();
    outer.request().use_shared(tagging("G1", &log));

    let combined = outer.combine(&InterceptorGroup::new());
    combined.clear();

    assert!(!combined.has_interceptors());
    assert!(outer.has_interceptors());
    assert_eq!(outer.request().len(), 1);
}
