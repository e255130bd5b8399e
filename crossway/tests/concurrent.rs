use crossway::{RegexMatcher, testing::DispatchExt};
use lazy_static::lazy_static;
use std::sync::Arc;

mod common;
use common::{TestDispatcher, dispatcher_with};

lazy_static! {
    static ref SHARED: TestDispatcher<RegexMatcher> = dispatcher_with(RegexMatcher::new());
}

#[test]
fn test_static_dispatcher_across_threads() {
    std::thread::scope(|scope| {
        for worker in 0..8 {
            scope.spawn(move || {
                for i in 0..200 {
                    let id = (worker * 1000 + i).to_string();
                    let found = SHARED.dispatch("GET", &format!("/user/{}", id)).expect_found();
                    assert_eq!(found.params.get("id"), Some(id.as_str()));
                    assert_eq!(SHARED.path_for("user", &[("id", &id)]).unwrap(), format!("/user/{}", id));
                }
            });
        }
    });
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_shared_dispatcher_across_tasks() {
    let dispatcher = Arc::new(dispatcher_with(RegexMatcher::new()));

    let handles = (0..32)
        .map(|n| {
            let dispatcher = Arc::clone(&dispatcher);
            tokio::spawn(async move {
                let path = dispatcher
                    .path_for("item", &[("item", n)])
                    .expect("item route is named");
                let found = dispatcher.dispatch("GET", &path).expect_found();
                (*found.handler, found.params.get("item").map(str::to_owned))
            })
        })
        .collect::<Vec<_>>();

    let results = futures::future::join_all(handles).await;
    for (n, result) in results.into_iter().enumerate() {
        let (handler, item) = result.expect("task completed");
        assert_eq!(handler, "show_item");
        assert_eq!(item, Some(n.to_string()));
    }
}

#[test]
fn test_swap_in_rebuilt_dispatcher() {
    let mut live = Arc::new(dispatcher_with(RegexMatcher::new()));
    let reader = Arc::clone(&live);

    let rebuilt = crossway::simple_dispatcher::<_, &'static str, _>(|routes| {
        routes.get("/health", "health_v2")?;
        Ok(())
    })
    .unwrap();
    live = Arc::new(rebuilt);

    assert_eq!(*reader.dispatch("GET", "/health").expect_found().handler, "health");
    assert_eq!(*live.dispatch("GET", "/health").expect_found().handler, "health_v2");
    assert!(live.dispatch("GET", "/user/1").is_not_found());
}
