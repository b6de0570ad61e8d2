mod common;

use recruitment_backoffice::models::application::Application;
use recruitment_backoffice::models::Resource;
use recruitment_backoffice::screens::list::ListStatus;
use serde_json::json;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{application, applications, state_for};

#[tokio::test]
async fn empty_later_page_keeps_page_and_counts_pages() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/application"))
        .and(query_param("page", "2"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/application"))
        .and(query_param_is_missing("page"))
        .respond_with(ResponseTemplate::new(200).set_body_json(applications(0..25)))
        .expect(1)
        .mount(&server)
        .await;

    let list = state_for(&server).application_list();
    list.set_page(2).await;

    let view = list.snapshot();
    assert_eq!(view.status, ListStatus::Ready);
    assert!(view.items.is_empty());
    assert_eq!(view.total_pages, 3);
    assert_eq!(view.current_page, 2);
    assert!(view.can_go_previous());
    assert!(view.can_go_next());
}

#[tokio::test]
async fn wrapped_collection_is_rendered_with_formatted_dates() {
    let server = MockServer::start().await;

    let mut first = application(1);
    first["createdAt"] = json!("2024-03-05T10:15:00.000Z");
    first["phone"] = json!(21620000000_i64);
    let mut second = application(2);
    second["cv"] = json!("");

    Mock::given(method("GET"))
        .and(path("/application"))
        .and(query_param("page", "1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "applications": [first, second], "totalCount": 2 })),
        )
        .mount(&server)
        .await;

    let list = state_for(&server).application_list();
    list.mount().await;

    let table = list.snapshot().table().expect("table once ready");
    assert_eq!(table.headers, Application::columns());
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0].cells[3], "21620000000");
    assert_eq!(table.rows[0].cells[6], "05/03/2024");
    assert_eq!(table.rows[1].cells[5], "N/A");
    assert_eq!(table.rows[1].cells[6], "N/A");
    assert_eq!(list.total_pages(), 1);
}

#[tokio::test]
async fn malformed_record_is_skipped() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/application"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [application(1), "not-a-record", application(2)],
            "total": 3
        })))
        .mount(&server)
        .await;

    let list = state_for(&server).application_list();
    list.mount().await;

    let ids: Vec<String> = list.items().into_iter().map(|a| a.id).collect();
    assert_eq!(ids, vec!["app-1", "app-2"]);
}

#[tokio::test]
async fn failed_count_request_fails_the_screen() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/application"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(applications(0..10)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/application"))
        .and(query_param_is_missing("page"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let list = state_for(&server).application_list();
    list.mount().await;

    let view = list.snapshot();
    assert_eq!(view.error(), Some(Application::LOAD_ERROR));
    assert!(view.items.is_empty());
    assert_eq!(view.total_pages, 1);
}

#[tokio::test]
async fn deleting_unknown_id_leaves_rows_untouched() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/application"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "applications": applications(0..3),
            "total": 3
        })))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/application/missing"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "ok" })))
        .expect(1)
        .mount(&server)
        .await;

    let list = state_for(&server).application_list();
    list.mount().await;
    let before = list.items();

    assert!(list.delete("missing").await);
    assert_eq!(list.items(), before);
    assert_eq!(list.status(), ListStatus::Ready);
}
