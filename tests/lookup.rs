mod common;

use chrono::NaiveDate;
use common::{pick_free_port, BACKEND};
use stock_withdrawal::controller::Applied;
use stock_withdrawal::errors::LookupError;
use stock_withdrawal::i18n::Lang;
use stock_withdrawal::models::ScanCode;
use stock_withdrawal::render::RenderContext;
use stock_withdrawal::{HttpLookupClient, LookupClient, PageController, ViewMode};

fn client() -> HttpLookupClient {
    HttpLookupClient::new(format!("{}/", BACKEND.base_url))
}

fn code(raw: &str) -> ScanCode {
    ScanCode::parse(raw).unwrap()
}

fn controller() -> PageController {
    PageController::new(RenderContext {
        lang: Lang::Pt,
        static_img_prefix: "/static/img/".to_string(),
        today: NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
    })
}

#[tokio::test]
async fn lookup_parses_candidates_in_server_order() {
    let candidates = client().lookup(&code("7891000200200")).await.unwrap();
    let ids: Vec<i64> = candidates.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![7, 8]);
    assert_eq!(candidates[0].quantity, None);
    assert_eq!(candidates[1].batch.as_deref(), Some("F2"));
}

#[tokio::test]
async fn one_request_per_lookup() {
    client().lookup(&code("once-only-42")).await.unwrap();
    assert_eq!(BACKEND.queries_for("once-only-42").len(), 1);
}

#[tokio::test]
async fn code_is_url_encoded() {
    let raw = "a b&c=d/é";
    let candidates = client().lookup(&code(raw)).await.unwrap();
    assert!(candidates.is_empty());

    let seen = BACKEND.queries_for(raw);
    assert_eq!(seen.len(), 1);
    assert!(seen[0].raw.starts_with("codigo="));
    assert!(!seen[0].raw.contains("&c=d"));
    assert!(seen[0].raw.contains("%26"));
}

#[tokio::test]
async fn empty_list_is_not_an_error() {
    let candidates = client().lookup(&code("000")).await.unwrap();
    assert!(candidates.is_empty());
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let err = client().lookup(&code("500")).await.unwrap_err();
    assert!(matches!(err, LookupError::Status { status: 500 }));
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let err = client().lookup(&code("lixo")).await.unwrap_err();
    assert!(matches!(err, LookupError::Decode(_)));
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    let dead = HttpLookupClient::new(format!("http://127.0.0.1:{}", pick_free_port()));
    let err = dead.lookup(&code("7891000100103")).await.unwrap_err();
    assert!(matches!(err, LookupError::Transport(_)));
}

#[tokio::test]
async fn controller_renders_backend_result() {
    let client = client();
    let mut controller = controller();
    let ticket = controller.submit_form("7891000100103").unwrap();

    let applied = controller.run_lookup(&client, ticket).await;
    assert_eq!(applied, Applied::Rendered { candidates: 1 });
    assert_eq!(controller.state().mode, ViewMode::Selecting);

    let selection = controller.state().selection.as_ref().unwrap();
    let preview = selection.preview.as_ref().unwrap();
    assert_eq!(preview.name, "Arroz");
    assert_eq!(preview.extra.as_deref(), Some("Lote: L1"));
    assert_eq!(preview.image.as_deref(), Some("/static/img/arroz.jpg"));
    assert_eq!(selection.controls()[0].label(), "10/12/2025 — 5 unidades");
    assert_eq!(selection.controls()[0].navigation.path(), "/retirada_estoque/42");
}

#[tokio::test]
async fn overlapping_lookups_apply_only_the_latest() {
    let client = client();
    let mut controller = controller();
    let first = controller.begin_lookup(code("7891000100103"));
    let second = controller.begin_lookup(code("000"));

    let (first_result, second_result) = tokio::join!(
        client.lookup(first.code()),
        client.lookup(second.code())
    );

    // Latest resolves first, then the older one arrives late.
    assert_eq!(
        controller.apply_lookup(&second, second_result),
        Applied::Rendered { candidates: 0 }
    );
    assert_eq!(controller.apply_lookup(&first, first_result), Applied::Stale);

    let selection = controller.state().selection.as_ref().unwrap();
    assert!(selection.notice().is_some());
    assert!(selection.preview.is_none());
}
