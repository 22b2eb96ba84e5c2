mod common;

use auction_browser::auction::clock::ManualClock;
use auction_browser::auction::display::{DisplayState, Notice, RemainingTime};
use auction_browser::bidding::model::Item;
use auction_browser::catalog::filter::StatusFilter;
use auction_browser::config::Config;
use auction_browser::handlers::{AuctionApp, UiEvent};
use auction_browser::store::InMemoryStore;
use chrono::Duration;
use common::{item, sample_items, start_time};
use std::sync::Arc;

struct Harness {
    store: Arc<InMemoryStore>,
    clock: Arc<ManualClock>,
    app: AuctionApp<InMemoryStore>,
}

fn harness(items: Vec<Item>) -> Harness {
    let store = Arc::new(InMemoryStore::with_items(items));
    let clock = Arc::new(ManualClock::new(start_time()));
    let app = AuctionApp::new(Arc::clone(&store), clock.clone(), &Config::default());
    Harness { store, clock, app }
}

/// 필터 변경 시 첫 상품 자동 선택
#[tokio::test]
async fn test_filter_change_selects_first_item() {
    let mut h = harness(sample_items());

    let notices = h.app.handle(UiEvent::FilterChanged(StatusFilter::Active)).await;

    assert!(notices.is_empty());
    let screen = h.app.screen();
    assert_eq!(screen.items, vec!["Lamp".to_string(), "Mirror".to_string()]);
    assert_eq!(screen.selected, Some(0));
    assert_eq!(screen.display.item_name.as_deref(), Some("Lamp"));
    assert!(screen.display.bid_enabled);
}

/// 결과가 없으면 선택 해제
#[tokio::test]
async fn test_empty_result_clears_selection() {
    let now = start_time();
    let mut h = harness(vec![item(1, "Lamp", now + Duration::hours(1))]);
    h.app.handle(UiEvent::FilterChanged(StatusFilter::All)).await;
    assert!(h.app.session().current_item().is_some());

    h.app.handle(UiEvent::FilterChanged(StatusFilter::Archived)).await;

    let screen = h.app.screen();
    assert!(screen.items.is_empty());
    assert_eq!(screen.selected, None);
    assert_eq!(screen.display, DisplayState::default());
    assert!(!h.app.session().is_counting_down());
}

/// 조회 실패는 오류 메시지와 빈 목록
#[tokio::test]
async fn test_read_failure_reports_notice() {
    let mut h = harness(sample_items());
    h.store.set_fail_reads(true).await;

    let notices = h.app.handle(UiEvent::FilterChanged(StatusFilter::All)).await;

    assert_eq!(notices.len(), 1);
    assert!(matches!(notices[0], Notice::Error(_)));
    assert!(h.app.screen().items.is_empty());
}

/// 입찰 성공 메시지와 목록 갱신
#[tokio::test]
async fn test_bid_click_confirms_and_refreshes_catalog() {
    let mut h = harness(sample_items());
    h.app.handle(UiEvent::FilterChanged(StatusFilter::Active)).await;

    let notices = h.app.handle(UiEvent::BidClicked("Anna".to_string())).await;
    assert_eq!(
        notices,
        vec![Notice::Confirmation(
            "You raised the price of Lamp to 110.".to_string()
        )]
    );

    // 다른 상품을 거쳐 다시 선택해도 저장된 가격이 보인다
    h.app.handle(UiEvent::SelectionChanged(1)).await;
    h.app.handle(UiEvent::SelectionChanged(0)).await;
    assert_eq!(h.app.screen().display.price, Some(110));
    assert_eq!(h.app.catalog().get(0).unwrap().price, 110);
}

/// 검증 오류는 경고 메시지
#[tokio::test]
async fn test_validation_errors_become_warnings() {
    let mut h = harness(sample_items());

    let notices = h.app.handle(UiEvent::BidClicked("Anna".to_string())).await;
    assert_eq!(notices, vec![Notice::Warning("no item selected".to_string())]);

    h.app.handle(UiEvent::FilterChanged(StatusFilter::All)).await;
    let notices = h.app.handle(UiEvent::BidClicked("  ".to_string())).await;
    assert_eq!(notices, vec![Notice::Warning("missing bidder name".to_string())]);

    assert!(h.store.bids().await.is_empty());
}

/// 쓰기 실패는 오류 메시지, 가격 유지
#[tokio::test]
async fn test_store_failure_on_bid_becomes_error() {
    let mut h = harness(sample_items());
    h.app.handle(UiEvent::FilterChanged(StatusFilter::All)).await;
    h.store.set_fail_writes(true).await;

    let notices = h.app.handle(UiEvent::BidClicked("Anna".to_string())).await;

    assert!(matches!(notices.as_slice(), [Notice::Error(_)]));
    assert_eq!(h.app.screen().display.price, Some(100));
}

/// 틱으로 종료되면 목록에도 반영
#[tokio::test]
async fn test_tick_close_is_reflected_in_catalog() {
    let now = start_time();
    let mut h = harness(vec![item(1, "Lamp", now + Duration::seconds(2))]);
    h.app.handle(UiEvent::FilterChanged(StatusFilter::Active)).await;

    h.clock.advance(Duration::seconds(2));
    let notices = h.app.handle(UiEvent::Tick).await;

    assert!(notices.is_empty());
    assert_eq!(h.app.screen().display.remaining, RemainingTime::Ended);
    assert!(!h.app.catalog().get(0).unwrap().is_active);
    assert_eq!(h.store.close_writes().await, 1);

    // 다시 선택해도 종료 쓰기는 반복되지 않는다
    h.app.handle(UiEvent::SelectionChanged(0)).await;
    assert_eq!(h.store.close_writes().await, 1);
}

/// 입찰 이력은 최신순
#[tokio::test]
async fn test_bid_history_is_newest_first() {
    let mut h = harness(sample_items());
    h.app.handle(UiEvent::FilterChanged(StatusFilter::All)).await;

    h.app.handle(UiEvent::BidClicked("Anna".to_string())).await;
    h.clock.advance(Duration::seconds(5));
    h.app.handle(UiEvent::BidClicked("Jan".to_string())).await;

    let history = h.app.bid_history().await.unwrap();
    let amounts: Vec<i64> = history.iter().map(|bid| bid.bid_amount).collect();
    assert_eq!(amounts, vec![120, 110]);
    assert_eq!(history[0].bidder_name, "Jan");
}

/// 화면 JSON 직렬화
#[tokio::test]
async fn test_screen_serializes_to_json() {
    let mut h = harness(sample_items());
    h.app.handle(UiEvent::FilterChanged(StatusFilter::Closed)).await;

    let json = serde_json::to_value(h.app.screen()).unwrap();

    assert_eq!(json["filter"], "closed");
    assert_eq!(json["items"][0], "Chair");
    assert_eq!(json["display"]["remaining"], "ended");
    assert_eq!(json["display"]["bid_enabled"], false);
}
