#![allow(dead_code)]

use auction_browser::auction::clock::ManualClock;
use auction_browser::auction::session::AuctionSession;
use auction_browser::bidding::model::Item;
use auction_browser::catalog::filter::{ItemOrder, StatusFilter};
use auction_browser::catalog::ItemCatalog;
use auction_browser::store::InMemoryStore;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use std::sync::Arc;

/// 테스트 기준 시각
pub fn start_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

/// 진행 중인 테스트 상품 (가격 100, 입찰 단위 10)
pub fn item(id: i64, name: &str, closes_at: NaiveDateTime) -> Item {
    Item {
        id,
        name: name.to_string(),
        price: 100,
        image_path: Some(format!("images/{id}.png")),
        end_date: closes_at.date(),
        end_time: closes_at.time(),
        bid_step: 10,
        is_active: true,
        is_archived: false,
    }
}

pub fn closed(mut item: Item) -> Item {
    item.is_active = false;
    item
}

pub fn archived(mut item: Item) -> Item {
    item.is_archived = true;
    item
}

/// 1: 진행 중, 2: 종료, 3: 보관(종료), 4: 보관(진행 플래그), 5: 진행 중
pub fn sample_items() -> Vec<Item> {
    let now = start_time();
    vec![
        item(1, "Lamp", now + Duration::hours(2)),
        closed(item(2, "Chair", now - Duration::days(1))),
        archived(closed(item(3, "Vase", now - Duration::days(30)))),
        archived(item(4, "Clock", now + Duration::hours(5))),
        item(5, "Mirror", now + Duration::minutes(30)),
    ]
}

pub struct Fixture {
    pub store: Arc<InMemoryStore>,
    pub clock: Arc<ManualClock>,
    pub catalog: ItemCatalog<InMemoryStore>,
    pub session: AuctionSession<InMemoryStore>,
}

/// 모든 상품을 불러온 카탈로그와 빈 세션
pub async fn fixture(items: Vec<Item>) -> Fixture {
    let store = Arc::new(InMemoryStore::with_items(items));
    let clock = Arc::new(ManualClock::new(start_time()));
    let mut catalog = ItemCatalog::new(Arc::clone(&store), ItemOrder::IdAsc);
    catalog.load_items(StatusFilter::All).await;
    let session = AuctionSession::new(
        Arc::clone(&store),
        clock.clone(),
        std::time::Duration::from_secs(1),
    );
    Fixture {
        store,
        clock,
        catalog,
        session,
    }
}

/// 카탈로그에서 id로 인덱스 찾기
pub fn index_of(catalog: &ItemCatalog<InMemoryStore>, id: i64) -> i64 {
    catalog
        .items()
        .iter()
        .position(|item| item.id == id)
        .expect("item in catalog") as i64
}
