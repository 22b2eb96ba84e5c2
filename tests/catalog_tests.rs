mod common;

use auction_browser::catalog::filter::{ItemOrder, StatusFilter};
use auction_browser::catalog::ItemCatalog;
use auction_browser::store::InMemoryStore;
use chrono::Duration;
use common::{archived, closed, item, sample_items, start_time};
use std::sync::Arc;

fn ids(catalog: &ItemCatalog<InMemoryStore>) -> Vec<i64> {
    catalog.items().iter().map(|item| item.id).collect()
}

/// 필터별 조건 검증
#[tokio::test]
async fn test_filters_match_predicate_exactly() {
    let store = Arc::new(InMemoryStore::with_items(sample_items()));
    let mut catalog = ItemCatalog::new(store, ItemOrder::IdAsc);

    for filter in StatusFilter::ALL {
        let items = catalog.load_items(filter).await.to_vec();
        for item in &items {
            match filter {
                StatusFilter::All => {}
                StatusFilter::Active => assert!(item.is_active && !item.is_archived),
                StatusFilter::Closed => assert!(!item.is_active && !item.is_archived),
                StatusFilter::Archived => assert!(item.is_archived),
            }
        }
    }

    catalog.load_items(StatusFilter::All).await;
    assert_eq!(ids(&catalog), vec![1, 2, 3, 4, 5]);
    catalog.load_items(StatusFilter::Active).await;
    assert_eq!(ids(&catalog), vec![1, 5]);
    catalog.load_items(StatusFilter::Closed).await;
    assert_eq!(ids(&catalog), vec![2]);
}

/// 보관 필터는 진행 여부와 상관없이 보관 상품만 반환
#[tokio::test]
async fn test_archived_filter_ignores_active_flag() {
    let store = Arc::new(InMemoryStore::with_items(sample_items()));
    let mut catalog = ItemCatalog::new(store, ItemOrder::IdAsc);

    let items = catalog.load_items(StatusFilter::Archived).await;

    assert_eq!(items.len(), 2);
    assert!(items.iter().any(|item| item.is_active));
    assert!(items.iter().any(|item| !item.is_active));
    assert!(items.iter().all(|item| item.is_archived));
    assert_eq!(catalog.filter(), StatusFilter::Archived);
}

/// 마감 순 정렬
#[tokio::test]
async fn test_ending_soonest_order() {
    let now = start_time();
    let store = Arc::new(InMemoryStore::with_items(vec![
        item(1, "Late", now + Duration::hours(3)),
        item(2, "Soon", now + Duration::minutes(5)),
        item(3, "Same time as late", now + Duration::hours(3)),
        closed(item(4, "Past", now - Duration::hours(1))),
    ]));
    let mut catalog = ItemCatalog::new(store, ItemOrder::EndingSoonest);

    catalog.load_items(StatusFilter::All).await;

    assert_eq!(ids(&catalog), vec![4, 2, 1, 3]);
}

/// 조회 실패 시 빈 목록과 오류 기록
#[tokio::test]
async fn test_read_failure_degrades_to_empty_list() {
    let store = Arc::new(InMemoryStore::with_items(sample_items()));
    let mut catalog = ItemCatalog::new(Arc::clone(&store), ItemOrder::IdAsc);
    catalog.load_items(StatusFilter::All).await;
    assert_eq!(catalog.initial_selection(), Some(0));

    store.set_fail_reads(true).await;
    let items = catalog.load_items(StatusFilter::Active).await;
    assert!(items.is_empty());
    assert!(catalog.last_failure().is_some());
    assert_eq!(catalog.initial_selection(), None);

    store.set_fail_reads(false).await;
    catalog.load_items(StatusFilter::Active).await;
    assert!(catalog.last_failure().is_none());
    assert_eq!(catalog.len(), 2);
}

/// 인덱스 범위 검사
#[tokio::test]
async fn test_get_rejects_out_of_range_indexes() {
    let store = Arc::new(InMemoryStore::with_items(sample_items()));
    let mut catalog = ItemCatalog::new(store, ItemOrder::IdAsc);
    catalog.load_items(StatusFilter::All).await;

    assert_eq!(catalog.get(0).map(|item| item.id), Some(1));
    assert_eq!(catalog.get(4).map(|item| item.id), Some(5));
    assert!(catalog.get(5).is_none());
    assert!(catalog.get(-1).is_none());
}

/// 목록 행 갱신
#[tokio::test]
async fn test_refresh_item_replaces_matching_row() {
    let store = Arc::new(InMemoryStore::with_items(sample_items()));
    let mut catalog = ItemCatalog::new(store, ItemOrder::IdAsc);
    catalog.load_items(StatusFilter::All).await;

    let mut lamp = catalog.get(0).cloned().unwrap();
    lamp.price = 250;
    assert!(catalog.refresh_item(&lamp));
    assert_eq!(catalog.get(0).unwrap().price, 250);

    let stranger = archived(item(99, "Unknown", start_time()));
    assert!(!catalog.refresh_item(&stranger));
}

/// 빈 저장소에서 시작해 상품을 추가하면 다시 불러올 때 반영
#[tokio::test]
async fn test_empty_store_then_inserted_item_is_loaded() {
    let store = Arc::new(InMemoryStore::new());
    let mut catalog = ItemCatalog::new(Arc::clone(&store), ItemOrder::IdAsc);

    catalog.load_items(StatusFilter::All).await;
    assert!(catalog.is_empty());
    assert_eq!(catalog.initial_selection(), None);

    store
        .insert_item(item(7, "Desk", start_time() + Duration::hours(1)))
        .await;
    catalog.load_items(StatusFilter::Active).await;

    assert!(!catalog.is_empty());
    assert_eq!(ids(&catalog), vec![7]);
    assert_eq!(catalog.initial_selection(), Some(0));
}
