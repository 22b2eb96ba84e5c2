/// 상품 카탈로그
/// 상태 필터에 맞는 상품 목록을 불러와 화면 순서대로 보관한다.
/// 세션에 의존하지 않는다.
// region:    --- Imports
use crate::bidding::model::Item;
use crate::error::StoreError;
use crate::store::ItemStore;
use filter::{ItemOrder, StatusFilter};
use std::sync::Arc;
use tracing::{error, info};

// endregion: --- Imports

pub mod filter;

// region:    --- Item Catalog
pub struct ItemCatalog<S: ItemStore + ?Sized> {
    store: Arc<S>,
    order: ItemOrder,
    filter: StatusFilter,
    items: Vec<Item>,
    last_failure: Option<StoreError>,
}

impl<S: ItemStore + ?Sized> ItemCatalog<S> {
    pub fn new(store: Arc<S>, order: ItemOrder) -> Self {
        Self {
            store,
            order,
            filter: StatusFilter::All,
            items: Vec::new(),
            last_failure: None,
        }
    }

    /// 필터에 맞는 상품 목록 불러오기.
    /// 조회 실패 시 빈 목록을 보관하고 오류는 `last_failure`로 남긴다.
    pub async fn load_items(&mut self, filter: StatusFilter) -> &[Item] {
        info!("{:<12} --> 상품 목록 조회 status: {}", "Catalog", filter);
        self.filter = filter;

        match self.store.fetch_items(filter.predicate(), self.order).await {
            Ok(items) => {
                info!("{:<12} --> 상품 {}개 조회", "Catalog", items.len());
                self.items = items;
                self.last_failure = None;
            }
            Err(e) => {
                error!("{:<12} --> 상품 목록 조회 실패: {}", "Catalog", e);
                self.items.clear();
                self.last_failure = Some(e);
            }
        }

        &self.items
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn filter(&self) -> StatusFilter {
        self.filter
    }

    /// 인덱스로 상품 조회. 범위를 벗어나면(음수 포함) None.
    pub fn get(&self, index: i64) -> Option<&Item> {
        usize::try_from(index)
            .ok()
            .and_then(|index| self.items.get(index))
    }

    /// 목록을 불러온 뒤 자동으로 선택할 인덱스
    pub fn initial_selection(&self) -> Option<i64> {
        (!self.items.is_empty()).then_some(0)
    }

    /// 세션에서 바뀐 상품 상태(가격, 종료)를 목록에 반영
    pub fn refresh_item(&mut self, item: &Item) -> bool {
        match self.items.iter_mut().find(|row| row.id == item.id) {
            Some(row) => {
                *row = item.clone();
                true
            }
            None => false,
        }
    }

    pub fn last_failure(&self) -> Option<&StoreError> {
        self.last_failure.as_ref()
    }
}
// endregion: --- Item Catalog
