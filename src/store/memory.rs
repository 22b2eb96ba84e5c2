//! 메모리 저장소. 테스트용.
// region:    --- Imports
use super::ItemStore;
use crate::bidding::model::{Bid, Item, NewBid};
use crate::catalog::filter::{ItemOrder, ItemPredicate};
use crate::error::StoreError;
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::Mutex;

// endregion: --- Imports

#[derive(Debug, Default)]
struct MemoryState {
    items: BTreeMap<i64, Item>,
    bids: Vec<Bid>,
    fail_reads: bool,
    fail_writes: bool,
    close_writes: usize,
}

/// 조회/쓰기 실패를 주입할 수 있는 메모리 저장소
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: Mutex<MemoryState>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: impl IntoIterator<Item = Item>) -> Self {
        let items = items.into_iter().map(|item| (item.id, item)).collect();
        Self {
            state: Mutex::new(MemoryState {
                items,
                ..MemoryState::default()
            }),
        }
    }

    pub async fn insert_item(&self, item: Item) {
        self.state.lock().await.items.insert(item.id, item);
    }

    pub async fn item(&self, item_id: i64) -> Option<Item> {
        self.state.lock().await.items.get(&item_id).cloned()
    }

    pub async fn bids(&self) -> Vec<Bid> {
        self.state.lock().await.bids.clone()
    }

    /// 지금까지 수행된 경매 종료 쓰기 횟수
    pub async fn close_writes(&self) -> usize {
        self.state.lock().await.close_writes
    }

    pub async fn set_fail_reads(&self, fail: bool) {
        self.state.lock().await.fail_reads = fail;
    }

    pub async fn set_fail_writes(&self, fail: bool) {
        self.state.lock().await.fail_writes = fail;
    }
}

#[async_trait]
impl ItemStore for InMemoryStore {
    async fn fetch_items(
        &self,
        predicate: ItemPredicate,
        order: ItemOrder,
    ) -> Result<Vec<Item>, StoreError> {
        let state = self.state.lock().await;
        if state.fail_reads {
            return Err(StoreError::Unavailable("read failure".to_string()));
        }
        let mut items: Vec<Item> = state
            .items
            .values()
            .filter(|item| predicate.matches(item))
            .cloned()
            .collect();
        items.sort_by(|a, b| order.compare(a, b));
        Ok(items)
    }

    async fn set_item_inactive(&self, item_id: i64) -> Result<(), StoreError> {
        let mut state = self.state.lock().await;
        if state.fail_writes {
            return Err(StoreError::Unavailable("write failure".to_string()));
        }
        state.close_writes += 1;
        if let Some(item) = state.items.get_mut(&item_id) {
            item.is_active = false;
        }
        Ok(())
    }

    async fn record_bid(&self, bid: &NewBid) -> Result<(), StoreError> {
        let mut state = self.state.lock().await;
        if state.fail_writes {
            return Err(StoreError::Unavailable("write failure".to_string()));
        }
        match state.items.get_mut(&bid.item_id) {
            Some(item) if item.is_biddable() => item.price = bid.bid_amount,
            _ => return Err(StoreError::ItemUnavailable(bid.item_id)),
        }
        let id = state.bids.len() as i64 + 1;
        state.bids.push(Bid {
            id,
            item_id: bid.item_id,
            bidder_name: bid.bidder_name.clone(),
            bid_time: bid.bid_time,
            bid_amount: bid.bid_amount,
        });
        Ok(())
    }

    async fn fetch_bids(&self, item_id: i64) -> Result<Vec<Bid>, StoreError> {
        let state = self.state.lock().await;
        if state.fail_reads {
            return Err(StoreError::Unavailable("read failure".to_string()));
        }
        Ok(state
            .bids
            .iter()
            .rev()
            .filter(|bid| bid.item_id == item_id)
            .cloned()
            .collect())
    }
}
