/// 상품/입찰 저장소
/// 카탈로그와 세션이 사용하는 저장소 명령 집합
// region:    --- Imports
use crate::bidding::model::{Bid, Item, NewBid};
use crate::catalog::filter::{ItemOrder, ItemPredicate};
use crate::error::StoreError;
use async_trait::async_trait;

// endregion: --- Imports

// region:    --- Modules
pub mod memory;
pub mod postgres;

pub use memory::InMemoryStore;
pub use postgres::PgItemStore;
// endregion: --- Modules

// region:    --- Item Store Trait
/// 저장소 트레이트
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// 조건에 맞는 상품을 주어진 순서로 조회
    async fn fetch_items(
        &self,
        predicate: ItemPredicate,
        order: ItemOrder,
    ) -> Result<Vec<Item>, StoreError>;

    /// 경매 종료 (is_active = false)
    async fn set_item_inactive(&self, item_id: i64) -> Result<(), StoreError>;

    /// 가격 갱신과 입찰 기록을 하나의 단위로 저장.
    /// 둘 다 성공하거나 둘 다 반영되지 않는다.
    async fn record_bid(&self, bid: &NewBid) -> Result<(), StoreError>;

    /// 상품 입찰 이력 (최신순)
    async fn fetch_bids(&self, item_id: i64) -> Result<Vec<Bid>, StoreError>;
}
// endregion: --- Item Store Trait
