// region:    --- Imports
use super::ItemStore;
use crate::bidding::model::{Bid, Item, NewBid};
use crate::catalog::filter::{ItemOrder, ItemPredicate};
use crate::database::DatabaseManager;
use crate::error::StoreError;
use crate::query::queries;
use async_trait::async_trait;
use sqlx::{PgConnection, Postgres, QueryBuilder};
use std::sync::Arc;
use tracing::{debug, info};

// endregion: --- Imports

// region:    --- Postgres Item Store
/// Postgres 저장소 구현체
pub struct PgItemStore {
    db: Arc<DatabaseManager>,
}

impl PgItemStore {
    pub fn new(db: Arc<DatabaseManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ItemStore for PgItemStore {
    async fn fetch_items(
        &self,
        predicate: ItemPredicate,
        order: ItemOrder,
    ) -> Result<Vec<Item>, StoreError> {
        let mut builder = QueryBuilder::<Postgres>::new(queries::SELECT_ITEMS);
        push_predicate(&mut builder, predicate);
        builder.push(order.sql());
        debug!("{:<12} --> 상품 조회: {}", "Store", builder.sql());

        let items = builder
            .build_query_as::<Item>()
            .fetch_all(self.db.pool())
            .await?;
        Ok(items)
    }

    async fn set_item_inactive(&self, item_id: i64) -> Result<(), StoreError> {
        self.db
            .transaction(|tx| {
                Box::pin(async move {
                    sqlx::query(queries::SET_ITEM_INACTIVE)
                        .bind(item_id)
                        .execute(&mut **tx)
                        .await?;
                    Ok::<(), StoreError>(())
                })
            })
            .await?;
        info!("{:<12} --> 경매 종료 저장 id: {}", "Store", item_id);
        Ok(())
    }

    async fn record_bid(&self, bid: &NewBid) -> Result<(), StoreError> {
        let bid = bid.clone();
        let item_id = bid.item_id;
        let bid_amount = bid.bid_amount;
        self.db
            .transaction(|tx| {
                Box::pin(async move {
                    set_item_price(&mut **tx, bid.item_id, bid.bid_amount).await?;
                    insert_bid(&mut **tx, &bid).await?;
                    Ok::<(), StoreError>(())
                })
            })
            .await?;
        info!(
            "{:<12} --> 입찰 저장 id: {}, 금액: {}",
            "Store", item_id, bid_amount
        );
        Ok(())
    }

    async fn fetch_bids(&self, item_id: i64) -> Result<Vec<Bid>, StoreError> {
        let bids = sqlx::query_as::<_, Bid>(queries::GET_ITEM_BIDS)
            .bind(item_id)
            .fetch_all(self.db.pool())
            .await?;
        Ok(bids)
    }
}
// endregion: --- Postgres Item Store

// region:    --- Statements
/// 조건을 바인딩 파라미터로 추가
fn push_predicate(builder: &mut QueryBuilder<'_, Postgres>, predicate: ItemPredicate) {
    let mut separator = " WHERE ";
    if let Some(active) = predicate.is_active {
        builder.push(separator).push("is_active = ").push_bind(active);
        separator = " AND ";
    }
    if let Some(archived) = predicate.is_archived {
        builder
            .push(separator)
            .push("is_archived = ")
            .push_bind(archived);
    }
}

/// 가격 갱신. 진행 중이 아닌 상품이면 실패.
async fn set_item_price(
    conn: &mut PgConnection,
    item_id: i64,
    price: i64,
) -> Result<(), StoreError> {
    let result = sqlx::query(queries::SET_ITEM_PRICE)
        .bind(price)
        .bind(item_id)
        .execute(conn)
        .await?;
    if result.rows_affected() == 0 {
        return Err(StoreError::ItemUnavailable(item_id));
    }
    Ok(())
}

async fn insert_bid(conn: &mut PgConnection, bid: &NewBid) -> Result<(), StoreError> {
    sqlx::query(queries::INSERT_BID)
        .bind(bid.item_id)
        .bind(&bid.bidder_name)
        .bind(bid.bid_time)
        .bind(bid.bid_amount)
        .execute(conn)
        .await?;
    Ok(())
}
// endregion: --- Statements
