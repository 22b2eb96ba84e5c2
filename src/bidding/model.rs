use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

// 상품 모델
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub image_path: Option<String>,
    pub end_date: NaiveDate,
    pub end_time: NaiveTime,
    pub bid_step: i64,
    pub is_active: bool,
    pub is_archived: bool,
}

impl Item {
    /// 경매 종료 시각 (end_date + end_time)
    pub fn closes_at(&self) -> NaiveDateTime {
        NaiveDateTime::new(self.end_date, self.end_time)
    }

    /// 입찰 가능 여부
    pub fn is_biddable(&self) -> bool {
        self.is_active && !self.is_archived
    }

    /// 다음 입찰 가격. 표현 범위를 넘으면 None.
    pub fn next_price(&self) -> Option<i64> {
        self.price.checked_add(self.bid_step)
    }
}

// 입찰 모델
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Bid {
    pub id: i64,
    pub item_id: i64,
    pub bidder_name: String,
    pub bid_time: NaiveDateTime,
    pub bid_amount: i64,
}

// 저장 전 입찰
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBid {
    pub item_id: i64,
    pub bidder_name: String,
    pub bid_time: NaiveDateTime,
    pub bid_amount: i64,
}
