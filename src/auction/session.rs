/// 선택된 상품에 대한 경매 세션
/// 1. 상품 선택
/// 2. 남은 시간 계산 및 경매 종료
/// 3. 입찰
// region:    --- Imports
use crate::auction::clock::Clock;
use crate::auction::display::{DisplayState, Remaining, RemainingTime};
use crate::bidding::model::{Item, NewBid};
use crate::catalog::ItemCatalog;
use crate::error::{SessionError, StoreError, ValidationError};
use crate::scheduler::Countdown;
use crate::store::ItemStore;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

// endregion: --- Imports

// region:    --- Session Types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NoSelection,
    Active,
    ClosedOrArchived,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// 카운트다운이 없거나 이미 종료됨
    Idle,
    Counting(Remaining),
    /// 이번 틱에서 경매가 종료됨
    Closed,
}

/// 입찰 결과
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BidReceipt {
    pub item_id: i64,
    pub item_name: String,
    pub bidder_name: String,
    pub bid_amount: i64,
    pub bid_time: NaiveDateTime,
}

impl BidReceipt {
    pub fn confirmation(&self) -> String {
        format!(
            "You raised the price of {} to {}.",
            self.item_name, self.bid_amount
        )
    }
}
// endregion: --- Session Types

// region:    --- Auction Session
pub struct AuctionSession<S: ItemStore + ?Sized> {
    store: Arc<S>,
    clock: Arc<dyn Clock>,
    current: Option<Item>,
    display: DisplayState,
    countdown: Countdown,
}

impl<S: ItemStore + ?Sized> AuctionSession<S> {
    pub fn new(store: Arc<S>, clock: Arc<dyn Clock>, tick_interval: Duration) -> Self {
        Self {
            store,
            clock,
            current: None,
            display: DisplayState::default(),
            countdown: Countdown::new(tick_interval),
        }
    }

    pub fn state(&self) -> SessionState {
        match &self.current {
            None => SessionState::NoSelection,
            Some(item) if item.is_biddable() => SessionState::Active,
            Some(_) => SessionState::ClosedOrArchived,
        }
    }

    pub fn current_item(&self) -> Option<&Item> {
        self.current.as_ref()
    }

    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    pub fn is_counting_down(&self) -> bool {
        self.countdown.is_running()
    }

    /// 다음 카운트다운 틱까지 대기. 카운트다운이 없으면 반환하지 않는다.
    pub async fn next_tick(&mut self) -> i64 {
        self.countdown.tick().await
    }

    /// 선택 해제
    pub fn clear(&mut self) {
        self.countdown.stop();
        self.current = None;
        self.display = DisplayState::default();
    }

    /// 상품 선택.
    /// 범위를 벗어난 인덱스는 선택 해제로 처리한다.
    /// 진행 중인 상품이면 즉시 남은 시간을 계산하고 카운트다운을 시작한다.
    pub async fn select_item(
        &mut self,
        catalog: &ItemCatalog<S>,
        index: i64,
    ) -> Result<(), StoreError> {
        self.countdown.stop();

        let Some(item) = catalog.get(index).cloned() else {
            info!("{:<12} --> 선택 해제 index: {}", "Session", index);
            self.clear();
            return Ok(());
        };
        info!(
            "{:<12} --> 상품 선택 index: {}, id: {}",
            "Session", index, item.id
        );

        self.display = DisplayState {
            item_name: Some(item.name.clone()),
            image: item.image_path.clone(),
            price: Some(item.price),
            bid_step: Some(item.bid_step),
            remaining: RemainingTime::Unknown,
            bid_enabled: false,
        };

        let item_id = item.id;
        let is_active = item.is_active;
        self.current = Some(item);

        let result = if is_active {
            self.countdown.start(item_id);
            self.tick().await.map(|_| ())
        } else {
            self.display.remaining = RemainingTime::Ended;
            Ok(())
        };

        self.display.bid_enabled = self.current.as_ref().is_some_and(Item::is_biddable);
        result
    }

    /// 남은 시간 재계산.
    /// 종료 시각이 지났으면 상품을 종료 상태로 저장하고 카운트다운을 멈춘다.
    /// 종료 쓰기가 실패하면 상태를 유지하고 오류를 반환한다.
    pub async fn tick(&mut self) -> Result<TickOutcome, StoreError> {
        let Some(item) = self.current.as_ref() else {
            return Ok(TickOutcome::Idle);
        };
        if !item.is_active || !self.countdown.is_running() {
            return Ok(TickOutcome::Idle);
        }

        let item_id = item.id;
        let closes_at = item.closes_at();
        let now = self.clock.now();

        if now >= closes_at {
            if let Err(e) = self.store.set_item_inactive(item_id).await {
                error!(
                    "{:<12} --> 경매 종료 저장 실패 id: {}, {}",
                    "Session", item_id, e
                );
                self.display.remaining = RemainingTime::Counting(Remaining::from_secs(0));
                return Err(e);
            }
            self.countdown.stop();
            if let Some(item) = self.current.as_mut() {
                item.is_active = false;
            }
            self.display.remaining = RemainingTime::Ended;
            self.display.bid_enabled = false;
            info!("{:<12} --> 경매 종료 id: {}", "Session", item_id);
            return Ok(TickOutcome::Closed);
        }

        let remaining = Remaining::from_secs((closes_at - now).num_seconds());
        self.display.remaining = RemainingTime::Counting(remaining);
        debug!(
            "{:<12} --> 남은 시간 id: {}, {}",
            "Session", item_id, remaining
        );
        Ok(TickOutcome::Counting(remaining))
    }

    /// 입찰.
    /// 검증 순서: 선택 여부, 입찰자 이름, 경매 진행 여부, 가격 한도.
    /// 저장에 성공한 경우에만 메모리의 가격을 갱신한다.
    pub async fn place_bid(&mut self, bidder_name: &str) -> Result<BidReceipt, SessionError> {
        let Some(item) = self.current.as_ref() else {
            warn!("{:<12} --> 입찰 거부: 선택된 상품 없음", "Session");
            return Err(ValidationError::NoItemSelected.into());
        };

        let bidder_name = bidder_name.trim();
        if bidder_name.is_empty() {
            warn!("{:<12} --> 입찰 거부: 입찰자 이름 없음", "Session");
            return Err(ValidationError::MissingBidderName.into());
        }

        let now = self.clock.now();
        if !item.is_biddable() || now >= item.closes_at() {
            warn!("{:<12} --> 입찰 거부: 종료된 경매 id: {}", "Session", item.id);
            return Err(ValidationError::AuctionEnded.into());
        }

        let Some(bid_amount) = item.next_price() else {
            warn!("{:<12} --> 입찰 거부: 가격 한도 초과 id: {}", "Session", item.id);
            return Err(ValidationError::PriceLimitReached.into());
        };

        let bid = NewBid {
            item_id: item.id,
            bidder_name: bidder_name.to_string(),
            bid_time: now,
            bid_amount,
        };
        let item_name = item.name.clone();

        if let Err(e) = self.store.record_bid(&bid).await {
            error!(
                "{:<12} --> 입찰 저장 실패 id: {}, {}",
                "Session", bid.item_id, e
            );
            return Err(e.into());
        }

        if let Some(item) = self.current.as_mut() {
            item.price = bid.bid_amount;
        }
        self.display.price = Some(bid.bid_amount);
        info!(
            "{:<12} --> 입찰 성공 id: {}, 현재 가격: {}",
            "Session", bid.item_id, bid.bid_amount
        );

        Ok(BidReceipt {
            item_id: bid.item_id,
            item_name,
            bidder_name: bid.bidder_name,
            bid_amount: bid.bid_amount,
            bid_time: bid.bid_time,
        })
    }
}
// endregion: --- Auction Session
