// region:    --- Imports
use crate::auction::clock::Clock;
use crate::auction::display::{Notice, Screen};
use crate::auction::session::{AuctionSession, TickOutcome};
use crate::bidding::model::Bid;
use crate::catalog::filter::StatusFilter;
use crate::catalog::ItemCatalog;
use crate::config::Config;
use crate::error::{SessionError, StoreError, ValidationError};
use crate::store::ItemStore;
use std::sync::Arc;
use tracing::info;

// endregion: --- Imports

// region:    --- UI Events
/// 화면에서 들어오는 이벤트
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    FilterChanged(StatusFilter),
    SelectionChanged(i64),
    BidClicked(String),
    Tick,
}
// endregion: --- UI Events

// region:    --- Auction App
/// 카탈로그와 세션을 묶어 이벤트를 처리
pub struct AuctionApp<S: ItemStore + ?Sized> {
    store: Arc<S>,
    catalog: ItemCatalog<S>,
    session: AuctionSession<S>,
}

impl<S: ItemStore + ?Sized> AuctionApp<S> {
    pub fn new(store: Arc<S>, clock: Arc<dyn Clock>, config: &Config) -> Self {
        Self {
            catalog: ItemCatalog::new(Arc::clone(&store), config.order),
            session: AuctionSession::new(Arc::clone(&store), clock, config.tick_interval),
            store,
        }
    }

    pub fn catalog(&self) -> &ItemCatalog<S> {
        &self.catalog
    }

    pub fn session(&self) -> &AuctionSession<S> {
        &self.session
    }

    /// 다음 카운트다운 틱까지 대기
    pub async fn next_tick(&mut self) {
        self.session.next_tick().await;
    }

    /// 이벤트 처리 후 사용자에게 보여줄 메시지 반환
    pub async fn handle(&mut self, event: UiEvent) -> Vec<Notice> {
        match event {
            UiEvent::FilterChanged(filter) => self.handle_filter_changed(filter).await,
            UiEvent::SelectionChanged(index) => self.handle_selection_changed(index).await,
            UiEvent::BidClicked(bidder_name) => self.handle_bid_clicked(&bidder_name).await,
            UiEvent::Tick => self.handle_tick().await,
        }
    }

    /// 필터 변경: 목록을 다시 불러오고 첫 상품을 선택
    async fn handle_filter_changed(&mut self, filter: StatusFilter) -> Vec<Notice> {
        self.catalog.load_items(filter).await;

        let mut notices = Vec::new();
        if let Some(e) = self.catalog.last_failure() {
            notices.push(Notice::Error(format!("Could not load items: {e}")));
        }

        match self.catalog.initial_selection() {
            Some(index) => notices.extend(self.select(index).await),
            None => self.session.clear(),
        }
        notices
    }

    async fn handle_selection_changed(&mut self, index: i64) -> Vec<Notice> {
        self.select(index).await
    }

    async fn handle_bid_clicked(&mut self, bidder_name: &str) -> Vec<Notice> {
        match self.session.place_bid(bidder_name).await {
            Ok(receipt) => {
                self.sync_current_item();
                vec![Notice::Confirmation(receipt.confirmation())]
            }
            Err(SessionError::Validation(e)) => vec![Notice::Warning(e.to_string())],
            Err(SessionError::Store(e)) => vec![store_error_notice("Bid was not recorded", &e)],
        }
    }

    async fn handle_tick(&mut self) -> Vec<Notice> {
        match self.session.tick().await {
            Ok(TickOutcome::Closed) => {
                self.sync_current_item();
                Vec::new()
            }
            Ok(_) => Vec::new(),
            Err(e) => vec![store_error_notice("Could not close auction", &e)],
        }
    }

    async fn select(&mut self, index: i64) -> Vec<Notice> {
        let result = self.session.select_item(&self.catalog, index).await;
        self.sync_current_item();
        match result {
            Ok(()) => Vec::new(),
            Err(e) => vec![store_error_notice("Could not close auction", &e)],
        }
    }

    /// 세션에서 바뀐 상품 상태를 목록에 반영
    fn sync_current_item(&mut self) {
        if let Some(item) = self.session.current_item() {
            self.catalog.refresh_item(item);
        }
    }

    /// 선택된 상품의 입찰 이력
    pub async fn bid_history(&self) -> Result<Vec<Bid>, SessionError> {
        let item = self
            .session
            .current_item()
            .ok_or(ValidationError::NoItemSelected)?;
        info!("{:<12} --> 입찰 이력 조회 id: {}", "Handler", item.id);
        Ok(self.store.fetch_bids(item.id).await?)
    }

    /// 현재 화면
    pub fn screen(&self) -> Screen {
        let selected_id = self.session.current_item().map(|item| item.id);
        Screen {
            filter: self.catalog.filter(),
            items: self
                .catalog
                .items()
                .iter()
                .map(|item| item.name.clone())
                .collect(),
            selected: selected_id
                .and_then(|id| self.catalog.items().iter().position(|item| item.id == id)),
            display: self.session.display().clone(),
        }
    }
}
// endregion: --- Auction App

fn store_error_notice(context: &str, e: &StoreError) -> Notice {
    Notice::Error(format!("{context}: {e}"))
}
