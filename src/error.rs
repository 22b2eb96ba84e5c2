use thiserror::Error;

/// 사용자 입력 오류. 저장소 접근 없이 작업이 중단된다.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("no item selected")]
    NoItemSelected,
    #[error("missing bidder name")]
    MissingBidderName,
    #[error("auction ended")]
    AuctionEnded,
    #[error("price limit reached")]
    PriceLimitReached,
}

/// 저장소 조회/쓰기 오류
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("item {0} is not open for bidding")]
    ItemUnavailable(i64),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}
