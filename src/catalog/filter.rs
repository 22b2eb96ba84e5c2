/// 상품 목록 필터
/// 필터 조건은 문자열이 아닌 데이터(ItemPredicate)로 표현되고,
/// 저장소 구현체가 이를 바인딩 파라미터 또는 메모리 비교로 변환한다.
// region:    --- Imports
use crate::bidding::model::Item;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

// endregion: --- Imports

// region:    --- Status Filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Closed,
    Archived,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 4] = [
        StatusFilter::All,
        StatusFilter::Active,
        StatusFilter::Closed,
        StatusFilter::Archived,
    ];

    /// 필터에 대응하는 조건
    pub fn predicate(self) -> ItemPredicate {
        match self {
            StatusFilter::All => ItemPredicate::default(),
            StatusFilter::Active => ItemPredicate {
                is_active: Some(true),
                is_archived: Some(false),
            },
            StatusFilter::Closed => ItemPredicate {
                is_active: Some(false),
                is_archived: Some(false),
            },
            StatusFilter::Archived => ItemPredicate {
                is_active: None,
                is_archived: Some(true),
            },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Active => "active",
            StatusFilter::Closed => "closed",
            StatusFilter::Archived => "archived",
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusFilter {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "active" => Ok(StatusFilter::Active),
            "closed" => Ok(StatusFilter::Closed),
            "archived" => Ok(StatusFilter::Archived),
            _ => Err(ConfigError::Invalid {
                var: "status filter",
                value: s.to_string(),
            }),
        }
    }
}
// endregion: --- Status Filter

// region:    --- Item Predicate
/// `None`인 필드는 조건에서 제외된다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ItemPredicate {
    pub is_active: Option<bool>,
    pub is_archived: Option<bool>,
}

impl ItemPredicate {
    pub fn is_empty(&self) -> bool {
        self.is_active.is_none() && self.is_archived.is_none()
    }

    pub fn matches(&self, item: &Item) -> bool {
        self.is_active.map_or(true, |v| item.is_active == v)
            && self.is_archived.map_or(true, |v| item.is_archived == v)
    }
}
// endregion: --- Item Predicate

// region:    --- Item Order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemOrder {
    #[default]
    IdAsc,
    /// 마감이 가까운 순, 같으면 id 순
    EndingSoonest,
}

impl ItemOrder {
    pub fn sql(self) -> &'static str {
        match self {
            ItemOrder::IdAsc => " ORDER BY id ASC",
            ItemOrder::EndingSoonest => " ORDER BY end_date ASC, end_time ASC, id ASC",
        }
    }

    pub fn compare(self, a: &Item, b: &Item) -> Ordering {
        match self {
            ItemOrder::IdAsc => a.id.cmp(&b.id),
            ItemOrder::EndingSoonest => a
                .closes_at()
                .cmp(&b.closes_at())
                .then_with(|| a.id.cmp(&b.id)),
        }
    }
}

impl FromStr for ItemOrder {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "id" => Ok(ItemOrder::IdAsc),
            "ending" => Ok(ItemOrder::EndingSoonest),
            _ => Err(ConfigError::Invalid {
                var: "AUCTION_ORDER",
                value: s.to_string(),
            }),
        }
    }
}
// endregion: --- Item Order
