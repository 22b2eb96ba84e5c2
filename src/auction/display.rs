/// 화면 상태와 텍스트 렌더링
// region:    --- Imports
use crate::catalog::filter::StatusFilter;
use serde::Serialize;
use std::fmt::{self, Write};

// endregion: --- Imports

// region:    --- Remaining Time
/// 남은 시간 (시, 분, 초). 시간은 자릿수 제한이 없다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Remaining {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Remaining {
    pub fn from_secs(total: i64) -> Self {
        let total = total.max(0);
        Self {
            hours: total / 3600,
            minutes: (total % 3600) / 60,
            seconds: total % 60,
        }
    }

    pub fn total_secs(&self) -> i64 {
        self.hours * 3600 + self.minutes * 60 + self.seconds
    }
}

impl fmt::Display for Remaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RemainingTime {
    #[default]
    Unknown,
    Counting(Remaining),
    Ended,
}
// endregion: --- Remaining Time

// region:    --- Display State
/// 선택된 상품의 화면 상태
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DisplayState {
    pub item_name: Option<String>,
    pub image: Option<String>,
    pub price: Option<i64>,
    pub bid_step: Option<i64>,
    pub remaining: RemainingTime,
    pub bid_enabled: bool,
}

impl DisplayState {
    pub fn image_text(&self) -> String {
        match &self.image {
            Some(path) => format!("Image: {path}"),
            None => "no image".to_string(),
        }
    }

    pub fn price_text(&self, currency: &str) -> String {
        match self.price {
            Some(price) => format!("Price: {price} {currency}"),
            None => "Price: -".to_string(),
        }
    }

    pub fn bid_step_text(&self, currency: &str) -> String {
        match self.bid_step {
            Some(step) => format!("Bid step: {step} {currency}"),
            None => "Bid step: -".to_string(),
        }
    }

    pub fn time_text(&self) -> String {
        match self.remaining {
            RemainingTime::Unknown => "Time left: -".to_string(),
            RemainingTime::Counting(remaining) => format!("Time left: {remaining}"),
            RemainingTime::Ended => "Auction ended!".to_string(),
        }
    }
}
// endregion: --- Display State

// region:    --- Screen
/// 목록과 선택 상품을 합친 전체 화면
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Screen {
    pub filter: StatusFilter,
    pub items: Vec<String>,
    pub selected: Option<usize>,
    pub display: DisplayState,
}

impl Screen {
    pub fn render(&self, currency: &str) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Items [{}]:", self.filter);
        if self.items.is_empty() {
            let _ = writeln!(out, "  (none)");
        }
        for (index, name) in self.items.iter().enumerate() {
            let marker = if self.selected == Some(index) { '>' } else { ' ' };
            let _ = writeln!(out, "{marker} {index:>3}. {name}");
        }
        let _ = writeln!(out, "{}", self.display.image_text());
        let _ = writeln!(out, "{}", self.display.price_text(currency));
        let _ = writeln!(out, "{}", self.display.bid_step_text(currency));
        let _ = writeln!(out, "{}", self.display.time_text());
        let _ = write!(
            out,
            "Bidding: {}",
            if self.display.bid_enabled {
                "enabled"
            } else {
                "disabled"
            }
        );
        out
    }
}
// endregion: --- Screen

// region:    --- Notice
/// 사용자에게 띄우는 메시지
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "lowercase")]
pub enum Notice {
    Confirmation(String),
    Warning(String),
    Error(String),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Confirmation(msg) => write!(f, "[ok] {msg}"),
            Notice::Warning(msg) => write!(f, "[warning] {msg}"),
            Notice::Error(msg) => write!(f, "[error] {msg}"),
        }
    }
}
// endregion: --- Notice
