/// 남은 시간 재계산 스케줄러
/// 선택된 상품 하나에 대해서만 주기적으로 틱을 발생시킨다.
/// 별도 태스크를 띄우지 않고, 이벤트 루프가 `tick()`을 기다리는 방식이라
/// 입찰/선택 처리와 동시에 실행되지 않는다.
// region:    --- Imports
use tokio::time::{interval_at, Duration, Instant, Interval, MissedTickBehavior};
use tracing::debug;

// endregion: --- Imports

// region:    --- Countdown
#[derive(Debug)]
struct Running {
    item_id: i64,
    interval: Interval,
}

/// 취소 가능한 주기 작업. 동시에 하나만 실행된다.
#[derive(Debug)]
pub struct Countdown {
    period: Duration,
    running: Option<Running>,
}

impl Countdown {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            running: None,
        }
    }

    /// 상품에 대한 카운트다운 시작. 기존 작업은 먼저 중지된다.
    /// 첫 틱은 한 주기 뒤에 발생한다.
    pub fn start(&mut self, item_id: i64) {
        self.stop();
        let mut interval = interval_at(Instant::now() + self.period, self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.running = Some(Running { item_id, interval });
        debug!("{:<12} --> 카운트다운 시작 id: {}", "Scheduler", item_id);
    }

    /// 카운트다운 중지
    pub fn stop(&mut self) {
        if let Some(running) = self.running.take() {
            debug!(
                "{:<12} --> 카운트다운 중지 id: {}",
                "Scheduler", running.item_id
            );
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// 실행 중인 카운트다운의 상품 id
    pub fn item_id(&self) -> Option<i64> {
        self.running.as_ref().map(|running| running.item_id)
    }

    /// 다음 틱까지 대기. 중지 상태면 영원히 대기한다.
    pub async fn tick(&mut self) -> i64 {
        match self.running.as_mut() {
            Some(running) => {
                running.interval.tick().await;
                running.item_id
            }
            None => std::future::pending().await,
        }
    }
}
// endregion: --- Countdown
