// region:    --- Imports
use auction_browser::auction::clock::SystemClock;
use auction_browser::config::Config;
use auction_browser::database::DatabaseManager;
use auction_browser::handlers::AuctionApp;
use auction_browser::store::PgItemStore;
use auction_browser::terminal;
use std::sync::Arc;
use tracing::{error, info};
// endregion: --- Imports

// region:    --- Main
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // logging 초기화 (로그는 stderr, 화면은 stdout)
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();

    // 설정 읽기
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{:<12} --> 설정 오류: {}", "Main", e);
            return Err(e.into());
        }
    };

    // 데이터베이스 연결 (실패 시 종료)
    let db_manager = match DatabaseManager::connect(&config).await {
        Ok(db_manager) => Arc::new(db_manager),
        Err(e) => {
            error!("{:<12} --> 데이터베이스 연결 실패: {}", "Main", e);
            return Err(e.into());
        }
    };

    // 스키마 초기화
    if config.init_schema {
        if let Err(e) = db_manager.initialize_database().await {
            error!("{:<12} --> 데이터베이스 초기화 실패: {:?}", "Main", e);
            return Err(e.into());
        }
        info!("{:<12} --> 데이터베이스 초기화 성공", "Main");
    }

    let store = Arc::new(PgItemStore::new(db_manager));
    let app = AuctionApp::new(store, Arc::new(SystemClock), &config);

    info!("{:<12} --> 경매 브라우저 시작", "Main");
    terminal::run(app, &config).await?;
    Ok(())
}
// endregion: --- Main
