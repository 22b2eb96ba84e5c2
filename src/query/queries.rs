/// 상품 조회 (WHERE / ORDER BY 는 조건에 따라 뒤에 붙는다)
pub const SELECT_ITEMS: &str = "SELECT id, name, price, image_path, end_date, end_time, bid_step, is_active, is_archived FROM items";

/// 경매 종료 처리
pub const SET_ITEM_INACTIVE: &str = "UPDATE items SET is_active = FALSE WHERE id = $1";

/// 상품 가격 갱신 (진행 중이고 보관되지 않은 상품만)
pub const SET_ITEM_PRICE: &str =
    "UPDATE items SET price = $1 WHERE id = $2 AND is_active = TRUE AND is_archived = FALSE";

/// 입찰 기록 추가
pub const INSERT_BID: &str =
    "INSERT INTO bids (item_id, bidder_name, bid_time, bid_amount) VALUES ($1, $2, $3, $4)";

/// 상품 입찰 조회
pub const GET_ITEM_BIDS: &str = r#"
    SELECT id, item_id, bidder_name, bid_time, bid_amount
    FROM bids
    WHERE item_id = $1
    ORDER BY bid_time DESC, id DESC
"#;
