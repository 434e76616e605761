use chrono::Utc;
use cryage::logging::init_logging;
use cryage::models::bar::PriceBar;
use cryage::report::render_summary;
use cryage::signals::engine::TaEngine;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    init_logging();

    // Synthetic trending series standing in for a fetched OHLCV window.
    let mut bars = Vec::new();
    let mut close = 100.0_f64;
    for i in 0..200 {
        let open = close;
        close *= 1.0 + 0.004 * ((i % 7) as f64 - 2.0) / 2.0;
        let high = open.max(close) * 1.002;
        let low = open.min(close) * 0.998;
        bars.push(PriceBar::new(open, high, low, close, 1_500.0, Utc::now()));
    }

    let summary = TaEngine::evaluate(&bars, "BTC/USDT", "1h")?;
    println!("{}", render_summary(&summary, Utc::now()));
    println!("{}", serde_json::to_string_pretty(&summary.verdict)?);

    Ok(())
}
