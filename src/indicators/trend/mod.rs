pub mod adx;
pub mod ema;
pub mod hma;
pub mod ichimoku;
pub mod sma;
pub mod vwma;
pub mod wma;

pub use adx::{calculate_adx, calculate_adx_default};
pub use ema::calculate_ema;
pub use hma::calculate_hma;
pub use ichimoku::calculate_ichimoku_baseline;
pub use sma::calculate_sma;
pub use vwma::calculate_vwma;
pub use wma::calculate_wma;
