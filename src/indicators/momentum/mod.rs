pub mod awesome;
pub mod cci;
pub mod elder_ray;
pub mod macd;
pub mod momentum;
pub mod rsi;
pub mod stoch_rsi;
pub mod stochastic;
pub mod ultimate;
pub mod williams;

pub use awesome::calculate_awesome_oscillator;
pub use cci::calculate_cci;
pub use elder_ray::calculate_bull_bear_power;
pub use macd::{calculate_macd, calculate_macd_default};
pub use momentum::calculate_momentum;
pub use rsi::{calculate_rsi, calculate_rsi_default, rsi_series};
pub use stoch_rsi::calculate_stoch_rsi_k;
pub use stochastic::calculate_stoch_k;
pub use ultimate::calculate_ultimate_oscillator;
pub use williams::calculate_williams_r;
