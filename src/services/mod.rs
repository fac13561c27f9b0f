pub mod batch_job;
pub mod forecast_client;
pub mod retry;
pub mod search_volume_client;
pub mod serp_client;
pub mod wordstat_client;

pub use batch_job::*;
pub use forecast_client::*;
pub use retry::*;
pub use search_volume_client::*;
pub use serp_client::*;
pub use wordstat_client::*;
