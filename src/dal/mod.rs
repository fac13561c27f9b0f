pub mod keyword_db;
pub mod progress_db;
pub mod search_volume_db;
pub mod serp_db;
pub mod table;

pub use keyword_db::*;
pub use progress_db::*;
pub use search_volume_db::*;
pub use serp_db::*;
pub use table::*;
