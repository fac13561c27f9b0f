pub mod audit_domains_command;
pub mod check_search_volume_command;
pub mod commercialize_command;
pub mod expand_command;
pub mod fetch_forecast_command;
pub mod fetch_serp_command;
pub mod scan_unknowns_command;
pub mod site_structure_command;

pub use audit_domains_command::audit_domains;
pub use check_search_volume_command::check_search_volume;
pub use commercialize_command::commercialize;
pub use expand_command::expand;
pub use fetch_forecast_command::fetch_forecast;
pub use fetch_serp_command::fetch_serp;
pub use scan_unknowns_command::scan_unknown_domains;
pub use site_structure_command::site_structure;
