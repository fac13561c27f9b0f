pub mod category;
pub mod classification;
pub mod ctr;
pub mod domain_audit;
pub mod keyword;
pub mod negative_keywords;
pub mod scoring;
pub mod search_volume;
pub mod serp;
pub mod site_structure;
pub mod unknown_scan;
