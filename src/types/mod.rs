pub mod answer;
pub mod config;
pub mod question;
pub mod report;
pub mod trait_type;
