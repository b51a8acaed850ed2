pub mod domain;
pub mod matching_use_cases;
pub mod ports;
pub mod services;
