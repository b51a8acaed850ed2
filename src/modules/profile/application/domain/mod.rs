pub mod entities;
pub mod investor_profile;
pub mod policies;
