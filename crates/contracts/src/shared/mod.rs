pub mod api_error;
pub mod period;
pub mod roster;
