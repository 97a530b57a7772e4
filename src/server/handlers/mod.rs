pub mod health;
pub mod price_lists;
pub mod responses;
pub mod workspace;
