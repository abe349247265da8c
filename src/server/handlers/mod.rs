pub mod quotes;
pub mod rides;
