pub mod use_prize_list;

pub use use_prize_list::*;
