pub mod prize_sheet;
