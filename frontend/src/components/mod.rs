pub mod confetti;
pub mod result_modal;

pub use confetti::{celebrate, Confetti};
pub use result_modal::ResultModal;
