pub mod constants;
pub mod shared_wheel_game;
pub mod wheel_render;
pub mod wheel_spin;
