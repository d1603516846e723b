
mod client_tests;
mod game_tests;
