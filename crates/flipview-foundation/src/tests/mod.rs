mod position_tests;
mod window_tests;
