mod app;
mod calc;
mod utils;
