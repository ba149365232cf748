pub mod av;
pub mod av_dto;
pub mod quote_source;
pub mod utils;

pub use av::AvApi;
pub use quote_source::QuoteSource;
