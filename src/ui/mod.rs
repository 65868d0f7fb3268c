pub mod style;

pub use style::base_tokens;
