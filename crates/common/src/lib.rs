pub mod types;

pub use types::ApiResponse;
