pub mod fit_response;

pub use fit_response::{FitBreakdownResponse, FitScoreResponse, ENGINE_VERSION};
