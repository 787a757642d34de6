mod controller;
mod errors;

pub use controller::App;
pub use errors::AppError;
