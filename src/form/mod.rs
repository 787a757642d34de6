mod controller;
mod errors;

pub use controller::{FormController, FormFields, ModalState};
pub use errors::FormError;
