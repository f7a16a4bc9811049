//! Lead form handlers.

mod submit_contact;

pub use submit_contact::{ContactReceipt, SubmitContactCommand, SubmitContactHandler};
