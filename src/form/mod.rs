//! The guest message form: draft state, validation, submission and the
//! status banner it renders.

mod controller;
mod draft;
mod error;
mod response;
mod status;

pub use controller::{MessageForm, SEND_EMAIL_PATH};
pub use draft::{DraftMessage, MessagePayload};
pub use error::SubmitError;
pub use response::{
    interpret_response, EndpointResponse, ResponsePayload, APPLICATION_FALLBACK_MESSAGE,
    SERVER_FALLBACK_MESSAGE,
};
pub use status::{Phase, SubmissionStatus, Tone};
