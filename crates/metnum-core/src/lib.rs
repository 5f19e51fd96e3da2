//! # metnum-core
//!
//! Input parsing and validation, request/response types, method
//! enumerations, form state and result formatting. Nothing in this crate
//! touches the network, the terminal or the filesystem.

pub mod constants;
pub mod envelope;
pub mod error;
pub mod form;
pub mod format;
pub mod methods;
pub mod parse;
pub mod request;
pub mod validate;

pub use envelope::{Explanation, ResultEnvelope, ResultValue};
pub use error::{MetnumError, ParseError, RemoteError, ValidationError};
pub use form::{
    DifferentiationForm, FieldKind, FieldSpec, FormState, IntegrationForm, InterpolationForm,
};
pub use format::{format_list, format_number, format_preview, format_result, FormatOptions};
pub use methods::{
    parse_method, DifferentiationMethod, Feature, IntegrationMethod, InterpolationMethod, Method,
};
pub use request::{DifferentiationRequest, IntegrationRequest, InterpolationRequest};
