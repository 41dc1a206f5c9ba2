//! Register use case: the saved asset book.

mod use_case;

pub use use_case::{ImportReport, RegisterRow, RegisterUseCase, RejectedAsset};
