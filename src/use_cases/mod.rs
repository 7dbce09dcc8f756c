// Use cases layer: validation, generation, and the preview refresh workflow.

pub mod generate;
pub mod refresh;
pub mod validate;

#[cfg(test)]
pub(crate) mod test_support;

pub use generate::GenerateQrUseCase;
pub use refresh::{RefreshInput, RefreshPreviewUseCase};
pub use validate::{coerce_int, validate};
