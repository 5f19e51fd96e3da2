//! Cross-crate integration tests for the metnum workspace live in `tests/`.
