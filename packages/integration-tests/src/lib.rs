//! Integration tests for the rich vault client live in `tests/`.
