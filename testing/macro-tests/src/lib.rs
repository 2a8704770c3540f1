//! Compile tests for `#[message]`. Each case under `tests/pass` is built as
//! a standalone crate that only depends on `spm-proto`, then run.
