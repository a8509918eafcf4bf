//! textgrab - image text extraction client.
//!
//! Client core for a single-image OCR flow: validate a JPEG locally,
//! derive a preview, submit the file to a remote extraction backend over
//! multipart HTTP, and map every failure into one of three user-facing
//! error categories.

pub mod client;
pub mod config;
pub mod ingest;
pub mod models;
pub mod session;
