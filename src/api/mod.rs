//! REST client for the directory backend

mod client;

pub use client::*;
