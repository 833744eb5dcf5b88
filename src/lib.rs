//! SeraNavi - therapist directory web frontend
//!
//! A client-side Dioxus app: keyword search, categorical filters, a
//! localStorage-backed favorites set, and a detail modal over a listing
//! fetched from the directory API.

#![allow(non_snake_case)]

pub mod api;
pub mod app;
pub mod components;
pub mod filter;
pub mod pages;
pub mod routes;
pub mod storage;
pub mod types;
