//! Subway network server.
//!
//! Keeps each line as an ordered chain of stations, validates every
//! edit to that chain, and answers shortest-path queries over the
//! network formed by all lines.

pub mod config;
pub mod domain;
pub mod network;
pub mod repository;
pub mod service;
pub mod web;
