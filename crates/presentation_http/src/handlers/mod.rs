//! HTTP request handlers

pub mod common;
pub mod health;
pub mod park_ride;
pub mod parking;
pub mod stations;
