//! View and UI layer
//!
//! This module contains all presentation and rendering components.

pub mod article;
pub mod controls;
pub mod panel;
pub mod settings;
