// Article customizer library - exposes all core modules for testing

pub mod app;
pub mod article;
pub mod config;
pub mod services;
pub mod view;
