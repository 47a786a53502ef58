// Options library for the Brisk editor - settings pages and their stores

pub mod config;
pub mod controls;
pub mod events;
pub mod gutter;
pub mod pages;
pub mod workspace;
