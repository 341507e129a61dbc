pub mod catalog;
pub mod demo;
pub mod pages;
pub mod theme;
