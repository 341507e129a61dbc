pub mod helpers;

pub use helpers::{
    back_to_top_button, theme_classes, theme_css, theme_js, theme_toggle_button,
};
