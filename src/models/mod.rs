pub mod config;
pub mod types;

pub use config::Config;
pub use types::{
    Benefit, CtaSection, Feature, HeroSection, LandingPage, PageId, PageSummary, PricingPlan,
    Stat, Testimonial,
};
