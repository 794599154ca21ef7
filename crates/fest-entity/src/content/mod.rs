//! Public site content entities.

pub mod model;

pub use model::{Club, CreateClub, CreateSponsor, SiteConfig, Sponsor, UpdateSiteConfig};
