//! vellum-sample - In-memory sample domain wired into the vellum engine.
//!
//! A stand-in for a real persistence layer: concurrent-map stores with
//! atomic id allocation, plus the representor registrations and resolver
//! wiring that turn the stored models into renderable hypermedia
//! resources in either output format.

mod app;
pub mod blog;
pub mod person;

pub use app::{BLOG_POSTINGS, Format, PEOPLE, SampleApp};
pub use blog::{BlogPostingData, BlogPostingModel, BlogPostingStore};
pub use person::{PersonData, PersonModel, PersonStore};
