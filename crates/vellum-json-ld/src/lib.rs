//! vellum-json-ld - JSON-LD message mappers for vellum.
//!
//! Renders pages and single resources as JSON-LD documents using the
//! schema.org vocabulary: `@id` for canonical URLs, `@type` for type
//! labels, a `view` partial-collection block for page navigation and a
//! `member` array for page items. Embedded resources become nested objects
//! keyed by the embedding path; linked resources become URL-valued fields,
//! upgraded in place when the same relation is also embedded.

mod page;
mod resource;

pub use page::JsonLdPageMapper;
pub use resource::JsonLdResourceMapper;

use serde_json::{Value, json};

const VOCAB: &str = "http://schema.org/";

fn context_value() -> Value {
    json!({ "@vocab": VOCAB })
}
