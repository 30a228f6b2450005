//! The recursive page/resource writer engine.
//!
//! [`PageWriter`] drives a whole page: counts, collection and page URLs,
//! then one [`FieldsWriter`] pass per item, recursing into embedded
//! related resources with the embedding path threaded through every mapper
//! call. [`SingleModelWriter`] does the same for one standalone resource.

mod fields;
mod page;
mod single;
pub mod url;

pub use fields::FieldsWriter;
pub use page::{
    PageWriter, PageWriterBuildStep, PageWriterBuilder, PageWriterPathResolverStep,
    PageWriterRepresentorStep, PageWriterRequestInfoStep, PageWriterResourceNameStep,
};
pub use single::{
    SingleModelWriter, SingleModelWriterBuildStep, SingleModelWriterBuilder,
    SingleModelWriterPathResolverStep, SingleModelWriterRepresentorStep,
    SingleModelWriterRequestInfoStep, SingleModelWriterResourceNameStep,
};
pub use url::PageType;
