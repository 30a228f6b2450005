//! Registry and resolver wiring for the sample domain.

use std::sync::Arc;

use serde_json::Number;
use vellum_core::{
    Identifier, IdentifierKind, ModelType, Page, PageWriterBuilder, PathResolver, Representor,
    RepresentorRegistry, RepresentorResolver, RequestInfo, ResourceNameResolver, ResourcePath,
    SingleModel, SingleModelWriterBuilder,
};
use vellum_hal::{HalPageMapper, HalResourceMapper};
use vellum_json_ld::{JsonLdPageMapper, JsonLdResourceMapper};

use crate::blog::{BlogPostingModel, BlogPostingStore};
use crate::person::{PersonModel, PersonStore};

/// Public resource name of the people collection.
pub const PEOPLE: &str = "people";
/// Public resource name of the blog postings collection.
pub const BLOG_POSTINGS: &str = "blog-postings";

/// Output format, selected at writer construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// JSON-LD with the schema.org vocabulary.
    JsonLd,
    /// HAL.
    Hal,
}

/// The wired sample application: seeded stores, registered representors,
/// and the resolvers the writers consume.
pub struct SampleApp {
    persons: Arc<PersonStore>,
    postings: Arc<BlogPostingStore>,
    registry: Arc<RepresentorRegistry>,
}

impl SampleApp {
    /// Build the app with seeded stores and registered representors.
    pub fn new() -> vellum_core::Result<Self> {
        let persons = Arc::new(PersonStore::seeded());
        let postings = Arc::new(BlogPostingStore::seeded());

        let registry = Arc::new(RepresentorRegistry::new());
        registry.register(person_representor(Arc::clone(&persons)))?;
        registry.register(blog_posting_representor(Arc::clone(&persons)))?;

        Ok(Self {
            persons,
            postings,
            registry,
        })
    }

    /// The person store.
    pub fn persons(&self) -> &PersonStore {
        &self.persons
    }

    /// The blog posting store.
    pub fn postings(&self) -> &BlogPostingStore {
        &self.postings
    }

    /// Resolver over the app's representor registry.
    pub fn representor_resolver(&self) -> RepresentorResolver {
        Arc::clone(&self.registry).resolver()
    }

    /// Routes both sample model types by numeric id under their public
    /// resource names.
    pub fn path_resolver(&self) -> PathResolver {
        Arc::new(|identifier, _kind, model_type| {
            let name = resource_name(model_type.name())?;
            ResourcePath::new(name, identifier.as_segment()).ok()
        })
    }

    /// Maps sample model type names to their public resource names.
    pub fn resource_name_resolver(&self) -> ResourceNameResolver {
        Arc::new(|type_name| resource_name(type_name).map(str::to_string))
    }

    /// One page of people as a writer-ready [`Page`].
    pub fn person_page(
        &self,
        page_number: usize,
        per_page: usize,
    ) -> vellum_core::Result<Page<PersonModel>> {
        let (items, total) = self.persons.page(page_number, per_page);
        Page::new(items, total, page_number, per_page)
    }

    /// One page of blog postings as a writer-ready [`Page`].
    pub fn blog_posting_page(
        &self,
        page_number: usize,
        per_page: usize,
    ) -> vellum_core::Result<Page<BlogPostingModel>> {
        let (items, total) = self.postings.page(page_number, per_page);
        Page::new(items, total, page_number, per_page)
    }

    /// Render one page of people in the requested format.
    pub fn render_person_page(
        &self,
        format: Format,
        request: &RequestInfo,
        page_number: usize,
        per_page: usize,
    ) -> vellum_core::Result<String> {
        let page = self.person_page(page_number, per_page)?;
        Ok(self.render_page(format, request, &page))
    }

    /// Render one page of blog postings in the requested format.
    pub fn render_blog_posting_page(
        &self,
        format: Format,
        request: &RequestInfo,
        page_number: usize,
        per_page: usize,
    ) -> vellum_core::Result<String> {
        let page = self.blog_posting_page(page_number, per_page)?;
        Ok(self.render_page(format, request, &page))
    }

    /// Render one person; `None` if absent or unroutable.
    pub fn render_person(&self, format: Format, request: &RequestInfo, id: u64) -> Option<String> {
        let person = self.persons.get(id)?;
        self.render_single(format, request, SingleModel::new(person))
    }

    /// Render one blog posting; `None` if absent or unroutable.
    pub fn render_blog_posting(
        &self,
        format: Format,
        request: &RequestInfo,
        id: u64,
    ) -> Option<String> {
        let posting = self.postings.get(id)?;
        self.render_single(format, request, SingleModel::new(posting))
    }

    fn render_page<T>(&self, format: Format, request: &RequestInfo, page: &Page<T>) -> String
    where
        T: std::any::Any + Clone + Send + Sync,
    {
        match format {
            Format::JsonLd => {
                let mapper = JsonLdPageMapper::new();
                PageWriterBuilder::new(page)
                    .mapper(&mapper)
                    .path_resolver(self.path_resolver())
                    .resource_name_resolver(self.resource_name_resolver())
                    .representor_resolver(self.representor_resolver())
                    .request_info(request)
                    .build()
                    .write()
            }
            Format::Hal => {
                let mapper = HalPageMapper::new();
                PageWriterBuilder::new(page)
                    .mapper(&mapper)
                    .path_resolver(self.path_resolver())
                    .resource_name_resolver(self.resource_name_resolver())
                    .representor_resolver(self.representor_resolver())
                    .request_info(request)
                    .build()
                    .write()
            }
        }
    }

    fn render_single(
        &self,
        format: Format,
        request: &RequestInfo,
        model: SingleModel,
    ) -> Option<String> {
        match format {
            Format::JsonLd => {
                let mapper = JsonLdResourceMapper::new();
                SingleModelWriterBuilder::new(&model)
                    .mapper(&mapper)
                    .path_resolver(self.path_resolver())
                    .resource_name_resolver(self.resource_name_resolver())
                    .representor_resolver(self.representor_resolver())
                    .request_info(request)
                    .build()
                    .write()
            }
            Format::Hal => {
                let mapper = HalResourceMapper::new();
                SingleModelWriterBuilder::new(&model)
                    .mapper(&mapper)
                    .path_resolver(self.path_resolver())
                    .resource_name_resolver(self.resource_name_resolver())
                    .representor_resolver(self.representor_resolver())
                    .request_info(request)
                    .build()
                    .write()
            }
        }
    }
}

fn resource_name(type_name: &str) -> Option<&'static str> {
    if type_name == ModelType::of::<PersonModel>().name() {
        Some(PEOPLE)
    } else if type_name == ModelType::of::<BlogPostingModel>().name() {
        Some(BLOG_POSTINGS)
    } else {
        None
    }
}

fn person_representor(persons: Arc<PersonStore>) -> Representor<PersonModel> {
    Representor::<PersonModel>::builder(IdentifierKind::Number, |p| {
        Identifier::Number(p.id as i64)
    })
    .types(["Person"])
    .boolean_field("emailVerified", |p| Some(p.email_verified))
    .localized_string_field("jobTitle", |p, language| {
        language
            .tags()
            .iter()
            .filter_map(|tag| tag.split('-').next())
            .find_map(|primary| p.job_title.get(primary).cloned())
            .or_else(|| p.job_title.get("en").cloned())
    })
    .string_field("givenName", |p| Some(p.first_name.clone()))
    .string_field("familyName", |p| Some(p.last_name.clone()))
    .string_field("name", |p| Some(p.full_name()))
    .string_field("email", |p| Some(p.email.clone()))
    .string_field("address", |p| Some(p.address.clone()))
    .string_field("birthDate", |p| Some(p.birth_date.to_string()))
    .binary("avatar")
    .linked("spouse", move |p: &PersonModel| {
        p.spouse_id.and_then(|id| persons.get(id))
    })
    .related_collection::<BlogPostingModel>("blogPostings")
    .build()
}

fn blog_posting_representor(persons: Arc<PersonStore>) -> Representor<BlogPostingModel> {
    Representor::<BlogPostingModel>::builder(IdentifierKind::Number, |b| {
        Identifier::Number(b.id as i64)
    })
    .types(["BlogPosting"])
    .number_field("wordCount", |b| {
        Some(Number::from(b.content.split_whitespace().count() as u64))
    })
    .string_field("headline", |b| Some(b.title.clone()))
    .string_field("alternativeHeadline", |b| b.subtitle.clone())
    .string_field("articleBody", |b| Some(b.content.clone()))
    .link("license", "https://creativecommons.org/licenses/by/4.0/")
    .embedded("creator", move |b: &BlogPostingModel| {
        persons.get(b.creator_id)
    })
    .build()
}
