//! Shared fixtures for writer integration tests: a small book/author/agency
//! model universe and a mapper that records every call verbatim.

#![allow(dead_code)]

use std::cell::RefCell;
use std::sync::Arc;

use serde_json::Number;
use vellum_core::{
    HttpHeaders, Identifier, IdentifierKind, ModelType, ObjectBuilder, PageMapper, PageMeta,
    PathResolver, Representor, RepresentorRegistry, RequestInfo, ResourceMapper,
    ResourceNameResolver, ResourcePath, ServerUrl, SingleModel,
};

#[derive(Clone)]
pub struct Agency {
    pub id: i64,
    pub name: String,
}

#[derive(Clone)]
pub struct Author {
    pub id: i64,
    pub name: String,
    pub agency: Option<Agency>,
}

#[derive(Clone)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub pages: i64,
    pub available: bool,
    pub author: Option<Author>,
}

/// Marker type for the book reviews related collection.
#[derive(Clone)]
pub struct Review;

pub fn book(id: i64, title: &str) -> Book {
    Book {
        id,
        title: title.to_string(),
        pages: 100 + id,
        available: id % 2 == 1,
        author: None,
    }
}

pub fn book_with_author(id: i64, title: &str, author: Author) -> Book {
    Book {
        author: Some(author),
        ..book(id, title)
    }
}

pub fn author(id: i64, name: &str) -> Author {
    Author {
        id,
        name: name.to_string(),
        agency: None,
    }
}

pub fn book_representor() -> Representor<Book> {
    Representor::<Book>::builder(IdentifierKind::Number, |b| Identifier::Number(b.id))
        .types(["Book", "CreativeWork"])
        .boolean_field("available", |b| Some(b.available))
        .localized_string_field("displayTitle", |b, language| {
            language.preferred().map(|tag| format!("{} [{}]", b.title, tag))
        })
        .number_field("pages", |b| Some(Number::from(b.pages)))
        .string_field("title", |b| Some(b.title.clone()))
        .link("publisher", "https://publisher.example.com")
        .binary("cover")
        .embedded("author", |b: &Book| b.author.clone())
        .related_collection::<Review>("reviews")
        .build()
}

pub fn author_representor() -> Representor<Author> {
    Representor::<Author>::builder(IdentifierKind::Number, |a| Identifier::Number(a.id))
        .types(["Author"])
        .string_field("name", |a| Some(a.name.clone()))
        .embedded("agency", |a: &Author| a.agency.clone())
        .build()
}

pub fn agency_representor() -> Representor<Agency> {
    Representor::<Agency>::builder(IdentifierKind::Number, |a| Identifier::Number(a.id))
        .types(["Agency"])
        .string_field("name", |a| Some(a.name.clone()))
        .build()
}

/// A registry covering the whole fixture universe.
pub fn registry() -> Arc<RepresentorRegistry> {
    let registry = Arc::new(RepresentorRegistry::new());
    registry.register(book_representor()).unwrap();
    registry.register(author_representor()).unwrap();
    registry.register(agency_representor()).unwrap();
    registry
}

pub fn resource_name(type_name: &str) -> Option<&'static str> {
    if type_name == ModelType::of::<Book>().name() {
        Some("books")
    } else if type_name == ModelType::of::<Author>().name() {
        Some("authors")
    } else if type_name == ModelType::of::<Agency>().name() {
        Some("agencies")
    } else if type_name == ModelType::of::<Review>().name() {
        Some("reviews")
    } else {
        None
    }
}

pub fn resource_name_resolver() -> ResourceNameResolver {
    Arc::new(|type_name| resource_name(type_name).map(str::to_string))
}

/// Routes everything the fixture universe knows about.
pub fn path_resolver() -> PathResolver {
    Arc::new(|identifier, _kind, model_type| {
        let name = resource_name(model_type.name())?;
        ResourcePath::new(name, identifier.as_segment()).ok()
    })
}

/// Routes everything except books with the given ids.
pub fn path_resolver_skipping_books(skipped: Vec<i64>) -> PathResolver {
    Arc::new(move |identifier, _kind, model_type| {
        if model_type == ModelType::of::<Book>()
            && matches!(identifier, Identifier::Number(n) if skipped.contains(n))
        {
            return None;
        }
        let name = resource_name(model_type.name())?;
        ResourcePath::new(name, identifier.as_segment()).ok()
    })
}

pub fn request() -> RequestInfo {
    let mut headers = HttpHeaders::new();
    headers.insert("accept-language", "en");
    RequestInfo::new(ServerUrl::new("https://api.example.test").unwrap(), headers)
}

/// One recorded mapper call.
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Start,
    Finish,
    TotalCount(usize),
    PageCount(usize),
    CollectionUrl(String),
    CurrentPageUrl(String),
    FirstPageUrl(String),
    LastPageUrl(String),
    NextPageUrl(String),
    PreviousPageUrl(String),
    StartItem(String),
    FinishItem(String),
    Bool {
        name: String,
        value: bool,
    },
    Num {
        name: String,
        value: Number,
    },
    Str {
        name: String,
        value: String,
    },
    Link {
        name: String,
        url: String,
    },
    Types(Vec<String>),
    SelfUrl(String),
    EmbeddedBool {
        path: Vec<String>,
        name: String,
        value: bool,
    },
    EmbeddedNum {
        path: Vec<String>,
        name: String,
        value: Number,
    },
    EmbeddedStr {
        path: Vec<String>,
        name: String,
        value: String,
    },
    EmbeddedLink {
        path: Vec<String>,
        name: String,
        url: String,
    },
    EmbeddedTypes {
        path: Vec<String>,
        types: Vec<String>,
    },
    EmbeddedUrl {
        path: Vec<String>,
        url: String,
    },
    LinkedUrl {
        path: Vec<String>,
        url: String,
    },
}

fn segments(path: &vellum_core::FieldPath) -> Vec<String> {
    path.segments().into_iter().map(str::to_string).collect()
}

/// Records every mapper call verbatim, for both writer flavors.
#[derive(Debug, Default)]
pub struct RecordingMapper {
    calls: RefCell<Vec<Call>>,
}

impl RecordingMapper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn push(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

impl PageMapper for RecordingMapper {
    fn on_start(&self, _page_doc: &mut ObjectBuilder, _meta: &PageMeta, _headers: &HttpHeaders) {
        self.push(Call::Start);
    }

    fn on_finish(&self, _page_doc: &mut ObjectBuilder, _meta: &PageMeta, _headers: &HttpHeaders) {
        self.push(Call::Finish);
    }

    fn map_item_total_count(&self, _page_doc: &mut ObjectBuilder, count: usize) {
        self.push(Call::TotalCount(count));
    }

    fn map_page_count(&self, _page_doc: &mut ObjectBuilder, count: usize) {
        self.push(Call::PageCount(count));
    }

    fn map_collection_url(&self, _page_doc: &mut ObjectBuilder, url: &str) {
        self.push(Call::CollectionUrl(url.to_string()));
    }

    fn map_current_page_url(&self, _page_doc: &mut ObjectBuilder, url: &str) {
        self.push(Call::CurrentPageUrl(url.to_string()));
    }

    fn map_first_page_url(&self, _page_doc: &mut ObjectBuilder, url: &str) {
        self.push(Call::FirstPageUrl(url.to_string()));
    }

    fn map_last_page_url(&self, _page_doc: &mut ObjectBuilder, url: &str) {
        self.push(Call::LastPageUrl(url.to_string()));
    }

    fn map_next_page_url(&self, _page_doc: &mut ObjectBuilder, url: &str) {
        self.push(Call::NextPageUrl(url.to_string()));
    }

    fn map_previous_page_url(&self, _page_doc: &mut ObjectBuilder, url: &str) {
        self.push(Call::PreviousPageUrl(url.to_string()));
    }

    fn on_start_item(
        &self,
        _page_doc: &mut ObjectBuilder,
        _item_doc: &mut ObjectBuilder,
        model: &SingleModel,
        _headers: &HttpHeaders,
    ) {
        self.push(Call::StartItem(model.model_type().name().to_string()));
    }

    fn on_finish_item(
        &self,
        _page_doc: &mut ObjectBuilder,
        _item_doc: &mut ObjectBuilder,
        model: &SingleModel,
        _headers: &HttpHeaders,
    ) {
        self.push(Call::FinishItem(model.model_type().name().to_string()));
    }

    fn map_item_boolean_field(&self, _item_doc: &mut ObjectBuilder, name: &str, value: bool) {
        self.push(Call::Bool {
            name: name.to_string(),
            value,
        });
    }

    fn map_item_number_field(&self, _item_doc: &mut ObjectBuilder, name: &str, value: &Number) {
        self.push(Call::Num {
            name: name.to_string(),
            value: value.clone(),
        });
    }

    fn map_item_string_field(&self, _item_doc: &mut ObjectBuilder, name: &str, value: &str) {
        self.push(Call::Str {
            name: name.to_string(),
            value: value.to_string(),
        });
    }

    fn map_item_link(&self, _item_doc: &mut ObjectBuilder, name: &str, url: &str) {
        self.push(Call::Link {
            name: name.to_string(),
            url: url.to_string(),
        });
    }

    fn map_item_types(&self, _item_doc: &mut ObjectBuilder, types: &[String]) {
        self.push(Call::Types(types.to_vec()));
    }

    fn map_item_self_url(&self, _item_doc: &mut ObjectBuilder, url: &str) {
        self.push(Call::SelfUrl(url.to_string()));
    }

    fn map_item_embedded_resource_boolean_field(
        &self,
        _item_doc: &mut ObjectBuilder,
        path: &vellum_core::FieldPath,
        name: &str,
        value: bool,
    ) {
        self.push(Call::EmbeddedBool {
            path: segments(path),
            name: name.to_string(),
            value,
        });
    }

    fn map_item_embedded_resource_number_field(
        &self,
        _item_doc: &mut ObjectBuilder,
        path: &vellum_core::FieldPath,
        name: &str,
        value: &Number,
    ) {
        self.push(Call::EmbeddedNum {
            path: segments(path),
            name: name.to_string(),
            value: value.clone(),
        });
    }

    fn map_item_embedded_resource_string_field(
        &self,
        _item_doc: &mut ObjectBuilder,
        path: &vellum_core::FieldPath,
        name: &str,
        value: &str,
    ) {
        self.push(Call::EmbeddedStr {
            path: segments(path),
            name: name.to_string(),
            value: value.to_string(),
        });
    }

    fn map_item_embedded_resource_link(
        &self,
        _item_doc: &mut ObjectBuilder,
        path: &vellum_core::FieldPath,
        name: &str,
        url: &str,
    ) {
        self.push(Call::EmbeddedLink {
            path: segments(path),
            name: name.to_string(),
            url: url.to_string(),
        });
    }

    fn map_item_embedded_resource_types(
        &self,
        _item_doc: &mut ObjectBuilder,
        path: &vellum_core::FieldPath,
        types: &[String],
    ) {
        self.push(Call::EmbeddedTypes {
            path: segments(path),
            types: types.to_vec(),
        });
    }

    fn map_item_embedded_resource_url(
        &self,
        _item_doc: &mut ObjectBuilder,
        path: &vellum_core::FieldPath,
        url: &str,
    ) {
        self.push(Call::EmbeddedUrl {
            path: segments(path),
            url: url.to_string(),
        });
    }

    fn map_item_linked_resource_url(
        &self,
        _item_doc: &mut ObjectBuilder,
        path: &vellum_core::FieldPath,
        url: &str,
    ) {
        self.push(Call::LinkedUrl {
            path: segments(path),
            url: url.to_string(),
        });
    }
}

impl ResourceMapper for RecordingMapper {
    fn on_start(&self, _doc: &mut ObjectBuilder, _model: &SingleModel, _headers: &HttpHeaders) {
        self.push(Call::Start);
    }

    fn on_finish(&self, _doc: &mut ObjectBuilder, _model: &SingleModel, _headers: &HttpHeaders) {
        self.push(Call::Finish);
    }

    fn map_boolean_field(&self, _doc: &mut ObjectBuilder, name: &str, value: bool) {
        self.push(Call::Bool {
            name: name.to_string(),
            value,
        });
    }

    fn map_number_field(&self, _doc: &mut ObjectBuilder, name: &str, value: &Number) {
        self.push(Call::Num {
            name: name.to_string(),
            value: value.clone(),
        });
    }

    fn map_string_field(&self, _doc: &mut ObjectBuilder, name: &str, value: &str) {
        self.push(Call::Str {
            name: name.to_string(),
            value: value.to_string(),
        });
    }

    fn map_link(&self, _doc: &mut ObjectBuilder, name: &str, url: &str) {
        self.push(Call::Link {
            name: name.to_string(),
            url: url.to_string(),
        });
    }

    fn map_types(&self, _doc: &mut ObjectBuilder, types: &[String]) {
        self.push(Call::Types(types.to_vec()));
    }

    fn map_self_url(&self, _doc: &mut ObjectBuilder, url: &str) {
        self.push(Call::SelfUrl(url.to_string()));
    }

    fn map_embedded_resource_boolean_field(
        &self,
        _doc: &mut ObjectBuilder,
        path: &vellum_core::FieldPath,
        name: &str,
        value: bool,
    ) {
        self.push(Call::EmbeddedBool {
            path: segments(path),
            name: name.to_string(),
            value,
        });
    }

    fn map_embedded_resource_number_field(
        &self,
        _doc: &mut ObjectBuilder,
        path: &vellum_core::FieldPath,
        name: &str,
        value: &Number,
    ) {
        self.push(Call::EmbeddedNum {
            path: segments(path),
            name: name.to_string(),
            value: value.clone(),
        });
    }

    fn map_embedded_resource_string_field(
        &self,
        _doc: &mut ObjectBuilder,
        path: &vellum_core::FieldPath,
        name: &str,
        value: &str,
    ) {
        self.push(Call::EmbeddedStr {
            path: segments(path),
            name: name.to_string(),
            value: value.to_string(),
        });
    }

    fn map_embedded_resource_link(
        &self,
        _doc: &mut ObjectBuilder,
        path: &vellum_core::FieldPath,
        name: &str,
        url: &str,
    ) {
        self.push(Call::EmbeddedLink {
            path: segments(path),
            name: name.to_string(),
            url: url.to_string(),
        });
    }

    fn map_embedded_resource_types(
        &self,
        _doc: &mut ObjectBuilder,
        path: &vellum_core::FieldPath,
        types: &[String],
    ) {
        self.push(Call::EmbeddedTypes {
            path: segments(path),
            types: types.to_vec(),
        });
    }

    fn map_embedded_resource_url(
        &self,
        _doc: &mut ObjectBuilder,
        path: &vellum_core::FieldPath,
        url: &str,
    ) {
        self.push(Call::EmbeddedUrl {
            path: segments(path),
            url: url.to_string(),
        });
    }

    fn map_linked_resource_url(
        &self,
        _doc: &mut ObjectBuilder,
        path: &vellum_core::FieldPath,
        url: &str,
    ) {
        self.push(Call::LinkedUrl {
            path: segments(path),
            url: url.to_string(),
        });
    }
}
