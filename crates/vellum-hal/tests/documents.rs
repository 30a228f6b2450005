//! HAL document shapes produced through the writer engine.

use std::sync::Arc;

use serde_json::{Number, Value, json};
use vellum_core::{
    HttpHeaders, Identifier, IdentifierKind, ModelType, Page, PageWriterBuilder, PathResolver,
    Representor, RepresentorRegistry, RequestInfo, ResourceNameResolver, ResourcePath, ServerUrl,
    SingleModel, SingleModelWriterBuilder,
};
use vellum_hal::{HalPageMapper, HalResourceMapper};

#[derive(Clone)]
struct Author {
    id: i64,
    name: String,
}

#[derive(Clone)]
struct Book {
    id: i64,
    title: String,
    pages: i64,
    author: Option<Author>,
}

fn registry() -> Arc<RepresentorRegistry> {
    let registry = Arc::new(RepresentorRegistry::new());
    registry
        .register(
            Representor::<Book>::builder(IdentifierKind::Number, |b| Identifier::Number(b.id))
                .types(["Book"])
                .number_field("pages", |b| Some(Number::from(b.pages)))
                .string_field("title", |b| Some(b.title.clone()))
                .link("license", "https://example.com/license")
                .embedded("author", |b: &Book| b.author.clone())
                .build(),
        )
        .unwrap();
    registry
        .register(
            Representor::<Author>::builder(IdentifierKind::Number, |a| Identifier::Number(a.id))
                .string_field("name", |a| Some(a.name.clone()))
                .build(),
        )
        .unwrap();
    registry
}

fn resource_name(type_name: &str) -> Option<&'static str> {
    if type_name == ModelType::of::<Book>().name() {
        Some("books")
    } else if type_name == ModelType::of::<Author>().name() {
        Some("authors")
    } else {
        None
    }
}

fn resource_name_resolver() -> ResourceNameResolver {
    Arc::new(|type_name| resource_name(type_name).map(str::to_string))
}

fn path_resolver() -> PathResolver {
    Arc::new(|identifier, _kind, model_type| {
        let name = resource_name(model_type.name())?;
        ResourcePath::new(name, identifier.as_segment()).ok()
    })
}

fn request() -> RequestInfo {
    RequestInfo::new(
        ServerUrl::new("https://api.example.test").unwrap(),
        HttpHeaders::new(),
    )
}

fn dune() -> Book {
    Book {
        id: 1,
        title: "Dune".into(),
        pages: 412,
        author: Some(Author {
            id: 7,
            name: "Frank Herbert".into(),
        }),
    }
}

fn write_page_document(page: &Page<Book>) -> Value {
    let mapper = HalPageMapper::new();
    let request = request();
    let document = PageWriterBuilder::new(page)
        .mapper(&mapper)
        .path_resolver(path_resolver())
        .resource_name_resolver(resource_name_resolver())
        .representor_resolver(registry().resolver())
        .request_info(&request)
        .build()
        .write();
    serde_json::from_str(&document).unwrap()
}

#[test]
fn page_counts_and_links() {
    let page = Page::new(vec![dune()], 5, 2, 1).unwrap();
    let document = write_page_document(&page);

    assert_eq!(document["total"], json!(5));
    assert_eq!(document["count"], json!(1));

    let links = &document["_links"];
    let base = "https://api.example.test/p/books";
    assert_eq!(links["collection"]["href"], json!(base));
    assert_eq!(links["self"]["href"], json!(format!("{base}?page=2&per_page=1")));
    assert_eq!(links["first"]["href"], json!(format!("{base}?page=1&per_page=1")));
    assert_eq!(links["last"]["href"], json!(format!("{base}?page=5&per_page=1")));
    assert_eq!(links["next"]["href"], json!(format!("{base}?page=3&per_page=1")));
    assert_eq!(links["prev"]["href"], json!(format!("{base}?page=1&per_page=1")));
}

#[test]
fn first_page_has_no_prev_or_next_rel_when_alone() {
    let page = Page::new(vec![dune()], 1, 1, 10).unwrap();
    let document = write_page_document(&page);

    let links = document["_links"].as_object().unwrap();
    assert!(links.contains_key("self"));
    assert!(links.contains_key("first"));
    assert!(links.contains_key("last"));
    assert!(!links.contains_key("next"));
    assert!(!links.contains_key("prev"));
}

#[test]
fn items_nest_under_embedded_item() {
    let page = Page::new(vec![dune()], 1, 1, 10).unwrap();
    let document = write_page_document(&page);

    let items = document["_embedded"]["item"].as_array().unwrap();
    assert_eq!(items.len(), 1);

    let item = &items[0];
    assert_eq!(item["title"], json!("Dune"));
    assert_eq!(item["pages"], json!(412));
    assert_eq!(
        item["_links"]["self"]["href"],
        json!("https://api.example.test/p/books/1")
    );
    assert_eq!(
        item["_links"]["license"]["href"],
        json!("https://example.com/license")
    );
}

#[test]
fn embedded_author_keeps_link_and_embedded_copy() {
    let page = Page::new(vec![dune()], 1, 1, 10).unwrap();
    let document = write_page_document(&page);

    let item = &document["_embedded"]["item"][0];
    let author_url = json!("https://api.example.test/p/authors/7");

    assert_eq!(item["_links"]["author"]["href"], author_url);
    let embedded_author = &item["_embedded"]["author"];
    assert_eq!(embedded_author["name"], json!("Frank Herbert"));
    assert_eq!(embedded_author["_links"]["self"]["href"], author_url);
}

#[test]
fn single_resource_document() {
    let model = SingleModel::new(dune());
    let mapper = HalResourceMapper::new();
    let request = request();
    let document = SingleModelWriterBuilder::new(&model)
        .mapper(&mapper)
        .path_resolver(path_resolver())
        .resource_name_resolver(resource_name_resolver())
        .representor_resolver(registry().resolver())
        .request_info(&request)
        .build()
        .write()
        .unwrap();
    let document: Value = serde_json::from_str(&document).unwrap();

    assert_eq!(document["title"], json!("Dune"));
    assert_eq!(
        document["_links"]["self"]["href"],
        json!("https://api.example.test/p/books/1")
    );
    assert_eq!(
        document["_embedded"]["author"]["name"],
        json!("Frank Herbert")
    );
    // Type labels have no HAL rendition.
    assert!(document.get("@type").is_none());
}
