//! JSON-LD document shapes produced through the writer engine.

use std::sync::Arc;

use serde_json::{Number, Value, json};
use vellum_core::{
    HttpHeaders, Identifier, IdentifierKind, ModelType, Page, PageWriterBuilder, PathResolver,
    Representor, RepresentorRegistry, RequestInfo, ResourceNameResolver, ResourcePath, ServerUrl,
    SingleModel, SingleModelWriterBuilder,
};
use vellum_json_ld::{JsonLdPageMapper, JsonLdResourceMapper};

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
                .number_field("numberOfPages", |b| Some(Number::from(b.pages)))
                .string_field("name", |b| Some(b.title.clone()))
                .link("license", "https://example.com/license")
                .embedded("author", |b: &Book| b.author.clone())
                .build(),
        )
        .unwrap();
    registry
        .register(
            Representor::<Author>::builder(IdentifierKind::Number, |a| Identifier::Number(a.id))
                .types(["Author"])
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

fn sample_page() -> Page<Book> {
    Page::new(
        vec![
            Book {
                id: 1,
                title: "Dune".into(),
                pages: 412,
                author: Some(Author {
                    id: 7,
                    name: "Frank Herbert".into(),
                }),
            },
            Book {
                id: 2,
                title: "Emma".into(),
                pages: 474,
                author: None,
            },
        ],
        5,
        2,
        2,
    )
    .unwrap()
}

fn write_sample_page() -> Value {
    let page = sample_page();
    let mapper = JsonLdPageMapper::new();
    let request = request();
    let document = PageWriterBuilder::new(&page)
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
fn page_document_shape() {
    let document = write_sample_page();

    assert_eq!(document["@context"], json!({"@vocab": "http://schema.org/"}));
    assert_eq!(document["@type"], json!(["Collection"]));
    assert_eq!(document["@id"], json!("https://api.example.test/p/books"));
    assert_eq!(document["totalItems"], json!(5));
    assert_eq!(document["numberOfItems"], json!(2));
}

#[test]
fn page_view_block() {
    let document = write_sample_page();
    let view = &document["view"];

    assert_eq!(view["@type"], json!("PartialCollectionView"));
    assert_eq!(
        view["@id"],
        json!("https://api.example.test/p/books?page=2&per_page=2")
    );
    assert_eq!(
        view["first"],
        json!("https://api.example.test/p/books?page=1&per_page=2")
    );
    assert_eq!(
        view["last"],
        json!("https://api.example.test/p/books?page=3&per_page=2")
    );
    assert_eq!(
        view["next"],
        json!("https://api.example.test/p/books?page=3&per_page=2")
    );
    assert_eq!(
        view["previous"],
        json!("https://api.example.test/p/books?page=1&per_page=2")
    );
}

#[test]
fn members_carry_fields_and_embedded_author() {
    let document = write_sample_page();
    let members = document["member"].as_array().unwrap();
    assert_eq!(members.len(), 2);

    let dune = &members[0];
    assert_eq!(dune["@id"], json!("https://api.example.test/p/books/1"));
    assert_eq!(dune["@type"], json!(["Book"]));
    assert_eq!(dune["name"], json!("Dune"));
    assert_eq!(dune["numberOfPages"], json!(412));
    assert_eq!(dune["license"], json!("https://example.com/license"));

    let author = &dune["author"];
    assert_eq!(author["@id"], json!("https://api.example.test/p/authors/7"));
    assert_eq!(author["@type"], json!(["Author"]));
    assert_eq!(author["name"], json!("Frank Herbert"));

    // The second book has no author relation at all.
    assert!(members[1].get("author").is_none());
}

#[test]
fn write_is_idempotent_with_a_pure_mapper() {
    let page = sample_page();
    let mapper = JsonLdPageMapper::new();
    let request = request();
    let writer = PageWriterBuilder::new(&page)
        .mapper(&mapper)
        .path_resolver(path_resolver())
        .resource_name_resolver(resource_name_resolver())
        .representor_resolver(registry().resolver())
        .request_info(&request)
        .build();

    assert_eq!(writer.write(), writer.write());
}

#[test]
fn single_resource_document() {
    let model = SingleModel::new(Book {
        id: 1,
        title: "Dune".into(),
        pages: 412,
        author: Some(Author {
            id: 7,
            name: "Frank Herbert".into(),
        }),
    });
    let mapper = JsonLdResourceMapper::new();
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

    assert_eq!(document["@context"], json!({"@vocab": "http://schema.org/"}));
    assert_eq!(document["@id"], json!("https://api.example.test/p/books/1"));
    assert_eq!(document["name"], json!("Dune"));
    assert_eq!(document["author"]["name"], json!("Frank Herbert"));
}
