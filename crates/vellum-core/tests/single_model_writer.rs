//! Single-model writer behavior against a call-recording mapper.

mod common;

use std::sync::Arc;

use vellum_core::{RepresentorRegistry, SingleModel, SingleModelWriterBuilder};

use common::{
    Agency, Call, RecordingMapper, author, book, book_with_author, path_resolver,
    path_resolver_skipping_books, registry, request, resource_name_resolver,
};

fn write_model(model: &SingleModel, mapper: &RecordingMapper) -> Option<String> {
    let request = request();
    SingleModelWriterBuilder::new(model)
        .mapper(mapper)
        .path_resolver(path_resolver())
        .resource_name_resolver(resource_name_resolver())
        .representor_resolver(registry().resolver())
        .request_info(&request)
        .build()
        .write()
}

#[test]
fn renders_a_resolvable_model() {
    let model = SingleModel::new(book(1, "Dune"));
    let mapper = RecordingMapper::new();
    let document = write_model(&model, &mapper);

    assert!(document.is_some());
    let calls = mapper.calls();
    assert_eq!(calls.first(), Some(&Call::Start));
    assert_eq!(calls.last(), Some(&Call::Finish));
    assert!(calls.contains(&Call::SelfUrl("https://api.example.test/p/books/1".into())));
    assert!(calls.contains(&Call::Str {
        name: "title".into(),
        value: "Dune".into(),
    }));
    assert!(calls.contains(&Call::Types(vec!["Book".into(), "CreativeWork".into()])));
}

#[test]
fn yields_none_for_unroutable_model() {
    let model = SingleModel::new(book(2, "Emma"));
    let mapper = RecordingMapper::new();
    let request = request();
    let document = SingleModelWriterBuilder::new(&model)
        .mapper(&mapper)
        .path_resolver(path_resolver_skipping_books(vec![2]))
        .resource_name_resolver(resource_name_resolver())
        .representor_resolver(registry().resolver())
        .request_info(&request)
        .build()
        .write();

    assert!(document.is_none());
    assert!(mapper.calls().is_empty());
}

#[test]
fn yields_none_without_representor() {
    let model = SingleModel::new(book(1, "Dune"));
    let mapper = RecordingMapper::new();
    let request = request();
    let empty_registry = Arc::new(RepresentorRegistry::new());
    let document = SingleModelWriterBuilder::new(&model)
        .mapper(&mapper)
        .path_resolver(path_resolver())
        .resource_name_resolver(resource_name_resolver())
        .representor_resolver(empty_registry.resolver())
        .request_info(&request)
        .build()
        .write();

    assert!(document.is_none());
    assert!(mapper.calls().is_empty());
}

#[test]
fn embedded_resources_recurse_with_the_relation_path() {
    let mut deep_author = author(7, "Frank Herbert");
    deep_author.agency = Some(Agency {
        id: 3,
        name: "Trident".into(),
    });
    let model = SingleModel::new(book_with_author(1, "Dune", deep_author));
    let mapper = RecordingMapper::new();
    write_model(&model, &mapper);
    let calls = mapper.calls();

    assert!(calls.contains(&Call::EmbeddedStr {
        path: vec!["author".into()],
        name: "name".into(),
        value: "Frank Herbert".into(),
    }));
    assert!(calls.contains(&Call::EmbeddedStr {
        path: vec!["author".into(), "agency".into()],
        name: "name".into(),
        value: "Trident".into(),
    }));
    assert!(calls.contains(&Call::LinkedUrl {
        path: vec!["author".into()],
        url: "https://api.example.test/p/authors/7".into(),
    }));
    assert!(calls.contains(&Call::EmbeddedUrl {
        path: vec!["author".into()],
        url: "https://api.example.test/p/authors/7".into(),
    }));
}

#[test]
fn related_collection_url_sits_under_the_resource() {
    let model = SingleModel::new(book(1, "Dune"));
    let mapper = RecordingMapper::new();
    write_model(&model, &mapper);

    assert!(mapper.calls().contains(&Call::LinkedUrl {
        path: vec!["reviews".into()],
        url: "https://api.example.test/p/books/1/reviews".into(),
    }));
}
