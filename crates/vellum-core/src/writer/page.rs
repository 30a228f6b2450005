//! Page writer.

use std::any::Any;

use tracing::{debug, trace};

use crate::document::ObjectBuilder;
use crate::mapper::PageMapper;
use crate::page::Page;
use crate::request::RequestInfo;
use crate::resolve::{PathResolver, RepresentorResolver, ResourceNameResolver};
use crate::single_model::SingleModel;
use crate::types::{FieldPath, ResourcePath};

use super::fields::FieldsWriter;
use super::url::{self, PageType};

/// Writes one [`Page`] as a hypermedia document through a [`PageMapper`].
///
/// Collaborators are supplied through a staged builder: each required step
/// is its own type, so omitting one is a compile error rather than a
/// runtime panic. A writer is a per-request value; [`PageWriter::write`] is
/// expected to be called once, and repeated calls produce identical output
/// when the mapper is side-effect free.
///
/// Items whose representor or path does not resolve are silently omitted
/// from the output, at the top level and at every embedding depth.
pub struct PageWriter<'a, T, M> {
    page: &'a Page<T>,
    mapper: &'a M,
    path_resolver: PathResolver,
    resource_name_resolver: ResourceNameResolver,
    representor_resolver: RepresentorResolver,
    request: &'a RequestInfo,
}

impl<'a, T, M> PageWriter<'a, T, M>
where
    T: Any + Clone + Send + Sync,
    M: PageMapper,
{
    /// Write the page to a JSON text document.
    pub fn write(&self) -> String {
        let headers = self.request.http_headers();
        let meta = self.page.meta();
        let mut page_doc = ObjectBuilder::new();

        self.mapper.on_start(&mut page_doc, &meta, headers);

        self.mapper.map_item_total_count(&mut page_doc, meta.total_count);
        // Nominal page size: items skipped below still count here.
        self.mapper.map_page_count(&mut page_doc, meta.item_count);

        if let Some(collection_url) = self.collection_url() {
            self.mapper.map_collection_url(&mut page_doc, &collection_url);

            self.mapper.map_current_page_url(
                &mut page_doc,
                &url::collection_page_url(&collection_url, &meta, PageType::Current),
            );
            self.mapper.map_first_page_url(
                &mut page_doc,
                &url::collection_page_url(&collection_url, &meta, PageType::First),
            );
            self.mapper.map_last_page_url(
                &mut page_doc,
                &url::collection_page_url(&collection_url, &meta, PageType::Last),
            );

            if meta.has_next {
                self.mapper.map_next_page_url(
                    &mut page_doc,
                    &url::collection_page_url(&collection_url, &meta, PageType::Next),
                );
            }

            if meta.has_previous {
                self.mapper.map_previous_page_url(
                    &mut page_doc,
                    &url::collection_page_url(&collection_url, &meta, PageType::Previous),
                );
            }
        } else {
            debug!(
                model = %self.page.model_type(),
                "no public resource name; omitting collection and page URLs"
            );
        }

        for item in self.page.items() {
            self.write_item(&mut page_doc, &SingleModel::new(item.clone()));
        }

        self.mapper.on_finish(&mut page_doc, &meta, headers);

        page_doc.build().to_string()
    }

    fn collection_url(&self) -> Option<String> {
        let name = (self.resource_name_resolver)(self.page.model_type().name())?;
        Some(url::collection_url(
            self.request.server_url(),
            self.page.path(),
            &name,
        ))
    }

    fn resolve_path(&self, model: &SingleModel) -> Option<ResourcePath> {
        let representor = (self.representor_resolver)(model.model_type())?;
        let identifier = representor.identifier(model)?;
        (self.path_resolver)(&identifier, representor.identifier_kind(), model.model_type())
    }

    fn fields_writer<'b>(
        &'b self,
        model: &'b SingleModel,
        embedded_path: FieldPath,
    ) -> Option<FieldsWriter<'b>> {
        let representor = (self.representor_resolver)(model.model_type())?;
        let path = self.resolve_path(model)?;
        Some(FieldsWriter::new(
            model,
            self.request,
            representor,
            path,
            embedded_path,
        ))
    }

    fn write_item(&self, page_doc: &mut ObjectBuilder, model: &SingleModel) {
        let Some(fields_writer) = self.fields_writer(model, FieldPath::root()) else {
            debug!(model = %model.model_type(), "skipping item without representor or path");
            return;
        };
        trace!(model = %model.model_type(), "writing item");

        let headers = self.request.http_headers();
        let mut item_doc = ObjectBuilder::new();

        self.mapper.on_start_item(page_doc, &mut item_doc, model, headers);

        fields_writer.write_boolean_fields(|name, value| {
            self.mapper.map_item_boolean_field(&mut item_doc, name, value);
        });

        fields_writer.write_localized_string_fields(|name, value| {
            self.mapper.map_item_string_field(&mut item_doc, name, value);
        });

        fields_writer.write_number_fields(|name, value| {
            self.mapper.map_item_number_field(&mut item_doc, name, value);
        });

        fields_writer.write_string_fields(|name, value| {
            self.mapper.map_item_string_field(&mut item_doc, name, value);
        });

        fields_writer.write_links(|name, link| {
            self.mapper.map_item_link(&mut item_doc, name, link);
        });

        fields_writer.write_types(|types| {
            self.mapper.map_item_types(&mut item_doc, types);
        });

        fields_writer.write_binaries(|name, binary_url| {
            self.mapper.map_item_link(&mut item_doc, name, binary_url);
        });

        fields_writer.write_self_url(|self_url| {
            self.mapper.map_item_self_url(&mut item_doc, self_url);
        });

        let path_of = |target: &SingleModel| self.resolve_path(target);

        fields_writer.write_embedded_related_models(
            &mut item_doc,
            &path_of,
            |doc, target, nested_path| self.write_item_embedded_model_fields(doc, target, nested_path),
            |doc, target_url, nested_path| {
                self.mapper.map_item_linked_resource_url(doc, nested_path, target_url);
            },
            |doc, target_url, nested_path| {
                self.mapper.map_item_embedded_resource_url(doc, nested_path, target_url);
            },
        );

        fields_writer.write_linked_related_models(&path_of, |target_url, nested_path| {
            self.mapper.map_item_linked_resource_url(&mut item_doc, nested_path, target_url);
        });

        fields_writer.write_related_collections(
            &|type_name| (self.resource_name_resolver)(type_name),
            |collection_url, nested_path| {
                self.mapper.map_item_linked_resource_url(&mut item_doc, nested_path, collection_url);
            },
        );

        self.mapper.on_finish_item(page_doc, &mut item_doc, model, headers);
    }

    fn write_item_embedded_model_fields(
        &self,
        item_doc: &mut ObjectBuilder,
        model: &SingleModel,
        embedded_path: &FieldPath,
    ) {
        let Some(fields_writer) = self.fields_writer(model, embedded_path.clone()) else {
            debug!(
                model = %model.model_type(),
                path = %embedded_path.dotted(),
                "skipping embedded resource without representor or path"
            );
            return;
        };

        fields_writer.write_boolean_fields(|name, value| {
            self.mapper
                .map_item_embedded_resource_boolean_field(item_doc, embedded_path, name, value);
        });

        fields_writer.write_localized_string_fields(|name, value| {
            self.mapper
                .map_item_embedded_resource_string_field(item_doc, embedded_path, name, value);
        });

        fields_writer.write_number_fields(|name, value| {
            self.mapper
                .map_item_embedded_resource_number_field(item_doc, embedded_path, name, value);
        });

        fields_writer.write_string_fields(|name, value| {
            self.mapper
                .map_item_embedded_resource_string_field(item_doc, embedded_path, name, value);
        });

        fields_writer.write_links(|name, link| {
            self.mapper
                .map_item_embedded_resource_link(item_doc, embedded_path, name, link);
        });

        fields_writer.write_types(|types| {
            self.mapper
                .map_item_embedded_resource_types(item_doc, embedded_path, types);
        });

        fields_writer.write_binaries(|name, binary_url| {
            self.mapper
                .map_item_embedded_resource_link(item_doc, embedded_path, name, binary_url);
        });

        let path_of = |target: &SingleModel| self.resolve_path(target);

        fields_writer.write_embedded_related_models(
            item_doc,
            &path_of,
            |doc, target, nested_path| self.write_item_embedded_model_fields(doc, target, nested_path),
            |doc, target_url, nested_path| {
                self.mapper.map_item_linked_resource_url(doc, nested_path, target_url);
            },
            |doc, target_url, nested_path| {
                self.mapper.map_item_embedded_resource_url(doc, nested_path, target_url);
            },
        );

        fields_writer.write_linked_related_models(&path_of, |target_url, nested_path| {
            self.mapper.map_item_linked_resource_url(item_doc, nested_path, target_url);
        });

        fields_writer.write_related_collections(
            &|type_name| (self.resource_name_resolver)(type_name),
            |collection_url, nested_path| {
                self.mapper.map_item_linked_resource_url(item_doc, nested_path, collection_url);
            },
        );
    }
}

/// First step: the page is set, the mapper is next.
pub struct PageWriterBuilder<'a, T> {
    page: &'a Page<T>,
}

impl<'a, T> PageWriterBuilder<'a, T> {
    /// Start the staged builder for `page`.
    pub fn new(page: &'a Page<T>) -> Self {
        Self { page }
    }

    /// Set the mapper that renders the output format.
    pub fn mapper<M: PageMapper>(self, mapper: &'a M) -> PageWriterPathResolverStep<'a, T, M> {
        PageWriterPathResolverStep {
            page: self.page,
            mapper,
        }
    }
}

/// Second step: the path resolver is next.
pub struct PageWriterPathResolverStep<'a, T, M> {
    page: &'a Page<T>,
    mapper: &'a M,
}

impl<'a, T, M> PageWriterPathResolverStep<'a, T, M> {
    /// Set the function that resolves resource paths.
    pub fn path_resolver(self, path_resolver: PathResolver) -> PageWriterResourceNameStep<'a, T, M> {
        PageWriterResourceNameStep {
            page: self.page,
            mapper: self.mapper,
            path_resolver,
        }
    }
}

/// Third step: the resource-name resolver is next.
pub struct PageWriterResourceNameStep<'a, T, M> {
    page: &'a Page<T>,
    mapper: &'a M,
    path_resolver: PathResolver,
}

impl<'a, T, M> PageWriterResourceNameStep<'a, T, M> {
    /// Set the function that resolves public resource names.
    pub fn resource_name_resolver(
        self,
        resource_name_resolver: ResourceNameResolver,
    ) -> PageWriterRepresentorStep<'a, T, M> {
        PageWriterRepresentorStep {
            page: self.page,
            mapper: self.mapper,
            path_resolver: self.path_resolver,
            resource_name_resolver,
        }
    }
}

/// Fourth step: the representor resolver is next.
pub struct PageWriterRepresentorStep<'a, T, M> {
    page: &'a Page<T>,
    mapper: &'a M,
    path_resolver: PathResolver,
    resource_name_resolver: ResourceNameResolver,
}

impl<'a, T, M> PageWriterRepresentorStep<'a, T, M> {
    /// Set the function that resolves representors.
    pub fn representor_resolver(
        self,
        representor_resolver: RepresentorResolver,
    ) -> PageWriterRequestInfoStep<'a, T, M> {
        PageWriterRequestInfoStep {
            page: self.page,
            mapper: self.mapper,
            path_resolver: self.path_resolver,
            resource_name_resolver: self.resource_name_resolver,
            representor_resolver,
        }
    }
}

/// Fifth step: the request context is next.
pub struct PageWriterRequestInfoStep<'a, T, M> {
    page: &'a Page<T>,
    mapper: &'a M,
    path_resolver: PathResolver,
    resource_name_resolver: ResourceNameResolver,
    representor_resolver: RepresentorResolver,
}

impl<'a, T, M> PageWriterRequestInfoStep<'a, T, M> {
    /// Set the per-request context.
    pub fn request_info(self, request: &'a RequestInfo) -> PageWriterBuildStep<'a, T, M> {
        PageWriterBuildStep {
            page: self.page,
            mapper: self.mapper,
            path_resolver: self.path_resolver,
            resource_name_resolver: self.resource_name_resolver,
            representor_resolver: self.representor_resolver,
            request,
        }
    }
}

/// Final step: every collaborator is present.
pub struct PageWriterBuildStep<'a, T, M> {
    page: &'a Page<T>,
    mapper: &'a M,
    path_resolver: PathResolver,
    resource_name_resolver: ResourceNameResolver,
    representor_resolver: RepresentorResolver,
    request: &'a RequestInfo,
}

impl<'a, T, M> PageWriterBuildStep<'a, T, M> {
    /// Construct the writer.
    pub fn build(self) -> PageWriter<'a, T, M> {
        PageWriter {
            page: self.page,
            mapper: self.mapper,
            path_resolver: self.path_resolver,
            resource_name_resolver: self.resource_name_resolver,
            representor_resolver: self.representor_resolver,
            request: self.request,
        }
    }
}
