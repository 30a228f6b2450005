//! Single-model writer.

use tracing::{debug, trace};

use crate::document::ObjectBuilder;
use crate::mapper::ResourceMapper;
use crate::request::RequestInfo;
use crate::resolve::{PathResolver, RepresentorResolver, ResourceNameResolver};
use crate::single_model::SingleModel;
use crate::types::{FieldPath, ResourcePath};

use super::fields::FieldsWriter;

/// Writes one resource as a standalone hypermedia document through a
/// [`ResourceMapper`].
///
/// Staged construction mirrors [`PageWriter`]. Unlike a page, which always
/// renders and merely skips unresolvable items, a single resource that
/// cannot resolve its representor or path yields no document at all.
///
/// [`PageWriter`]: crate::writer::PageWriter
pub struct SingleModelWriter<'a, M> {
    model: &'a SingleModel,
    mapper: &'a M,
    path_resolver: PathResolver,
    resource_name_resolver: ResourceNameResolver,
    representor_resolver: RepresentorResolver,
    request: &'a RequestInfo,
}

impl<'a, M> SingleModelWriter<'a, M>
where
    M: ResourceMapper,
{
    /// Write the resource to a JSON text document.
    ///
    /// Returns `None` when the model's representor or path does not
    /// resolve.
    pub fn write(&self) -> Option<String> {
        let Some(fields_writer) = self.fields_writer(self.model, FieldPath::root()) else {
            debug!(
                model = %self.model.model_type(),
                "no representor or path for model; yielding no document"
            );
            return None;
        };
        trace!(model = %self.model.model_type(), "writing single model");

        let headers = self.request.http_headers();
        let mut doc = ObjectBuilder::new();

        self.mapper.on_start(&mut doc, self.model, headers);

        fields_writer.write_boolean_fields(|name, value| {
            self.mapper.map_boolean_field(&mut doc, name, value);
        });

        fields_writer.write_localized_string_fields(|name, value| {
            self.mapper.map_string_field(&mut doc, name, value);
        });

        fields_writer.write_number_fields(|name, value| {
            self.mapper.map_number_field(&mut doc, name, value);
        });

        fields_writer.write_string_fields(|name, value| {
            self.mapper.map_string_field(&mut doc, name, value);
        });

        fields_writer.write_links(|name, link| {
            self.mapper.map_link(&mut doc, name, link);
        });

        fields_writer.write_types(|types| {
            self.mapper.map_types(&mut doc, types);
        });

        fields_writer.write_binaries(|name, binary_url| {
            self.mapper.map_link(&mut doc, name, binary_url);
        });

        fields_writer.write_self_url(|self_url| {
            self.mapper.map_self_url(&mut doc, self_url);
        });

        let path_of = |target: &SingleModel| self.resolve_path(target);

        fields_writer.write_embedded_related_models(
            &mut doc,
            &path_of,
            |doc, target, nested_path| self.write_embedded_model_fields(doc, target, nested_path),
            |doc, target_url, nested_path| {
                self.mapper.map_linked_resource_url(doc, nested_path, target_url);
            },
            |doc, target_url, nested_path| {
                self.mapper.map_embedded_resource_url(doc, nested_path, target_url);
            },
        );

        fields_writer.write_linked_related_models(&path_of, |target_url, nested_path| {
            self.mapper.map_linked_resource_url(&mut doc, nested_path, target_url);
        });

        fields_writer.write_related_collections(
            &|type_name| (self.resource_name_resolver)(type_name),
            |collection_url, nested_path| {
                self.mapper.map_linked_resource_url(&mut doc, nested_path, collection_url);
            },
        );

        self.mapper.on_finish(&mut doc, self.model, headers);

        Some(doc.build().to_string())
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

    fn write_embedded_model_fields(
        &self,
        doc: &mut ObjectBuilder,
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
                .map_embedded_resource_boolean_field(doc, embedded_path, name, value);
        });

        fields_writer.write_localized_string_fields(|name, value| {
            self.mapper
                .map_embedded_resource_string_field(doc, embedded_path, name, value);
        });

        fields_writer.write_number_fields(|name, value| {
            self.mapper
                .map_embedded_resource_number_field(doc, embedded_path, name, value);
        });

        fields_writer.write_string_fields(|name, value| {
            self.mapper
                .map_embedded_resource_string_field(doc, embedded_path, name, value);
        });

        fields_writer.write_links(|name, link| {
            self.mapper.map_embedded_resource_link(doc, embedded_path, name, link);
        });

        fields_writer.write_types(|types| {
            self.mapper.map_embedded_resource_types(doc, embedded_path, types);
        });

        fields_writer.write_binaries(|name, binary_url| {
            self.mapper
                .map_embedded_resource_link(doc, embedded_path, name, binary_url);
        });

        let path_of = |target: &SingleModel| self.resolve_path(target);

        fields_writer.write_embedded_related_models(
            doc,
            &path_of,
            |doc, target, nested_path| self.write_embedded_model_fields(doc, target, nested_path),
            |doc, target_url, nested_path| {
                self.mapper.map_linked_resource_url(doc, nested_path, target_url);
            },
            |doc, target_url, nested_path| {
                self.mapper.map_embedded_resource_url(doc, nested_path, target_url);
            },
        );

        fields_writer.write_linked_related_models(&path_of, |target_url, nested_path| {
            self.mapper.map_linked_resource_url(doc, nested_path, target_url);
        });

        fields_writer.write_related_collections(
            &|type_name| (self.resource_name_resolver)(type_name),
            |collection_url, nested_path| {
                self.mapper.map_linked_resource_url(doc, nested_path, collection_url);
            },
        );
    }
}

/// First step: the model is set, the mapper is next.
pub struct SingleModelWriterBuilder<'a> {
    model: &'a SingleModel,
}

impl<'a> SingleModelWriterBuilder<'a> {
    /// Start the staged builder for `model`.
    pub fn new(model: &'a SingleModel) -> Self {
        Self { model }
    }

    /// Set the mapper that renders the output format.
    pub fn mapper<M: ResourceMapper>(self, mapper: &'a M) -> SingleModelWriterPathResolverStep<'a, M> {
        SingleModelWriterPathResolverStep {
            model: self.model,
            mapper,
        }
    }
}

/// Second step: the path resolver is next.
pub struct SingleModelWriterPathResolverStep<'a, M> {
    model: &'a SingleModel,
    mapper: &'a M,
}

impl<'a, M> SingleModelWriterPathResolverStep<'a, M> {
    /// Set the function that resolves resource paths.
    pub fn path_resolver(
        self,
        path_resolver: PathResolver,
    ) -> SingleModelWriterResourceNameStep<'a, M> {
        SingleModelWriterResourceNameStep {
            model: self.model,
            mapper: self.mapper,
            path_resolver,
        }
    }
}

/// Third step: the resource-name resolver is next.
pub struct SingleModelWriterResourceNameStep<'a, M> {
    model: &'a SingleModel,
    mapper: &'a M,
    path_resolver: PathResolver,
}

impl<'a, M> SingleModelWriterResourceNameStep<'a, M> {
    /// Set the function that resolves public resource names.
    pub fn resource_name_resolver(
        self,
        resource_name_resolver: ResourceNameResolver,
    ) -> SingleModelWriterRepresentorStep<'a, M> {
        SingleModelWriterRepresentorStep {
            model: self.model,
            mapper: self.mapper,
            path_resolver: self.path_resolver,
            resource_name_resolver,
        }
    }
}

/// Fourth step: the representor resolver is next.
pub struct SingleModelWriterRepresentorStep<'a, M> {
    model: &'a SingleModel,
    mapper: &'a M,
    path_resolver: PathResolver,
    resource_name_resolver: ResourceNameResolver,
}

impl<'a, M> SingleModelWriterRepresentorStep<'a, M> {
    /// Set the function that resolves representors.
    pub fn representor_resolver(
        self,
        representor_resolver: RepresentorResolver,
    ) -> SingleModelWriterRequestInfoStep<'a, M> {
        SingleModelWriterRequestInfoStep {
            model: self.model,
            mapper: self.mapper,
            path_resolver: self.path_resolver,
            resource_name_resolver: self.resource_name_resolver,
            representor_resolver,
        }
    }
}

/// Fifth step: the request context is next.
pub struct SingleModelWriterRequestInfoStep<'a, M> {
    model: &'a SingleModel,
    mapper: &'a M,
    path_resolver: PathResolver,
    resource_name_resolver: ResourceNameResolver,
    representor_resolver: RepresentorResolver,
}

impl<'a, M> SingleModelWriterRequestInfoStep<'a, M> {
    /// Set the per-request context.
    pub fn request_info(self, request: &'a RequestInfo) -> SingleModelWriterBuildStep<'a, M> {
        SingleModelWriterBuildStep {
            model: self.model,
            mapper: self.mapper,
            path_resolver: self.path_resolver,
            resource_name_resolver: self.resource_name_resolver,
            representor_resolver: self.representor_resolver,
            request,
        }
    }
}

/// Final step: every collaborator is present.
pub struct SingleModelWriterBuildStep<'a, M> {
    model: &'a SingleModel,
    mapper: &'a M,
    path_resolver: PathResolver,
    resource_name_resolver: ResourceNameResolver,
    representor_resolver: RepresentorResolver,
    request: &'a RequestInfo,
}

impl<'a, M> SingleModelWriterBuildStep<'a, M> {
    /// Construct the writer.
    pub fn build(self) -> SingleModelWriter<'a, M> {
        SingleModelWriter {
            model: self.model,
            mapper: self.mapper,
            path_resolver: self.path_resolver,
            resource_name_resolver: self.resource_name_resolver,
            representor_resolver: self.representor_resolver,
            request: self.request,
        }
    }
}
