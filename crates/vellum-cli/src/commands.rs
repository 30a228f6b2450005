//! Render command handlers.

use anyhow::{Context, Result};
use tracing::debug;
use vellum_core::{HttpHeaders, RequestInfo, ServerUrl};
use vellum_sample::SampleApp;

use crate::cli::{PageArgs, RenderArgs, SingleArgs};
use crate::output;

fn request_info(args: &RenderArgs) -> Result<RequestInfo> {
    let server_url = ServerUrl::new(&args.server_url).context("invalid --server-url")?;
    let mut headers = HttpHeaders::new();
    if let Some(language) = &args.accept_language {
        headers.insert("accept-language", language.as_str());
    }
    Ok(RequestInfo::new(server_url, headers))
}

pub fn people(args: PageArgs) -> Result<()> {
    let app = SampleApp::new()?;
    let request = request_info(&args.render)?;
    debug!(page = args.page, per_page = args.per_page, "rendering people page");
    let document = app.render_person_page(
        args.render.format.into(),
        &request,
        args.page,
        args.per_page,
    )?;
    output::document(&document, args.render.pretty)
}

pub fn person(args: SingleArgs) -> Result<()> {
    let app = SampleApp::new()?;
    let request = request_info(&args.render)?;
    match app.render_person(args.render.format.into(), &request, args.id) {
        Some(document) => output::document(&document, args.render.pretty),
        None => {
            output::error(&format!("no person with id {}", args.id));
            std::process::exit(1);
        }
    }
}

pub fn blog_postings(args: PageArgs) -> Result<()> {
    let app = SampleApp::new()?;
    let request = request_info(&args.render)?;
    debug!(page = args.page, per_page = args.per_page, "rendering blog posting page");
    let document = app.render_blog_posting_page(
        args.render.format.into(),
        &request,
        args.page,
        args.per_page,
    )?;
    output::document(&document, args.render.pretty)
}

pub fn blog_posting(args: SingleArgs) -> Result<()> {
    let app = SampleApp::new()?;
    let request = request_info(&args.render)?;
    match app.render_blog_posting(args.render.format.into(), &request, args.id) {
        Some(document) => output::document(&document, args.render.pretty),
        None => {
            output::error(&format!("no blog posting with id {}", args.id));
            std::process::exit(1);
        }
    }
}
