//! HTML templates compiled into the binary.

use anyhow::Context;
use rust_embed::Embed;
use tera::Tera;

#[derive(Embed)]
#[folder = "templates/"]
struct EmbeddedTemplates;

/// Load every embedded template into a Tera instance.
pub fn load() -> anyhow::Result<Tera> {
    let mut sources = Vec::new();
    for file in EmbeddedTemplates::iter() {
        let name = file.as_ref();
        let content = EmbeddedTemplates::get(name)
            .with_context(|| format!("template {} vanished", name))?;
        let body = std::str::from_utf8(&content.data)
            .with_context(|| format!("template {} is not UTF-8", name))?
            .to_string();
        sources.push((name.to_string(), body));
    }

    let mut tera = Tera::default();
    // All at once so that `extends` resolves regardless of file order
    tera.add_raw_templates(sources)
        .context("compiling templates")?;
    Ok(tera)
}
