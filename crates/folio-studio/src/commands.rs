//! Studio actions over one layout file

use crate::cli::Action;
use crate::config::StudioConfig;
use anyhow::{bail, Context, Result};
use folio_compose::SiteData;
use folio_editor::{EditorConfig, JsonFileGateway, LayoutEditor};
use folio_layout::{EntryId, Insertion};
use folio_section::SectionRegistry;
use serde_json::Value;
use std::fmt::Write as _;
use std::path::Path;
use std::sync::Arc;

/// Loaded editing session plus the site data used for rendering
#[derive(Debug)]
pub struct Studio {
    editor: LayoutEditor,
    site: SiteData,
}

impl Studio {
    /// Open the layout and site data named by `config`
    pub async fn open(config: &StudioConfig, registry: Arc<SectionRegistry>) -> Result<Self> {
        let gateway = Arc::new(JsonFileGateway::new(&config.layout_path));
        let editor = LayoutEditor::open(registry, gateway, EditorConfig::default())
            .await
            .with_context(|| format!("loading layout {}", config.layout_path.display()))?;

        let site = match &config.site_data_path {
            Some(path) => load_site(path)?,
            None => SiteData::default(),
        };

        Ok(Self { editor, site })
    }

    /// Editing session
    #[inline]
    #[must_use]
    pub fn editor(&self) -> &LayoutEditor {
        &self.editor
    }

    /// Run one action and return its output
    ///
    /// Mutating actions save immediately; refused ones leave the file alone.
    pub async fn run(&mut self, action: Action) -> Result<String> {
        match action {
            Action::Catalog => Ok(self.catalog()),
            Action::Show => Ok(self.show()),
            Action::Available => Ok(self.editor.available_types().join("\n")),
            Action::Add { type_id } => match self.editor.insert_at_end(&type_id) {
                Insertion::Inserted(_) => self.commit(format!("added {type_id}")).await,
                Insertion::UnknownType => bail!("unknown section type `{type_id}`"),
                Insertion::AlreadyPresent => Ok(format!("{type_id} is already on the page")),
                Insertion::LimitReached => Ok("page is full".to_string()),
            },
            Action::Remove { index } => {
                let id = self.entry_at(index)?;
                self.editor.remove(id);
                self.commit(format!("removed section {index}")).await
            }
            Action::Move { index, direction } => {
                let id = self.entry_at(index)?;
                if self.editor.move_entry(id, direction) {
                    self.commit(format!("moved section {index} {direction}")).await
                } else {
                    Ok(format!("section {index} cannot move {direction}"))
                }
            }
            Action::Set {
                index,
                field,
                value,
            } => {
                let id = self.entry_at(index)?;
                if self.editor.update_content(id, &field, Value::String(value)) {
                    self.commit(format!("updated {field} of section {index}")).await
                } else {
                    Ok(format!("section {index} is not editable"))
                }
            }
            Action::Render { json } => self.render(json),
        }
    }

    fn entry_at(&self, index: usize) -> Result<EntryId> {
        match self.editor.document().entries().get(index) {
            Some(entry) => Ok(entry.id()),
            None => bail!(
                "no section at position {index} (page has {})",
                self.editor.document().len()
            ),
        }
    }

    async fn commit(&mut self, message: String) -> Result<String> {
        self.editor.save().await.context("saving layout")?;
        Ok(message)
    }

    fn catalog(&self) -> String {
        let mut out = String::new();
        for descriptor in self.editor.registry().iter() {
            let kind = if descriptor.is_editable() { "editable" } else { "static" };
            let multi = if descriptor.multi_instance_allowed() { ", multiple" } else { "" };
            let _ = writeln!(
                out,
                "{:<20} {} ({kind}{multi})",
                descriptor.type_id(),
                descriptor.display_name()
            );
        }
        out
    }

    fn show(&self) -> String {
        let registry = self.editor.registry();
        let mut out = String::new();
        for (index, entry) in self.editor.document().iter().enumerate() {
            let marker = if registry.contains(entry.section_type_id()) {
                ""
            } else {
                "  [unregistered]"
            };
            let _ = writeln!(out, "{index:>3}  {}{marker}", entry.label(registry));

            if let Some(fields) = self.editor.content_fields(entry.id()) {
                for field in fields {
                    let _ = writeln!(out, "       {}: {}", field.label, field.value);
                }
            }
        }
        out
    }

    fn render(&self, json: bool) -> Result<String> {
        let context = self.site.data_context();
        let sections = self.editor.render_preview(&context);

        if json {
            return serde_json::to_string_pretty(&sections).context("encoding rendered page");
        }

        Ok(sections
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

fn load_site(path: &Path) -> Result<SiteData> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading site data {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing site data {}", path.display()))
}
