use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use log::{debug, warn};

use crate::app_config::{RenderConfig, RenderStyle};
use crate::errors::RenderError;
use crate::publication::{Creator, Publication};

// @module: Citation line and document rendering

/// Build the author string for one record
///
/// Creators are joined as `"{firstName} {lastName}"` separated by `", "`.
/// Every literal occurrence of the highlighted author's full name is then
/// wrapped in bold tags. This is plain substring substitution, not identity
/// matching: any author string that happens to contain the name is bolded.
pub fn author_line(creators: &[Creator], highlight: &str) -> String {
    let joined = creators.iter()
        .map(|c| c.full_name())
        .collect::<Vec<_>>()
        .join(", ");

    if highlight.is_empty() {
        return joined;
    }

    joined.replace(highlight, &format!("<b>{}</b>", highlight))
}

/// Render one citation line for a record
///
/// Returns `Ok(None)` when the record is not a proceedings entry. A record
/// that passes the filter but lacks a field the template needs is a hard
/// error; the caller decides what happens to output already written.
pub fn render_line(publication: &Publication, config: &RenderConfig) -> Result<Option<String>, RenderError> {
    let Some(proceedings) = publication.data.proceedings_title.as_deref() else {
        return Ok(None);
    };

    let missing = |field: &'static str| RenderError::MissingField {
        key: publication.key_or_unknown().to_string(),
        field,
    };

    let title = publication.data.title.as_deref().ok_or_else(|| missing("title"))?;
    let pages = publication.data.pages.as_deref().ok_or_else(|| missing("pages"))?;
    let doi = publication.data.doi.as_deref().ok_or_else(|| missing("DOI"))?;

    let authors = author_line(&publication.data.creators, &config.highlight_author);

    let line = match config.style {
        RenderStyle::Plain => format!(
            "<li>{}. <a href=\"https://doi.org/{}\"><b>{}</b></a>. {}, {}.</li>",
            authors, doi, title, proceedings, pages
        ),
        RenderStyle::PdfIcon => {
            let key = publication.data.key.as_deref().ok_or_else(|| missing("key"))?;
            format!(
                "<li>{}. <a href=\"https://doi.org/{}\"><b>{}</b></a>. {}, {}, <a href=\"{}/{}.pdf\" class=\"uk-link-text uk-icon-link\" uk-icon=\"file-pdf\" target=\"_blank\"></a>.</li>",
                authors, doi, title, proceedings, pages,
                config.pdf_link_base.trim_end_matches('/'), key
            )
        }
    };

    Ok(Some(line))
}

/// Render the whole document in memory
///
/// One line per qualifying record, in the order given, each terminated by a
/// newline. Fails on the first record with a missing field.
pub fn render_document(publications: &[Publication], config: &RenderConfig) -> Result<String, RenderError> {
    let mut document = String::new();

    for publication in publications {
        if let Some(line) = render_line(publication, config)? {
            document.push_str(&line);
            document.push('\n');
        }
    }

    Ok(document)
}

/// Write the citation list to a file, truncating any existing content
///
/// Lines are written one record at a time. When a record fails mid-run the
/// lines already flushed stay in the file, so a partial document marks the
/// failure point rather than silently dropping everything.
pub fn write_document<P: AsRef<Path>>(
    path: P,
    publications: &[Publication],
    config: &RenderConfig,
) -> Result<usize, RenderError> {
    let path = path.as_ref();
    let file = File::create(path)
        .map_err(|e| RenderError::Io(format!("Failed to create {:?}: {}", path, e)))?;
    let mut writer = BufWriter::new(file);
    let mut written = 0;

    for publication in publications {
        match render_line(publication, config)? {
            Some(line) => {
                writeln!(writer, "{}", line)
                    .map_err(|e| RenderError::Io(format!("Failed to write to {:?}: {}", path, e)))?;
                written += 1;
            }
            None => {
                debug!("Skipping non-proceedings item {}", publication.key_or_unknown());
            }
        }

        // Keep already-rendered lines on disk if a later record fails
        if let Err(e) = writer.flush() {
            return Err(RenderError::Io(format!("Failed to flush {:?}: {}", path, e)));
        }
    }

    if written == 0 {
        warn!("No proceedings records found, output file is empty");
    }

    Ok(written)
}
