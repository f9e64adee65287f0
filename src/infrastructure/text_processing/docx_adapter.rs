use std::io::{Cursor, Read};

use async_trait::async_trait;
use quick_xml::Reader;
use quick_xml::events::Event;
use zip::ZipArchive;

use crate::application::ports::{ExtractionError, TextExtractor};
use crate::domain::{DocumentFormat, RawDocument};

use super::text_normalizer::normalize_extracted_text;

const DOCUMENT_PART: &str = "word/document.xml";

/// Text pulled out of `word/document.xml`.
///
/// Table text is kept apart from body paragraphs and always emitted after
/// them, so a table sitting between two paragraphs ends up at the bottom.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DocxText {
    pub paragraphs: Vec<String>,
    pub table_cells: Vec<String>,
}

impl DocxText {
    pub fn into_text(self) -> String {
        self.paragraphs
            .into_iter()
            .chain(self.table_cells)
            .collect::<Vec<_>>()
            .join("\n")
            .trim()
            .to_string()
    }
}

pub struct DocxAdapter;

impl DocxAdapter {
    fn read_document_xml(bytes: &[u8]) -> Result<String, ExtractionError> {
        let mut archive = ZipArchive::new(Cursor::new(bytes)).map_err(|e| {
            ExtractionError::MalformedInput(format!("not a DOCX package: {e}"))
        })?;

        let mut part = archive.by_name(DOCUMENT_PART).map_err(|e| {
            ExtractionError::MalformedInput(format!("missing {DOCUMENT_PART}: {e}"))
        })?;

        let mut xml = String::with_capacity(part.size() as usize);
        part.read_to_string(&mut xml).map_err(|e| {
            ExtractionError::MalformedInput(format!("unreadable {DOCUMENT_PART}: {e}"))
        })?;

        Ok(xml)
    }
}

/// Walks the WordprocessingML body.
///
/// Body paragraphs are collected in order. Cells of top-level tables are
/// collected row by row, left to right; a cell's text is its paragraphs
/// joined by newlines, nested tables included. Blank paragraphs and cells
/// are dropped.
pub fn parse_document_xml(xml: &str) -> Result<DocxText, ExtractionError> {
    let mut reader = Reader::from_str(xml);
    let mut output = DocxText::default();

    // Paragraphs can nest through text boxes, hence the stack.
    let mut paragraph_stack: Vec<String> = Vec::new();
    let mut current_cell: Option<Vec<String>> = None;
    let mut table_depth = 0usize;
    let mut run_depth = 0usize;
    let mut in_text = false;

    loop {
        let event = reader.read_event().map_err(|e| {
            ExtractionError::MalformedInput(format!(
                "invalid {DOCUMENT_PART} at byte {}: {e}",
                reader.buffer_position()
            ))
        })?;

        match event {
            Event::Start(e) => match e.local_name().as_ref() {
                b"tbl" => table_depth += 1,
                b"tc" if table_depth == 1 => current_cell = Some(Vec::new()),
                b"p" => paragraph_stack.push(String::new()),
                b"r" => run_depth += 1,
                b"t" => in_text = true,
                _ => {}
            },
            Event::Empty(e) => {
                let Some(paragraph) = paragraph_stack.last_mut() else {
                    continue;
                };
                if run_depth == 0 {
                    continue;
                }
                match e.local_name().as_ref() {
                    b"tab" => paragraph.push('\t'),
                    b"br" | b"cr" => paragraph.push('\n'),
                    _ => {}
                }
            }
            Event::Text(t) if in_text => {
                let text = t.unescape().map_err(|e| {
                    ExtractionError::MalformedInput(format!("bad text in {DOCUMENT_PART}: {e}"))
                })?;
                if let Some(paragraph) = paragraph_stack.last_mut() {
                    paragraph.push_str(&text);
                }
            }
            Event::End(e) => match e.local_name().as_ref() {
                b"t" => in_text = false,
                b"r" => run_depth = run_depth.saturating_sub(1),
                b"p" => {
                    let Some(raw) = paragraph_stack.pop() else {
                        continue;
                    };
                    let text = normalize_extracted_text(&raw);
                    if text.is_empty() {
                        continue;
                    }
                    if table_depth == 0 {
                        output.paragraphs.push(text);
                    } else if let Some(cell) = current_cell.as_mut() {
                        cell.push(text);
                    }
                }
                b"tc" if table_depth == 1 => {
                    if let Some(cell) = current_cell.take() {
                        let text = cell.join("\n");
                        if !text.trim().is_empty() {
                            output.table_cells.push(text);
                        }
                    }
                }
                b"tbl" => table_depth = table_depth.saturating_sub(1),
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(output)
}

#[async_trait]
impl TextExtractor for DocxAdapter {
    #[tracing::instrument(skip(self, document), fields(bytes = document.len()))]
    async fn extract_text(&self, document: &RawDocument) -> Result<String, ExtractionError> {
        if document.format != DocumentFormat::Docx {
            return Err(ExtractionError::UnsupportedFormat(
                document.format.label().to_string(),
            ));
        }

        let xml = Self::read_document_xml(&document.bytes)?;
        let parsed = parse_document_xml(&xml)?;

        tracing::debug!(
            paragraphs = parsed.paragraphs.len(),
            table_cells = parsed.table_cells.len(),
            "DOCX body parsed"
        );

        let text = parsed.into_text();
        if text.is_empty() {
            return Err(ExtractionError::NoTextFound(
                "DOCX contains no paragraph or table text".to_string(),
            ));
        }

        Ok(text)
    }

    fn formats(&self) -> Vec<DocumentFormat> {
        vec![DocumentFormat::Docx]
    }
}
