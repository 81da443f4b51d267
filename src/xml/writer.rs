//! Pretty-printed XML serialization of [CorpusFile].
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesDecl, BytesText, Event};
use quick_xml::Writer;

use crate::error::Error;
use crate::xml::document::{CorpusFile, Page, Section};

type XmlResult = quick_xml::Result<()>;

/// Render a document, tab-indented, preceded by an XML declaration.
///
/// Elements with no text are self-closed, text elements are kept on one line.
pub fn render(doc: &CorpusFile) -> Result<String, Error> {
    let mut writer = Writer::new_with_indent(Vec::new(), b'\t', 1);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    writer.create_element("root").write_inner_content(|w| -> XmlResult {
        w.create_element("FILE")
            .with_attribute(("ID", doc.id.as_str()))
            .write_inner_content(|w| {
                w.create_element("meta").write_inner_content(|w| -> XmlResult {
                    for (name, value) in &doc.meta {
                        write_text_element(w, name, value)?;
                    }
                    Ok(())
                })?;
                write_section(w, &doc.section)
            })?;
        Ok(())
    })?;

    let mut out = String::from_utf8(writer.into_inner())
        .map_err(|e| Error::Custom(format!("rendered xml is not utf-8: {}", e)))?;
    out.push('\n');
    Ok(out)
}

fn write_section(w: &mut Writer<Vec<u8>>, section: &Section) -> XmlResult {
    let elem = w
        .create_element("SECT")
        .with_attribute(("ID", section.id.as_str()))
        .with_attribute(("NAME", section.name.as_str()));

    if section.pages.is_empty() {
        elem.write_empty()?;
        return Ok(());
    }

    elem.write_inner_content(|w| -> XmlResult {
        for page in &section.pages {
            write_page(w, page)?;
        }
        Ok(())
    })?;
    Ok(())
}

fn write_page(w: &mut Writer<Vec<u8>>, page: &Page) -> XmlResult {
    w.create_element("PAGE")
        .with_attribute(("ID", page.id.as_str()))
        .write_inner_content(|w| -> XmlResult {
            for sentence in &page.sentences {
                w.create_element("STC")
                    .with_attribute(("ID", sentence.id.as_str()))
                    .write_inner_content(|w| {
                        write_text_element(w, "C", &sentence.chinese)?;
                        write_text_element(w, "V", &sentence.vietnamese)
                    })?;
            }
            Ok(())
        })?;
    Ok(())
}

fn write_text_element(w: &mut Writer<Vec<u8>>, name: &str, text: &str) -> XmlResult {
    if text.is_empty() {
        w.create_element(name).write_empty()?;
    } else {
        w.create_element(name)
            .write_text_content(BytesText::from_escaped(partial_escape(text)))?;
    }
    Ok(())
}
