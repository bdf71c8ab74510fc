//! XML text ↔ [`Element`] tree.
//!
//! Reading keeps leaf text verbatim and drops the whitespace that pretty
//! printing puts between child elements. Writing produces a UTF-8 declaration
//! followed by a tab-indented tree with leaf text kept inline.

use compendium_core::Element;
use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::loaders::LoadResult;

/// Parses XML text into its root element.
pub fn parse_document(content: &str) -> LoadResult<Element> {
    let mut reader = Reader::from_str(content);
    let mut stack: Vec<(Element, String)> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                stack.push((start_element(e)?, String::new()));
            }
            Ok(Event::Empty(ref e)) => {
                let element = start_element(e)?;
                attach(&mut stack, &mut root, element)?;
            }
            Ok(Event::Text(ref e)) => {
                if let Some((_, text)) = stack.last_mut() {
                    let unescaped = e
                        .unescape()
                        .map_err(|e| anyhow::anyhow!("Invalid XML text: {}", e))?;
                    text.push_str(&unescaped);
                }
            }
            Ok(Event::CData(ref e)) => {
                if let Some((_, text)) = stack.last_mut() {
                    text.push_str(&String::from_utf8_lossy(e));
                }
            }
            Ok(Event::End(_)) => {
                let (mut element, text) = stack
                    .pop()
                    .ok_or_else(|| anyhow::anyhow!("Unbalanced closing tag in XML document"))?;
                if element.children().is_empty() {
                    if !text.is_empty() {
                        element.set_text(text);
                    }
                } else if !text.trim().is_empty() {
                    element.set_text(text);
                }
                attach(&mut stack, &mut root, element)?;
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(anyhow::anyhow!(
                    "XML parse error at position {}: {}",
                    reader.buffer_position(),
                    e
                ));
            }
            // Declarations, comments, processing instructions, doctypes
            _ => {}
        }
    }

    if !stack.is_empty() {
        anyhow::bail!("XML document ended with {} unclosed element(s)", stack.len());
    }
    root.ok_or_else(|| anyhow::anyhow!("XML document has no root element"))
}

fn start_element(e: &BytesStart<'_>) -> LoadResult<Element> {
    let mut element = Element::new(String::from_utf8_lossy(e.name().as_ref()));
    for attr in e.attributes() {
        let attr = attr.map_err(|e| anyhow::anyhow!("Invalid XML attribute: {}", e))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|e| anyhow::anyhow!("Invalid value for attribute '{}': {}", key, e))?;
        element.set_attr(key, value);
    }
    Ok(element)
}

/// Appends a finished element to its parent, or makes it the root.
fn attach(
    stack: &mut [(Element, String)],
    root: &mut Option<Element>,
    element: Element,
) -> LoadResult<()> {
    match stack.last_mut() {
        Some((parent, _)) => parent.push(element),
        None if root.is_none() => *root = Some(element),
        None => anyhow::bail!("XML document has more than one root element"),
    }
    Ok(())
}

/// Renders `root` as an indented XML document.
pub fn render_document(root: &Element) -> LoadResult<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b'\t', 1);
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(|e| anyhow::anyhow!("Failed to write XML declaration: {}", e))?;
    write_element(&mut writer, root)?;

    let mut output = String::from_utf8(writer.into_inner())?;
    output.push('\n');
    Ok(output)
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &Element) -> LoadResult<()> {
    let mut start = BytesStart::new(element.name());
    for (key, value) in element.attributes() {
        start.push_attribute((key, value));
    }

    let text = element.text().filter(|t| !t.is_empty());
    let result = if element.children().is_empty() && text.is_none() {
        writer.write_event(Event::Empty(start))
    } else {
        writer.write_event(Event::Start(start))?;
        if let Some(text) = text {
            writer.write_event(Event::Text(BytesText::new(text)))?;
        }
        for child in element.children() {
            write_element(writer, child)?;
        }
        writer.write_event(Event::End(BytesEnd::new(element.name())))
    };
    result.map_err(|e| anyhow::anyhow!("Failed to write <{}>: {}", element.name(), e))
}
