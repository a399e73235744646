//! Exact text preservation for decoding
//!
//! quick-xml's deserializer trims leading and trailing whitespace from text
//! content, but never from CDATA. The API's text values are significant as
//! sent (message bodies, notification payloads), so before deserializing,
//! the text of every leaf element is rewritten as CDATA. Whitespace between
//! elements is left as text and still dropped.

use std::borrow::Cow;

use quick_xml::events::{BytesCData, BytesText, Event};
use quick_xml::{Reader, Writer};

const CDATA_END: &str = "]]>";

/// Rewrite `<a>text</a>` as `<a><![CDATA[text]]></a>`, unescaping entities
pub(crate) fn protect_leaf_text(xml: &str) -> quick_xml::Result<String> {
    let mut reader = Reader::from_str(xml);
    let mut writer = Writer::new(Vec::with_capacity(xml.len() + 64));

    // Text seen right after a start tag; it is leaf text if the next
    // event closes that tag.
    let mut held: Option<BytesText> = None;
    let mut after_start = false;

    loop {
        let event = reader.read_event()?;
        match event {
            Event::Text(text) if after_start && held.is_none() => {
                held = Some(text);
                continue;
            }
            Event::End(end) => {
                if let Some(text) = held.take() {
                    write_cdata(&mut writer, text.unescape()?)?;
                }
                writer.write_event(Event::End(end))?;
                after_start = false;
            }
            Event::Eof => {
                if let Some(text) = held.take() {
                    writer.write_event(Event::Text(text))?;
                }
                break;
            }
            other => {
                if let Some(text) = held.take() {
                    writer.write_event(Event::Text(text))?;
                }
                after_start = matches!(other, Event::Start(_));
                writer.write_event(other)?;
            }
        }
    }

    String::from_utf8(writer.into_inner())
        .map_err(|e| quick_xml::Error::NonDecodable(Some(e.utf8_error())))
}

/// Write text as one or more CDATA sections, splitting around `]]>`
fn write_cdata(writer: &mut Writer<Vec<u8>>, text: Cow<'_, str>) -> quick_xml::Result<()> {
    let mut rest = text.as_ref();
    while let Some(pos) = rest.find(CDATA_END) {
        writer.write_event(Event::CData(BytesCData::new(&rest[..pos + 2])))?;
        rest = &rest[pos + 2..];
    }
    writer.write_event(Event::CData(BytesCData::new(rest)))
}
