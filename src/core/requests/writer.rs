//! Writing request documents to disk
//!
//! [`write_requests`] keeps the boolean contract callers rely on: `true` when
//! the whole file was written, `false` otherwise. The cause of a failure is
//! available through [`try_write_requests`] and is logged by
//! [`write_requests`] before being dropped.

use crate::domain::{RequestsError, Result};
use crate::xml::{RequestSchema, XmlRequests};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// Indentation step of written documents
const INDENT: usize = 2;

/// Serializes a request document to indented XML, declaration included
pub fn to_xml_string<S>(requests: &XmlRequests<S>) -> Result<String>
where
    S: RequestSchema + Serialize,
{
    let mut buffer = String::with_capacity(4096);
    buffer.push_str(XML_DECLARATION);
    buffer.push('\n');

    let mut serializer = quick_xml::se::Serializer::with_root(&mut buffer, Some(S::ROOT))
        .map_err(|e| RequestsError::Serialization(e.to_string()))?;
    serializer.indent(' ', INDENT);
    requests
        .serialize(serializer)
        .map_err(|e| RequestsError::Serialization(e.to_string()))?;

    buffer.push('\n');
    Ok(buffer)
}

/// Writes a request document to `path`, reporting the cause of a failure
///
/// The document is serialized completely before the file is opened, so a
/// serialization error leaves any existing file untouched. The parent
/// directory must exist. If this call created the file but could not fully
/// write it, the file is removed; a node that already existed at `path` is
/// never removed.
///
/// # Errors
///
/// Returns [`RequestsError::Serialization`] or [`RequestsError::Io`].
pub fn try_write_requests<S>(path: impl AsRef<Path>, requests: &XmlRequests<S>) -> Result<()>
where
    S: RequestSchema + Serialize,
{
    let path = path.as_ref();
    let xml = to_xml_string(requests)?;

    let (mut file, created) = open_target(path)?;
    let written = file
        .write_all(xml.as_bytes())
        .and_then(|_| file.flush())
        .and_then(|_| file.sync_all());

    if let Err(e) = written {
        drop(file);
        // only a file this call created is removed; existing nodes are left alone
        if created {
            if let Err(cleanup) = fs::remove_file(path) {
                tracing::debug!(path = %path.display(), error = %cleanup, "Could not remove partial file");
            }
        }
        return Err(e.into());
    }

    tracing::info!(
        path = %path.display(),
        root = S::ROOT,
        items = requests.len(),
        bytes = xml.len(),
        "Requests written"
    );
    Ok(())
}

/// Opens `path` for writing, telling whether the file was created here
fn open_target(path: &Path) -> std::io::Result<(File, bool)> {
    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => Ok((file, true)),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            let file = OpenOptions::new().write(true).truncate(true).open(path)?;
            Ok((file, false))
        }
        Err(e) => Err(e),
    }
}

/// Writes a request document to `path`
///
/// Returns `true` if the file was completely written and `false` on any
/// failure; nothing is propagated. Use [`try_write_requests`] to get the
/// cause.
pub fn write_requests<S>(path: impl AsRef<Path>, requests: &XmlRequests<S>) -> bool
where
    S: RequestSchema + Serialize,
{
    let path = path.as_ref();
    match try_write_requests(path, requests) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Failed to write requests");
            false
        }
    }
}

/// Reads back a request document written by [`write_requests`]
///
/// # Errors
///
/// Fails if the file cannot be read, its root element is not `S::ROOT`, or
/// the content does not match the document shape.
pub fn read_requests<S>(path: impl AsRef<Path>) -> Result<XmlRequests<S>>
where
    S: RequestSchema + DeserializeOwned,
{
    let xml = fs::read_to_string(path.as_ref())?;
    from_xml_str(&xml)
}

/// Parses a request document, checking its root element
pub fn from_xml_str<S>(xml: &str) -> Result<XmlRequests<S>>
where
    S: RequestSchema + DeserializeOwned,
{
    let root = root_element(xml)?;
    if root != S::ROOT {
        return Err(RequestsError::Validation(format!(
            "Unexpected root element '{root}', expected '{}'",
            S::ROOT
        )));
    }
    quick_xml::de::from_str(xml).map_err(|e| RequestsError::Serialization(e.to_string()))
}

fn root_element(xml: &str) -> Result<String> {
    use quick_xml::events::Event;
    use quick_xml::Reader;

    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => {
                return Ok(String::from_utf8_lossy(e.name().as_ref()).into_owned());
            }
            Ok(Event::Eof) => {
                return Err(RequestsError::Serialization(
                    "Document has no root element".to_string(),
                ))
            }
            Err(e) => return Err(RequestsError::Serialization(e.to_string())),
            _ => {}
        }
        buf.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Ts, TsData, TsPeriod, X13Specification};
    use crate::xml::{
        XmlAtomicRequest, XmlRender, XmlTramoSeatsRequests, XmlTramoSeatsSpecification, XmlTs,
        XmlX13Requests, XmlX13Specification,
    };
    use tempfile::TempDir;

    fn x13_document() -> XmlX13Requests {
        let mut doc = XmlX13Requests::new();
        let ts = Ts::new("b1").with_data(TsData::new(
            TsPeriod::quarter(2000, 1).unwrap(),
            vec![1.5, f64::NAN, 3.0],
        ));
        doc.push(XmlAtomicRequest {
            specification: XmlX13Specification::render(&X13Specification::rsa4c()).unwrap(),
            series: XmlTs::render(&ts).unwrap(),
        });
        doc.filters_mut().extend(["m1".to_string(), "t1".to_string()]);
        doc
    }

    #[test]
    fn test_xml_string_layout() {
        let xml = to_xml_string(&x13_document()).unwrap();
        assert!(xml.starts_with(XML_DECLARATION));
        assert!(xml.contains("<x13Requests xmlns=\"ec/eurostat/jdemetra/sa/x13\">"));
        assert!(xml.contains("\n  <outputFilter>"));
        assert!(xml.contains("<filter>m1</filter>"));
        assert!(xml.contains("<series name=\"b1\">"));
        assert!(xml.trim_end().ends_with("</x13Requests>"));
    }

    #[test]
    fn test_write_and_read_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("x13.xml");
        let doc = x13_document();

        assert!(write_requests(&path, &doc));

        let back: XmlX13Requests = read_requests(&path).unwrap();
        assert_eq!(back.len(), 1);
        assert_eq!(back.filters(), ["m1", "t1"]);
        let values = back.requests()[0]
            .series
            .data
            .as_ref()
            .unwrap()
            .parse_values()
            .unwrap();
        assert_eq!(values.len(), 3);
        assert!(values[1].is_nan());
    }

    #[test]
    fn test_write_missing_parent_returns_false() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("x13.xml");

        assert!(!write_requests(&path, &x13_document()));
        assert!(!path.exists());
        assert!(matches!(
            try_write_requests(&path, &x13_document()),
            Err(RequestsError::Io(_))
        ));
    }

    #[test]
    fn test_write_to_directory_returns_false() {
        let dir = TempDir::new().unwrap();
        assert!(!write_requests(dir.path(), &x13_document()));
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("x13.xml");
        fs::write(&path, "stale").unwrap();

        assert!(write_requests(&path, &x13_document()));
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("<?xml"));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_failed_write_keeps_existing_node() {
        // writes to /dev/full always fail with ENOSPC
        let path = Path::new("/dev/full");
        if !path.exists() {
            return;
        }

        let err = try_write_requests(path, &x13_document()).unwrap_err();
        assert!(matches!(err, RequestsError::Io(_)));
        assert!(path.exists());
        assert!(!write_requests(path, &x13_document()));
        assert!(path.exists());
    }

    #[test]
    fn test_open_target_reports_creation() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("x13.xml");

        let (_, created) = open_target(&path).unwrap();
        assert!(created);
        let (_, created) = open_target(&path).unwrap();
        assert!(!created);
    }

    #[test]
    fn test_read_rejects_other_family() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("x13.xml");
        assert!(write_requests(&path, &x13_document()));

        let err = read_requests::<XmlTramoSeatsSpecification>(&path).unwrap_err();
        assert!(matches!(err, RequestsError::Validation(_)));
    }

    #[test]
    fn test_empty_document_round_trip() {
        let doc = XmlTramoSeatsRequests::new();
        let xml = to_xml_string(&doc).unwrap();
        let back: XmlTramoSeatsRequests = from_xml_str(&xml).unwrap();
        assert!(back.is_empty());
        assert!(back.filters().is_empty());
    }
}
