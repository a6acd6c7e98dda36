//! Сборка OPC-пакета (.docx — это zip с фиксированным набором частей).

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::RenderError;

const XML_DECL: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\r\n";

const NS_MAIN: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const NS_REL: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

const CONTENT_TYPES: &str = "<Types xmlns=\"http://schemas.openxmlformats.org/package/2006/content-types\">\
<Default Extension=\"rels\" ContentType=\"application/vnd.openxmlformats-package.relationships+xml\"/>\
<Default Extension=\"xml\" ContentType=\"application/xml\"/>\
<Override PartName=\"/word/document.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml\"/>\
<Override PartName=\"/word/header1.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.wordprocessingml.header+xml\"/>\
<Override PartName=\"/docProps/core.xml\" ContentType=\"application/vnd.openxmlformats-package.core-properties+xml\"/>\
</Types>";

const ROOT_RELS: &str = "<Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">\
<Relationship Id=\"rId1\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument\" Target=\"word/document.xml\"/>\
<Relationship Id=\"rId2\" Type=\"http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties\" Target=\"docProps/core.xml\"/>\
</Relationships>";

const DOCUMENT_RELS: &str = "<Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">\
<Relationship Id=\"rId1\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/header\" Target=\"header1.xml\"/>\
</Relationships>";

/// Упаковывает готовое тело документа и шапку первой страницы в .docx.
///
/// `body_xml` — последовательность элементов внутри `<w:body>` без sectPr,
/// `header_xml` — содержимое `<w:hdr>`, `core_xml` — готовая часть
/// `docProps/core.xml`.
pub fn write_package(
    body_xml: &str,
    header_xml: &str,
    core_xml: &str,
) -> Result<Vec<u8>, RenderError> {
    // A4, поля: верх/низ 1.5 см, слева 2.5 см, справа 1.5 см,
    // titlePg — отдельная шапка первой страницы
    let sect_pr = format!(
        "<w:sectPr><w:headerReference w:type=\"first\" r:id=\"rId1\"/>\
         <w:pgSz w:w=\"11906\" w:h=\"16838\"/>\
         <w:pgMar w:top=\"{m}\" w:right=\"{m}\" w:bottom=\"{m}\" w:left=\"{left}\" w:header=\"708\" w:footer=\"708\" w:gutter=\"0\"/>\
         <w:titlePg/></w:sectPr>",
        m = super::xml::cm(1.5),
        left = super::xml::cm(2.5),
    );

    let document = format!(
        "<w:document xmlns:w=\"{NS_MAIN}\" xmlns:r=\"{NS_REL}\"><w:body>{body_xml}{sect_pr}</w:body></w:document>"
    );
    let header = format!(
        "<w:hdr xmlns:w=\"{NS_MAIN}\" xmlns:r=\"{NS_REL}\">{header_xml}</w:hdr>"
    );

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let parts: [(&str, &str); 6] = [
        ("[Content_Types].xml", CONTENT_TYPES),
        ("_rels/.rels", ROOT_RELS),
        ("docProps/core.xml", core_xml),
        ("word/document.xml", &document),
        ("word/_rels/document.xml.rels", DOCUMENT_RELS),
        ("word/header1.xml", &header),
    ];

    for (name, content) in parts {
        writer.start_file(name, options)?;
        writer.write_all(XML_DECL.as_bytes())?;
        writer.write_all(content.as_bytes())?;
    }

    let cursor = writer.finish()?;
    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn read_part(bytes: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).expect("valid zip");
        let mut file = archive.by_name(name).expect("part present");
        let mut content = String::new();
        file.read_to_string(&mut content).unwrap();
        content
    }

    fn sample_package() -> Vec<u8> {
        write_package("<w:p></w:p>", "<w:p></w:p>", "<cp:coreProperties/>").unwrap()
    }

    #[test]
    fn test_package_is_a_zip_with_expected_parts() {
        let bytes = sample_package();
        assert_eq!(&bytes[..2], b"PK");

        let archive = zip::ZipArchive::new(Cursor::new(bytes.as_slice())).unwrap();
        let names: Vec<_> = archive.file_names().collect();
        assert!(names.contains(&"[Content_Types].xml"));
        assert!(names.contains(&"_rels/.rels"));
        assert!(names.contains(&"docProps/core.xml"));
        assert!(names.contains(&"word/document.xml"));
        assert!(names.contains(&"word/_rels/document.xml.rels"));
        assert!(names.contains(&"word/header1.xml"));
    }

    #[test]
    fn test_document_has_first_page_header_section() {
        let bytes = sample_package();
        let document = read_part(&bytes, "word/document.xml");
        assert!(document.contains("<w:titlePg/>"));
        assert!(document.contains("w:type=\"first\""));
        assert!(document.contains("w:left=\"1418\""));
    }
}
