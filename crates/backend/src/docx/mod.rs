//! Генерация приказа в формате .docx по стандарту ПОЛАТИ 2025.
//!
//! Первая страница получает отдельную шапку с реквизитами организации,
//! тело — заголовок, таблица даты/номера, преамбула, пункты, подпись
//! генерального директора и блок ознакомления.

pub mod package;
pub mod xml;

use contracts::generate_order::OrderRequest;

use crate::shared::config::OrganizationConfig;
use xml::{
    borderless_table, cm, empty_paragraph, paragraph, pt, Align, Para, Run, SZ_SMALL,
};

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("ошибка упаковки документа: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("ошибка записи документа: {0}")]
    Io(#[from] std::io::Error),
}

const NBSP: char = '\u{a0}';

/// Текст предпоследнего пункта (добавляется сервером)
const CONTROL_PUNKT: &str = "Контроль исполнения настоящего приказа оставляю за собой.";

/// Текст последнего пункта (добавляется сервером)
const EFFECTIVE_PUNKT: &str = "Приказ вступает в силу с момента его подписания.";

/// Собирает документ приказа и возвращает байты .docx
pub fn render_order(req: &OrderRequest, org: &OrganizationConfig) -> Result<Vec<u8>, RenderError> {
    let header = first_page_header(org);
    let body = document_body(req, org);
    let core = core_properties(req, org);
    package::write_package(&body, &header, &core)
}

/// docProps/core.xml: название, автор и время создания документа
fn core_properties(req: &OrderRequest, org: &OrganizationConfig) -> String {
    let stamp = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
    format!(
        "<cp:coreProperties \
         xmlns:cp=\"http://schemas.openxmlformats.org/package/2006/metadata/core-properties\" \
         xmlns:dc=\"http://purl.org/dc/elements/1.1/\" \
         xmlns:dcterms=\"http://purl.org/dc/terms/\" \
         xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\">\
         <dc:title>Приказ № {number}</dc:title>\
         <dc:creator>{creator}</dc:creator>\
         <dcterms:created xsi:type=\"dcterms:W3CDTF\">{stamp}</dcterms:created>\
         <dcterms:modified xsi:type=\"dcterms:W3CDTF\">{stamp}</dcterms:modified>\
         </cp:coreProperties>",
        number = xml::escape(&req.order_number),
        creator = xml::escape(&org.name),
    )
}

/// Ячейка таблицы реквизитов: 9 pt, одинарный интервал
fn requisite_cell(text: &str) -> String {
    paragraph(
        Para::default().space_before(0).space_after(0),
        &[Run::new(text).size(SZ_SMALL)],
    )
}

/// Шапка первой страницы: пустая строка и таблица реквизитов 3×3
fn first_page_header(org: &OrganizationConfig) -> String {
    let widths = [cm(6.0), cm(5.5), cm(5.5)];
    let rows = vec![
        vec![
            requisite_cell(&org.name),
            requisite_cell(&org.phone),
            requisite_cell(&org.ogrn),
        ],
        vec![
            requisite_cell(&org.address_line1),
            requisite_cell(&org.email),
            requisite_cell(&org.inn),
        ],
        vec![
            requisite_cell(&org.address_line2),
            requisite_cell(&org.website),
            requisite_cell(&org.kpp),
        ],
    ];

    let mut out = empty_paragraph();
    out.push_str(&borderless_table(&widths, &rows));
    out
}

/// Таблица «дата — год — номер» под заголовком
fn date_number_table(req: &OrderRequest) -> String {
    let widths = [cm(6.0), cm(5.0), cm(6.0)];

    let date_cell = paragraph(
        Para::default().space_before(0).space_after(0),
        &[
            Run::new("«"),
            Run::new(&req.day).underline(),
            Run::new("» "),
            Run::new(&req.month).underline(),
        ],
    );
    let year_cell = paragraph(
        Para::default()
            .align(Align::Center)
            .space_before(0)
            .space_after(0),
        &[Run::new(&req.year).underline(), Run::new(" г.")],
    );
    let number_cell = paragraph(
        Para::default()
            .align(Align::Right)
            .space_before(0)
            .space_after(0),
        &[Run::new("№ "), Run::new(&req.order_number).underline()],
    );

    borderless_table(&widths, &[vec![date_cell, year_cell, number_cell]])
}

/// Таблица подписи генерального директора
fn signature_table(org: &OrganizationConfig) -> String {
    let widths = [cm(6.0), cm(5.0), cm(6.0)];
    let title = paragraph(Para::default(), &[Run::new(&org.director_title)]);
    let line = paragraph(
        Para::default().align(Align::Center),
        &[Run::new("__________________")],
    );
    let name = paragraph(Para::default(), &[Run::new(&org.director_name)]);
    borderless_table(&widths, &[vec![title, line, name]])
}

/// Блок «С приказом ознакомлен(-ы):» — по строке на каждое ФИО
fn acknowledgement_block(fios: &[String]) -> String {
    let widths = [cm(2.5), cm(14.5)];
    let pad: String = std::iter::repeat(NBSP).take(30).collect();

    let mut out = String::new();
    out.push_str(&empty_paragraph());
    out.push_str(&empty_paragraph());
    out.push_str(&paragraph(
        Para::default(),
        &[Run::new("С приказом ознакомлен(-ы):")],
    ));
    out.push_str(&empty_paragraph());
    out.push_str(&empty_paragraph());

    for fio in fios {
        let fio_cell = paragraph(Para::default(), &[Run::new(fio.as_str())]);
        let line_cell = paragraph(
            Para::default(),
            &[
                Run::new(pad.as_str()),
                Run::new("_________________________________"),
                Run::new(NBSP.to_string()),
                Run::new("«__»_______20__г."),
            ],
        );
        out.push_str(&borderless_table(&widths, &[vec![fio_cell, line_cell]]));
    }

    out.push_str(&empty_paragraph());
    out.push_str(&empty_paragraph());

    let caption = paragraph(Para::default(), &[Run::new("Подпись")]);
    let line = paragraph(
        Para::default(),
        &[
            Run::new(pad.as_str()),
            Run::new("_________________________________________"),
        ],
    );
    out.push_str(&borderless_table(&widths, &[vec![caption, line]]));
    out
}

fn document_body(req: &OrderRequest, org: &OrganizationConfig) -> String {
    let mut body = String::new();

    // ПРИКАЗ
    body.push_str(&paragraph(
        Para::default().space_before(pt(12)).space_after(0),
        &[Run::new("ПРИКАЗ").bold()],
    ));

    body.push_str(&date_number_table(req));

    // Город
    body.push_str(&paragraph(
        Para::default().space_before(0).space_after(pt(12)),
        &[Run::new(&org.city)],
    ));

    // Название приказа
    body.push_str(&paragraph(
        Para::default().space_after(pt(12)),
        &[Run::new(&req.order_title).bold()],
    ));

    // Преамбула
    body.push_str(&paragraph(
        Para::default()
            .align(Align::Justify)
            .first_line_indent(cm(1.25))
            .space_after(pt(12)),
        &[Run::new(&req.preamble)],
    ));

    body.push_str(&paragraph(
        Para::default().space_after(pt(12)),
        &[Run::new("ПРИКАЗЫВАЮ:").bold()],
    ));

    // Пункты приказа
    for punkt in &req.punkts {
        body.push_str(&paragraph(
            Para::default().align(Align::Justify).space_after(0),
            &[Run::new(format!("{}. {}", punkt.number, punkt.text))],
        ));
    }

    // Финальные пункты нумеруются вслед за пользовательскими
    let last_num = req.punkts.len() as u32 + 1;
    body.push_str(&paragraph(
        Para::default().align(Align::Justify).space_after(0),
        &[Run::new(format!("{last_num}. {CONTROL_PUNKT}"))],
    ));
    body.push_str(&paragraph(
        Para::default().align(Align::Justify).space_after(pt(12)),
        &[Run::new(format!("{}. {EFFECTIVE_PUNKT}", last_num + 1))],
    ));

    for _ in 0..5 {
        body.push_str(&empty_paragraph());
    }

    body.push_str(&signature_table(org));

    if !req.fios.is_empty() {
        body.push_str(&acknowledgement_block(&req.fios));
    }

    body
}
