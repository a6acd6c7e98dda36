//! Низкоуровневые строительные блоки WordprocessingML.
//!
//! Генерация XML строками: документу нужны только абзацы, раны и
//! таблицы без границ, схема фиксирована.

/// Шрифт всего документа
pub const FONT_NAME: &str = "Times New Roman";

/// 12 pt в полупунктах
pub const SZ_MAIN: u32 = 24;

/// 9 pt в полупунктах (реквизиты в шапке)
pub const SZ_SMALL: u32 = 18;

/// Сантиметры в twips (1 см = 567 twips)
pub fn cm(value: f64) -> u32 {
    (value * 567.0).round() as u32
}

/// Пункты в twips (1 pt = 20 twips)
pub fn pt(value: u32) -> u32 {
    value * 20
}

/// Экранирование текста для XML
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Один ран (фрагмент текста с общим форматированием)
#[derive(Debug, Clone)]
pub struct Run {
    text: String,
    bold: bool,
    underline: bool,
    sz: u32,
}

impl Run {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            underline: false,
            sz: SZ_MAIN,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub fn size(mut self, half_points: u32) -> Self {
        self.sz = half_points;
        self
    }

    pub fn to_xml(&self) -> String {
        let mut rpr = format!(
            "<w:rFonts w:ascii=\"{f}\" w:hAnsi=\"{f}\" w:cs=\"{f}\"/><w:sz w:val=\"{s}\"/><w:szCs w:val=\"{s}\"/>",
            f = FONT_NAME,
            s = self.sz
        );
        if self.bold {
            rpr.push_str("<w:b/>");
        }
        if self.underline {
            rpr.push_str("<w:u w:val=\"single\"/>");
        }
        format!(
            "<w:r><w:rPr>{}</w:rPr><w:t xml:space=\"preserve\">{}</w:t></w:r>",
            rpr,
            escape(&self.text)
        )
    }
}

/// Выравнивание абзаца
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
    Justify,
}

impl Align {
    fn as_val(self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Center => "center",
            Align::Right => "right",
            Align::Justify => "both",
        }
    }
}

/// Свойства абзаца; `None` — свойство не пишется (дефолт Word)
#[derive(Debug, Clone, Copy)]
pub struct Para {
    pub align: Align,
    pub space_before: Option<u32>,
    pub space_after: Option<u32>,
    pub first_line_indent: Option<u32>,
}

impl Default for Para {
    fn default() -> Self {
        Self {
            align: Align::Left,
            space_before: None,
            space_after: None,
            first_line_indent: None,
        }
    }
}

impl Para {
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn space_before(mut self, twips: u32) -> Self {
        self.space_before = Some(twips);
        self
    }

    pub fn space_after(mut self, twips: u32) -> Self {
        self.space_after = Some(twips);
        self
    }

    pub fn first_line_indent(mut self, twips: u32) -> Self {
        self.first_line_indent = Some(twips);
        self
    }

    fn props_xml(&self) -> String {
        let mut ppr = String::new();
        if self.space_before.is_some() || self.space_after.is_some() {
            ppr.push_str("<w:spacing");
            if let Some(before) = self.space_before {
                ppr.push_str(&format!(" w:before=\"{before}\""));
            }
            if let Some(after) = self.space_after {
                ppr.push_str(&format!(" w:after=\"{after}\""));
            }
            ppr.push_str("/>");
        }
        if let Some(indent) = self.first_line_indent {
            ppr.push_str(&format!("<w:ind w:firstLine=\"{indent}\"/>"));
        }
        if self.align != Align::Left {
            ppr.push_str(&format!("<w:jc w:val=\"{}\"/>", self.align.as_val()));
        }
        ppr
    }
}

/// Абзац из набора ранов
pub fn paragraph(props: Para, runs: &[Run]) -> String {
    let ppr = props.props_xml();
    let body: String = runs.iter().map(Run::to_xml).collect();
    if ppr.is_empty() {
        format!("<w:p>{body}</w:p>")
    } else {
        format!("<w:p><w:pPr>{ppr}</w:pPr>{body}</w:p>")
    }
}

/// Пустой абзац (пустая строка документа)
pub fn empty_paragraph() -> String {
    paragraph(Para::default(), &[])
}

/// Таблица без границ с фиксированными ширинами колонок.
///
/// Каждая ячейка — готовый XML одного абзаца; число ячеек в строке
/// должно совпадать с числом колонок.
pub fn borderless_table(col_widths: &[u32], rows: &[Vec<String>]) -> String {
    let borders = "<w:tblBorders>\
        <w:top w:val=\"none\"/><w:left w:val=\"none\"/>\
        <w:bottom w:val=\"none\"/><w:right w:val=\"none\"/>\
        <w:insideH w:val=\"none\"/><w:insideV w:val=\"none\"/>\
        </w:tblBorders>";

    let grid: String = col_widths
        .iter()
        .map(|w| format!("<w:gridCol w:w=\"{w}\"/>"))
        .collect();

    let mut xml = format!(
        "<w:tbl><w:tblPr><w:tblW w:w=\"0\" w:type=\"auto\"/>{borders}</w:tblPr><w:tblGrid>{grid}</w:tblGrid>"
    );
    for row in rows {
        xml.push_str("<w:tr>");
        for (cell, width) in row.iter().zip(col_widths) {
            xml.push_str(&format!(
                "<w:tc><w:tcPr><w:tcW w:w=\"{width}\" w:type=\"dxa\"/></w:tcPr>{cell}</w:tc>"
            ));
        }
        xml.push_str("</w:tr>");
    }
    xml.push_str("</w:tbl>");
    xml
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("a & b < c"), "a &amp; b &lt; c");
        assert_eq!(escape("«ПОЛАТИ»"), "«ПОЛАТИ»");
        assert_eq!(escape("\"q\""), "&quot;q&quot;");
    }

    #[test]
    fn test_units() {
        assert_eq!(cm(1.5), 851);
        assert_eq!(cm(2.5), 1418);
        assert_eq!(pt(12), 240);
    }

    #[test]
    fn test_run_formatting() {
        let xml = Run::new("ПРИКАЗ").bold().to_xml();
        assert!(xml.contains("<w:b/>"));
        assert!(xml.contains("ПРИКАЗ"));
        assert!(!xml.contains("<w:u"));

        let xml = Run::new("12").underline().size(SZ_SMALL).to_xml();
        assert!(xml.contains("<w:u w:val=\"single\"/>"));
        assert!(xml.contains("w:val=\"18\""));
    }

    #[test]
    fn test_paragraph_props() {
        let xml = paragraph(
            Para::default()
                .align(Align::Justify)
                .space_after(pt(12))
                .first_line_indent(cm(1.25)),
            &[Run::new("текст")],
        );
        assert!(xml.contains("<w:jc w:val=\"both\"/>"));
        assert!(xml.contains("w:after=\"240\""));
        assert!(xml.contains("w:firstLine=\"709\""));
    }

    #[test]
    fn test_left_align_is_default() {
        let xml = paragraph(Para::default(), &[Run::new("x")]);
        assert!(!xml.contains("<w:jc"));
    }

    #[test]
    fn test_borderless_table_shape() {
        let cell = paragraph(Para::default(), &[Run::new("a")]);
        let xml = borderless_table(&[100, 200], &[vec![cell.clone(), cell]]);
        assert_eq!(xml.matches("<w:gridCol").count(), 2);
        assert_eq!(xml.matches("<w:tc>").count(), 2);
        assert!(xml.contains("<w:top w:val=\"none\"/>"));
    }
}
