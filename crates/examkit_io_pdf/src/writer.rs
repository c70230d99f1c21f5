//! Paginated table writer.
//!
//! Every page repeats the header block, the two-row column header, and the
//! signature footer. Body rows flow greedily across pages.

use std::ops::Range;

use miniz_oxide::deflate::compress_to_vec_zlib;
use pdf_writer::{Content, Filter, Name, Pdf, Rect, Ref, Str, TextStr};

use examkit_panel::{
    C_EXTERNAL_GROUP_LABEL, EnumPermissionScope, L_PANEL_COLUMN_TITLES, N_COL_EXTERNAL_GROUP_END,
    N_COL_EXTERNAL_GROUP_START, SpecPhysicalRow,
};

use crate::conf::{
    C_FORMAT_FOOTER_DATE, C_LABEL_SIGNATURE_COORDINATOR, C_LABEL_SIGNATURE_HOD,
    C_XOBJECT_RESOURCE_LOGO, L_PDF_COLUMN_WIDTHS_MM, N_CELL_PADDING_PT, N_DEFLATE_LEVEL,
    N_FONT_SIZE_DEPARTMENT, N_FONT_SIZE_FOOTER, N_FONT_SIZE_INSTITUTION, N_FONT_SIZE_TABLE,
    N_FONT_SIZE_TITLE, N_FOOTER_HEIGHT_MM, N_GROUP_ROW_HEIGHT_MM, N_HEADER_BLOCK_HEIGHT_MM,
    N_LINE_WIDTH_PT, N_LOGO_HEIGHT_MM, N_LOGO_WIDTH_MAX_MM, N_PAGE_HEIGHT_MM, N_PAGE_MARGIN_MM,
    N_PAGE_WIDTH_MM, N_SIGNATURE_LINE_MM, N_SIGNATURE_LINE_OFFSET_MM,
};
use crate::spec::{EnumPdfFont, PdfRenderError, SpecPdfTableRow, SpecPdfWriteOptions};
use crate::util::{
    derive_cell_height, derive_line_height, derive_pdf_table_rows, derive_row_heights,
    encode_winansi, estimate_text_width, mm_to_pt, plan_pages, validate_column_widths, wrap_text,
};

/// Render panel rows as a paginated PDF document.
///
/// Output bytes depend only on the arguments; fix `options.date_footer` for
/// reproducible output.
pub fn render_paginated(
    rows: &[SpecPhysicalRow],
    title: &str,
    options: &SpecPdfWriteOptions,
) -> Result<Vec<u8>, PdfRenderError> {
    let layout = PdfTableLayout::new(rows, options.rule_permission_scope)?;
    let logo = options
        .logo
        .as_deref()
        .map(SpecLogoImage::decode)
        .transpose()?;

    let composer = PdfPageComposer {
        layout: &layout,
        title,
        options,
        logo_size: logo.as_ref().map(SpecLogoImage::derive_draw_size),
    };
    let l_contents = composer.compose_all();
    let n_pages = l_contents.len();
    log::debug!(
        "paginated table: {} row(s), {} page(s)",
        layout.table_rows.len(),
        n_pages
    );

    let mut n_ref = 0;
    let mut alloc = || {
        n_ref += 1;
        Ref::new(n_ref)
    };
    let ref_catalog = alloc();
    let ref_pages = alloc();
    let ref_info = alloc();
    let ref_font_regular = alloc();
    let ref_font_bold = alloc();
    let ref_logo = logo.as_ref().map(|_| alloc());
    let l_refs_page: Vec<Ref> = (0..n_pages).map(|_| alloc()).collect();
    let l_refs_content: Vec<Ref> = (0..n_pages).map(|_| alloc()).collect();

    let mut pdf = Pdf::new();
    pdf.catalog(ref_catalog).pages(ref_pages);
    pdf.pages(ref_pages)
        .kids(l_refs_page.iter().copied())
        .count(n_pages as i32);
    pdf.document_info(ref_info).title(TextStr(title));

    for (font, ref_font) in [
        (EnumPdfFont::Regular, ref_font_regular),
        (EnumPdfFont::Bold, ref_font_bold),
    ] {
        pdf.type1_font(ref_font)
            .base_font(Name(font.base_font()))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
    }

    if let (Some(logo), Some(ref_logo)) = (&logo, ref_logo) {
        let mut xobj = pdf.image_xobject(ref_logo, &logo.data_deflated);
        xobj.filter(Filter::FlateDecode);
        xobj.width(logo.n_width_px);
        xobj.height(logo.n_height_px);
        xobj.color_space().device_rgb();
        xobj.bits_per_component(8);
    }

    let rect_media = Rect::new(
        0.0,
        0.0,
        mm_to_pt(N_PAGE_WIDTH_MM),
        mm_to_pt(N_PAGE_HEIGHT_MM),
    );
    for ((raw, ref_page), ref_content) in l_contents
        .iter()
        .zip(&l_refs_page)
        .zip(&l_refs_content)
    {
        let data = compress_to_vec_zlib(raw, N_DEFLATE_LEVEL);
        pdf.stream(*ref_content, &data).filter(Filter::FlateDecode);

        let mut page = pdf.page(*ref_page);
        page.media_box(rect_media)
            .parent(ref_pages)
            .contents(*ref_content);
        let mut resources = page.resources();
        resources
            .fonts()
            .pair(Name(EnumPdfFont::Regular.resource_name()), ref_font_regular)
            .pair(Name(EnumPdfFont::Bold.resource_name()), ref_font_bold);
        if let Some(ref_logo) = ref_logo {
            resources
                .x_objects()
                .pair(Name(C_XOBJECT_RESOURCE_LOGO), ref_logo);
        }
    }

    Ok(pdf.finish())
}

////////////////////////////////////////////////////////////////////////////////
// #region Layout

/// Column geometry, row heights, and the page plan.
struct PdfTableLayout {
    l_col_x: Vec<f32>,
    l_col_w: Vec<f32>,
    table_rows: Vec<SpecPdfTableRow>,
    l_row_heights: Vec<f32>,
    n_height_group_row: f32,
    n_height_name_row: f32,
    pages: Vec<Range<usize>>,
}

impl PdfTableLayout {
    fn new(
        rows: &[SpecPhysicalRow],
        rule_scope: EnumPermissionScope,
    ) -> Result<Self, PdfRenderError> {
        validate_column_widths(&L_PDF_COLUMN_WIDTHS_MM)?;

        let l_col_w: Vec<f32> = L_PDF_COLUMN_WIDTHS_MM
            .iter()
            .map(|n_mm| mm_to_pt(*n_mm))
            .collect();
        let l_col_x: Vec<f32> = l_col_w
            .iter()
            .scan(mm_to_pt(N_PAGE_MARGIN_MM), |n_x, n_w| {
                let n_x_col = *n_x;
                *n_x += n_w;
                Some(n_x_col)
            })
            .collect();

        let table_rows = derive_pdf_table_rows(rows, rule_scope);
        let l_row_heights =
            derive_row_heights(&table_rows, &l_col_w, EnumPdfFont::Regular, N_FONT_SIZE_TABLE);
        let n_height_name_row = L_PANEL_COLUMN_TITLES
            .iter()
            .zip(&l_col_w)
            .map(|(title, n_w)| {
                derive_cell_height(title, *n_w, EnumPdfFont::Bold, N_FONT_SIZE_TABLE)
            })
            .fold(0.0, f32::max);

        let mut layout = Self {
            l_col_x,
            l_col_w,
            table_rows,
            l_row_heights,
            n_height_group_row: mm_to_pt(N_GROUP_ROW_HEIGHT_MM),
            n_height_name_row,
            pages: Vec::new(),
        };

        let n_height_body = layout.derive_body_top() - derive_body_bottom();
        if n_height_body <= 0.0 {
            return Err(PdfRenderError::Layout(format!(
                "no vertical space left for table rows ({n_height_body:.1} pt)"
            )));
        }
        layout.pages = plan_pages(&layout.l_row_heights, n_height_body);
        Ok(layout)
    }

    fn derive_body_top(&self) -> f32 {
        derive_table_top() - self.n_height_group_row - self.n_height_name_row
    }

    /// Total width of columns `col_start..=col_end`.
    fn derive_span_width(&self, col_start: usize, col_end: usize) -> f32 {
        self.l_col_w[col_start..=col_end].iter().sum()
    }

    /// Height of `rows`, clipped to the rows present in `page`.
    fn derive_span_height(&self, rows: Range<usize>, page: &Range<usize>) -> f32 {
        let n_row_end = usize::min(rows.end, page.end);
        if rows.start >= n_row_end {
            return 0.0;
        }
        self.l_row_heights[rows.start..n_row_end].iter().sum()
    }
}

fn derive_page_top() -> f32 {
    mm_to_pt(N_PAGE_HEIGHT_MM - N_PAGE_MARGIN_MM)
}

fn derive_table_top() -> f32 {
    derive_page_top() - mm_to_pt(N_HEADER_BLOCK_HEIGHT_MM)
}

fn derive_body_bottom() -> f32 {
    mm_to_pt(N_PAGE_MARGIN_MM + N_FOOTER_HEIGHT_MM)
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Branding

/// Decoded branding image, deflated RGB samples.
struct SpecLogoImage {
    n_width_px: i32,
    n_height_px: i32,
    data_deflated: Vec<u8>,
}

impl SpecLogoImage {
    fn decode(bytes: &[u8]) -> Result<Self, PdfRenderError> {
        let img = image::load_from_memory(bytes)
            .map_err(|err| PdfRenderError::Branding(err.to_string()))?;
        let rgb = img.to_rgb8();
        let cast_dim = |n: u32| {
            i32::try_from(n)
                .map_err(|_| PdfRenderError::Branding(format!("image dimension overflow: {n}")))
        };

        Ok(Self {
            n_width_px: cast_dim(rgb.width())?,
            n_height_px: cast_dim(rgb.height())?,
            data_deflated: compress_to_vec_zlib(rgb.as_raw(), N_DEFLATE_LEVEL),
        })
    }

    /// Drawn `(width, height)` in points, keeping the aspect ratio inside the logo box.
    fn derive_draw_size(&self) -> (f32, f32) {
        let n_height_max = mm_to_pt(N_LOGO_HEIGHT_MM);
        let n_width_max = mm_to_pt(N_LOGO_WIDTH_MAX_MM);
        let n_ratio = self.n_width_px as f32 / self.n_height_px.max(1) as f32;

        let n_width = n_height_max * n_ratio;
        if n_width <= n_width_max {
            (n_width, n_height_max)
        } else {
            (n_width_max, n_width_max / n_ratio)
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Composition

struct PdfPageComposer<'a> {
    layout: &'a PdfTableLayout,
    title: &'a str,
    options: &'a SpecPdfWriteOptions,
    logo_size: Option<(f32, f32)>,
}

impl PdfPageComposer<'_> {
    /// Uncompressed content stream per page.
    fn compose_all(&self) -> Vec<Vec<u8>> {
        let n_pages = self.layout.pages.len();
        self.layout
            .pages
            .iter()
            .enumerate()
            .map(|(page_idx, page)| {
                let mut content = Content::new();
                content.set_line_width(N_LINE_WIDTH_PT);
                self.draw_header_block(&mut content);
                self.draw_column_header(&mut content);
                self.draw_body(&mut content, page);
                self.draw_footer(&mut content, page_idx, n_pages);
                content.finish().as_slice().to_vec()
            })
            .collect()
    }

    fn draw_header_block(&self, content: &mut Content) {
        let n_y_top = derive_page_top();
        let n_x_center = mm_to_pt(N_PAGE_WIDTH_MM) / 2.0;

        if let Some((n_width, n_height)) = self.logo_size {
            content.save_state();
            content.transform([
                n_width,
                0.0,
                0.0,
                n_height,
                mm_to_pt(N_PAGE_MARGIN_MM),
                n_y_top - n_height,
            ]);
            content.x_object(Name(C_XOBJECT_RESOURCE_LOGO));
            content.restore_state();
        }

        let mut n_y = n_y_top;
        for (text, n_size, n_advance) in [
            (
                self.options.header.institution.as_str(),
                N_FONT_SIZE_INSTITUTION,
                1.2,
            ),
            (
                self.options.header.department.as_str(),
                N_FONT_SIZE_DEPARTMENT,
                1.5,
            ),
            (self.title, N_FONT_SIZE_TITLE, 1.5),
        ] {
            n_y -= n_size * n_advance;
            draw_text_centered(content, EnumPdfFont::Bold, n_size, n_x_center, n_y, text);
        }
    }

    /// Grouping row (blank over the first columns, label over the external
    /// group) followed by the column names.
    fn draw_column_header(&self, content: &mut Content) {
        let layout = self.layout;
        let n_y_group = derive_table_top();

        for col_idx in 0..N_COL_EXTERNAL_GROUP_START {
            draw_cell(
                content,
                (layout.l_col_x[col_idx], n_y_group),
                (layout.l_col_w[col_idx], layout.n_height_group_row),
                "",
                EnumPdfFont::Bold,
            );
        }
        draw_cell(
            content,
            (layout.l_col_x[N_COL_EXTERNAL_GROUP_START], n_y_group),
            (
                layout.derive_span_width(N_COL_EXTERNAL_GROUP_START, N_COL_EXTERNAL_GROUP_END),
                layout.n_height_group_row,
            ),
            C_EXTERNAL_GROUP_LABEL,
            EnumPdfFont::Bold,
        );

        let n_y_names = n_y_group - layout.n_height_group_row;
        for (col_idx, title) in L_PANEL_COLUMN_TITLES.iter().enumerate() {
            draw_cell(
                content,
                (layout.l_col_x[col_idx], n_y_names),
                (layout.l_col_w[col_idx], layout.n_height_name_row),
                title,
                EnumPdfFont::Bold,
            );
        }
    }

    fn draw_body(&self, content: &mut Content, page: &Range<usize>) {
        let layout = self.layout;
        let n_y_body = layout.derive_body_top();

        // Spans started on an earlier page continue as empty boxes.
        for (row_idx, row) in layout.table_rows[..page.start].iter().enumerate() {
            for cell in row.cells.iter().filter(|cell| cell.n_rowspan > 1) {
                let n_height =
                    layout.derive_span_height(page.start..row_idx + cell.n_rowspan, page);
                if n_height > 0.0 {
                    draw_cell(
                        content,
                        (layout.l_col_x[cell.col_idx], n_y_body),
                        (layout.l_col_w[cell.col_idx], n_height),
                        "",
                        EnumPdfFont::Regular,
                    );
                }
            }
        }

        let mut n_y_row = n_y_body;
        for row_idx in page.clone() {
            for cell in &layout.table_rows[row_idx].cells {
                let n_height = layout.derive_span_height(row_idx..row_idx + cell.n_rowspan, page);
                draw_cell(
                    content,
                    (layout.l_col_x[cell.col_idx], n_y_row),
                    (layout.l_col_w[cell.col_idx], n_height),
                    &cell.text,
                    EnumPdfFont::Regular,
                );
            }
            n_y_row -= layout.l_row_heights[row_idx];
        }
    }

    fn draw_footer(&self, content: &mut Content, page_idx: usize, n_pages: usize) {
        let n_x_left = mm_to_pt(N_PAGE_MARGIN_MM);
        let n_x_right = mm_to_pt(N_PAGE_WIDTH_MM - N_PAGE_MARGIN_MM);
        let n_x_center = mm_to_pt(N_PAGE_WIDTH_MM) / 2.0;
        let n_y_line = mm_to_pt(N_PAGE_MARGIN_MM + N_SIGNATURE_LINE_OFFSET_MM);
        let n_y_label = n_y_line - derive_line_height(N_FONT_SIZE_FOOTER) - 2.0;
        let n_width_line = mm_to_pt(N_SIGNATURE_LINE_MM);

        content.move_to(n_x_left, n_y_line);
        content.line_to(n_x_left + n_width_line, n_y_line);
        content.move_to(n_x_right - n_width_line, n_y_line);
        content.line_to(n_x_right, n_y_line);
        content.stroke();

        draw_text(
            content,
            EnumPdfFont::Regular,
            N_FONT_SIZE_FOOTER,
            (n_x_left, n_y_label),
            C_LABEL_SIGNATURE_COORDINATOR,
        );
        let n_width_hod =
            estimate_text_width(C_LABEL_SIGNATURE_HOD, EnumPdfFont::Regular, N_FONT_SIZE_FOOTER);
        draw_text(
            content,
            EnumPdfFont::Regular,
            N_FONT_SIZE_FOOTER,
            (n_x_right - n_width_hod, n_y_label),
            C_LABEL_SIGNATURE_HOD,
        );

        let c_date = format!(
            "Date: {}",
            self.options.date_footer.format(C_FORMAT_FOOTER_DATE)
        );
        draw_text_centered(
            content,
            EnumPdfFont::Regular,
            N_FONT_SIZE_FOOTER,
            n_x_center,
            n_y_label,
            &c_date,
        );
        draw_text_centered(
            content,
            EnumPdfFont::Regular,
            N_FONT_SIZE_FOOTER,
            n_x_center,
            mm_to_pt(N_PAGE_MARGIN_MM) + 2.0,
            &format!("Page {} of {}", page_idx + 1, n_pages),
        );
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Primitives

fn draw_text(content: &mut Content, font: EnumPdfFont, n_size: f32, pos: (f32, f32), text: &str) {
    let bytes = encode_winansi(text);
    content
        .begin_text()
        .set_font(Name(font.resource_name()), n_size)
        .next_line(pos.0, pos.1)
        .show(Str(bytes.as_slice()))
        .end_text();
}

fn draw_text_centered(
    content: &mut Content,
    font: EnumPdfFont,
    n_size: f32,
    n_x_center: f32,
    n_y: f32,
    text: &str,
) {
    let n_width = estimate_text_width(text, font, n_size);
    draw_text(content, font, n_size, (n_x_center - n_width / 2.0, n_y), text);
}

/// Stroke a box with its top-left corner at `pos` and draw wrapped, centered text.
fn draw_cell(
    content: &mut Content,
    pos: (f32, f32),
    size: (f32, f32),
    text: &str,
    font: EnumPdfFont,
) {
    let ((n_x, n_y_top), (n_width, n_height)) = (pos, size);
    content.rect(n_x, n_y_top - n_height, n_width, n_height);
    content.stroke();

    let n_size = N_FONT_SIZE_TABLE;
    let l_lines = wrap_text(text, n_width - 2.0 * N_CELL_PADDING_PT, font, n_size);
    if l_lines.is_empty() {
        return;
    }

    let n_line = derive_line_height(n_size);
    let n_height_text = l_lines.len() as f32 * n_line;
    let n_offset = f32::max(N_CELL_PADDING_PT, (n_height - n_height_text) / 2.0);
    for (line_idx, line) in l_lines.iter().enumerate() {
        let n_y = n_y_top - n_offset - n_line * (line_idx as f32 + 0.5) - 0.25 * n_size;
        let n_width_line = estimate_text_width(line, font, n_size);
        let n_x_text = f32::max(n_x + N_CELL_PADDING_PT, n_x + (n_width - n_width_line) / 2.0);
        draw_text(content, font, n_size, (n_x_text, n_y), line);
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn create_rows(n_subjects: usize, n_rows_each: usize) -> Vec<SpecPhysicalRow> {
        (0..n_subjects)
            .flat_map(|subject_idx| {
                (0..n_rows_each).map(move |row_idx| {
                    let if_first = row_idx == 0;
                    let subject_field =
                        |value: String| if if_first { value } else { String::new() };
                    SpecPhysicalRow {
                        serial: subject_field((subject_idx + 1).to_string()),
                        subject_name: subject_field(format!("Subject{subject_idx:03}")),
                        subject_code: subject_field(format!("CS{subject_idx:03}")),
                        semester: subject_field("V".to_string()),
                        students_enrolled: subject_field("60".to_string()),
                        internal_name: format!("Dr. Internal {row_idx}"),
                        external_name: format!("Dr. External {row_idx}"),
                        external_address: "College of Engineering, Pune".to_string(),
                        external_contact: "9876543210".to_string(),
                        external_email: "examiner@coep.ac.in".to_string(),
                        permission: subject_field("Yes".to_string()),
                        if_first_row_of_subject: if_first,
                        n_rows_subject: if if_first { n_rows_each } else { 0 },
                    }
                })
            })
            .collect()
    }

    fn create_options() -> SpecPdfWriteOptions {
        SpecPdfWriteOptions {
            date_footer: NaiveDate::from_ymd_opt(2026, 10, 16).expect("date"),
            ..Default::default()
        }
    }

    fn contains_bytes(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|window| window == needle)
    }

    fn count_bytes(haystack: &[u8], needle: &[u8]) -> usize {
        haystack.windows(needle.len()).filter(|window| *window == needle).count()
    }

    fn compose_contents(rows: &[SpecPhysicalRow], options: &SpecPdfWriteOptions) -> Vec<Vec<u8>> {
        let layout = PdfTableLayout::new(rows, options.rule_permission_scope).expect("layout");
        PdfPageComposer {
            layout: &layout,
            title: "Panel of Examiners - Test",
            options,
            logo_size: None,
        }
        .compose_all()
    }

    #[test]
    fn test_render_paginated_emits_pdf_document() {
        let v_bytes = render_paginated(&create_rows(2, 3), "Panel", &create_options())
            .expect("render");

        assert!(v_bytes.starts_with(b"%PDF-"));
        assert!(v_bytes.trim_ascii_end().ends_with(b"%%EOF"));
        assert!(contains_bytes(&v_bytes, b"/Count 1"));
        assert!(contains_bytes(&v_bytes, b"Helvetica-Bold"));
    }

    #[test]
    fn test_render_paginated_is_reproducible_with_fixed_date() {
        let l_rows = create_rows(5, 2);
        let v_first = render_paginated(&l_rows, "Panel", &create_options()).expect("first");
        let v_second = render_paginated(&l_rows, "Panel", &create_options()).expect("second");
        assert_eq!(v_first, v_second);
    }

    #[test]
    fn test_header_and_footer_repeat_on_every_page() {
        let l_contents = compose_contents(&create_rows(40, 3), &create_options());
        let n_pages = l_contents.len();
        assert!(n_pages > 1);

        for (page_idx, raw) in l_contents.iter().enumerate() {
            assert!(contains_bytes(raw, b"Panel of Examiners - Test"));
            assert!(contains_bytes(raw, C_EXTERNAL_GROUP_LABEL.as_bytes()));
            assert!(contains_bytes(raw, b"Sl No"));
            assert!(contains_bytes(raw, b"Date: 16/10/2026"));
            assert!(contains_bytes(raw, C_LABEL_SIGNATURE_HOD.as_bytes()));
            let c_page = format!("Page {} of {}", page_idx + 1, n_pages);
            assert!(contains_bytes(raw, c_page.as_bytes()));
        }
    }

    #[test]
    fn test_spanned_subject_text_is_drawn_once() {
        let l_contents = compose_contents(&create_rows(1, 4), &create_options());
        assert_eq!(l_contents.len(), 1);
        assert_eq!(count_bytes(&l_contents[0], b"Subject000"), 1);
        assert_eq!(count_bytes(&l_contents[0], b"Dr. External"), 4);
    }

    #[test]
    fn test_empty_rows_render_a_single_page() {
        let l_contents = compose_contents(&[], &create_options());
        assert_eq!(l_contents.len(), 1);
        assert!(contains_bytes(&l_contents[0], b"Page 1 of 1"));
    }

    #[test]
    fn test_invalid_logo_aborts_with_branding_error() {
        let options = SpecPdfWriteOptions {
            logo: Some(b"not an image".to_vec()),
            ..create_options()
        };
        let err = render_paginated(&create_rows(1, 1), "Panel", &options).expect_err("logo");
        assert!(matches!(err, PdfRenderError::Branding(_)));
    }

    #[test]
    fn test_logo_is_embedded_as_image_xobject() {
        let mut v_png = Vec::new();
        image::DynamicImage::ImageRgb8(image::RgbImage::new(8, 4))
            .write_to(&mut std::io::Cursor::new(&mut v_png), image::ImageFormat::Png)
            .expect("encode png");
        let options = SpecPdfWriteOptions {
            logo: Some(v_png),
            ..create_options()
        };

        let v_bytes = render_paginated(&create_rows(1, 1), "Panel", &options).expect("render");
        assert!(contains_bytes(&v_bytes, b"/Im1"));
    }

    #[test]
    fn test_logo_draw_size_keeps_aspect_ratio() {
        let logo = SpecLogoImage {
            n_width_px: 200,
            n_height_px: 100,
            data_deflated: Vec::new(),
        };
        let (n_width, n_height) = logo.derive_draw_size();
        assert!((n_width / n_height - 2.0).abs() < 1e-3);
        assert!(n_width <= mm_to_pt(N_LOGO_WIDTH_MAX_MM) + 1e-3);
    }
}
