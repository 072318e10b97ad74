use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// One block of a PDF document: optional heading, optional header row and
/// the body rows. Key/value blocks simply have no header row.
pub struct PdfSection<'a> {
    pub heading: Option<&'a str>,
    pub headers: Option<&'a [&'a str]>,
    pub rows: &'a [Vec<String>],
}

pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,

    page_w: f32,
    page_h: f32,
    margin: f32,
    row_h: f32,

    next_id: i32,
    font_id: Ref,

    font_size: f32,
    header_font_size: f32,
    title_font_size: f32,
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Helvetica only covers Latin-1; everything else becomes '?'.
fn latin1(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| if (c as u32) < 256 { c as u8 } else { b'?' })
        .collect()
}

impl PdfManager {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let next_id = 4;

        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,

            // A4 portrait
            page_w: 595.0,
            page_h: 842.0,
            margin: 50.0,
            row_h: 20.0,

            next_id,
            font_id,

            font_size: 10.0,
            header_font_size: 11.0,
            title_font_size: 14.0,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    /// Open a new page (title + page number already drawn).
    fn start_page(&mut self, title: &str) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        {
            let mut page = self.pdf.page(page_id);
            page.parent(self.pages_id)
                .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
                .contents(content_id);
            page.resources().fonts().pair(Name(b"F1"), self.font_id);
        }

        self.current_content_id = Some(content_id);

        let mut content = Content::new();
        self.draw_page_header_footer(&mut content, title, self.page_refs.len());
        content
    }

    fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id.take() {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn build_pages_tree(&mut self) {
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
    }

    fn draw_text(&self, content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
        let bytes = latin1(text);
        content.begin_text();
        content.set_font(Name(b"F1"), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(&bytes));
        content.end_text();
    }

    fn draw_cell_borders(&self, content: &mut Content, x: f32, y: f32, w: f32, h: f32) {
        content.save_state();
        content.set_stroke_rgb(0.65, 0.65, 0.65);
        content.rect(x, y, w, h);
        content.stroke();
        content.restore_state();
    }

    fn fill_row(&self, content: &mut Content, y: f32, width: f32, gray: f32) {
        content.save_state();
        content.set_fill_rgb(gray, gray, gray + 0.03_f32.min(1.0 - gray));
        content.rect(self.margin, y, width, self.row_h);
        content.fill_nonzero();
        content.restore_state();
    }

    fn draw_row(&self, content: &mut Content, y: f32, col_widths: &[f32], row: &[String], size: f32) {
        let mut x = self.margin;

        for (i, w) in col_widths.iter().enumerate() {
            let text = row.get(i).map(String::as_str).unwrap_or("");
            self.draw_text(content, x + 4.0, y + 5.0, size, text);
            self.draw_cell_borders(content, x, y, *w, self.row_h);
            x += w;
        }
    }

    /// Column widths from header + content, scaled down to fit the page.
    fn compute_col_widths(&self, headers: &[&str], rows: &[Vec<String>]) -> Vec<f32> {
        let cols = rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(headers.len()))
            .max()
            .unwrap_or(0);

        let mut widths = vec![24.0_f32; cols];

        for (i, h) in headers.iter().enumerate() {
            widths[i] = widths[i].max(h.len() as f32 * 6.5);
        }
        for row in rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.len() as f32 * 6.2);
            }
        }

        let total: f32 = widths.iter().sum();
        let max = self.page_w - 2.0 * self.margin;

        if total > max {
            let scale = max / total;
            for w in &mut widths {
                *w *= scale;
            }
        }

        widths
    }

    fn draw_page_header_footer(&self, content: &mut Content, title: &str, page: usize) {
        self.draw_text(
            content,
            self.margin,
            self.page_h - self.margin + 15.0,
            self.title_font_size,
            title,
        );

        let pg = format!("Page {}", page);
        self.draw_text(
            content,
            self.page_w - self.margin - 60.0,
            self.margin - 35.0,
            self.font_size,
            &pg,
        );
    }

    fn draw_header_row(&self, content: &mut Content, y: f32, widths: &[f32], headers: &[&str]) {
        let header_row: Vec<String> = headers.iter().map(|s| s.to_string()).collect();
        self.fill_row(content, y, widths.iter().sum(), 0.85);
        self.draw_row(content, y, widths, &header_row, self.header_font_size);
    }

    /// Lay out `sections` top to bottom, breaking pages as needed. Table
    /// headers are repeated at the top of each continuation page.
    pub fn write_document(&mut self, title: &str, sections: &[PdfSection<'_>]) {
        let top = self.page_h - self.margin - 30.0;
        let mut content = self.start_page(title);
        let mut y = top;

        for section in sections {
            let headers = section.headers.unwrap_or(&[]);
            let widths = self.compute_col_widths(headers, section.rows);
            let table_w: f32 = widths.iter().sum();

            // Keep the heading together with the header row and one body row.
            let needed = self.row_h * 3.0;
            if y - needed < self.margin && y < top {
                self.finalize_page(content);
                content = self.start_page(title);
                y = top;
            }

            if let Some(heading) = section.heading {
                self.draw_text(&mut content, self.margin, y + 6.0, self.header_font_size, heading);
                y -= self.row_h;
            }

            if !headers.is_empty() {
                self.draw_header_row(&mut content, y, &widths, headers);
                y -= self.row_h;
            }

            for (i, row) in section.rows.iter().enumerate() {
                if y < self.margin {
                    self.finalize_page(content);
                    content = self.start_page(title);
                    y = top;

                    if !headers.is_empty() {
                        self.draw_header_row(&mut content, y, &widths, headers);
                        y -= self.row_h;
                    }
                }

                // zebra stripe
                if i % 2 == 0 {
                    self.fill_row(&mut content, y, table_w, 0.96);
                }

                self.draw_row(&mut content, y, &widths, row, self.font_size);
                y -= self.row_h;
            }

            // blank line between sections
            y -= self.row_h / 2.0;
        }

        self.finalize_page(content);
    }

    /// Multi-page table with title.
    pub fn write_table(&mut self, title: &str, headers: &[&str], rows: &[Vec<String>]) {
        self.write_document(
            title,
            &[PdfSection {
                heading: None,
                headers: Some(headers),
                rows,
            }],
        );
    }

    pub fn page_count(&self) -> usize {
        self.page_refs.len()
    }

    pub fn save(mut self, path: &Path) -> std::io::Result<()> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.build_pages_tree();

        let bytes = self.pdf.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}
