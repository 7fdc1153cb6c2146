//! Paginated layout for the exported report.
//!
//! The export collaborator consumes positioned text lines: layout starts
//! at a fixed top margin, advances a fixed line height, and starts a new
//! page once the vertical cursor passes a threshold. Weekly sections break
//! earlier than the grand-total footer so the footer can share the last
//! page. Producing actual PDF bytes from the pages is out of scope here.

use payroll_core::calculations::report::CURRENCY_SYMBOL;
use payroll_core::models::Parameters;
use payroll_core::WeekReport;
use rust_decimal::Decimal;

/// Layout constants in abstract page units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub top_margin: u32,
    pub line_height: u32,
    /// Threshold for parameter and weekly section lines.
    pub section_break_at: u32,
    /// Threshold for the grand-total footer.
    pub footer_break_at: u32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            top_margin: 20,
            line_height: 8,
            section_break_at: 250,
            footer_break_at: 280,
        }
    }
}

/// One line placed at a vertical position on a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionedLine {
    pub y: u32,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub lines: Vec<PositionedLine>,
}

struct PageWriter {
    layout: Layout,
    pages: Vec<Page>,
    y: u32,
}

impl PageWriter {
    fn new(layout: Layout) -> Self {
        Self {
            layout,
            pages: vec![Page::default()],
            y: layout.top_margin,
        }
    }

    fn push(
        &mut self,
        text: String,
        break_at: u32,
    ) {
        if self.y > break_at {
            self.pages.push(Page::default());
            self.y = self.layout.top_margin;
        }

        // pages is never empty; new() seeds the first page.
        if let Some(page) = self.pages.last_mut() {
            page.lines.push(PositionedLine { y: self.y, text });
        }
        self.y += self.layout.line_height;
    }

    fn blank(
        &mut self,
        break_at: u32,
    ) {
        self.push(String::new(), break_at);
    }

    fn finish(self) -> Vec<Page> {
        self.pages
    }
}

/// Lays out the full report: parameters, the four weekly summaries and the
/// grand total. Pure function of its inputs.
pub fn render_report(
    parameters: &Parameters,
    weekly: &[WeekReport],
    grand_total: Decimal,
    layout: Layout,
) -> Vec<Page> {
    let mut writer = PageWriter::new(layout);
    let section = layout.section_break_at;

    writer.push("Salary report".to_string(), section);
    writer.blank(section);

    writer.push("Parameters".to_string(), section);
    let rates = parameters.resolve();
    for (label, value) in [
        ("Base hourly rate", rates.base_hourly_rate),
        ("Driving allowance", rates.driving_allowance),
        ("Extra meal allowance", rates.extra_meal_allowance),
        ("Off-site allowance", rates.off_site_allowance),
        ("Dinner allowance", rates.dinner_allowance),
        ("On-call weekday", rates.on_call_weekday),
        ("On-call Saturday", rates.on_call_saturday),
        ("On-call holiday", rates.on_call_holiday),
    ] {
        writer.push(format!("{label}: {CURRENCY_SYMBOL} {value:.2}"), section);
    }
    writer.blank(section);

    for (index, report) in weekly.iter().enumerate() {
        writer.push(format!("Week {}", index + 1), section);
        for line in report.lines() {
            writer.push(format!("{}: {}", line.label, line.value), section);
        }
        writer.blank(section);
    }

    writer.push(
        format!("Period total: {CURRENCY_SYMBOL} {grand_total:.2}"),
        layout.footer_break_at,
    );

    writer.finish()
}

/// Renders pages as plain text, separated by form feeds, for the export
/// file.
pub fn pages_to_text(pages: &[Page]) -> String {
    pages
        .iter()
        .map(|page| {
            page.lines
                .iter()
                .map(|line| line.text.as_str())
                .collect::<Vec<_>>()
                .join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n\u{c}\n")
}
