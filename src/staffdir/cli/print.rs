use chrono::{DateTime, Utc};
use colored::Colorize;
use staffdir::commands::{CmdMessage, ListPage, MessageLevel};
use staffdir::config::DirectoryConfig;
use staffdir::i18n::Language;
use staffdir::listing::PageLink;
use staffdir::model::{Employee, Field};
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const MAX_COLUMN_WIDTH: usize = 24;
const COLUMN_GAP: &str = "  ";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_employee_page(page: &ListPage, lang: Language) {
    println!("{}", lang.t("employeeList").bold());
    if page.rows.is_empty() {
        println!("{}", lang.t("noEmployees"));
        return;
    }

    let lines = table_lines(&page.rows, lang);
    if let Some((header, body)) = lines.split_first() {
        println!("{}", header.bold());
        for line in body {
            println!("{}", line);
        }
    }

    println!();
    if let Some(showing) = showing_line(page, lang) {
        println!("{}", showing.dimmed());
    }
    if page.total_pages > 1 {
        println!("{}", pager_line(&page.links, page.page));
    }
}

pub(super) fn print_employee(employee: &Employee, lang: Language) {
    let mut labels: Vec<(String, String)> =
        vec![(lang.t("id").to_string(), employee.id.to_string())];
    for field in Field::ALL {
        labels.push((lang.t(field.as_str()).to_string(), cell(employee, field, lang)));
    }
    labels.push((
        lang.t("createdAt").to_string(),
        format_time_ago(employee.created_at),
    ));
    if let Some(updated) = employee.updated_at {
        labels.push((lang.t("updatedAt").to_string(), format_time_ago(updated)));
    }

    let width = labels.iter().map(|(l, _)| l.width()).max().unwrap_or(0);
    println!("{}", employee.data.full_name().bold());
    for (label, value) in labels {
        println!("  {}  {}", pad_to_width(&label, width).dimmed(), value);
    }
}

pub(super) fn print_config(config: &DirectoryConfig) {
    for key in staffdir::config::KEYS {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

/// Header plus one line per row, columns padded to a shared width.
fn table_lines(rows: &[Employee], lang: Language) -> Vec<String> {
    let mut grid: Vec<Vec<String>> = Vec::with_capacity(rows.len() + 1);
    let mut header = vec![lang.t("id").to_string()];
    header.extend(Field::ALL.iter().map(|f| lang.t(f.as_str()).to_string()));
    grid.push(header);

    for employee in rows {
        let mut line = vec![employee.short_id()];
        line.extend(Field::ALL.iter().map(|f| cell(employee, *f, lang)));
        grid.push(line);
    }

    let columns = grid[0].len();
    let widths: Vec<usize> = (0..columns)
        .map(|c| {
            grid.iter()
                .map(|line| line[c].width())
                .max()
                .unwrap_or(0)
                .min(MAX_COLUMN_WIDTH)
        })
        .collect();

    grid.iter()
        .map(|line| {
            line.iter()
                .zip(&widths)
                .map(|(text, width)| pad_to_width(&truncate_to_width(text, *width), *width))
                .collect::<Vec<_>>()
                .join(COLUMN_GAP)
                .trim_end()
                .to_string()
        })
        .collect()
}

fn cell(employee: &Employee, field: Field, lang: Language) -> String {
    let value = employee.data.get(field);
    if field.is_date() {
        lang.format_date(value)
    } else {
        value.to_string()
    }
}

/// "Showing 11-20 of 25", or `None` when the page is empty.
fn showing_line(page: &ListPage, lang: Language) -> Option<String> {
    let (first, last) = page.range?;
    Some(format!(
        "{} {}-{} {} {}",
        lang.t("showing"),
        first,
        last,
        lang.t("of"),
        page.total_items
    ))
}

fn pager_line(links: &[PageLink], current: usize) -> String {
    links
        .iter()
        .map(|link| match link {
            PageLink::Page(n) if *n == current => format!("[{}]", n),
            PageLink::Page(n) => n.to_string(),
            PageLink::Ellipsis => "…".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    Formatter::new().convert(duration.to_std().unwrap_or_default())
}
