//! Rendering listings for the terminal.

use clap::ValueEnum;
use wayfarer_core::PackageListingRow;

/// Output format for `wayfarer list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON array.
    #[default]
    Json,

    /// Aligned plain-text table.
    Table,
}

pub fn render(rows: &[PackageListingRow], format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(rows),
        OutputFormat::Table => Ok(render_table(rows)),
    }
}

const HEADERS: [&str; 7] = ["PACKAGE", "COUNTRY", "CITY", "HOTEL", "CAPACITY", "STARS", "PRICE"];

fn render_table(rows: &[PackageListingRow]) -> String {
    let cells: Vec<[String; 7]> = rows
        .iter()
        .map(|row| {
            [
                row.trip_package_name.clone(),
                row.country.clone(),
                row.city.clone(),
                row.hotel_name.clone(),
                row.room_capacity.to_string(),
                row.stars.to_string(),
                row.package_price_per_person.to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for line in &cells {
        for (width, cell) in widths.iter_mut().zip(line) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_line = |line: &[String]| {
        line.iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = vec![format_line(&HEADERS.map(String::from)[..])];
    out.extend(cells.iter().map(|line| format_line(&line[..])));
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfarer_core::Money;

    fn row(name: &str, price_cents: i64) -> PackageListingRow {
        PackageListingRow {
            trip_package_name: name.to_string(),
            country: "France".to_string(),
            city: "Nice".to_string(),
            hotel_name: "Hotel Azur".to_string(),
            room_capacity: 2,
            stars: 4,
            package_price_per_person: Money::from_cents(price_cents),
        }
    }

    #[test]
    fn test_json_keeps_order_and_decimal_price() {
        let out = render(&[row("B", 100), row("A", 49900)], OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(parsed[0]["tripPackageName"], "B");
        assert_eq!(parsed[1]["packagePricePerPerson"], "499.00");
    }

    #[test]
    fn test_empty_json_is_empty_array() {
        assert_eq!(render(&[], OutputFormat::Json).unwrap(), "[]");
    }

    #[test]
    fn test_table_alignment() {
        let out = render(&[row("Riviera Escape", 49900)], OutputFormat::Table).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("PACKAGE         COUNTRY"));
        assert!(lines[1].starts_with("Riviera Escape  France "));
        assert!(lines[1].ends_with("499.00"));
    }

    #[test]
    fn test_empty_table_is_header_only() {
        let out = render(&[], OutputFormat::Table).unwrap();
        assert_eq!(out.lines().count(), 1);
    }
}
