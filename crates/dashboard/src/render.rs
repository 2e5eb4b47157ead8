//! Plain-text rendering of dashboard sections.
//!
//! Every section renders an explicit message when its record set is empty.

use std::fmt::Write as _;

use service::fleet::{FleetAnalytics, OemRecord, ReviewRecord, ReviewSummary, VehicleRecord};

pub const NO_OEMS: &str = "No OEMs found for this city.";
pub const NO_VEHICLES: &str = "No dealers found matching your filters.";
pub const NO_REVIEWS: &str = "No reviews found for this model.";
pub const NO_DATA: &str = "No fleet data available.";

pub fn compare_hint(min_models: usize) -> String {
    format!("Please select at least {min_models} models to compare.")
}

/// Left-aligned columns separated by two spaces, with a dashed header rule.
pub fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }

    let mut out = String::new();
    let _ = writeln!(out, "{}", line(headers, &widths));
    let _ = writeln!(out, "{}", widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>().join("  "));
    for row in rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        let _ = writeln!(out, "{}", line(&cells, &widths));
    }
    out
}

fn line(cells: &[&str], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(c, w)| format!("{:<width$}", c, width = *w))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

fn heading(title: &str) -> String {
    format!("{title}\n{}\n", "=".repeat(title.chars().count()))
}

fn opt(v: &Option<String>) -> String {
    v.clone().unwrap_or_default()
}

pub fn options(title: &str, values: &[String]) -> String {
    let mut out = heading(title);
    if values.is_empty() {
        out.push_str("(none)\n");
    }
    for v in values {
        let _ = writeln!(out, "  {v}");
    }
    out
}

pub fn oems(city: &str, records: &[OemRecord]) -> String {
    let mut out = heading(&format!("Available OEMs in {city}"));
    if records.is_empty() {
        let _ = writeln!(out, "{NO_OEMS}");
        return out;
    }
    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|o| vec![o.name.clone(), opt(&o.contact), o.city.clone(), opt(&o.address), opt(&o.phone)])
        .collect();
    out.push_str(&table(&["name", "contact", "city", "address", "phone"], &rows));
    out
}

fn vehicle_rows(records: &[VehicleRecord]) -> Vec<Vec<String>> {
    records
        .iter()
        .map(|v| vec![v.model.clone(), v.dealer.clone(), v.vehicle_type.clone(), format!("{:.2}", v.price_lakhs)])
        .collect()
}

pub fn vehicles(vehicle_type: &str, budget: f64, records: &[VehicleRecord]) -> String {
    let mut out = heading(&format!("Matching Dealers and Vehicles ({vehicle_type}, up to {budget:.2} lakhs)"));
    if records.is_empty() {
        let _ = writeln!(out, "{NO_VEHICLES}");
        return out;
    }
    out.push_str(&table(&["model", "dealer", "type", "price_lakhs"], &vehicle_rows(records)));
    out
}

pub fn reviews(model: &str, records: &[ReviewRecord]) -> String {
    let mut out = heading(&format!("Reviews for {model}"));
    let summary = ReviewSummary::from_reviews(records);
    let Some(avg) = summary.average_rating else {
        let _ = writeln!(out, "{NO_REVIEWS}");
        return out;
    };
    for r in records {
        let _ = writeln!(out, "⭐ {} - {}", r.rating, r.comment.as_deref().unwrap_or(""));
    }
    let _ = writeln!(out, "Average rating: {avg:.1} ({} reviews)", summary.count);
    out
}

/// Comparison table, or the selection hint when too few models are picked.
pub fn comparison(selected: usize, min_models: usize, records: &[VehicleRecord]) -> String {
    let mut out = heading("Compare Selected Models");
    if selected < min_models {
        let _ = writeln!(out, "{}", compare_hint(min_models));
        return out;
    }
    if records.is_empty() {
        let _ = writeln!(out, "{NO_VEHICLES}");
        return out;
    }
    out.push_str(&table(&["model", "dealer", "type", "price_lakhs"], &vehicle_rows(records)));
    out
}

pub fn analytics(a: &FleetAnalytics) -> String {
    let mut out = heading("Fleet Analytics");
    if a.vehicles_by_type.is_empty() && a.oems_by_city.is_empty() {
        let _ = writeln!(out, "{NO_DATA}");
        return out;
    }
    let type_rows: Vec<Vec<String>> = a
        .vehicles_by_type
        .iter()
        .map(|t| vec![t.vehicle_type.clone(), t.vehicle_count.to_string(), format!("{:.2}", t.avg_price_lakhs)])
        .collect();
    let city_rows: Vec<Vec<String>> = a
        .oems_by_city
        .iter()
        .map(|c| vec![c.city.clone(), c.oem_count.to_string()])
        .collect();
    let _ = writeln!(out, "Vehicles by type ({} total)", a.total_vehicles());
    out.push_str(&table(&["type", "vehicles", "avg_price_lakhs"], &type_rows));
    let _ = writeln!(out, "\nOEMs by city ({} total)", a.total_oems());
    out.push_str(&table(&["city", "oems"], &city_rows));
    out
}
