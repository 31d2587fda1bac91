// ABOUTME: Encodes and decodes the bookings workbook
// ABOUTME: One sheet, a header row of named columns, one row per booking

use std::collections::HashMap;
use std::io::Cursor;

use calamine::{Data, Reader, Xlsx};
use chrono::{DateTime, Utc};
use rust_xlsxwriter::Workbook;
use tracing::warn;

use atelier_core::constants::BOOKINGS_SHEET;
use atelier_core::utils::parse_timestamp;
use atelier_core::{Booking, BookingStatus, BOOKING_COLUMNS};

use crate::StorageResult;

/// Serialize bookings into an xlsx buffer. An empty slice yields a header-only sheet.
pub fn encode_bookings(bookings: &[Booking]) -> StorageResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(BOOKINGS_SHEET)?;

    for (col, header) in BOOKING_COLUMNS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
    }

    for (index, booking) in bookings.iter().enumerate() {
        let row = (index + 1) as u32;
        for (col, value) in booking.column_values().iter().enumerate() {
            if !value.is_empty() {
                worksheet.write_string(row, col as u16, value.as_str())?;
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}

/// Parse the first sheet of an xlsx buffer. Rows without an ID are skipped.
pub fn decode_bookings(bytes: Vec<u8>) -> StorageResult<Vec<Booking>> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes))?;

    let range = match workbook.worksheet_range_at(0) {
        Some(range) => range?,
        None => return Ok(Vec::new()),
    };

    let mut rows = range.rows();
    let header: HashMap<String, usize> = match rows.next() {
        Some(cells) => cells
            .iter()
            .enumerate()
            .map(|(index, cell)| (cell_text(cell), index))
            .collect(),
        None => return Ok(Vec::new()),
    };

    let bookings = rows
        .filter_map(|cells| {
            let get = |column: &str| {
                header
                    .get(column)
                    .and_then(|&index| cells.get(index))
                    .map(cell_text)
                    .unwrap_or_default()
            };
            let id = get("ID");
            if id.is_empty() {
                return None;
            }
            Some(Booking {
                timestamp: row_timestamp(&id, &get("Timestamp")),
                status: row_status(&id, &get("Status")),
                name: get("Name"),
                email: get("Email"),
                phone: get("Phone"),
                location: get("Location"),
                project_type: get("Project Type"),
                area_size: get("Area Size"),
                budget: get("Budget"),
                appointment_date: get("Appointment Date"),
                appointment_time: get("Appointment Time"),
                message: get("Message"),
                id,
            })
        })
        .collect();

    Ok(bookings)
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(value) => value.clone(),
        // Phone numbers typed into the sheet by hand come back as floats
        Data::Float(value) if value.fract() == 0.0 => format!("{}", *value as i64),
        other => other.to_string(),
    }
}

fn row_timestamp(id: &str, value: &str) -> DateTime<Utc> {
    parse_timestamp(value).unwrap_or_else(|| {
        warn!(booking_id = %id, value = %value, "Unparseable booking timestamp");
        DateTime::UNIX_EPOCH
    })
}

fn row_status(id: &str, value: &str) -> BookingStatus {
    if value.is_empty() {
        return BookingStatus::Pending;
    }
    value.parse().unwrap_or_else(|_| {
        warn!(booking_id = %id, value = %value, "Unknown booking status, treating as Pending");
        BookingStatus::Pending
    })
}
