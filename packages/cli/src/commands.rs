// ABOUTME: Admin maintenance commands that work directly against the record stores
// ABOUTME: Listing bookings, changing a booking's status, and reporting the active backend

use clap::Subcommand;
use colored::*;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};

use atelier_core::{Booking, BookingStatus};
use atelier_storage::{
    get_storage_adapter, select_backend, BackendKind, StorageAdapter, StorageConfig,
};

#[derive(Subcommand, Debug)]
pub enum BookingsCommands {
    /// List all bookings, newest first
    List,
    /// Change the status of a booking
    SetStatus {
        /// Booking ID (e.g. BK1715329800000)
        id: String,
        /// Pending, Confirmed, Completed, or Cancelled
        status: String,
    },
}

pub async fn handle_bookings_command(
    command: BookingsCommands,
) -> Result<(), Box<dyn std::error::Error>> {
    let storage = get_storage_adapter(&StorageConfig::from_env())?;

    match command {
        BookingsCommands::List => list_bookings(&storage).await,
        BookingsCommands::SetStatus { id, status } => set_status(&storage, &id, &status).await,
    }
}

pub fn print_backend() {
    let config = StorageConfig::from_env();
    let backend = select_backend(&config);
    println!("{} {}", "Storage backend:".bold(), backend.as_str().cyan());
    if backend == BackendKind::FlatFile {
        println!("{} {}", "Data directory:".bold(), config.data_dir.display());
    }
}

async fn list_bookings(storage: &StorageAdapter) -> Result<(), Box<dyn std::error::Error>> {
    let bookings = storage.bookings.read().await?;

    if bookings.is_empty() {
        println!("{}", "No bookings found".yellow());
        return Ok(());
    }

    println!("{}", bookings_table(&bookings));
    println!("Total: {} bookings", bookings.len().to_string().cyan());
    Ok(())
}

/// Change one booking's status, returning an error when the id is unknown
pub async fn set_status(
    storage: &StorageAdapter,
    id: &str,
    status: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let status: BookingStatus = status.parse()?;

    if !storage.bookings.update_status(id, status).await? {
        return Err(format!("Booking '{}' not found", id).into());
    }

    println!(
        "{} {} is now {}",
        "✓".green(),
        id,
        status.to_string().bold()
    );
    Ok(())
}

pub fn bookings_table(bookings: &[Booking]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        "ID",
        "Received",
        "Name",
        "Phone",
        "Project",
        "Appointment",
        "Status",
    ]);

    for booking in bookings {
        table.add_row(vec![
            booking.id.clone(),
            booking.timestamp.format("%Y-%m-%d %H:%M").to_string(),
            booking.name.clone(),
            booking.phone.clone(),
            booking.project_type.clone(),
            format!("{} {}", booking.appointment_date, booking.appointment_time),
            booking.status.to_string(),
        ]);
    }

    table
}
