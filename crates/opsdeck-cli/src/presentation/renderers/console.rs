//! Plain-console output for one-shot commands.
//!
//! Colorized only when stdout is a terminal; piped output falls back to the
//! view model's `Display` form so scripts see stable text.

use crate::presentation::view_models::{UserRow, UsersListViewModel};
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use std::io;

pub fn render_users(vm: &UsersListViewModel) {
    if !io::stdout().is_terminal() {
        print!("{}", vm);
        return;
    }

    if vm.users.is_empty() {
        println!("{}", "No users found.".dimmed());
        if let Some(ref search) = vm.applied.search {
            println!("  Search: {}", search);
        }
        if let Some(ref role) = vm.applied.role {
            println!("  Role: {}", role);
        }
        if let Some(ref status) = vm.applied.status {
            println!("  Status: {}", status);
        }
        return;
    }

    println!(
        "{} {} {} {} {}",
        format!("{:<20}", "NAME").bold(),
        format!("{:<26}", "EMAIL").bold(),
        format!("{:<8}", "ROLE").bold(),
        format!("{:<10}", "STATUS").bold(),
        "JOINED".bold()
    );
    for row in &vm.users {
        println!(
            "{:<20} {:<26} {} {} {}",
            row.name,
            row.email,
            role_cell(row),
            status_cell(row),
            row.join_date
        );
    }

    if let Some((start, end)) = vm.range {
        println!();
        println!(
            "Showing {} to {} of {} users (page {} of {})",
            start, end, vm.total, vm.page, vm.total_pages
        );
    }
}

fn role_cell(row: &UserRow) -> String {
    let padded = format!("{:<8}", row.role);
    match row.role.as_str() {
        "admin" => padded.magenta().to_string(),
        "user" => padded.blue().to_string(),
        _ => padded,
    }
}

fn status_cell(row: &UserRow) -> String {
    let padded = format!("{:<10}", row.status);
    match row.status.as_str() {
        "active" => padded.green().to_string(),
        "inactive" => padded.red().to_string(),
        "pending" => padded.yellow().to_string(),
        _ => padded,
    }
}
