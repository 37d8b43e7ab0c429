use chrono::{DateTime, Utc};
use colored::{ColoredString, Colorize};

use crate::image::ImageReference;
use crate::models::Application;

/// Print one application header plus its image lines
pub fn print_app(app: &Application, images: &[ImageReference]) {
    let namespace = if app.namespace().is_empty() {
        String::new()
    } else {
        format!(" ({})", app.namespace())
    };

    let created = match &app.metadata.creation_timestamp {
        Some(dt) => format!("created {}", dt.format("%Y-%m-%d")),
        None => String::new(),
    };

    println!(
        "\n{} {}{} [{} / {}] {}",
        health_marker(app.health()),
        app.name().bold(),
        namespace.dimmed(),
        colorize_health(app.health()),
        colorize_sync(app.sync()),
        created.dimmed(),
    );

    if images.is_empty() {
        println!("    {}", "No images".dimmed());
        return;
    }

    for img in images {
        println!(
            "    {:<30} {} {}",
            img.short_name,
            img.version.bold(),
            img.full.dimmed(),
        );
    }
}

/// Print a flat list of image references
pub fn print_images(images: &[ImageReference]) {
    if images.is_empty() {
        println!("No images found.");
        return;
    }

    for img in images {
        println!(
            "  {:<30} {} {}",
            img.short_name,
            img.version.bold(),
            img.full.dimmed(),
        );
    }
}

/// Print the separator that opens each watch cycle
pub fn print_cycle_header(now: DateTime<Utc>) {
    println!("\n{}", "═".repeat(60));
    println!(
        "{} {}",
        "REFRESH".bold(),
        now.format("%Y-%m-%d %H:%M:%S UTC").to_string().dimmed()
    );
}

fn health_marker(health: &str) -> ColoredString {
    match health.to_lowercase().as_str() {
        "healthy" => "●".green(),
        "degraded" | "missing" => "●".red(),
        "progressing" | "suspended" => "●".yellow(),
        _ => "●".dimmed(),
    }
}

fn colorize_health(health: &str) -> ColoredString {
    match health.to_lowercase().as_str() {
        "healthy" => health.green(),
        "degraded" | "missing" => health.red().bold(),
        "progressing" | "suspended" => health.yellow(),
        _ => health.dimmed(),
    }
}

fn colorize_sync(sync: &str) -> ColoredString {
    match sync.to_lowercase().as_str() {
        "synced" => sync.green(),
        "outofsync" => sync.yellow().bold(),
        _ => sync.dimmed(),
    }
}
