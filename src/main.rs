mod argocd;
mod cli;
mod error;
mod filter;
mod image;
mod models;
mod output;

use std::collections::HashSet;
use std::process;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use argocd::ArgoClient;
use cli::{Cli, Command};
use filter::Filter;
use image::ImageReference;
use models::Application;
use output::{print_app, print_cycle_header, print_images};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let client = ArgoClient::new(&cli.server, cli.token.clone(), cli.insecure, cli.verbose)?;
    let filter = Filter::from_cli(&cli)?;

    let version = client.server_version().await?;
    if cli.verbose {
        eprintln!("[DEBUG] Argo CD server version: {}", version.version);
    }

    match cli.command {
        Command::List => run_list(&client, &filter).await,
        Command::Images => run_images(&client, &filter).await,
        Command::Watch(args) => run_watch(&client, &filter, args.interval).await,
    }
}

async fn fetch_apps(client: &ArgoClient, filter: &Filter) -> Result<Vec<Application>> {
    let apps = client.list_applications().await?;
    Ok(filter.apply(apps))
}

/// Render each application and return the total image count
fn render_apps(apps: &[Application]) -> usize {
    let mut total_images: usize = 0;

    for app in apps {
        let images = app.image_refs();
        total_images += images.len();
        print_app(app, &images);
    }

    total_images
}

async fn run_list(client: &ArgoClient, filter: &Filter) -> Result<()> {
    let apps = fetch_apps(client, filter).await?;

    if apps.is_empty() {
        println!("No applications found.");
        return Ok(());
    }

    let total_images = render_apps(&apps);

    println!("\n{} applications, {} images total.", apps.len(), total_images);

    Ok(())
}

async fn run_images(client: &ArgoClient, filter: &Filter) -> Result<()> {
    let apps = fetch_apps(client, filter).await?;

    // Unique references across applications, first-seen order
    let mut seen: HashSet<String> = HashSet::new();
    let mut images: Vec<ImageReference> = Vec::new();

    for app in &apps {
        for img in app.image_refs() {
            if seen.insert(img.full.clone()) {
                images.push(img);
            }
        }
    }

    print_images(&images);

    println!("\n{} applications, {} unique images.", apps.len(), images.len());

    Ok(())
}

async fn run_watch(client: &ArgoClient, filter: &Filter, interval_secs: u64) -> Result<()> {
    let mut ticker = tokio::time::interval(Duration::from_secs(interval_secs.max(1)));

    loop {
        ticker.tick().await;
        print_cycle_header(chrono::Utc::now());

        match fetch_apps(client, filter).await {
            Ok(apps) => {
                if apps.is_empty() {
                    println!("No applications found.");
                    continue;
                }
                let total_images = render_apps(&apps);
                println!("\n{} applications, {} images total.", apps.len(), total_images);
            }
            Err(e) => {
                // Keep polling across transient failures
                eprintln!("[ERROR] Refresh failed: {:#}", e);
            }
        }
    }
}
