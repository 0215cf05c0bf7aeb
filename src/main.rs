//! linkboard — tab-and-group bookmark manager with JSON import/export.
//!
//! Entry point: runs a console walkthrough of the stores, the export
//! pipeline and the import state machine against a scratch data dir.
//! Point `LINKBOARD_API_URL` at a backend to exercise the REST client
//! with local fallback instead of pure local storage.

use std::error::Error;
use std::fs;
use std::path::Path;

use linkboard::app::App;
use linkboard::config::ClientConfig;
use linkboard::services::{exporter, urls};
use linkboard::types::bookmark::BookmarkDraft;
use linkboard::types::group::GroupDraft;
use linkboard::types::tab::TabDraft;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    println!();
    println!("linkboard v{} — console walkthrough", env!("CARGO_PKG_VERSION"));

    // Scratch dir so the walkthrough never touches real user data.
    let data_dir = std::env::temp_dir().join("linkboard-demo");
    if data_dir.exists() {
        fs::remove_dir_all(&data_dir)?;
    }

    let config = ClientConfig {
        base_url: ClientConfig::from_env().base_url,
        data_dir: data_dir.clone(),
    };
    let mut app = App::new(config);
    app.startup();

    let export_path = demo_board(&mut app)?;
    demo_import(&mut app, &export_path)?;
    demo_validation(&mut app)?;

    println!();
    println!("walkthrough data left in {}", data_dir.display());
    Ok(())
}

/// Seed a small board and export it.
fn demo_board(app: &mut App) -> Result<std::path::PathBuf, Box<dyn Error>> {
    println!();
    println!("--- board ---");

    let work = app.tabs.add(TabDraft {
        name: "Work".to_string(),
        color: Some("#1f6feb".to_string()),
    })?;

    let docs = app.groups.add(GroupDraft {
        name: "Docs".to_string(),
        color: "#10b981".to_string(),
        tab_id: Some(work.id.clone()),
        position: 0,
    })?;
    let tools = app.groups.add(GroupDraft {
        name: "Tools".to_string(),
        color: "#f59e0b".to_string(),
        tab_id: Some(work.id.clone()),
        position: 1,
    })?;

    app.bookmarks.add(BookmarkDraft {
        name: "The Rust Book".to_string(),
        url: "doc.rust-lang.org/book".to_string(),
        tab_ids: vec![work.id.clone()],
        group_ids: vec![docs.id.clone()],
        position: Some(0),
    })?;
    app.bookmarks.add(BookmarkDraft {
        name: "crates.io".to_string(),
        url: "https://crates.io".to_string(),
        tab_ids: vec![work.id.clone()],
        group_ids: vec![tools.id.clone()],
        position: Some(0),
    })?;

    for group in app.groups.in_tab(&work.id) {
        println!("[{}] {}", group.color, group.name);
        for bookmark in app.bookmarks.in_group(&group.id) {
            println!("    {} — {}", bookmark.name, bookmark.url);
        }
    }

    let path = exporter::write_export(
        &app.config.data_dir,
        app.bookmarks.items(),
        app.groups.items(),
    )?;
    println!("exported to {}", path.display());
    Ok(path)
}

/// Re-import the export on top of the existing board.
fn demo_import(app: &mut App, export_path: &Path) -> Result<(), Box<dyn Error>> {
    println!();
    println!("--- import ---");

    let text = fs::read_to_string(export_path)?;
    let summary = app.import.stage(&text)?;
    println!(
        "staged {} bookmarks and {} groups, replacing {} and {}",
        summary.bookmarks,
        summary.groups,
        app.bookmarks.items().len(),
        app.groups.items().len()
    );

    let target_tab = app.tabs.items().first().map(|t| t.id.clone());
    let report = app
        .import
        .apply(&mut app.bookmarks, &mut app.groups, target_tab.as_deref())?;
    println!(
        "applied: {} groups, {} bookmarks, {} skipped",
        report.groups_created, report.bookmarks_created, report.skipped
    );
    println!(
        "board now holds {} bookmarks in {} groups",
        app.bookmarks.items().len(),
        app.groups.items().len()
    );
    Ok(())
}

/// Show the validation surfaces: rejected files and URL normalization.
fn demo_validation(app: &mut App) -> Result<(), Box<dyn Error>> {
    println!();
    println!("--- validation ---");

    if let Err(e) = app.import.stage(r#"{"bookmarks": {}, "groups": []}"#) {
        println!("rejected import: {}", e);
    }

    println!(
        "normalized 'example.com' -> '{}'",
        urls::normalize_url("example.com")?
    );
    if let Err(e) = urls::normalize_url("://invalid-url") {
        println!("rejected URL: {}", e);
    }
    Ok(())
}
