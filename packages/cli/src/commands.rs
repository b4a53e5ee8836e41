use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;
use sketchport_document::HostContext;
use sketchport_importer::{reset_page, ImportOptions, ImportSession};
use sketchport_portable::{FileKind, PortableFile, PortableNode};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Portable JSON files (at most one document-level and one page-level)
    pub files: Vec<PathBuf>,

    /// Replace the shared color/style pools instead of appending
    #[arg(long)]
    pub replace_shared_assets: bool,

    /// Clear the current page before importing
    #[arg(long)]
    pub reset_page: bool,
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Portable JSON file to inspect
    pub file: PathBuf,
}

/// Host backed by the terminal: toasts go to stdout, alerts stand out
struct TerminalHost;

impl HostContext for TerminalHost {
    fn message(&self, text: &str) {
        println!("{}", text.green());
    }

    fn alert(&self, title: &str, body: &str) {
        println!("{} {}", format!("[{title}]").yellow().bold(), body);
    }

    fn zoom_to_fit(&self) {}
}

fn kind_label(kind: FileKind) -> &'static str {
    match kind {
        FileKind::Document => "document",
        FileKind::Page => "page",
        FileKind::Other => "other (skipped)",
    }
}

pub fn import(args: ImportArgs) -> Result<()> {
    if args.files.is_empty() {
        bail!("no portable files given");
    }

    let mut files = Vec::new();
    for path in &args.files {
        let file = PortableFile::from_path(path)
            .with_context(|| format!("cannot load {}", path.display()))?;
        println!(
            "   {} {} ({})",
            "✓".green(),
            path.display(),
            kind_label(file.kind())
        );
        files.push(file);
    }

    let mut session = ImportSession::new("sketchport-cli").with_options(ImportOptions {
        replace_shared_assets: args.replace_shared_assets,
    });

    if args.reset_page {
        reset_page(session.store_mut().current_page_mut());
    }

    let summary = session.import(&TerminalHost, &files)?;

    println!();
    if let Some(counts) = summary.merged {
        println!(
            "   Shared assets merged: {} colors, {} text styles, {} layer styles",
            counts.colors, counts.text_styles, counts.layer_styles
        );
    }
    println!("   Layers imported: {}", summary.imported_layers);
    for name in summary.failures.names() {
        println!("   {} skipped: {}", "✗".red(), name);
    }

    Ok(())
}

pub fn inspect(args: InspectArgs) -> Result<()> {
    let file = PortableFile::from_path(&args.file)
        .with_context(|| format!("cannot load {}", args.file.display()))?;

    println!(
        "{} {} ({})",
        "File:".bold(),
        args.file.display(),
        kind_label(file.kind())
    );

    if file.kind() == FileKind::Document {
        println!("   Colors: {}", file.assets.colors.len());
        println!("   Text styles: {}", file.layer_text_styles.objects.len());
        println!("   Layer styles: {}", file.layer_styles.objects.len());
    }

    for layer in &file.layers {
        print_node(layer, 1);
    }

    Ok(())
}

fn print_node(node: &PortableNode, depth: usize) {
    println!(
        "{}{} {} [{:.0}x{:.0} at {:.0},{:.0}]",
        "  ".repeat(depth),
        node.class.cyan(),
        node.display_name(),
        node.frame.width,
        node.frame.height,
        node.frame.x,
        node.frame.y,
    );
    for child in &node.layers {
        print_node(child, depth + 1);
    }
}
