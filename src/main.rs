use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use powerot_checkout::application::calculator::SummarySlots;
use powerot_checkout::application::page::{CheckoutPage, ItemCard, PageContext};
use powerot_checkout::config::{OverlapPolicy, SimulatorConfig};
use powerot_checkout::domain::line_item::LineItem;
use powerot_checkout::domain::order::OrderRequest;
use powerot_checkout::domain::ports::{SlotHandle, SubmitEvent};
use powerot_checkout::domain::summary::{compute_item_subtotal, compute_order_summary};
use powerot_checkout::interfaces::csv::cart_reader::CartReader;
use powerot_checkout::interfaces::terminal::{SharedWriter, TerminalSlot, shared_writer};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Cart CSV file with `name, prices, quantity` columns
    input: PathBuf,

    /// Run the simulated payment after rendering the summary (text output only)
    #[arg(long)]
    submit: bool,

    /// How to print the result
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// What a repeated submit does to a running payment cycle
    #[arg(long, value_enum, default_value_t = OverlapPolicy::Restart)]
    overlap_policy: OverlapPolicy,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_cart(input: PathBuf) -> Result<Vec<LineItem>> {
    let file = File::open(input).into_diagnostic()?;
    let reader = CartReader::new(file);
    let mut items = Vec::new();
    for item_result in reader.items() {
        match item_result {
            Ok(item) => items.push(item),
            Err(e) => {
                warn!(error = %e, "Skipping cart row");
                eprintln!("Error reading cart row: {}", e);
            }
        }
    }
    Ok(items)
}

fn print_json(items: &[LineItem]) -> Result<()> {
    let summary = compute_order_summary(items);
    let order = match OrderRequest::from_items(items) {
        Ok(order) => Some(order),
        Err(e) => {
            eprintln!("Order payload unavailable: {}", e);
            None
        }
    };
    let output = serde_json::json!({ "summary": summary, "order": order });
    let rendered = serde_json::to_string_pretty(&output).into_diagnostic()?;
    println!("{}", rendered);
    Ok(())
}

fn terminal_slot(name: impl Into<String>, out: &SharedWriter) -> SlotHandle {
    Arc::new(TerminalSlot::new(name, Arc::clone(out)))
}

async fn run_page(items: Vec<LineItem>, submit: bool, config: SimulatorConfig) -> Result<()> {
    let out = shared_writer(io::stdout());

    // The page arrives with its item cells already filled in.
    let cards = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let slot = terminal_slot(format!("item[{}] {}", index, item.name), &out);
            let subtotal = compute_item_subtotal(item.unit_price(), item.quantity());
            slot.set_text(&subtotal.to_string());
            ItemCard::new(item).with_subtotal_slot(slot)
        })
        .collect();

    let context = PageContext {
        cards,
        summary: SummarySlots {
            subtotal: Some(terminal_slot("subtotal", &out)),
            taxes: Some(terminal_slot("taxes", &out)),
            total: Some(terminal_slot("total", &out)),
        },
        has_form: true,
        message_slot: Some(terminal_slot("message", &out)),
    };
    let page = CheckoutPage::init(context, config).await;

    if submit && let Some(handle) = page.on_submit(&mut SubmitEvent::new()) {
        handle.finished().await;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let items = load_cart(cli.input)?;

    match cli.format {
        OutputFormat::Json => {
            if cli.submit {
                warn!("--submit has no effect with JSON output");
            }
            print_json(&items)
        }
        OutputFormat::Text => {
            let config = SimulatorConfig::default().with_overlap_policy(cli.overlap_policy);
            run_page(items, cli.submit, config).await
        }
    }
}
