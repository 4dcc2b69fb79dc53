mod api;
mod config;
mod error;
mod fees;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tabled::{settings::Style, Table, Tabled};

use crate::api::{ApiClient, ParentFeesData};
use crate::config::{
    children_cache_file, config_dir, load_children, load_config, save_children, Config,
    CONFIG_TEMPLATE,
};
use crate::error::{FeesError, Result};
use crate::fees::{normalize, summarize, FeeItem, FeeStatus, FinancialSummary};

#[derive(Parser)]
#[command(name = "schoolfees")]
#[command(version, about = "CLI dashboard for school fees and payments", long_about = None)]
struct Cli {
    /// Path to config directory (default: ~/.schoolfees or XDG config)
    #[arg(short = 'C', long, global = true)]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize config directory with a template config file
    Init,

    /// List fee records for the logged-in parent account
    Fees {
        /// Filter by status (paid, pending, overdue)
        #[arg(short, long)]
        status: Option<String>,

        /// Filter by child name (case-insensitive substring)
        #[arg(long)]
        child: Option<String>,
    },

    /// Show the financial summary for the logged-in parent account
    Summary,

    /// Show one parent's fees by id (admin endpoint)
    Parent {
        /// Parent identifier
        id: String,
    },

    /// List raw payment transactions (admin endpoint)
    Payments {
        /// Page number (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: u32,

        /// Records per page
        #[arg(short, long, default_value_t = 20)]
        limit: u32,

        /// Filter by payment status (pending, approved, failed)
        #[arg(long)]
        payment_status: Option<String>,
    },

    /// List children known to this account (cached locally)
    Children,

    /// Show config and cache information
    Status {
        /// Show resolved file paths
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Determine config directory
    let cfg_dir = match cli.config_dir {
        Some(p) => p,
        None => config_dir()?,
    };

    match cli.command {
        Commands::Init => cmd_init(&cfg_dir),
        Commands::Fees { status, child } => cmd_fees(&cfg_dir, status, child),
        Commands::Summary => cmd_summary(&cfg_dir),
        Commands::Parent { id } => cmd_parent(&cfg_dir, &id),
        Commands::Payments {
            page,
            limit,
            payment_status,
        } => cmd_payments(&cfg_dir, page, limit, payment_status),
        Commands::Children => cmd_children(&cfg_dir),
        Commands::Status { verbose } => cmd_status(&cfg_dir, verbose),
    }
}

/// Initialize config directory with a template config file
fn cmd_init(cfg_dir: &PathBuf) -> Result<()> {
    use std::fs;

    if cfg_dir.exists() {
        return Err(FeesError::AlreadyInitialized(cfg_dir.clone()));
    }

    fs::create_dir_all(cfg_dir)?;
    fs::write(cfg_dir.join("config.toml"), CONFIG_TEMPLATE)?;

    println!("Initialized schoolfees config at: {}", cfg_dir.display());
    println!();
    println!("Next steps:");
    println!(
        "  1. Point at your school backend:  $EDITOR {}/config.toml",
        cfg_dir.display()
    );
    println!("  2. Paste the bearer token from your dashboard login");
    println!();
    println!("Then check your fees:");
    println!("  schoolfees fees");

    Ok(())
}

// Table row structs for tabled
#[derive(Tabled)]
struct FeeRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "CHILD")]
    child: String,
    #[tabled(rename = "CLASS")]
    class: String,
    #[tabled(rename = "FEE")]
    fee: String,
    #[tabled(rename = "AMOUNT")]
    amount: String,
    #[tabled(rename = "DUE")]
    due: String,
    #[tabled(rename = "STATUS")]
    status: String,
}

#[derive(Tabled)]
struct ChildRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "CLASS")]
    class: String,
}

#[derive(Tabled)]
struct PaymentRow {
    #[tabled(rename = "#")]
    index: u64,
    #[tabled(rename = "STUDENT")]
    student: String,
    #[tabled(rename = "AMOUNT")]
    amount: String,
    #[tabled(rename = "DATE")]
    date: String,
    #[tabled(rename = "METHOD")]
    method: String,
    #[tabled(rename = "STATUS")]
    status: String,
}

fn format_whole_money(value: f64, currency_symbol: &str) -> String {
    let rounded = value.round() as i64;
    let grouped = format_grouped_int(rounded);
    format!("{}{:>7}", currency_symbol, grouped)
}

fn format_grouped_int(value: i64) -> String {
    let negative = value < 0;
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    let mut grouped: String = out.chars().rev().collect();
    if negative {
        grouped.insert(0, '-');
    }
    grouped
}

/// Splice TOTAL / (-) PAID / (=) OWING rows under the fees table, aligned
/// to its AMOUNT column. Expects the seven-column FeeRow layout; any other
/// table is returned untouched.
fn add_financial_footer(table: &str, total: &str, paid: &str, owing: &str) -> String {
    let lines: Vec<&str> = table.lines().collect();
    if lines.len() < 4 {
        return table.to_string();
    }

    // Parse the top border to discover column widths
    let top = lines[0];
    let Some(inner) = top.strip_prefix('╭').and_then(|s| s.strip_suffix('╮')) else {
        return table.to_string();
    };

    let widths: Vec<usize> = inner.split('┬').map(|p| p.chars().count()).collect();
    if widths.len() < 7 {
        return table.to_string();
    }

    // Merge #, CHILD, CLASS, FEE into one label cell; keep AMOUNT; drop DUE
    // and STATUS
    let left_width = widths[0] + widths[1] + widths[2] + widths[3] + 3;
    let amount_width = widths[4];
    let due_width = widths[5];
    let status_width = widths[6];

    let rows = [("TOTAL", total), ("(-) PAID", paid), ("(=) OWING", owing)];

    // Strip the original bottom border and start building
    let mut out = lines[..lines.len() - 1].join("\n");
    out.push('\n');

    // First separator: merge left 4 columns, keep AMOUNT, close off DUE+STATUS
    out.push_str(&format!(
        "├{}┴{}┴{}┴{}┼{}┼{}┴{}╯\n",
        "─".repeat(widths[0]),
        "─".repeat(widths[1]),
        "─".repeat(widths[2]),
        "─".repeat(widths[3]),
        "─".repeat(amount_width),
        "─".repeat(due_width),
        "─".repeat(status_width),
    ));

    // Summary rows with separators between them
    for (idx, (label, value)) in rows.iter().enumerate() {
        out.push_str(&format!(
            "│ {:>left$} │ {:>amount$} │\n",
            label,
            value,
            left = left_width - 2,
            amount = amount_width - 2
        ));
        if idx < rows.len() - 1 {
            out.push_str(&format!(
                "├{}┼{}┤\n",
                "─".repeat(left_width),
                "─".repeat(amount_width)
            ));
        }
    }

    // Bottom border
    out.push_str(&format!(
        "╰{}┴{}╯",
        "─".repeat(left_width),
        "─".repeat(amount_width)
    ));

    out
}

fn fee_rows(items: &[&FeeItem], currency_symbol: &str) -> Vec<FeeRow> {
    items
        .iter()
        .enumerate()
        .map(|(idx, item)| FeeRow {
            index: idx + 1,
            child: item.child_name.clone(),
            class: item.child_class.clone(),
            fee: item.fee_name.clone(),
            amount: format_whole_money(item.amount, currency_symbol),
            due: item
                .due_date
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".to_string()),
            status: item.status.to_string(),
        })
        .collect()
}

/// Render the fee table plus summary lines shared by `fees` and `parent`.
fn print_fee_table(
    data: &ParentFeesData,
    items: &[&FeeItem],
    summary: &FinancialSummary,
    config: &Config,
) {
    let symbol = &config.display.currency_symbol;

    let rows = fee_rows(items, symbol);
    let table = Table::new(rows).with(Style::rounded()).to_string();

    // The footer always reflects the full billable set, matching the
    // summary cards in the original dashboards, even when the table rows
    // are filtered.
    let total = format_whole_money(summary.total_fees, symbol);
    let paid = format_whole_money(summary.total_paid, symbol);
    let owing = format_whole_money(summary.total_owing, symbol);
    let table = add_financial_footer(&table, &total, &paid, &owing);

    println!("{table}");
    println!();
    println!(
        "Total: {} fee record(s), {} child(ren)",
        data.student_fee.past.len() + data.student_fee.current.len()
            + data.student_fee.upcoming.len(),
        data.parent.children.len()
    );

    if summary.overdue_count > 0 {
        println!(
            "Overdue: {} across {} past term(s)",
            format_whole_money(summary.overdue_amount, symbol).trim(),
            summary.overdue_count
        );
    }
}

/// List fee records for the logged-in parent account
fn cmd_fees(cfg_dir: &PathBuf, status: Option<String>, child: Option<String>) -> Result<()> {
    if !cfg_dir.exists() {
        return Err(FeesError::ConfigNotFound(cfg_dir.clone()));
    }

    // Validate filters before hitting the network
    let status_filter = status.map(|s| s.parse::<FeeStatus>()).transpose()?;
    let child_filter = child.map(|c| c.to_lowercase());

    let config = load_config(cfg_dir)?;
    let client = ApiClient::new(&config.api);
    let data = client.parent_fees()?;

    // Refresh the local children cache on every successful fetch
    save_children(cfg_dir, &data.parent.children)?;

    let today = chrono::Local::now().date_naive();
    let items = normalize(&data.student_fee, &data.parent.children, today);
    let summary = summarize(&data.student_fee);

    let shown: Vec<&FeeItem> = items
        .iter()
        .filter(|item| status_filter.map_or(true, |s| item.status == s))
        .filter(|item| {
            child_filter
                .as_ref()
                .map_or(true, |c| item.child_name.to_lowercase().contains(c))
        })
        .collect();

    if shown.is_empty() {
        println!("No fee records found with the given filters.");
        return Ok(());
    }

    print_fee_table(&data, &shown, &summary, &config);

    Ok(())
}

/// Show the financial summary for the logged-in parent account
fn cmd_summary(cfg_dir: &PathBuf) -> Result<()> {
    if !cfg_dir.exists() {
        return Err(FeesError::ConfigNotFound(cfg_dir.clone()));
    }

    let config = load_config(cfg_dir)?;
    let client = ApiClient::new(&config.api);
    let data = client.parent_fees()?;

    save_children(cfg_dir, &data.parent.children)?;

    let summary = summarize(&data.student_fee);
    print_summary_block(&data, &summary, &config);

    Ok(())
}

fn print_summary_block(data: &ParentFeesData, summary: &FinancialSummary, config: &Config) {
    let symbol = &config.display.currency_symbol;

    println!("Financial Summary");
    println!("{}", "-".repeat(50));

    let parent_name = data.parent.full_name();
    if !parent_name.is_empty() {
        println!("Parent:        {parent_name}");
    }
    println!("Children:      {}", data.parent.children.len());
    println!(
        "Total fees:    {}",
        format_whole_money(summary.total_fees, symbol)
    );
    println!(
        "Total paid:    {}   ({} term(s) with payments)",
        format_whole_money(summary.total_paid, symbol),
        summary.paid_count
    );
    println!(
        "Outstanding:   {}   ({} unpaid term(s))",
        format_whole_money(summary.total_owing, symbol),
        summary.unpaid_count
    );
    println!(
        "Overdue:       {}   ({} past term(s))",
        format_whole_money(summary.overdue_amount, symbol),
        summary.overdue_count
    );
}

/// Show one parent's fees by id (admin endpoint)
fn cmd_parent(cfg_dir: &PathBuf, parent_id: &str) -> Result<()> {
    if !cfg_dir.exists() {
        return Err(FeesError::ConfigNotFound(cfg_dir.clone()));
    }

    let config = load_config(cfg_dir)?;
    let client = ApiClient::new(&config.api);
    let data = client.parent_detail(parent_id)?;

    let parent_name = data.parent.full_name();
    if parent_name.is_empty() {
        println!("Parent {parent_id}");
    } else {
        println!("Parent {parent_name} ({parent_id})");
    }
    if !data.parent.email.is_empty() {
        println!("Email: {}", data.parent.email);
    }
    println!();

    let today = chrono::Local::now().date_naive();
    let items = normalize(&data.student_fee, &data.parent.children, today);
    let summary = summarize(&data.student_fee);

    if items.is_empty() {
        println!("No fee records for this parent.");
        return Ok(());
    }

    let shown: Vec<&FeeItem> = items.iter().collect();
    print_fee_table(&data, &shown, &summary, &config);

    Ok(())
}

/// List raw payment transactions (admin endpoint)
fn cmd_payments(
    cfg_dir: &PathBuf,
    page: u32,
    limit: u32,
    payment_status: Option<String>,
) -> Result<()> {
    if !cfg_dir.exists() {
        return Err(FeesError::ConfigNotFound(cfg_dir.clone()));
    }

    // Validate status filter before hitting the network
    if let Some(ref s) = payment_status {
        if s != "pending" && s != "approved" && s != "failed" {
            return Err(FeesError::InvalidPaymentStatusFilter(s.clone()));
        }
    }

    let config = load_config(cfg_dir)?;
    let client = ApiClient::new(&config.api);
    let result = client.payments(page, limit, payment_status.as_deref())?;

    if result.payments.is_empty() {
        println!("No payments found.");
        return Ok(());
    }

    let symbol = &config.display.currency_symbol;
    let offset = (page.max(1) as u64 - 1) * limit as u64;

    let rows: Vec<PaymentRow> = result
        .payments
        .iter()
        .enumerate()
        .map(|(idx, p)| PaymentRow {
            index: offset + idx as u64 + 1,
            student: p
                .student
                .as_ref()
                .map(|s| s.full_name())
                .unwrap_or_default(),
            amount: format_whole_money(p.amount, symbol),
            date: p.payment_date.clone(),
            method: p.payment_method.clone(),
            status: p.status.to_uppercase(),
        })
        .collect();

    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!("{table}");

    println!();
    println!(
        "Page {} of {} ({} record(s) total)",
        result.page.max(page),
        result.total_pages.max(1),
        result.total_records
    );

    Ok(())
}

/// List children known to this account (cached locally)
fn cmd_children(cfg_dir: &PathBuf) -> Result<()> {
    if !cfg_dir.exists() {
        return Err(FeesError::ConfigNotFound(cfg_dir.clone()));
    }

    let mut children = load_children(cfg_dir)?;

    // Cold cache: fall back to a fetch when the backend is configured
    if children.is_empty() {
        if !cfg_dir.join("config.toml").exists() {
            return Err(FeesError::NoChildrenCache);
        }
        let config = load_config(cfg_dir)?;
        let client = ApiClient::new(&config.api);
        let data = client.parent_fees()?;
        save_children(cfg_dir, &data.parent.children)?;
        children = data.parent.children;
    }

    if children.is_empty() {
        println!("No children on this account.");
        return Ok(());
    }

    let rows: Vec<ChildRow> = children
        .iter()
        .enumerate()
        .map(|(idx, child)| ChildRow {
            index: idx + 1,
            name: child.full_name(),
            class: child
                .class
                .as_ref()
                .map(|c| c.class_name.clone())
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| "-".to_string()),
        })
        .collect();

    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!("{table}");

    Ok(())
}

/// Show config and cache information
fn cmd_status(cfg_dir: &PathBuf, verbose: bool) -> Result<()> {
    if !cfg_dir.exists() {
        return Err(FeesError::ConfigNotFound(cfg_dir.clone()));
    }

    let config = load_config(cfg_dir)?;
    let children = load_children(cfg_dir)?;

    println!("Schoolfees Status");
    println!("{}", "-".repeat(50));
    println!("Config directory: {}", cfg_dir.display());
    println!("API base URL:     {}", config.api.base_url);
    println!(
        "Token:            {}",
        if config.api.token.is_empty() {
            "not set"
        } else {
            "configured"
        }
    );
    println!("Children cached:  {}", children.len());

    if verbose {
        println!();
        println!("Config file:      {}", cfg_dir.join("config.toml").display());
        println!(
            "Children cache:   {}",
            children_cache_file(cfg_dir).display()
        );
    }

    Ok(())
}
