//! FILENAME: app/src/cli.rs
//! PURPOSE: Command line surface for the screener.
//! CONTEXT: Each subcommand maps onto the session and persistence layers.
//! Filter flags are shared between subcommands through `FilterArgs`, which
//! converts raw flag text into engine filters. Numeric bounds are given in
//! display units (億円 for currency fields, percent for percentage fields)
//! and rescaled through `Field::input_scale`.

use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use model::{
    format_currency, format_number, format_percentage, format_value, Field, FieldKind, StockRecord,
};
use persistence::{build_manifest, combine_datasets, load_records, save_manifest, save_records};
use screener_engine::{
    apply, collect_facets, decode_filters, encode_filters, summarize, FacetValue, RangeFilter,
    ScreenFilters, SortConfig, SortDirection, DEFAULT_ITEMS_PER_PAGE, ITEMS_PER_PAGE_OPTIONS,
};

use crate::session::ScreenerSession;

// ============================================================================
// ARGUMENT TYPES
// ============================================================================

/// Stock screener for Japanese listed companies.
#[derive(Parser, Debug)]
#[command(name = "kabuscreen", version, about)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Filter, sort and paginate a dataset, printing one page as a table.
    Screen(ScreenArgs),
    /// List the distinct industries, markets and prefectures in a dataset.
    Facets(FacetsArgs),
    /// Print dataset-wide averages and the match count for a filter set.
    Summary(SummaryArgs),
    /// Encode filter flags as a shareable query string, or decode one.
    Share(ShareArgs),
    /// Merge several dataset CSVs into one, deduplicated by ticker code.
    Combine(CombineArgs),
    /// Scan a directory of dataset CSVs and write a manifest JSON.
    Manifest(ManifestArgs),
}

/// Filter flags shared by every subcommand that screens records.
#[derive(clap::Args, Debug, Default)]
pub struct FilterArgs {
    /// Company name substring (case insensitive).
    #[arg(long, value_name = "TEXT")]
    pub name: Option<String>,

    /// Keep only these industries; repeat the flag for multiple values.
    #[arg(long = "industry", value_name = "VALUE")]
    pub industries: Vec<String>,

    /// Keep only these markets; repeat the flag for multiple values.
    #[arg(long = "market", value_name = "VALUE")]
    pub markets: Vec<String>,

    /// Keep only these prefectures; repeat the flag for multiple values.
    #[arg(long = "prefecture", value_name = "VALUE")]
    pub prefectures: Vec<String>,

    /// Lower bound on a numeric field, e.g. --min marketCap=100.
    #[arg(long = "min", value_name = "FIELD=VALUE")]
    pub minimums: Vec<String>,

    /// Upper bound on a numeric field, e.g. --max pbr=1.
    #[arg(long = "max", value_name = "FIELD=VALUE")]
    pub maximums: Vec<String>,
}

impl FilterArgs {
    /// Convert raw flag values into engine filters.
    pub fn to_filters(&self) -> Result<ScreenFilters, String> {
        let mut filters = ScreenFilters::new();
        if let Some(name) = &self.name {
            filters.company_name = name.clone();
        }
        filters.industries = self.industries.iter().cloned().collect();
        filters.markets = self.markets.iter().cloned().collect();
        filters.prefectures = self.prefectures.iter().cloned().collect();

        for expr in &self.minimums {
            let (field, value) = parse_bound(expr)?;
            let current = filters.range(field).unwrap_or_default();
            filters.set_range(field, RangeFilter::new(Some(value), current.max));
        }
        for expr in &self.maximums {
            let (field, value) = parse_bound(expr)?;
            let current = filters.range(field).unwrap_or_default();
            filters.set_range(field, RangeFilter::new(current.min, Some(value)));
        }
        Ok(filters)
    }
}

/// Parse a `field=value` bound expression against a numeric field.
fn parse_bound(expr: &str) -> Result<(Field, f64), String> {
    let (key, raw) = expr
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=VALUE, got \"{}\"", expr))?;
    let key = key.trim();
    let field =
        Field::from_query_key(key).ok_or_else(|| format!("unknown field \"{}\"", key))?;
    if !field.is_numeric() {
        return Err(format!("field \"{}\" does not take numeric bounds", key));
    }
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("invalid number \"{}\" for field \"{}\"", raw.trim(), key))?;
    Ok((field, value))
}

/// Sort direction flag.
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum OrderOpt {
    /// Smallest values first.
    Asc,
    /// Largest values first.
    Desc,
}

impl From<OrderOpt> for SortDirection {
    fn from(opt: OrderOpt) -> Self {
        match opt {
            OrderOpt::Asc => SortDirection::Ascending,
            OrderOpt::Desc => SortDirection::Descending,
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct ScreenArgs {
    /// Dataset CSV to screen.
    #[arg(short, long, value_name = "CSV")]
    pub data: PathBuf,

    #[command(flatten)]
    pub filters: FilterArgs,

    /// Field to sort by, as a query key (e.g. marketCap).
    #[arg(long, value_name = "FIELD")]
    pub sort_by: Option<String>,

    /// Sort direction; only used together with --sort-by.
    #[arg(long, value_enum, default_value_t = OrderOpt::Asc)]
    pub order: OrderOpt,

    /// Page to print, starting at 1.
    #[arg(long, default_value_t = 1, value_name = "N")]
    pub page: usize,

    /// Rows per page.
    #[arg(long, default_value_t = DEFAULT_ITEMS_PER_PAGE, value_name = "N")]
    pub page_size: usize,

    /// Comma separated query keys to print instead of the default columns.
    #[arg(long, value_name = "FIELDS")]
    pub columns: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct FacetsArgs {
    /// Dataset CSV to scan.
    #[arg(short, long, value_name = "CSV")]
    pub data: PathBuf,
}

#[derive(clap::Args, Debug)]
pub struct SummaryArgs {
    /// Dataset CSV to summarize.
    #[arg(short, long, value_name = "CSV")]
    pub data: PathBuf,

    #[command(flatten)]
    pub filters: FilterArgs,
}

#[derive(clap::Args, Debug)]
pub struct ShareArgs {
    /// Decode an existing query string instead of encoding the flags.
    #[arg(long, value_name = "QUERY")]
    pub decode: Option<String>,

    #[command(flatten)]
    pub filters: FilterArgs,
}

#[derive(clap::Args, Debug)]
pub struct CombineArgs {
    /// Input CSVs, oldest first; later files win on ticker conflicts.
    #[arg(required = true, value_name = "CSV")]
    pub inputs: Vec<PathBuf>,

    /// Output path for the combined CSV.
    #[arg(short, long, value_name = "CSV")]
    pub out: PathBuf,
}

#[derive(clap::Args, Debug)]
pub struct ManifestArgs {
    /// Directory containing the dataset CSVs.
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Output path for the manifest JSON.
    #[arg(short, long, value_name = "JSON", default_value = "files.json")]
    pub out: PathBuf,
}

// ============================================================================
// DISPATCH
// ============================================================================

/// Run the selected subcommand.
pub fn dispatch(cli: Cli) -> Result<(), String> {
    match cli.command {
        Command::Screen(args) => handle_screen(args),
        Command::Facets(args) => handle_facets(args),
        Command::Summary(args) => handle_summary(args),
        Command::Share(args) => handle_share(args),
        Command::Combine(args) => handle_combine(args),
        Command::Manifest(args) => handle_manifest(args),
    }
}

fn load(path: &Path) -> Result<Vec<StockRecord>, String> {
    let records = load_records(path).map_err(|e| format!("{}: {}", path.display(), e))?;
    crate::log_info!("DATA", "Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

/// Columns printed by `screen` when --columns is not given.
const DEFAULT_COLUMNS: [Field; 7] = [
    Field::CompanyName,
    Field::TickerCode,
    Field::Industry,
    Field::Market,
    Field::MarketCap,
    Field::Pbr,
    Field::Roe,
];

fn handle_screen(args: ScreenArgs) -> Result<(), String> {
    if !ITEMS_PER_PAGE_OPTIONS.contains(&args.page_size) {
        return Err(format!(
            "page size must be one of {:?}",
            ITEMS_PER_PAGE_OPTIONS
        ));
    }
    let columns = resolve_columns(args.columns.as_deref())?;
    let records = load(&args.data)?;

    let mut session = ScreenerSession::new(records);
    session.set_filters(args.filters.to_filters()?);
    if let Some(key) = args.sort_by.as_deref() {
        let field = Field::from_query_key(key)
            .ok_or_else(|| format!("unknown sort field \"{}\"", key))?;
        session.set_sort(Some(SortConfig::new(field, args.order.into())));
    }
    session.set_page_size(args.page_size);
    session.set_page(args.page);

    let view = session.view();
    print_table(&columns, &view.records);
    println!();
    println!(
        "{} of {} records match; page {} of {}",
        view.summary.filtered_count,
        view.summary.total_count,
        view.pagination.current_page,
        view.pagination.page_count(),
    );
    Ok(())
}

fn resolve_columns(list: Option<&str>) -> Result<Vec<Field>, String> {
    let list = match list {
        Some(list) => list,
        None => return Ok(DEFAULT_COLUMNS.to_vec()),
    };
    let mut columns = Vec::new();
    for key in list.split(',') {
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        let field =
            Field::from_query_key(key).ok_or_else(|| format!("unknown field \"{}\"", key))?;
        columns.push(field);
    }
    if columns.is_empty() {
        return Err("no columns selected".to_string());
    }
    Ok(columns)
}

fn handle_facets(args: FacetsArgs) -> Result<(), String> {
    let records = load(&args.data)?;
    let facets = collect_facets(&records);
    print_facet_group(Field::Industry.label(), &facets.industries);
    print_facet_group(Field::Market.label(), &facets.markets);
    print_facet_group(Field::Prefecture.label(), &facets.prefectures);
    Ok(())
}

fn print_facet_group(label: &str, values: &[FacetValue]) {
    println!("{} ({})", label, values.len());
    for facet in values {
        println!("  {}  {}", facet.value, facet.count);
    }
    println!();
}

fn handle_summary(args: SummaryArgs) -> Result<(), String> {
    let records = load(&args.data)?;
    let filters = args.filters.to_filters()?;
    let visible = apply(&records, &filters, None);
    let summary = summarize(&records, visible.len());

    println!("Total records:    {}", summary.total_count);
    println!("Matching records: {}", summary.filtered_count);
    println!(
        "Average {}: {}",
        Field::MarketCap.label(),
        format_currency(summary.avg_market_cap)
    );
    println!(
        "Average {}: {}",
        Field::Pbr.label(),
        format_number(summary.avg_pbr, FieldKind::Ratio)
    );
    println!(
        "Average {}: {}",
        Field::Roe.label(),
        format_percentage(summary.avg_roe, 2)
    );
    Ok(())
}

fn handle_share(args: ShareArgs) -> Result<(), String> {
    if let Some(query) = args.decode.as_deref() {
        let filters = decode_filters(query);
        let json = serde_json::to_string_pretty(&filters).map_err(|e| e.to_string())?;
        println!("{}", json);
        return Ok(());
    }
    let filters = args.filters.to_filters()?;
    println!("{}", encode_filters(&filters));
    Ok(())
}

fn handle_combine(args: CombineArgs) -> Result<(), String> {
    let mut datasets = Vec::with_capacity(args.inputs.len());
    for path in &args.inputs {
        datasets.push(load(path)?);
    }
    let combined = combine_datasets(datasets);
    save_records(&args.out, &combined).map_err(|e| format!("{}: {}", args.out.display(), e))?;
    crate::log_info!(
        "DATA",
        "Combined {} files into {} records",
        args.inputs.len(),
        combined.len()
    );
    println!("Wrote {} records to {}", combined.len(), args.out.display());
    Ok(())
}

fn handle_manifest(args: ManifestArgs) -> Result<(), String> {
    let manifest =
        build_manifest(&args.dir).map_err(|e| format!("{}: {}", args.dir.display(), e))?;
    save_manifest(&args.out, &manifest).map_err(|e| format!("{}: {}", args.out.display(), e))?;
    println!(
        "Indexed {} datasets into {}",
        manifest.total_files,
        args.out.display()
    );
    if let Some(latest) = manifest.latest() {
        println!("Latest: {} ({})", latest.display_name, latest.last_modified);
    }
    Ok(())
}

// ============================================================================
// TABLE OUTPUT
// ============================================================================

fn print_table(columns: &[Field], records: &[&StockRecord]) {
    let headers: Vec<String> = columns.iter().map(|f| f.label().to_string()).collect();
    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|record| {
            columns
                .iter()
                .map(|&field| format_value(&record.value(field), field.kind()))
                .collect()
        })
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| display_width(h)).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(display_width(cell));
        }
    }

    print_row(&headers, &widths, columns);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    print_row(&rule, &widths, columns);
    for row in &rows {
        print_row(row, &widths, columns);
    }
}

fn print_row(cells: &[String], widths: &[usize], columns: &[Field]) {
    let mut line = String::new();
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        let pad = widths[i].saturating_sub(display_width(cell));
        // Numeric columns read best right-aligned.
        if columns[i].is_numeric() {
            line.push_str(&" ".repeat(pad));
            line.push_str(cell);
        } else {
            line.push_str(cell);
            line.push_str(&" ".repeat(pad));
        }
    }
    println!("{}", line.trim_end());
}

/// Terminal cell width; CJK codepoints occupy two columns.
fn display_width(text: &str) -> usize {
    text.chars().map(|c| if c < '\u{2E80}' { 1 } else { 2 }).sum()
}

// ============================================================================
// TESTS
// ============================================================================
