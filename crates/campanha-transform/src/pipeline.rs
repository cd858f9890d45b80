//! The campaign cleaning pipeline.
//!
//! Steps, in order:
//!
//! 1. Normalize the KPI phone column to digits and drop rows left without one.
//! 2. Keep rows whose type column contains one of the type keywords (only when
//!    the column exists).
//! 3. Drop rows whose phone appears in the loyal customer list.
//! 4. Drop rows whose phone appears in the billing panel list.
//! 5. Project to name/type/phone, dedupe by phone (first row wins), rename.
//! 6. Reduce names to an upper-cased first name, or the placeholder.
//! 7. Derive the name lookup: first phone per distinct name.
//!
//! Every step filters a working copy; the inputs are never modified and row
//! order is never changed.
//!
//! # Example
//!
//! ```ignore
//! use campanha_transform::{PipelineOptions, clean_campaign};
//!
//! let tables = clean_campaign(Some(&kpi), Some(&loyal), None, &PipelineOptions::default())?;
//! println!("{} contacts", tables.clean_kpi.height());
//! ```

use campanha_common::{column_text, has_column};
use polars::prelude::DataFrame;
use tracing::{debug, info, info_span, warn};

use crate::columns::{
    KPI_PHONE, KPI_PROJECTION, KPI_TYPE, LOOKUP_PHONE, LOYAL_PHONE, NAME, NAME_PLACEHOLDER,
    NUMBER, PANEL_PHONE, TYPE,
};
use crate::error::{FilterStage, PipelineError, Result};
use crate::frame_ops::{dedupe_by_column, ensure_text_column, filter_rows, set_text_column};
use crate::names::first_name;
use crate::options::PipelineOptions;
use crate::phone::{normalized_column, phone_set};

/// Row counts after each pipeline step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineStats {
    pub kpi_rows: usize,
    pub with_phone: usize,
    pub after_type_filter: usize,
    pub loyal_excluded: usize,
    pub panel_excluded: usize,
    pub after_dedup: usize,
    pub lookup_rows: usize,
}

/// The two tables produced by a successful run.
#[derive(Debug, Clone)]
pub struct CampaignTables {
    /// Filtered, deduplicated KPI rows: `Nome`, `Tipo`, `Numero`.
    pub clean_kpi: DataFrame,
    /// First phone per distinct name: `Nome`, `Telefone`.
    pub name_lookup: DataFrame,
    pub stats: PipelineStats,
}

/// Runs the pipeline with default options, collapsing every failure to absent.
///
/// Returns `(clean_kpi, name_lookup)`; both are `None` whenever the KPI table
/// is unusable. The reason is logged at `warn`.
pub fn process(
    kpi: Option<&DataFrame>,
    loyal: Option<&DataFrame>,
    panel: Option<&DataFrame>,
) -> (Option<DataFrame>, Option<DataFrame>) {
    match clean_campaign(kpi, loyal, panel, &PipelineOptions::default()) {
        Ok(tables) => (Some(tables.clean_kpi), Some(tables.name_lookup)),
        Err(error) => {
            warn!(%error, "campaign pipeline produced no output");
            (None, None)
        }
    }
}

/// Cleans the KPI table against the loyal and panel lists.
///
/// # Errors
///
/// - [`PipelineError::MissingKpi`] / [`PipelineError::EmptyKpi`] for an
///   absent or zero-row KPI table.
/// - [`PipelineError::MissingColumn`] when the KPI phone column is missing.
/// - [`PipelineError::EmptyAfterFiltering`] when no rows survive a checkpoint.
pub fn clean_campaign(
    kpi: Option<&DataFrame>,
    loyal: Option<&DataFrame>,
    panel: Option<&DataFrame>,
    options: &PipelineOptions,
) -> Result<CampaignTables> {
    let span = info_span!("pipeline");
    let _guard = span.enter();

    let kpi = kpi.ok_or(PipelineError::MissingKpi)?;
    if kpi.height() == 0 {
        return Err(PipelineError::EmptyKpi);
    }
    let Some(phones) = normalized_column(kpi, KPI_PHONE) else {
        return Err(PipelineError::MissingColumn {
            column: KPI_PHONE.to_string(),
        });
    };

    let mut stats = PipelineStats {
        kpi_rows: kpi.height(),
        ..PipelineStats::default()
    };

    let mut working = kpi.clone();
    let keep: Vec<bool> = phones.iter().map(|phone| !phone.is_empty()).collect();
    set_text_column(&mut working, KPI_PHONE, phones)?;
    working = filter_rows(&working, &keep)?;
    stats.with_phone = working.height();

    working = filter_by_type(&working, options)?;
    stats.after_type_filter = working.height();

    let before = working.height();
    working = exclude_phones(&working, loyal, LOYAL_PHONE, "loyal")?;
    stats.loyal_excluded = before - working.height();

    let before = working.height();
    working = exclude_phones(&working, panel, PANEL_PHONE, "panel")?;
    stats.panel_excluded = before - working.height();

    if working.height() == 0 {
        return Err(PipelineError::EmptyAfterFiltering {
            stage: FilterStage::Exclusion,
        });
    }

    let projection: Vec<&str> = KPI_PROJECTION
        .iter()
        .map(|(source, _)| *source)
        .filter(|source| has_column(&working, source))
        .collect();
    working = working.select(projection)?;
    working = dedupe_by_column(&working, KPI_PHONE)?;
    stats.after_dedup = working.height();

    if working.height() == 0 {
        return Err(PipelineError::EmptyAfterFiltering {
            stage: FilterStage::Deduplication,
        });
    }

    for (source, target) in KPI_PROJECTION {
        if has_column(&working, source) {
            working.rename(source, target.into())?;
        }
    }
    if !has_column(&working, NUMBER) {
        return Err(PipelineError::MissingColumn {
            column: KPI_PHONE.to_string(),
        });
    }
    ensure_text_column(&mut working, TYPE)?;

    let names: Vec<String> = match column_text(&working, NAME) {
        Some(raw) => raw.iter().map(String::as_str).map(first_name).collect(),
        None => vec![NAME_PLACEHOLDER.to_string(); working.height()],
    };
    set_text_column(&mut working, NAME, names)?;

    let name_lookup = derive_name_lookup(&working)?;
    stats.lookup_rows = name_lookup.height();

    info!(
        kpi_rows = stats.kpi_rows,
        with_phone = stats.with_phone,
        after_type_filter = stats.after_type_filter,
        loyal_excluded = stats.loyal_excluded,
        panel_excluded = stats.panel_excluded,
        after_dedup = stats.after_dedup,
        lookup_rows = stats.lookup_rows,
        "campaign pipeline complete"
    );

    Ok(CampaignTables {
        clean_kpi: working,
        name_lookup,
        stats,
    })
}

fn filter_by_type(df: &DataFrame, options: &PipelineOptions) -> Result<DataFrame> {
    let matcher = options.type_matcher();
    if !matcher.is_enabled() {
        debug!("type filter disabled");
        return Ok(df.clone());
    }
    let Some(values) = column_text(df, KPI_TYPE) else {
        debug!(column = KPI_TYPE, "type column absent, skipping type filter");
        return Ok(df.clone());
    };
    let keep: Vec<bool> = values.iter().map(|value| matcher.matches(value)).collect();
    filter_rows(df, &keep)
}

/// Drops KPI rows whose (already normalized) phone is in `list`'s phone column.
///
/// Skipped when the list is absent, empty or lacks the phone column.
fn exclude_phones(
    kpi: &DataFrame,
    list: Option<&DataFrame>,
    column: &str,
    label: &str,
) -> Result<DataFrame> {
    let Some(list) = list.filter(|df| df.height() > 0) else {
        debug!(list = label, "exclusion list absent or empty");
        return Ok(kpi.clone());
    };
    let Some(excluded) = phone_set(list, column) else {
        debug!(list = label, column, "exclusion list has no phone column");
        return Ok(kpi.clone());
    };
    let Some(phones) = column_text(kpi, KPI_PHONE) else {
        return Ok(kpi.clone());
    };
    let keep: Vec<bool> = phones.iter().map(|phone| !excluded.contains(phone)).collect();
    filter_rows(kpi, &keep)
}

fn derive_name_lookup(clean_kpi: &DataFrame) -> Result<DataFrame> {
    let lookup = clean_kpi.select([NAME, NUMBER])?;
    let mut lookup = dedupe_by_column(&lookup, NAME)?;
    lookup.rename(NUMBER, LOOKUP_PHONE.into())?;
    Ok(lookup)
}
