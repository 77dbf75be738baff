// ABOUTME: Analytics commands for ironcoach-cli: report, compare, export and adaptive
// ABOUTME: Resolves default dates against the snapshot and prints results as JSON or text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::CliContext;
use crate::helpers::display::{
    display_adaptive, display_comparison, display_export, display_report, print_json,
};
use crate::OutputFormat;
use anyhow::Result;
use chrono::NaiveDate;
use ironcoach::{DateRange, ReportPeriod};
use tracing::info;

/// Insight report for `period`, over `start..=end` when a start is given
pub async fn report(
    ctx: &CliContext,
    period: ReportPeriod,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Result<()> {
    let end = end.unwrap_or_else(|| ctx.default_end());
    let plan = ctx.plan.as_ref();
    let report = match start {
        Some(start) => {
            ctx.service
                .report_between(&ctx.profile, plan, period, start, end)
                .await?
        }
        None => ctx.service.report(&ctx.profile, plan, period, end).await?,
    };

    match ctx.format {
        OutputFormat::Json => print_json(&report, ctx.pretty),
        OutputFormat::Text => {
            display_report(&report);
            Ok(())
        }
    }
}

/// Compare `start..=end` against `previous`, or against the adjacent period
pub async fn compare(
    ctx: &CliContext,
    start: NaiveDate,
    end: NaiveDate,
    previous: Option<(NaiveDate, NaiveDate)>,
) -> Result<()> {
    let current = DateRange::new(start, end)?;
    let previous = match previous {
        Some((previous_start, previous_end)) => DateRange::new(previous_start, previous_end)?,
        None => current.preceding(),
    };
    info!(
        current = %format!("{}..={}", current.start(), current.end()),
        previous = %format!("{}..={}", previous.start(), previous.end()),
        "Comparing periods"
    );

    let comparison = ctx
        .service
        .compare(&ctx.profile, ctx.plan.as_ref(), current, previous)
        .await?;

    match ctx.format {
        OutputFormat::Json => print_json(&comparison, ctx.pretty),
        OutputFormat::Text => {
            display_comparison(&comparison);
            Ok(())
        }
    }
}

/// Progress export, defaulting to everything in the snapshot
pub async fn export(
    ctx: &CliContext,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Result<()> {
    let end = end.unwrap_or_else(|| ctx.default_end());
    let start = start.unwrap_or_else(|| ctx.default_start(end));
    let range = DateRange::new(start, end)?;

    let export = ctx
        .service
        .export(&ctx.profile, ctx.plan.as_ref(), range)
        .await?;

    match ctx.format {
        OutputFormat::Json => print_json(&export, ctx.pretty),
        OutputFormat::Text => {
            display_export(&export);
            Ok(())
        }
    }
}

/// Adaptive training data over the `days` ending on `end`
pub async fn adaptive(
    ctx: &CliContext,
    user_id: &str,
    days: i64,
    end: Option<NaiveDate>,
) -> Result<()> {
    let end = end.unwrap_or_else(|| ctx.default_end());
    let range = DateRange::ending_on(end, days);

    let data = ctx
        .service
        .adaptive_training_data(user_id, &ctx.profile, ctx.plan.as_ref(), range)
        .await?;

    match ctx.format {
        OutputFormat::Json => print_json(&data, ctx.pretty),
        OutputFormat::Text => {
            display_adaptive(&data, ctx.service.config(), &ctx.profile);
            Ok(())
        }
    }
}
