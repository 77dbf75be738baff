// ABOUTME: Output formatting helpers for ironcoach-cli
// ABOUTME: Prints command results as JSON or as short human-readable summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use ironcoach::{
    AdaptiveTrainingData, AnalyticsComparison, AnalyticsConfig, InsightReport, ProgressExport,
};
use ironcoach_core::models::UserProfile;
use ironcoach_intelligence::recommendation_engine::{
    baseline_rest_days, AdaptiveRecommendationEngine,
};
use serde::Serialize;

/// Serialize `value` to stdout
pub fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let body = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{body}");
    Ok(())
}

fn or_none(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

/// Text rendering of an insight report
pub fn display_report(report: &InsightReport) {
    let summary = &report.summary;
    println!(
        "\n{} report {} .. {}",
        report.period, report.start_date, report.end_date
    );
    println!("{}", "=".repeat(50));
    println!("   Workouts: {}", summary.total_workouts);
    println!("   Consistency: {:.0}%", summary.consistency_score);
    println!("   Adherence: {:.0}%", summary.adherence_rate);
    println!("   Calories logged: {:.0}", summary.total_calories);
    println!("   Avg protein: {:.1} g/day", summary.avg_protein_intake);
    println!(
        "   Best workout: {}",
        or_none(summary.best_performing_workout.as_deref())
    );
    println!(
        "   Weakest group: {}",
        or_none(summary.weakest_muscle_group.as_deref())
    );

    let trends = &report.trends;
    println!("\nTrends:");
    println!("   Weight change: {:+.1} kg", trends.weight_change);
    println!("   Strength progress: {:+.1}%", trends.strength_progress);
    println!("   Consistency: {}", trends.consistency_trend);

    if !report.untrained_muscle_groups.is_empty() {
        println!(
            "\nUntrained muscle groups: {}",
            report.untrained_muscle_groups.join(", ")
        );
    }

    println!("\nRecommendations:");
    for line in &report.recommendations {
        println!("• {line}");
    }
}

/// Text rendering of a period comparison
pub fn display_comparison(comparison: &AnalyticsComparison) {
    let current = &comparison.current_period;
    let previous = &comparison.previous_period;
    let diff = &comparison.differences;

    println!(
        "\n{} .. {}  vs  {} .. {}",
        current.start_date, current.end_date, previous.start_date, previous.end_date
    );
    println!("{}", "=".repeat(50));
    println!(
        "   Workouts: {} vs {} ({:+})",
        current.workouts, previous.workouts, diff.workouts_change
    );
    println!(
        "   Calories: {:.0} vs {:.0} ({:+.0})",
        current.calories, previous.calories, diff.calories_change
    );
    println!(
        "   Avg weight: {:.1} vs {:.1} ({:+.1} kg)",
        current.avg_weight, previous.avg_weight, diff.weight_change
    );
    println!(
        "   Consistency: {:.0}% vs {:.0}% ({:+.0})",
        current.consistency, previous.consistency, diff.consistency_change
    );
}

/// Text rendering of a progress export
pub fn display_export(export: &ProgressExport) {
    let stats = &export.stats;
    println!("\nProgress for {} ({})", export.user_name, export.period);
    println!("{}", "=".repeat(50));
    println!("   Workouts: {}", stats.total_workouts);
    println!("   Best streak: {}", stats.best_streak);
    println!("   Avg consistency: {:.0}%", stats.avg_consistency);
    println!("   Weight lost: {:.1} kg", stats.total_weight_lost);
    println!("   Training volume: {:.0} kg", stats.total_volume_kg);

    if !export.achievements.is_empty() {
        println!("\nAchievements:");
        for title in &export.achievements {
            println!("• {title}");
        }
    }
    if !export.insights.is_empty() {
        println!("\nInsights:");
        for line in &export.insights {
            println!("• {line}");
        }
    }
}

/// Text rendering of adaptive training data
pub fn display_adaptive(
    data: &AdaptiveTrainingData,
    config: &AnalyticsConfig,
    profile: &UserProfile,
) {
    let adjustments = &data.recommended_adjustments;
    println!("\nAdaptive training data for {}", data.user_id);
    println!("{}", "=".repeat(50));
    println!("   Consistency: {:.0}%", data.consistency_score);
    println!("   Missed sessions: {}", data.missed_sessions);
    println!("   Volume: {:+.0}%", adjustments.volume_change);
    println!("   Intensity: {:+.0}%", adjustments.intensity_change);
    println!("   Rest days: {}", adjustments.rest_days);
    if let Some(split) = adjustments.split_recommendation {
        println!("   Suggested split: {split}");
    }
    if !data.weakest_muscle_groups.is_empty() {
        println!("   Weakest groups: {}", data.weakest_muscle_groups.join(", "));
    }

    let engine = AdaptiveRecommendationEngine::from_config(config);
    for line in engine.render(adjustments, baseline_rest_days(profile)) {
        println!("• {line}");
    }
}
