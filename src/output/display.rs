//! Display functions for command results

use super::formatters::{create_progress_bar, letter_list};
use crate::commands::{BenchmarkResult, CheckResult, MAX_GUESSES, SolveReport};
use colored::Colorize;

/// Print the result of a one-shot solve
pub fn print_solve_report(report: &SolveReport) {
    let constraints = &report.constraints;

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Pattern: {}",
        constraints.pattern().to_uppercase().bright_yellow().bold()
    );
    println!(
        "Present: {}",
        letter_list(&constraints.present_letters()).yellow()
    );
    println!(
        "Absent:  {}",
        letter_list(&constraints.absent_letters()).bright_black()
    );
    println!("{}", "─".repeat(60).cyan());

    if !report.contradictions.is_empty() {
        println!(
            "\n{} {}",
            "⚠ Both required and forbidden:".red().bold(),
            letter_list(&report.contradictions).red()
        );
    }

    if report.total == 0 {
        println!("\n{}", "❌ No words match".red().bold());
        return;
    }

    println!(
        "\n📊 {} of {} words match",
        report.total.to_string().bright_green().bold(),
        report.corpus_size
    );

    let top = report
        .suggestions
        .first()
        .map_or(0.0, |(_, score)| *score);
    for (i, (word, score)) in report.suggestions.iter().enumerate() {
        let bar = create_progress_bar(*score, top, 20);
        println!(
            "  {:>3}. {} [{}] {}",
            i + 1,
            word.to_uppercase().bright_white().bold(),
            bar.green(),
            format!("{score:.2}").bright_black()
        );
    }

    if report.total > report.suggestions.len() {
        println!(
            "  ... and {} more",
            report.total - report.suggestions.len()
        );
    }
}

/// Print the result of a word lookup
pub fn print_check_result(result: &CheckResult) {
    let word = result.input.to_uppercase();

    if let Some(reason) = &result.invalid {
        println!("❌ {} is not a valid word: {reason}", word.red().bold());
    } else if result.in_corpus {
        match result.weight {
            Some(weight) => println!(
                "✅ {} is in the word list (weight {weight})",
                word.green().bold()
            ),
            None => println!("✅ {} is in the word list", word.green().bold()),
        }
    } else {
        println!("❌ {} is not in the word list", word.yellow().bold());
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    if result.total_words == 0 {
        return;
    }

    let pct = |n: usize| n as f64 / result.total_words as f64 * 100.0;
    println!(
        "   Solved:           {} {}",
        result.solved,
        format!("({:.1}%)", pct(result.solved)).green()
    );
    if result.failed > 0 {
        println!(
            "   Failed:           {} {}",
            result.failed,
            format!("({:.1}%)", pct(result.failed)).red()
        );
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let max_count = result.distribution.values().copied().max().unwrap_or(1);
    for guess_count in 1..=MAX_GUESSES {
        let count = result.distribution.get(&guess_count).copied().unwrap_or(0);
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!(
            "   {guess_count}: {} {count:4} ({:5.1}%)",
            bar.green(),
            pct(count)
        );
    }

    if !result.hardest.is_empty() {
        println!("\n😰 {}", "Hardest Words".yellow().bold());
        for (word, guesses) in result.hardest.iter().take(5) {
            println!("   {} ({guesses} guesses)", word.to_uppercase().yellow());
        }
    }
}
