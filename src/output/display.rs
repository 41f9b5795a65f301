//! Display functions for command results

use super::formatters::{code_to_emoji, create_progress_bar, entropy_bar};
use crate::commands::{AnalysisResult, BenchmarkResult, GenerateSummary, PositionStats, SolveResult};
use colored::Colorize;

/// Print the result of solving an equation
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    let length = result.target.len();

    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", result.target.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {}: {} {}",
            turn,
            step.equation,
            code_to_emoji(step.code, length)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );

            if let Some(entropy) = step.entropy {
                println!("  Entropy:    {entropy:.3} bits");
                if let Some(expected) = step.expected_remaining {
                    println!("  Expected:   {expected:.1} candidates");
                }

                if step.candidates_after > 0 {
                    let reduction = step.candidates_before as f64 / step.candidates_after as f64;
                    println!(
                        "  Info gained: {:.3} bits ({reduction:.1}x reduction)",
                        reduction.log2()
                    );
                }
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of equation analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ENTROPY ANALYSIS:".bright_cyan().bold(),
        result.equation.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = entropy_bar(result.entropy, (result.total_candidates as f64).log2(), 30);

    println!("\n📊 Against {} possible answers:", result.total_candidates);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.entropy).bright_yellow()
    );
    println!("   Info gain:   {:.1}x reduction", result.expected_reduction);
    println!(
        "   Expected:    {:.1} candidates remain",
        result.expected_remaining
    );
    println!("   Worst case:  {} candidates remain", result.worst_case);
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Equations tested: {}", result.total_equations);
    println!("   Solved:           {}", result.solved);
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
    println!("   Equations/second: {:.1}", result.equations_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let mut counts: Vec<(usize, usize)> = result
        .distribution
        .iter()
        .map(|(&guesses, &count)| (guesses, count))
        .collect();
    counts.sort_unstable();

    for (guess_count, count) in counts {
        let pct = (count as f64 / result.total_equations as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guess_count}: {} {count:4} ({pct:5.1}%)", bar.green());
    }

    if !result.failures.is_empty() {
        println!(
            "\n{} {}",
            "❌ Not solved in 6:".red().bold(),
            result.failures.join(", ")
        );
    }
}

/// Print per-position symbol frequencies
pub fn print_stats(stats: &[PositionStats], total: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SYMBOL FREQUENCIES".bright_cyan().bold(),
        format!("({total} equations)").bright_black()
    );
    println!("{}", "═".repeat(60).cyan());

    for position in stats {
        let ranked: Vec<String> = position
            .ranked()
            .into_iter()
            .map(|(symbol, count)| format!("{}:{count}", symbol.to_string().bright_yellow()))
            .collect();
        println!("  {:2}  {}", position.position + 1, ranked.join("  "));
    }
}

/// Print what a snapshot generation produced
pub fn print_generate_summary(summary: &GenerateSummary) {
    println!(
        "{} {} equations of length {} saved to {} in {:.1}s",
        "✅".green(),
        summary.equations.to_string().bright_yellow().bold(),
        summary.length,
        summary.directory.display(),
        summary.duration.as_secs_f64()
    );
}
