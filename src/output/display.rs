//! Display functions for command results

use super::formatters::{board_rows, column_header, format_path, score_bar};
use crate::commands::{BenchmarkResult, LongestResult, MatchReport};
use crate::core::{Board, Cell, Position};
use crate::game::{Move, Outcome};
use colored::Colorize;

/// Print the board, highlighting `highlight` cells
pub fn print_board(board: &Board, highlight: &[Position]) {
    println!("{}", column_header(board.size()).bright_black());
    for line in board_rows(board, |pos, cell| match cell {
        Cell::Empty => cell.to_char().to_string().bright_black().to_string(),
        Cell::Filled(_) if highlight.contains(&pos) => {
            cell.to_char().to_string().bright_yellow().bold().to_string()
        }
        Cell::Filled(_) => cell.to_char().to_string(),
    }) {
        println!("{line}");
    }
}

/// Print one accepted move with the board after it
pub fn print_move(number: usize, accepted: &Move, board: &Board, verbose: bool) {
    let claimed = accepted.word.as_ref().map_or_else(
        || "no new word".bright_black().to_string(),
        |path| format!("{} (+{})", path.word().green().bold(), accepted.points()),
    );
    println!(
        "\n{} {}: {} at {} → {}",
        format!("Move {number}").cyan(),
        accepted.player_name.bright_cyan(),
        accepted.placement.letter.to_string().bright_yellow().bold(),
        accepted.placement.position,
        claimed
    );

    if verbose {
        let highlight = accepted
            .word
            .as_ref()
            .map_or_else(|| vec![accepted.placement.position], |p| p.positions().to_vec());
        print_board(board, &highlight);
    }
}

/// Print final standings
pub fn print_outcome(outcome: &Outcome) {
    let top = outcome.top_score();
    println!("\n📊 {}", "Scores:".bright_cyan().bold());
    for standing in &outcome.standings {
        let bar = score_bar(standing.score, top, 30);
        println!("   {:<12} {} {:3}", standing.name, bar.green(), standing.score);
    }

    println!();
    if outcome.is_draw() {
        println!("{}", "🤝 Draw on top score".yellow().bold());
    }
    if let Some(winner) = outcome.winner_standing() {
        println!(
            "{}",
            format!("🏆 And the winner is: {}", winner.name).green().bold()
        );
    }
}

/// Print a finished match
pub fn print_match_report(report: &MatchReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "FINAL BOARD".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    print_board(&report.board, &[]);

    let words: Vec<String> = report
        .moves
        .iter()
        .filter_map(|m| m.word.as_ref().map(|w| w.word().to_string()))
        .collect();
    println!("\n   Moves:       {}", report.moves.len());
    println!("   Turns:       {}", report.turns);
    println!("   Rejections:  {}", report.rejections);
    println!("   Words:       {}", words.join(", "));
    println!("   Time taken:  {:.2}s", report.duration.as_secs_f64());

    print_outcome(&report.outcome);
}

/// Print the longest word found on a board
pub fn print_longest(result: &LongestResult) {
    let highlight = result
        .path
        .as_ref()
        .map(|p| p.positions().to_vec())
        .unwrap_or_default();
    print_board(&result.board, &highlight);
    println!();
    match &result.path {
        Some(path) => println!("Longest word: {}", format_path(path).green().bold()),
        None => println!("{}", "No dictionary word on this board".yellow()),
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.games);
    for (i, name) in result.contenders.iter().enumerate() {
        println!(
            "   {:<17} {} wins ({:5.1}%), avg score {}",
            format!("{name}:"),
            result.wins[i],
            result.win_rate(i) * 100.0,
            format!("{:.2}", result.average_score(i)).bright_yellow().bold()
        );
    }
    println!("   Draws:            {}", result.draws);
    println!("   Average moves:    {:.1}", result.average_moves());
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second());
}
