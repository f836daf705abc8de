//! CLI blackjack example.

use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjsolo::{Card, GameSession, RoundState, SessionOptions, Suit, TableView};

fn main() {
    println!("Blackjack CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut session = GameSession::new(SessionOptions::default(), seed);

    loop {
        if session.is_bankrupt() {
            print_status(&session.view());
            break;
        }

        let bankroll = session.ledger().bankroll();
        let Some(bet) = prompt_i64(&format!("Bet amount (1-{bankroll}, 0 to quit): ")) else {
            break;
        };

        if bet == 0 {
            println!("Goodbye.");
            break;
        }

        if let Err(err) = session.place_bet(bet) {
            println!("{}", err.notice());
            continue;
        }

        while session.state() == RoundState::PlayerTurn {
            print_table(&session.view());

            let Some(action) = prompt_line("Action: [h]it [s]tand: ") else {
                return;
            };
            let result = match action.as_str() {
                "h" | "hit" => session.hit().map(|_| ()),
                "s" | "stand" => session.stand().map(|_| ()),
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            if let Err(err) = result {
                println!("{}", err.notice());
            }
        }

        let view = session.view();
        print_table(&view);
        print_status(&view);
    }
}

/// Reads one trimmed, lowercased answer. `None` at end of input.
fn read_answer<R: BufRead>(reader: &mut R) -> Option<String> {
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_lowercase()),
    }
}

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();
    read_answer(&mut io::stdin().lock())
}

fn prompt_i64(prompt: &str) -> Option<i64> {
    loop {
        let input = prompt_line(prompt)?;
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<i64>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_table(view: &TableView) {
    let dealer = view
        .dealer_cards
        .iter()
        .map(|card| card.map_or_else(|| "??".to_string(), |card| format_card(&card)))
        .collect::<Vec<_>>()
        .join(" ");
    println!("\nDealer: {dealer} (value {})", view.dealer_total);

    let player = view
        .player_cards
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ");
    println!("Player: {player} (value {})\n", view.player_total);
}

fn print_status(view: &TableView) {
    if !view.message.is_empty() {
        println!("{}", view.message);
    }
    let sign = if view.bankroll_delta >= 0 { "+" } else { "" };
    println!(
        "Money: {} ({sign}{}) | Wins: {} | Losses: {}",
        view.bankroll, view.bankroll_delta, view.wins, view.losses
    );
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs | Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
